pub mod aggregate;

pub use aggregate::{Setting, SettingUpdate, KNOWN_KEYS};
