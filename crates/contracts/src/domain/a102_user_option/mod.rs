pub mod aggregate;

pub use aggregate::{OptionCategory, UserOption, UserOptionCreate, UserOptionUpdate};
