pub mod details;
pub mod keywords;
pub mod list;
pub mod new;
pub mod progress;
pub mod status_badge;
