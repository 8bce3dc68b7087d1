pub mod api;
pub mod keyword_selection;
pub mod ui;
pub mod workflow;
