//! Article details (MVVM)
//!
//! - view_model.rs: ArticleDetailsVm, edit and publish commands
//! - view.rs: ArticleDetails component

mod view;
mod view_model;

pub use view::ArticleDetails;
