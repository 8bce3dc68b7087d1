//! Article creation form (MVVM)
//!
//! - view_model.rs: ArticleNewVm with RwSignals, option lists
//! - view.rs: ArticleNew component

mod view;
mod view_model;

pub use view::ArticleNew;
