//! Tab management module
//!
//! - `page` - TabPage wrapper for the content of one tab
//! - `registry` - tab.key → View mapping
//! - `tab_labels` - tab keys and titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{
    article_detail_key, article_keywords_key, detail_tab_label, tab_label_for_key,
};
