//! Article aggregate
//!
//! The only entity with a lifecycle: draft → keyword_analysis →
//! keyword_selection → processing → completed | failed.

pub mod aggregate;
pub mod keyword;
pub mod progress;
pub mod request;

pub use aggregate::{Article, ArticleStatus};
pub use keyword::{AnalyzedKeyword, MISSING_COMPETITION_INDEX};
pub use progress::{AnalysisStep, KeywordAnalysisProgress};
pub use request::{non_empty, ArticleCreate, ArticleUpdate};
