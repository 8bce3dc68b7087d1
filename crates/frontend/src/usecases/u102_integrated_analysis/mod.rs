//! u102: one-shot aggregate keyword analysis with client-side filtering,
//! paging, selection and CSV export.

mod api;
mod export;
mod state;
mod view;

pub use view::IntegratedAnalysisPage;
