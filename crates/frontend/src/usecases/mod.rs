pub mod u101_keyword_analysis;
pub mod u102_integrated_analysis;

pub use u101_keyword_analysis::KeywordAnalysisPage;
pub use u102_integrated_analysis::IntegratedAnalysisPage;
