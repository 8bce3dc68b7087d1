pub mod common;
pub mod u101_keyword_analysis;
pub mod u102_integrated_analysis;
