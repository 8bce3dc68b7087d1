pub mod request;
pub mod response;

pub use request::{IntegratedAnalysisQuery, LanguageOption, LocationOption, LANGUAGES, LOCATIONS};
pub use response::{
    DifficultyLevel, IntegratedAnalysisResult, LevelStats, MainKeyword, Phase, RecommendedStrategy,
    RelatedKeyword, SummaryStats,
};

use crate::usecases::common::UseCaseMetadata;

pub struct IntegratedAnalysis;

impl UseCaseMetadata for IntegratedAnalysis {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "integrated_analysis"
    }

    fn display_name() -> &'static str {
        "SEOキーワード分析ツール"
    }

    fn description() -> &'static str {
        "シードキーワードから関連キーワードを集計し、攻略難易度別に優先度を付ける"
    }
}
