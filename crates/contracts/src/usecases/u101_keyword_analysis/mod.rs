pub mod request;
pub mod response;

pub use request::SelectKeywordsRequest;
pub use response::{ActionResponse, SelectKeywordsResponse, StartKeywordAnalysisResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct KeywordAnalysis;

impl UseCaseMetadata for KeywordAnalysis {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "keyword_analysis"
    }

    fn display_name() -> &'static str {
        "キーワード分析"
    }

    fn description() -> &'static str {
        "記事のキーワードを生成・取得・スコアリングし、選択画面へ進む"
    }
}
