use crate::domain::a101_article::ArticleStatus;
use serde::{Deserialize, Serialize};

/// Answer of `POST /api/articles/{id}/start-keyword-analysis`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartKeywordAnalysisResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub article_id: Option<String>,
    #[serde(default)]
    pub status: Option<ArticleStatus>,
}

/// Answer of `POST /api/articles/{id}/select-keywords`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectKeywordsResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub selected_keywords: Vec<String>,
    #[serde(default)]
    pub selected_count: usize,
}

/// Generic `{message, ...}` answer of delete and publish endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub shopify_article_id: Option<String>,
    #[serde(default)]
    pub wordpress_article_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_response_carries_status() {
        let r: StartKeywordAnalysisResponse = serde_json::from_str(
            r#"{"message": "キーワード分析を開始しました", "article_id": "a1", "status": "keyword_analysis"}"#,
        )
        .unwrap();
        assert_eq!(r.status, Some(ArticleStatus::KeywordAnalysis));
        assert_eq!(r.article_id.as_deref(), Some("a1"));
    }

    #[test]
    fn test_action_response_tolerates_extra_fields() {
        let r: ActionResponse =
            serde_json::from_str(r#"{"message": "ok", "shopify_article_id": "99", "extra": 1}"#)
                .unwrap();
        assert_eq!(r.shopify_article_id.as_deref(), Some("99"));
        assert!(r.wordpress_article_id.is_none());
    }
}
