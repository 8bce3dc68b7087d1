use super::keyword::AnalyzedKeyword;
use super::progress::KeywordAnalysisProgress;
use crate::domain::common::AggregateRoot;
use crate::shared::lenient_json::json_or_string;
use serde::{Deserialize, Serialize};

/// Статус статьи. Closed set driving every client-side branch of the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    /// Freshly created, also the value assumed when the backend omits the field.
    #[default]
    Draft,
    Processing,
    KeywordAnalysis,
    KeywordSelection,
    Completed,
    Failed,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 6] = [
        ArticleStatus::Draft,
        ArticleStatus::Processing,
        ArticleStatus::KeywordAnalysis,
        ArticleStatus::KeywordSelection,
        ArticleStatus::Completed,
        ArticleStatus::Failed,
    ];

    pub fn from_str(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown article status: {}", s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Processing => "processing",
            ArticleStatus::KeywordAnalysis => "keyword_analysis",
            ArticleStatus::KeywordSelection => "keyword_selection",
            ArticleStatus::Completed => "completed",
            ArticleStatus::Failed => "failed",
        }
    }

    /// The backend is still working on the article without user input.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ArticleStatus::Draft | ArticleStatus::Processing | ArticleStatus::KeywordAnalysis
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ArticleStatus::Completed | ArticleStatus::Failed)
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Article snapshot as returned by `GET /api/articles/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub article_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub shopify_article_id: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,

    // SEO
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub search_intent: Option<String>,
    #[serde(default)]
    pub target_location: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,

    // Keyword workflow
    #[serde(default, deserialize_with = "json_or_string")]
    pub keyword_analysis_progress: Option<KeywordAnalysisProgress>,
    #[serde(default, deserialize_with = "json_or_string")]
    pub analyzed_keywords: Option<Vec<AnalyzedKeyword>>,
    #[serde(default, deserialize_with = "json_or_string")]
    pub selected_keywords: Option<Vec<String>>,
}

impl Article {
    /// Heading used in lists and tab titles: the generated title once there is one.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => &self.keyword,
        }
    }

    /// Progress record, only while the analysis is running.
    pub fn active_progress(&self) -> Option<&KeywordAnalysisProgress> {
        if self.status == ArticleStatus::KeywordAnalysis {
            self.keyword_analysis_progress.as_ref()
        } else {
            None
        }
    }

    /// Candidate keywords, only once the article reached the selection stage.
    pub fn selectable_keywords(&self) -> &[AnalyzedKeyword] {
        match self.status {
            ArticleStatus::Draft | ArticleStatus::KeywordAnalysis => &[],
            _ => self.analyzed_keywords.as_deref().unwrap_or(&[]),
        }
    }

    /// Draft articles and finished ones that never went through keyword analysis.
    pub fn can_start_keyword_analysis(&self) -> bool {
        match self.status {
            ArticleStatus::Draft => true,
            ArticleStatus::Completed => self
                .analyzed_keywords
                .as_ref()
                .map(|kws| kws.is_empty())
                .unwrap_or(true),
            _ => false,
        }
    }

    pub fn can_publish(&self) -> bool {
        self.status == ArticleStatus::Completed
    }
}

impl AggregateRoot for Article {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        self.display_title()
    }

    fn aggregate_index() -> &'static str {
        "a101"
    }

    fn collection_name() -> &'static str {
        "article"
    }

    fn element_name() -> &'static str {
        "記事"
    }

    fn list_name() -> &'static str {
        "記事一覧"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_names() {
        for status in ArticleStatus::ALL {
            assert_eq!(ArticleStatus::from_str(status.as_str()), Ok(status));
        }
        assert!(ArticleStatus::from_str("archived").is_err());
    }

    #[test]
    fn test_article_decodes_string_encoded_columns() {
        let json = r#"{
            "id": "a1",
            "keyword": "ブルーライト",
            "status": "keyword_selection",
            "keyword_analysis_progress": "{\"status_check\": true, \"current_step\": \"openai_generation\"}",
            "analyzed_keywords": "[{\"keyword\": \"眼鏡\", \"search_volume\": 1200, \"total_score\": 88.5}]",
            "selected_keywords": null
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.status, ArticleStatus::KeywordSelection);
        let progress = article.keyword_analysis_progress.clone().unwrap();
        assert_eq!(progress.status_check, Some(true));
        assert_eq!(progress.current_step.as_deref(), Some("openai_generation"));
        assert_eq!(article.selectable_keywords().len(), 1);
        assert_eq!(article.selectable_keywords()[0].keyword, "眼鏡");
        assert!(article.selected_keywords.is_none());
    }

    #[test]
    fn test_missing_status_defaults_to_draft() {
        let article: Article = serde_json::from_str(r#"{"id": "a2", "keyword": "k"}"#).unwrap();
        assert_eq!(article.status, ArticleStatus::Draft);
        assert!(article.can_start_keyword_analysis());
        assert_eq!(article.display_title(), "k");
        assert_eq!(Article::full_name(), "a101_article");
    }

    #[test]
    fn test_progress_only_exposed_while_analyzing() {
        let mut article: Article = serde_json::from_str(
            r#"{"id": "a3", "status": "keyword_analysis", "keyword_analysis_progress": {"status_check": true}}"#,
        )
        .unwrap();
        assert!(article.active_progress().is_some());
        article.status = ArticleStatus::Completed;
        assert!(article.active_progress().is_none());
        assert!(article.can_publish());
    }
}
