//! Keyed article snapshots shared by every view watching the same article.

use contracts::domain::a101_article::{Article, ArticleStatus};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheEntry {
    /// Last snapshot that decoded successfully.
    pub article: Option<Article>,
    /// Set when the latest fetch failed; the snapshot is then older than it looks.
    pub stale: bool,
    pub last_error: Option<String>,
    /// Issue stamp of the newest fetch applied so far.
    applied_request: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleCacheState {
    entries: HashMap<String, CacheEntry>,
}

impl ArticleCacheState {
    pub fn entry(&self, id: &str) -> Option<&CacheEntry> {
        self.entries.get(id)
    }

    pub fn article(&self, id: &str) -> Option<&Article> {
        self.entries.get(id).and_then(|e| e.article.as_ref())
    }

    pub fn status(&self, id: &str) -> Option<ArticleStatus> {
        self.article(id).map(|a| a.status)
    }

    /// Stores a fresh snapshot. While the article stays in `keyword_analysis`
    /// a step already seen as done is kept done.
    pub fn store(&mut self, mut article: Article) {
        let entry = self.entries.entry(article.id.clone()).or_default();

        if let Some(previous) = entry.article.as_ref() {
            let same_run = previous.status == ArticleStatus::KeywordAnalysis
                && article.status == ArticleStatus::KeywordAnalysis;
            if same_run {
                if let Some(prev_progress) = previous.keyword_analysis_progress.as_ref() {
                    let fresh = article.keyword_analysis_progress.take().unwrap_or_default();
                    article.keyword_analysis_progress = Some(fresh.merged_with(prev_progress));
                }
            }
        }

        entry.article = Some(article);
        entry.stale = false;
        entry.last_error = None;
    }

    /// Keeps the previous snapshot but flags it.
    pub fn mark_stale(&mut self, id: &str, error: String) {
        let entry = self.entries.entry(id.to_string()).or_default();
        entry.stale = true;
        entry.last_error = Some(error);
    }

    /// Stores the answer to a fetch stamped `request`. An answer to a
    /// request issued before one already applied is dropped.
    pub fn store_response(&mut self, article: Article, request: u64) -> bool {
        let entry = self.entries.entry(article.id.clone()).or_default();
        if request < entry.applied_request {
            return false;
        }
        entry.applied_request = request;
        self.store(article);
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.entries.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a101_article::{AnalysisStep, KeywordAnalysisProgress};

    fn article(id: &str, status: ArticleStatus, progress: Option<KeywordAnalysisProgress>) -> Article {
        let mut a: Article = serde_json::from_str(&format!(r#"{{"id": "{}"}}"#, id)).unwrap();
        a.status = status;
        a.keyword_analysis_progress = progress;
        a
    }

    #[test]
    fn test_progress_never_reverts_within_a_run() {
        let mut cache = ArticleCacheState::default();
        cache.store(article(
            "a1",
            ArticleStatus::KeywordAnalysis,
            Some(KeywordAnalysisProgress {
                status_check: Some(true),
                openai_generation: Some(true),
                ..Default::default()
            }),
        ));
        // A lagging replica answers with less progress.
        cache.store(article(
            "a1",
            ArticleStatus::KeywordAnalysis,
            Some(KeywordAnalysisProgress {
                status_check: Some(true),
                ..Default::default()
            }),
        ));
        let progress = cache.article("a1").and_then(|a| a.keyword_analysis_progress.clone()).unwrap();
        assert!(progress.is_done(AnalysisStep::OpenaiGeneration));
    }

    #[test]
    fn test_new_run_starts_clean() {
        let mut cache = ArticleCacheState::default();
        cache.store(article(
            "a1",
            ArticleStatus::KeywordAnalysis,
            Some(KeywordAnalysisProgress {
                scoring_completed: Some(true),
                ..Default::default()
            }),
        ));
        cache.store(article("a1", ArticleStatus::Draft, None));
        cache.store(article("a1", ArticleStatus::KeywordAnalysis, Some(KeywordAnalysisProgress::default())));
        let progress = cache.article("a1").and_then(|a| a.keyword_analysis_progress.clone()).unwrap();
        assert!(!progress.is_done(AnalysisStep::ScoringCompleted));
    }

    #[test]
    fn test_stale_then_fresh() {
        let mut cache = ArticleCacheState::default();
        cache.store(article("a1", ArticleStatus::KeywordSelection, None));
        cache.mark_stale("a1", "timeout".into());
        let entry = cache.entry("a1").unwrap();
        assert!(entry.stale);
        assert_eq!(entry.article.as_ref().map(|a| a.status), Some(ArticleStatus::KeywordSelection));

        cache.store(article("a1", ArticleStatus::Processing, None));
        let entry = cache.entry("a1").unwrap();
        assert!(!entry.stale);
        assert!(entry.last_error.is_none());
    }

    #[test]
    fn test_late_response_does_not_overwrite_newer_one() {
        let mut cache = ArticleCacheState::default();
        // Request 1 (still analysing) is slow; request 2 already sees selection.
        assert!(cache.store_response(article("a1", ArticleStatus::KeywordSelection, None), 2));
        assert!(!cache.store_response(article("a1", ArticleStatus::KeywordAnalysis, None), 1));
        assert_eq!(cache.status("a1"), Some(ArticleStatus::KeywordSelection));

        // A genuinely newer answer may move the status back, e.g. a re-run.
        assert!(cache.store_response(article("a1", ArticleStatus::KeywordAnalysis, None), 3));
        assert_eq!(cache.status("a1"), Some(ArticleStatus::KeywordAnalysis));
    }

    #[test]
    fn test_remove_forgets_everything() {
        let mut cache = ArticleCacheState::default();
        cache.store_response(article("a1", ArticleStatus::Completed, None), 7);
        cache.remove("a1");
        assert!(cache.entry("a1").is_none());
        assert!(cache.store_response(article("a1", ArticleStatus::Draft, None), 1));
    }
}
