//! u101: start keyword analysis for an article and follow it until the
//! keyword selection tab opens.

mod view;

pub use view::KeywordAnalysisPage;

use contracts::domain::a101_article::Article;

/// Articles offered in the picker. The one being watched stays listed after
/// it leaves the analyzable statuses, so the select keeps showing it.
pub(crate) fn picker_articles(articles: &[Article], selected_id: &str) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| a.can_start_keyword_analysis() || (!selected_id.is_empty() && a.id == selected_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(json: serde_json::Value) -> Article {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_picker_lists_analyzable_and_selected() {
        let articles = vec![
            article(serde_json::json!({"id": "d", "keyword": "k1", "status": "draft"})),
            article(serde_json::json!({"id": "c", "keyword": "k2", "status": "completed"})),
            article(serde_json::json!({
                "id": "done", "keyword": "k3", "status": "completed",
                "analyzed_keywords": [{"keyword": "x"}]
            })),
            article(serde_json::json!({"id": "run", "keyword": "k4", "status": "keyword_analysis"})),
        ];
        let ids: Vec<String> = picker_articles(&articles, "")
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["d", "c"]);

        let ids: Vec<String> = picker_articles(&articles, "run")
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["d", "c", "run"]);
    }
}
