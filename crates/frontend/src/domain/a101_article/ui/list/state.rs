use contracts::domain::a101_article::{Article, ArticleStatus};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ArticleListState {
    pub items: Vec<Article>,
    /// `None` = all statuses.
    pub status_filter: Option<ArticleStatus>,
    pub search: String,
    pub is_loaded: bool,
}

impl ArticleListState {
    /// Newest first; `created_at` is ISO-8601 so string order is time order.
    pub fn visible(&self) -> Vec<Article> {
        let needle = self.search.trim().to_lowercase();
        let mut rows: Vec<Article> = self
            .items
            .iter()
            .filter(|a| self.status_filter.map_or(true, |s| a.status == s))
            .filter(|a| {
                needle.is_empty()
                    || a.keyword.to_lowercase().contains(&needle)
                    || a.display_title().to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }

    pub fn count_with(&self, status: ArticleStatus) -> usize {
        self.items.iter().filter(|a| a.status == status).count()
    }
}

pub fn create_state() -> RwSignal<ArticleListState> {
    RwSignal::new(ArticleListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, keyword: &str, status: ArticleStatus, created_at: &str) -> Article {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "keyword": keyword,
            "status": status.as_str(),
            "created_at": created_at,
        }))
        .unwrap()
    }

    #[test]
    fn test_visible_filters_and_orders_newest_first() {
        let state = ArticleListState {
            items: vec![
                article("1", "ゲーミング眼鏡", ArticleStatus::Completed, "2024-03-01T10:00:00"),
                article("2", "ブルーライト", ArticleStatus::Draft, "2024-03-02T10:00:00"),
                article("3", "Gaming Glasses", ArticleStatus::Completed, "2024-03-03T10:00:00"),
            ],
            ..Default::default()
        };
        let ids: Vec<String> = state.visible().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);

        let completed = ArticleListState {
            status_filter: Some(ArticleStatus::Completed),
            search: " gaming ".into(),
            ..state.clone()
        };
        let ids: Vec<String> = completed.visible().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["3"]);
        assert_eq!(state.count_with(ArticleStatus::Completed), 2);
    }
}
