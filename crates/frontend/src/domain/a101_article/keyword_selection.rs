//! Candidate keyword table: filter, sort and a selection that survives both.

use contracts::domain::a101_article::AnalyzedKeyword;
use contracts::usecases::u101_keyword_analysis::SelectKeywordsRequest;
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordSort {
    /// total_score, highest first
    #[default]
    Score,
    /// search_volume, highest first
    Volume,
    /// competition_index, lowest first
    Competition,
}

impl KeywordSort {
    pub const ALL: [KeywordSort; 3] = [KeywordSort::Score, KeywordSort::Volume, KeywordSort::Competition];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordSort::Score => "score",
            KeywordSort::Volume => "volume",
            KeywordSort::Competition => "competition",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            KeywordSort::Score => "スコア順",
            KeywordSort::Volume => "検索ボリューム順",
            KeywordSort::Competition => "競合度順（低い順）",
        }
    }

    fn compare(&self, a: &AnalyzedKeyword, b: &AnalyzedKeyword) -> Ordering {
        match self {
            KeywordSort::Score => b.score_or_default().total_cmp(&a.score_or_default()),
            KeywordSort::Volume => b.volume_or_default().total_cmp(&a.volume_or_default()),
            KeywordSort::Competition => a
                .competition_or_default()
                .total_cmp(&b.competition_or_default()),
        }
    }
}

/// Colour band of the competition index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

impl CompetitionLevel {
    pub fn of(keyword: &AnalyzedKeyword) -> Self {
        let value = keyword.competition_or_default();
        if value < 30.0 {
            CompetitionLevel::Low
        } else if value < 60.0 {
            CompetitionLevel::Medium
        } else {
            CompetitionLevel::High
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CompetitionLevel::Low => "var(--color-success)",
            CompetitionLevel::Medium => "var(--color-warning)",
            CompetitionLevel::High => "var(--color-error)",
        }
    }
}

/// Rows to show: case-insensitive substring filter, then a stable sort.
pub fn visible_keywords(
    keywords: &[AnalyzedKeyword],
    filter: &str,
    sort: KeywordSort,
) -> Vec<AnalyzedKeyword> {
    let needle = filter.trim().to_lowercase();
    let mut rows: Vec<AnalyzedKeyword> = keywords
        .iter()
        .filter(|kw| needle.is_empty() || kw.keyword.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    rows.sort_by(|a, b| sort.compare(a, b));
    rows
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("少なくとも1つのキーワードを選択してください")]
    Empty,
}

/// Chosen keywords in the order they were picked. Independent of what is
/// currently visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordSelection {
    selected: Vec<String>,
}

impl KeywordSelection {
    pub fn is_selected(&self, keyword: &str) -> bool {
        self.selected.iter().any(|k| k == keyword)
    }

    pub fn toggle(&mut self, keyword: &str) {
        if let Some(pos) = self.selected.iter().position(|k| k == keyword) {
            self.selected.remove(pos);
        } else {
            self.selected.push(keyword.to_string());
        }
    }

    /// Adds every visible row; rows already selected keep their place.
    pub fn select_visible(&mut self, visible: &[AnalyzedKeyword]) {
        for kw in visible {
            if !self.is_selected(&kw.keyword) {
                self.selected.push(kw.keyword.clone());
            }
        }
    }

    /// Removes only the visible rows; hidden selections stay.
    pub fn clear_visible(&mut self, visible: &[AnalyzedKeyword]) {
        self.selected
            .retain(|k| !visible.iter().any(|kw| &kw.keyword == k));
    }

    pub fn all_visible_selected(&self, visible: &[AnalyzedKeyword]) -> bool {
        !visible.is_empty() && visible.iter().all(|kw| self.is_selected(&kw.keyword))
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Request body, or the message to show instead of calling the server.
    pub fn submission(&self) -> Result<SelectKeywordsRequest, SelectionError> {
        SelectKeywordsRequest::new(self.selected.clone()).map_err(|_| SelectionError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(keyword: &str, volume: Option<f64>, competition: Option<f64>, score: Option<f64>) -> AnalyzedKeyword {
        AnalyzedKeyword {
            keyword: keyword.to_string(),
            search_volume: volume,
            competition_index: competition,
            cpc: None,
            volume_score: None,
            competition_score: None,
            total_score: score,
        }
    }

    fn names(rows: &[AnalyzedKeyword]) -> Vec<&str> {
        rows.iter().map(|k| k.keyword.as_str()).collect()
    }

    #[test]
    fn test_missing_competition_sorts_after_99() {
        let rows = vec![kw("unknown", None, None, None), kw("hard", None, Some(99.0), None)];
        let sorted = visible_keywords(&rows, "", KeywordSort::Competition);
        assert_eq!(names(&sorted), vec!["hard", "unknown"]);
    }

    #[test]
    fn test_score_and_volume_default_to_zero() {
        let rows = vec![
            kw("none", None, None, None),
            kw("neg", Some(-1.0), None, Some(-1.0)),
            kw("top", Some(500.0), None, Some(80.0)),
        ];
        assert_eq!(
            names(&visible_keywords(&rows, "", KeywordSort::Score)),
            vec!["top", "none", "neg"]
        );
        assert_eq!(
            names(&visible_keywords(&rows, "", KeywordSort::Volume)),
            vec!["top", "none", "neg"]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let rows = vec![
            kw("b", None, Some(10.0), None),
            kw("a", None, Some(10.0), None),
            kw("c", None, Some(5.0), None),
        ];
        assert_eq!(
            names(&visible_keywords(&rows, "", KeywordSort::Competition)),
            vec!["c", "b", "a"]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let rows = vec![kw("Blue Light", None, None, None), kw("眼鏡 おすすめ", None, None, None)];
        assert_eq!(names(&visible_keywords(&rows, "light", KeywordSort::Score)), vec!["Blue Light"]);
        assert_eq!(names(&visible_keywords(&rows, " 眼鏡 ", KeywordSort::Score)), vec!["眼鏡 おすすめ"]);
        assert_eq!(visible_keywords(&rows, "", KeywordSort::Score).len(), 2);
    }

    #[test]
    fn test_selection_survives_filter() {
        let rows = vec![
            kw("blue light", None, None, None),
            kw("blue glasses", None, None, None),
            kw("gaming", None, None, None),
        ];
        let mut selection = KeywordSelection::default();
        selection.toggle("gaming");
        selection.toggle("blue light");

        let visible = visible_keywords(&rows, "blue", KeywordSort::Score);
        selection.toggle("blue glasses");
        selection.toggle("blue light");

        // Filter cleared: the hidden pick is back on screen, still selected.
        let all = visible_keywords(&rows, "", KeywordSort::Score);
        assert_eq!(all.len(), rows.len());
        let shown_selected: Vec<&str> = all
            .iter()
            .map(|k| k.keyword.as_str())
            .filter(|k| selection.is_selected(k))
            .collect();
        assert_eq!(shown_selected.len(), 2);
        assert!(shown_selected.contains(&"gaming"));
        assert!(selection.is_selected("gaming"));
        assert!(selection.is_selected("blue glasses"));
        assert!(!selection.is_selected("blue light"));

        selection.clear_visible(&visible);
        assert!(selection.is_selected("gaming"));
        assert_eq!(selection.len(), 1);

        selection.select_visible(&visible);
        assert!(selection.all_visible_selected(&visible));
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_empty_submission_rejected() {
        let mut selection = KeywordSelection::default();
        assert_eq!(selection.submission(), Err(SelectionError::Empty));
        assert_eq!(
            SelectionError::Empty.to_string(),
            "少なくとも1つのキーワードを選択してください"
        );
        selection.toggle("b");
        selection.toggle("a");
        assert_eq!(
            selection.submission().map(|r| r.selected_keywords),
            Ok(vec!["b".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn test_competition_levels() {
        assert_eq!(CompetitionLevel::of(&kw("x", None, Some(29.0), None)), CompetitionLevel::Low);
        assert_eq!(CompetitionLevel::of(&kw("x", None, Some(30.0), None)), CompetitionLevel::Medium);
        assert_eq!(CompetitionLevel::of(&kw("x", None, None, None)), CompetitionLevel::High);
        assert_eq!(KeywordSort::from_str("volume"), Some(KeywordSort::Volume));
    }
}
