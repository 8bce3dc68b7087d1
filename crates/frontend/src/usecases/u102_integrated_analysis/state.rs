//! Table state of the aggregate analysis: filters, sort, page, selection.

use contracts::usecases::u102_integrated_analysis::{DifficultyLevel, RelatedKeyword};
use std::cmp::Ordering;

pub const PAGE_SIZE: usize = 20;
pub const TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(DifficultyLevel),
}

impl LevelFilter {
    pub const OPTIONS: [(&'static str, &'static str); 4] = [
        ("all", "すべて"),
        ("immediate", "🟢即攻略"),
        ("medium", "🟡中期"),
        ("long", "🔴長期"),
    ];

    pub fn from_str(s: &str) -> Self {
        match s {
            "immediate" => LevelFilter::Only(DifficultyLevel::Immediate),
            "medium" => LevelFilter::Only(DifficultyLevel::MediumTerm),
            "long" => LevelFilter::Only(DifficultyLevel::LongTerm),
            _ => LevelFilter::All,
        }
    }

    fn accepts(&self, kw: &RelatedKeyword) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(level) => kw.difficulty_level == *level,
        }
    }
}

/// Minimum monthly search volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeFilter {
    #[default]
    All,
    AtLeast100k,
    AtLeast500k,
    AtLeast1m,
}

impl VolumeFilter {
    pub const OPTIONS: [(&'static str, &'static str); 4] = [
        ("all", "すべて"),
        ("100k", "10万以上"),
        ("500k", "50万以上"),
        ("1m", "100万以上"),
    ];

    pub fn from_str(s: &str) -> Self {
        match s {
            "100k" => VolumeFilter::AtLeast100k,
            "500k" => VolumeFilter::AtLeast500k,
            "1m" => VolumeFilter::AtLeast1m,
            _ => VolumeFilter::All,
        }
    }

    fn min_volume(&self) -> i64 {
        match self {
            VolumeFilter::All => 0,
            VolumeFilter::AtLeast100k => 100_000,
            VolumeFilter::AtLeast500k => 500_000,
            VolumeFilter::AtLeast1m => 1_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Priority,
    Volume,
    DifficultyAsc,
    DifficultyDesc,
    Cpc,
    RecommendedRank,
}

impl SortOrder {
    pub const OPTIONS: [(&'static str, &'static str); 6] = [
        ("priority", "優先度スコア順"),
        ("volume", "検索ボリューム順"),
        ("difficulty_asc", "難易度順（昇順）"),
        ("difficulty_desc", "難易度順（降順）"),
        ("cpc", "CPC順"),
        ("rank", "推奨順位順"),
    ];

    pub fn from_str(s: &str) -> Self {
        match s {
            "volume" => SortOrder::Volume,
            "difficulty_asc" => SortOrder::DifficultyAsc,
            "difficulty_desc" => SortOrder::DifficultyDesc,
            "cpc" => SortOrder::Cpc,
            "rank" => SortOrder::RecommendedRank,
            _ => SortOrder::Priority,
        }
    }

    fn compare(&self, a: &RelatedKeyword, b: &RelatedKeyword) -> Ordering {
        match self {
            SortOrder::Priority => b.priority_score.total_cmp(&a.priority_score),
            SortOrder::Volume => b.search_volume.cmp(&a.search_volume),
            SortOrder::DifficultyAsc => a.difficulty.cmp(&b.difficulty),
            SortOrder::DifficultyDesc => b.difficulty.cmp(&a.difficulty),
            SortOrder::Cpc => b.cpc.total_cmp(&a.cpc),
            SortOrder::RecommendedRank => a.recommended_rank.cmp(&b.recommended_rank),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisTableState {
    pub level: LevelFilter,
    pub volume: VolumeFilter,
    pub sort: SortOrder,
    /// 0-indexed
    pub page: usize,
    selected: Vec<String>,
}

impl AnalysisTableState {
    /// Filtered and sorted rows across all pages (stable sort).
    pub fn filtered(&self, keywords: &[RelatedKeyword]) -> Vec<RelatedKeyword> {
        let min_volume = self.volume.min_volume();
        let mut rows: Vec<RelatedKeyword> = keywords
            .iter()
            .filter(|kw| self.level.accepts(kw) && kw.search_volume >= min_volume)
            .cloned()
            .collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }

    pub fn total_pages(total_rows: usize) -> usize {
        total_rows.div_ceil(PAGE_SIZE)
    }

    /// Rows of the current page with their 1-based rank in the filtered order.
    pub fn page_rows(&self, filtered: &[RelatedKeyword]) -> Vec<(usize, RelatedKeyword)> {
        filtered
            .iter()
            .enumerate()
            .skip(self.page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .map(|(i, kw)| (i + 1, kw.clone()))
            .collect()
    }

    /// "表示: 21-40 / 57件"
    pub fn range_label(&self, total_rows: usize) -> String {
        if total_rows == 0 {
            return "表示: 0 / 0件".to_string();
        }
        let from = self.page * PAGE_SIZE + 1;
        let to = ((self.page + 1) * PAGE_SIZE).min(total_rows);
        format!("表示: {}-{} / {}件", from, to, total_rows)
    }

    /// Filters and sort changes send the user back to the first page.
    pub fn set_level(&mut self, level: LevelFilter) {
        self.level = level;
        self.page = 0;
    }

    pub fn set_volume(&mut self, volume: VolumeFilter) {
        self.volume = volume;
        self.page = 0;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 0;
    }

    pub fn is_selected(&self, keyword: &str) -> bool {
        self.selected.iter().any(|k| k == keyword)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn toggle(&mut self, keyword: &str) {
        if let Some(pos) = self.selected.iter().position(|k| k == keyword) {
            self.selected.remove(pos);
        } else {
            self.selected.push(keyword.to_string());
        }
    }

    fn add_all<'a>(&mut self, keywords: impl IntoIterator<Item = &'a RelatedKeyword>) {
        for kw in keywords {
            if !self.is_selected(&kw.keyword) {
                self.selected.push(kw.keyword.clone());
            }
        }
    }

    /// Adds every filtered row, optionally only those of one level.
    pub fn select_filtered(&mut self, filtered: &[RelatedKeyword], level: Option<DifficultyLevel>) {
        self.add_all(
            filtered
                .iter()
                .filter(|kw| level.map_or(true, |l| kw.difficulty_level == l)),
        );
    }

    /// Adds the first ten filtered rows.
    pub fn select_top(&mut self, filtered: &[RelatedKeyword]) {
        self.add_all(filtered.iter().take(TOP_N));
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// New result: selection and page start over, filters stay.
    pub fn reset_for_new_result(&mut self) {
        self.selected.clear();
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(keyword: &str, level: DifficultyLevel, volume: i64, difficulty: i64, priority: f64) -> RelatedKeyword {
        RelatedKeyword {
            keyword: keyword.to_string(),
            search_volume: volume,
            cpc: 0.0,
            competition: "LOW".into(),
            competition_index: 0,
            difficulty,
            difficulty_level: level,
            priority_score: priority,
            recommended_rank: 1,
        }
    }

    fn sample() -> Vec<RelatedKeyword> {
        vec![
            kw("a", DifficultyLevel::Immediate, 120_000, 10, 50.0),
            kw("b", DifficultyLevel::LongTerm, 2_000_000, 80, 70.0),
            kw("c", DifficultyLevel::Immediate, 50, 20, 70.0),
            kw("d", DifficultyLevel::MediumTerm, 600_000, 45, 10.0),
        ]
    }

    fn names(rows: &[RelatedKeyword]) -> Vec<&str> {
        rows.iter().map(|k| k.keyword.as_str()).collect()
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let state = AnalysisTableState::default();
        // b and c tie on priority: input order is kept
        assert_eq!(names(&state.filtered(&sample())), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_level_and_volume_filters() {
        let mut state = AnalysisTableState::default();
        state.set_level(LevelFilter::from_str("immediate"));
        assert_eq!(names(&state.filtered(&sample())), vec!["c", "a"]);

        state.set_level(LevelFilter::All);
        state.set_volume(VolumeFilter::from_str("500k"));
        state.set_sort(SortOrder::from_str("difficulty_asc"));
        assert_eq!(names(&state.filtered(&sample())), vec!["d", "b"]);
    }

    #[test]
    fn test_paging_and_rank() {
        let many: Vec<RelatedKeyword> = (0..45)
            .map(|i| kw(&format!("k{}", i), DifficultyLevel::Immediate, 0, 0, (100 - i) as f64))
            .collect();
        let mut state = AnalysisTableState::default();
        let filtered = state.filtered(&many);
        assert_eq!(AnalysisTableState::total_pages(filtered.len()), 3);

        state.page = 2;
        let rows = state.page_rows(&filtered);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].0, 41);
        assert_eq!(rows[0].1.keyword, "k40");
        assert_eq!(state.range_label(filtered.len()), "表示: 41-45 / 45件");

        state.set_sort(SortOrder::Volume);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_selection_helpers() {
        let mut state = AnalysisTableState::default();
        let filtered = state.filtered(&sample());

        state.select_filtered(&filtered, Some(DifficultyLevel::Immediate));
        assert_eq!(state.selected_count(), 2);
        assert!(state.is_selected("a") && state.is_selected("c"));

        state.select_top(&filtered);
        assert_eq!(state.selected_count(), 4);

        state.toggle("b");
        assert!(!state.is_selected("b"));

        state.clear_selection();
        assert_eq!(state.selected_count(), 0);
    }
}
