use crate::shared::export::CsvExportable;
use contracts::usecases::u102_integrated_analysis::RelatedKeyword;

/// One CSV line: the keyword plus its position in the filtered, sorted table.
pub struct RankedKeyword {
    pub rank: usize,
    pub keyword: RelatedKeyword,
}

impl RankedKeyword {
    /// Ranks are 1-based in the order given.
    pub fn rank_all(filtered: &[RelatedKeyword]) -> Vec<RankedKeyword> {
        filtered
            .iter()
            .enumerate()
            .map(|(i, kw)| RankedKeyword {
                rank: i + 1,
                keyword: kw.clone(),
            })
            .collect()
    }
}

impl CsvExportable for RankedKeyword {
    fn headers() -> Vec<&'static str> {
        vec![
            "優先順位",
            "判定",
            "キーワード",
            "検索ボリューム",
            "CPC",
            "競合度",
            "難易度",
            "推奨順位",
            "優先度スコア",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let kw = &self.keyword;
        vec![
            self.rank.to_string(),
            kw.difficulty_level.label().to_string(),
            kw.keyword.clone(),
            kw.search_volume.to_string(),
            format!("{:.2}", kw.cpc),
            kw.competition.clone(),
            kw.difficulty.to_string(),
            kw.recommended_rank.to_string(),
            format!("{:.1}", kw.priority_score),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;
    use contracts::usecases::u102_integrated_analysis::DifficultyLevel;

    #[test]
    fn test_csv_lines_follow_filtered_order() {
        let make = |name: &str, level| RelatedKeyword {
            keyword: name.to_string(),
            search_volume: 1200,
            cpc: 0.5,
            competition: "LOW".into(),
            competition_index: 10,
            difficulty: 18,
            difficulty_level: level,
            priority_score: 512.5,
            recommended_rank: 6,
        };
        let rows = RankedKeyword::rank_all(&[
            make("眼鏡 おすすめ", DifficultyLevel::Immediate),
            make("眼鏡, 安い", DifficultyLevel::LongTerm),
        ]);
        let csv = build_csv(&rows);
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();

        assert_eq!(
            lines[0],
            "優先順位,判定,キーワード,検索ボリューム,CPC,競合度,難易度,推奨順位,優先度スコア"
        );
        assert_eq!(lines[1], "1,即攻略,眼鏡 おすすめ,1200,0.50,LOW,18,6,512.5");
        assert!(lines[2].starts_with("2,長期目標,\"眼鏡, 安い\","));
        assert_eq!(lines.len(), 3);
    }
}
