use crate::shared::lenient_json::null_as_default;
use serde::{Deserialize, Serialize};

/// Attack difficulty bucket assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    #[serde(rename = "即攻略")]
    Immediate,
    #[serde(rename = "中期目標")]
    MediumTerm,
    #[serde(rename = "長期目標")]
    LongTerm,
    #[serde(other)]
    Unknown,
}

impl DifficultyLevel {
    pub const KNOWN: [DifficultyLevel; 3] = [
        DifficultyLevel::Immediate,
        DifficultyLevel::MediumTerm,
        DifficultyLevel::LongTerm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::Immediate => "即攻略",
            DifficultyLevel::MediumTerm => "中期目標",
            DifficultyLevel::LongTerm => "長期目標",
            DifficultyLevel::Unknown => "不明",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            DifficultyLevel::Immediate => "🟢",
            DifficultyLevel::MediumTerm => "🟡",
            _ => "🔴",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainKeyword {
    pub keyword: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub search_volume: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cpc: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub competition: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub competition_index: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: i64,
    pub difficulty_level: DifficultyLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedKeyword {
    pub keyword: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub search_volume: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cpc: f64,
    /// LOW / MED / HIGH
    #[serde(default, deserialize_with = "null_as_default")]
    pub competition: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub competition_index: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: i64,
    pub difficulty_level: DifficultyLevel,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended_rank: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelStats {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub total_volume: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    #[serde(default)]
    pub immediate_attack: LevelStats,
    #[serde(default)]
    pub medium_term: LevelStats,
    #[serde(default)]
    pub long_term: LevelStats,
}

impl SummaryStats {
    pub fn for_level(&self, level: DifficultyLevel) -> Option<&LevelStats> {
        match level {
            DifficultyLevel::Immediate => Some(&self.immediate_attack),
            DifficultyLevel::MediumTerm => Some(&self.medium_term),
            DifficultyLevel::LongTerm => Some(&self.long_term),
            DifficultyLevel::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    #[serde(default)]
    pub keywords: Vec<RelatedKeyword>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimated_traffic: f64,
    #[serde(default)]
    pub period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendedStrategy {
    #[serde(default)]
    pub phase1: Phase,
}

/// Answer of `POST /api/integrated-analysis/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedAnalysisResult {
    #[serde(default)]
    pub main_keyword: Option<MainKeyword>,
    #[serde(default)]
    pub related_keywords: Vec<RelatedKeyword>,
    #[serde(default)]
    pub summary_stats: SummaryStats,
    #[serde(default)]
    pub recommended_strategy: RecommendedStrategy,
    #[serde(default)]
    pub total_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_levels_decode_from_labels() {
        let levels: Vec<DifficultyLevel> =
            serde_json::from_str(r#"["即攻略", "中期目標", "長期目標", "medium"]"#).unwrap();
        assert_eq!(
            levels,
            vec![
                DifficultyLevel::Immediate,
                DifficultyLevel::MediumTerm,
                DifficultyLevel::LongTerm,
                DifficultyLevel::Unknown
            ]
        );
        for level in DifficultyLevel::KNOWN {
            assert_eq!(serde_json::to_value(level).unwrap(), level.label());
        }
    }

    #[test]
    fn test_result_decodes_backend_payload() {
        let json = r#"{
            "main_keyword": null,
            "related_keywords": [{
                "keyword": "ゲーミング眼鏡 おすすめ",
                "search_volume": null,
                "cpc": 0.42,
                "competition": "LOW",
                "competition_index": 12,
                "difficulty": 18,
                "difficulty_level": "即攻略",
                "priority_score": 512.5,
                "recommended_rank": 6
            }],
            "summary_stats": {"immediate_attack": {"count": 1, "total_volume": 0}},
            "recommended_strategy": {"phase1": {"keywords": [], "estimated_traffic": 0.0, "period": "1-2ヶ月"}},
            "total_count": 1
        }"#;
        let result: IntegratedAnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.main_keyword.is_none());
        assert_eq!(result.related_keywords[0].search_volume, 0);
        assert_eq!(result.summary_stats.immediate_attack.count, 1);
        assert_eq!(result.summary_stats.long_term, LevelStats::default());
        assert_eq!(result.recommended_strategy.phase1.period, "1-2ヶ月");
    }
}
