use serde::{Deserialize, Serialize};

/// Sentinel used when a keyword has no competition index: worst case.
pub const MISSING_COMPETITION_INDEX: f64 = 100.0;

/// Scored keyword candidate produced by the backend analysis job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedKeyword {
    pub keyword: String,
    #[serde(default)]
    pub search_volume: Option<f64>,
    /// 0..=100, higher means more competition.
    #[serde(default)]
    pub competition_index: Option<f64>,
    #[serde(default)]
    pub cpc: Option<f64>,
    #[serde(default)]
    pub volume_score: Option<f64>,
    #[serde(default)]
    pub competition_score: Option<f64>,
    #[serde(default)]
    pub total_score: Option<f64>,
}

impl AnalyzedKeyword {
    pub fn score_or_default(&self) -> f64 {
        self.total_score.unwrap_or(0.0)
    }

    pub fn volume_or_default(&self) -> f64 {
        self.search_volume.unwrap_or(0.0)
    }

    pub fn competition_or_default(&self) -> f64 {
        self.competition_index.unwrap_or(MISSING_COMPETITION_INDEX)
    }

    pub fn cpc_or_default(&self) -> f64 {
        self.cpc.unwrap_or(0.0)
    }
}
