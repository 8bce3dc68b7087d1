use serde::{Deserialize, Serialize};

/// Sub-step of the backend keyword analysis job, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStep {
    StatusCheck,
    OpenaiGeneration,
    DataforseoFetch,
    ScoringCompleted,
}

impl AnalysisStep {
    /// Execution order. Never derive it from the key order of the progress record.
    pub const ORDERED: [AnalysisStep; 4] = [
        AnalysisStep::StatusCheck,
        AnalysisStep::OpenaiGeneration,
        AnalysisStep::DataforseoFetch,
        AnalysisStep::ScoringCompleted,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AnalysisStep::StatusCheck => "status_check",
            AnalysisStep::OpenaiGeneration => "openai_generation",
            AnalysisStep::DataforseoFetch => "dataforseo_fetch",
            AnalysisStep::ScoringCompleted => "scoring_completed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ORDERED.into_iter().find(|step| step.key() == key)
    }
}

/// `keyword_analysis_progress` column of an article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysisProgress {
    #[serde(default)]
    pub status_check: Option<bool>,
    #[serde(default)]
    pub openai_generation: Option<bool>,
    #[serde(default)]
    pub dataforseo_fetch: Option<bool>,
    #[serde(default)]
    pub scoring_completed: Option<bool>,
    #[serde(default)]
    pub current_step: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl KeywordAnalysisProgress {
    /// Explicit flag reported by the backend for `step`.
    pub fn flag(&self, step: AnalysisStep) -> Option<bool> {
        match step {
            AnalysisStep::StatusCheck => self.status_check,
            AnalysisStep::OpenaiGeneration => self.openai_generation,
            AnalysisStep::DataforseoFetch => self.dataforseo_fetch,
            AnalysisStep::ScoringCompleted => self.scoring_completed,
        }
    }

    pub fn is_done(&self, step: AnalysisStep) -> bool {
        self.flag(step).unwrap_or(false)
    }

    fn set_flag(&mut self, step: AnalysisStep, value: bool) {
        let slot = match step {
            AnalysisStep::StatusCheck => &mut self.status_check,
            AnalysisStep::OpenaiGeneration => &mut self.openai_generation,
            AnalysisStep::DataforseoFetch => &mut self.dataforseo_fetch,
            AnalysisStep::ScoringCompleted => &mut self.scoring_completed,
        };
        *slot = Some(value);
    }

    /// Combines a fresh record with the one observed earlier in the same run:
    /// a step seen as done stays done. Text fields always come from `self`.
    pub fn merged_with(&self, previous: &KeywordAnalysisProgress) -> KeywordAnalysisProgress {
        let mut merged = self.clone();
        for step in AnalysisStep::ORDERED {
            if previous.is_done(step) && !self.is_done(step) {
                merged.set_flag(step, true);
            }
        }
        merged
    }

    pub fn error(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_keys() {
        let keys: Vec<&str> = AnalysisStep::ORDERED.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec!["status_check", "openai_generation", "dataforseo_fetch", "scoring_completed"]
        );
        assert_eq!(
            AnalysisStep::from_key("dataforseo_fetch"),
            Some(AnalysisStep::DataforseoFetch)
        );
        assert_eq!(AnalysisStep::from_key("unknown"), None);
    }

    #[test]
    fn test_merge_keeps_completed_steps() {
        let previous = KeywordAnalysisProgress {
            status_check: Some(true),
            openai_generation: Some(true),
            ..Default::default()
        };
        let fresh = KeywordAnalysisProgress {
            status_check: Some(true),
            openai_generation: Some(false),
            dataforseo_fetch: Some(true),
            error_message: Some("quota".into()),
            ..Default::default()
        };
        let merged = fresh.merged_with(&previous);
        assert!(merged.is_done(AnalysisStep::StatusCheck));
        assert!(merged.is_done(AnalysisStep::OpenaiGeneration));
        assert!(merged.is_done(AnalysisStep::DataforseoFetch));
        assert!(!merged.is_done(AnalysisStep::ScoringCompleted));
        assert_eq!(merged.error(), Some("quota"));
    }

    #[test]
    fn test_blank_error_is_ignored() {
        let progress = KeywordAnalysisProgress {
            error_message: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(progress.error(), None);
    }
}
