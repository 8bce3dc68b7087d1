//! Progress checklist for the keyword analysis run.

use contracts::domain::a101_article::{AnalysisStep, ArticleStatus, KeywordAnalysisProgress};

pub fn step_label(step: AnalysisStep) -> &'static str {
    match step {
        AnalysisStep::StatusCheck => "記事のstatusがkeyword_analysisであること",
        AnalysisStep::OpenaiGeneration => "OpenAIで100個のキーワード生成が成功すること",
        AnalysisStep::DataforseoFetch => "DataForSEOでキーワードデータ取得が成功すること",
        AnalysisStep::ScoringCompleted => "スコアリングが完了すること",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Pending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistItem {
    pub step: AnalysisStep,
    pub label: &'static str,
    pub state: StepState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Checklist {
    pub items: Vec<ChecklistItem>,
    /// Step-level error, shown on its own. Never changes a step's state.
    pub error: Option<String>,
}

impl Checklist {
    /// Steps in execution order. `status_check` also counts as done while the
    /// article is in `keyword_analysis` and the flag is missing; that is an
    /// inference from the status, not something the backend reported.
    pub fn build(status: ArticleStatus, progress: Option<&KeywordAnalysisProgress>) -> Self {
        let empty = KeywordAnalysisProgress::default();
        let progress = progress.unwrap_or(&empty);

        let mut current_assigned = false;
        let items = AnalysisStep::ORDERED
            .into_iter()
            .map(|step| {
                let done = progress.is_done(step)
                    || (step == AnalysisStep::StatusCheck
                        && status == ArticleStatus::KeywordAnalysis);
                let state = if done {
                    StepState::Done
                } else if !current_assigned {
                    current_assigned = true;
                    StepState::Current
                } else {
                    StepState::Pending
                };
                ChecklistItem {
                    step,
                    label: step_label(step),
                    state,
                }
            })
            .collect();

        Self {
            items,
            error: progress.error().map(str::to_string),
        }
    }

    /// First step in order that is not done.
    pub fn current(&self) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.state != StepState::Done)
    }

    /// Every step reported done, even if the status has not moved on yet.
    pub fn all_done(&self) -> bool {
        self.current().is_none()
    }

    pub fn done_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.state == StepState::Done)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(flags: [Option<bool>; 4]) -> KeywordAnalysisProgress {
        KeywordAnalysisProgress {
            status_check: flags[0],
            openai_generation: flags[1],
            dataforseo_fetch: flags[2],
            scoring_completed: flags[3],
            ..Default::default()
        }
    }

    #[test]
    fn test_mid_run_article() {
        let p = progress([Some(true), Some(true), Some(false), Some(false)]);
        let checklist = Checklist::build(ArticleStatus::KeywordAnalysis, Some(&p));

        let states: Vec<StepState> = checklist.items.iter().map(|i| i.state).collect();
        assert_eq!(
            states,
            vec![StepState::Done, StepState::Done, StepState::Current, StepState::Pending]
        );
        assert_eq!(
            checklist.current().map(|i| i.step),
            Some(AnalysisStep::DataforseoFetch)
        );
        assert_eq!(checklist.done_count(), 2);
        assert!(!checklist.all_done());
    }

    #[test]
    fn test_current_is_first_incomplete_not_last_complete() {
        // A later flag set while an earlier one is not: the earlier one is current.
        let p = progress([Some(true), None, Some(true), None]);
        let checklist = Checklist::build(ArticleStatus::KeywordAnalysis, Some(&p));
        assert_eq!(
            checklist.current().map(|i| i.step),
            Some(AnalysisStep::OpenaiGeneration)
        );
        assert_eq!(checklist.items[2].state, StepState::Done);
    }

    #[test]
    fn test_status_check_inferred_from_status() {
        let analysing = Checklist::build(ArticleStatus::KeywordAnalysis, None);
        assert_eq!(analysing.items[0].state, StepState::Done);
        assert_eq!(
            analysing.current().map(|i| i.step),
            Some(AnalysisStep::OpenaiGeneration)
        );

        let draft = Checklist::build(ArticleStatus::Draft, None);
        assert_eq!(draft.items[0].state, StepState::Current);
    }

    #[test]
    fn test_all_done_has_no_current_step() {
        let p = progress([Some(true); 4]);
        let checklist = Checklist::build(ArticleStatus::KeywordAnalysis, Some(&p));
        assert!(checklist.all_done());
        assert!(checklist.current().is_none());
    }

    #[test]
    fn test_error_does_not_touch_steps() {
        let mut p = progress([Some(true), Some(false), None, None]);
        p.error_message = Some("DataForSEO quota exceeded".into());
        let checklist = Checklist::build(ArticleStatus::KeywordAnalysis, Some(&p));
        assert_eq!(checklist.error.as_deref(), Some("DataForSEO quota exceeded"));
        assert_eq!(checklist.done_count(), 1);
        assert_eq!(
            checklist.current().map(|i| i.step),
            Some(AnalysisStep::OpenaiGeneration)
        );
    }
}
