//! Status poller: which statuses keep the 2 s loop alive, what a tick does
//! with its fetch result, and a registry that keeps one loop per article
//! however many views are watching it.

use crate::shared::http::ApiError;
use contracts::domain::a101_article::ArticleStatus;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPolicy {
    /// `keyword_analysis` and `keyword_selection`.
    Workflow,
    /// Also `draft` and `processing`, to catch the window right after creation.
    WorkflowWithPending,
}

impl PollPolicy {
    /// `None` is "status not known yet", e.g. the first fetch failed.
    pub fn should_poll(self, status: Option<ArticleStatus>) -> bool {
        let Some(status) = status else {
            return true;
        };
        match status {
            ArticleStatus::KeywordAnalysis | ArticleStatus::KeywordSelection => true,
            ArticleStatus::Draft | ArticleStatus::Processing => {
                self == PollPolicy::WorkflowWithPending
            }
            ArticleStatus::Completed | ArticleStatus::Failed => false,
        }
    }

    /// The policy that polls whenever either of the two would.
    pub fn widest(self, other: PollPolicy) -> PollPolicy {
        if self == PollPolicy::WorkflowWithPending || other == PollPolicy::WorkflowWithPending {
            PollPolicy::WorkflowWithPending
        } else {
            PollPolicy::Workflow
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    /// Sleep one interval, then fetch again.
    Continue,
    Stop,
}

/// Decides the loop's next move from one fetch.
///
/// A 404 ends the loop. Any other failure keeps polling as long as the last
/// known status would, so a transient error never freezes the checklist.
pub fn next_step(
    policy: PollPolicy,
    fetched: Result<ArticleStatus, &ApiError>,
    last_known: Option<ArticleStatus>,
) -> PollStep {
    let keep_going = match fetched {
        Ok(status) => policy.should_poll(Some(status)),
        Err(e) if e.is_not_found() => false,
        Err(_) => policy.should_poll(last_known),
    };
    if keep_going {
        PollStep::Continue
    } else {
        PollStep::Stop
    }
}

/// Identifies one run of an article's loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTicket {
    pub id: String,
    pub generation: u64,
    /// Order in which fetches of this run were issued, see [`PollRegistry::issue_request`].
    pub request: u64,
}

pub type WatcherId = u64;

/// Watchers per article and the loop serving them.
///
/// Each watched id has exactly one current generation; starting a run bumps
/// it, which makes every ticket of the previous run stale.
#[derive(Debug, Default, Clone)]
pub struct PollRegistry {
    next_watcher: WatcherId,
    next_request: u64,
    watchers: HashMap<WatcherId, (String, PollPolicy)>,
    generations: HashMap<String, u64>,
}

impl PollRegistry {
    pub fn register(&mut self) -> WatcherId {
        self.next_watcher += 1;
        self.next_watcher
    }

    /// Points `watcher` at `id`. Returns a ticket when a loop must be
    /// started: nobody watched `id` yet, or the watcher widens the policy.
    pub fn watch(&mut self, watcher: WatcherId, id: &str, policy: PollPolicy) -> Option<PollTicket> {
        let before = self.policy(id);
        if let Some((previous, _)) = self.watchers.get(&watcher).cloned() {
            if previous != id {
                self.unwatch(watcher);
            }
        }
        self.watchers.insert(watcher, (id.to_string(), policy));

        match before {
            Some(existing) if existing.widest(policy) == existing => None,
            _ => Some(self.restart_run(id)),
        }
    }

    /// Drops `watcher`; the loop of its article ends with the last watcher.
    pub fn unwatch(&mut self, watcher: WatcherId) {
        let Some((id, _)) = self.watchers.remove(&watcher) else {
            return;
        };
        if self.policy(&id).is_none() {
            self.generations.remove(&id);
        }
    }

    /// Replaces the running loop of `id` with a fresh one, if anyone watches it.
    pub fn restart(&mut self, id: &str) -> Option<PollTicket> {
        self.policy(id)?;
        Some(self.restart_run(id))
    }

    /// Ends the loop of `id` without starting another.
    pub fn stop(&mut self, id: &str) {
        if let Some(generation) = self.generations.get_mut(id) {
            *generation += 1;
        }
    }

    /// Widest policy among the watchers of `id`.
    pub fn policy(&self, id: &str) -> Option<PollPolicy> {
        self.watchers
            .values()
            .filter(|(watched, _)| watched == id)
            .map(|(_, policy)| *policy)
            .reduce(PollPolicy::widest)
    }

    pub fn is_current(&self, ticket: &PollTicket) -> bool {
        self.generations.get(&ticket.id) == Some(&ticket.generation)
    }

    /// Stamps the next fetch of `ticket`; later stamps are issued later.
    pub fn issue_request(&mut self, ticket: &mut PollTicket) {
        self.next_request += 1;
        ticket.request = self.next_request;
    }

    fn restart_run(&mut self, id: &str) -> PollTicket {
        let generation = self.generations.entry(id.to_string()).or_default();
        *generation += 1;
        PollTicket {
            id: id.to_string(),
            generation: *generation,
            request: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_policy() {
        let p = PollPolicy::Workflow;
        assert!(p.should_poll(Some(ArticleStatus::KeywordAnalysis)));
        assert!(p.should_poll(Some(ArticleStatus::KeywordSelection)));
        assert!(!p.should_poll(Some(ArticleStatus::Draft)));
        assert!(!p.should_poll(Some(ArticleStatus::Processing)));
        assert!(!p.should_poll(Some(ArticleStatus::Completed)));
        assert!(!p.should_poll(Some(ArticleStatus::Failed)));
        assert!(p.should_poll(None));
    }

    #[test]
    fn test_pending_policy() {
        let p = PollPolicy::WorkflowWithPending;
        assert!(p.should_poll(Some(ArticleStatus::Draft)));
        assert!(p.should_poll(Some(ArticleStatus::Processing)));
        assert!(p.should_poll(Some(ArticleStatus::KeywordAnalysis)));
        assert!(!p.should_poll(Some(ArticleStatus::Completed)));
    }

    #[test]
    fn test_transient_error_keeps_polling() {
        let timeout = ApiError::Timeout;
        let server = ApiError::Server {
            status: 502,
            detail: "bad gateway".into(),
        };
        for e in [&timeout, &server] {
            assert_eq!(
                next_step(PollPolicy::Workflow, Err(e), Some(ArticleStatus::KeywordAnalysis)),
                PollStep::Continue
            );
            assert_eq!(
                next_step(PollPolicy::Workflow, Err(e), None),
                PollStep::Continue
            );
        }
        assert_eq!(
            next_step(PollPolicy::Workflow, Err(&timeout), Some(ArticleStatus::Completed)),
            PollStep::Stop
        );
    }

    #[test]
    fn test_not_found_stops() {
        let gone = ApiError::Server {
            status: 404,
            detail: "Article not found".into(),
        };
        assert_eq!(
            next_step(PollPolicy::WorkflowWithPending, Err(&gone), Some(ArticleStatus::KeywordAnalysis)),
            PollStep::Stop
        );
    }

    #[test]
    fn test_polls_until_status_leaves_workflow() {
        let statuses = [
            ArticleStatus::KeywordAnalysis,
            ArticleStatus::KeywordAnalysis,
            ArticleStatus::KeywordSelection,
            ArticleStatus::Processing,
            ArticleStatus::Completed,
        ];
        let fetches = statuses
            .iter()
            .position(|s| next_step(PollPolicy::Workflow, Ok(*s), None) == PollStep::Stop)
            .map(|i| i + 1);
        assert_eq!(fetches, Some(4));

        let fetches = statuses
            .iter()
            .position(|s| next_step(PollPolicy::WorkflowWithPending, Ok(*s), None) == PollStep::Stop)
            .map(|i| i + 1);
        assert_eq!(fetches, Some(5));
    }

    #[test]
    fn test_one_loop_per_article() {
        let mut registry = PollRegistry::default();
        let details = registry.register();
        let selection = registry.register();

        let first = registry.watch(details, "a1", PollPolicy::Workflow).unwrap();
        assert!(registry.is_current(&first));
        // Second view on the same article shares the running loop.
        assert!(registry.watch(selection, "a1", PollPolicy::Workflow).is_none());
        assert!(registry.is_current(&first));

        // First watcher leaving keeps the loop for the other one.
        registry.unwatch(details);
        assert!(registry.is_current(&first));
        registry.unwatch(selection);
        assert!(!registry.is_current(&first));
        assert_eq!(registry.policy("a1"), None);
    }

    #[test]
    fn test_wider_policy_restarts_loop() {
        let mut registry = PollRegistry::default();
        let selection = registry.register();
        let details = registry.register();

        let first = registry.watch(selection, "a1", PollPolicy::Workflow).unwrap();
        let second = registry
            .watch(details, "a1", PollPolicy::WorkflowWithPending)
            .unwrap();
        assert!(!registry.is_current(&first));
        assert!(registry.is_current(&second));
        assert_eq!(registry.policy("a1"), Some(PollPolicy::WorkflowWithPending));

        registry.unwatch(details);
        assert_eq!(registry.policy("a1"), Some(PollPolicy::Workflow));
    }

    #[test]
    fn test_restart_and_stop_discard_old_tickets() {
        let mut registry = PollRegistry::default();
        let watcher = registry.register();
        let first = registry.watch(watcher, "a1", PollPolicy::Workflow).unwrap();

        let second = registry.restart("a1").unwrap();
        assert!(!registry.is_current(&first));
        assert!(registry.is_current(&second));

        // Deleted article: the loop ends and nothing replaces it.
        registry.stop("a1");
        assert!(!registry.is_current(&second));
        assert!(registry.restart("zz").is_none());
    }

    #[test]
    fn test_switching_id_moves_the_watcher() {
        let mut registry = PollRegistry::default();
        let watcher = registry.register();
        let old = registry.watch(watcher, "a1", PollPolicy::Workflow).unwrap();
        let new = registry.watch(watcher, "a2", PollPolicy::Workflow).unwrap();
        assert!(!registry.is_current(&old));
        assert!(registry.is_current(&new));
        assert_eq!(registry.policy("a1"), None);
    }

    #[test]
    fn test_requests_are_issued_in_order() {
        let mut registry = PollRegistry::default();
        let watcher = registry.register();
        let mut ticket = registry.watch(watcher, "a1", PollPolicy::Workflow).unwrap();
        registry.issue_request(&mut ticket);
        let earlier = ticket.request;
        registry.issue_request(&mut ticket);
        assert!(ticket.request > earlier);
    }
}
