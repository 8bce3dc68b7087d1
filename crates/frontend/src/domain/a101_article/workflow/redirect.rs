//! One-shot navigation to keyword selection, scoped per article id.

use contracts::domain::a101_article::ArticleStatus;
use std::collections::HashMap;

/// Where the observing view is relative to the keyword selection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPosition {
    /// The observer is the keyword selection view itself.
    KeywordSelection,
    /// Another view, currently visible.
    Elsewhere,
    /// Any view in a background tab, the selection view included.
    Hidden,
}

/// What the watching view is, for the redirect guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchRole {
    /// The keyword selection view: never redirects, marks the redirect as done.
    KeywordSelection,
    /// Any other view: redirects once when the article reaches keyword selection.
    Redirecting,
}

impl ViewPosition {
    /// Only a visible selection view consumes the redirect.
    pub fn of(role: WatchRole, visible: bool) -> ViewPosition {
        match (role, visible) {
            (_, false) => ViewPosition::Hidden,
            (WatchRole::KeywordSelection, true) => ViewPosition::KeywordSelection,
            (WatchRole::Redirecting, true) => ViewPosition::Elsewhere,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Armed,
    Fired,
}

/// `id → {Armed, Fired}`. An id never observed before counts as armed.
#[derive(Debug, Default, Clone)]
pub struct RedirectGuard {
    states: HashMap<String, GuardState>,
}

impl RedirectGuard {
    /// Feeds one status observation; `true` means navigate now.
    ///
    /// Leaving `keyword_selection` re-arms, whoever observes it, hidden or not.
    /// A visible selection view counts as the navigation for the current
    /// entry. A hidden observer of `keyword_selection` never fires and never
    /// marks the entry as done, so the redirect happens once a visible view
    /// sees it.
    pub fn observe(&mut self, id: &str, status: ArticleStatus, view: ViewPosition) -> bool {
        if status != ArticleStatus::KeywordSelection {
            self.states.insert(id.to_string(), GuardState::Armed);
            return false;
        }

        let state = self
            .states
            .get(id)
            .copied()
            .unwrap_or(GuardState::Armed);

        match (state, view) {
            (GuardState::Fired, _) | (GuardState::Armed, ViewPosition::Hidden) => false,
            (GuardState::Armed, ViewPosition::KeywordSelection) => {
                self.states.insert(id.to_string(), GuardState::Fired);
                false
            }
            (GuardState::Armed, ViewPosition::Elsewhere) => {
                self.states.insert(id.to_string(), GuardState::Fired);
                true
            }
        }
    }

    /// Explicit re-arm, e.g. right after the user starts a new analysis run.
    pub fn arm(&mut self, id: &str) {
        self.states.insert(id.to_string(), GuardState::Armed);
    }

    pub fn is_armed(&self, id: &str) -> bool {
        self.states.get(id).copied().unwrap_or(GuardState::Armed) == GuardState::Armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ArticleStatus::*;

    #[test]
    fn test_fires_once_per_transition() {
        let mut guard = RedirectGuard::default();
        assert!(!guard.observe("a1", KeywordAnalysis, ViewPosition::Elsewhere));
        assert!(guard.observe("a1", KeywordSelection, ViewPosition::Elsewhere));
        // Repeated polls with the same status: nothing more.
        assert!(!guard.observe("a1", KeywordSelection, ViewPosition::Elsewhere));
        assert!(!guard.observe("a1", KeywordSelection, ViewPosition::Elsewhere));
    }

    #[test]
    fn test_re_entry_fires_again() {
        let mut guard = RedirectGuard::default();
        guard.observe("a1", KeywordAnalysis, ViewPosition::Elsewhere);
        assert!(guard.observe("a1", KeywordSelection, ViewPosition::Elsewhere));
        assert!(!guard.observe("a1", KeywordAnalysis, ViewPosition::Elsewhere));
        assert!(guard.observe("a1", KeywordSelection, ViewPosition::Elsewhere));
    }

    #[test]
    fn test_scoped_per_article() {
        let mut guard = RedirectGuard::default();
        guard.observe("a1", KeywordAnalysis, ViewPosition::Elsewhere);
        assert!(guard.observe("a1", KeywordSelection, ViewPosition::Elsewhere));
        // Another article is unaffected by a1 having fired.
        guard.observe("b2", KeywordAnalysis, ViewPosition::Elsewhere);
        assert!(guard.observe("b2", KeywordSelection, ViewPosition::Elsewhere));
        assert!(!guard.is_armed("a1"));
    }

    #[test]
    fn test_already_on_selection_view() {
        let mut guard = RedirectGuard::default();
        guard.observe("a1", KeywordAnalysis, ViewPosition::KeywordSelection);
        assert!(!guard.observe("a1", KeywordSelection, ViewPosition::KeywordSelection));
        // Leaving the selection view afterwards does not bounce the user back.
        assert!(!guard.observe("a1", KeywordSelection, ViewPosition::Elsewhere));
    }

    #[test]
    fn test_hidden_tab_defers_until_visible() {
        let mut guard = RedirectGuard::default();
        guard.observe("a1", KeywordAnalysis, ViewPosition::Hidden);
        assert!(!guard.observe("a1", KeywordSelection, ViewPosition::Hidden));
        assert!(guard.is_armed("a1"));
        assert!(guard.observe("a1", KeywordSelection, ViewPosition::Elsewhere));
    }

    #[test]
    fn test_explicit_arm() {
        let mut guard = RedirectGuard::default();
        assert!(guard.observe("a1", KeywordSelection, ViewPosition::Elsewhere));
        guard.arm("a1");
        assert!(guard.observe("a1", KeywordSelection, ViewPosition::Elsewhere));
    }

    #[test]
    fn test_hidden_selection_tab_does_not_consume_redirect() {
        let mut guard = RedirectGuard::default();
        let hidden_selection = ViewPosition::of(WatchRole::KeywordSelection, false);
        let visible_details = ViewPosition::of(WatchRole::Redirecting, true);
        assert_eq!(hidden_selection, ViewPosition::Hidden);

        assert!(!guard.observe("a1", KeywordAnalysis, visible_details));
        assert!(!guard.observe("a1", KeywordSelection, hidden_selection));
        assert!(guard.is_armed("a1"));
        assert!(guard.observe("a1", KeywordSelection, visible_details));
    }

    #[test]
    fn test_view_position_of() {
        assert_eq!(
            ViewPosition::of(WatchRole::KeywordSelection, true),
            ViewPosition::KeywordSelection
        );
        assert_eq!(ViewPosition::of(WatchRole::Redirecting, true), ViewPosition::Elsewhere);
        assert_eq!(ViewPosition::of(WatchRole::Redirecting, false), ViewPosition::Hidden);
    }
}
