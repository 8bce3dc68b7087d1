//! Article watch: the status poller, progress checklist and redirect guard,
//! wired to Leptos signals once and shared by every view that follows an
//! article through the keyword workflow.

pub mod cache;
pub mod checklist;
pub mod poller;
pub mod redirect;

use self::cache::ArticleCacheState;
use self::poller::{next_step, PollPolicy, PollRegistry, PollStep, PollTicket};
use self::redirect::{RedirectGuard, ViewPosition};
pub use self::redirect::WatchRole;
use super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::article_keywords_key;
use crate::layout::tabs::tab_labels::title_for_key;
use crate::shared::api_utils::POLL_INTERVAL_MS;
use crate::shared::http::ApiError;
use contracts::domain::a101_article::{Article, ArticleStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// App-wide article cache, the per-article poll loops and the redirect guard.
#[derive(Clone, Copy)]
pub struct ArticleWorkflow {
    pub cache: RwSignal<ArticleCacheState>,
    /// Bumped whenever an article is created, deleted or changes stage.
    pub list_version: RwSignal<u64>,
    redirects: StoredValue<RedirectGuard>,
    pollers: StoredValue<PollRegistry>,
}

impl ArticleWorkflow {
    pub fn new() -> Self {
        Self {
            cache: RwSignal::new(ArticleCacheState::default()),
            list_version: RwSignal::new(0),
            redirects: StoredValue::new(RedirectGuard::default()),
            pollers: StoredValue::new(PollRegistry::default()),
        }
    }

    /// Refetches `id` now and restarts its loop, if any view watches it.
    pub fn invalidate(&self, id: &str) {
        log::debug!("article cache invalidated: {}", id);
        if let Some(ticket) = self.pollers.try_update_value(|r| r.restart(id)).flatten() {
            self.start(ticket);
        }
    }

    /// Asks every open article list to reload.
    pub fn touch_list(&self) {
        self.list_version.update(|v| *v += 1);
    }

    pub fn store(&self, article: Article) {
        self.cache.update(|c| c.store(article));
    }

    /// Deleted article: its loop ends and its snapshot goes away.
    pub fn forget(&self, id: &str) {
        self.pollers.update_value(|r| r.stop(id));
        self.cache.update(|c| c.remove(id));
    }

    /// A new analysis run was started: its arrival in keyword selection navigates again.
    pub fn arm_redirect(&self, id: &str) {
        self.redirects.update_value(|g| g.arm(id));
    }

    fn start(&self, ticket: PollTicket) {
        log::debug!("polling {} (generation {})", ticket.id, ticket.generation);
        spawn_local(poll_loop(ticket, *self, |id: String| async move {
            api::fetch_article(&id).await
        }));
    }
}

pub fn use_article_workflow() -> ArticleWorkflow {
    use_context::<ArticleWorkflow>().expect("ArticleWorkflow not found")
}

#[derive(Clone, Copy)]
pub struct ArticleWatch {
    pub article: Memo<Option<Article>>,
    pub status: Memo<Option<ArticleStatus>>,
    /// The last poll failed and `article` may be out of date.
    pub stale: Memo<bool>,
    pub error: Memo<Option<String>>,
    /// First fetch for the current id has not finished yet.
    pub loading: Memo<bool>,
    id: Signal<String>,
    workflow: ArticleWorkflow,
}

impl ArticleWatch {
    pub fn refresh(&self) {
        let id = self.id.get_untracked();
        if !id.is_empty() {
            self.workflow.invalidate(&id);
        }
    }
}

/// Follows one article. An empty id means "nothing selected".
///
/// Views watching the same id share one poll loop, run with the widest of
/// their policies. `tab_key` is the tab hosting the view; while that tab is
/// in the background the redirect guard holds its state instead of firing.
pub fn use_article_watch(
    id: Signal<String>,
    policy: PollPolicy,
    role: WatchRole,
    tab_key: Option<String>,
) -> ArticleWatch {
    let workflow = use_article_workflow();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let watcher = workflow
        .pollers
        .try_update_value(|r| r.register())
        .unwrap_or_default();

    let article = Memo::new(move |_| {
        let id = id.get();
        workflow.cache.with(|c| c.article(&id).cloned())
    });
    let status = Memo::new(move |_| article.with(|a| a.as_ref().map(|a| a.status)));
    let stale = Memo::new(move |_| {
        let id = id.get();
        workflow.cache.with(|c| c.entry(&id).map(|e| e.stale).unwrap_or(false))
    });
    let error = Memo::new(move |_| {
        let id = id.get();
        workflow
            .cache
            .with(|c| c.entry(&id).and_then(|e| e.last_error.clone()))
    });
    let loading = Memo::new(move |_| {
        let id = id.get();
        !id.is_empty() && workflow.cache.with(|c| c.entry(&id).is_none())
    });

    Effect::new(move |_| {
        let id = id.get();
        if id.is_empty() {
            workflow.pollers.update_value(|r| r.unwatch(watcher));
            return;
        }
        if let Some(ticket) = workflow
            .pollers
            .try_update_value(|r| r.watch(watcher, &id, policy))
            .flatten()
        {
            workflow.start(ticket);
        }
    });

    let is_visible = Memo::new(move |_| match tab_key.as_deref() {
        Some(key) => ctx.is_active(key),
        None => true,
    });

    Effect::new(move |_| {
        let id = id.get();
        let Some(current) = status.get() else {
            return;
        };
        let position = ViewPosition::of(role, is_visible.get());
        let fire = workflow
            .redirects
            .try_update_value(|g| g.observe(&id, current, position))
            .unwrap_or(false);
        if fire {
            let key = article_keywords_key(&id);
            log::debug!("keyword selection reached, opening {}", key);
            ctx.open_tab(&key, &title_for_key(&key));
        }
    });

    on_cleanup(move || {
        workflow.pollers.try_update_value(|r| r.unwatch(watcher));
    });

    ArticleWatch {
        article,
        status,
        stale,
        error,
        loading,
        id,
        workflow,
    }
}

/// Stamps the next fetch, or `false` once the run was replaced or stopped.
fn begin_fetch(workflow: ArticleWorkflow, ticket: &mut PollTicket) -> bool {
    workflow
        .pollers
        .try_update_value(|r| {
            let current = r.is_current(ticket);
            if current {
                r.issue_request(ticket);
            }
            current
        })
        .unwrap_or(false)
}

fn is_current(workflow: ArticleWorkflow, ticket: &PollTicket) -> bool {
    workflow
        .pollers
        .try_with_value(|r| r.is_current(ticket))
        .unwrap_or(false)
}

/// One fetch per tick: the next sleep starts only after the response is handled.
async fn poll_loop<F, Fut>(mut ticket: PollTicket, workflow: ArticleWorkflow, fetch: F)
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Article, ApiError>>,
{
    loop {
        if !begin_fetch(workflow, &mut ticket) {
            return;
        }

        let result = fetch(ticket.id.clone()).await;

        if !is_current(workflow, &ticket) {
            log::debug!(
                "dropping response for {} (generation {})",
                ticket.id,
                ticket.generation
            );
            return;
        }
        let Some(policy) = workflow
            .pollers
            .try_with_value(|r| r.policy(&ticket.id))
            .flatten()
        else {
            return;
        };

        let last_known = workflow
            .cache
            .try_with_untracked(|c| c.status(&ticket.id))
            .flatten();
        let step = next_step(policy, result.as_ref().map(|a| a.status), last_known);

        match result {
            Ok(article) => {
                workflow.cache.update(|c| {
                    if !c.store_response(article, ticket.request) {
                        log::debug!("ignored out-of-order response for {}", ticket.id);
                    }
                });
            }
            Err(e) => {
                if e.is_not_found() {
                    log::warn!("article {} no longer exists", ticket.id);
                } else {
                    log::warn!("article {} poll failed: {}", ticket.id, e);
                }
                workflow
                    .cache
                    .update(|c| c.mark_stale(&ticket.id, e.to_string()));
            }
        }

        if step == PollStep::Stop {
            log::debug!("article {} settled, polling stopped", ticket.id);
            return;
        }

        TimeoutFuture::new(POLL_INTERVAL_MS).await;
    }
}
