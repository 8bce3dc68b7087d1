//! Article details - ViewModel

use crate::domain::a101_article::api;
use crate::domain::a101_article::workflow::ArticleWorkflow;
use contracts::domain::a101_article::{Article, ArticleUpdate};
use leptos::prelude::*;

/// Edited value wins; an emptied field keeps what the article already has.
pub fn build_update(article: &Article, title: &str, content: &str) -> ArticleUpdate {
    let pick = |edited: &str, current: &Option<String>| {
        if edited.trim().is_empty() {
            current.clone().filter(|c| !c.is_empty())
        } else {
            Some(edited.to_string())
        }
    };
    ArticleUpdate {
        title: pick(title, &article.title),
        content: pick(content, &article.content),
    }
}

#[derive(Clone, Copy)]
pub struct ArticleDetailsVm {
    pub id: StoredValue<String>,
    pub is_editing: RwSignal<bool>,
    pub edit_title: RwSignal<String>,
    pub edit_content: RwSignal<String>,

    pub saving: RwSignal<bool>,
    pub publishing: RwSignal<bool>,
    pub deleting: RwSignal<bool>,
    pub starting: RwSignal<bool>,

    pub error: RwSignal<Option<String>>,
    /// Success message of the last action.
    pub notice: RwSignal<Option<String>>,

    workflow: ArticleWorkflow,
}

impl ArticleDetailsVm {
    pub fn new(id: String, workflow: ArticleWorkflow) -> Self {
        Self {
            id: StoredValue::new(id),
            is_editing: RwSignal::new(false),
            edit_title: RwSignal::new(String::new()),
            edit_content: RwSignal::new(String::new()),
            saving: RwSignal::new(false),
            publishing: RwSignal::new(false),
            deleting: RwSignal::new(false),
            starting: RwSignal::new(false),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            workflow,
        }
    }

    pub fn begin_edit(&self, article: &Article) {
        self.edit_title.set(article.title.clone().unwrap_or_default());
        self.edit_content.set(article.content.clone().unwrap_or_default());
        self.error.set(None);
        self.is_editing.set(true);
    }

    pub fn cancel_edit(&self) {
        self.is_editing.set(false);
    }

    pub fn save(&self, article: &Article) {
        let body = build_update(
            article,
            &self.edit_title.get_untracked(),
            &self.edit_content.get_untracked(),
        );
        let id = self.id.get_value();
        let vm = *self;
        vm.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_article(&id, &body).await {
                Ok(_) => {
                    vm.workflow.invalidate(&id);
                    vm.workflow.touch_list();
                    let _ = vm.is_editing.try_set(false);
                    let _ = vm.notice.try_set(Some("保存しました".into()));
                }
                Err(e) => {
                    let _ = vm.error.try_set(Some(e.to_string()));
                }
            }
            let _ = vm.saving.try_set(false);
        });
    }

    pub fn publish_shopify(&self) {
        let id = self.id.get_value();
        let vm = *self;
        vm.publishing.set(true);
        vm.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::publish_article(&id).await {
                Ok(resp) => {
                    log::info!("article {} published to Shopify: {:?}", id, resp.shopify_article_id);
                    vm.workflow.invalidate(&id);
                    let _ = vm.notice.try_set(Some("Shopifyに投稿しました".into()));
                }
                Err(e) => {
                    let _ = vm.error.try_set(Some(e.to_string()));
                }
            }
            let _ = vm.publishing.try_set(false);
        });
    }

    pub fn publish_wordpress(&self) {
        let id = self.id.get_value();
        let vm = *self;
        vm.publishing.set(true);
        vm.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::publish_wordpress(&id).await {
                Ok(resp) => {
                    log::info!("article {} published to WordPress: {:?}", id, resp.wordpress_article_id);
                    vm.workflow.invalidate(&id);
                    let _ = vm.notice.try_set(Some("WordPressに投稿しました".into()));
                }
                Err(e) => {
                    let _ = vm.error.try_set(Some(e.to_string()));
                }
            }
            let _ = vm.publishing.try_set(false);
        });
    }

    /// Re-arms the redirect so the keyword selection tab opens when the run finishes.
    pub fn start_keyword_analysis(&self) {
        let id = self.id.get_value();
        let vm = *self;
        vm.starting.set(true);
        vm.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::start_keyword_analysis(&id).await {
                Ok(resp) => {
                    log::info!("keyword analysis started for {}: {}", id, resp.message);
                    vm.workflow.arm_redirect(&id);
                    vm.workflow.invalidate(&id);
                    vm.workflow.touch_list();
                }
                Err(e) => {
                    let _ = vm.error.try_set(Some(e.to_string()));
                }
            }
            let _ = vm.starting.try_set(false);
        });
    }

    /// Asks for confirmation; `on_deleted` runs only after the backend confirmed.
    pub fn delete(&self, on_deleted: Callback<()>) {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("本当に削除しますか？").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let id = self.id.get_value();
        let vm = *self;
        let workflow = self.workflow;
        vm.deleting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_article(&id).await {
                Ok(()) => {
                    log::info!("article deleted: {}", id);
                    // Close the tab first so no watcher of `id` outlives it.
                    on_deleted.run(());
                    workflow.forget(&id);
                    workflow.touch_list();
                }
                Err(e) => {
                    let _ = vm.error.try_set(Some(e.to_string()));
                    let _ = vm.deleting.try_set(false);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: Option<&str>, content: Option<&str>) -> Article {
        serde_json::from_value(serde_json::json!({
            "id": "a1",
            "keyword": "k",
            "title": title,
            "content": content,
        }))
        .unwrap()
    }

    #[test]
    fn test_update_uses_edited_values() {
        let a = article(Some("旧タイトル"), Some("<p>旧</p>"));
        let update = build_update(&a, "新タイトル", "<p>新</p>");
        assert_eq!(update.title.as_deref(), Some("新タイトル"));
        assert_eq!(update.content.as_deref(), Some("<p>新</p>"));
    }

    #[test]
    fn test_empty_field_keeps_current_value() {
        let a = article(Some("旧タイトル"), None);
        let update = build_update(&a, "  ", "");
        assert_eq!(update.title.as_deref(), Some("旧タイトル"));
        assert!(update.content.is_none());
    }
}
