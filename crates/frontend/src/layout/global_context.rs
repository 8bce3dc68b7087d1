//! App-wide tab state: which screens are open, which one is in front, and
//! whether the sidebar is shown. The active key is mirrored to `?active=`
//! so a reload or a shared link lands on the same screen.

use crate::layout::tabs::tab_labels::title_for_key;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const ACTIVE_PARAM: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// `?active=a101_article_detail_42` → `a101_article_detail_42`
pub fn active_key_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(ACTIVE_PARAM)
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

pub fn search_for_active(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([(ACTIVE_PARAM, key)])).unwrap_or_default();
    format!("?{}", query)
}

/// Tab that takes focus after `closed_index` is removed from `remaining`:
/// the right neighbour, else the left one.
fn neighbour_after_close(remaining: &[Tab], closed_index: usize) -> Option<String> {
    remaining
        .get(closed_index)
        .or_else(|| closed_index.checked_sub(1).and_then(|i| remaining.get(i)))
        .map(|t| t.key.clone())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named in the URL, then keeps the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = active_key_from_search(&search) {
            self.open_tab(&key, &title_for_key(&key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(key) = this.active.get() else {
                return;
            };
            let new_search = search_for_active(&key);
            let Some(w) = window() else {
                return;
            };
            if w.location().search().ok().as_deref() == Some(new_search.as_str()) {
                return;
            }
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_search),
                );
            }
        });
    }

    /// Opens `key` or brings the already open tab to the front.
    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Reactive: re-runs the caller when the active tab changes.
    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active.as_deref() == Some(key))
    }

    /// Detail tabs retitle themselves once the article is loaded.
    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        let changed = self.opened.with_untracked(|tabs| {
            tabs.iter()
                .any(|t| t.key == key && t.title != new_title)
        });
        if changed {
            self.opened.update(|tabs| {
                if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                    tab.title = new_title.to_string();
                }
            });
        }
    }

    pub fn close_tab(&self, key: &str) {
        let Some(index) = self
            .opened
            .with_untracked(|tabs| tabs.iter().position(|t| t.key == key))
        else {
            return;
        };
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| {
            tabs.remove(index);
        });

        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        if was_active {
            let next = self
                .opened
                .with_untracked(|tabs| neighbour_after_close(tabs, index));
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_active_key_from_search() {
        assert_eq!(
            active_key_from_search("?active=a101_article_detail_42").as_deref(),
            Some("a101_article_detail_42")
        );
        assert_eq!(active_key_from_search("?active="), None);
        assert_eq!(active_key_from_search(""), None);
        assert_eq!(active_key_from_search("?other=1"), None);
    }

    #[test]
    fn test_search_for_active() {
        assert_eq!(search_for_active("a103_setting"), "?active=a103_setting");
        let restored = active_key_from_search(&search_for_active("u102_integrated_analysis"));
        assert_eq!(restored.as_deref(), Some("u102_integrated_analysis"));
    }

    #[test]
    fn test_focus_moves_to_neighbour() {
        // closed "b" at index 1 out of [a, b, c]
        assert_eq!(neighbour_after_close(&tabs(&["a", "c"]), 1).as_deref(), Some("c"));
        // closed the last tab
        assert_eq!(neighbour_after_close(&tabs(&["a", "b"]), 2).as_deref(), Some("b"));
        assert_eq!(neighbour_after_close(&[], 0), None);
    }
}
