//! One tab's content, hidden while another tab is in front.
//!
//! Hidden tabs stay mounted: an article watch in a background tab keeps
//! polling, and its redirect guard waits until the tab is shown again.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = move || key.with_value(|k| tabs_store.is_active(k));

    log::debug!("tab mounted: {}", tab.key);
    on_cleanup(move || {
        key.try_with_value(|k| log::debug!("tab unmounted: {}", k));
    });

    let content = render_tab_content(&tab.key, tabs_store);

    view! {
        <section
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key
        >
            {content}
        </section>
    }
}
