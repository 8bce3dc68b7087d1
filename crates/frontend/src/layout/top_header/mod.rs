//! Top bar: sidebar toggle, application title and the open-tab switcher.

mod windows_dropdown;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;
use leptos::prelude::*;
use windows_dropdown::WindowsDropdown;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "ナビゲーションを隠す" } else { "ナビゲーションを表示" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"SEO記事スタジオ"</span>
            </div>

            <div class="top-header__actions">
                <WindowsDropdown />

                <button
                    class="top-header__icon-btn"
                    title=format!("API: {}", api_base())
                    on:click=move |_| ctx.open_tab("a103_setting", "設定")
                >
                    {icon("settings")}
                </button>
            </div>
        </div>
    }
}
