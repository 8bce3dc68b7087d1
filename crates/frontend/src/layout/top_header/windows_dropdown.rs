//! Dropdown listing every open tab, for switching and closing.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn WindowsDropdown() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_open = RwSignal::new(false);

    let active_title = move || {
        ctx.active
            .get()
            .and_then(|key| {
                ctx.opened
                    .with(|tabs| tabs.iter().find(|tab| tab.key == key).map(|tab| tab.title.clone()))
            })
            .unwrap_or_else(|| "ウィンドウ".to_string())
    };

    let switch_window = move |key: String| {
        ctx.activate_tab(&key);
        is_open.set(false);
    };

    view! {
        <div class="windows-dropdown">
            <button
                class="windows-dropdown__trigger"
                on:click=move |_| is_open.update(|open| *open = !*open)
                title="開いているタブ"
            >
                <span class="windows-dropdown__trigger-text">
                    {move || format!("{} ({})", active_title(), ctx.opened.with(|tabs| tabs.len()))}
                </span>
                {move || if is_open.get() { icon("chevron-up") } else { icon("chevron-down") }}
            </button>

            <Show when=move || is_open.get()>
                <div class="windows-dropdown__menu">
                    {move || {
                        let tabs = ctx.opened.get();
                        if tabs.is_empty() {
                            return view! {
                                <div class="windows-dropdown__empty">"開いているタブはありません"</div>
                            }.into_any();
                        }
                        tabs.into_iter().map(|tab| {
                            let is_active = ctx.is_active(&tab.key);
                            let key_for_switch = tab.key.clone();
                            let key_for_close = tab.key.clone();

                            view! {
                                <div
                                    class="windows-dropdown__item"
                                    class:windows-dropdown__item--active=is_active
                                    on:click=move |_| switch_window(key_for_switch.clone())
                                >
                                    <span class="windows-dropdown__item-title">{tab.title.clone()}</span>
                                    <button
                                        class="windows-dropdown__item-close"
                                        on:click=move |ev: ev::MouseEvent| {
                                            ev.stop_propagation();
                                            ctx.close_tab(&key_for_close);
                                        }
                                        title="閉じる"
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        }).collect_view().into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
