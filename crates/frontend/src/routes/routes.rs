use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use leptos::prelude::*;

/// Every open tab stays mounted; TabPage hides the inactive ones.
#[component]
fn TabsHost() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs">
            <Show when=move || tabs_store.opened.with(|tabs| tabs.is_empty())>
                <div class="tabs__empty">"左のメニューから画面を開いてください"</div>
            </Show>
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
            />
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the shell is created.
    tabs_store.init_router_integration();

    view! {
        <Shell>
            <TabsHost />
        </Shell>
    }
}
