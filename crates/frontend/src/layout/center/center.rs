use leptos::prelude::*;

/// Content zone holding every open tab.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <main data-zone="center" class="app-tabs">
            {children()}
        </main>
    }
}
