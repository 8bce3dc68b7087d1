use crate::domain::a101_article::workflow::ArticleWorkflow;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Article cache, pollers and redirect guard shared by every tab
    provide_context(ArticleWorkflow::new());

    view! {
        <AppRoutes />
    }
}
