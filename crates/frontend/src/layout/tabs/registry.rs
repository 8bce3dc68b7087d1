//! Tab content registry: the single mapping from tab.key to its view.

use super::tab_labels::{ARTICLE_DETAIL_PREFIX, ARTICLE_KEYWORDS_PREFIX};
use crate::domain::a101_article::ui::details::ArticleDetails;
use crate::domain::a101_article::ui::keywords::KeywordSelectionPage;
use crate::domain::a101_article::ui::list::ArticleList;
use crate::domain::a101_article::ui::new::ArticleNew;
use crate::domain::a102_user_option::ui::list::UserOptionList;
use crate::domain::a103_setting::ui::list::SettingList;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u101_keyword_analysis::KeywordAnalysisPage;
use crate::usecases::u102_integrated_analysis::IntegratedAnalysisPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// `tabs_store` is handed to detail views so they can close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // a101: Articles
        "a101_article" => view! { <ArticleList /> }.into_any(),
        "a101_article_new" => view! {
            <ArticleNew on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close)) />
        }
        .into_any(),
        k if k.starts_with(ARTICLE_DETAIL_PREFIX) => {
            let id = k.trim_start_matches(ARTICLE_DETAIL_PREFIX).to_string();
            view! {
                <ArticleDetails
                    id=id
                    tab_key=k.to_string()
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any()
        }
        k if k.starts_with(ARTICLE_KEYWORDS_PREFIX) => {
            let id = k.trim_start_matches(ARTICLE_KEYWORDS_PREFIX).to_string();
            view! {
                <KeywordSelectionPage
                    id=id
                    tab_key=k.to_string()
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any()
        }

        // a102 / a103: Settings
        "a102_user_option" => view! { <UserOptionList /> }.into_any(),
        "a103_setting" => view! { <SettingList /> }.into_any(),

        // Use cases
        "u101_keyword_analysis" => view! { <KeywordAnalysisPage /> }.into_any(),
        "u102_integrated_analysis" => view! { <IntegratedAnalysisPage /> }.into_any(),

        _ => {
            log!("⚠️ Unknown tab key: {}", key);
            view! { <div class="placeholder">{format!("不明なタブ: {}", key)}</div> }.into_any()
        }
    }
}
