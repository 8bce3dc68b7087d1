use super::picker_articles;
use crate::domain::a101_article::api;
use crate::domain::a101_article::ui::progress::AnalysisProgress;
use crate::domain::a101_article::ui::status_badge::{status_label, StaleBadge, StatusBadge};
use crate::domain::a101_article::workflow::checklist::Checklist;
use crate::domain::a101_article::workflow::poller::PollPolicy;
use crate::domain::a101_article::workflow::{use_article_watch, use_article_workflow, WatchRole};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::article_keywords_key;
use crate::layout::tabs::tab_labels::title_for_key;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a101_article::{Article, ArticleStatus};
use leptos::prelude::*;
use thaw::*;

const TAB_KEY: &str = "u101_keyword_analysis";

#[component]
pub fn KeywordAnalysisPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let workflow = use_article_workflow();

    let (articles, set_articles) = signal::<Vec<Article>>(Vec::new());
    let (articles_loading, set_articles_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (starting, set_starting) = signal(false);
    let selected_id = RwSignal::new(String::new());

    let load_articles = move || {
        set_articles_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_articles().await {
                Ok(v) => {
                    let _ = set_articles.try_set(v);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
            let _ = set_articles_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        let _ = workflow.list_version.get();
        load_articles();
    });

    let watch = use_article_watch(
        selected_id.into(),
        PollPolicy::Workflow,
        WatchRole::Redirecting,
        Some(TAB_KEY.to_string()),
    );
    let article = watch.article;

    let picker = Memo::new(move |_| {
        let selected = selected_id.get();
        articles.with(|v| picker_articles(v, &selected))
    });

    let checklist = Signal::derive(move || {
        article.with(|a| match a {
            Some(a) => Checklist::build(a.status, a.active_progress()),
            None => Checklist::build(ArticleStatus::Draft, None),
        })
    });

    let handle_start = move |_| {
        let id = selected_id.get_untracked();
        if id.is_empty() {
            return;
        }
        set_starting.set(true);
        set_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::start_keyword_analysis(&id).await {
                Ok(resp) => {
                    log::info!("keyword analysis started for {}: {}", id, resp.message);
                    workflow.arm_redirect(&id);
                    workflow.invalidate(&id);
                    workflow.touch_list();
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(format!(
                        "キーワード分析の開始に失敗しました: {}",
                        e
                    )));
                }
            }
            let _ = set_starting.try_set(false);
        });
    };

    let open_keywords = move || {
        let key = article_keywords_key(&selected_id.get_untracked());
        ctx.open_tab(&key, &title_for_key(&key));
    };

    view! {
        <PageFrame page_id="u101_keyword_analysis--usecase" category="usecase">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"キーワード分析"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_articles()
                        disabled=Signal::derive(move || articles_loading.get())
                    >
                        {icon("refresh")}
                        " 更新"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Card>
                    <div class="form__group">
                        <label class="form__label">"分析する記事を選択"</label>
                        <Select value=selected_id>
                            <option value="">"記事を選択してください"</option>
                            <For
                                each=move || picker.get()
                                key=|a| (a.id.clone(), a.status)
                                children=move |a| view! {
                                    <option value=a.id.clone()>
                                        {format!("{} ({})", a.keyword, status_label(a.status))}
                                    </option>
                                }
                            />
                        </Select>
                        <Show when=move || articles_loading.get()>
                            <p class="text-muted">"記事一覧を読み込み中..."</p>
                        </Show>
                    </div>
                </Card>

                {move || match article.get() {
                    None if selected_id.with(|s| s.is_empty()) => view! {
                        <div class="empty-state">"分析する記事を選択してください"</div>
                    }.into_any(),
                    None => view! {
                        <Flex justify=FlexJustify::Center><Spinner /></Flex>
                    }.into_any(),
                    Some(a) => view! {
                        <Card>
                            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                <h2 class="page__subtitle">"選択された記事"</h2>
                                <Flex>
                                    <StatusBadge status=a.status />
                                    <Show when=move || watch.stale.get()>
                                        <StaleBadge error=watch.error />
                                    </Show>
                                </Flex>
                            </Flex>
                            <div class="article-meta">
                                <p>"キーワード: " {a.keyword.clone()}</p>
                                <p>"ターゲット: " {a.target.clone()}</p>
                                <p>"種類: " {a.article_type.clone()}</p>
                            </div>
                        </Card>
                    }.into_any(),
                }}

                {move || article.with(|a| a.as_ref().map(|a| (a.status, a.can_start_keyword_analysis()))).map(|(status, can_start)| match status {
                    ArticleStatus::KeywordAnalysis => view! {
                        <MessageBar intent=MessageBarIntent::Warning>
                            <div>"キーワード分析が進行中です。完了までお待ちください。"</div>
                        </MessageBar>
                        <p class="text-muted">"関連キーワード100個を生成し、検索ボリューム・競合度を分析しています"</p>
                        <AnalysisProgress checklist=checklist />
                    }.into_any(),
                    ArticleStatus::KeywordSelection => view! {
                        <MessageBar intent=MessageBarIntent::Success>
                            <div>"キーワード分析が完了しました。キーワード選択画面に移動します。"</div>
                        </MessageBar>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_keywords()>
                            "キーワード選択画面へ"
                        </Button>
                    }.into_any(),
                    _ if can_start => view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_start
                            disabled=Signal::derive(move || starting.get())
                        >
                            {icon("search")}
                            {move || if starting.get() { " 分析を開始中..." } else { " キーワード分析を開始" }}
                        </Button>
                    }.into_any(),
                    _ => view! { <></> }.into_any(),
                })}
            </div>
        </PageFrame>
    }
}
