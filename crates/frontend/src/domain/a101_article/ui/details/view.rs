//! Article details - View

use super::view_model::ArticleDetailsVm;
use crate::domain::a101_article::ui::progress::AnalysisProgress;
use crate::domain::a101_article::ui::status_badge::{StaleBadge, StatusBadge};
use crate::domain::a101_article::workflow::checklist::Checklist;
use crate::domain::a101_article::workflow::poller::PollPolicy;
use crate::domain::a101_article::workflow::{use_article_watch, use_article_workflow, WatchRole};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::article_keywords_key;
use crate::layout::tabs::tab_labels::{detail_tab_label, title_for_key};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a101_article::{Article, ArticleStatus};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ArticleDetails(id: String, tab_key: String, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let workflow = use_article_workflow();
    let vm = ArticleDetailsVm::new(id.clone(), workflow);

    let watch = use_article_watch(
        Signal::stored(id.clone()),
        PollPolicy::WorkflowWithPending,
        WatchRole::Redirecting,
        Some(tab_key.clone()),
    );
    let article = watch.article;

    // Заголовок вкладки по данным статьи
    let tab_key_for_title = tab_key.clone();
    Effect::new(move |_| {
        if let Some(title) = article.with(|a| a.as_ref().map(|a| a.display_title().to_string())) {
            ctx.update_tab_title(
                &tab_key_for_title,
                &detail_tab_label(Article::element_name(), &title),
            );
        }
    });

    let checklist = Signal::derive(move || {
        article.with(|a| match a {
            Some(a) => Checklist::build(a.status, a.active_progress()),
            None => Checklist::build(ArticleStatus::Draft, None),
        })
    });
    let status = Signal::derive(move || watch.status.get().unwrap_or_default());
    let is_status = move |s: ArticleStatus| watch.status.get() == Some(s);

    let id_for_keywords = id.clone();
    let open_keywords = move || {
        let key = article_keywords_key(&id_for_keywords);
        ctx.open_tab(&key, &title_for_key(&key));
    };

    view! {
        <PageFrame page_id="a101_article--detail" category="detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || article.with(|a| a.as_ref().map(|a| a.display_title().to_string()).unwrap_or_default())}
                    </h1>
                    <Show when=move || watch.status.get().is_some()>
                        <StatusBadge status=status />
                    </Show>
                    <Show when=move || watch.stale.get()>
                        <StaleBadge error=watch.error />
                    </Show>
                </div>
                <div class="page__header-right">
                    <Space>
                        <Show when=move || !vm.is_editing.get() && article.with(|a| a.is_some())>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| {
                                    if let Some(a) = article.get_untracked() {
                                        vm.begin_edit(&a);
                                    }
                                }
                            >
                                "編集"
                            </Button>
                        </Show>
                        <Show when=move || article.with(|a| a.as_ref().map(|a| a.can_start_keyword_analysis()).unwrap_or(false))>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.start_keyword_analysis()
                                disabled=Signal::derive(move || vm.starting.get())
                            >
                                {icon("search")}
                                {move || if vm.starting.get() { " 開始中..." } else { " キーワード分析を開始" }}
                            </Button>
                        </Show>
                        <Show when=move || is_status(ArticleStatus::KeywordSelection)>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click={
                                    let open_keywords = open_keywords.clone();
                                    move |_| open_keywords()
                                }
                            >
                                {icon("check")}
                                " キーワードを選択"
                            </Button>
                        </Show>
                        <Show when=move || article.with(|a| a.as_ref().map(|a| a.can_publish()).unwrap_or(false))>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.publish_shopify()
                                disabled=Signal::derive(move || vm.publishing.get())
                            >
                                {icon("send")}
                                {move || if vm.publishing.get() { " 投稿中..." } else { " Shopifyに投稿" }}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.publish_wordpress()
                                disabled=Signal::derive(move || vm.publishing.get())
                            >
                                " WordPressに投稿"
                            </Button>
                        </Show>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| watch.refresh()
                        >
                            {icon("refresh")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.delete(on_close)
                            disabled=Signal::derive(move || vm.deleting.get())
                        >
                            {icon("trash")}
                            " 削除"
                        </Button>
                    </Space>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}
                {move || vm.notice.get().map(|n| view! {
                    <MessageBar intent=MessageBarIntent::Success>
                        <div>{n}</div>
                    </MessageBar>
                })}

                {move || {
                    if watch.loading.get() {
                        return view! {
                            <Flex justify=FlexJustify::Center>
                                <Spinner />
                            </Flex>
                        }.into_any();
                    }
                    match article.get() {
                        None => view! {
                            <div class="empty-state">
                                {move || watch.error.get().unwrap_or_else(|| "記事が見つかりません".to_string())}
                            </div>
                        }.into_any(),
                        Some(a) if vm.is_editing.get() => view! {
                            <ArticleEditor vm=vm article=a />
                        }.into_any(),
                        Some(a) => view! {
                            <ArticleBody article=a checklist=checklist />
                        }.into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn ArticleEditor(vm: ArticleDetailsVm, article: Article) -> impl IntoView {
    let article = StoredValue::new(article);
    view! {
        <Card>
            <div class="form__group">
                <label class="form__label">"タイトル"</label>
                <Input value=vm.edit_title />
            </div>
            <div class="form__group">
                <label class="form__label">"内容"</label>
                <Textarea value=vm.edit_content attr:rows=20 />
            </div>
            <Flex justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_edit()>
                    "キャンセル"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| article.with_value(|a| vm.save(a))
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    "保存"
                </Button>
            </Flex>
        </Card>
    }
}

#[component]
fn ArticleBody(article: Article, checklist: Signal<Checklist>) -> impl IntoView {
    let analysing = article.status == ArticleStatus::KeywordAnalysis;
    let failure = (article.status == ArticleStatus::Failed).then(|| {
        article
            .error_message
            .clone()
            .unwrap_or_else(|| "詳細は管理者にお問い合わせください。".to_string())
    });
    let selected = article.selected_keywords.clone().unwrap_or_default();
    let placeholder = if article.status == ArticleStatus::Processing {
        "記事を生成中です..."
    } else {
        "記事内容がありません"
    };

    view! {
        <Card>
            <div class="article-meta">
                <p>"キーワード: " {article.keyword.clone()}</p>
                <p>"ターゲット: " {article.target.clone()} " | 種類: " {article.article_type.clone()}</p>
                <p>"作成日時: " {format_datetime(&article.created_at)} " / 更新日時: " {format_datetime(&article.updated_at)}</p>
                {article.shopify_article_id.clone().map(|sid| view! { <p>"Shopify記事ID: " {sid}</p> })}
                {article.meta_title.clone().map(|t| view! { <p>"メタタイトル: " {t}</p> })}
                {article.meta_description.clone().map(|d| view! { <p>"メタディスクリプション: " {d}</p> })}
                {(!selected.is_empty()).then(|| view! {
                    <p>"選択キーワード: " {selected.join("、")}</p>
                })}
            </div>
        </Card>

        {failure.map(|msg| view! {
            <MessageBar intent=MessageBarIntent::Error>
                <div>
                    <strong>"記事生成に失敗しました"</strong>
                    <p class="pre-wrap">{msg}</p>
                </div>
            </MessageBar>
        })}

        {analysing.then(|| view! { <AnalysisProgress checklist=checklist /> })}

        <Card>
            {match article.content.clone().filter(|c| !c.trim().is_empty()) {
                Some(html) => view! { <div class="article-content pre-wrap" inner_html=html></div> }.into_any(),
                None => view! { <div class="empty-state">{placeholder}</div> }.into_any(),
            }}
        </Card>
    }
}
