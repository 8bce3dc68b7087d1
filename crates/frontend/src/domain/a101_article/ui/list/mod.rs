mod state;

use self::state::create_state;
use crate::domain::a101_article::api;
use crate::domain::a101_article::ui::status_badge::{status_label, StatusBadge};
use crate::domain::a101_article::workflow::use_article_workflow;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::article_detail_key;
use crate::layout::tabs::tab_labels::{tab_label_for_key, title_for_key};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a101_article::ArticleStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ArticleList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let workflow = use_article_workflow();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());

    let load = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_articles().await {
                Ok(items) => {
                    log::debug!("loaded {} articles", items.len());
                    let _ = state.try_update(|s| {
                        s.items = items;
                        s.is_loaded = true;
                    });
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    // Первая загрузка и перезагрузка после изменений в других вкладках
    Effect::new(move |_| {
        let _ = workflow.list_version.get();
        load();
    });

    Effect::new(move |_| {
        let search = search.get();
        let filter = ArticleStatus::from_str(&status_filter.get()).ok();
        state.update(|s| {
            s.search = search;
            s.status_filter = filter;
        });
    });

    let rows = Memo::new(move |_| state.with(|s| s.visible()));

    let open_article = move |id: String| {
        let key = article_detail_key(&id);
        ctx.open_tab(&key, &title_for_key(&key));
    };

    let count_of = move |status: ArticleStatus| {
        Signal::derive(move || state.with(|s| s.count_with(status)).to_string())
    };

    view! {
        <PageFrame page_id="a101_article--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"記事一覧"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || state.with(|s| s.items.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Space>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| ctx.open_tab("a101_article_new", tab_label_for_key("a101_article_new"))
                        >
                            {icon("plus")}
                            " 新規作成"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| load()
                            disabled=Signal::derive(move || loading.get())
                        >
                            {icon("refresh")}
                            {move || if loading.get() { " 読み込み中..." } else { " 更新" }}
                        </Button>
                    </Space>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard label="完了" marker="✅" value=count_of(ArticleStatus::Completed) tone=StatTone::Success />
                    <StatCard label="キーワード選択待ち" marker="📝" value=count_of(ArticleStatus::KeywordSelection) tone=StatTone::Warning />
                    <StatCard label="処理中" marker="⏳" value=Signal::derive(move || {
                        state.with(|s| s.items.iter().filter(|a| a.status.is_transient()).count()).to_string()
                    }) />
                    <StatCard label="失敗" marker="⚠" value=count_of(ArticleStatus::Failed) tone=StatTone::Error />
                </div>

                <Flex align=FlexAlign::End>
                    <div class="form__group" style="min-width: 280px;">
                        <label class="form__label">"検索"</label>
                        <Input value=search placeholder="キーワード・タイトル" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"ステータス"</label>
                        <Select value=status_filter>
                            <option value="">"すべて"</option>
                            {ArticleStatus::ALL.into_iter().map(|s| view! {
                                <option value=s.as_str()>{status_label(s)}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                </Flex>

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=220.0>"タイトル"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=160.0>"キーワード"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=140.0>"ステータス"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=140.0>"ターゲット"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"作成日時"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|a| (a.id.clone(), a.updated_at.clone(), a.status)
                                children=move |article| {
                                    let id = article.id.clone();
                                    let status = article.status;
                                    let failure = article
                                        .error_message
                                        .clone()
                                        .filter(|_| status == ArticleStatus::Failed);
                                    let title = article.display_title().to_string();
                                    let keyword = article.keyword.clone();
                                    let target = article.target.clone();
                                    let created = format_datetime(&article.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_article(id.clone());
                                                        }
                                                    >
                                                        {title}
                                                    </a>
                                                    {failure.map(|msg| view! {
                                                        <div class="table__sub-error">{msg}</div>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{keyword}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{target}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{created}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || state.with(|s| s.is_loaded) && rows.with(|r| r.is_empty())>
                    <div class="empty-state">"記事がありません"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
