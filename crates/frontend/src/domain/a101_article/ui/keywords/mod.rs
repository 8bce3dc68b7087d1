//! Keyword selection for one article.

use crate::domain::a101_article::api;
use crate::domain::a101_article::keyword_selection::{
    visible_keywords, CompetitionLevel, KeywordSelection, KeywordSort,
};
use crate::domain::a101_article::ui::progress::AnalysisProgress;
use crate::domain::a101_article::ui::status_badge::{StaleBadge, StatusBadge};
use crate::domain::a101_article::workflow::checklist::Checklist;
use crate::domain::a101_article::workflow::poller::PollPolicy;
use crate::domain::a101_article::workflow::{use_article_watch, use_article_workflow, WatchRole};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::article_detail_key;
use crate::layout::tabs::tab_labels::title_for_key;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_decimal, format_number_int};
use crate::shared::page_frame::PageFrame;
use contracts::domain::a101_article::{AnalyzedKeyword, ArticleStatus};
use leptos::prelude::*;
use thaw::*;

/// What the page can show for the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Loading,
    Analysing,
    Selecting,
    /// Completed or failed.
    Done,
}

fn stage_of(status: Option<ArticleStatus>) -> Stage {
    match status {
        None => Stage::Loading,
        Some(ArticleStatus::KeywordSelection) => Stage::Selecting,
        Some(
            ArticleStatus::Draft | ArticleStatus::Processing | ArticleStatus::KeywordAnalysis,
        ) => Stage::Analysing,
        Some(_) => Stage::Done,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn KeywordSelectionPage(id: String, tab_key: String, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let workflow = use_article_workflow();
    let watch = use_article_watch(
        Signal::stored(id.clone()),
        PollPolicy::WorkflowWithPending,
        WatchRole::KeywordSelection,
        Some(tab_key),
    );
    let article = watch.article;
    let stored_id = StoredValue::new(id);

    let filter = RwSignal::new(String::new());
    let sort = RwSignal::new(KeywordSort::default().as_str().to_string());
    let selection = RwSignal::new(KeywordSelection::default());
    let submitting = RwSignal::new(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let stage = Memo::new(move |_| stage_of(watch.status.get()));
    let all_keywords = Memo::new(move |_| {
        article.with(|a| {
            a.as_ref()
                .map(|a| a.selectable_keywords().to_vec())
                .unwrap_or_default()
        })
    });
    let visible = Memo::new(move |_| {
        let sort = KeywordSort::from_str(&sort.get()).unwrap_or_default();
        all_keywords.with(|kws| filter.with(|f| visible_keywords(kws, f, sort)))
    });
    let checklist = Signal::derive(move || {
        article.with(|a| match a {
            Some(a) => Checklist::build(a.status, a.active_progress()),
            None => Checklist::build(ArticleStatus::Draft, None),
        })
    });

    let open_details = move || {
        let key = article_detail_key(&stored_id.get_value());
        ctx.open_tab(&key, &title_for_key(&key));
    };

    let handle_submit = move |_| {
        let request = match selection.with_untracked(|s| s.submission()) {
            Ok(r) => r,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        submitting.set(true);
        let id = stored_id.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api::select_keywords(&id, &request).await {
                Ok(resp) => {
                    log::info!("{} keywords selected for {}", resp.selected_count, id);
                    workflow.invalidate(&id);
                    workflow.touch_list();
                    let key = article_detail_key(&id);
                    ctx.open_tab(&key, &title_for_key(&key));
                    on_close.run(());
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                    let _ = submitting.try_set(false);
                }
            }
        });
    };

    let toggle_all_visible = move || {
        let rows = visible.get_untracked();
        selection.update(|s| {
            if s.all_visible_selected(&rows) {
                s.clear_visible(&rows);
            } else {
                s.select_visible(&rows);
            }
        });
    };

    view! {
        <PageFrame page_id="a101_article_keywords--usecase" category="usecase">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"キーワード選択"</h1>
                    <Show when=move || watch.status.get().is_some()>
                        <StatusBadge status=Signal::derive(move || watch.status.get().unwrap_or_default()) />
                    </Show>
                    <Show when=move || watch.stale.get()>
                        <StaleBadge error=watch.error />
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| watch.refresh()>
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <p>
                    "メインキーワード: "
                    <strong>{move || article.with(|a| a.as_ref().map(|a| a.keyword.clone()).unwrap_or_default())}</strong>
                </p>

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                {move || match stage.get() {
                    Stage::Loading => view! {
                        <Flex justify=FlexJustify::Center>
                            {move || match watch.error.get() {
                                Some(e) if !watch.loading.get() => view! { <div class="empty-state">{e}</div> }.into_any(),
                                _ => view! { <Spinner /> }.into_any(),
                            }}
                        </Flex>
                    }.into_any(),
                    Stage::Analysing => view! {
                        <Flex vertical=true>
                            <Flex align=FlexAlign::Center>
                                <Spinner size=SpinnerSize::Small />
                                <span>"キーワード分析中..."</span>
                            </Flex>
                            <AnalysisProgress checklist=checklist />
                        </Flex>
                    }.into_any(),
                    Stage::Done => view! {
                        <div class="empty-state">
                            <p>
                                "この記事は既に処理済みです（ステータス: "
                                {move || watch.status.get().map(|s| s.as_str()).unwrap_or_default()}
                                "）"
                            </p>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| open_details()>
                                "記事詳細に戻る"
                            </Button>
                        </div>
                    }.into_any(),
                    Stage::Selecting => view! {
                        <p class="text-muted">"記事に使用するキーワードを選択してください（複数選択可能）"</p>

                        <Flex align=FlexAlign::End>
                            <div class="form__group" style="flex: 1;">
                                <Input value=filter placeholder="キーワードで検索..." />
                            </div>
                            <div class="form__group">
                                <Select value=sort>
                                    {KeywordSort::ALL.into_iter().map(|s| view! {
                                        <option value=s.as_str()>{s.label()}</option>
                                    }).collect_view()}
                                </Select>
                            </div>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| toggle_all_visible()>
                                {move || {
                                    let rows = visible.get();
                                    if selection.with(|s| s.all_visible_selected(&rows)) { "表示中を解除" } else { "表示中を全て選択" }
                                }}
                            </Button>
                        </Flex>

                        <div class="selection-summary">
                            {move || format!(
                                "選択中: {}個 / 表示: {}個 (全{}個)",
                                selection.with(|s| s.len()),
                                visible.with(|v| v.len()),
                                all_keywords.with(|k| k.len()),
                            )}
                        </div>

                        <div class="table-wrapper" style="max-height: 480px; overflow-y: auto;">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=48.0>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    let rows = visible.get();
                                                    selection.with(|s| s.all_visible_selected(&rows))
                                                }
                                                on:change=move |_| toggle_all_visible()
                                            />
                                        </TableHeaderCell>
                                        <TableHeaderCell resizable=true min_width=240.0>"キーワード"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"検索ボリューム"</TableHeaderCell>
                                        <TableHeaderCell min_width=100.0>"競合度"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>"CPC"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>"スコア"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || visible.get()
                                        key=|kw| kw.keyword.clone()
                                        children=move |kw| view! { <KeywordRow kw=kw selection=selection /> }
                                    />
                                </TableBody>
                            </Table>
                        </div>

                        <Flex justify=FlexJustify::End>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| open_details()>
                                "キャンセル"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=handle_submit
                                disabled=Signal::derive(move || submitting.get() || selection.with(|s| s.is_empty()))
                            >
                                {move || if submitting.get() {
                                    "処理中...".to_string()
                                } else {
                                    format!("選択した{}個のキーワードで記事生成", selection.with(|s| s.len()))
                                }}
                            </Button>
                        </Flex>
                    }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn KeywordRow(kw: AnalyzedKeyword, selection: RwSignal<KeywordSelection>) -> impl IntoView {
    let keyword = StoredValue::new(kw.keyword.clone());
    let is_selected = move || keyword.with_value(|k| selection.with(|s| s.is_selected(k)));
    let level = CompetitionLevel::of(&kw);
    let keyword_text = kw.keyword.clone();
    let volume_text = format_number_int(kw.volume_or_default());
    let competition_text = format!("{}/100", format_decimal(kw.competition_or_default(), 0));
    let cpc_text = format!("¥{:.2}", kw.cpc_or_default());
    let score_text = format!("{:.1}", kw.score_or_default());

    view! {
        <TableRow attr:class=move || if is_selected() { "table__row--selected" } else { "" }>
            <TableCell>
                <input
                    type="checkbox"
                    prop:checked=is_selected
                    on:change=move |_| keyword.with_value(|k| selection.update(|s| s.toggle(k)))
                />
            </TableCell>
            <TableCell><TableCellLayout>{keyword_text}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{volume_text}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>
                    <span style=format!("font-weight: 600; color: {};", level.color())>
                        {competition_text}
                    </span>
                </TableCellLayout>
            </TableCell>
            <TableCell><TableCellLayout>{cpc_text}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{score_text}</TableCellLayout></TableCell>
        </TableRow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_of_status() {
        assert_eq!(stage_of(None), Stage::Loading);
        assert_eq!(stage_of(Some(ArticleStatus::KeywordAnalysis)), Stage::Analysing);
        assert_eq!(stage_of(Some(ArticleStatus::Draft)), Stage::Analysing);
        assert_eq!(stage_of(Some(ArticleStatus::KeywordSelection)), Stage::Selecting);
        assert_eq!(stage_of(Some(ArticleStatus::Processing)), Stage::Analysing);
        assert_eq!(stage_of(Some(ArticleStatus::Failed)), Stage::Done);
        assert_eq!(stage_of(Some(ArticleStatus::Completed)), Stage::Done);
    }
}
