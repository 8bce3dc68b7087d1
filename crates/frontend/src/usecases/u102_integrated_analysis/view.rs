use super::api;
use super::export::RankedKeyword;
use super::state::{AnalysisTableState, LevelFilter, SortOrder, VolumeFilter};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::today_utc;
use crate::shared::export::{csv_filename, export_to_csv};
use crate::shared::icons::icon;
use crate::shared::number_format::format_number_int;
use crate::shared::page_frame::PageFrame;
use contracts::usecases::u102_integrated_analysis::{
    DifficultyLevel, IntegratedAnalysisQuery, IntegratedAnalysisResult, MainKeyword,
    RelatedKeyword, LANGUAGES, LOCATIONS,
};
use leptos::prelude::*;
use thaw::*;

fn level_tone(level: DifficultyLevel) -> StatTone {
    match level {
        DifficultyLevel::Immediate => StatTone::Success,
        DifficultyLevel::MediumTerm => StatTone::Warning,
        DifficultyLevel::LongTerm => StatTone::Error,
        DifficultyLevel::Unknown => StatTone::Neutral,
    }
}

#[component]
pub fn IntegratedAnalysisPage() -> impl IntoView {
    let keyword = RwSignal::new(String::new());
    let location = RwSignal::new(LOCATIONS[0].code.to_string());
    let language = RwSignal::new(LANGUAGES[0].code.to_string());

    let result = RwSignal::new(None::<IntegratedAnalysisResult>);
    let analyzed_keyword = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let table = RwSignal::new(AnalysisTableState::default());

    let level_value = RwSignal::new("all".to_string());
    let volume_value = RwSignal::new("all".to_string());
    let sort_value = RwSignal::new("priority".to_string());

    Effect::new(move |_| {
        let level = LevelFilter::from_str(&level_value.get());
        table.update(|t| t.set_level(level));
    });
    Effect::new(move |_| {
        let volume = VolumeFilter::from_str(&volume_value.get());
        table.update(|t| t.set_volume(volume));
    });
    Effect::new(move |_| {
        let sort = SortOrder::from_str(&sort_value.get());
        table.update(|t| t.set_sort(sort));
    });

    let filtered = Memo::new(move |_| {
        result.with(|r| match r {
            Some(r) => table.with(|t| t.filtered(&r.related_keywords)),
            None => Vec::new(),
        })
    });
    let filtered_count = Signal::derive(move || filtered.with(|f| f.len()));

    let run = move || {
        let query = IntegratedAnalysisQuery {
            keyword: keyword.get_untracked().trim().to_string(),
            location_code: location
                .get_untracked()
                .parse()
                .unwrap_or(LOCATIONS[0].code),
            language_code: language.get_untracked(),
        };
        if let Err(e) = query.validate() {
            error.set(Some(e));
            return;
        }

        loading.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::analyze(&query).await {
                Ok(r) => {
                    log::info!(
                        "integrated analysis for '{}': {} related keywords",
                        query.keyword,
                        r.related_keywords.len()
                    );
                    let _ = table.try_update(|t| t.reset_for_new_result());
                    let _ = analyzed_keyword.try_set(query.keyword.clone());
                    let _ = result.try_set(Some(r));
                }
                Err(e) => {
                    log::error!("integrated analysis failed: {}", e);
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = loading.try_set(false);
        });
    };

    let reset = move || {
        result.set(None);
        error.set(None);
        keyword.set(String::new());
        analyzed_keyword.set(String::new());
        table.update(|t| t.reset_for_new_result());
    };

    let export_csv = move || {
        let rows = RankedKeyword::rank_all(&filtered.get_untracked());
        let filename = csv_filename(
            "keyword_analysis",
            &analyzed_keyword.get_untracked(),
            today_utc(),
        );
        if let Err(e) = export_to_csv(&rows, &filename) {
            error.set(Some(e));
        }
    };

    let has_result = move || result.with(|r| r.is_some());

    view! {
        <PageFrame page_id="u102_integrated_analysis--usecase" category="usecase">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"SEOキーワード分析ツール"</h1>
                </div>
                <div class="page__header-right">
                    <Show when=has_result>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| export_csv()>
                            {icon("download")}
                            " CSVエクスポート"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| reset()>
                            "新規調査"
                        </Button>
                    </Show>
                </div>
            </div>

            <div class="page__content">
                <Card>
                    <Flex align=FlexAlign::End>
                        <div class="form__group" style="flex: 1;">
                            <label class="form__label">"キーワード"</label>
                            <Input value=keyword placeholder="例: ゲーミング眼鏡" />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"地域"</label>
                            <Select value=location>
                                {LOCATIONS.iter().map(|l| view! {
                                    <option value=l.code.to_string()>{l.label}</option>
                                }).collect_view()}
                            </Select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"言語"</label>
                            <Select value=language>
                                {LANGUAGES.iter().map(|l| view! {
                                    <option value=l.code>{l.label}</option>
                                }).collect_view()}
                            </Select>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| run()
                            disabled=Signal::derive(move || loading.get())
                        >
                            {move || if loading.get() { "分析中..." } else { "包括分析を開始" }}
                        </Button>
                    </Flex>
                    <Show when=move || loading.get()>
                        <Flex align=FlexAlign::Center>
                            <Spinner size=SpinnerSize::Small />
                            <span class="text-muted">"関連キーワードを収集しています。数分かかる場合があります..."</span>
                        </Flex>
                    </Show>
                </Card>

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                        <Button size=ButtonSize::Small on_click=move |_| run()>"再試行"</Button>
                    </div>
                })}

                {move || result.with(|r| r.as_ref().and_then(|r| r.main_keyword.clone()))
                    .map(|main| view! { <MainKeywordCard main=main /> })}

                <Show when=has_result>
                    <div class="stat-cards">
                        {DifficultyLevel::KNOWN.into_iter().map(|level| {
                            let stats = move || result.with(|r| {
                                r.as_ref()
                                    .and_then(|r| r.summary_stats.for_level(level))
                                    .cloned()
                                    .unwrap_or_default()
                            });
                            view! {
                                <StatCard
                                    label=level.label()
                                    marker=level.emoji()
                                    value=Signal::derive(move || format!("{}件", stats().count))
                                    tone=level_tone(level)
                                    subtitle=Signal::derive(move || Some(format!(
                                        "総検索ボリューム: {}",
                                        format_number_int(stats().total_volume as f64)
                                    )))
                                />
                            }
                        }).collect_view()}
                    </div>

                    {move || result.with(|r| r.as_ref().map(|r| r.recommended_strategy.phase1.clone()))
                        .map(|phase| view! {
                            <MessageBar intent=MessageBarIntent::Info>
                                <div>
                                    {format!(
                                        "フェーズ1（{}）: 即攻略キーワード{}個で推定月間{}アクセス",
                                        phase.period,
                                        phase.keywords.len(),
                                        format_number_int(phase.estimated_traffic)
                                    )}
                                </div>
                            </MessageBar>
                        })}

                    <Card>
                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::End>
                            <Flex>
                                <div class="form__group">
                                    <label class="form__label">"判定"</label>
                                    <Select value=level_value>
                                        {LevelFilter::OPTIONS.iter().map(|(v, label)| view! {
                                            <option value=*v>{*label}</option>
                                        }).collect_view()}
                                    </Select>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"検索ボリューム"</label>
                                    <Select value=volume_value>
                                        {VolumeFilter::OPTIONS.iter().map(|(v, label)| view! {
                                            <option value=*v>{*label}</option>
                                        }).collect_view()}
                                    </Select>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"並び替え"</label>
                                    <Select value=sort_value>
                                        {SortOrder::OPTIONS.iter().map(|(v, label)| view! {
                                            <option value=*v>{*label}</option>
                                        }).collect_view()}
                                    </Select>
                                </div>
                            </Flex>
                            <Flex align=FlexAlign::Center>
                                <span class="text-muted">
                                    {move || format!("{}個選択中", table.with(|t| t.selected_count()))}
                                </span>
                                <Button size=ButtonSize::Small on_click=move |_| {
                                    filtered.with_untracked(|f| table.update(|t| t.select_top(f)))
                                }>
                                    "上位10件を自動選択"
                                </Button>
                                <Button size=ButtonSize::Small on_click=move |_| {
                                    filtered.with_untracked(|f| table.update(|t| t.select_filtered(f, Some(DifficultyLevel::Immediate))))
                                }>
                                    "🟢マーク全選択"
                                </Button>
                                <Button size=ButtonSize::Small on_click=move |_| {
                                    filtered.with_untracked(|f| table.update(|t| t.select_filtered(f, None)))
                                }>
                                    "全選択"
                                </Button>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| table.update(|t| t.clear_selection())
                                >
                                    "全解除"
                                </Button>
                            </Flex>
                        </Flex>

                        <div class="text-muted">
                            {move || table.with(|t| t.range_label(filtered_count.get()))}
                        </div>

                        <div class="table-wrapper">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=40.0>""</TableHeaderCell>
                                        <TableHeaderCell min_width=60.0>"順位"</TableHeaderCell>
                                        <TableHeaderCell min_width=50.0>"判定"</TableHeaderCell>
                                        <TableHeaderCell resizable=true min_width=240.0>"キーワード"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"検索ボリューム"</TableHeaderCell>
                                        <TableHeaderCell min_width=80.0>"CPC"</TableHeaderCell>
                                        <TableHeaderCell min_width=80.0>"競合度"</TableHeaderCell>
                                        <TableHeaderCell min_width=80.0>"難易度"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>"推奨順位"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || filtered.with(|f| table.with(|t| t.page_rows(f)))
                                        key=|(rank, kw)| (*rank, kw.keyword.clone())
                                        children=move |(rank, kw)| view! {
                                            <RelatedKeywordRow rank=rank kw=kw table=table />
                                        }
                                    />
                                </TableBody>
                            </Table>
                        </div>

                        <PaginationControls
                            current_page=Signal::derive(move || table.with(|t| t.page))
                            total_pages=Signal::derive(move || AnalysisTableState::total_pages(filtered_count.get()))
                            total_count=filtered_count
                            on_page_change=Callback::new(move |page| table.update(|t| t.page = page))
                        />
                    </Card>
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn MainKeywordCard(main: MainKeyword) -> impl IntoView {
    view! {
        <Card>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="page__subtitle">{format!("メインキーワード: {}", main.keyword)}</h2>
                <span>{format!("{} {}", main.difficulty_level.emoji(), main.difficulty_level.label())}</span>
            </Flex>
            <div class="article-meta">
                <p>"検索ボリューム: " {format_number_int(main.search_volume as f64)}</p>
                <p>{format!("CPC: ${:.2}", main.cpc)}</p>
                <p>{format!("競合度: {} ({})", main.competition, main.competition_index)}</p>
                <p>{format!("難易度: {}/100", main.difficulty)}</p>
            </div>
        </Card>
    }
}

#[component]
fn RelatedKeywordRow(
    rank: usize,
    kw: RelatedKeyword,
    table: RwSignal<AnalysisTableState>,
) -> impl IntoView {
    let keyword = StoredValue::new(kw.keyword.clone());
    let is_selected = move || keyword.with_value(|k| table.with(|t| t.is_selected(k)));

    view! {
        <TableRow attr:class=move || if is_selected() { "table__row--selected" } else { "" }>
            <TableCell>
                <input
                    type="checkbox"
                    prop:checked=is_selected
                    on:change=move |_| keyword.with_value(|k| table.update(|t| t.toggle(k)))
                />
            </TableCell>
            <TableCell><TableCellLayout>{rank}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>
                    <span title=kw.difficulty_level.label()>{kw.difficulty_level.emoji()}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell><TableCellLayout>{kw.keyword.clone()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{format_number_int(kw.search_volume as f64)}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{format!("${:.2}", kw.cpc)}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{kw.competition.clone()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{kw.difficulty}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{format!("{}位", kw.recommended_rank)}</TableCellLayout></TableCell>
        </TableRow>
    }
}
