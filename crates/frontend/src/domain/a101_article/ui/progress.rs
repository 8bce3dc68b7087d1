//! Checklist of the keyword analysis run.

use crate::domain::a101_article::workflow::checklist::{Checklist, StepState};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AnalysisProgress(#[prop(into)] checklist: Signal<Checklist>) -> impl IntoView {
    let total = move || checklist.with(|c| c.items.len());
    let done = move || checklist.with(|c| c.done_count());

    view! {
        <Card>
            <div class="analysis-progress">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h3 class="analysis-progress__title">"キーワード分析の進捗"</h3>
                    <span class="analysis-progress__counter">
                        {move || format!("{}/{}", done(), total())}
                    </span>
                </Flex>

                {move || {
                    checklist.with(|c| c.current().map(|item| item.label)).map(|label| view! {
                        <Flex align=FlexAlign::Center>
                            <Spinner size=SpinnerSize::Small />
                            <span class="analysis-progress__current">"実行中: " {label}</span>
                        </Flex>
                    })
                }}

                <ul class="analysis-progress__list">
                    {move || {
                        checklist.get().items.into_iter().map(|item| {
                            let (class, marker) = match item.state {
                                StepState::Done => ("analysis-progress__item analysis-progress__item--done", icon("check")),
                                StepState::Current => ("analysis-progress__item analysis-progress__item--current", icon("refresh")),
                                StepState::Pending => ("analysis-progress__item", icon("clock")),
                            };
                            view! {
                                <li class=class>
                                    <span class="analysis-progress__marker">{marker}</span>
                                    <span>{item.label}</span>
                                </li>
                            }
                        }).collect_view()
                    }}
                </ul>

                {move || checklist.with(|c| c.error.clone()).map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <div>
                            <strong>"エラー: "</strong>
                            {e}
                        </div>
                    </MessageBar>
                })}

                <Show when=move || checklist.with(|c| c.all_done())>
                    <MessageBar intent=MessageBarIntent::Success>
                        <div>"すべての条件が満たされました。キーワード選択画面に移動します..."</div>
                    </MessageBar>
                </Show>
            </div>
        </Card>
    }
}
