//! Article creation - View

use super::view_model::ArticleNewVm;
use crate::domain::a101_article::api;
use crate::domain::a101_article::workflow::use_article_workflow;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::article_detail_key;
use crate::layout::tabs::tab_labels::title_for_key;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use leptos::prelude::*;
use thaw::*;

/// Select bound to a form field; `placeholder` adds an empty "not chosen" entry.
#[component]
fn ChoiceSelect(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(optional)] placeholder: bool,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <Select value=value>
                {placeholder.then(|| view! { <option value="">"選択してください"</option> })}
                <For
                    each=move || options.get()
                    key=|o| o.clone()
                    children=move |o| view! { <option value=o.clone()>{o.clone()}</option> }
                />
            </Select>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ArticleNew(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let workflow = use_article_workflow();
    let vm = ArticleNewVm::new();
    vm.load_choices();

    let targets = Signal::derive(move || vm.choices.with(|c| c.targets.clone()));
    let article_types = Signal::derive(move || vm.choices.with(|c| c.article_types.clone()));
    let used_types = Signal::derive(move || vm.choices.with(|c| c.used_types.clone()));
    let extra_used_types = Signal::derive(move || vm.choices.with(|c| c.extra_used_types()));
    let important = Signal::derive(move || vm.choices.with(|c| c.important_keywords.clone()));

    let handle_submit = move |_| {
        let request = match vm.snapshot().to_request() {
            Ok(r) => r,
            Err(e) => {
                vm.error.set(Some(e));
                return;
            }
        };
        vm.error.set(None);
        vm.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_article(&request).await {
                Ok(article) => {
                    log::info!("article created: {}", article.id);
                    let key = article_detail_key(&article.id);
                    workflow.store(article);
                    workflow.touch_list();
                    ctx.open_tab(&key, &title_for_key(&key));
                    on_close.run(());
                }
                Err(e) => {
                    let _ = vm.error.try_set(Some(e.to_string()));
                    let _ = vm.saving.try_set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a101_article_new--detail" category="detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"新規記事生成"</h1>
                </div>
                <div class="page__header-right">
                    <Space>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_submit
                            disabled=Signal::derive(move || vm.saving.get())
                        >
                            {icon("send")}
                            {move || if vm.saving.get() { " 生成中..." } else { " 記事を生成" }}
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                            {icon("x")}
                            " キャンセル"
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

                <Card>
                    <div class="form__group">
                        <label class="form__label">"キーワード" <span class="form__required">" *"</span></label>
                        <Input value=vm.keyword placeholder="例: ゲーミング眼鏡" />
                    </div>

                    <ChoiceSelect label="ターゲット層" value=vm.target options=targets placeholder=true required=true />
                    <ChoiceSelect label="記事の種類" value=vm.article_type options=article_types placeholder=true required=true />

                    <div class="form__row">
                        <ChoiceSelect label="使用シーン1" value=vm.used_type1 options=used_types />
                        <ChoiceSelect label="使用シーン2" value=vm.used_type2 options=extra_used_types placeholder=true />
                        <ChoiceSelect label="使用シーン3" value=vm.used_type3 options=extra_used_types placeholder=true />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"システムプロンプト"</label>
                        <Textarea value=vm.prompt placeholder="任意" attr:rows=3 />
                    </div>

                    <div class="form__row">
                        <ChoiceSelect label="重要視したいキーワード1" value=vm.important_keyword1 options=important placeholder=true />
                        <ChoiceSelect label="重要視したいキーワード2" value=vm.important_keyword2 options=important placeholder=true />
                        <ChoiceSelect label="重要視したいキーワード3" value=vm.important_keyword3 options=important placeholder=true />
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
