//! Option lists used by the article form, one category at a time.

use crate::domain::a102_user_option::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a102_user_option::{
    OptionCategory, UserOption, UserOptionCreate, UserOptionUpdate,
};
use leptos::prelude::*;
use thaw::*;

/// Next free position at the end of a category.
fn next_display_order(options: &[UserOption]) -> i32 {
    options
        .iter()
        .map(|o| o.display_order)
        .max()
        .map_or(0, |m| m + 1)
}

fn parse_order(s: &str) -> Result<Option<i32>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<i32>()
        .map(Some)
        .map_err(|_| format!("表示順は整数で入力してください: {}", s))
}

#[component]
#[allow(non_snake_case)]
pub fn UserOptionList() -> impl IntoView {
    let category = RwSignal::new(OptionCategory::Target.as_str().to_string());
    let (items, set_items) = signal::<Vec<UserOption>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let new_value = RwSignal::new(String::new());
    let new_order = RwSignal::new(String::new());

    let editing_id = RwSignal::new(None::<String>);
    let edit_value = RwSignal::new(String::new());
    let edit_order = RwSignal::new(String::new());

    let current_category = move || {
        category
            .try_get_untracked()
            .and_then(|c| OptionCategory::from_str(&c))
            .unwrap_or(OptionCategory::Target)
    };

    let fetch = move || {
        let cat = current_category();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_options(Some(cat)).await {
                Ok(mut v) => {
                    v.sort_by_key(|o| o.display_order);
                    let _ = set_items.try_set(v);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        let _ = category.get();
        editing_id.set(None);
        fetch();
    });

    let handle_add = move |_| {
        let display_order = match parse_order(&new_order.get_untracked()) {
            Ok(Some(o)) => Some(o),
            Ok(None) => Some(items.with_untracked(|v| next_display_order(v))),
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        let body = UserOptionCreate {
            category: current_category(),
            value: new_value.get_untracked().trim().to_string(),
            display_order,
        };
        if let Err(e) = body.validate() {
            set_error.set(Some(e));
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_option(&body).await {
                Ok(_) => {
                    let _ = new_value.try_set(String::new());
                    let _ = new_order.try_set(String::new());
                    fetch();
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    let begin_edit = move |option: &UserOption| {
        edit_value.set(option.value.clone());
        edit_order.set(option.display_order.to_string());
        editing_id.set(Some(option.id.clone()));
    };

    let handle_save = move |id: String| {
        let display_order = match parse_order(&edit_order.get_untracked()) {
            Ok(o) => o,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        let value = edit_value.get_untracked().trim().to_string();
        if value.is_empty() {
            set_error.set(Some("値を入力してください".into()));
            return;
        }
        let body = UserOptionUpdate {
            value: Some(value),
            display_order,
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_option(&id, &body).await {
                Ok(_) => {
                    let _ = editing_id.try_set(None);
                    fetch();
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("この選択肢を削除しますか？").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_option(&id).await {
                Ok(()) => fetch(),
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a102_user_option--list" category="system">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"選択肢の管理"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " 更新"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="form__group" style="max-width: 320px;">
                    <label class="form__label">"カテゴリー"</label>
                    <Select value=category>
                        {OptionCategory::ALL.into_iter().map(|c| view! {
                            <option value=c.as_str()>{c.label()}</option>
                        }).collect_view()}
                    </Select>
                </div>

                <Show when=move || items.with(|v| v.is_empty()) && !loading.get()>
                    <MessageBar intent=MessageBarIntent::Info>
                        <div>"登録された値がないため、記事作成フォームでは既定の選択肢が使われます。"</div>
                    </MessageBar>
                </Show>

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Card>
                    <Flex align=FlexAlign::End>
                        <div class="form__group" style="flex: 1;">
                            <label class="form__label">"値"</label>
                            <Input value=new_value placeholder="新しい選択肢" />
                        </div>
                        <div class="form__group" style="width: 120px;">
                            <label class="form__label">"表示順"</label>
                            <Input value=new_order placeholder="自動" />
                        </div>
                        <Button appearance=ButtonAppearance::Primary on_click=handle_add>
                            {icon("plus")}
                            " 追加"
                        </Button>
                    </Flex>
                </Card>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=80.0>"表示順"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=320.0>"値"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"操作"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|o| (o.id.clone(), o.value.clone(), o.display_order)
                            children=move |option| {
                                let id = option.id.clone();
                                let is_editing = {
                                    let id = id.clone();
                                    move || editing_id.with(|e| e.as_deref() == Some(id.as_str()))
                                };
                                let option = StoredValue::new(option);
                                let id = StoredValue::new(id);
                                view! {
                                    <TableRow>
                                        <Show
                                            when=is_editing
                                            fallback=move || view! {
                                                <TableCell><TableCellLayout>{option.with_value(|o| o.display_order)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{option.with_value(|o| o.value.clone())}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <Space>
                                                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| option.with_value(|o| begin_edit(o))>
                                                            "編集"
                                                        </Button>
                                                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| handle_delete(id.get_value())>
                                                            {icon("trash")}
                                                        </Button>
                                                    </Space>
                                                </TableCell>
                                            }
                                        >
                                            <TableCell><Input value=edit_order /></TableCell>
                                            <TableCell><Input value=edit_value /></TableCell>
                                            <TableCell>
                                                <Space>
                                                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Primary on_click=move |_| handle_save(id.get_value())>
                                                        "保存"
                                                    </Button>
                                                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| editing_id.set(None)>
                                                        "キャンセル"
                                                    </Button>
                                                </Space>
                                            </TableCell>
                                        </Show>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_display_order() {
        assert_eq!(next_display_order(&[]), 0);
        let options: Vec<UserOption> = serde_json::from_value(serde_json::json!([
            {"id": "1", "category": "target", "value": "a", "display_order": 3},
            {"id": "2", "category": "target", "value": "b", "display_order": 7}
        ]))
        .unwrap();
        assert_eq!(next_display_order(&options), 8);
    }

    #[test]
    fn test_parse_order() {
        assert_eq!(parse_order(" "), Ok(None));
        assert_eq!(parse_order("5"), Ok(Some(5)));
        assert!(parse_order("五").is_err());
    }
}
