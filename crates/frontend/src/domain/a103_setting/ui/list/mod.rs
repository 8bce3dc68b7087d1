use crate::domain::a103_setting::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a103_setting::{Setting, SettingUpdate, KNOWN_KEYS};
use leptos::prelude::*;
use thaw::*;

/// Known keys the backend has no value for yet.
fn missing_known_keys(settings: &[Setting]) -> Vec<&'static str> {
    KNOWN_KEYS
        .into_iter()
        .filter(|k| !settings.iter().any(|s| s.key == *k))
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn SettingList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Setting>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let key = RwSignal::new(String::new());
    let value = RwSignal::new(String::new());
    let known_key = RwSignal::new(String::new());

    Effect::new(move |_| {
        let k = known_key.get();
        if !k.is_empty() {
            key.set(k);
        }
    });

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_settings().await {
                Ok(mut v) => {
                    v.sort_by(|a, b| a.key.cmp(&b.key));
                    let _ = set_items.try_set(v);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    fetch();

    let handle_save = move |_| {
        let body = SettingUpdate {
            key: key.get_untracked().trim().to_string(),
            value: value.get_untracked(),
        };
        if let Err(e) = body.validate() {
            set_error.set(Some(e));
            return;
        }
        set_saving.set(true);
        set_notice.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_setting(&body).await {
                Ok(saved) => {
                    log::info!("setting saved: {}", saved.key);
                    let _ = set_notice.try_set(Some(format!("{} を保存しました", saved.key)));
                    let _ = value.try_set(String::new());
                    fetch();
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
            let _ = set_saving.try_set(false);
        });
    };

    view! {
        <PageFrame page_id="a103_setting--list" category="system">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"設定"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
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
                {move || notice.get().map(|n| view! {
                    <MessageBar intent=MessageBarIntent::Success>
                        <div>{n}</div>
                    </MessageBar>
                })}

                {move || {
                    let missing = items.with(|v| missing_known_keys(v));
                    (!missing.is_empty()).then(|| view! {
                        <MessageBar intent=MessageBarIntent::Warning>
                            <div>"未設定のキー: " {missing.join(", ")}</div>
                        </MessageBar>
                    })
                }}

                <Card>
                    <Flex align=FlexAlign::End>
                        <div class="form__group">
                            <label class="form__label">"既知のキー"</label>
                            <Select value=known_key>
                                <option value="">"（自由入力）"</option>
                                {KNOWN_KEYS.into_iter().map(|k| view! { <option value=k>{k}</option> }).collect_view()}
                            </Select>
                        </div>
                        <div class="form__group" style="min-width: 280px;">
                            <label class="form__label">"キー"</label>
                            <Input value=key placeholder="OPENAI_API_KEY" />
                        </div>
                        <div class="form__group" style="flex: 1;">
                            <label class="form__label">"値"</label>
                            <Input value=value input_type=InputType::Password placeholder="新しい値" />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_save
                            disabled=Signal::derive(move || saving.get())
                        >
                            {move || if saving.get() { "保存中..." } else { "保存" }}
                        </Button>
                    </Flex>
                </Card>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=240.0>"キー"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=280.0>"値"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"更新日時"</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|s| (s.key.clone(), s.updated_at.clone())
                            children=move |setting| {
                                let k = setting.key.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout><code>{setting.key.clone()}</code></TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {setting.value.clone()}
                                                {setting.is_masked.then(|| view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"マスク済み"</Badge>
                                                })}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{format_datetime(&setting.updated_at)}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| {
                                                    key.set(k.clone());
                                                    value.set(String::new());
                                                }
                                            >
                                                "編集"
                                            </Button>
                                        </TableCell>
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
    fn test_missing_known_keys() {
        let settings: Vec<Setting> = serde_json::from_value(serde_json::json!([
            {"id": "1", "key": "OPENAI_API_KEY", "value": "sk-****", "is_masked": true},
            {"id": "2", "key": "CUSTOM_FLAG", "value": "on"}
        ]))
        .unwrap();
        let missing = missing_known_keys(&settings);
        assert_eq!(missing.len(), KNOWN_KEYS.len() - 1);
        assert!(!missing.contains(&"OPENAI_API_KEY"));
    }
}
