//! Article creation - ViewModel

use crate::domain::a102_user_option::api::fetch_options;
use contracts::domain::a101_article::{non_empty, ArticleCreate};
use contracts::domain::a102_user_option::{OptionCategory, UserOption};
use leptos::prelude::*;

/// Placeholder value of the first "used scene" select.
pub const NO_PREFERENCE: &str = "指定なし";

/// Plain copy of the form, detached from signals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleForm {
    pub keyword: String,
    pub target: String,
    pub article_type: String,
    pub used_types: [String; 3],
    pub prompt: String,
    pub important_keywords: [String; 3],
}

impl ArticleForm {
    pub fn to_request(&self) -> Result<ArticleCreate, String> {
        let [u1, u2, u3] = &self.used_types;
        let [k1, k2, k3] = &self.important_keywords;
        let request = ArticleCreate {
            keyword: self.keyword.trim().to_string(),
            target: self.target.trim().to_string(),
            article_type: self.article_type.trim().to_string(),
            used_type1: non_empty(u1),
            used_type2: non_empty(u2),
            used_type3: non_empty(u3),
            prompt: non_empty(&self.prompt),
            important_keyword1: non_empty(k1),
            important_keyword2: non_empty(k2),
            important_keyword3: non_empty(k3),
            ..Default::default()
        };
        request.validate()?;
        Ok(request)
    }
}

/// Choices of each select, filled from the option lists.
#[derive(Debug, Clone, PartialEq)]
pub struct FormChoices {
    pub targets: Vec<String>,
    pub article_types: Vec<String>,
    pub used_types: Vec<String>,
    pub important_keywords: Vec<String>,
}

impl FormChoices {
    pub fn from_options(options: &[UserOption]) -> Self {
        Self {
            targets: UserOption::values_or_defaults(options, OptionCategory::Target),
            article_types: UserOption::values_or_defaults(options, OptionCategory::ArticleType),
            used_types: UserOption::values_or_defaults(options, OptionCategory::UsedType),
            important_keywords: UserOption::values_or_defaults(
                options,
                OptionCategory::ImportantKeyword,
            ),
        }
    }

    /// Scenes 2 and 3 are optional, so the "no preference" entry is dropped there.
    pub fn extra_used_types(&self) -> Vec<String> {
        self.used_types
            .iter()
            .filter(|v| v.as_str() != NO_PREFERENCE)
            .cloned()
            .collect()
    }
}

impl Default for FormChoices {
    fn default() -> Self {
        Self::from_options(&[])
    }
}

#[derive(Clone, Copy)]
pub struct ArticleNewVm {
    pub keyword: RwSignal<String>,
    pub target: RwSignal<String>,
    pub article_type: RwSignal<String>,
    pub used_type1: RwSignal<String>,
    pub used_type2: RwSignal<String>,
    pub used_type3: RwSignal<String>,
    pub prompt: RwSignal<String>,
    pub important_keyword1: RwSignal<String>,
    pub important_keyword2: RwSignal<String>,
    pub important_keyword3: RwSignal<String>,

    pub choices: RwSignal<FormChoices>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ArticleNewVm {
    pub fn new() -> Self {
        Self {
            keyword: RwSignal::new(String::new()),
            target: RwSignal::new(String::new()),
            article_type: RwSignal::new(String::new()),
            used_type1: RwSignal::new(NO_PREFERENCE.to_string()),
            used_type2: RwSignal::new(String::new()),
            used_type3: RwSignal::new(String::new()),
            prompt: RwSignal::new(String::new()),
            important_keyword1: RwSignal::new(String::new()),
            important_keyword2: RwSignal::new(String::new()),
            important_keyword3: RwSignal::new(String::new()),
            choices: RwSignal::new(FormChoices::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Built-in lists stay in place when the option API is unreachable.
    pub fn load_choices(&self) {
        let choices = self.choices;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_options(None).await {
                Ok(options) => {
                    let _ = choices.try_set(FormChoices::from_options(&options));
                }
                Err(e) => log::warn!("option lists unavailable, using defaults: {}", e),
            }
        });
    }

    pub fn snapshot(&self) -> ArticleForm {
        ArticleForm {
            keyword: self.keyword.get_untracked(),
            target: self.target.get_untracked(),
            article_type: self.article_type.get_untracked(),
            used_types: [
                self.used_type1.get_untracked(),
                self.used_type2.get_untracked(),
                self.used_type3.get_untracked(),
            ],
            prompt: self.prompt.get_untracked(),
            important_keywords: [
                self.important_keyword1.get_untracked(),
                self.important_keyword2.get_untracked(),
                self.important_keyword3.get_untracked(),
            ],
        }
    }
}

impl Default for ArticleNewVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_to_request() {
        let form = ArticleForm {
            keyword: " ゲーミング眼鏡 ".into(),
            target: "ゲーマー".into(),
            article_type: "Eightoon宣伝系".into(),
            used_types: [NO_PREFERENCE.into(), String::new(), "室内".into()],
            important_keywords: ["鯖江".into(), String::new(), String::new()],
            ..Default::default()
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.keyword, "ゲーミング眼鏡");
        assert_eq!(request.used_type1.as_deref(), Some(NO_PREFERENCE));
        assert!(request.used_type2.is_none());
        assert_eq!(request.used_type3.as_deref(), Some("室内"));
        assert_eq!(request.important_keyword1.as_deref(), Some("鯖江"));
        assert!(request.prompt.is_none());
    }

    #[test]
    fn test_missing_target_rejected() {
        let form = ArticleForm {
            keyword: "k".into(),
            article_type: "a".into(),
            ..Default::default()
        };
        assert_eq!(
            form.to_request().unwrap_err(),
            "ターゲット層を選択してください"
        );
    }

    #[test]
    fn test_choices_fall_back_to_defaults() {
        let choices = FormChoices::default();
        assert_eq!(choices.targets.len(), 5);
        assert_eq!(choices.used_types[0], NO_PREFERENCE);
        assert!(!choices.extra_used_types().iter().any(|v| v == NO_PREFERENCE));
    }
}
