use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

/// Keys the backend reads. Free-form keys are accepted as well.
pub const KNOWN_KEYS: [&str; 8] = [
    "OPENAI_API_KEY",
    "ANTHROPIC_API_KEY",
    "GEMINI_API_KEY",
    "SHOPIFY_SHOP_DOMAIN",
    "SHOPIFY_ACCESS_TOKEN",
    "SHOPIFY_BLOG_ID",
    "DATAFORSEO_LOGIN",
    "DATAFORSEO_PASSWORD",
];

/// Key/value setting. Secret values come back already masked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub is_masked: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl AggregateRoot for Setting {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.key
    }

    fn aggregate_index() -> &'static str {
        "a103"
    }

    fn collection_name() -> &'static str {
        "setting"
    }

    fn element_name() -> &'static str {
        "設定"
    }

    fn list_name() -> &'static str {
        "設定"
    }
}

/// Body of `PUT /api/settings` (upsert by key)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingUpdate {
    pub key: String,
    pub value: String,
}

impl SettingUpdate {
    pub fn validate(&self) -> Result<(), String> {
        let key = self.key.trim();
        if key.is_empty() {
            return Err("キーを入力してください".into());
        }
        if key.chars().any(char::is_whitespace) {
            return Err("キーに空白を含めることはできません".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        let mut update = SettingUpdate {
            key: " ".into(),
            value: "x".into(),
        };
        assert!(update.validate().is_err());
        update.key = "OPENAI API".into();
        assert!(update.validate().is_err());
        update.key = KNOWN_KEYS[0].into();
        assert!(update.validate().is_ok());
    }
}
