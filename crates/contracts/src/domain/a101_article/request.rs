use serde::{Deserialize, Serialize};

/// Body of `POST /api/articles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleCreate {
    pub keyword: String,
    pub target: String,
    pub article_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_type1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_type2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_type3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important_keyword1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important_keyword2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important_keyword3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_intent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_keywords: Vec<String>,
}

impl ArticleCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.keyword.trim().is_empty() {
            return Err("キーワードを入力してください".into());
        }
        if self.target.trim().is_empty() {
            return Err("ターゲット層を選択してください".into());
        }
        if self.article_type.trim().is_empty() {
            return Err("記事の種類を選択してください".into());
        }
        Ok(())
    }
}

/// Body of `PUT /api/articles/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Turns a form field into an optional request value.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_core_fields() {
        let mut create = ArticleCreate {
            keyword: "ゲーミング眼鏡".into(),
            target: "ゲーマー".into(),
            article_type: String::new(),
            ..Default::default()
        };
        assert!(create.validate().is_err());
        create.article_type = "ハウツー系".into();
        assert!(create.validate().is_ok());
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let create = ArticleCreate {
            keyword: "k".into(),
            target: "t".into(),
            article_type: "a".into(),
            used_type1: non_empty("  "),
            prompt: non_empty(" be concise "),
            ..Default::default()
        };
        let json = serde_json::to_value(&create).unwrap();
        assert!(json.get("used_type1").is_none());
        assert!(json.get("secondary_keywords").is_none());
        assert_eq!(json["prompt"], "be concise");
    }
}
