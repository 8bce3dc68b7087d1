use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationOption {
    pub code: u32,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
}

pub const LOCATIONS: [LocationOption; 3] = [
    LocationOption { code: 2840, label: "日本" },
    LocationOption { code: 2826, label: "アメリカ" },
    LocationOption { code: 2825, label: "イギリス" },
];

pub const LANGUAGES: [LanguageOption; 2] = [
    LanguageOption { code: "ja", label: "日本語" },
    LanguageOption { code: "en", label: "英語" },
];

/// Query string of `POST /api/integrated-analysis/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedAnalysisQuery {
    pub keyword: String,
    pub location_code: u32,
    pub language_code: String,
}

impl IntegratedAnalysisQuery {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.trim().to_string(),
            location_code: LOCATIONS[0].code,
            language_code: LANGUAGES[0].code.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.keyword.is_empty() {
            return Err("キーワードを入力してください".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_japan_and_japanese() {
        let q = IntegratedAnalysisQuery::new("  ゲーミング眼鏡 ");
        assert_eq!(q.keyword, "ゲーミング眼鏡");
        assert_eq!(q.location_code, 2840);
        assert_eq!(q.language_code, "ja");
        assert!(q.validate().is_ok());
        assert!(IntegratedAnalysisQuery::new("   ").validate().is_err());
    }
}
