use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// Option list a value belongs to. Each list feeds one field of the article form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionCategory {
    Target,
    ArticleType,
    UsedType,
    ImportantKeyword,
}

impl OptionCategory {
    pub const ALL: [OptionCategory; 4] = [
        OptionCategory::Target,
        OptionCategory::ArticleType,
        OptionCategory::UsedType,
        OptionCategory::ImportantKeyword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionCategory::Target => "target",
            OptionCategory::ArticleType => "article_type",
            OptionCategory::UsedType => "used_type",
            OptionCategory::ImportantKeyword => "important_keyword",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OptionCategory::Target => "ターゲット層",
            OptionCategory::ArticleType => "記事の種類",
            OptionCategory::UsedType => "使用シーン",
            OptionCategory::ImportantKeyword => "重要キーワード",
        }
    }

    /// Built-in values used until the user defines their own list.
    pub fn default_values(&self) -> &'static [&'static str] {
        match self {
            OptionCategory::Target => &[
                "インドアワーカー",
                "ゲーマー",
                "クリエイター",
                "リモートワーカー",
                "眼鏡愛用者",
            ],
            OptionCategory::ArticleType => &[
                "ハウツー系:「〜する方法」「〜のコツ」「〜の選び方」",
                "体験・レビュー系:「実際に使ってみた」「〜してみたら」「使用感レポート」",
                "比較・解説系:「〜と〜の違い」「徹底比較」「プロが解説」",
                "トレンド・話題系:「今話題の」「最新トレンド」",
                "問題解決系: 「〜でお悩みの方へ」「〜を解決する」「〜の悩み解消」",
                "特徴・メリット系: 「〜がすごい理由」「〜の魅力」「〜のメリット」",
                "ライフスタイル系: 「〜な生活」「〜のある暮らし」「〜でライフスタイル向上」",
                "数字・リスト系:「5つのポイント」「10の理由」「3つの秘密」",
                "Eightoon宣伝系",
            ],
            OptionCategory::UsedType => &["指定なし", "室内", "仕事", "デート", "友達と遊ぶ", "クラブ"],
            OptionCategory::ImportantKeyword => &[
                "EIGHTOON",
                "インドアライフ/インドアワーク",
                "ブルーライトカット",
                "鯖江",
                "βチタニウム",
                "ゲーミング",
                "職人技術",
                "快適性",
            ],
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOption {
    pub id: String,
    pub category: OptionCategory,
    pub value: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl UserOption {
    /// Values of one category in display order, or the built-in list when none are stored.
    pub fn values_or_defaults(options: &[UserOption], category: OptionCategory) -> Vec<String> {
        let mut own: Vec<&UserOption> = options.iter().filter(|o| o.category == category).collect();
        if own.is_empty() {
            return category
                .default_values()
                .iter()
                .map(|v| v.to_string())
                .collect();
        }
        own.sort_by_key(|o| o.display_order);
        own.into_iter().map(|o| o.value.clone()).collect()
    }
}

impl AggregateRoot for UserOption {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.value
    }

    fn aggregate_index() -> &'static str {
        "a102"
    }

    fn collection_name() -> &'static str {
        "user_option"
    }

    fn element_name() -> &'static str {
        "選択肢"
    }

    fn list_name() -> &'static str {
        "選択肢の管理"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOptionCreate {
    pub category: OptionCategory,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
}

impl UserOptionCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.value.trim().is_empty() {
            return Err("値を入力してください".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserOptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(category: OptionCategory, value: &str, order: i32) -> UserOption {
        UserOption {
            id: format!("{}-{}", category.as_str(), order),
            category,
            value: value.into(),
            display_order: order,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_defaults_when_category_is_empty() {
        let stored = vec![option(OptionCategory::Target, "学生", 0)];
        let values = UserOption::values_or_defaults(&stored, OptionCategory::UsedType);
        assert_eq!(values.first().map(String::as_str), Some("指定なし"));
        assert_eq!(values.len(), 6);
    }

    #[test]
    fn test_stored_values_sorted_by_display_order() {
        let stored = vec![
            option(OptionCategory::Target, "後", 2),
            option(OptionCategory::Target, "先", 1),
            option(OptionCategory::ArticleType, "別", 0),
        ];
        assert_eq!(
            UserOption::values_or_defaults(&stored, OptionCategory::Target),
            vec!["先".to_string(), "後".to_string()]
        );
    }

    #[test]
    fn test_category_wire_names() {
        for category in OptionCategory::ALL {
            assert_eq!(OptionCategory::from_str(category.as_str()), Some(category));
            assert_eq!(serde_json::to_value(category).unwrap(), category.as_str());
        }
    }
}
