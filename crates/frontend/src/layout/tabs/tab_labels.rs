//! Tab keys and titles.
//!
//! List-like tabs use a fixed key; per-article tabs append the article id to
//! one of the prefixes below.

use contracts::domain::a101_article::Article;
use contracts::domain::a102_user_option::UserOption;
use contracts::domain::a103_setting::Setting;
use contracts::domain::common::AggregateRoot;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_keyword_analysis::KeywordAnalysis;
use contracts::usecases::u102_integrated_analysis::IntegratedAnalysis;

pub const ARTICLE_DETAIL_PREFIX: &str = "a101_article_detail_";
pub const ARTICLE_KEYWORDS_PREFIX: &str = "a101_article_keywords_";

pub fn article_detail_key(id: &str) -> String {
    format!("{}{}", ARTICLE_DETAIL_PREFIX, id)
}

pub fn article_keywords_key(id: &str) -> String {
    format!("{}{}", ARTICLE_KEYWORDS_PREFIX, id)
}

/// Readable title for a fixed tab key, `""` for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a101_article" => Article::list_name(),
        "a101_article_new" => "新規記事作成",
        "a102_user_option" => UserOption::list_name(),
        "a103_setting" => Setting::list_name(),
        "u101_keyword_analysis" => KeywordAnalysis::display_name(),
        "u102_integrated_analysis" => IntegratedAnalysis::display_name(),
        _ => "",
    }
}

/// Заголовок detail-таба: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Title for any key, including per-article ones restored from the URL.
pub fn title_for_key(key: &str) -> String {
    if let Some(id) = key.strip_prefix(ARTICLE_DETAIL_PREFIX) {
        return detail_tab_label(Article::element_name(), id);
    }
    if let Some(id) = key.strip_prefix(ARTICLE_KEYWORDS_PREFIX) {
        return detail_tab_label("キーワード選択", id);
    }
    match tab_label_for_key(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_keys() {
        assert_eq!(article_detail_key("42"), "a101_article_detail_42");
        assert_eq!(article_keywords_key("42"), "a101_article_keywords_42");
    }

    #[test]
    fn test_title_for_key() {
        assert_eq!(title_for_key("a101_article"), "記事一覧");
        assert_eq!(title_for_key("a101_article_detail_7"), "記事 · 7");
        assert_eq!(title_for_key("a101_article_keywords_7"), "キーワード選択 · 7");
        assert_eq!(title_for_key("u102_integrated_analysis"), "SEOキーワード分析ツール");
        assert_eq!(title_for_key("nope"), "nope");
    }
}
