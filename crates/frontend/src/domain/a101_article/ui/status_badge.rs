use contracts::domain::a101_article::ArticleStatus;
use leptos::prelude::*;
use thaw::*;

pub fn status_label(status: ArticleStatus) -> &'static str {
    match status {
        ArticleStatus::Draft => "下書き",
        ArticleStatus::Processing => "生成中",
        ArticleStatus::KeywordAnalysis => "キーワード分析中",
        ArticleStatus::KeywordSelection => "キーワード選択待ち",
        ArticleStatus::Completed => "完了",
        ArticleStatus::Failed => "失敗",
    }
}

fn status_color(status: ArticleStatus) -> BadgeColor {
    match status {
        ArticleStatus::Draft => BadgeColor::Subtle,
        ArticleStatus::Processing | ArticleStatus::KeywordAnalysis => BadgeColor::Informative,
        ArticleStatus::KeywordSelection => BadgeColor::Warning,
        ArticleStatus::Completed => BadgeColor::Success,
        ArticleStatus::Failed => BadgeColor::Danger,
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<ArticleStatus>) -> impl IntoView {
    view! {
        {move || {
            let s = status.get();
            view! {
                <Badge appearance=BadgeAppearance::Tint color=status_color(s)>
                    {status_label(s)}
                </Badge>
            }
        }}
    }
}

/// Shown next to the title when the last refresh failed.
#[component]
pub fn StaleBadge(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <span title=move || error.get().unwrap_or_default()>
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Important>
                "データが古い可能性があります"
            </Badge>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_label() {
        for status in ArticleStatus::ALL {
            assert!(!status_label(status).is_empty());
        }
        assert_eq!(status_label(ArticleStatus::KeywordSelection), "キーワード選択待ち");
    }
}
