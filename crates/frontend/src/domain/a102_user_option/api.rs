//! REST calls for user-defined option lists.

use crate::shared::http::{self, ApiError};
use contracts::domain::a102_user_option::{
    OptionCategory, UserOption, UserOptionCreate, UserOptionUpdate,
};

const OPTIONS: &str = "/api/options";

fn list_path(category: Option<OptionCategory>) -> String {
    match category {
        Some(c) => format!("{}?category={}", OPTIONS, c.as_str()),
        None => OPTIONS.to_string(),
    }
}

fn option_path(id: &str) -> String {
    format!("{}/{}", OPTIONS, urlencoding::encode(id))
}

/// `None` fetches every category at once.
pub async fn fetch_options(category: Option<OptionCategory>) -> Result<Vec<UserOption>, ApiError> {
    http::get_json(&list_path(category)).await
}

pub async fn create_option(body: &UserOptionCreate) -> Result<UserOption, ApiError> {
    http::post_json(OPTIONS, body).await
}

pub async fn update_option(id: &str, body: &UserOptionUpdate) -> Result<UserOption, ApiError> {
    http::put_json(&option_path(id), body).await
}

pub async fn delete_option(id: &str) -> Result<(), ApiError> {
    http::delete(&option_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(list_path(None), "/api/options");
        assert_eq!(
            list_path(Some(OptionCategory::ArticleType)),
            "/api/options?category=article_type"
        );
        assert_eq!(option_path("x 1"), "/api/options/x%201");
    }
}
