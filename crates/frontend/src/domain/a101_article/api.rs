//! REST calls for the article aggregate.

use crate::shared::api_utils::DEFAULT_TIMEOUT_MS;
use crate::shared::http::{self, ApiError};
use contracts::domain::a101_article::{Article, ArticleCreate, ArticleUpdate};
use contracts::usecases::u101_keyword_analysis::{
    ActionResponse, SelectKeywordsRequest, SelectKeywordsResponse, StartKeywordAnalysisResponse,
};

const ARTICLES: &str = "/api/articles";

fn article_path(id: &str) -> String {
    format!("{}/{}", ARTICLES, urlencoding::encode(id))
}

pub async fn fetch_articles() -> Result<Vec<Article>, ApiError> {
    http::get_json(ARTICLES).await
}

pub async fn fetch_article(id: &str) -> Result<Article, ApiError> {
    http::get_json(&article_path(id)).await
}

pub async fn create_article(body: &ArticleCreate) -> Result<Article, ApiError> {
    http::post_json(ARTICLES, body).await
}

pub async fn update_article(id: &str, body: &ArticleUpdate) -> Result<Article, ApiError> {
    http::put_json(&article_path(id), body).await
}

pub async fn delete_article(id: &str) -> Result<(), ApiError> {
    http::delete(&article_path(id)).await
}

pub async fn start_keyword_analysis(id: &str) -> Result<StartKeywordAnalysisResponse, ApiError> {
    let path = format!("{}/start-keyword-analysis", article_path(id));
    http::post_empty(&path, DEFAULT_TIMEOUT_MS).await
}

/// Takes an already validated request, so an empty selection never reaches the network.
pub async fn select_keywords(
    id: &str,
    body: &SelectKeywordsRequest,
) -> Result<SelectKeywordsResponse, ApiError> {
    let path = format!("{}/select-keywords", article_path(id));
    http::post_json(&path, body).await
}

/// Shopify
pub async fn publish_article(id: &str) -> Result<ActionResponse, ApiError> {
    let path = format!("{}/publish", article_path(id));
    http::post_empty(&path, DEFAULT_TIMEOUT_MS).await
}

pub async fn publish_wordpress(id: &str) -> Result<ActionResponse, ApiError> {
    let path = format!("{}/publish-wordpress", article_path(id));
    http::post_empty(&path, DEFAULT_TIMEOUT_MS).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_path_encodes_id() {
        assert_eq!(article_path("abc-1"), "/api/articles/abc-1");
        assert_eq!(article_path("a/b"), "/api/articles/a%2Fb");
    }
}
