use crate::shared::api_utils::EXTENDED_TIMEOUT_MS;
use crate::shared::http::{self, ApiError};
use contracts::usecases::u102_integrated_analysis::{
    IntegratedAnalysisQuery, IntegratedAnalysisResult,
};

const ANALYZE: &str = "/api/integrated-analysis/analyze";

fn analyze_path(query: &IntegratedAnalysisQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Request(e.to_string()))?;
    Ok(format!("{}?{}", ANALYZE, qs))
}

/// The backend aggregates several upstream sources; this can take minutes.
/// Not retried automatically: the page offers a manual retry.
pub async fn analyze(query: &IntegratedAnalysisQuery) -> Result<IntegratedAnalysisResult, ApiError> {
    let path = analyze_path(query)?;
    log::debug!("integrated analysis: {}", path);
    http::post_empty(&path, EXTENDED_TIMEOUT_MS).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_path_encodes_query() {
        let query = IntegratedAnalysisQuery::new("weather forecast");
        let path = analyze_path(&query).unwrap();
        assert!(path.starts_with("/api/integrated-analysis/analyze?keyword=weather"));
        assert!(path.contains("location_code=2840"));
        assert!(path.contains("language_code=ja"));
        assert!(!path.contains(' '));
    }
}
