//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs plus the timing
//! constants shared by every request.

/// Port the backend listens on when served next to the frontend.
pub const BACKEND_PORT: u16 = 8000;

/// `localStorage` key that overrides the derived API base, e.g. `https://api.example.com`.
pub const API_BASE_STORAGE_KEY: &str = "api_base";

/// Timeout applied to ordinary requests.
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// Timeout for the aggregate keyword analysis, which chains several slow upstream calls.
pub const EXTENDED_TIMEOUT_MS: u32 = 180_000;

/// Cadence of the article status poller.
pub const POLL_INTERVAL_MS: u32 = 2_000;

/// Get the base URL for API requests
///
/// Uses the `api_base` override from `localStorage` when present, otherwise
/// constructs the URL from the current window location and [`BACKEND_PORT`].
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };

    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok().flatten());
    if let Some(base) = stored.as_deref().and_then(normalize_base) {
        return base;
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    build_api_base(&protocol, &hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/articles/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub fn build_api_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Cleans a user supplied base URL. Blank values mean "no override".
pub fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
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
    fn test_build_api_base() {
        assert_eq!(
            build_api_base("http:", "localhost", BACKEND_PORT),
            "http://localhost:8000"
        );
        assert_eq!(
            build_api_base("https:", "studio.example.jp", 443),
            "https://studio.example.jp:443"
        );
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(
            normalize_base(" https://api.example.com/ "),
            Some("https://api.example.com".to_string())
        );
        assert_eq!(normalize_base("   "), None);
        assert_eq!(normalize_base("/"), None);
    }

    #[test]
    fn test_timeouts_are_distinct() {
        assert!(EXTENDED_TIMEOUT_MS > DEFAULT_TIMEOUT_MS);
        assert_eq!(EXTENDED_TIMEOUT_MS, 180_000);
        assert_eq!(POLL_INTERVAL_MS, 2_000);
    }
}
