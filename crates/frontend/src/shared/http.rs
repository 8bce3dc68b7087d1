//! HTTP helpers over `gloo-net` shared by every `api.rs` module.
//!
//! Each request runs under a deadline backed by an `AbortController`, so a
//! hung backend surfaces as [`ApiError::Timeout`] instead of a generic failure.

use super::api_utils::{api_url, DEFAULT_TIMEOUT_MS};
use gloo_net::http::{Method, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use web_sys::AbortController;

/// Classified request failure. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("リクエストがタイムアウトしました。処理に時間がかかっている可能性があります。")]
    Timeout,

    #[error("サーバーエラー: {detail}")]
    Server { status: u16, detail: String },

    #[error("サーバーに接続できませんでした。ネットワーク接続を確認してください。")]
    Network(String),

    #[error("リクエストエラー: {0}")]
    Request(String),

    #[error("レスポンスの解析に失敗しました: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Pulls the human readable reason out of an error body.
///
/// Order: `detail` (string, or the `msg` of each FastAPI validation entry),
/// then `message`, then the raw text, then the status code.
pub fn extract_error_detail(status: u16, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        match json.get("detail") {
            Some(Value::String(s)) if !s.trim().is_empty() => return s.trim().to_string(),
            Some(Value::Array(items)) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if !msgs.is_empty() {
                    return msgs.join(", ");
                }
            }
            _ => {}
        }
        if let Some(msg) = json.get("message").and_then(Value::as_str) {
            if !msg.trim().is_empty() {
                return msg.trim().to_string();
            }
        }
    }

    let text = body.trim();
    if !text.is_empty() && !text.starts_with('<') {
        return text.chars().take(300).collect();
    }
    format!("HTTP {}", status)
}

/// Aborts the request once `timeout_ms` elapses and remembers that it did.
struct Deadline {
    controller: AbortController,
    fired: Rc<Cell<bool>>,
    _timer: Timeout,
}

impl Deadline {
    fn start(timeout_ms: u32) -> Result<Self, ApiError> {
        let controller = AbortController::new()
            .map_err(|e| ApiError::Request(format!("AbortController: {:?}", e)))?;
        let fired = Rc::new(Cell::new(false));
        let timer = {
            let controller = controller.clone();
            let fired = fired.clone();
            Timeout::new(timeout_ms, move || {
                fired.set(true);
                controller.abort();
            })
        };
        Ok(Self {
            controller,
            fired,
            _timer: timer,
        })
    }

    fn classify(&self, err: gloo_net::Error) -> ApiError {
        if self.fired.get() {
            return ApiError::Timeout;
        }
        match err {
            gloo_net::Error::JsError(e) => ApiError::Network(e.to_string()),
            other => ApiError::Request(other.to_string()),
        }
    }
}

async fn send<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
    timeout_ms: u32,
) -> Result<Response, ApiError> {
    let deadline = Deadline::start(timeout_ms)?;
    let signal = deadline.controller.signal();

    let builder = RequestBuilder::new(&api_url(path))
        .method(method)
        .header("Accept", "application/json")
        .abort_signal(Some(&signal));

    let request = match body {
        Some(b) => builder.json(b),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Request(e.to_string()))?;

    let response = request.send().await.map_err(|e| deadline.classify(e))?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::Server {
            status,
            detail: extract_error_detail(status, &text),
        });
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send::<()>(Method::GET, path, None, DEFAULT_TIMEOUT_MS).await?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send(Method::POST, path, Some(body), DEFAULT_TIMEOUT_MS).await?;
    decode(response).await
}

/// POST without a body, e.g. action endpoints like `/publish`.
pub async fn post_empty<T: DeserializeOwned>(path: &str, timeout_ms: u32) -> Result<T, ApiError> {
    let empty = Value::Object(Default::default());
    let response = send(Method::POST, path, Some(&empty), timeout_ms).await?;
    decode(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send(Method::PUT, path, Some(body), DEFAULT_TIMEOUT_MS).await?;
    decode(response).await
}

/// DELETE; the response body is not needed by any caller.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    send::<()>(Method::DELETE, path, None, DEFAULT_TIMEOUT_MS).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        assert_eq!(
            extract_error_detail(400, r#"{"detail": "記事が見つかりません"}"#),
            "記事が見つかりません"
        );
    }

    #[test]
    fn test_detail_validation_list() {
        let body = r#"{"detail": [{"loc": ["query", "keyword"], "msg": "field required"}, {"msg": "bad code"}]}"#;
        assert_eq!(extract_error_detail(422, body), "field required, bad code");
    }

    #[test]
    fn test_message_fallback_and_status() {
        assert_eq!(
            extract_error_detail(500, r#"{"message": "quota exceeded"}"#),
            "quota exceeded"
        );
        assert_eq!(extract_error_detail(502, "<html>Bad Gateway</html>"), "HTTP 502");
        assert_eq!(extract_error_detail(503, ""), "HTTP 503");
        assert_eq!(extract_error_detail(500, "upstream died"), "upstream died");
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            ApiError::Timeout.to_string(),
            "リクエストがタイムアウトしました。処理に時間がかかっている可能性があります。"
        );
        let server = ApiError::Server {
            status: 500,
            detail: "DataForSEO error".into(),
        };
        assert_eq!(server.to_string(), "サーバーエラー: DataForSEO error");
        assert_eq!(server.status(), Some(500));
        assert_eq!(
            ApiError::Network("TypeError".into()).to_string(),
            "サーバーに接続できませんでした。ネットワーク接続を確認してください。"
        );
        assert!(ApiError::Server {
            status: 404,
            detail: String::new()
        }
        .is_not_found());
    }
}
