//! REST calls for key/value settings.

use crate::shared::http::{self, ApiError};
use contracts::domain::a103_setting::{Setting, SettingUpdate};

const SETTINGS: &str = "/api/settings";

pub async fn fetch_settings() -> Result<Vec<Setting>, ApiError> {
    http::get_json(SETTINGS).await
}

/// Upsert by key.
pub async fn save_setting(body: &SettingUpdate) -> Result<Setting, ApiError> {
    http::put_json(SETTINGS, body).await
}
