// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration injected by the host page as `window.__APP_CONFIG`.

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use tankview_types::TankConfig;
use wasm_bindgen::JsValue;
use web_sys::window;

pub const DEFAULT_STATUS_URL: &str = "/status";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1000;

/// Ticks drawn on each chart axis.
pub const AXIS_TICKS: usize = 5;

fn default_status_url() -> String {
    DEFAULT_STATUS_URL.to_string()
}

fn default_poll_interval_ms() -> u32 {
    DEFAULT_POLL_INTERVAL_MS
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    /// `levelCount`, `labels` and `order`.
    #[serde(flatten)]
    pub tanks: TankConfig,
    #[serde(rename = "statusUrl")]
    #[serde(default = "default_status_url")]
    pub status_url: String,
    #[serde(rename = "pollIntervalMs")]
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u32,
    /// Absent means a poll may wait forever.
    #[serde(rename = "requestTimeoutMs")]
    #[serde(default)]
    pub request_timeout_ms: Option<u32>,
    /// Absent means the chart keeps every sample since page load.
    #[serde(rename = "historyLimit")]
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl RuntimeConfig {
    /// Reject configurations the dashboard cannot lay out.
    pub fn validate(&self) -> Result<(), String> {
        self.tanks
            .validate()
            .map_err(|e| format!("Invalid tank configuration: {e}"))?;
        if self.history_limit == Some(0) {
            return Err("Invalid tank configuration: historyLimit must be positive".to_string());
        }
        Ok(())
    }
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No browser window available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Parsed and validated configuration, ready for the dashboard.
pub fn dashboard_config() -> Result<RuntimeConfig, String> {
    let config = app_config()?;
    config.validate()?;
    Ok(config)
}

/// Absolute URL of the status endpoint. Relative URLs are resolved against
/// the page origin since `reqwest` only accepts absolute ones. URLs that
/// already carry a scheme are used as given.
pub fn status_endpoint(config: &RuntimeConfig) -> Result<String, String> {
    if is_absolute(&config.status_url) {
        return Ok(config.status_url.clone());
    }
    let origin = window()
        .ok_or_else(|| "No browser window available".to_string())?
        .location()
        .origin()
        .map_err(|e| format!("Failed to read page origin: {e:?}"))?;
    Ok(resolve_url(&origin, &config.status_url))
}

/// Whether `url` starts with a scheme (`http:`, `blob:`, `data:`, ...).
fn is_absolute(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

pub fn resolve_url(origin: &str, url: &str) -> String {
    if is_absolute(url) {
        return url.to_string();
    }
    let origin = origin.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{origin}{url}")
    } else {
        format!("{origin}/{url}")
    }
}
