//! Error types for the story site
//!
//! Uses thiserror for ergonomic error definitions.
//! Nothing here is fatal to the page: callers log the error and fall back
//! to "data absent" or a fallback message.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, InsightError>;

/// Site errors
#[derive(Error, Debug)]
pub enum InsightError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success response for a dataset
    #[error("Request for {path} failed: HTTP {status}")]
    Status { path: String, status: u16 },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// DOM access errors
    #[error("DOM error: {0}")]
    Dom(String),

    /// Chart library errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// Period tab key that matches no scatter bucket
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    /// Theme preference storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for InsightError {
    fn from(err: reqwest::Error) -> Self {
        InsightError::Http(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for InsightError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        InsightError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<InsightError> for wasm_bindgen::JsValue {
    fn from(err: InsightError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InsightError::Status {
            path: "./data/viz_payload.json".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Request for ./data/viz_payload.json failed: HTTP 404"
        );
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: InsightError = json_err.into();
        assert!(matches!(err, InsightError::Json(_)));
    }
}
