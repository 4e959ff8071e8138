use thiserror::Error;

use crate::api::prediction::ApiError;

/// Errors surfaced by the pricecast front end
#[derive(Debug, Error)]
pub enum PricecastError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Prediction service error: {0}")]
    Api(#[from] ApiError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid range: {0}")]
    Range(String),
    #[error("Chart rendering failed: {0}")]
    Render(String),
    #[error("{0}")]
    Usage(String),
}

/// Extract the human readable message from a service error body
///
/// The prediction service answers failures with `{"error": "..."}`; for
/// any other body the trimmed text itself is returned.
///
/// `{"error": "Stock input required"}` becomes `Stock input required`.
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
