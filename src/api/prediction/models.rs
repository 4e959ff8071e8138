use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::HistoricalPoint;

/// Request body for POST /predict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub stock: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
}

/// Request body for POST /news
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRequest {
    pub stock: String,
}

/// Response from POST /predict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub symbol: String,
    pub predicted_next_day_close: f64,
    pub actual_last_close: f64,
    pub margin_of_error: f64,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub historical: Option<Vec<HistoricalPoint>>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub sentiment_summary: Option<String>,
    #[serde(default)]
    pub news_headlines: Vec<String>,
    #[serde(default)]
    pub news_sources: Vec<String>,
}

/// Direction of the predicted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "increase"),
            Trend::Down => write!(f, "decrease"),
        }
    }
}

impl PredictionResult {
    /// Price the prediction is compared against: live price, else last close
    pub fn reference_price(&self) -> f64 {
        self.current_price.unwrap_or(self.actual_last_close)
    }

    /// `Up` only when the predicted close is strictly above the reference price
    pub fn trend(&self) -> Trend {
        if self.predicted_next_day_close > self.reference_price() {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// The historical series, empty when the service sent none
    pub fn into_series(self) -> Vec<HistoricalPoint> {
        self.historical.unwrap_or_default()
    }
}

/// One article in a news summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
}

/// Response from POST /news
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResult {
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    pub sentiment: String,
    pub summary: String,
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}

/// Response from GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error type for prediction service calls
#[derive(Debug, Clone)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),
    /// 404 Not Found
    NotFound(String),
    /// 5xx Server Error
    ServerError(u16, String),
    /// Other HTTP errors
    HttpError(u16, String),
    /// Network/request error
    RequestError(String),
    /// Deserialization error
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::ServerError(code, msg) => write!(f, "Server Error ({}): {}", code, msg),
            ApiError::HttpError(code, msg) => write!(f, "HTTP Error ({}): {}", code, msg),
            ApiError::RequestError(msg) => write!(f, "Request Error: {}", msg),
            ApiError::DeserializationError(msg) => write!(f, "Deserialization Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
