use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::models::{
    ApiError, HealthResponse, NewsRequest, NewsResult, PredictRequest, PredictionResult,
};
use crate::utils::errors::extract_error_message;

/// Client for the stock prediction service
pub struct PredictionClient {
    http_client: HttpClient,
    base_url: String,
}

impl PredictionClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8001";

    /// Create a client for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Map a failed response onto an `ApiError`
    async fn handle_error_response(response: reqwest::Response) -> ApiError {
        let status_code = response.status().as_u16();
        let body_text = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body_text);

        match status_code {
            400 => ApiError::BadRequest(message),
            404 => ApiError::NotFound(message),
            500..=599 => {
                warn!("Prediction service error {}: {}", status_code, message);
                ApiError::ServerError(status_code, message)
            }
            _ => ApiError::HttpError(status_code, message),
        }
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// POST /predict
    ///
    /// Requests the next-day prediction and the predicted vs actual history for
    /// `stock` (a ticker or company name). `range` is passed through untouched.
    pub async fn predict(&self, stock: &str, range: Option<&str>) -> Result<PredictionResult, ApiError> {
        let url = format!("{}/predict", self.base_url);
        let body = PredictRequest {
            stock: stock.to_string(),
            range: range.map(str::to_string),
        };
        debug!("POST {} stock={} range={:?}", url, stock, range);

        let response = self
            .http_client
            .post(&url)
            .headers(Self::create_headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        Self::read_json(response).await
    }

    /// POST /news
    ///
    /// Fetches the news sentiment summary for `stock`.
    pub async fn news(&self, stock: &str) -> Result<NewsResult, ApiError> {
        let url = format!("{}/news", self.base_url);
        let body = NewsRequest {
            stock: stock.to_string(),
        };
        debug!("POST {} stock={}", url, stock);

        let response = self
            .http_client
            .post(&url)
            .headers(Self::create_headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        Self::read_json(response).await
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let url = format!("{}/health", self.base_url);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .headers(Self::create_headers())
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        Self::read_json(response).await
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = PredictionClient::new("http://localhost:8001/");
        assert_eq!(client.base_url(), "http://localhost:8001");
        assert_eq!(PredictionClient::default().base_url(), PredictionClient::DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_request_error() {
        // Bind then drop to get a local port nobody listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .expect("bind local port")
            .port();
        let client = PredictionClient::new(format!("http://127.0.0.1:{}", port));
        let err = client.health().await.expect_err("no server");
        assert!(matches!(err, ApiError::RequestError(_)));
    }
}
