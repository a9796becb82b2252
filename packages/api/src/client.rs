//! HTTP client for the moderation REST API.

use std::collections::BTreeMap;

use moderation_core::{
    ActivityData, AdFilters, AdId, AdsPage, Advertisement, DecisionsData, Period, ReasonPayload,
    StatsSummary,
};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::service::{ModerationApi, ModerationReceipt, StatsBundle, fetch_stats_bundle};

/// Errors that can occur when talking to the moderation API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// Whether the API answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Moderation API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client for the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;

        #[cfg(not(target_arch = "wasm32"))]
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        #[cfg(target_arch = "wasm32")]
        let http = Client::builder().build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch all four statistics datasets concurrently.
    pub async fn stats_bundle(&self, period: Period) -> Result<StatsBundle, ApiError> {
        fetch_stats_bundle(self, period).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, ?query, "GET");

        let response = self.http.get(&url).query(query).send().await?;
        let body = read_body(Method::GET, &url, response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post<B: Serialize, T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "POST");

        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let body = read_body(Method::POST, &url, response).await?;

        // Mutations may answer with an empty body.
        if body.trim().is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Clients are equal when they talk to the same API.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

/// Read the response body, turning non-success statuses into errors.
async fn read_body(method: Method, url: &str, response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return Ok(body);
    }

    let message = error_message(&body);
    tracing::warn!(%method, %url, status = status.as_u16(), %message, "API request failed");
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Pull a readable message out of an error body.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(text) = ["error", "message"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
    {
        return text.to_string();
    }
    body.trim().to_string()
}

impl ModerationApi for ApiClient {
    async fn list_ads(&self, filters: &AdFilters) -> Result<AdsPage, ApiError> {
        self.get("/ads", &filters.query_pairs()).await
    }

    async fn get_ad(&self, id: AdId) -> Result<Advertisement, ApiError> {
        self.get(&format!("/ads/{id}"), &[]).await
    }

    async fn approve_ad(&self, id: AdId) -> Result<ModerationReceipt, ApiError> {
        self.post::<(), _>(&format!("/ads/{id}/approve"), None).await
    }

    async fn reject_ad(
        &self,
        id: AdId,
        payload: &ReasonPayload,
    ) -> Result<ModerationReceipt, ApiError> {
        self.post(&format!("/ads/{id}/reject"), Some(payload)).await
    }

    async fn request_changes(
        &self,
        id: AdId,
        payload: &ReasonPayload,
    ) -> Result<ModerationReceipt, ApiError> {
        self.post(&format!("/ads/{id}/request-changes"), Some(payload))
            .await
    }

    async fn stats_summary(&self, period: Period) -> Result<StatsSummary, ApiError> {
        self.get("/stats/summary", &period_query(period)).await
    }

    async fn activity_chart(&self, period: Period) -> Result<Vec<ActivityData>, ApiError> {
        self.get("/stats/chart/activity", &period_query(period)).await
    }

    async fn decisions_chart(&self, period: Period) -> Result<DecisionsData, ApiError> {
        self.get("/stats/chart/decisions", &period_query(period)).await
    }

    async fn categories_chart(&self, period: Period) -> Result<BTreeMap<String, u64>, ApiError> {
        self.get("/stats/chart/categories", &period_query(period)).await
    }
}

fn period_query(period: Period) -> [(&'static str, String); 1] {
    [("period", period.as_str().to_string())]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn error_message_prefers_json_fields() {
        assert_eq!(error_message(r#"{"error":"Ad not found"}"#), "Ad not found");
        assert_eq!(error_message(r#"{"message":"Bad reason"}"#), "Bad reason");
        assert_eq!(error_message(" Service Unavailable \n"), "Service Unavailable");
    }

    #[test]
    fn not_found_is_detected() {
        let err = ApiError::Status {
            status: 404,
            message: "missing".to_string(),
        };
        assert!(err.is_not_found());
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn clients_compare_by_config() {
        let a = ApiClient::new(ApiConfig::default()).unwrap();
        let b = ApiClient::new(ApiConfig::default()).unwrap();
        let c = ApiClient::new(ApiConfig::default().with_asset_host("http://cdn.local")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn client_rejects_relative_base() {
        let result = ApiClient::new(ApiConfig::default().with_base_url("/api/v1"));
        assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
    }
}
