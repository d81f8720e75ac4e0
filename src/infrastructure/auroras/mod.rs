//! Auroras.live API client
//!
//! All data comes from a single endpoint; the `type` query parameter picks
//! the dataset. One method call issues exactly one GET.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::errors::ApiError;
use crate::domain::entities::{AuroraReport, ImageBlob, ImageCatalog};
use crate::domain::traits::SpaceWeatherApi;
use crate::infrastructure::config::ApiConfig;

/// reqwest-backed [`SpaceWeatherApi`]
pub struct AurorasClient {
    client: Client,
    base_url: reqwest::Url,
}

impl AurorasClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = reqwest::Url::parse(&config.base_url)
            .map_err(|e| ApiError::Url(format!("{}: {}", config.base_url, e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    async fn get(&self, query: &[(&str, String)]) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(base = %self.base_url, ?query, "auroras request");

        let response = self
            .client
            .get(self.base_url.clone())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, query: &[(&str, String)]) -> Result<T, ApiError> {
        let body = self.get(query).await?.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl SpaceWeatherApi for AurorasClient {
    async fn aurora(&self, lat: f64, lon: f64) -> Result<AuroraReport, ApiError> {
        self.get_json(&[
            ("type", "all".to_string()),
            ("lat", lat.to_string()),
            ("long", lon.to_string()),
            ("forecast", "false".to_string()),
            ("threeday", "false".to_string()),
        ])
        .await
    }

    async fn image_catalog(&self) -> Result<ImageCatalog, ApiError> {
        self.get_json(&[("type", "images".to_string()), ("action", "list".to_string())])
            .await
    }

    async fn image(&self, id: &str) -> Result<ImageBlob, ApiError> {
        let response = self
            .get(&[("type", "images".to_string()), ("image", id.to_string())])
            .await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(ApiError::Decode("empty image body".to_string()));
        }

        Ok(ImageBlob { bytes, content_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(AurorasClient::new(&config), Err(ApiError::Url(_))));
    }

    #[test]
    fn test_uses_configured_base_url() {
        let client = AurorasClient::new(&ApiConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://api.auroras.live/v1/");
    }
}
