use async_trait::async_trait;
use crate::domain::entities::{AuroraReport, ImageBlob, ImageCatalog};
use crate::application::errors::ApiError;

/// Source of space-weather data
///
/// Each method maps to exactly one HTTP request against the upstream API.
#[async_trait]
pub trait SpaceWeatherApi: Send + Sync {
    /// Probability, Kp and solar wind readings for a location
    async fn aurora(&self, lat: f64, lon: f64) -> Result<AuroraReport, ApiError>;

    /// Listing of every camera, chart and satellite image
    async fn image_catalog(&self) -> Result<ImageCatalog, ApiError>;

    /// Raw bytes of one image
    async fn image(&self, id: &str) -> Result<ImageBlob, ApiError>;
}
