use std::sync::Arc;

use crate::application::errors::{ApiError, CommandError};
use crate::application::services::formatter;
use crate::domain::entities::{CommandKind, ImageCategory, Invocation, Reply};
use crate::domain::traits::SpaceWeatherApi;

/// Runs recognized commands against the space-weather API.
///
/// Every outcome, including bad input and upstream failures, becomes a
/// [`Reply`]; nothing here returns an error to the caller.
pub struct CommandService {
    api: Arc<dyn SpaceWeatherApi>,
    prefix: String,
}

impl CommandService {
    pub fn new(api: Arc<dyn SpaceWeatherApi>, prefix: impl Into<String>) -> Self {
        Self {
            api,
            prefix: prefix.into(),
        }
    }

    pub async fn execute(&self, invocation: &Invocation) -> Reply {
        match invocation.kind {
            CommandKind::Aurora => self.aurora(&invocation.args).await,
            CommandKind::Cameras => self.listing(ImageCategory::Camera).await,
            CommandKind::Charts => self.listing(ImageCategory::Chart).await,
            CommandKind::Satellites => self.listing(ImageCategory::Satellite).await,
            CommandKind::View => self.view(&invocation.args).await,
            CommandKind::Help => formatter::help(&self.prefix),
        }
    }

    async fn aurora(&self, args: &[String]) -> Reply {
        let (lat, lon) = match self.parse_coordinates(args) {
            Ok(coords) => coords,
            Err(e) => return Reply::text(e.to_string()),
        };

        match self.api.aurora(lat, lon).await {
            Ok(report) => formatter::aurora_report(lat, lon, &report),
            Err(e) => {
                tracing::warn!(lat, lon, "aurora lookup failed: {}", e);
                Reply::text(format!("Error fetching aurora data: {}", e))
            }
        }
    }

    /// Validate `<latitude> <longitude>`
    pub fn parse_coordinates(&self, args: &[String]) -> Result<(f64, f64), CommandError> {
        let (Some(lat_raw), Some(lon_raw)) = (args.first(), args.get(1)) else {
            return Err(CommandError::Usage(format!(
                "Please provide both latitude and longitude. Usage: {}{}",
                self.prefix,
                CommandKind::Aurora.usage()
            )));
        };

        let parse = |raw: &str| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    CommandError::InvalidArgs(format!(
                        "'{}' is not a number. Usage: {}{}",
                        raw,
                        self.prefix,
                        CommandKind::Aurora.usage()
                    ))
                })
        };
        let lat = parse(lat_raw.as_str())?;
        let lon = parse(lon_raw.as_str())?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(CommandError::InvalidArgs(
                "Invalid coordinates! Latitude must be between -90 and 90, and longitude between -180 and 180."
                    .to_string(),
            ));
        }

        Ok((lat, lon))
    }

    async fn listing(&self, category: ImageCategory) -> Reply {
        match self.api.image_catalog().await {
            Ok(catalog) => formatter::image_listing(&category, &catalog, &self.prefix),
            Err(e) => {
                tracing::warn!("image listing failed: {}", e);
                Reply::text(format!(
                    "Error: Unable to fetch {} list: {}",
                    formatter::category_label(&category),
                    e
                ))
            }
        }
    }

    async fn view(&self, args: &[String]) -> Reply {
        let Some(id) = args.first() else {
            return Reply::text(format!("Usage: {}{}", self.prefix, CommandKind::View.usage()));
        };

        match self.fetch_image(id).await {
            Ok(reply) => reply,
            Err(ViewFailure::NotFound(e)) => Reply::text(format!(
                "Error: {}. Use {p}cameras, {p}charts, or {p}satellites to see available images.",
                e,
                p = self.prefix
            )),
            Err(ViewFailure::Api(e)) => {
                tracing::warn!(image_id = %id, "image fetch failed: {}", e);
                Reply::text(format!("Error: Unable to fetch image data: {}", e))
            }
        }
    }

    async fn fetch_image(&self, id: &str) -> Result<Reply, ViewFailure> {
        let catalog = self.api.image_catalog().await?;
        let entry = catalog
            .get(id)
            .ok_or_else(|| CommandError::ImageNotFound(id.to_string()))?;

        let blob = self.api.image(id).await?;
        Ok(formatter::image_view(id, entry, blob))
    }
}

enum ViewFailure {
    NotFound(CommandError),
    Api(ApiError),
}

impl From<CommandError> for ViewFailure {
    fn from(err: CommandError) -> Self {
        ViewFailure::NotFound(err)
    }
}

impl From<ApiError> for ViewFailure {
    fn from(err: ApiError) -> Self {
        ViewFailure::Api(err)
    }
}
