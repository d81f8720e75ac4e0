//! Payloads returned by the Auroras.live API
//!
//! The API is loose about types: numeric readings arrive either as JSON
//! numbers or as strings, and any field may be missing. Readings are kept
//! as raw JSON values and rendered through [`reading`].

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Placeholder for any reading the API did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Render a loosely typed reading, falling back to `N/A`.
pub fn reading(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Combined ACE and probability report for one location (`type=all`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuroraReport {
    pub date: Option<Value>,
    pub ace: Option<AceData>,
    pub probability: Option<ProbabilityData>,
}

impl AuroraReport {
    /// Timestamp of the newest reading, preferring the ACE feed
    pub fn updated_at(&self) -> Option<String> {
        let from_ace = self.ace.as_ref().and_then(|ace| ace.date.clone());
        [from_ace, self.date.clone()]
            .iter()
            .map(reading)
            .find(|s| s != NOT_AVAILABLE)
    }
}

/// Solar wind and Kp readings from the ACE spacecraft
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AceData {
    pub date: Option<Value>,
    pub bz: Option<Value>,
    pub density: Option<Value>,
    pub speed: Option<Value>,
    pub kp: Option<Value>,
    pub kp1hour: Option<Value>,
    pub kp4hour: Option<Value>,
    pub colour: Option<ActivityColour>,
}

/// Activity level colours (`green`, `yellow`, `orange`, `red`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityColour {
    pub kp: Option<Value>,
    pub kp1hour: Option<Value>,
    pub kp4hour: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbabilityData {
    pub date: Option<Value>,
    pub value: Option<Value>,
    pub colour: Option<Value>,
    pub highest: Option<HighestProbability>,
}

/// Highest probability within roughly 1000km of the requested point
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HighestProbability {
    pub value: Option<Value>,
    pub lat: Option<Value>,
    pub long: Option<Value>,
    pub colour: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageCategory {
    Camera,
    Chart,
    Satellite,
    Other(String),
}

impl ImageCategory {
    pub fn from_api(raw: &str) -> Self {
        match raw {
            "cam" => ImageCategory::Camera,
            "chart" => ImageCategory::Chart,
            "satellite" => ImageCategory::Satellite,
            other => ImageCategory::Other(other.to_string()),
        }
    }
}

/// Listing of every image the API can serve (`type=images&action=list`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageCatalog {
    #[serde(default)]
    pub images: BTreeMap<String, ImageEntry>,
}

impl ImageCatalog {
    pub fn get(&self, id: &str) -> Option<&ImageEntry> {
        self.images.get(id)
    }

    /// Entries of one category, ordered by id
    pub fn in_category<'a>(
        &'a self,
        category: &'a ImageCategory,
    ) -> impl Iterator<Item = (&'a String, &'a ImageEntry)> + 'a {
        self.images
            .iter()
            .filter(move |(_, entry)| &entry.category() == category)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "category")]
    pub category_raw: String,
    #[serde(default)]
    pub url: String,
    /// Seconds the upstream caches the image for
    pub cache: Option<Value>,
}

impl ImageEntry {
    pub fn category(&self) -> ImageCategory {
        ImageCategory::from_api(&self.category_raw)
    }
}

/// Raw image bytes for `view`
#[derive(Debug, Clone)]
pub struct ImageBlob {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl ImageBlob {
    /// File extension matching the reported content type
    pub fn extension(&self) -> &'static str {
        let mime = self
            .content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase());
        match mime.as_deref() {
            Some("image/png") => "png",
            Some("image/gif") => "gif",
            Some("image/webp") => "webp",
            _ => "jpg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reading_accepts_numbers_and_strings() {
        assert_eq!(reading(&Some(json!(4.33))), "4.33");
        assert_eq!(reading(&Some(json!("412"))), "412");
        assert_eq!(reading(&Some(json!(""))), NOT_AVAILABLE);
        assert_eq!(reading(&Some(Value::Null)), NOT_AVAILABLE);
        assert_eq!(reading(&None), NOT_AVAILABLE);
    }

    #[test]
    fn test_aurora_report_decodes_partial_payload() {
        let report: AuroraReport = serde_json::from_value(json!({
            "ace": {"kp": "3.67", "speed": 512, "colour": {"kp": "yellow"}},
            "probability": {"value": 18, "highest": {"value": 45, "lat": 66.5, "long": -19}}
        }))
        .unwrap();

        let ace = report.ace.as_ref().unwrap();
        assert_eq!(reading(&ace.kp), "3.67");
        assert_eq!(reading(&ace.bz), NOT_AVAILABLE);
        assert_eq!(reading(&report.probability.as_ref().unwrap().value), "18");
        assert_eq!(report.updated_at(), None);
    }

    #[test]
    fn test_updated_at_prefers_ace_date() {
        let report: AuroraReport = serde_json::from_value(json!({
            "date": "2024-01-01 00:00:00",
            "ace": {"date": "2024-01-01 00:05:00"}
        }))
        .unwrap();
        assert_eq!(report.updated_at().as_deref(), Some("2024-01-01 00:05:00"));
    }

    #[test]
    fn test_catalog_filters_by_category() {
        let catalog: ImageCatalog = serde_json::from_value(json!({
            "images": {
                "yk": {"name": "Yellowknife", "description": "NWT", "category": "cam", "url": "u", "cache": 60},
                "ace": {"name": "ACE", "description": "chart", "category": "chart", "url": "u", "cache": 300},
                "abisko": {"name": "Abisko", "description": "SE", "category": "cam", "url": "u", "cache": "60"}
            }
        }))
        .unwrap();

        let cams: Vec<&String> = catalog.in_category(&ImageCategory::Camera).map(|(id, _)| id).collect();
        assert_eq!(cams, vec!["abisko", "yk"]);
        assert_eq!(catalog.in_category(&ImageCategory::Satellite).count(), 0);
        assert!(catalog.get("ace").is_some());
    }

    #[test]
    fn test_blob_extension_from_content_type() {
        let blob = |ct: Option<&str>| ImageBlob { bytes: vec![], content_type: ct.map(str::to_string) };
        assert_eq!(blob(Some("image/png")).extension(), "png");
        assert_eq!(blob(Some("image/GIF; charset=binary")).extension(), "gif");
        assert_eq!(blob(Some("image/jpeg")).extension(), "jpg");
        assert_eq!(blob(None).extension(), "jpg");
    }
}
