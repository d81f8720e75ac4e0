//! In-process fakes shared by the service and dispatcher tests

use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

use crate::application::errors::{ApiError, BotError};
use crate::domain::entities::{AuroraReport, ImageBlob, ImageCatalog, Reply};
use crate::domain::traits::{Bot, SpaceWeatherApi};

/// Canned API that records every request it receives
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeApi {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            Err(ApiError::Status(503))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SpaceWeatherApi for FakeApi {
    async fn aurora(&self, lat: f64, lon: f64) -> Result<AuroraReport, ApiError> {
        self.record(format!("aurora {} {}", lat, lon))?;
        Ok(serde_json::from_value(json!({
            "ace": {"kp": "4", "speed": "480", "density": "5.1", "bz": "-3.4", "date": "2024-03-01 12:00:00"},
            "probability": {"value": 42, "highest": {"value": 60, "lat": 66.0, "long": -20.0}}
        }))
        .unwrap())
    }

    async fn image_catalog(&self) -> Result<ImageCatalog, ApiError> {
        self.record("catalog".to_string())?;
        Ok(serde_json::from_value(json!({
            "images": {
                "yellowknife": {"name": "Yellowknife", "description": "Northwest Territories, Canada", "category": "cam", "url": "https://example.com/yk.jpg", "cache": 60},
                "abisko": {"name": "Abisko", "description": "Abisko, Sweden", "category": "cam", "url": "https://example.com/ab.jpg", "cache": 60},
                "ace": {"name": "ACE Real-Time Solar Wind", "description": "Magnetometer and plasma", "category": "chart", "url": "https://example.com/ace.gif", "cache": 300}
            }
        }))
        .unwrap())
    }

    async fn image(&self, id: &str) -> Result<ImageBlob, ApiError> {
        self.record(format!("image {}", id))?;
        Ok(ImageBlob {
            bytes: vec![0xFF, 0xD8, 0xFF],
            content_type: Some("image/jpeg".to_string()),
        })
    }
}

/// Bot that keeps every reply instead of delivering it
#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<(String, Reply)>>,
}

impl RecordingBot {
    pub fn sent(&self) -> Vec<(String, Reply)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_reply(&self, channel_id: &str, reply: &Reply) -> Result<(), BotError> {
        self.sent.lock().unwrap().push((channel_id.to_string(), reply.clone()));
        Ok(())
    }
}
