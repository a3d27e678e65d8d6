//! PostHog capture client.
//!
//! Built once at application start and handed to whoever needs it; there is
//! no global instance. Outside production (or without a write key) events are
//! only logged.

use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::SiteConfig;

/// One analytics event with flat properties.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaptureEvent {
    pub event: String,
    pub properties: Map<String, Value>,
}

impl CaptureEvent {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            properties: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn button_clicked(button_name: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new("button_clicked")
            .with("button_name", button_name.into())
            .with("location", location.into())
    }

    pub fn link_clicked(
        link_name: impl Into<String>,
        url: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self::new("link_clicked")
            .with("link_name", link_name.into())
            .with("url", url.into())
            .with("location", location.into())
    }

    pub fn section_viewed(section_name: impl Into<String>) -> Self {
        Self::new("section_viewed").with("section_name", section_name.into())
    }
}

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("capture request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("capture endpoint answered {0}")]
    Status(u16),
}

/// What happened to a captured event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Sent,
    Logged,
}

#[derive(Clone, Debug)]
pub struct Analytics {
    client: Client,
    write_key: Option<String>,
    host: String,
    production: bool,
    distinct_id: String,
}

impl Analytics {
    pub fn new(config: &SiteConfig, distinct_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            write_key: config.posthog_key.clone(),
            host: config.posthog_host.trim_end_matches('/').to_string(),
            production: config.production,
            distinct_id: distinct_id.into(),
        }
    }

    /// Events leave the browser only in production with a write key.
    pub fn dispatches(&self) -> bool {
        self.production && self.write_key.is_some()
    }

    pub fn capture_url(&self) -> String {
        format!("{}/capture/", self.host)
    }

    pub fn payload(&self, event: &CaptureEvent) -> Value {
        serde_json::json!({
            "api_key": self.write_key.as_deref().unwrap_or_default(),
            "event": event.event,
            "distinct_id": self.distinct_id,
            "properties": event.properties,
        })
    }

    pub async fn capture(&self, event: &CaptureEvent) -> Result<Dispatch, AnalyticsError> {
        if !self.dispatches() {
            tracing::info!(event = %event.event, properties = ?event.properties, "event tracked (dev)");
            return Ok(Dispatch::Logged);
        }

        let response = self
            .client
            .post(self.capture_url())
            .json(&self.payload(event))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AnalyticsError::Status(response.status().as_u16()));
        }
        Ok(Dispatch::Sent)
    }
}
