//! Loops marketing-automation client.
//!
//! A lead is two calls: create-or-update the contact, then send the
//! `application_download` event. There is no rollback; if the event fails the
//! contact stays.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use samwise_common::LeadRequest;

pub const APPLICATION_DOWNLOAD_EVENT: &str = "application_download";

#[derive(Debug, Error)]
pub enum LoopsError {
    #[error("loops {step} request failed: {source}")]
    Network {
        step: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("loops {step} answered {status}: {message}")]
    Api {
        step: &'static str,
        status: u16,
        message: String,
    },
}

/// Where captured leads go. The HTTP layer is generic over this so tests can
/// swap the upstream.
pub trait LeadSink: Send + Sync + 'static {
    fn record(&self, lead: &LeadRequest) -> impl Future<Output = Result<(), LoopsError>> + Send;
}

#[derive(Debug, Serialize)]
struct ContactBody<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventBody<'a> {
    email: &'a str,
    event_name: &'a str,
    event_properties: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
struct LoopsReply {
    success: Option<bool>,
    message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct LoopsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LoopsClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create the contact, or update it when the email is already known.
    pub async fn upsert_contact(&self, email: &str) -> Result<(), LoopsError> {
        let request = self
            .client
            .put(format!("{}/v1/contacts/update", self.base_url))
            .json(&ContactBody { email });
        self.send("contact", request).await
    }

    pub async fn send_event(
        &self,
        email: &str,
        event_name: &str,
        properties: Map<String, Value>,
    ) -> Result<(), LoopsError> {
        let request = self
            .client
            .post(format!("{}/v1/events/send", self.base_url))
            .json(&EventBody {
                email,
                event_name,
                event_properties: properties,
            });
        self.send("event", request).await
    }

    async fn send(
        &self,
        step: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<(), LoopsError> {
        let response = request
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|source| LoopsError::Network { step, source })?;

        let status = response.status();
        let reply: LoopsReply = response.json().await.unwrap_or_default();
        if status.is_success() && reply.success != Some(false) {
            return Ok(());
        }
        Err(LoopsError::Api {
            step,
            status: status.as_u16(),
            message: reply
                .message
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string()),
        })
    }
}

pub fn download_properties(lead: &LeadRequest) -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert("download_url".into(), lead.download_url.clone().into());
    properties.insert("application_name".into(), lead.application_name.clone().into());
    properties
}

impl LeadSink for LoopsClient {
    async fn record(&self, lead: &LeadRequest) -> Result<(), LoopsError> {
        self.upsert_contact(&lead.email).await?;
        self.send_event(&lead.email, APPLICATION_DOWNLOAD_EVENT, download_properties(lead))
            .await?;
        tracing::info!(download_url = %lead.download_url, "lead recorded");
        Ok(())
    }
}
