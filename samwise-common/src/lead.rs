//! Lead capture payloads and the browser-side client for `/api/loops`.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `local@domain.tld`, no whitespace, exactly one `@`.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Body of `POST /api/loops`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub download_url: String,
    #[serde(default)]
    pub application_name: String,
}

impl LeadRequest {
    pub fn new(
        email: impl Into<String>,
        download_url: impl Into<String>,
        application_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            download_url: download_url.into(),
            application_name: application_name.into(),
        }
    }

    /// All three fields present and non-blank.
    pub fn is_complete(&self) -> bool {
        [&self.email, &self.download_url, &self.application_name]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Body of every `/api/loops` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("lead endpoint unreachable: {0}")]
    Network(#[source] reqwest::Error),
    #[error("lead endpoint answered {status}: {message}")]
    Rejected { status: u16, message: String },
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn validate_email(email: &str) -> Result<(), LeadError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(LeadError::InvalidEmail)
    }
}

/// Posts leads to the site's own lead endpoint.
#[derive(Clone, Debug)]
pub struct LeadClient {
    client: Client,
    endpoint: String,
}

impl LeadClient {
    /// `endpoint` must be absolute; see [`crate::config::resolve_endpoint`].
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn submit(&self, lead: &LeadRequest) -> Result<(), LeadError> {
        validate_email(&lead.email)?;

        let response = self
            .client
            .post(&self.endpoint)
            .json(lead)
            .send()
            .await
            .map_err(LeadError::Network)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response
            .json::<ApiMessage>()
            .await
            .map(|m| m.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("error").to_string());
        Err(LeadError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn accepts_ordinary_addresses() {
        for ok in ["sam@shire.me", "frodo.baggins+ring@bag-end.co.uk", "  a@b.io "] {
            assert!(is_valid_email(ok), "{ok}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "not-an-email", "sam@shire", "@shire.me", "sam@@shire.me", "sam @shire.me"] {
            assert!(!is_valid_email(bad), "{bad}");
            assert!(matches!(validate_email(bad), Err(LeadError::InvalidEmail)));
        }
    }

    #[test]
    fn serializes_camel_case() {
        let lead = LeadRequest::new("sam@shire.me", "https://dl/app.exe", "Samwise");
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "sam@shire.me",
                "downloadUrl": "https://dl/app.exe",
                "applicationName": "Samwise"
            })
        );
    }

    #[test]
    fn completeness_requires_every_field() {
        assert!(LeadRequest::new("a@b.io", "u", "n").is_complete());
        assert!(!LeadRequest::new("a@b.io", "", "n").is_complete());
        assert!(!LeadRequest::new(" ", "u", "n").is_complete());
    }

    #[tokio::test]
    async fn submit_posts_the_lead() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/loops"))
            .and(body_json(serde_json::json!({
                "email": "sam@shire.me",
                "downloadUrl": "https://dl/app.exe",
                "applicationName": "Samwise"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "Success"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = LeadClient::new(format!("{}/api/loops", server.uri()));
        let lead = LeadRequest::new("sam@shire.me", "https://dl/app.exe", "Samwise");
        client.submit(&lead).await.unwrap();
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = LeadClient::new(format!("{}/api/loops", server.uri()));
        let lead = LeadRequest::new("not-an-email", "https://dl/app.exe", "Samwise");
        assert!(matches!(client.submit(&lead).await, Err(LeadError::InvalidEmail)));
    }

    #[tokio::test]
    async fn server_error_is_reported_with_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "message": "An error occurred while processing your request"
            })))
            .mount(&server)
            .await;

        let client = LeadClient::new(format!("{}/api/loops", server.uri()));
        let lead = LeadRequest::new("sam@shire.me", "https://dl/app.exe", "Samwise");
        match client.submit(&lead).await {
            Err(LeadError::Rejected { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("error occurred"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
