//! Repository-host API client.
//!
//! Two read-only calls: the latest release (download modal) and the repository
//! summary (star count on the hero). Neither is cached; callers decide how to
//! degrade on failure.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::release::{ReleaseDescriptor, RepoInfo};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Clone, Debug)]
pub struct GithubClient {
    client: Client,
    api_base: String,
    owner: String,
    repo: String,
}

impl GithubClient {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::with_base(DEFAULT_API_BASE, owner, repo)
    }

    /// Point the client at another API root (tests, enterprise hosts).
    pub fn with_base(
        api_base: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn repo_url(&self) -> String {
        format!("{}/repos/{}/{}", self.api_base, self.owner, self.repo)
    }

    pub fn latest_release_url(&self) -> String {
        format!("{}/releases/latest", self.repo_url())
    }

    pub async fn fetch_latest_release(&self) -> Result<ReleaseDescriptor, FetchError> {
        self.get_json(self.latest_release_url()).await
    }

    pub async fn fetch_repo_info(&self) -> Result<RepoInfo, FetchError> {
        self.get_json(self.repo_url()).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            // Required by the API for native callers; browsers drop it.
            .header(reqwest::header::USER_AGENT, "samwise-site")
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "repository host returned an error");
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode { url, source })
    }
}
