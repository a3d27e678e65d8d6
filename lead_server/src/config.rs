//! Runtime configuration for the lead service.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_LOOPS_BASE_URL: &str = "https://app.loops.so/api";
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved server parameters.
///
/// Built by the binary from CLI flags and environment; tests build it directly.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind: String,
    pub loops_api_key: String,
    pub loops_base_url: String,
    /// Built site to serve for non-API paths (`index.html` fallback).
    pub static_dir: Option<PathBuf>,
    pub max_body_bytes: usize,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    pub fn new(bind: impl Into<String>, loops_api_key: impl Into<String>) -> Self {
        Self {
            bind: bind.into(),
            loops_api_key: loops_api_key.into(),
            loops_base_url: DEFAULT_LOOPS_BASE_URL.to_string(),
            static_dir: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }

    pub fn with_loops_base_url(mut self, url: impl Into<String>) -> Self {
        self.loops_base_url = url.into();
        self
    }

    pub fn with_static_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.static_dir = dir;
        self
    }

    pub fn with_max_body_bytes(mut self, bytes: usize) -> Self {
        self.max_body_bytes = bytes;
        self
    }

    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = ServerConfig::new("0.0.0.0:8080", "key")
            .with_loops_base_url("http://localhost:1")
            .with_static_dir(Some(PathBuf::from("dist")))
            .with_max_body_bytes(10)
            .with_upstream_timeout(Duration::from_secs(1));

        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.loops_base_url, "http://localhost:1");
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
        assert_eq!(config.max_body_bytes, 10);
        assert_eq!(config.upstream_timeout, Duration::from_secs(1));
    }

    #[test]
    fn defaults_point_at_loops() {
        let config = ServerConfig::new(DEFAULT_BIND, "key");
        assert_eq!(config.loops_base_url, DEFAULT_LOOPS_BASE_URL);
        assert!(config.static_dir.is_none());
    }
}
