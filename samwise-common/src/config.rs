//! Site configuration.
//!
//! The landing page has no runtime environment, so values are baked in at
//! build time (`option_env!`). Resolution goes through [`SiteConfig::from_lookup`]
//! so defaults and parsing stay testable.

use crate::github::DEFAULT_API_BASE;

pub const DEFAULT_POSTHOG_HOST: &str = "https://us.i.posthog.com";
pub const DEFAULT_LEADS_ENDPOINT: &str = "/api/loops";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Analytics write key (`POSTHOG_KEY`).
    pub posthog_key: Option<String>,
    /// Analytics host (`POSTHOG_HOST`).
    pub posthog_host: String,
    /// Lead-capture endpoint, absolute or site-relative (`SAMWISE_LEADS_ENDPOINT`).
    pub leads_endpoint: String,
    /// Repository-host API root (`SAMWISE_GITHUB_API`).
    pub github_api_base: String,
    /// `SAMWISE_ENV=production`.
    pub production: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            posthog_key: None,
            posthog_host: DEFAULT_POSTHOG_HOST.to_string(),
            leads_endpoint: DEFAULT_LEADS_ENDPOINT.to_string(),
            github_api_base: DEFAULT_API_BASE.to_string(),
            production: false,
        }
    }
}

impl SiteConfig {
    /// Resolve from any variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            posthog_key: get("POSTHOG_KEY"),
            posthog_host: get("POSTHOG_HOST").unwrap_or(defaults.posthog_host),
            leads_endpoint: get("SAMWISE_LEADS_ENDPOINT").unwrap_or(defaults.leads_endpoint),
            github_api_base: get("SAMWISE_GITHUB_API").unwrap_or(defaults.github_api_base),
            production: get("SAMWISE_ENV")
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("production")),
        }
    }

    /// Values captured from the environment of the compiling process.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| {
            let value = match name {
                "POSTHOG_KEY" => option_env!("POSTHOG_KEY"),
                "POSTHOG_HOST" => option_env!("POSTHOG_HOST"),
                "SAMWISE_LEADS_ENDPOINT" => option_env!("SAMWISE_LEADS_ENDPOINT"),
                "SAMWISE_GITHUB_API" => option_env!("SAMWISE_GITHUB_API"),
                "SAMWISE_ENV" => option_env!("SAMWISE_ENV"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

/// Make a site-relative endpoint absolute against the page origin.
pub fn resolve_endpoint(origin: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(SiteConfig::from_lookup(lookup(&[])), SiteConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("POSTHOG_KEY", "phc_123"),
            ("POSTHOG_HOST", "https://eu.i.posthog.com"),
            ("SAMWISE_LEADS_ENDPOINT", "https://leads.example/api/loops"),
            ("SAMWISE_GITHUB_API", "http://localhost:9999"),
            ("SAMWISE_ENV", "Production"),
        ]));
        assert_eq!(config.posthog_key.as_deref(), Some("phc_123"));
        assert_eq!(config.posthog_host, "https://eu.i.posthog.com");
        assert_eq!(config.leads_endpoint, "https://leads.example/api/loops");
        assert_eq!(config.github_api_base, "http://localhost:9999");
        assert!(config.production);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = SiteConfig::from_lookup(lookup(&[("POSTHOG_KEY", "  "), ("SAMWISE_ENV", "dev")]));
        assert!(config.posthog_key.is_none());
        assert!(!config.production);
    }

    #[test]
    fn resolves_relative_endpoints() {
        assert_eq!(
            resolve_endpoint("https://samwise.app/", "/api/loops"),
            "https://samwise.app/api/loops"
        );
        assert_eq!(
            resolve_endpoint("https://samwise.app", "https://other/api"),
            "https://other/api"
        );
    }
}
