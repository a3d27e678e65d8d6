//! Shared model and client code for the Samwise site.
//!
//! This crate is compiled twice: natively for the lead-capture service and
//! its tests, and to `wasm32-unknown-unknown` for the Leptos landing page.
//! Everything that decides *what* the UI shows lives here as plain data and
//! pure reducers, so it can be tested without a browser.
//!
//! ## Modules
//!
//! - [`release`] - release descriptors and platform classification
//! - [`github`] - repository-host API client (latest release, star count)
//! - [`lead`] - lead payloads, email validation, lead endpoint client
//! - [`modal`] - download modal state machine
//! - [`setup`] - authored setup outline (mac / windows)
//! - [`navigator`] - setup guide navigation state machine
//! - [`gallery`] - per-step image carousel index
//! - [`typewriter`] - hero headline typing animation
//! - [`sanitize`] - HTML sanitization boundary
//! - [`analytics`] - PostHog capture client
//! - [`config`] - build-time site configuration

pub mod analytics;
pub mod config;
pub mod gallery;
pub mod github;
pub mod lead;
pub mod modal;
pub mod navigator;
pub mod release;
pub mod sanitize;
pub mod setup;
pub mod typewriter;

pub use analytics::{Analytics, CaptureEvent};
pub use config::SiteConfig;
pub use github::{FetchError, GithubClient};
pub use lead::{LeadClient, LeadError, LeadRequest};
pub use modal::{ModalAction, ModalEffect, ModalState};
pub use navigator::{NavAction, NavigatorState};
pub use release::{Asset, Platform, PlatformAssets, ReleaseDescriptor, classify};
pub use sanitize::{SafeHtml, sanitize};
pub use setup::{SetupPlatform, SetupSection, SetupStep};

/// Product name sent as `applicationName` with every lead.
pub const APPLICATION_NAME: &str = "Samwise";

/// Repository owner on the repository host.
pub const REPO_OWNER: &str = "chandeldivyam";

/// Repository name on the repository host.
pub const REPO_NAME: &str = "samwise";

/// Public repository page, linked from the hero and the download modal.
pub const REPO_URL: &str = "https://github.com/chandeldivyam/samwise";
