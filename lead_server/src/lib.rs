//! # samwise-leads
//!
//! Lead-capture service for the Samwise site.
//!
//! `POST /api/loops` takes `{email, downloadUrl, applicationName}`, creates or
//! updates the contact in Loops and sends an `application_download` event.
//! The same process can serve the built landing page so the site and its API
//! share an origin.
//!
//! ## Usage as Library
//!
//! ```rust,no_run
//! use samwise_leads::{LeadServer, LoopsClient, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::new("127.0.0.1:3000", "loops-api-key");
//!     let loops = LoopsClient::new(&config.loops_base_url, &config.loops_api_key, config.upstream_timeout)?;
//!     LeadServer::bind(&config, loops)?.run().await
//! }
//! ```
//!
//! ## Responses
//!
//! | Case | Status | `message` |
//! |------|--------|-----------|
//! | not POST | 405 | `Method Not Allowed` |
//! | field missing or blank | 400 | `Missing required fields` |
//! | Loops failure | 500 | `An error occurred while processing your request` |
//! | recorded | 200 | `Success` |

pub mod config;
pub mod handler;
pub mod loops;
pub mod server;

pub use config::ServerConfig;
pub use handler::{ApiReply, handle_lead};
pub use loops::{LeadSink, LoopsClient, LoopsError};
pub use server::{LeadServer, ShutdownHandle};
