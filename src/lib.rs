//! Client for the Omniture (Adobe Analytics) Reporting API 1.4.
//!
//! Each call builds one HTTP POST, signs it with the WSSE UsernameToken
//! scheme the API requires, sends it over a pluggable transport, and hands
//! back the raw status code and body text. Parsing the JSON payload stays
//! with the caller; the only interpretation offered is the optional
//! [`ApiResponse::error`] accessor for the API's error payload shape.
//!
//! ## Quick Start
//!
//! ```no_run
//! use omniture_rest::{Client, Config, Context, ReqwestHttpSend, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!
//!     // Unset fields fall back to OMNITURE_USERNAME / OMNITURE_SECRET /
//!     // OMNITURE_ENDPOINT from the environment.
//!     let config = Config {
//!         username: Some("user:Company".to_string()),
//!         secret: Some("shared-secret".to_string()),
//!         endpoint: Some("https://api2.omniture.com".to_string()),
//!     };
//!
//!     let client = Client::new(ctx, config);
//!     let resp = client
//!         .call("Company.GetReportSuites", "search=prod")
//!         .await?;
//!
//!     if let Some(err) = resp.error() {
//!         eprintln!("API error: {}", err.error);
//!     } else {
//!         println!("{} {}", resp.status, resp.body);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior notes
//!
//! - A 4xx/5xx answer is a normal [`ApiResponse`], never an `Err`; the API
//!   reports most failures as a JSON body on an error status.
//! - Calling with username, secret or endpoint unset fails with
//!   [`ErrorKind::ConfigInvalid`] before anything touches the network.
//! - Every request carries a freshly generated nonce and timestamp; see
//!   [`WsseToken`].
//! - No retries, timeouts or pooling policy lives here; configure the
//!   `reqwest::Client` handed to [`ReqwestHttpSend::new`] for that.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, NoopHttpSend, OsEnv, StaticEnv};
mod http;
pub use http::{HttpSend, ReqwestHttpSend};

mod constants;
pub use constants::{OMNITURE_ENDPOINT, OMNITURE_SECRET, OMNITURE_USERNAME};

mod config;
pub use config::Config;
mod credential;
pub use credential::Credential;

mod wsse;
pub use wsse::{password_digest, WsseToken, X_WSSE};

mod client;
pub use client::Client;
mod response;
pub use response::{ApiError, ApiResponse};
