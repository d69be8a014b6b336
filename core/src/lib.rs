//! Synchronous client for the WPPConnect messaging server.
//!
//! # Overview
//! `WppClient` exposes one method per WPPConnect route (session lifecycle,
//! chats, messages, profile, contacts, groups). Each call resolves its route
//! from the static [`Endpoint`] registry, serializes a typed payload, runs
//! one blocking HTTP round trip and returns the decoded JSON body.
//!
//! # Design
//! - Routes are enum variants, so every method names a real entry.
//! - Requests and responses are plain data (`HttpRequest`, `HttpResponse`);
//!   the network sits behind the [`Transport`] trait. `UreqTransport` is the
//!   default, `MockTransport` records requests for tests.
//! - Response shapes are not validated. A JSON error body comes back as a
//!   value; only a non-JSON body is an error (`ApiError::NotJson`).
//!
//! ```no_run
//! use wppconnect_client::WppClient;
//!
//! let mut client = WppClient::new("http://localhost:21465/api", "THISISMYSECURETOKEN", "mysession");
//! client.authenticate()?;
//! client.start_session(None, None)?;
//! client.send_message("5511999999999", "hello", false)?;
//! # Ok::<(), wppconnect_client::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
mod ops;
pub mod transport;
pub mod types;

pub use client::WppClient;
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{MockTransport, Transport, UreqTransport};
pub use types::Button;
