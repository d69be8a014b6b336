//! Request builder, executor and response parser for the WPPConnect API.
//!
//! # Design
//! `WppClient` holds the connection parameters and an optional bearer token.
//! Every operation goes through the same three steps:
//! `build_request` resolves the route and serializes the payload,
//! the `Transport` performs the round trip, and `parse_response` decodes
//! the body. The steps are public so callers that run their own I/O can use
//! the first and last without the middle one.
//!
//! Headers are assembled per request from `Content-Type` plus the current
//! token. Changing the token needs `&mut self`, so sharing one client across
//! threads while swapping tokens is a compile error rather than a race.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::Empty;

/// Synchronous client for one WPPConnect session.
#[derive(Clone)]
pub struct WppClient<T = UreqTransport> {
    base_url: String,
    secret_key: String,
    session: String,
    token: Option<String>,
    transport: T,
}

impl WppClient<UreqTransport> {
    /// `base_url` includes the API prefix, e.g. `http://localhost:21465/api`.
    pub fn new(base_url: &str, secret_key: &str, session: &str) -> Self {
        Self::with_transport(base_url, secret_key, session, UreqTransport::new())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url, &config.secret_key, &config.session)
    }
}

impl<T: Transport> WppClient<T> {
    pub fn with_transport(base_url: &str, secret_key: &str, session: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key: secret_key.to_string(),
            session: session.to_string(),
            token: None,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Attach `Authorization: Bearer {token}` to every later request,
    /// replacing any previous token.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Request a bearer token for this session.
    ///
    /// The only route that embeds the secret key: the URL is
    /// `{base_url}/{session}/{secret_key}/generate-token`. Sent without an
    /// `Authorization` header.
    pub fn generate_token(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::GenerateToken, &[], &Empty {})
    }

    /// `generate_token` followed by `set_token` with the returned `token`.
    ///
    /// Returns the full token response.
    pub fn authenticate(&mut self) -> Result<Value, ApiError> {
        let response = self.generate_token()?;
        let token = response
            .get("token")
            .and_then(Value::as_str)
            .ok_or(ApiError::MissingToken)?;
        self.token = Some(token.to_string());
        debug!(session = %self.session, "stored bearer token");
        Ok(response)
    }

    /// Resolve the URL, headers and JSON body for `endpoint`.
    ///
    /// `params` fill the route's path slots left to right. `GenerateToken`
    /// takes none; its slots come from the session and secret key.
    pub fn build_request<P>(&self, endpoint: Endpoint, params: &[&str], payload: &P) -> Result<HttpRequest, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let url = match endpoint {
            Endpoint::GenerateToken => {
                if !params.is_empty() {
                    return Err(ApiError::PathParams {
                        endpoint: endpoint.name(),
                        expected: 0,
                        got: params.len(),
                    });
                }
                let path = endpoint.render(&[self.session.as_str(), self.secret_key.as_str()])?;
                format!("{}/{path}", self.base_url)
            }
            _ => format!("{}/{}/{}", self.base_url, self.session, endpoint.render(params)?),
        };

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.token.as_deref().filter(|_| endpoint != Endpoint::GenerateToken) {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        Ok(HttpRequest {
            method: endpoint.method(),
            url,
            headers,
            body: serde_json::to_string(payload)?,
        })
    }

    /// Decode a response body as JSON.
    ///
    /// Any JSON document is returned as-is, whatever the status. A body
    /// that is not JSON is logged and surfaces as `ApiError::NotJson`
    /// carrying the raw bytes.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, ApiError> {
        match serde_json::from_slice(&response.body) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(
                    status = response.status,
                    error = %e,
                    bytes = response.body.len(),
                    body = %body_preview(&response.body),
                    "response body is not JSON"
                );
                Err(ApiError::NotJson {
                    status: response.status,
                    body: response.body,
                })
            }
        }
    }

    /// Build, execute and parse one operation.
    pub fn call<P>(&self, endpoint: Endpoint, params: &[&str], payload: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let request = self.build_request(endpoint, params, payload)?;
        if endpoint == Endpoint::GenerateToken {
            debug!(endpoint = endpoint.name(), method = %request.method, session = %self.session, "sending request");
        } else {
            debug!(endpoint = endpoint.name(), method = %request.method, url = %request.url, "sending request");
        }

        let response = self.transport.execute(&request)?;
        debug!(endpoint = endpoint.name(), status = response.status, bytes = response.body.len(), "received response");
        self.parse_response(response)
    }
}

const LOGGED_BODY_CHARS: usize = 200;

/// Text of a rejected body for the log line: a prefix when it is UTF-8,
/// a placeholder when it is binary (QR codes, profile pictures).
fn body_preview(body: &[u8]) -> String {
    match std::str::from_utf8(body) {
        Ok(text) => text.chars().take(LOGGED_BODY_CHARS).collect(),
        Err(_) => format!("<{} bytes, not UTF-8>", body.len()),
    }
}

impl<T> std::fmt::Debug for WppClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WppClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}
