//! Connection parameters for a WPPConnect session.

use serde::Deserialize;

use crate::error::ApiError;

pub const ENV_API_URL: &str = "WPPCONNECT_API_URL";
pub const ENV_SECRET_KEY: &str = "WPPCONNECT_SECRET_KEY";
pub const ENV_SESSION: &str = "WPPCONNECT_SESSION";

/// Where the server lives and which session to drive.
///
/// `base_url` includes the API prefix, e.g. `http://localhost:21465/api`.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub secret_key: String,
    pub session: String,
}

impl ClientConfig {
    pub fn new(base_url: &str, secret_key: &str, session: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            secret_key: secret_key.to_string(),
            session: session.to_string(),
        }
    }

    /// Read `WPPCONNECT_API_URL`, `WPPCONNECT_SECRET_KEY` and
    /// `WPPCONNECT_SESSION`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let get = |key: &str| lookup(key).ok_or_else(|| ApiError::Config(format!("{key} is not set")));
        Ok(Self {
            base_url: get(ENV_API_URL)?,
            secret_key: get(ENV_SECRET_KEY)?,
            session: get(ENV_SESSION)?,
        })
    }
}

// Hand-written so the secret key never reaches a log line.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("secret_key", &"<redacted>")
            .field("session", &self.session)
            .finish()
    }
}
