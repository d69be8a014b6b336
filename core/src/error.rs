//! Error types for the WPPConnect client.
//!
//! # Design
//! A response body that is not JSON gets its own variant instead of a falsy
//! value, so "the server answered `false`" and "the server answered with an
//! image" stay distinguishable. The raw bytes ride along for callers that
//! asked for a binary route. A non-2xx status with a JSON body is NOT an
//! error here: the decoded body is returned as-is for the caller to judge.

use thiserror::Error;

/// Errors returned by `WppClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP round trip itself failed (DNS, refused connection, timeout).
    #[error("transport failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body could not be decoded as JSON.
    #[error("HTTP {status}: response body is not JSON ({} bytes)", .body.len())]
    NotJson { status: u16, body: Vec<u8> },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A URL template was rendered with the wrong number of path parameters.
    #[error("endpoint `{endpoint}` takes {expected} path parameter(s), got {got}")]
    PathParams {
        endpoint: &'static str,
        expected: usize,
        got: usize,
    },

    /// The token response did not carry a string `token` field.
    #[error("token response has no `token` field")]
    MissingToken,

    /// Client configuration is incomplete.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn transport_error_keeps_its_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ApiError::from(ureq::Error::Io(io));
        assert!(matches!(err, ApiError::Transport(ureq::Error::Io(_))));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("transport failed: "));
    }
}
