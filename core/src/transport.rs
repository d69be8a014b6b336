//! The I/O seam between `WppClient` and the network.
//!
//! `UreqTransport` performs real blocking round trips. `MockTransport`
//! records every request and answers from a script, for tests and for
//! callers who want to exercise their own code without a server.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP request synchronously.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a shared `ureq::Agent`.
///
/// Non-2xx statuses are returned as data; WPPConnect reports most failures
/// as JSON bodies and the client hands those back undecorated.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a caller-configured agent (proxies, TLS, timeouts).
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut response = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(request.url.as_str());
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                // GET carries the `{}` body as well.
                builder.force_send_body().send(request.body.as_bytes())?
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(request.url.as_str());
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.send(request.body.as_bytes())?
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_vec()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Recording transport with scripted responses.
///
/// Responses queued with [`MockTransport::push_response`] are served first,
/// in order; once the queue is empty every request gets the fallback
/// response.
#[derive(Debug)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    queued: Mutex<VecDeque<HttpResponse>>,
    fallback: HttpResponse,
}

impl MockTransport {
    /// A transport answering every request with `200 {"status":"success"}`.
    pub fn new() -> Self {
        Self::with_fallback(HttpResponse::new(200, r#"{"status":"success"}"#))
    }

    pub fn with_fallback(fallback: HttpResponse) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            queued: Mutex::new(VecDeque::new()),
            fallback,
        }
    }

    pub fn push_response(&self, response: HttpResponse) {
        lock(&self.queued).push_back(response);
    }

    /// Every request executed so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        lock(&self.requests).push(request.clone());
        let response = lock(&self.queued)
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        Ok(response)
    }
}

// Poisoning is ignored: recorded requests stay readable after a panic.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
