//! One method per WPPConnect operation, grouped like the server's routes.
//!
//! Each method maps its arguments to an endpoint, path parameters and a
//! payload, then defers to `WppClient::call`. None of them validates its
//! input; the server is the judge of phone formats and file paths.

mod chat;
mod contact;
mod group;
mod message;
mod profile;
mod session;

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::Value;

    use crate::client::WppClient;
    use crate::http::HttpRequest;
    use crate::transport::MockTransport;

    pub const BASE_URL: &str = "http://localhost:21465/api";

    pub fn client() -> WppClient<MockTransport> {
        WppClient::with_transport(BASE_URL, "THISISMYSECURETOKEN", "mysession", MockTransport::new())
    }

    pub fn last(client: &WppClient<MockTransport>) -> HttpRequest {
        client.transport().last_request().expect("no request recorded")
    }

    pub fn last_body(client: &WppClient<MockTransport>) -> Value {
        serde_json::from_str(&last(client).body).expect("request body is JSON")
    }

    pub fn url(route: &str) -> String {
        format!("{BASE_URL}/mysession/{route}")
    }
}
