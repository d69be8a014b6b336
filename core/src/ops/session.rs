use serde_json::Value;

use crate::client::WppClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{Empty, StartSession};

impl<T: Transport> WppClient<T> {
    /// Start (or resume) the session. The response carries the session
    /// status and, while pairing, a QR code.
    pub fn start_session(&self, webhook: Option<&str>, wait_qr_code: Option<bool>) -> Result<Value, ApiError> {
        self.call(Endpoint::StartSession, &[], &StartSession { webhook, wait_qr_code })
    }

    pub fn status_session(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::StatusSession, &[], &Empty {})
    }

    /// The server streams a PNG here; expect `ApiError::NotJson` with the
    /// image in `body`.
    pub fn qrcode_session(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::QrcodeSession, &[], &Empty {})
    }

    pub fn check_connection_session(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::CheckConnectionSession, &[], &Empty {})
    }

    pub fn close_session(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::CloseSession, &[], &Empty {})
    }

    /// Close the session and unpair the device.
    pub fn logout_session(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::LogoutSession, &[], &Empty {})
    }

    pub fn get_battery_level(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::GetBatteryLevel, &[], &Empty {})
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpResponse};
    use crate::ops::test_support::{client, last, last_body, url};

    #[test]
    fn start_session_without_webhook_sends_empty_object() {
        let client = client();
        client.start_session(None, None).unwrap();
        let req = last(&client);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, url("start-session"));
        assert_eq!(last_body(&client), json!({}));
    }

    #[test]
    fn start_session_with_empty_webhook_omits_it() {
        let client = client();
        client.start_session(Some(""), None).unwrap();
        assert_eq!(last_body(&client), json!({}));
    }

    #[test]
    fn start_session_with_webhook() {
        let client = client();
        client.start_session(Some("http://hook/x"), Some(true)).unwrap();
        assert_eq!(
            last_body(&client),
            json!({"webhook": "http://hook/x", "waitQrCode": true})
        );
    }

    #[test]
    fn qrcode_image_surfaces_raw_bytes() {
        let client = client();
        let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a];
        client.transport().push_response(HttpResponse::new(200, png.clone()));
        match client.qrcode_session().unwrap_err() {
            ApiError::NotJson { body, .. } => assert_eq!(body, png),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(last(&client).method, HttpMethod::Get);
    }

    #[test]
    fn session_lifecycle_routes() {
        let client = client();
        client.status_session().unwrap();
        client.check_connection_session().unwrap();
        client.close_session().unwrap();
        client.logout_session().unwrap();
        client.get_battery_level().unwrap();

        let seen: Vec<_> = client
            .transport()
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url))
            .collect();
        assert_eq!(
            seen,
            vec![
                (HttpMethod::Get, url("status-session")),
                (HttpMethod::Get, url("check-connection-session")),
                (HttpMethod::Post, url("close-session")),
                (HttpMethod::Post, url("logout-session")),
                (HttpMethod::Get, url("get-battery-level")),
            ]
        );
    }
}
