use serde_json::Value;

use crate::client::WppClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{Empty, PhoneTarget};

impl<T: Transport> WppClient<T> {
    pub fn check_number_status(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::CheckNumberStatus, &[phone], &Empty {})
    }

    pub fn all_contacts(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::AllContacts, &[], &Empty {})
    }

    pub fn contact(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::Contact, &[phone], &Empty {})
    }

    pub fn profile(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::Profile, &[phone], &Empty {})
    }

    /// Servers configured to stream the picture answer with image bytes,
    /// which come back as `ApiError::NotJson`.
    pub fn profile_pic(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::ProfilePic, &[phone], &Empty {})
    }

    pub fn profile_status(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::ProfileStatus, &[phone], &Empty {})
    }

    pub fn block_contact(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::BlockContact, &[], &PhoneTarget { phone })
    }

    pub fn unblock_contact(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::UnblockContact, &[], &PhoneTarget { phone })
    }

    pub fn blocklist(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::Blocklist, &[], &Empty {})
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::HttpMethod;
    use crate::ops::test_support::{client, last, last_body, url};

    const PHONE: &str = "5511999999999";

    #[test]
    fn lookups_put_phone_in_path() {
        let client = client();
        client.check_number_status(PHONE).unwrap();
        client.contact(PHONE).unwrap();
        client.profile(PHONE).unwrap();
        client.profile_pic(PHONE).unwrap();
        client.profile_status(PHONE).unwrap();

        let requests = client.transport().requests();
        assert!(requests.iter().all(|r| r.method == HttpMethod::Get));
        let urls: Vec<_> = requests.into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                url("check-number-status/5511999999999"),
                url("contact/5511999999999"),
                url("profile/5511999999999"),
                url("profile-pic/5511999999999"),
                url("profile-status/5511999999999"),
            ]
        );
    }

    #[test]
    fn block_list_management() {
        let client = client();
        client.block_contact(PHONE).unwrap();
        assert_eq!(last(&client).url, url("block-contact"));
        assert_eq!(last_body(&client), json!({"phone": PHONE}));

        client.unblock_contact(PHONE).unwrap();
        assert_eq!(last(&client).url, url("unblock-contact"));

        client.blocklist().unwrap();
        let req = last(&client);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, url("blocklist"));

        client.all_contacts().unwrap();
        assert_eq!(last(&client).url, url("all-contacts"));
    }
}
