use serde_json::Value;

use crate::client::WppClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{ChangeProfileImage, ChangeProfileStatus, ChangeUsername};

impl<T: Transport> WppClient<T> {
    pub fn change_username(&self, name: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::ChangeUsername, &[], &ChangeUsername { name })
    }

    pub fn change_profile_image(&self, path: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::ChangeProfileImage, &[], &ChangeProfileImage { path })
    }

    /// Set the "about" text. Shares its path with the `profile_status`
    /// lookup but is a POST.
    pub fn change_profile_status(&self, status: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::ChangeProfileStatus, &[], &ChangeProfileStatus { status })
    }
}
