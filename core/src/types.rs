//! Request payloads for the WPPConnect routes.
//!
//! # Design
//! One struct per payload shape, shared by every route that sends that
//! shape. Field names follow the server's camelCase JSON. Optional fields
//! are skipped when `None` or empty: the server treats a present-but-null
//! `caption` differently from an absent one, and an empty caption, title or
//! webhook means "not given".
//!
//! Payloads borrow from the caller's arguments; they only live long enough
//! to be serialized.

use serde::{Deserialize, Serialize};

fn is_blank(value: &Option<&str>) -> bool {
    value.unwrap_or_default().is_empty()
}

/// Empty JSON object, the body of every GET and of argument-less POSTs.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Empty {}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSession<'a> {
    #[serde(skip_serializing_if = "is_blank")]
    pub webhook: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_qr_code: Option<bool>,
}

/// `{phone}`: archive, clear, delete, pin, seen, block and friends.
#[derive(Debug, Clone, Serialize)]
pub struct PhoneTarget<'a> {
    pub phone: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRef<'a> {
    pub phone: &'a str,
    pub message_id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendMute<'a> {
    pub phone: &'a str,
    pub time: u32,
    /// Unit of `time`, e.g. `"hours"`.
    #[serde(rename = "type")]
    pub unit: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatState<'a> {
    pub phone: &'a str,
    pub chatstate: &'a str,
}

/// `{phone, value}` toggles such as temporary messages.
#[derive(Debug, Clone, Serialize)]
pub struct PhoneToggle<'a> {
    pub phone: &'a str,
    pub value: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typing<'a> {
    pub phone: &'a str,
    pub value: bool,
    pub is_group: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFileBase64<'a> {
    pub phone: &'a str,
    pub base64: &'a str,
    pub is_group: bool,
    #[serde(skip_serializing_if = "is_blank")]
    pub message: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendImage<'a> {
    pub phone: &'a str,
    pub path: &'a str,
    pub is_group: bool,
    #[serde(skip_serializing_if = "is_blank")]
    pub caption: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendVoice<'a> {
    pub phone: &'a str,
    pub base64_ptt: &'a str,
    pub is_group: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendReply<'a> {
    pub phone: &'a str,
    pub message: &'a str,
    pub message_id: &'a str,
    pub is_group: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessage<'a> {
    pub phone: &'a str,
    pub message: &'a str,
    pub is_group: bool,
}

/// A template button. Serialized untagged: the field set tells the server
/// which kind of button it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Button {
    Reply {
        id: String,
        text: String,
    },
    Url {
        url: String,
        text: String,
    },
    Call {
        #[serde(rename = "phoneNumber")]
        phone_number: String,
        text: String,
    },
}

impl Button {
    pub fn reply(id: impl Into<String>, text: impl Into<String>) -> Self {
        Button::Reply {
            id: id.into(),
            text: text.into(),
        }
    }

    pub fn url(url: impl Into<String>, text: impl Into<String>) -> Self {
        Button::Url {
            url: url.into(),
            text: text.into(),
        }
    }

    pub fn call(phone_number: impl Into<String>, text: impl Into<String>) -> Self {
        Button::Call {
            phone_number: phone_number.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendButtons<'a> {
    pub phone: &'a str,
    pub message: &'a str,
    pub options: ButtonOptions<'a>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonOptions<'a> {
    /// The server reads this flag as the string `"true"`.
    pub use_template_buttons: &'static str,
    pub buttons: &'a [Button],
    #[serde(skip_serializing_if = "is_blank")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "is_blank")]
    pub footer: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactVcard<'a> {
    pub phone: &'a str,
    pub contacts_id: &'a str,
    pub name: &'a str,
    pub is_group: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendLinkPreview<'a> {
    pub phone: &'a str,
    pub url: &'a str,
    pub caption: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendLocation<'a> {
    pub phone: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub title: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMentioned<'a> {
    pub phone: &'a str,
    pub message: &'a str,
    pub mentioned: &'a [&'a str],
    /// Mentions only exist in groups; always `true`.
    pub is_group: bool,
}

/// `{phone, path, isGroup}`: stickers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPath<'a> {
    pub phone: &'a str,
    pub path: &'a str,
    pub is_group: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangeUsername<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangeProfileImage<'a> {
    pub path: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangeProfileStatus<'a> {
    pub status: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateGroup<'a> {
    pub groupname: &'a str,
    pub phone: &'a [&'a str],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinCode<'a> {
    pub invite_code: &'a str,
}

/// The invite-link lookup spells its key in lowercase.
#[derive(Debug, Clone, Serialize)]
pub struct InviteLinkInfo<'a> {
    pub invitecode: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupParticipant<'a> {
    pub group_id: &'a str,
    pub phone: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTarget<'a> {
    pub group_id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDescription<'a> {
    pub group_id: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupProperty<'a> {
    pub group_id: &'a str,
    pub property: &'a str,
    pub value: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSubject<'a> {
    pub group_id: &'a str,
    pub title: &'a str,
}

/// `{groupId, value}` toggles such as admins-only messaging.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupToggle<'a> {
    pub group_id: &'a str,
    pub value: bool,
}
