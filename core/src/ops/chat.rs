use serde_json::Value;

use crate::client::WppClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{ChatState, Empty, MessageRef, PhoneTarget, PhoneToggle, SendMute, Typing};

impl<T: Transport> WppClient<T> {
    pub fn all_chats(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::AllChats, &[], &Empty {})
    }

    pub fn chat_by_id(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::ChatById, &[phone], &Empty {})
    }

    pub fn chat_is_online(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::ChatIsOnline, &[phone], &Empty {})
    }

    pub fn all_chats_with_messages(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::AllChatsWithMessages, &[], &Empty {})
    }

    pub fn all_messages_in_chat(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::AllMessagesInChat, &[phone], &Empty {})
    }

    pub fn all_new_messages(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::AllNewMessages, &[], &Empty {})
    }

    pub fn unread_messages(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::UnreadMessages, &[], &Empty {})
    }

    pub fn all_unread_messages(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::AllUnreadMessages, &[], &Empty {})
    }

    pub fn last_seen(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::LastSeen, &[phone], &Empty {})
    }

    pub fn list_mutes(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::ListMutes, &[], &Empty {})
    }

    pub fn archive_chat(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::ArchiveChat, &[], &PhoneTarget { phone })
    }

    pub fn clear_chat(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::ClearChat, &[], &PhoneTarget { phone })
    }

    pub fn delete_chat(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::DeleteChat, &[], &PhoneTarget { phone })
    }

    pub fn delete_message(&self, phone: &str, message_id: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::DeleteMessage, &[], &MessageRef { phone, message_id })
    }

    pub fn mark_unseen(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::MarkUnseen, &[], &PhoneTarget { phone })
    }

    pub fn pin_chat(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::PinChat, &[], &PhoneTarget { phone })
    }

    /// Mute a chat for `time` units; `unit` is the server's `type` field
    /// (`"hours"`, `"minutes"`, ...).
    pub fn send_mute(&self, phone: &str, time: u32, unit: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::SendMute, &[], &SendMute { phone, time, unit })
    }

    pub fn chat_state(&self, phone: &str, chatstate: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::ChatState, &[], &ChatState { phone, chatstate })
    }

    pub fn send_seen(&self, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::SendSeen, &[], &PhoneTarget { phone })
    }

    pub fn temporary_messages(&self, phone: &str, value: bool) -> Result<Value, ApiError> {
        self.call(Endpoint::TemporaryMessages, &[], &PhoneToggle { phone, value })
    }

    pub fn typing(&self, phone: &str, value: bool, is_group: bool) -> Result<Value, ApiError> {
        self.call(Endpoint::Typing, &[], &Typing { phone, value, is_group })
    }
}
