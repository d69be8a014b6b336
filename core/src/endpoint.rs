//! Static registry of WPPConnect routes.
//!
//! # Design
//! Every remote operation is a variant of [`Endpoint`], so a client method
//! cannot name a route that does not exist. Each variant carries its registry
//! key, HTTP verb and URL template. Templates use a single placeholder rule:
//! every `{}` slot is filled left to right from the call's path parameters.

use crate::error::ApiError;
use crate::http::HttpMethod;

macro_rules! endpoints {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, $method:ident, $template:literal; )*) => {
        /// A WPPConnect operation and its route.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Endpoint {
            $( $(#[$doc])* $variant, )*
        }

        impl Endpoint {
            /// Every registered endpoint, in catalogue order.
            pub const ALL: &'static [Endpoint] = &[ $( Endpoint::$variant, )* ];

            /// Registry key, e.g. `"send-image"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Endpoint::$variant => $name, )*
                }
            }

            pub const fn method(self) -> HttpMethod {
                match self {
                    $( Endpoint::$variant => HttpMethod::$method, )*
                }
            }

            /// URL template relative to the session prefix.
            pub const fn template(self) -> &'static str {
                match self {
                    $( Endpoint::$variant => $template, )*
                }
            }
        }
    };
}

endpoints! {
    // Auth
    /// Rendered with `(session, secret_key)` directly under the base URL.
    GenerateToken => "generate-token", Post, "{}/{}/generate-token";
    StartSession => "start-session", Post, "start-session";
    StatusSession => "status-session", Get, "status-session";
    QrcodeSession => "qrcode-session", Get, "qrcode-session";
    CheckConnectionSession => "check-connection-session", Get, "check-connection-session";
    CloseSession => "close-session", Post, "close-session";
    LogoutSession => "logout-session", Post, "logout-session";

    // Chat
    AllChats => "all-chats", Get, "all-chats";
    ChatById => "chat-by-id", Get, "chat-by-id/{}";
    ChatIsOnline => "chat-is-online", Get, "chat-is-online/{}";
    AllChatsWithMessages => "all-chats-with-messages", Get, "all-chats-with-messages";
    AllMessagesInChat => "all-messages-in-chat", Get, "all-messages-in-chat/{}";
    AllNewMessages => "all-new-messages", Get, "all-new-messages";
    UnreadMessages => "unread-messages", Get, "unread-messages";
    AllUnreadMessages => "all-unread-messages", Get, "all-unread-messages";
    LastSeen => "last-seen", Get, "last-seen/{}";
    ListMutes => "list-mutes", Get, "list-mutes";
    ArchiveChat => "archive-chat", Post, "archive-chat";
    ClearChat => "clear-chat", Post, "clear-chat";
    DeleteChat => "delete-chat", Post, "delete-chat";
    DeleteMessage => "delete-message", Post, "delete-message";
    MarkUnseen => "mark-unseen", Post, "mark-unseen";
    PinChat => "pin-chat", Post, "pin-chat";
    SendMute => "send-mute", Post, "send-mute";
    ChatState => "chat-state", Post, "chat-state";
    SendSeen => "send-seen", Post, "send-seen";
    TemporaryMessages => "temporary-messages", Post, "temporary-messages";
    Typing => "typing", Post, "typing";

    // Send message
    SendFileBase64 => "send-file-base64", Post, "send-file-base64";
    SendImage => "send-image", Post, "send-image";
    SendVoiceBase64 => "send-voice-base64", Post, "send-voice-base64";
    SendReply => "send-reply", Post, "send-reply";
    SendMessage => "send-message", Post, "send-message";
    /// Button messages share the plain send-message route.
    SendButtons => "send-buttons", Post, "send-message";
    ForwardMessages => "forward-messages", Post, "forward-messages";
    ContactVcard => "contact-vcard", Post, "contact-vcard";
    SendLinkPreview => "send-link-preview", Post, "send-link-preview";
    SendLocation => "send-location", Post, "send-location";
    SendMentioned => "send-mentioned", Post, "send-mentioned";
    SendSticker => "send-sticker", Post, "send-sticker";
    SendStickerGif => "send-sticker-gif", Post, "send-sticker-gif";

    // Profile
    ChangeUsername => "change-username", Post, "change-username";
    ChangeProfileImage => "change-profile-image", Post, "change-profile-image";
    ChangeProfileStatus => "change-profile-status", Post, "profile-status";

    // Contact
    CheckNumberStatus => "check-number-status", Get, "check-number-status/{}";
    AllContacts => "all-contacts", Get, "all-contacts";
    Contact => "contact", Get, "contact/{}";
    Profile => "profile", Get, "profile/{}";
    ProfilePic => "profile-pic", Get, "profile-pic/{}";
    ProfileStatus => "profile-status", Get, "profile-status/{}";

    // Group
    CreateGroup => "create-group", Post, "create-group";
    JoinCode => "join-code", Post, "join-code";
    AddParticipantGroup => "add-participant-group", Post, "add-participant-group";
    DemoteParticipantGroup => "demote-participant-group", Post, "demote-participant-group";
    PromoteParticipantGroup => "promote-participant-group", Post, "promote-participant-group";
    AllBroadcastList => "all-broadcast-list", Get, "all-broadcast-list";
    AllGroups => "all-groups", Get, "all-groups";
    GroupAdmins => "group-admins", Get, "group-admins/{}";
    GroupInfoFromInviteLink => "group-info-from-invite-link", Post, "group-info-from-invite-link";
    GroupInviteLink => "group-invite-link", Get, "group-invite-link/{}";
    GroupMembersIds => "group-members-ids", Get, "group-members-ids/{}";
    GroupMembers => "group-members", Get, "group-members/{}";
    LeaveGroup => "leave-group", Post, "leave-group";
    RemoveParticipantGroup => "remove-participant-group", Post, "remove-participant-group";
    GroupDescription => "group-description", Post, "group-description";
    GroupProperty => "group-property", Post, "group-property";
    GroupSubject => "group-subject", Post, "group-subject";
    MessagesAdminsOnly => "messages-admins-only", Post, "messages-admins-only";

    // Device
    GetBatteryLevel => "get-battery-level", Get, "get-battery-level";

    // Block list
    BlockContact => "block-contact", Post, "block-contact";
    UnblockContact => "unblock-contact", Post, "unblock-contact";
    Blocklist => "blocklist", Get, "blocklist";
}

const SLOT: &str = "{}";

impl Endpoint {
    /// Reverse lookup by registry key.
    pub fn from_name(name: &str) -> Option<Endpoint> {
        Endpoint::ALL.iter().copied().find(|e| e.name() == name)
    }

    /// Number of `{}` slots in the template.
    pub fn path_param_count(self) -> usize {
        self.template().matches(SLOT).count()
    }

    /// Fill the template's slots left to right.
    ///
    /// Parameters are inserted verbatim; WPPConnect ids such as
    /// `123-456@g.us` are valid path text.
    pub fn render(self, params: &[&str]) -> Result<String, ApiError> {
        let expected = self.path_param_count();
        if params.len() != expected {
            return Err(ApiError::PathParams {
                endpoint: self.name(),
                expected,
                got: params.len(),
            });
        }

        let mut out = String::with_capacity(self.template().len());
        let mut pieces = self.template().split(SLOT);
        if let Some(head) = pieces.next() {
            out.push_str(head);
        }
        for (piece, param) in pieces.zip(params) {
            out.push_str(param);
            out.push_str(piece);
        }
        Ok(out)
    }
}
