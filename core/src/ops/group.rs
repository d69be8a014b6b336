use serde_json::Value;

use crate::client::WppClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    CreateGroup, Empty, GroupDescription, GroupParticipant, GroupProperty, GroupSubject, GroupTarget, GroupToggle,
    InviteLinkInfo, JoinCode,
};

impl<T: Transport> WppClient<T> {
    /// Create a group named `name` with the given participant phones.
    pub fn create_group(&self, name: &str, participants: &[&str]) -> Result<Value, ApiError> {
        let payload = CreateGroup {
            groupname: name,
            phone: participants,
        };
        self.call(Endpoint::CreateGroup, &[], &payload)
    }

    pub fn join_code(&self, invite_code: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::JoinCode, &[], &JoinCode { invite_code })
    }

    pub fn add_participant_group(&self, group_id: &str, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::AddParticipantGroup, &[], &GroupParticipant { group_id, phone })
    }

    pub fn remove_participant_group(&self, group_id: &str, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::RemoveParticipantGroup, &[], &GroupParticipant { group_id, phone })
    }

    pub fn promote_participant_group(&self, group_id: &str, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::PromoteParticipantGroup, &[], &GroupParticipant { group_id, phone })
    }

    pub fn demote_participant_group(&self, group_id: &str, phone: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::DemoteParticipantGroup, &[], &GroupParticipant { group_id, phone })
    }

    pub fn all_broadcast_list(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::AllBroadcastList, &[], &Empty {})
    }

    pub fn all_groups(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::AllGroups, &[], &Empty {})
    }

    pub fn group_admins(&self, group_id: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::GroupAdmins, &[group_id], &Empty {})
    }

    pub fn group_info_from_invite_link(&self, invite_code: &str) -> Result<Value, ApiError> {
        self.call(
            Endpoint::GroupInfoFromInviteLink,
            &[],
            &InviteLinkInfo { invitecode: invite_code },
        )
    }

    pub fn group_invite_link(&self, group_id: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::GroupInviteLink, &[group_id], &Empty {})
    }

    pub fn group_members_ids(&self, group_id: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::GroupMembersIds, &[group_id], &Empty {})
    }

    pub fn group_members(&self, group_id: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::GroupMembers, &[group_id], &Empty {})
    }

    pub fn leave_group(&self, group_id: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::LeaveGroup, &[], &GroupTarget { group_id })
    }

    pub fn group_description(&self, group_id: &str, description: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::GroupDescription, &[], &GroupDescription { group_id, description })
    }

    /// Toggle a group property such as `"restrict"` or `"announcement"`.
    pub fn group_property(&self, group_id: &str, property: &str, value: bool) -> Result<Value, ApiError> {
        let payload = GroupProperty {
            group_id,
            property,
            value,
        };
        self.call(Endpoint::GroupProperty, &[], &payload)
    }

    pub fn group_subject(&self, group_id: &str, title: &str) -> Result<Value, ApiError> {
        self.call(Endpoint::GroupSubject, &[], &GroupSubject { group_id, title })
    }

    pub fn messages_admins_only(&self, group_id: &str, value: bool) -> Result<Value, ApiError> {
        self.call(Endpoint::MessagesAdminsOnly, &[], &GroupToggle { group_id, value })
    }
}
