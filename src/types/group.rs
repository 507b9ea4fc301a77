//! Group metadata and participant changes.

use serde::{Deserialize, Serialize};

/// Admin rank of a group participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupRole {
    Admin,
    Superadmin,
}

/// A group member.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupParticipant {
    /// Member JID.
    pub id: String,
    /// Admin rank; absent for regular members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<GroupRole>,
}

/// Group metadata, as delivered by `groups.upsert`/`groups.update` and the
/// group endpoints. Update events carry only the changed fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMetadata {
    /// Group JID.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// JID of the group creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Unix timestamp of group creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Only admins may send messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announce: Option<bool>,
    /// Only admins may edit group info.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<GroupParticipant>,
}

/// Membership change applied by a `group-participants.update` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantAction {
    Add,
    Remove,
    Promote,
    Demote,
}

/// Participant reference in a membership change. The gateway sends either
/// bare JID strings or full participant objects depending on version.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParticipantRef {
    Jid(String),
    Entry(GroupParticipant),
}

impl ParticipantRef {
    /// The participant JID regardless of representation.
    pub fn jid(&self) -> &str {
        match self {
            Self::Jid(s) => s,
            Self::Entry(p) => &p.id,
        }
    }
}

/// Payload of `group-participants.update`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupParticipantsUpdate {
    /// Group JID.
    pub id: String,
    pub participants: Vec<ParticipantRef>,
    pub action: ParticipantAction,
}
