//! Message identity keys and message content.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full message key, as attached to messages we already hold (upserts,
/// status updates, receipts, reactions, deletes, poll results).
///
/// Beyond the core identity (id, direction, conversation) the gateway may
/// attach alternate-format sender IDs and display names. All of those are
/// optional and absent more often than not.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageKey {
    /// Message ID.
    pub id: String,
    /// True when the message was sent by this session.
    #[serde(default)]
    pub from_me: bool,
    /// JID of the chat the message belongs to.
    #[serde(default)]
    pub remote_jid: String,
    /// Sender JID within a group chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
    /// Chat JID in the alternate (lid/pn) format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_jid_alt: Option<String>,
    /// Group sender JID in the alternate format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_alt: Option<String>,
    /// Sender's display name, when the gateway knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_name: Option<String>,
    /// Display name of the group participant who sent the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_push_name: Option<String>,
}

/// Narrow key attached to the `*.received` event families.
///
/// Deliberately a separate type from [`MessageKey`]: received events never
/// carry the display-name or alternate-ID extras, and keeping the shapes
/// apart stops consumers from reading fields that cannot be present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingMessageKey {
    /// Message ID.
    pub id: String,
    /// True when the message was sent by this session.
    #[serde(default)]
    pub from_me: bool,
    /// JID of the chat the message belongs to.
    #[serde(default)]
    pub remote_jid: String,
    /// Sender JID within a group chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
}

/// Message content.
///
/// Plain text lives in `conversation`; every other content kind (media,
/// polls, protocol messages) is kept verbatim in `extra` so dispatch never
/// loses fields it does not model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContent {
    /// Plain text body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation: Option<String>,
    /// All remaining content fields, untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl MessageContent {
    /// Text-only content.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            conversation: Some(body.into()),
            extra: serde_json::Map::new(),
        }
    }
}
