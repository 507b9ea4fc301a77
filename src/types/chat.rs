//! Chat and contact entries.

use serde::{Deserialize, Serialize};

/// A chat entry, as delivered by `chats.upsert` and returned by the chat
/// listing endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Chat JID.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_count: Option<i64>,
    /// Unix timestamp of the latest message in the chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    /// Unix timestamp until which the chat is muted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute_end_time: Option<i64>,
}

/// Partial chat entry carried by `chats.update`. Every field, including the
/// JID, may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute_end_time: Option<i64>,
}

/// A contact entry. Used both by the `contacts.*` webhook families (where
/// updates deliver only the changed fields) and by the contact endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Contact JID.
    pub id: String,
    /// Name from the local address book.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name the contact set for themselves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<String>,
    /// Business-verified name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_name: Option<String>,
    /// Profile picture URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    /// Status / about text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
