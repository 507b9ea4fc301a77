//! Message-related webhook payloads: upserts, receipts, reactions, calls,
//! polls and status updates.

use serde::{Deserialize, Serialize};

use super::{IncomingMessageKey, MessageContent, MessageKey};

/// Payload of `messages.upsert`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageUpsert {
    pub key: MessageKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageContent>,
    /// Sender display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_name: Option<String>,
    /// Unix timestamp of the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_timestamp: Option<i64>,
}

/// Shared payload of the four `*.received` event families.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedMessage {
    pub key: IncomingMessageKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageContent>,
}

/// Delivery state reported by `messages.update`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Delivered,
    Read,
    Played,
    Error,
    Pending,
}

/// The status portion of a message update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: MessageStatus,
}

/// One entry of a `messages.update` batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageUpdate {
    pub key: MessageKey,
    pub update: StatusUpdate,
}

/// Payload of `messages.delete`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesDelete {
    pub keys: Vec<MessageKey>,
}

/// A reaction to a message. `key` identifies the reacted-to message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    /// Emoji text; empty when the reaction was removed.
    #[serde(default)]
    pub text: String,
    pub key: MessageKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_timestamp_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

/// One entry of a `messages.reaction` batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReaction {
    pub key: MessageKey,
    pub reaction: Reaction,
}

/// Receipt state reported by `message-receipt.update`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Sent,
    Delivered,
    Read,
    Played,
}

/// A delivery/read receipt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub status: ReceiptStatus,
    /// JID of the user the receipt is from (group receipts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_jid: Option<String>,
    /// Unix timestamp of the receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_timestamp: Option<i64>,
}

/// One entry of a `message-receipt.update` batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReceipt {
    pub key: MessageKey,
    pub receipt: Receipt,
}

/// Payload of `message.sent`, confirming a message this session sent out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSent {
    pub key: MessageKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Call information wrapped by `call.received`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallInfo {
    /// Call ID.
    pub id: String,
    /// Caller JID.
    pub from: String,
    /// ISO-8601 date of the call.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default)]
    pub is_video: bool,
    /// Call state as reported by the gateway (e.g. "offer", "timeout").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Payload of `call.received`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallEvent {
    pub call: CallInfo,
}

/// One poll option together with who voted for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub name: String,
    #[serde(default)]
    pub voters: Vec<String>,
}

/// Payload of `poll.results`. `key` identifies the poll message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollResults {
    pub key: MessageKey,
    #[serde(default)]
    pub poll_results: Vec<PollOption>,
}
