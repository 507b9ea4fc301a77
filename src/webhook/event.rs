//! Webhook event taxonomy: the known event-name literals and the typed
//! payload each one carries.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{
    CallEvent, Chat, ChatUpdate, Contact, GroupMetadata, GroupParticipantsUpdate, MessageReaction,
    MessageReceipt, MessageSent, MessageUpdate, MessageUpsert, MessagesDelete, PollResults,
    QrCodeUpdated, ReceivedMessage, SessionStatusEvent,
};

/// Event-name literals the gateway is known to deliver.
pub mod kinds {
    pub const CHATS_UPSERT: &str = "chats.upsert";
    pub const CHATS_UPDATE: &str = "chats.update";
    pub const CHATS_DELETE: &str = "chats.delete";
    pub const GROUPS_UPSERT: &str = "groups.upsert";
    pub const GROUPS_UPDATE: &str = "groups.update";
    pub const GROUP_PARTICIPANTS_UPDATE: &str = "group-participants.update";
    pub const CONTACTS_UPSERT: &str = "contacts.upsert";
    pub const CONTACTS_UPDATE: &str = "contacts.update";
    pub const MESSAGES_UPSERT: &str = "messages.upsert";
    pub const MESSAGES_RECEIVED: &str = "messages.received";
    pub const MESSAGES_PERSONAL_RECEIVED: &str = "messages-personal.received";
    pub const MESSAGES_GROUP_RECEIVED: &str = "messages-group.received";
    pub const MESSAGES_NEWSLETTER_RECEIVED: &str = "messages-newsletter.received";
    pub const CALL_RECEIVED: &str = "call.received";
    pub const POLL_RESULTS: &str = "poll.results";
    pub const MESSAGES_UPDATE: &str = "messages.update";
    pub const MESSAGES_DELETE: &str = "messages.delete";
    pub const MESSAGES_REACTION: &str = "messages.reaction";
    pub const MESSAGE_RECEIPT_UPDATE: &str = "message-receipt.update";
    pub const MESSAGE_SENT: &str = "message.sent";
    pub const SESSION_STATUS: &str = "session.status";
    pub const QRCODE_UPDATED: &str = "qrcode.updated";

    /// Sentinel kind for deliveries with no usable event name.
    pub const UNKNOWN: &str = "unknown";
}

/// Which `*.received` family delivered a message. The four families share
/// one payload shape and differ only in this discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReceivedScope {
    Generic,
    Personal,
    Group,
    Newsletter,
}

impl ReceivedScope {
    /// The event-name literal for this scope.
    pub fn kind(self) -> &'static str {
        match self {
            Self::Generic => kinds::MESSAGES_RECEIVED,
            Self::Personal => kinds::MESSAGES_PERSONAL_RECEIVED,
            Self::Group => kinds::MESSAGES_GROUP_RECEIVED,
            Self::Newsletter => kinds::MESSAGES_NEWSLETTER_RECEIVED,
        }
    }
}

/// Typed payload of a webhook event. Consumers pattern-match on this.
///
/// `Unknown` is the fallback for unrecognized or malformed deliveries; it
/// keeps the original event name, the `data` field and the complete raw
/// payload, so nothing is dropped.
#[derive(Clone, Debug, PartialEq)]
pub enum EventPayload {
    ChatsUpsert(Vec<Chat>),
    ChatsUpdate(Vec<ChatUpdate>),
    /// JIDs of the deleted chats.
    ChatsDelete(Vec<String>),
    GroupsUpsert(Vec<GroupMetadata>),
    GroupsUpdate(Vec<GroupMetadata>),
    GroupParticipantsUpdate(GroupParticipantsUpdate),
    ContactsUpsert(Vec<Contact>),
    ContactsUpdate(Vec<Contact>),
    MessagesUpsert(MessageUpsert),
    MessageReceived {
        scope: ReceivedScope,
        message: ReceivedMessage,
    },
    CallReceived(CallEvent),
    PollResults(PollResults),
    MessagesUpdate(Vec<MessageUpdate>),
    MessagesDelete(MessagesDelete),
    MessagesReaction(Vec<MessageReaction>),
    MessageReceiptUpdate(Vec<MessageReceipt>),
    MessageSent(MessageSent),
    SessionStatus(SessionStatusEvent),
    QrCodeUpdated(QrCodeUpdated),
    Unknown {
        /// Original event name, or [`kinds::UNKNOWN`] when none was present.
        event: String,
        /// The delivery's `data` field, or the whole payload when malformed.
        data: Value,
        /// Complete raw delivery, kept for forensic inspection.
        raw: Value,
    },
}

impl EventPayload {
    /// The event-name literal this payload corresponds to. For `Unknown`
    /// this is the original name, verbatim.
    pub fn kind(&self) -> &str {
        match self {
            Self::ChatsUpsert(_) => kinds::CHATS_UPSERT,
            Self::ChatsUpdate(_) => kinds::CHATS_UPDATE,
            Self::ChatsDelete(_) => kinds::CHATS_DELETE,
            Self::GroupsUpsert(_) => kinds::GROUPS_UPSERT,
            Self::GroupsUpdate(_) => kinds::GROUPS_UPDATE,
            Self::GroupParticipantsUpdate(_) => kinds::GROUP_PARTICIPANTS_UPDATE,
            Self::ContactsUpsert(_) => kinds::CONTACTS_UPSERT,
            Self::ContactsUpdate(_) => kinds::CONTACTS_UPDATE,
            Self::MessagesUpsert(_) => kinds::MESSAGES_UPSERT,
            Self::MessageReceived { scope, .. } => scope.kind(),
            Self::CallReceived(_) => kinds::CALL_RECEIVED,
            Self::PollResults(_) => kinds::POLL_RESULTS,
            Self::MessagesUpdate(_) => kinds::MESSAGES_UPDATE,
            Self::MessagesDelete(_) => kinds::MESSAGES_DELETE,
            Self::MessagesReaction(_) => kinds::MESSAGES_REACTION,
            Self::MessageReceiptUpdate(_) => kinds::MESSAGE_RECEIPT_UPDATE,
            Self::MessageSent(_) => kinds::MESSAGE_SENT,
            Self::SessionStatus(_) => kinds::SESSION_STATUS,
            Self::QrCodeUpdated(_) => kinds::QRCODE_UPDATED,
            Self::Unknown { event, .. } => event,
        }
    }
}

/// Builds the typed payload for one known event name, or `None` when the
/// `data` field does not have the registered shape.
type Builder = fn(Value) -> Option<EventPayload>;

fn decode<T: DeserializeOwned>(data: Value) -> Option<T> {
    serde_json::from_value(data).ok()
}

/// Registry of known event names. Adding an event is one row here plus one
/// [`EventPayload`] variant.
pub(crate) static REGISTRY: &[(&str, Builder)] = &[
    (kinds::CHATS_UPSERT, |d| {
        Some(EventPayload::ChatsUpsert(decode(d)?))
    }),
    (kinds::CHATS_UPDATE, |d| {
        Some(EventPayload::ChatsUpdate(decode(d)?))
    }),
    (kinds::CHATS_DELETE, |d| {
        Some(EventPayload::ChatsDelete(decode(d)?))
    }),
    (kinds::GROUPS_UPSERT, |d| {
        Some(EventPayload::GroupsUpsert(decode(d)?))
    }),
    (kinds::GROUPS_UPDATE, |d| {
        Some(EventPayload::GroupsUpdate(decode(d)?))
    }),
    (kinds::GROUP_PARTICIPANTS_UPDATE, |d| {
        Some(EventPayload::GroupParticipantsUpdate(decode(d)?))
    }),
    (kinds::CONTACTS_UPSERT, |d| {
        Some(EventPayload::ContactsUpsert(decode(d)?))
    }),
    (kinds::CONTACTS_UPDATE, |d| {
        Some(EventPayload::ContactsUpdate(decode(d)?))
    }),
    (kinds::MESSAGES_UPSERT, |d| {
        Some(EventPayload::MessagesUpsert(decode(d)?))
    }),
    (kinds::MESSAGES_RECEIVED, |d| {
        Some(EventPayload::MessageReceived {
            scope: ReceivedScope::Generic,
            message: decode(d)?,
        })
    }),
    (kinds::MESSAGES_PERSONAL_RECEIVED, |d| {
        Some(EventPayload::MessageReceived {
            scope: ReceivedScope::Personal,
            message: decode(d)?,
        })
    }),
    (kinds::MESSAGES_GROUP_RECEIVED, |d| {
        Some(EventPayload::MessageReceived {
            scope: ReceivedScope::Group,
            message: decode(d)?,
        })
    }),
    (kinds::MESSAGES_NEWSLETTER_RECEIVED, |d| {
        Some(EventPayload::MessageReceived {
            scope: ReceivedScope::Newsletter,
            message: decode(d)?,
        })
    }),
    (kinds::CALL_RECEIVED, |d| {
        Some(EventPayload::CallReceived(decode(d)?))
    }),
    (kinds::POLL_RESULTS, |d| {
        Some(EventPayload::PollResults(decode(d)?))
    }),
    (kinds::MESSAGES_UPDATE, |d| {
        Some(EventPayload::MessagesUpdate(decode(d)?))
    }),
    (kinds::MESSAGES_DELETE, |d| {
        Some(EventPayload::MessagesDelete(decode(d)?))
    }),
    (kinds::MESSAGES_REACTION, |d| {
        Some(EventPayload::MessagesReaction(decode(d)?))
    }),
    (kinds::MESSAGE_RECEIPT_UPDATE, |d| {
        Some(EventPayload::MessageReceiptUpdate(decode(d)?))
    }),
    (kinds::MESSAGE_SENT, |d| {
        Some(EventPayload::MessageSent(decode(d)?))
    }),
    (kinds::SESSION_STATUS, |d| {
        Some(EventPayload::SessionStatus(decode(d)?))
    }),
    (kinds::QRCODE_UPDATED, |d| {
        Some(EventPayload::QrCodeUpdated(decode(d)?))
    }),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_all_kinds_once() {
        let names: Vec<&str> = REGISTRY.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), 22);
        let unique: std::collections::HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn received_scope_kinds_are_distinct() {
        let scopes = [
            ReceivedScope::Generic,
            ReceivedScope::Personal,
            ReceivedScope::Group,
            ReceivedScope::Newsletter,
        ];
        for (i, a) in scopes.iter().enumerate() {
            for b in &scopes[i + 1..] {
                assert_ne!(a.kind(), b.kind());
            }
        }
        assert_eq!(ReceivedScope::Group.kind(), "messages-group.received");
    }
}
