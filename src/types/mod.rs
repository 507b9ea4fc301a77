mod chat;
mod group;
mod jid;
mod key;
mod message;
mod session;

pub use chat::{Chat, ChatUpdate, Contact};
pub use group::{
    GroupMetadata, GroupParticipant, GroupParticipantsUpdate, GroupRole, ParticipantAction,
    ParticipantRef,
};
pub use jid::Jid;
pub use key::{IncomingMessageKey, MessageContent, MessageKey};
pub use message::{
    CallEvent, CallInfo, MessageReaction, MessageReceipt, MessageSent, MessageStatus,
    MessageUpdate, MessageUpsert, MessagesDelete, PollOption, PollResults, Reaction, Receipt,
    ReceiptStatus, ReceivedMessage, StatusUpdate,
};
pub use session::{QrCodeUpdated, SessionStatus, SessionStatusEvent};

/// Message ID type (gateway-assigned ID string).
pub type MessageId = String;
