//! Webhook delivery handling: the event dispatcher and the signature check.
//!
//! [`dispatch`] is the entry point. Decode the request body with
//! `serde_json`, hand the value over, and pattern-match on the resulting
//! [`EventPayload`]:
//!
//! ```
//! use whatsapp_gateway_sdk::webhook::{dispatch, EventPayload};
//!
//! let raw = serde_json::json!({
//!     "event": "qrcode.updated",
//!     "sessionId": "main",
//!     "data": {"qr": "data:image/png;base64,AAAA"}
//! });
//! match dispatch(raw).payload {
//!     EventPayload::QrCodeUpdated(qr) => println!("scan {}", qr.qr),
//!     other => println!("ignored {}", other.kind()),
//! }
//! ```

mod event;
mod signature;

use serde_json::Value;

pub use event::{kinds, EventPayload, ReceivedScope};
pub use signature::{verify_signature, SIGNATURE_HEADER};

/// One webhook delivery, resolved to a typed payload.
#[derive(Clone, Debug, PartialEq)]
pub struct WebhookEvent {
    /// Unix timestamp at which the gateway generated the event.
    pub timestamp: Option<i64>,
    /// Session that produced the event.
    pub session_id: Option<String>,
    pub payload: EventPayload,
}

impl WebhookEvent {
    /// The event-name discriminant. For unrecognized deliveries this is the
    /// original name verbatim; for malformed ones it is `"unknown"`.
    pub fn kind(&self) -> &str {
        self.payload.kind()
    }

    /// Whether this delivery resolved to a known event shape.
    pub fn is_known(&self) -> bool {
        !matches!(self.payload, EventPayload::Unknown { .. })
    }

    fn malformed(raw: Value) -> Self {
        Self {
            timestamp: None,
            session_id: None,
            payload: EventPayload::Unknown {
                event: kinds::UNKNOWN.to_string(),
                data: raw.clone(),
                raw,
            },
        }
    }
}

/// Resolves a decoded webhook body to a typed [`WebhookEvent`].
///
/// Total over any JSON value: malformed input (not an object, or no usable
/// `event` string) yields an `Unknown` payload with the sentinel kind
/// `"unknown"`; an unrecognized event name yields an `Unknown` payload that
/// keeps the name verbatim. Neither case is an error, since webhook senders
/// have no channel to hear about one. Pure, no I/O.
///
/// The payload is trusted once the event name matches: fields beyond the
/// registered shape are not validated, and consumers must treat optional
/// fields as genuinely optional. A `data` field that cannot be read as the
/// registered shape at all degrades to `Unknown`, keeping the delivery
/// intact.
pub fn dispatch(raw: Value) -> WebhookEvent {
    let Some(body) = raw.as_object() else {
        return WebhookEvent::malformed(raw);
    };
    let event = match body.get("event").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return WebhookEvent::malformed(raw),
    };

    let timestamp = body.get("timestamp").and_then(Value::as_i64);
    let session_id = body
        .get("sessionId")
        .and_then(Value::as_str)
        .map(str::to_string);
    let data = body.get("data").cloned().unwrap_or(Value::Null);

    let known = event::REGISTRY.iter().find(|(name, _)| *name == event);
    let payload = match known.and_then(|(_, build)| build(data.clone())) {
        Some(payload) => payload,
        None => {
            tracing::debug!(event = %event, known = known.is_some(), "webhook fallback");
            EventPayload::Unknown { event, data, raw }
        }
    };
    WebhookEvent {
        timestamp,
        session_id,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MessageStatus, ParticipantAction, SessionStatus};
    use serde_json::json;

    fn delivery(event: &str, data: Value) -> Value {
        json!({
            "event": event,
            "timestamp": 1_760_000_000,
            "sessionId": "session-1",
            "data": data
        })
    }

    #[test]
    fn dispatch_is_total_over_malformed_input() {
        for raw in [
            json!(null),
            json!(42),
            json!("messages.upsert"),
            json!([1, 2, 3]),
            json!({}),
            json!({"event": 7}),
            json!({"event": ""}),
            json!({"data": {"key": {}}}),
        ] {
            let evt = dispatch(raw.clone());
            assert_eq!(evt.kind(), kinds::UNKNOWN, "input: {raw}");
            assert!(!evt.is_known());
            match evt.payload {
                EventPayload::Unknown { data, raw: kept, .. } => {
                    assert_eq!(data, raw);
                    assert_eq!(kept, raw);
                }
                other => panic!("expected fallback, got {other:?}"),
            }
        }
    }

    #[test]
    fn dispatch_copies_envelope_fields() {
        let evt = dispatch(delivery("chats.delete", json!(["1@s.whatsapp.net"])));
        assert_eq!(evt.timestamp, Some(1_760_000_000));
        assert_eq!(evt.session_id.as_deref(), Some("session-1"));
        assert_eq!(evt.kind(), "chats.delete");
        assert_eq!(
            evt.payload,
            EventPayload::ChatsDelete(vec!["1@s.whatsapp.net".to_string()])
        );
    }

    #[test]
    fn dispatch_resolves_every_known_kind() {
        let fixtures: Vec<(&str, Value)> = vec![
            ("chats.upsert", json!([{"id": "1@s.whatsapp.net"}])),
            ("chats.update", json!([{"unreadCount": 2}])),
            ("chats.delete", json!(["1@s.whatsapp.net"])),
            ("groups.upsert", json!([{"id": "g@g.us", "subject": "Team"}])),
            ("groups.update", json!([{"id": "g@g.us"}])),
            (
                "group-participants.update",
                json!({"id": "g@g.us", "participants": ["1@s.whatsapp.net"], "action": "add"}),
            ),
            ("contacts.upsert", json!([{"id": "1@s.whatsapp.net"}])),
            ("contacts.update", json!([{"id": "1@s.whatsapp.net", "notify": "Bo"}])),
            (
                "messages.upsert",
                json!({"key": {"id": "M1", "remoteJid": "1@s.whatsapp.net"}}),
            ),
            (
                "messages.received",
                json!({"key": {"id": "M1", "remoteJid": "1@s.whatsapp.net"}, "message": {"conversation": "hi"}}),
            ),
            (
                "messages-personal.received",
                json!({"key": {"id": "M2", "remoteJid": "1@s.whatsapp.net"}, "message": {"conversation": "hi"}}),
            ),
            (
                "messages-group.received",
                json!({"key": {"id": "M3", "remoteJid": "g@g.us", "participant": "1@s.whatsapp.net"}, "message": {"conversation": "hi"}}),
            ),
            (
                "messages-newsletter.received",
                json!({"key": {"id": "M4", "remoteJid": "n@newsletter"}, "message": {"conversation": "hi"}}),
            ),
            (
                "call.received",
                json!({"call": {"id": "c1", "from": "1@s.whatsapp.net", "date": "2025-10-17T12:00:00Z"}}),
            ),
            (
                "poll.results",
                json!({"key": {"id": "P1", "remoteJid": "g@g.us"}, "pollResults": []}),
            ),
            (
                "messages.update",
                json!([{"key": {"id": "M1", "remoteJid": "1@s.whatsapp.net"}, "update": {"status": "read"}}]),
            ),
            (
                "messages.delete",
                json!({"keys": [{"id": "M1", "remoteJid": "1@s.whatsapp.net"}]}),
            ),
            (
                "messages.reaction",
                json!([{"key": {"id": "M1", "remoteJid": "1@s.whatsapp.net"}, "reaction": {"text": "👍", "key": {"id": "M0", "remoteJid": "1@s.whatsapp.net"}}}]),
            ),
            (
                "message-receipt.update",
                json!([{"key": {"id": "M1", "remoteJid": "1@s.whatsapp.net"}, "receipt": {"status": "read"}}]),
            ),
            (
                "message.sent",
                json!({"key": {"id": "M9", "fromMe": true, "remoteJid": "1@s.whatsapp.net"}}),
            ),
            ("session.status", json!({"status": "connected"})),
            ("qrcode.updated", json!({"qr": "data:image/png;base64,AAAA"})),
        ];
        assert_eq!(fixtures.len(), 22);
        for (name, data) in fixtures {
            let evt = dispatch(delivery(name, data));
            assert_eq!(evt.kind(), name);
            assert!(evt.is_known(), "{name} fell back");
        }
    }

    #[test]
    fn dispatch_preserves_unknown_event_name() {
        let raw = delivery("unknown.custom.event", json!({"anything": [1, 2]}));
        let evt = dispatch(raw.clone());
        assert_eq!(evt.kind(), "unknown.custom.event");
        assert_eq!(evt.timestamp, Some(1_760_000_000));
        assert_eq!(evt.session_id.as_deref(), Some("session-1"));
        match evt.payload {
            EventPayload::Unknown { event, data, raw: kept } => {
                assert_eq!(event, "unknown.custom.event");
                assert_eq!(data, json!({"anything": [1, 2]}));
                assert_eq!(kept, raw);
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn dispatch_known_name_with_unreadable_data_falls_back_losslessly() {
        let raw = delivery("session.status", json!({"status": "on fire"}));
        let evt = dispatch(raw.clone());
        assert_eq!(evt.kind(), "session.status");
        assert!(!evt.is_known());
        match evt.payload {
            EventPayload::Unknown { data, .. } => assert_eq!(data, json!({"status": "on fire"})),
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn dispatch_is_deterministic() {
        let raw = delivery(
            "messages.upsert",
            json!({"key": {"id": "M1", "remoteJid": "1@s.whatsapp.net"}, "pushName": "Bo"}),
        );
        assert_eq!(dispatch(raw.clone()), dispatch(raw));
    }

    #[test]
    fn call_received_scenario() {
        let evt = dispatch(json!({
            "event": "call.received",
            "data": {"call": {
                "id": "call123",
                "from": "12345@s.whatsapp.net",
                "date": "2025-10-17T12:00:00Z",
                "isGroup": false
            }}
        }));
        assert_eq!(evt.kind(), "call.received");
        match evt.payload {
            EventPayload::CallReceived(c) => {
                assert_eq!(c.call.id, "call123");
                assert_eq!(c.call.from, "12345@s.whatsapp.net");
                assert_eq!(c.call.date, "2025-10-17T12:00:00Z");
                assert!(!c.call.is_group);
            }
            other => panic!("expected call event, got {other:?}"),
        }
    }

    #[test]
    fn group_received_scenario() {
        let evt = dispatch(json!({
            "event": "messages-group.received",
            "data": {
                "key": {
                    "id": "M77",
                    "remoteJid": "g1@g.us",
                    "participant": "12345@s.whatsapp.net"
                },
                "message": {"conversation": "group hello"}
            }
        }));
        assert_eq!(evt.kind(), "messages-group.received");
        match evt.payload {
            EventPayload::MessageReceived { scope, message } => {
                assert_eq!(scope, ReceivedScope::Group);
                assert_eq!(message.key.participant.as_deref(), Some("12345@s.whatsapp.net"));
                assert_eq!(
                    message.message.unwrap().conversation.as_deref(),
                    Some("group hello")
                );
            }
            other => panic!("expected received message, got {other:?}"),
        }
    }

    #[test]
    fn typed_payload_field_access() {
        let evt = dispatch(delivery(
            "messages.update",
            json!([{"key": {"id": "M1", "remoteJid": "1@s.whatsapp.net"}, "update": {"status": "played"}}]),
        ));
        match evt.payload {
            EventPayload::MessagesUpdate(updates) => {
                assert_eq!(updates[0].update.status, MessageStatus::Played)
            }
            other => panic!("{other:?}"),
        }

        let evt = dispatch(delivery(
            "group-participants.update",
            json!({"id": "g@g.us", "participants": ["1@s.whatsapp.net"], "action": "demote"}),
        ));
        match evt.payload {
            EventPayload::GroupParticipantsUpdate(u) => {
                assert_eq!(u.action, ParticipantAction::Demote)
            }
            other => panic!("{other:?}"),
        }

        let evt = dispatch(delivery("session.status", json!({"status": "need_scan"})));
        match evt.payload {
            EventPayload::SessionStatus(s) => assert_eq!(s.status, SessionStatus::NeedScan),
            other => panic!("{other:?}"),
        }
    }
}
