//! # whatsapp-gateway-sdk
//!
//! Rust client library for WhatsApp HTTP gateway APIs.
//!
//! ## Features
//!
//! - Typed webhook event dispatch: 22 known event families plus a lossless
//!   fallback for anything unrecognized
//! - Placeholder webhook signature check (see [`webhook::verify_signature`])
//! - Thin typed REST wrappers: sessions, contacts, groups, message sending
//! - Rate-limit header parsing and typed API errors
//!
//! ## Example
//!
//! ```ignore
//! use whatsapp_gateway_sdk::{dispatch, Client, EventPayload};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Client::with_session_key("https://gw.example.com/api", "key");
//!     let sessions = client.list_sessions().await?;
//!
//!     // In the webhook HTTP handler:
//!     let body: serde_json::Value = serde_json::from_slice(b"{\"event\":\"session.status\",\"data\":{\"status\":\"connected\"}}")?;
//!     match dispatch(body).payload {
//!         EventPayload::SessionStatus(s) => println!("session is {:?}", s.status),
//!         other => println!("unhandled: {}", other.kind()),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;
pub mod webhook;

pub use client::{Auth, Client, ClientConfig, RateLimitInfo};
pub use error::{ApiError, Error, Result};
pub use types::{IncomingMessageKey, Jid, MessageContent, MessageId, MessageKey};
pub use webhook::{dispatch, verify_signature, EventPayload, WebhookEvent, SIGNATURE_HEADER};
