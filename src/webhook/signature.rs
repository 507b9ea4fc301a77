//! Webhook signature check.

/// Header the gateway uses to deliver the webhook signature.
pub const SIGNATURE_HEADER: &str = "x-webhook-signature";

/// Checks the signature header against the configured webhook secret.
///
/// This is a plain string-equality comparison, matching what the gateway
/// currently sends: the secret itself, not a keyed hash of the body. It is
/// NOT a cryptographic integrity check and must not be treated as one.
/// Whether the gateway will move to an HMAC scheme is unconfirmed; do not
/// substitute a hash comparison here without confirming the protocol.
///
/// Returns `false` when the header is missing or either string is empty.
pub fn verify_signature(header: Option<&str>, secret: &str) -> bool {
    match header {
        Some(value) if !value.is_empty() && !secret.is_empty() => value == secret,
        _ => false,
    }
}
