//! Session management endpoints.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::SessionStatus;

use super::Client;

/// A messaging session as returned by the session endpoints.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub status: Option<SessionStatus>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub webhook_enabled: Option<bool>,
    /// Event names the webhook is subscribed to.
    #[serde(default)]
    pub webhook_events: Vec<String>,
}

/// Body for `POST /sessions`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub name: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_enabled: Option<bool>,
    /// Shared secret the gateway echoes back in the signature header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub webhook_events: Vec<String>,
}

/// Body for `PUT /sessions/{id}`. Only set fields are changed.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_events: Option<Vec<String>>,
}

/// Connection state of a session.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub status: SessionStatus,
}

/// Pairing QR code, base64 data URI.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeResponse {
    pub qr: String,
}

impl Client {
    pub async fn list_sessions(&self) -> Result<Vec<Session>> {
        self.get("/sessions").await
    }

    pub async fn create_session(&self, request: &CreateSessionRequest) -> Result<Session> {
        self.post("/sessions", request).await
    }

    pub async fn get_session(&self, id: &str) -> Result<Session> {
        self.get(&format!("/sessions/{id}")).await
    }

    pub async fn update_session(
        &self,
        id: &str,
        request: &UpdateSessionRequest,
    ) -> Result<Session> {
        self.put(&format!("/sessions/{id}"), request).await
    }

    pub async fn delete_session(&self, id: &str) -> Result<()> {
        let _: serde_json::Value = self.delete(&format!("/sessions/{id}")).await?;
        Ok(())
    }

    /// Starts connecting the session. Watch `session.status` and
    /// `qrcode.updated` webhook events for progress.
    pub async fn connect_session(&self, id: &str) -> Result<SessionStatusResponse> {
        self.post(&format!("/sessions/{id}/connect"), &serde_json::json!({}))
            .await
    }

    pub async fn disconnect_session(&self, id: &str) -> Result<SessionStatusResponse> {
        self.post(&format!("/sessions/{id}/disconnect"), &serde_json::json!({}))
            .await
    }

    pub async fn session_status(&self, id: &str) -> Result<SessionStatusResponse> {
        self.get(&format!("/sessions/{id}/status")).await
    }

    /// Current pairing QR code, available while the session needs scanning.
    pub async fn session_qr_code(&self, id: &str) -> Result<QrCodeResponse> {
        self.get(&format!("/sessions/{id}/qrcode")).await
    }
}
