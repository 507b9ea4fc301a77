//! Message sending endpoints.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Jid, MessageKey};

use super::Client;

/// Body for sending a plain text message.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTextRequest {
    pub to: Jid,
    pub text: String,
}

/// Body for sending an image by URL.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendImageRequest {
    pub to: Jid,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Body for sending a document by URL.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendDocumentRequest {
    pub to: Jid,
    pub document_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// Acknowledgement for a sent message. The definitive delivery states
/// arrive later via `messages.update` webhook events.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub key: MessageKey,
    #[serde(default)]
    pub status: Option<String>,
}

impl Client {
    pub async fn send_text(&self, request: &SendTextRequest) -> Result<SendMessageResponse> {
        self.post("/messages/text", request).await
    }

    pub async fn send_image(&self, request: &SendImageRequest) -> Result<SendMessageResponse> {
        self.post("/messages/image", request).await
    }

    pub async fn send_document(
        &self,
        request: &SendDocumentRequest,
    ) -> Result<SendMessageResponse> {
        self.post("/messages/document", request).await
    }
}
