//! HTTP client for the gateway REST API.
//!
//! Thin typed wrappers over the gateway's endpoints: request/response
//! structs plus one method per operation. The interesting behavior lives in
//! [`crate::webhook`]; this side is plumbing.

mod contacts;
mod groups;
mod messages;
mod rate_limit;
mod sessions;

pub use groups::ParticipantChange;
pub use messages::{SendDocumentRequest, SendImageRequest, SendMessageResponse, SendTextRequest};
pub use rate_limit::RateLimitInfo;
pub use sessions::{
    CreateSessionRequest, QrCodeResponse, Session, SessionStatusResponse, UpdateSessionRequest,
};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Error, Result};

/// Credential used for gateway requests.
///
/// Session API keys scope requests to one messaging session; personal
/// access tokens authorize account-level operations such as session CRUD.
#[derive(Clone, Debug)]
pub enum Auth {
    /// Per-session API key, sent as `x-api-key`.
    SessionApiKey(String),
    /// Account-level token, sent as a bearer token.
    PersonalAccessToken(String),
}

impl Auth {
    fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::SessionApiKey(key) => builder.header("x-api-key", key),
            Self::PersonalAccessToken(token) => builder.bearer_auth(token),
        }
    }
}

/// Client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Gateway base URL, e.g. `https://gateway.example.com/api`.
    pub base_url: String,
    pub auth: Auth,
}

/// Success-response envelope every gateway endpoint wraps its data in.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the gateway REST API.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Client scoped to one session via its API key.
    pub fn with_session_key(base_url: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(ClientConfig {
            base_url: base_url.into(),
            auth: Auth::SessionApiKey(key.into()),
        })
    }

    /// Account-level client authorized by a personal access token.
    pub fn with_personal_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(ClientConfig {
            base_url: base_url.into(),
            auth: Auth::PersonalAccessToken(token.into()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends a prepared request, unwraps the success envelope and maps
    /// failures to typed errors. 429 becomes [`Error::RateLimited`] with
    /// whatever quota headers the gateway attached.
    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T> {
        tracing::debug!(path, "gateway request");
        let response = self.config.auth.apply(builder).send().await?;
        let status = response.status();
        let headers = response.headers().clone();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited {
                retry_after: rate_limit::retry_after_secs(&headers),
                info: RateLimitInfo::from_headers(&headers),
            });
        }

        let body = response.bytes().await?;
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(ApiError {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
        if !envelope.success {
            return Err(ApiError {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "gateway reported failure".to_string()),
            }
            .into());
        }
        Ok(envelope.data)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.http.get(self.url(path)), path).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send(self.http.post(self.url(path)).json(body), path)
            .await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send(self.http.put(self.url(path)).json(body), path)
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.http.delete(self.url(path)), path).await
    }
}
