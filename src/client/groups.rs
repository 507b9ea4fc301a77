//! Group endpoints.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{GroupMetadata, Jid, ParticipantAction};

use super::Client;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ParticipantsRequest<'a> {
    participants: &'a [Jid],
    action: ParticipantAction,
}

/// Per-participant outcome of a membership change.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantChange {
    pub jid: String,
    /// Gateway-reported status code for this participant (e.g. "200").
    #[serde(default)]
    pub status: Option<String>,
}

impl Client {
    /// All groups the session participates in.
    pub async fn list_groups(&self) -> Result<Vec<GroupMetadata>> {
        self.get("/groups").await
    }

    pub async fn group_metadata(&self, group: &Jid) -> Result<GroupMetadata> {
        self.get(&format!("/groups/{group}")).await
    }

    /// Applies one membership change (add/remove/promote/demote) to a set
    /// of participants.
    pub async fn update_group_participants(
        &self,
        group: &Jid,
        action: ParticipantAction,
        participants: &[Jid],
    ) -> Result<Vec<ParticipantChange>> {
        self.post(
            &format!("/groups/{group}/participants"),
            &ParticipantsRequest {
                participants,
                action,
            },
        )
        .await
    }
}
