//! Contact endpoints.

use crate::error::Result;
use crate::types::{Contact, Jid};

use super::Client;

impl Client {
    /// All contacts known to the session.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>> {
        self.get("/contacts").await
    }

    pub async fn get_contact(&self, jid: &Jid) -> Result<Contact> {
        self.get(&format!("/contacts/{jid}")).await
    }
}
