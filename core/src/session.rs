//! Session Bootstrap
//!
//! Clears whatever sessions a previous run left behind, then opens a fresh
//! one. Runs before the terminal is taken over, so failures reach stderr.

use tracing::info;

use crate::client::AgentClient;
use crate::error::Result;

/// An open chat session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Session id assigned by the service
    pub id: String,
    /// Endpoint player messages are posted to
    pub message_url: String,
}

impl Session {
    /// Close stale sessions for our uid and open a new one
    pub async fn establish(client: &AgentClient) -> Result<Self> {
        client.close_all_sessions().await?;
        let id = client.open_session().await?;
        info!(session_id = %id, "session opened");

        Ok(Self {
            message_url: client.config().message_url(&id),
            id,
        })
    }
}
