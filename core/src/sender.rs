//! Message Sender
//!
//! Fire-and-forget dispatch of the player's replies. The caller never waits
//! for the service: each send runs on its own task and failures are only
//! logged.

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::client::AgentClient;
use crate::session::Session;

/// Posts player messages to the session's message endpoint
#[derive(Clone, Debug)]
pub struct MessageSender {
    client: AgentClient,
    message_url: String,
}

impl MessageSender {
    pub fn new(client: AgentClient, session: &Session) -> Self {
        Self {
            client,
            message_url: session.message_url.clone(),
        }
    }

    /// Send `text` in the background.
    ///
    /// The returned handle may be dropped; it exists so tests can wait for
    /// the request to land.
    pub fn send(&self, text: String) -> JoinHandle<()> {
        let client = self.client.clone();
        let url = self.message_url.clone();

        info!(len = text.len(), message = %text, "user message");

        tokio::spawn(async move {
            if let Err(e) = client.post_message(&url, &text).await {
                warn!(error = %e, "failed to send user message");
            }
        })
    }
}
