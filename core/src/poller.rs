//! Message Poller
//!
//! Fetches pending character messages on a fixed interval and forwards them,
//! in response order, into the message stream. Forwarding waits for the
//! consumer, so a slow renderer naturally slows the poller down.
//!
//! Failure policy:
//! - transport failure: treated like "no new messages" and retried next tick
//! - undecodable body: fatal, the task ends with [`ClientError::Decode`]

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::{AgentClient, PollError};
use crate::error::{ClientError, Result};
use crate::messages::CharacterMessage;

/// Periodic `/events` poller
pub struct Poller {
    client: AgentClient,
    interval: Duration,
}

impl Poller {
    /// Create a poller using the client's configured interval
    pub fn new(client: AgentClient) -> Self {
        let interval = client.config().poll_interval;
        Self { client, interval }
    }

    /// Fetch once. Transport failures yield no messages.
    pub async fn poll_once(&self) -> Result<Vec<CharacterMessage>> {
        match self.client.fetch_events().await {
            Ok(messages) => Ok(messages),
            Err(PollError::Transport { url, source }) => {
                debug!(%url, error = %source, "poll failed, treating as no messages");
                Ok(Vec::new())
            }
            Err(err @ PollError::Decode { .. }) => Err(err.into()),
        }
    }

    /// Poll until shutdown, a decode failure, or the consumer goes away
    pub async fn run(
        self,
        messages: mpsc::Sender<CharacterMessage>,
        shutdown: CancellationToken,
    ) -> Result<()> {
        // First poll happens one interval after start
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => return Ok(()),
                _ = ticker.tick() => {}
            }

            let batch = tokio::select! {
                _ = shutdown.cancelled() => return Ok(()),
                batch = self.poll_once() => batch?,
            };

            for message in batch {
                tokio::select! {
                    _ = shutdown.cancelled() => return Ok(()),
                    sent = messages.send(message) => {
                        if sent.is_err() {
                            return Err(ClientError::ChannelClosed("message"));
                        }
                    }
                }
            }
        }
    }
}
