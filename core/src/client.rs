//! Agent Client
//!
//! HTTP client for the character service. Each call maps failures onto the
//! error taxonomy the rest of the client relies on: session bootstrap and
//! heartbeat failures are fatal, a poll distinguishes transport failures
//! (ignored) from undecodable bodies (fatal).

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::messages::{CharacterMessage, OutgoingMessage, SessionOpened};

/// Why a single poll produced no messages
#[derive(Debug, Error)]
pub enum PollError {
    /// The request failed or the body could not be read
    #[error("poll request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not a JSON array of messages
    #[error("could not decode poll response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<PollError> for ClientError {
    fn from(err: PollError) -> Self {
        match err {
            PollError::Transport { url, source } => ClientError::Transport { url, source },
            PollError::Decode { url, source } => ClientError::Decode { url, source },
        }
    }
}

/// Client for the character service
#[derive(Clone, Debug)]
pub struct AgentClient {
    config: Arc<ClientConfig>,
    http_client: reqwest::Client,
}

impl AgentClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Timeouts are per request; status checks and sends have none
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|source| ClientError::Transport {
                url: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            config: Arc::new(config),
            http_client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /status`; any transport error means the service is gone.
    ///
    /// This request is never timed out.
    pub async fn check_status(&self) -> Result<()> {
        let url = self.config.status_url();
        self.http_client
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::StatusUnreachable { url, source })?;
        Ok(())
    }

    /// `GET /session/closeall/{uid}`; the response itself is not inspected
    pub async fn close_all_sessions(&self) -> Result<()> {
        let url = self.config.close_all_url();
        let response = self
            .http_client
            .get(&url)
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        debug!(%url, status = %response.status(), "closed previous sessions");
        Ok(())
    }

    /// `POST /session/open`, returning the new session id
    pub async fn open_session(&self) -> Result<String> {
        let url = self.config.open_session_url();
        let request = self.config.open_session_request();

        let response = self
            .http_client
            .post(&url)
            .timeout(self.config.request_timeout)
            .json(&request)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let opened: SessionOpened =
            serde_json::from_slice(&body).map_err(|source| ClientError::Decode { url, source })?;
        Ok(opened.session_id)
    }

    /// `GET /events`: pending character messages in response order
    pub async fn fetch_events(&self) -> std::result::Result<Vec<CharacterMessage>, PollError> {
        let url = self.config.events_url();

        let request = self
            .http_client
            .get(&url)
            .timeout(self.config.request_timeout);
        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(PollError::Transport { url, source }),
        };

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => return Err(PollError::Transport { url, source }),
        };

        serde_json::from_slice(&body).map_err(|source| PollError::Decode { url, source })
    }

    /// `POST {message_url}` with body `{"message": text}`
    pub async fn post_message(&self, message_url: &str, text: &str) -> Result<()> {
        let body = OutgoingMessage {
            message: text.to_string(),
        };

        let response = self
            .http_client
            .post(message_url)
            .json(&body)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: message_url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: message_url.to_string(),
                status,
            });
        }
        Ok(())
    }
}
