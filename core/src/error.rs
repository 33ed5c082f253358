//! Error Types
//!
//! Every failure the client can hit, classified the way the client reacts
//! to it: most are fatal and end the whole process, a few are swallowed
//! where they happen and never reach this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised by the chat client
#[derive(Debug, Error)]
pub enum ClientError {
    /// A request could not be sent or its response could not be read
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with an unexpected HTTP status
    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the JSON we expected
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The heartbeat could not reach the service
    #[error("couldn't communicate with the server at {url}, check connectivity")]
    StatusUnreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A sprite frame file is missing or unreadable
    #[error("error opening sprite file {path}: {source}")]
    SpriteLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The terminal could not be read from or drawn to
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// A pipeline stage lost its peer
    #[error("{0} channel closed")]
    ChannelClosed(&'static str),
}

impl ClientError {
    /// Whether this error ends the process.
    ///
    /// Only a closed channel is benign: it means the other side is already
    /// shutting down.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ClientError::ChannelClosed(_))
    }
}
