//! Message Types
//!
//! JSON shapes exchanged with the character service.

use serde::{Deserialize, Serialize};

/// A message produced by the character, as returned by `GET /events`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterMessage {
    /// Event type reported by the service
    #[serde(rename = "type")]
    pub kind: String,
    pub session_id: String,
    pub uid: String,
    pub server_id: String,
    /// Whether this is the last message of a reply
    #[serde(rename = "final")]
    pub is_final: bool,
    pub text: String,
}

impl CharacterMessage {
    /// Message carrying only text (handy for tests and local injection)
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Body of `POST /session/open`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSessionRequest {
    pub uid: String,
    pub scene_id: String,
    pub character_id: String,
    pub player_name: String,
    pub server_id: String,
}

/// Response of `POST /session/open`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOpened {
    pub session_id: String,
}

/// Body of `POST /session/{id}/message`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub message: String,
}
