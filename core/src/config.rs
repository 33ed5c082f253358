//! Client Configuration
//!
//! Endpoints, session identity and timing constants for the chat client.
//! There are no command-line flags and no config file: the defaults below
//! are the client's behaviour, and tests override individual fields with
//! the `with_*` builders.

use std::path::PathBuf;
use std::time::Duration;

use crate::messages::OpenSessionRequest;

/// Client configuration
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the character service (no trailing slash)
    pub base_url: String,

    /// Player uid used for session bookkeeping
    pub uid: String,
    /// Scene the character lives in
    pub scene_id: String,
    /// Character to talk to
    pub character_id: String,
    /// Name the character addresses the player by
    pub player_name: String,
    /// Server id reported to the service
    pub server_id: String,

    /// How often the status endpoint is checked
    pub status_check_interval: Duration,
    /// How often `/events` is polled
    pub poll_interval: Duration,
    /// Timeout for session bootstrap and `/events` polls; status checks
    /// and message sends are never timed out
    pub request_timeout: Duration,

    /// Delay between two revealed characters of a line
    pub typing_delay: Duration,
    /// Maximum line width in characters (single long words excepted)
    pub text_width: usize,
    /// Number of visible transcript lines
    pub scroll_capacity: usize,
    /// Literal pushed into the line stream when the player submits
    pub separator: String,
    /// Prompt shown before the edit buffer
    pub prompt: String,

    /// Directory holding `sprite0.txt`, `sprite1.txt`, ...
    pub sprite_dir: PathBuf,
    /// Number of sprite frame files
    pub sprite_frame_count: usize,
    /// How long each sprite frame is held
    pub sprite_frame_interval: Duration,

    /// Log file, truncated at startup
    pub log_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            uid: "-1".to_string(),
            scene_id: "workspaces/gensoukyou/scenes/test".to_string(),
            character_id: "-1".to_string(),
            player_name: "Player".to_string(),
            server_id: "1234".to_string(),
            status_check_interval: Duration::from_secs(5),
            poll_interval: Duration::from_millis(1000),
            request_timeout: Duration::from_secs(30),
            typing_delay: Duration::from_millis(50),
            text_width: 30,
            scroll_capacity: 10,
            separator: "-----".to_string(),
            prompt: "> ".to_string(),
            sprite_dir: PathBuf::from("sprites"),
            sprite_frame_count: 2,
            sprite_frame_interval: Duration::from_millis(200),
            log_file: PathBuf::from("log.txt"),
        }
    }
}

impl ClientConfig {
    /// Point the client at a different service (tests use a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_status_check_interval(mut self, interval: Duration) -> Self {
        self.status_check_interval = interval;
        self
    }

    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    pub fn with_sprite_frame_interval(mut self, interval: Duration) -> Self {
        self.sprite_frame_interval = interval;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_sprite_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sprite_dir = dir.into();
        self
    }

    /// `GET` heartbeat endpoint
    pub fn status_url(&self) -> String {
        format!("{}/status", self.base_url)
    }

    /// `GET` endpoint returning pending character messages
    pub fn events_url(&self) -> String {
        format!("{}/events", self.base_url)
    }

    /// `POST` endpoint creating a session
    pub fn open_session_url(&self) -> String {
        format!("{}/session/open", self.base_url)
    }

    /// `GET` endpoint closing every session of this uid
    pub fn close_all_url(&self) -> String {
        format!("{}/session/closeall/{}", self.base_url, self.uid)
    }

    /// `POST` endpoint for player messages in the given session
    pub fn message_url(&self, session_id: &str) -> String {
        format!("{}/session/{}/message", self.base_url, session_id)
    }

    /// Body of the session open request
    pub fn open_session_request(&self) -> OpenSessionRequest {
        OpenSessionRequest {
            uid: self.uid.clone(),
            scene_id: self.scene_id.clone(),
            character_id: self.character_id.clone(),
            player_name: self.player_name.clone(),
            server_id: self.server_id.clone(),
        }
    }
}
