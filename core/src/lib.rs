//! Chatterbox Core - Headless message pipeline for the character chat client
//!
//! This crate holds everything the client does that has nothing to do with
//! drawing: talking to the character service, turning its unordered poll
//! responses into an ordered stream of width-wrapped lines, and sending the
//! player's replies back. The terminal surface lives in `chatterbox-tui`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  CharacterMessage  ┌──────────────┐   line   ┌──────────────┐
//! │    Poller    │ ─────────────────> │ produce_lines│ ───────> │   Renderer   │
//! │ GET /events  │   (capacity 1)     │  (segment)   │ (cap. 1) │  (surface)   │
//! └──────────────┘                    └──────────────┘    ^     └──────────────┘
//!                                                         │
//!                                          separator      │
//! ┌──────────────┐  POST /session/{id}/message   ┌────────┴─────┐
//! │MessageSender │ <──────────────────────────── │ InputHandler │
//! └──────────────┘                               └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ClientConfig`]: endpoints, session identity and all timing constants
//! - [`AgentClient`]: HTTP client for the character service
//! - [`Session`]: bootstrap (close stale sessions, open a new one)
//! - [`Poller`]: periodic `GET /events` forwarding messages in arrival order
//! - [`segment`]: word-wraps one message into fixed-width lines
//! - [`ScrollBuffer`]: bounded FIFO of visible transcript lines
//! - [`MessageSender`]: fire-and-forget dispatch of one player message

pub mod client;
pub mod config;
pub mod error;
pub mod heartbeat;
pub mod messages;
pub mod pipeline;
pub mod poller;
pub mod scroll;
pub mod segment;
pub mod sender;
pub mod session;

pub use client::{AgentClient, PollError};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use heartbeat::run_heartbeat;
pub use messages::{CharacterMessage, OpenSessionRequest, OutgoingMessage, SessionOpened};
pub use pipeline::{line_channel, message_channel, produce_lines, LineRx, LineTx, MessageRx, MessageTx};
pub use poller::Poller;
pub use scroll::ScrollBuffer;
pub use segment::segment;
pub use sender::MessageSender;
pub use session::Session;
