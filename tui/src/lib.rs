//! Chatterbox TUI - Terminal surface for the character chat client
//!
//! A full-screen typewriter chat: the character's messages are typed out
//! one character at a time in the upper-right panel while a plain-text
//! sprite on the left "speaks", and the player's replies are typed into
//! the strip at the bottom.
//!
//! # Architecture
//!
//! - **Surface**: single-writer render queue, sole owner of the terminal
//! - **Avatar**: sprite frames + typing/sprite animation engine
//! - **Renderer**: ordered line consumer, owns the scroll-back buffer
//! - **Input**: edit buffer, separator injection, message dispatch
//! - **App**: task wiring and cooperative shutdown

pub mod app;
pub mod avatar;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use app::{App, ExitReason};
