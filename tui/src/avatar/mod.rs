//! Avatar System - The Speaking Sprite
//!
//! The character on the left edge of the screen. It is a loop of plain-text
//! frames loaded from disk, animated while a line of speech is being typed:
//! - [`SpriteAnimation`]: the immutable frames
//! - [`AnimationEngine`]: typing reveal + generation-keyed sprite loop

mod animation;
mod sprites;

pub use animation::AnimationEngine;
pub use sprites::{Frame, SpriteAnimation};
