//! Widgets
//!
//! Small ratatui widgets used by the surface.

mod text_block;

pub use text_block::TextBlock;
