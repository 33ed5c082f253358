//! Theme and Styles
//!
//! Styles for the three screen regions. The character's words are bold,
//! the player's typing is bold italic, and the sprite keeps the terminal's
//! default colours so whatever the sprite artist drew shows through.

use ratatui::style::{Color, Modifier, Style};

/// Character speech - soft pink
pub const SPEECH_PINK: Color = Color::Rgb(255, 182, 193);

/// Player input - green
pub const USER_GREEN: Color = Color::Rgb(130, 220, 130);

/// Transcript panel text
pub fn transcript_style() -> Style {
    Style::default()
        .fg(SPEECH_PINK)
        .add_modifier(Modifier::BOLD)
}

/// Input strip text
pub fn input_style() -> Style {
    Style::default()
        .fg(USER_GREEN)
        .add_modifier(Modifier::BOLD | Modifier::ITALIC)
}

/// Sprite rows
pub fn sprite_style() -> Style {
    Style::default()
}
