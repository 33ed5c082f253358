//! Screen Layout
//!
//! Splits the terminal into the three regions of the chat screen:
//! the sprite at the left edge, the transcript panel in the upper right and
//! the one-row input strip near the bottom. The regions never overlap.

use ratatui::layout::Rect;

/// Screen regions for one terminal size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Regions {
    pub sprite: Rect,
    pub transcript: Rect,
    pub input: Rect,
}

impl Regions {
    /// Compute the regions for `area`.
    ///
    /// `sprite_size` is (width, height) of the largest sprite frame,
    /// `text_width` the transcript width and `lines` the number of
    /// transcript rows wanted.
    pub fn compute(area: Rect, sprite_size: (u16, u16), text_width: u16, lines: u16) -> Self {
        let (w, h) = (area.width, area.height);

        // Input strip: one row at 7/8 of the height, always the last row at most
        let input_y = (h - h / 8).min(h.saturating_sub(1));
        let upper_h = input_y;

        let sprite = Rect::new(
            area.x,
            area.y,
            sprite_size.0.min(w),
            sprite_size.1.min(upper_h),
        );

        // Far enough left that a full-width line fits, right of the sprite
        let transcript_x = (w / 2 + w / 5)
            .min(w.saturating_sub(text_width))
            .max(sprite.width.saturating_add(1))
            .min(w);
        let transcript_y = (h / 2 - h / 3).min(upper_h);
        let transcript = Rect::new(
            area.x + transcript_x,
            area.y + transcript_y,
            text_width.min(w - transcript_x),
            lines.min(upper_h - transcript_y),
        );

        let input_x = w / 24;
        let input = Rect::new(
            area.x + input_x,
            area.y + input_y,
            w.saturating_sub(w / 12).min(w - input_x),
            h.min(1),
        );

        Self {
            sprite,
            transcript,
            input,
        }
    }
}
