//! TextBlock Widget
//!
//! A borderless block of pre-wrapped lines. When there are more lines than
//! rows, the newest lines win; lines wider than the area are clipped.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

/// A borderless, bottom-anchored block of lines
pub struct TextBlock<'a> {
    lines: &'a [String],
    style: Style,
}

impl<'a> TextBlock<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self {
            lines,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for TextBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let skip = self.lines.len().saturating_sub(area.height as usize);
        for (i, line) in self.lines.iter().skip(skip).enumerate() {
            let y = area.y + i as u16;
            buf.set_stringn(area.x, y, line, area.width as usize, self.style);
        }
    }
}
