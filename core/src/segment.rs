//! Line Segmentation
//!
//! Greedy word wrap of a single character message into fixed-width lines.
//! Width is measured in `char`s; words are never split, so a word longer
//! than the width becomes a line of its own.

/// Word-wrap `text` into lines of at most `width` characters.
///
/// Whitespace runs are collapsed: joining the result with single spaces
/// gives back the whitespace-normalized input. Empty (or blank) input
/// yields exactly one empty line, which the renderer drops.
pub fn segment(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len > width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
            line_len = word_len;
        } else {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        }
    }

    lines.push(line);
    lines
}
