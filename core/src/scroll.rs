//! Scroll Buffer
//!
//! Bounded FIFO of transcript lines. When full, the oldest line is evicted
//! before a new one is appended. The last line may still be growing while
//! the typing reveal runs.

use std::collections::VecDeque;

/// Ring buffer of the visible transcript lines
#[derive(Clone, Debug)]
pub struct ScrollBuffer {
    /// Lines, oldest first
    lines: VecDeque<String>,
    /// Maximum number of lines retained
    capacity: usize,
}

impl ScrollBuffer {
    /// Create a buffer holding at most `capacity` lines (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a complete line, evicting the oldest one if full
    pub fn push_line(&mut self, line: impl Into<String>) {
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    /// Append an empty line to be filled by [`ScrollBuffer::extend_last`]
    pub fn push_empty_slot(&mut self) {
        self.push_line(String::new());
    }

    /// Append a character to the newest line (opening one if empty)
    pub fn extend_last(&mut self, ch: char) {
        match self.lines.back_mut() {
            Some(last) => last.push(ch),
            None => self.push_line(ch.to_string()),
        }
    }

    /// Lines, oldest first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Owned snapshot of the lines, oldest first
    pub fn to_vec(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
