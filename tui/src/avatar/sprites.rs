//! Sprite Definitions
//!
//! The speaking sprite is a short loop of plain-text frames. Each frame is
//! read from its own file (`sprite0.txt`, `sprite1.txt`, ...) once at
//! startup; every line of a file becomes one display row.

use std::io;
use std::path::{Path, PathBuf};

use chatterbox_core::{ClientError, Result};

/// A single animation frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Display rows, top to bottom
    pub rows: Vec<String>,
    /// Width in terminal cells (widest row)
    pub width: u16,
    /// Height in terminal cells
    pub height: u16,
}

impl Frame {
    /// Create a frame from its rows
    pub fn new(rows: Vec<String>) -> Self {
        let height = u16::try_from(rows.len()).unwrap_or(u16::MAX);
        let width = rows
            .iter()
            .map(|row| u16::try_from(row.chars().count()).unwrap_or(u16::MAX))
            .max()
            .unwrap_or(0);

        Self {
            rows,
            width,
            height,
        }
    }

    /// Parse a frame file's contents
    pub fn parse(contents: &str) -> Self {
        Self::new(contents.lines().map(str::to_string).collect())
    }
}

/// The speaking animation: an ordered, immutable list of frames
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteAnimation {
    frames: Vec<Frame>,
}

impl SpriteAnimation {
    /// Build an animation from in-memory frames
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Path of frame `index` inside `dir`
    pub fn frame_path(dir: &Path, index: usize) -> PathBuf {
        dir.join(format!("sprite{index}.txt"))
    }

    /// Load `frame_count` frame files from `dir`.
    ///
    /// A missing or unreadable file is an error, and so is asking for zero
    /// frames.
    pub async fn load(dir: &Path, frame_count: usize) -> Result<Self> {
        if frame_count == 0 {
            return Err(ClientError::SpriteLoad {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "no sprite frames configured"),
            });
        }

        let mut frames = Vec::with_capacity(frame_count);
        for index in 0..frame_count {
            let path = Self::frame_path(dir, index);
            let contents = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| ClientError::SpriteLoad { path, source })?;
            frames.push(Frame::parse(&contents));
        }

        Ok(Self { frames })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame `index`, wrapping around the loop
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        if self.frames.is_empty() {
            return None;
        }
        self.frames.get(index % self.frames.len())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Widest row across all frames
    pub fn width(&self) -> u16 {
        self.frames.iter().map(|f| f.width).max().unwrap_or(0)
    }

    /// Tallest frame
    pub fn height(&self) -> u16 {
        self.frames.iter().map(|f| f.height).max().unwrap_or(0)
    }
}
