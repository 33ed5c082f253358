//! Animation Engine
//!
//! Two effects run for every spoken line:
//! - the typing reveal, driven by the caller, one character per tick
//! - the sprite loop, a background task cycling the speaking frames for
//!   as long as the line takes to type
//!
//! Sprite tasks are keyed by a generation counter. Starting a new line bumps
//! the generation; an older sprite task notices at its next frame boundary
//! and exits, so only one sprite loop ever draws at a time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;

use chatterbox_core::ScrollBuffer;

use crate::surface::SurfaceHandle;

/// Drives the typing reveal and the speaking sprite
#[derive(Clone, Debug)]
pub struct AnimationEngine {
    surface: SurfaceHandle,
    /// Number of sprite frames to cycle
    frame_count: usize,
    /// How long each sprite frame is held
    frame_interval: Duration,
    /// Delay between revealed characters
    typing_delay: Duration,
    /// Generation of the line currently being spoken
    generation: Arc<AtomicU64>,
    shutdown: CancellationToken,
}

impl AnimationEngine {
    pub fn new(
        surface: SurfaceHandle,
        frame_count: usize,
        frame_interval: Duration,
        typing_delay: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            surface,
            frame_count,
            frame_interval,
            typing_delay,
            generation: Arc::new(AtomicU64::new(0)),
            shutdown,
        }
    }

    /// How long `line` takes to type
    pub fn speech_duration(&self, line: &str) -> Duration {
        let chars = u32::try_from(line.chars().count()).unwrap_or(u32::MAX);
        self.typing_delay.saturating_mul(chars)
    }

    /// Generation of the most recently started line
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Start the sprite loop for `line`, superseding any loop still running.
    ///
    /// The handle may be dropped; the task ends by itself.
    pub fn start_speaking(&self, line: &str) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let sprite = SpriteLoop {
            surface: self.surface.clone(),
            current: Arc::clone(&self.generation),
            generation,
            frame_count: self.frame_count,
            frame_interval: self.frame_interval,
            speech: self.speech_duration(line),
            shutdown: self.shutdown.clone(),
        };

        tokio::spawn(sprite.run())
    }

    /// Reveal `line` in a fresh slot of `buffer`, one character per tick.
    ///
    /// Every character redraws the whole visible buffer. Returns `false` if
    /// shutdown interrupted the reveal.
    pub async fn type_line(&self, buffer: &mut ScrollBuffer, line: &str) -> bool {
        buffer.push_empty_slot();

        for ch in line.chars() {
            buffer.extend_last(ch);
            self.surface.transcript(buffer.to_vec());

            tokio::select! {
                _ = self.shutdown.cancelled() => return false,
                _ = time::sleep(self.typing_delay) => {}
            }
        }

        true
    }
}

/// One line's sprite loop
struct SpriteLoop {
    surface: SurfaceHandle,
    current: Arc<AtomicU64>,
    generation: u64,
    frame_count: usize,
    frame_interval: Duration,
    speech: Duration,
    shutdown: CancellationToken,
}

impl SpriteLoop {
    fn superseded(&self) -> bool {
        self.shutdown.is_cancelled() || self.current.load(Ordering::SeqCst) != self.generation
    }

    /// Whole passes over the frames until the speech time is used up
    async fn run(self) {
        let pass = self
            .frame_interval
            .saturating_mul(u32::try_from(self.frame_count).unwrap_or(u32::MAX));
        if pass.is_zero() {
            return;
        }

        let mut spoken = Duration::ZERO;
        while spoken < self.speech {
            for frame in 0..self.frame_count {
                if self.superseded() {
                    return;
                }
                self.surface.sprite(frame);

                tokio::select! {
                    _ = self.shutdown.cancelled() => return,
                    _ = time::sleep(self.frame_interval) => {}
                }
            }
            spoken += pass;
        }
    }
}
