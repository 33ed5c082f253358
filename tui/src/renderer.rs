//! Transcript Renderer
//!
//! Consumes the line stream in order. Each non-empty line gets a fresh slot
//! in the scroll buffer, a speaking sprite, and a typing reveal; the next
//! line is not taken until the reveal finishes, which is what paces the
//! whole pipeline. Empty lines are dropped.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use chatterbox_core::{LineRx, Result, ScrollBuffer};

use crate::avatar::AnimationEngine;

/// Owner of the transcript scroll buffer
pub struct Renderer {
    engine: AnimationEngine,
    buffer: ScrollBuffer,
    shutdown: CancellationToken,
}

impl Renderer {
    pub fn new(engine: AnimationEngine, capacity: usize, shutdown: CancellationToken) -> Self {
        Self {
            engine,
            buffer: ScrollBuffer::new(capacity),
            shutdown,
        }
    }

    pub fn buffer(&self) -> &ScrollBuffer {
        &self.buffer
    }

    /// Render lines until the stream closes or shutdown
    pub async fn run(&mut self, mut lines: LineRx) -> Result<()> {
        loop {
            let line = tokio::select! {
                _ = self.shutdown.cancelled() => return Ok(()),
                line = lines.recv() => match line {
                    Some(line) => line,
                    None => {
                        debug!("line stream closed");
                        return Ok(());
                    }
                },
            };

            if line.is_empty() {
                continue;
            }

            self.engine.start_speaking(&line);
            if !self.engine.type_line(&mut self.buffer, &line).await {
                return Ok(());
            }
        }
    }
}
