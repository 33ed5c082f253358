//! Terminal Surface
//!
//! The terminal has exactly one writer. Every component that wants something
//! on screen submits a [`DrawCommand`] through a cloneable [`SurfaceHandle`];
//! the [`Surface`] task owns the `ratatui::Terminal`, folds commands into its
//! retained region state and redraws whole frames, so typing, sprite and
//! input updates can never interleave mid-frame.
//!
//! ```text
//!   Renderer ──┐
//!   sprite  ───┼──> DrawCommand queue ──> Surface (owns Terminal) ──> tty
//!   Input   ───┘
//! ```

use std::sync::Arc;

use ratatui::backend::Backend;
use ratatui::widgets::Widget;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use chatterbox_core::Result;

use crate::avatar::SpriteAnimation;
use crate::layout::Regions;
use crate::theme;
use crate::widgets::TextBlock;

/// A mutation of one screen region
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    /// Show sprite frame `n`
    Sprite(usize),
    /// Replace the visible transcript lines
    Transcript(Vec<String>),
    /// Replace the input strip contents (prompt included)
    Input(String),
    /// Redraw as-is (e.g. after a resize)
    Redraw,
}

/// Cloneable submitter of draw commands
#[derive(Clone, Debug)]
pub struct SurfaceHandle {
    tx: mpsc::UnboundedSender<DrawCommand>,
}

impl SurfaceHandle {
    /// Wrap a raw sender, for driving components without a terminal
    pub fn from_sender(tx: mpsc::UnboundedSender<DrawCommand>) -> Self {
        Self { tx }
    }

    /// Queue a command. Dropped silently once the surface is gone.
    pub fn submit(&self, command: DrawCommand) {
        let _ = self.tx.send(command);
    }

    pub fn sprite(&self, frame: usize) {
        self.submit(DrawCommand::Sprite(frame));
    }

    pub fn transcript(&self, lines: Vec<String>) {
        self.submit(DrawCommand::Transcript(lines));
    }

    pub fn input(&self, text: String) {
        self.submit(DrawCommand::Input(text));
    }

    pub fn redraw(&self) {
        self.submit(DrawCommand::Redraw);
    }

    /// Whether the surface task is still accepting commands
    pub fn is_open(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Retained contents of the three regions
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceState {
    pub sprite_frame: usize,
    pub transcript: Vec<String>,
    pub input: String,
}

impl SurfaceState {
    /// Fold one command into the state
    pub fn apply(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Sprite(frame) => self.sprite_frame = frame,
            DrawCommand::Transcript(lines) => self.transcript = lines,
            DrawCommand::Input(text) => self.input = text,
            DrawCommand::Redraw => {}
        }
    }
}

/// Sole owner of the terminal
pub struct Surface<B: Backend> {
    terminal: Terminal<B>,
    sprites: Arc<SpriteAnimation>,
    text_width: u16,
    lines: u16,
    state: SurfaceState,
    rx: mpsc::UnboundedReceiver<DrawCommand>,
}

impl<B: Backend> Surface<B> {
    /// Create the surface and the handle used to feed it
    pub fn new(
        terminal: Terminal<B>,
        sprites: Arc<SpriteAnimation>,
        text_width: usize,
        lines: usize,
    ) -> (Self, SurfaceHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let surface = Self {
            terminal,
            sprites,
            text_width: u16::try_from(text_width).unwrap_or(u16::MAX),
            lines: u16::try_from(lines).unwrap_or(u16::MAX),
            state: SurfaceState::default(),
            rx,
        };
        (surface, SurfaceHandle { tx })
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Draw until shutdown or until every handle is dropped, then hand the
    /// terminal back for restoration.
    pub async fn run(mut self, shutdown: CancellationToken) -> Result<Terminal<B>> {
        self.draw()?;

        loop {
            let command = tokio::select! {
                _ = shutdown.cancelled() => break,
                command = self.rx.recv() => match command {
                    Some(command) => command,
                    None => break,
                },
            };

            self.state.apply(command);
            // Fold whatever else is queued into the same frame
            while let Ok(command) = self.rx.try_recv() {
                self.state.apply(command);
            }

            self.draw()?;
        }

        // Whatever was queued before shutdown still makes the last frame
        let mut pending = false;
        while let Ok(command) = self.rx.try_recv() {
            self.state.apply(command);
            pending = true;
        }
        if pending {
            self.draw()?;
        }

        debug!("surface released");
        Ok(self.terminal)
    }

    /// Redraw every region from the retained state
    pub fn draw(&mut self) -> Result<()> {
        let sprites = &self.sprites;
        let state = &self.state;
        let (text_width, lines) = (self.text_width, self.lines);

        self.terminal.draw(|frame| {
            let regions = Regions::compute(
                frame.area(),
                (sprites.width(), sprites.height()),
                text_width,
                lines,
            );
            let buf = frame.buffer_mut();

            if let Some(sprite) = sprites.frame(state.sprite_frame) {
                TextBlock::new(&sprite.rows)
                    .style(theme::sprite_style())
                    .render(regions.sprite, buf);
            }

            TextBlock::new(&state.transcript)
                .style(theme::transcript_style())
                .render(regions.transcript, buf);

            // Keep the tail of a long input visible, cursor after it
            let input = regions.input;
            if input.width > 0 && input.height > 0 {
                let cols = input.width as usize - 1;
                let chars = state.input.chars().count();
                let visible: String = state.input.chars().skip(chars.saturating_sub(cols)).collect();
                let cursor_x = input.x + visible.chars().count() as u16;

                TextBlock::new(std::slice::from_ref(&visible))
                    .style(theme::input_style())
                    .render(input, buf);
                frame.set_cursor_position((cursor_x, input.y));
            }
        })?;

        Ok(())
    }
}
