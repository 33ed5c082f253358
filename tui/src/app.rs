//! Main Application
//!
//! Wires the pipeline together and supervises it:
//!
//! - Surface: sole owner of the terminal
//! - Poller -> line producer -> Renderer: the character's side
//! - InputHandler -> separator + MessageSender: the player's side
//! - heartbeat: periodic status check
//!
//! Every task shares one cancellation token. Esc cancels it directly; the
//! first task to fail records its error and cancels it. App then waits for
//! every task to wind down before handing the terminal back.

use std::io;
use std::sync::Arc;

use anyhow::anyhow;
use crossterm::event::Event;
use futures::Stream;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use chatterbox_core::{
    line_channel, message_channel, produce_lines, run_heartbeat, AgentClient, MessageSender,
    Poller, Session,
};

use crate::avatar::{AnimationEngine, SpriteAnimation};
use crate::input::InputHandler;
use crate::renderer::Renderer;
use crate::surface::Surface;

/// Why the application stopped without an error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// Esc or Ctrl+C
    UserQuit,
    /// The terminal stopped delivering events
    InputClosed,
    /// Shut down from elsewhere while still running
    Cancelled,
}

/// What a supervised task hands back
enum TaskOutput<B: Backend> {
    Finished,
    Input(ExitReason),
    Surface(Terminal<B>),
}

type TaskResult<B> = (&'static str, chatterbox_core::Result<TaskOutput<B>>);

/// The chat client, ready to take over a terminal
pub struct App {
    client: AgentClient,
    session: Session,
    sprites: Arc<SpriteAnimation>,
}

impl App {
    pub fn new(client: AgentClient, session: Session, sprites: SpriteAnimation) -> Self {
        Self {
            client,
            session,
            sprites: Arc::new(sprites),
        }
    }

    /// Run until quit or the first fatal error.
    ///
    /// On a clean exit the terminal comes back for the caller to restore.
    pub async fn run<B, S>(
        self,
        terminal: Terminal<B>,
        events: S,
    ) -> anyhow::Result<(ExitReason, Terminal<B>)>
    where
        B: Backend + Send + 'static,
        S: Stream<Item = io::Result<Event>> + Unpin + Send + 'static,
    {
        let config = self.client.config().clone();
        let shutdown = CancellationToken::new();
        let mut tasks: JoinSet<TaskResult<B>> = JoinSet::new();

        let (message_tx, message_rx) = message_channel();
        let (line_tx, line_rx) = line_channel();

        let (surface, handle) = Surface::new(
            terminal,
            Arc::clone(&self.sprites),
            config.text_width,
            config.scroll_capacity,
        );
        {
            let shutdown = shutdown.clone();
            tasks.spawn(async move {
                ("surface", surface.run(shutdown).await.map(TaskOutput::Surface))
            });
        }

        {
            let poller = Poller::new(self.client.clone());
            let shutdown = shutdown.clone();
            tasks.spawn(async move {
                let result = poller.run(message_tx, shutdown).await;
                ("poller", result.map(|_| TaskOutput::Finished))
            });
        }

        {
            let line_tx = line_tx.clone();
            let width = config.text_width;
            let shutdown = shutdown.clone();
            tasks.spawn(async move {
                let result = produce_lines(message_rx, line_tx, width, shutdown).await;
                ("line producer", result.map(|_| TaskOutput::Finished))
            });
        }

        {
            let engine = AnimationEngine::new(
                handle.clone(),
                self.sprites.len(),
                config.sprite_frame_interval,
                config.typing_delay,
                shutdown.clone(),
            );
            let mut renderer = Renderer::new(engine, config.scroll_capacity, shutdown.clone());
            tasks.spawn(async move {
                let result = renderer.run(line_rx).await;
                ("renderer", result.map(|_| TaskOutput::Finished))
            });
        }

        {
            let client = self.client.clone();
            let shutdown = shutdown.clone();
            tasks.spawn(async move {
                let result = run_heartbeat(client, shutdown).await;
                ("heartbeat", result.map(|_| TaskOutput::Finished))
            });
        }

        {
            let sender = MessageSender::new(self.client.clone(), &self.session);
            let mut input = InputHandler::new(
                config.prompt.clone(),
                config.separator.clone(),
                line_tx,
                sender,
                handle,
                shutdown.clone(),
            );
            tasks.spawn(async move {
                ("input", input.run(events).await.map(TaskOutput::Input))
            });
        }

        info!(session_id = %self.session.id, "chat running");
        supervise(tasks, shutdown).await
    }
}

/// Wait for every task; the first one to stop takes the others down with it
async fn supervise<B: Backend + Send + 'static>(
    mut tasks: JoinSet<TaskResult<B>>,
    shutdown: CancellationToken,
) -> anyhow::Result<(ExitReason, Terminal<B>)> {
    let mut fatal: Option<anyhow::Error> = None;
    let mut reason = ExitReason::Cancelled;
    let mut terminal = None;

    while let Some(joined) = tasks.join_next().await {
        shutdown.cancel();

        let (name, result) = match joined {
            Ok(output) => output,
            Err(e) => {
                error!(error = %e, "task aborted");
                fatal.get_or_insert_with(|| anyhow!("task aborted: {e}"));
                continue;
            }
        };

        match result {
            Ok(TaskOutput::Finished) => debug!(task = name, "task finished"),
            Ok(TaskOutput::Input(exit)) => reason = exit,
            Ok(TaskOutput::Surface(t)) => terminal = Some(t),
            Err(e) if e.is_fatal() => {
                error!(task = name, error = %e, "fatal error");
                if fatal.is_none() {
                    fatal = Some(anyhow::Error::new(e).context(format!("{name} failed")));
                }
            }
            Err(e) => debug!(task = name, error = %e, "task stopped"),
        }
    }

    if let Some(err) = fatal {
        return Err(err);
    }

    let terminal = terminal.ok_or_else(|| anyhow!("terminal surface was lost"))?;
    info!(?reason, "chat stopped");
    Ok((reason, terminal))
}
