//! Chatterbox Entry Point
//!
//! Opens a chat session with the character service and runs the
//! typewriter client full-screen until Esc.
//!
//! Logs go to `log.txt` in the working directory; `RUST_LOG` overrides the
//! default `info` filter.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::panic;
use std::sync::Mutex;

use anyhow::Context;
use crossterm::cursor::Show;
use crossterm::event::EventStream;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chatterbox_core::{AgentClient, ClientConfig, Session};
use chatterbox_tui::avatar::SpriteAnimation;
use chatterbox_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::default();
    init_logging(&config.log_file);

    // Raw mode needs a real terminal on both ends
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("chatterbox requires a terminal (TTY) on stdin and stdout");
    }

    let sprites = SpriteAnimation::load(&config.sprite_dir, config.sprite_frame_count).await?;
    let client = AgentClient::new(config)?;
    let session = Session::establish(&client)
        .await
        .context("could not open a chat session")?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let result = App::new(client, session, sprites)
        .run(terminal, EventStream::new())
        .await;

    restore_terminal();

    match result {
        Ok((reason, _terminal)) => {
            info!(?reason, "bye");
            Ok(())
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "exiting on error");
            Err(e)
        }
    }
}

/// Log to a file; the terminal belongs to the UI.
///
/// Without a usable log file the client still runs, just unlogged.
fn init_logging(path: &Path) {
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    match open_log_file(path) {
        Ok(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        Err(e) => {
            eprintln!("warning: {e:#}; continuing without a log");
            registry.init();
        }
    }
}

/// Create (or truncate) the log file
fn open_log_file(path: &Path) -> anyhow::Result<File> {
    File::create(path).with_context(|| format!("could not create log file {}", path.display()))
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
