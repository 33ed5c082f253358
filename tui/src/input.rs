//! Input Handler
//!
//! Owns the edit buffer. Key events are turned into [`InputAction`]s by a
//! pure state machine ([`InputHandler::handle_key`]); the async loop then
//! carries out the side effects: redrawing the input strip, injecting the
//! separator into the line stream and handing the text to the sender.

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use chatterbox_core::{ClientError, LineTx, MessageSender, Result};

use crate::app::ExitReason;
use crate::surface::SurfaceHandle;

/// What a key press asks for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Edit buffer changed
    Redraw,
    /// Enter pressed; the buffer has been taken
    Submit(String),
    /// Leave the application
    Quit,
    Ignore,
}

/// Keyboard side of the client
pub struct InputHandler {
    /// Unsent text, never touched by anything else
    buffer: String,
    prompt: String,
    separator: String,
    lines: LineTx,
    sender: MessageSender,
    surface: SurfaceHandle,
    shutdown: CancellationToken,
}

impl InputHandler {
    pub fn new(
        prompt: impl Into<String>,
        separator: impl Into<String>,
        lines: LineTx,
        sender: MessageSender,
        surface: SurfaceHandle,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            buffer: String::new(),
            prompt: prompt.into(),
            separator: separator.into(),
            lines,
            sender,
            surface,
            shutdown,
        }
    }

    pub fn edit_buffer(&self) -> &str {
        &self.buffer
    }

    /// Contents of the input strip
    pub fn input_line(&self) -> String {
        format!("{}{}", self.prompt, self.buffer)
    }

    /// Apply one key event to the edit buffer
    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        // Only presses; release and repeat come through on some terminals
        if key.kind != KeyEventKind::Press {
            return InputAction::Ignore;
        }

        match key.code {
            KeyCode::Esc => InputAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Quit
            }
            KeyCode::Enter => InputAction::Submit(std::mem::take(&mut self.buffer)),
            KeyCode::Backspace | KeyCode::Delete => {
                self.buffer.pop();
                InputAction::Redraw
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.buffer.push(c);
                InputAction::Redraw
            }
            _ => InputAction::Ignore,
        }
    }

    /// Process terminal events until quit, shutdown or the end of `events`
    pub async fn run<S>(&mut self, mut events: S) -> Result<ExitReason>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        self.surface.input(self.input_line());

        loop {
            let event = tokio::select! {
                _ = self.shutdown.cancelled() => return Ok(ExitReason::Cancelled),
                event = events.next() => event,
            };

            let event = match event {
                Some(event) => event?,
                None => {
                    debug!("terminal event stream ended");
                    self.shutdown.cancel();
                    return Ok(ExitReason::InputClosed);
                }
            };

            match event {
                Event::Key(key) => match self.handle_key(key) {
                    InputAction::Redraw => self.surface.input(self.input_line()),
                    InputAction::Submit(text) => {
                        if !self.submit(text).await? {
                            return Ok(ExitReason::Cancelled);
                        }
                        self.surface.input(self.input_line());
                    }
                    InputAction::Quit => {
                        info!("quit requested");
                        self.shutdown.cancel();
                        return Ok(ExitReason::UserQuit);
                    }
                    InputAction::Ignore => {}
                },
                Event::Resize(..) => self.surface.redraw(),
                _ => {}
            }
        }
    }

    /// Separator into the transcript, then the text to the service.
    ///
    /// Keys are not read until the renderer takes the separator, so a quit
    /// pressed meanwhile waits for the hand-off. Returns `false` if shutdown
    /// arrived while waiting on the line stream.
    async fn submit(&self, text: String) -> Result<bool> {
        tokio::select! {
            _ = self.shutdown.cancelled() => return Ok(false),
            sent = self.lines.send(self.separator.clone()) => {
                if sent.is_err() {
                    return Err(ClientError::ChannelClosed("line"));
                }
            }
        }

        self.sender.send(text);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use chatterbox_core::{line_channel, AgentClient, ClientConfig, LineRx, Session};
    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::sync::mpsc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::surface::DrawCommand;

    struct Harness {
        handler: InputHandler,
        lines: LineRx,
        draws: mpsc::UnboundedReceiver<DrawCommand>,
        shutdown: CancellationToken,
    }

    fn harness(base_url: &str) -> Harness {
        let config = ClientConfig::default().with_base_url(base_url);
        let session = Session {
            id: "abc".to_string(),
            message_url: config.message_url("abc"),
        };
        let client = AgentClient::new(config).unwrap();
        let sender = MessageSender::new(client, &session);

        let (line_tx, lines) = line_channel();
        let (draw_tx, draws) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let handler = InputHandler::new(
            "> ",
            "-----",
            line_tx,
            sender,
            SurfaceHandle::from_sender(draw_tx),
            shutdown.clone(),
        );

        Harness {
            handler,
            lines,
            draws,
            shutdown,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_events(keys: Vec<KeyEvent>) -> impl Stream<Item = io::Result<Event>> + Unpin {
        futures::stream::iter(keys.into_iter().map(|k| Ok(Event::Key(k))))
    }

    fn inputs(rx: &mut mpsc::UnboundedReceiver<DrawCommand>) -> Vec<String> {
        let mut seen = Vec::new();
        while let Ok(command) = rx.try_recv() {
            if let DrawCommand::Input(text) = command {
                seen.push(text);
            }
        }
        seen
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut h = harness("http://127.0.0.1:1");
        let handler = &mut h.handler;

        assert_eq!(handler.handle_key(press(KeyCode::Char('h'))), InputAction::Redraw);
        assert_eq!(handler.handle_key(press(KeyCode::Char('é'))), InputAction::Redraw);
        assert_eq!(handler.input_line(), "> hé");

        assert_eq!(handler.handle_key(press(KeyCode::Backspace)), InputAction::Redraw);
        assert_eq!(handler.edit_buffer(), "h");
        handler.handle_key(press(KeyCode::Delete));
        assert_eq!(handler.handle_key(press(KeyCode::Backspace)), InputAction::Redraw);
        assert_eq!(handler.edit_buffer(), "");
    }

    #[test]
    fn test_enter_takes_the_buffer() {
        let mut h = harness("http://127.0.0.1:1");
        let handler = &mut h.handler;

        handler.handle_key(press(KeyCode::Char('o')));
        handler.handle_key(press(KeyCode::Char('k')));
        assert_eq!(
            handler.handle_key(press(KeyCode::Enter)),
            InputAction::Submit("ok".to_string())
        );
        assert_eq!(handler.edit_buffer(), "");

        // An empty buffer is still submitted
        assert_eq!(
            handler.handle_key(press(KeyCode::Enter)),
            InputAction::Submit(String::new())
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut h = harness("http://127.0.0.1:1");
        let handler = &mut h.handler;

        assert_eq!(handler.handle_key(press(KeyCode::Esc)), InputAction::Quit);
        assert_eq!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
    }

    #[test]
    fn test_ignored_keys() {
        let mut h = harness("http://127.0.0.1:1");
        let handler = &mut h.handler;

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handler.handle_key(release), InputAction::Ignore);
        assert_eq!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            InputAction::Ignore
        );
        assert_eq!(handler.handle_key(press(KeyCode::F(1))), InputAction::Ignore);
        assert_eq!(handler.handle_key(press(KeyCode::Up)), InputAction::Ignore);
        assert_eq!(handler.edit_buffer(), "");
    }

    #[tokio::test]
    async fn test_submit_sends_separator_then_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/session/abc/message"))
            .and(body_json(json!({ "message": "hi" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut h = harness(&server.uri());
        let events = key_events(vec![
            press(KeyCode::Char('h')),
            press(KeyCode::Char('i')),
            press(KeyCode::Enter),
            press(KeyCode::Esc),
        ]);

        let reason = h.handler.run(events).await.unwrap();
        assert_eq!(reason, ExitReason::UserQuit);
        assert!(h.shutdown.is_cancelled());

        assert_eq!(h.lines.recv().await.as_deref(), Some("-----"));
        assert_eq!(h.handler.edit_buffer(), "");
        assert_eq!(inputs(&mut h.draws), vec!["> ", "> h", "> hi", "> "]);

        // The post runs detached; give it a moment to land
        for _ in 0..100 {
            if server.received_requests().await.unwrap_or_default().len() == 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        server.verify().await;
    }

    #[tokio::test]
    async fn test_resize_requests_redraw() {
        let mut h = harness("http://127.0.0.1:1");
        let events = futures::stream::iter(vec![Ok::<_, io::Error>(Event::Resize(100, 40))]);

        let reason = h.handler.run(events).await.unwrap();
        assert_eq!(reason, ExitReason::InputClosed);

        let mut commands = Vec::new();
        while let Ok(command) = h.draws.try_recv() {
            commands.push(command);
        }
        assert_eq!(
            commands,
            vec![DrawCommand::Input("> ".to_string()), DrawCommand::Redraw]
        );
    }

    #[tokio::test]
    async fn test_event_stream_error_is_fatal() {
        let mut h = harness("http://127.0.0.1:1");
        let events = futures::stream::iter(vec![Err::<Event, _>(io::Error::other("tty gone"))]);

        let err = h.handler.run(events).await.unwrap_err();
        assert!(matches!(err, ClientError::Terminal(_)));
    }

    #[tokio::test]
    async fn test_shutdown_stops_waiting_for_keys() {
        let mut h = harness("http://127.0.0.1:1");
        h.shutdown.cancel();

        let reason = h.handler.run(futures::stream::pending::<io::Result<Event>>()).await.unwrap();
        assert_eq!(reason, ExitReason::Cancelled);
    }
}
