//! Message and Line Streams
//!
//! The two ordered hand-offs of the client. Both are capacity-1 channels:
//! a producer parks until the consumer has taken the previous value, which
//! paces the whole pipeline to the typing speed of the renderer.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::{ClientError, Result};
use crate::messages::CharacterMessage;
use crate::segment::segment;

/// Capacity of both hand-off channels
pub const HANDOFF_CAPACITY: usize = 1;

pub type MessageTx = mpsc::Sender<CharacterMessage>;
pub type MessageRx = mpsc::Receiver<CharacterMessage>;
pub type LineTx = mpsc::Sender<String>;
pub type LineRx = mpsc::Receiver<String>;

/// Poller -> line producer
pub fn message_channel() -> (MessageTx, MessageRx) {
    mpsc::channel(HANDOFF_CAPACITY)
}

/// Line producer and input handler -> renderer
pub fn line_channel() -> (LineTx, LineRx) {
    mpsc::channel(HANDOFF_CAPACITY)
}

/// Segment each message, in arrival order, into the line stream.
///
/// Returns when the message stream ends or on shutdown.
pub async fn produce_lines(
    mut messages: MessageRx,
    lines: LineTx,
    width: usize,
    shutdown: CancellationToken,
) -> Result<()> {
    loop {
        let message = tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            message = messages.recv() => match message {
                Some(message) => message,
                None => return Ok(()),
            },
        };

        for line in segment(&message.text, width) {
            tokio::select! {
                _ = shutdown.cancelled() => return Ok(()),
                sent = lines.send(line) => {
                    if sent.is_err() {
                        return Err(ClientError::ChannelClosed("line"));
                    }
                }
            }
        }
    }
}
