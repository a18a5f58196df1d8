use std::io::Read;

use tokio::sync::mpsc;

use crate::input::event::InputEvent;
use crate::input::source::TouchInputSource;

/// Default number of events buffered between the reader thread and the
/// consumer
pub const DEFAULT_CAPACITY: usize = 64;

/// Runs the blocking read loop of a [TouchInputSource] on a dedicated
/// blocking thread and hands classified events to async consumers.
///
/// [InputEvent::Ignore] records are dropped before they reach the channel.
/// [InputEvent::End] is always the last event delivered, after which
/// [TouchEventStream::recv] returns `None`.
#[derive(Debug)]
pub struct TouchEventStream {
    rx: mpsc::Receiver<InputEvent>,
}

impl TouchEventStream {
    /// Move the given source onto a blocking thread and start reading.
    ///
    /// Dropping the stream stops the reader after its current read returns.
    /// A read blocked on an idle device only returns once the device
    /// produces another record.
    ///
    /// # Panics
    ///
    /// Panics if called outside the context of a Tokio runtime.
    pub fn spawn<R>(mut source: TouchInputSource<R>, capacity: usize) -> Self
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        tokio::task::spawn_blocking(move || {
            log::debug!("Started reading events from {:?}", source.path());
            loop {
                let event = source.read_event();
                if event == InputEvent::Ignore {
                    continue;
                }
                if tx.blocking_send(event).is_err() {
                    log::debug!("Event receiver closed, stopping reader");
                    break;
                }
                if event.is_end() {
                    log::debug!("Touch device stream ended");
                    break;
                }
            }
            source.close();
        });

        Self { rx }
    }

    /// Wait for the next event. Returns `None` once [InputEvent::End] has
    /// been delivered.
    pub async fn recv(&mut self) -> Option<InputEvent> {
        self.rx.recv().await
    }
}
