//! The push-to-pull bridge over a config file's change channel.

use crate::client::{ChangeEvent, ConfigFile};
use crate::error::{Result, SourceError};
use crate::notify::ShutdownSignal;
use crate::record::KeyValue;
use crate::sources::ConfigWatcher;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Change events queued between the remote sender and `next()`.
///
/// Beyond this the transport decides what happens; a remote side using
/// `try_send` will drop events a slow consumer has not drained.
const EVENT_BUFFER: usize = 16;

/// Watcher over one remote config file's change-notification channel.
///
/// The config center pushes [`ChangeEvent`]s; consumers pull them one at a
/// time through [`ConfigWatcher::next`], which suspends until an event is
/// available and materializes it into the same record shape the initial
/// load produced. The notification channel is registered with the file
/// handle during construction, so an event published immediately afterwards
/// is already queued for the first `next()` call.
///
/// [`ConfigWatcher::stop`] closes the watcher idempotently: the first call
/// wakes every suspended `next()` with
/// [`SourceError::WatchClosed`](crate::error::SourceError::WatchClosed) and
/// later calls do nothing. Dropping the watcher has the same effect.
///
/// Events are delivered in the order the remote side emits them, one per
/// `next()` call, with no deduplication. The channel buffers up to a small
/// fixed number of events; whether older events are dropped past that point
/// is a property of the remote transport, not of this watcher.
pub struct FileWatcher {
    file: Arc<dyn ConfigFile>,
    events: Mutex<mpsc::Receiver<ChangeEvent>>,
    shutdown: ShutdownSignal,
}

impl FileWatcher {
    /// Create a watcher bound to a resolved file handle.
    ///
    /// The change channel is registered before this returns; no event
    /// published after construction can be missed.
    pub fn new(file: Arc<dyn ConfigFile>) -> Self {
        let (sender, receiver) = mpsc::channel(EVENT_BUFFER);
        file.subscribe_changes(sender);

        Self {
            file,
            events: Mutex::new(receiver),
            shutdown: ShutdownSignal::new(),
        }
    }
}

#[async_trait]
impl ConfigWatcher for FileWatcher {
    async fn next(&self) -> Result<Vec<KeyValue>> {
        let mut closed = self.shutdown.subscribe();
        let mut events = self.events.lock().await;

        tokio::select! {
            // Check the shutdown flag first so a stop() that raced the lock
            // wins over an already-buffered event.
            biased;

            _ = closed.wait_for(|closed| *closed) => Err(SourceError::WatchClosed),

            event = events.recv() => match event {
                Some(event) => {
                    // Name is re-read from the handle so a center-side
                    // rename shows up in the record key.
                    let file_name = self.file.file_name();
                    tracing::debug!(
                        file = %file_name,
                        kind = ?event.kind,
                        "received config change event"
                    );
                    Ok(vec![KeyValue::for_file(&file_name, &event.content)])
                }
                // All senders gone: the remote side tore down delivery.
                None => Err(SourceError::WatchClosed),
            },
        }
    }

    fn stop(&self) -> Result<()> {
        if self.shutdown.shutdown() {
            tracing::debug!(file = %self.file.file_name(), "config watch stopped");
        }
        Ok(())
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        self.shutdown.shutdown();
    }
}
