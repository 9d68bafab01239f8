//! Configuration source and watcher traits.

use crate::error::Result;
use crate::record::KeyValue;
use async_trait::async_trait;

/// Trait for pull-based configuration sources.
///
/// A source resolves one logical configuration unit and exposes it through
/// two operations: a synchronous-style load of the current value set and a
/// watch handle for push-driven updates. Configuration frameworks call
/// `load()` once at startup and then drive a watcher for the lifetime of the
/// process.
///
/// Both operations return a sequence of [`KeyValue`] records; file-backed
/// sources emit exactly one record per call.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Load the current value set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached or the
    /// configured identity does not resolve. A failed load yields no
    /// records and must not leave the source pretending to be initialized.
    async fn load(&self) -> Result<Vec<KeyValue>>;

    /// Obtain a watcher for changes to this source.
    ///
    /// Each call produces an independent watcher. Most consumers watch once
    /// per source lifetime, but concurrent watchers are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotInitialized`](crate::error::SourceError::NotInitialized)
    /// if no `load()` has succeeded yet.
    async fn watch(&self) -> Result<Box<dyn ConfigWatcher>>;
}

/// Trait for blocking-iterator access to configuration changes.
///
/// A watcher adapts the source's push-driven notification stream into a
/// pull interface: every `next()` call suspends until one change arrives
/// and materializes it as the same record shape `load()` produces.
#[async_trait]
pub trait ConfigWatcher: Send + Sync {
    /// Wait for the next change and return the updated value set.
    ///
    /// Suspends the calling task only; other tasks keep running. Each call
    /// consumes exactly one change event, in the order the remote side
    /// emitted them.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::WatchClosed`](crate::error::SourceError::WatchClosed)
    /// once the watcher is stopped or the remote side tears down delivery,
    /// including calls already suspended when that happens.
    async fn next(&self) -> Result<Vec<KeyValue>>;

    /// Stop watching.
    ///
    /// Idempotent: the first call releases the notification channel and
    /// unblocks every pending `next()`; later calls are no-ops.
    fn stop(&self) -> Result<()>;
}
