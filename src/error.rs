//! Error types for confpull.

/// Result type alias for confpull operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Boxed error type used to carry failures from the remote client seam.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by a remote config-file source or its watchers.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// A required identity field was missing or empty when the source was built.
    ///
    /// This is fatal at construction time and never retried.
    #[error("invalid source options: {0}")]
    Validation(String),

    /// The remote lookup or transport failed while loading.
    ///
    /// Wraps the underlying client error; the caller decides whether and how
    /// to retry, this crate never retries on its own.
    #[error("failed to resolve remote config file: {0}")]
    Resolution(#[source] BoxError),

    /// The change-notification channel closed before or while a
    /// [`next()`](crate::sources::ConfigWatcher::next) call was pending.
    ///
    /// Signals explicit [`stop()`](crate::sources::ConfigWatcher::stop) or
    /// remote teardown, so callers can tell an intentional shutdown apart
    /// from a transport failure.
    #[error("watch closed")]
    WatchClosed,

    /// `watch()` was called before any successful `load()`.
    #[error("source not loaded: call load() before watch()")]
    NotInitialized,
}
