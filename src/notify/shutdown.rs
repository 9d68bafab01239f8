//! Close-once shutdown signalling.

use tokio::sync::watch;

/// A one-way, idempotent shutdown flag.
///
/// Stopping a watcher must release a channel that may only be released once,
/// while `next()` calls in other tasks are suspended on that same channel.
/// `ShutdownSignal` wraps a `tokio::sync::watch` pair so the close path and
/// every waiter share a single synchronization primitive: the guarded
/// false-to-true transition happens inside the channel, and there is no
/// window in which a waiter can check a separate flag and then suspend after
/// shutdown already ran.
///
/// # Examples
///
/// ```rust
/// use confpull::notify::ShutdownSignal;
///
/// let signal = ShutdownSignal::new();
/// assert!(signal.shutdown());   // performs the transition
/// assert!(!signal.shutdown());  // no-op from here on
/// assert!(signal.is_shutdown());
/// ```
#[derive(Debug)]
pub struct ShutdownSignal {
    state: watch::Sender<bool>,
}

impl ShutdownSignal {
    /// Create a signal in the open state.
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self { state }
    }

    /// Trigger shutdown.
    ///
    /// Returns `true` only for the call that performed the open-to-closed
    /// transition; every later call returns `false` and does nothing.
    pub fn shutdown(&self) -> bool {
        self.state.send_if_modified(|closed| {
            if *closed {
                false
            } else {
                *closed = true;
                true
            }
        })
    }

    /// Whether shutdown has been triggered.
    pub fn is_shutdown(&self) -> bool {
        *self.state.borrow()
    }

    /// Subscribe to the flag.
    ///
    /// `receiver.wait_for(|closed| *closed)` completes as soon as shutdown
    /// triggers, including when it already has.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[test]
    fn test_shutdown_transitions_once() {
        let signal = ShutdownSignal::new();
        assert!(!signal.is_shutdown());

        assert!(signal.shutdown());
        assert!(signal.is_shutdown());

        // Every call after the first is a no-op
        assert!(!signal.shutdown());
        assert!(!signal.shutdown());
        assert!(signal.is_shutdown());
    }

    #[tokio::test]
    async fn test_pending_waiter_unblocks() {
        let signal = ShutdownSignal::new();
        let mut receiver = signal.subscribe();

        let waiter = tokio::spawn(async move {
            receiver.wait_for(|closed| *closed).await.unwrap();
        });

        signal.shutdown();

        timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should unblock after shutdown")
            .unwrap();
    }

    #[tokio::test]
    async fn test_late_subscriber_sees_shutdown() {
        let signal = ShutdownSignal::new();
        signal.shutdown();

        // Subscribing after the transition must still complete immediately
        let mut receiver = signal.subscribe();
        timeout(Duration::from_secs(1), receiver.wait_for(|closed| *closed))
            .await
            .expect("already-shutdown signal should not block")
            .unwrap();
    }
}
