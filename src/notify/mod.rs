//! Change notification adapters.
//!
//! Bridges a config center's push-driven change channel into the pull-based
//! [`ConfigWatcher`](crate::sources::ConfigWatcher) contract.

pub mod shutdown;
pub mod watcher;

pub use shutdown::ShutdownSignal;
pub use watcher::FileWatcher;
