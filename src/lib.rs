//! # confpull
//!
//! Pull-based configuration source adapter for push-driven remote config
//! centers.
//!
//! ## Overview
//!
//! Config centers publish new file content by pushing events on a channel.
//! Configuration frameworks want the opposite shape: load the current value
//! once, then block for the next change. `confpull` bridges the two models:
//!
//! - [`RemoteFileSource`](sources::RemoteFileSource) resolves one remote
//!   file by its (namespace, group, file name) identity and loads its
//!   current content as a [`KeyValue`](record::KeyValue) record.
//! - [`FileWatcher`](notify::FileWatcher) adapts the file's
//!   change-notification channel into a blocking-iterator interface:
//!   every `next()` suspends until one change arrives; `stop()` shuts the
//!   watcher down idempotently and wakes every pending call.
//!
//! The config center itself stays behind the
//! [`ConfigClient`](client::ConfigClient)/[`ConfigFile`](client::ConfigFile)
//! seam; implement those two traits over your center's SDK and the
//! source/watcher pair does the rest.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use confpull::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example(client: Arc<dyn confpull::client::ConfigClient>) -> confpull::error::Result<()> {
//! let source = RemoteFileSource::builder(client)
//!     .with_file_group("ordering")
//!     .with_file_name("service.yaml")
//!     .build()?;
//!
//! // Initial value set: one record per file
//! let records = source.load().await?;
//! assert_eq!(records[0].key, "service.yaml");
//!
//! // Block for updates until shutdown
//! let watcher = source.watch().await?;
//! loop {
//!     match watcher.next().await {
//!         Ok(records) => println!("updated: {} bytes", records[0].value.len()),
//!         Err(SourceError::WatchClosed) => break,
//!         Err(err) => return Err(err),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Semantics worth knowing
//!
//! - `load()` must succeed once before `watch()`; the resolved handle is
//!   pinned inside the source and shared with every watcher.
//! - Each `next()` call consumes exactly one change event, in the order the
//!   center emitted them. Events are buffered only by the notification
//!   channel itself; a slow consumer can miss intermediate updates if the
//!   remote transport drops unconsumed events.
//! - `stop()` is idempotent and safe to call while another task is
//!   suspended in `next()` on the same watcher; the suspended call returns
//!   [`SourceError::WatchClosed`](error::SourceError::WatchClosed).
//! - The crate is silent by default: diagnostics go through [`tracing`]
//!   at debug level, never to stdout.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod notify;
pub mod record;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::client::{ChangeEvent, ChangeKind, ConfigClient, ConfigFile};
    pub use crate::error::{Result, SourceError};
    pub use crate::record::KeyValue;
    pub use crate::sources::{ConfigSource, ConfigWatcher, RemoteFileSource};
}
