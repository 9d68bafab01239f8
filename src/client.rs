//! The remote config-center client seam.
//!
//! This crate does not speak to any config center directly. Applications
//! implement [`ConfigClient`] and [`ConfigFile`] over their center's SDK
//! (or an in-memory fake in tests) and the source/watcher pair drives those
//! traits.

use crate::error::BoxError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;

/// What a config file change was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// The file was created and published for the first time.
    Added,
    /// The file's content was updated.
    Modified,
    /// The file was deleted; the event content is empty.
    Deleted,
}

/// A change notification pushed by the remote side.
///
/// Only `content` feeds the record a watcher emits; `previous_content` and
/// `kind` are carried for listeners that want to diff or filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// The new content of the file.
    pub content: String,
    /// The content before this change, when the center reports it.
    pub previous_content: Option<String>,
    /// Kind of change that produced this event.
    pub kind: ChangeKind,
}

impl ChangeEvent {
    /// Event for a freshly published file.
    pub fn added(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            previous_content: None,
            kind: ChangeKind::Added,
        }
    }

    /// Event for an updated file.
    pub fn modified(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            previous_content: None,
            kind: ChangeKind::Modified,
        }
    }

    /// Event for a deleted file.
    pub fn deleted() -> Self {
        Self {
            content: String::new(),
            previous_content: None,
            kind: ChangeKind::Deleted,
        }
    }

    /// Attach the content the file had before this change.
    pub fn with_previous(mut self, previous: impl Into<String>) -> Self {
        self.previous_content = Some(previous.into());
        self
    }
}

/// Client capability of a remote config center.
///
/// The only operation a source needs from the center itself is resolving a
/// (namespace, group, file name) triple to a live [`ConfigFile`] handle.
///
/// # Errors
///
/// `resolve_file` surfaces lookup and transport failures as the client's own
/// boxed error; the source wraps them in
/// [`SourceError::Resolution`](crate::error::SourceError::Resolution).
#[async_trait]
pub trait ConfigClient: Send + Sync {
    /// Resolve one configuration file by its three-part identity.
    async fn resolve_file(
        &self,
        namespace: &str,
        file_group: &str,
        file_name: &str,
    ) -> std::result::Result<Arc<dyn ConfigFile>, BoxError>;
}

/// A resolved remote config file.
///
/// The handle is owned by the remote client; sources pin a shared reference
/// to it after a successful load and watchers borrow that reference. Nothing
/// in this crate mutates the handle's identity, and the handle stays valid
/// for the source's lifetime.
pub trait ConfigFile: Send + Sync {
    /// Current name of the file.
    ///
    /// Watchers re-read this on every event so a center-side rename shows up
    /// in the next record's key.
    fn file_name(&self) -> String;

    /// Snapshot of the file's current content.
    fn content(&self) -> String;

    /// Register a channel that will receive every change published after
    /// this call.
    ///
    /// Delivery runs at the transport's pace: the remote side may drop
    /// events a slow consumer has not drained from the channel. That is a
    /// property of the transport, not of the watcher built on top of it.
    fn subscribe_changes(&self, sender: mpsc::Sender<ChangeEvent>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_constructors() {
        let added = ChangeEvent::added("a: 1");
        assert_eq!(added.kind, ChangeKind::Added);
        assert_eq!(added.content, "a: 1");
        assert!(added.previous_content.is_none());

        let modified = ChangeEvent::modified("a: 2").with_previous("a: 1");
        assert_eq!(modified.kind, ChangeKind::Modified);
        assert_eq!(modified.previous_content.as_deref(), Some("a: 1"));

        let deleted = ChangeEvent::deleted();
        assert_eq!(deleted.kind, ChangeKind::Deleted);
        assert!(deleted.content.is_empty());
    }
}
