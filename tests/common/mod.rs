//! In-memory config center used by the integration tests.
//!
//! Plays the role of the remote center's client SDK and admin API at once:
//! tests create and publish files through it the way an operator would, and
//! the source under test resolves and watches those files through the
//! [`ConfigClient`] seam.

// Each test binary uses a different subset of the admin API.
#![allow(dead_code)]

use async_trait::async_trait;
use confpull::client::{ChangeEvent, ConfigClient, ConfigFile};
use confpull::error::BoxError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type FileKey = (String, String, String);

struct FileState {
    name: String,
    content: String,
    subscribers: Vec<mpsc::Sender<ChangeEvent>>,
}

impl FileState {
    fn broadcast(&mut self, event: ChangeEvent) {
        // Subscribers that went away are pruned, like a real transport
        // dropping delivery to closed channels.
        self.subscribers
            .retain(|sender| sender.try_send(event.clone()).is_ok());
    }
}

/// Handle onto one file in the fake center.
struct CenterFile {
    state: Arc<Mutex<FileState>>,
}

impl ConfigFile for CenterFile {
    fn file_name(&self) -> String {
        self.state.lock().unwrap().name.clone()
    }

    fn content(&self) -> String {
        self.state.lock().unwrap().content.clone()
    }

    fn subscribe_changes(&self, sender: mpsc::Sender<ChangeEvent>) {
        self.state.lock().unwrap().subscribers.push(sender);
    }
}

/// The fake config center.
pub struct InMemoryCenter {
    files: Mutex<HashMap<FileKey, Arc<Mutex<FileState>>>>,
}

impl InMemoryCenter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            files: Mutex::new(HashMap::new()),
        })
    }

    fn state(&self, namespace: &str, group: &str, name: &str) -> Option<Arc<Mutex<FileState>>> {
        let key = (
            namespace.to_string(),
            group.to_string(),
            name.to_string(),
        );
        self.files.lock().unwrap().get(&key).cloned()
    }

    /// Create and publish a file, the admin-API way.
    pub fn create(&self, namespace: &str, group: &str, name: &str, content: &str) {
        let key = (
            namespace.to_string(),
            group.to_string(),
            name.to_string(),
        );
        let state = Arc::new(Mutex::new(FileState {
            name: name.to_string(),
            content: content.to_string(),
            subscribers: Vec::new(),
        }));
        self.files.lock().unwrap().insert(key, state);
    }

    /// Publish new content and notify every subscriber.
    pub fn publish_update(&self, namespace: &str, group: &str, name: &str, content: &str) {
        let state = self
            .state(namespace, group, name)
            .expect("publish_update on a file that was never created");
        let mut state = state.lock().unwrap();

        let previous = std::mem::replace(&mut state.content, content.to_string());
        let event = ChangeEvent::modified(content).with_previous(previous);
        state.broadcast(event);
    }

    /// Rename the file as seen by already-resolved handles.
    pub fn rename(&self, namespace: &str, group: &str, name: &str, new_name: &str) {
        let state = self
            .state(namespace, group, name)
            .expect("rename on a file that was never created");
        state.lock().unwrap().name = new_name.to_string();
    }

    /// Delete the file: subscribers get a deletion event, then delivery ends.
    pub fn delete(&self, namespace: &str, group: &str, name: &str) {
        let key = (
            namespace.to_string(),
            group.to_string(),
            name.to_string(),
        );
        if let Some(state) = self.files.lock().unwrap().remove(&key) {
            let mut state = state.lock().unwrap();
            let previous = std::mem::take(&mut state.content);
            state.broadcast(ChangeEvent::deleted().with_previous(previous));
            state.subscribers.clear();
        }
    }
}

#[async_trait]
impl ConfigClient for InMemoryCenter {
    async fn resolve_file(
        &self,
        namespace: &str,
        file_group: &str,
        file_name: &str,
    ) -> Result<Arc<dyn ConfigFile>, BoxError> {
        match self.state(namespace, file_group, file_name) {
            Some(state) => Ok(Arc::new(CenterFile { state })),
            None => Err(format!("config file {namespace}/{file_group}/{file_name} not found").into()),
        }
    }
}
