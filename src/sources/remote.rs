//! Remote config-center file source.

use super::{ConfigSource, ConfigWatcher};
use crate::client::{ConfigClient, ConfigFile};
use crate::error::{Result, SourceError};
use crate::notify::FileWatcher;
use crate::record::KeyValue;
use async_trait::async_trait;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::time;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Configuration source backed by one file in a remote config center.
///
/// The source addresses its file by the (namespace, group, file name)
/// triple, resolves it through an injected [`ConfigClient`] on
/// [`load()`](ConfigSource::load), and hands the resolved handle to every
/// watcher created afterwards. Construction validates the identity but
/// performs no remote calls, so option handling is testable without a
/// config center.
///
/// # Examples
///
/// ```rust,no_run
/// use confpull::prelude::*;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # async fn example(client: Arc<dyn confpull::client::ConfigClient>) -> confpull::error::Result<()> {
/// let source = RemoteFileSource::builder(client)
///     .with_namespace("default")
///     .with_file_group("ordering")
///     .with_file_name("service.yaml")
///     .with_timeout(Duration::from_secs(5))
///     .build()?;
///
/// let records = source.load().await?;
/// let watcher = source.watch().await?;
/// let updated = watcher.next().await?;
/// # Ok(())
/// # }
/// ```
pub struct RemoteFileSource {
    client: Arc<dyn ConfigClient>,
    namespace: String,
    file_group: String,
    file_name: String,
    timeout: Option<Duration>,
    /// Pinned by the first successful load; watchers borrow it from here.
    file: RwLock<Option<Arc<dyn ConfigFile>>>,
}

impl RemoteFileSource {
    /// Create a new builder for constructing a remote file source.
    pub fn builder(client: Arc<dyn ConfigClient>) -> RemoteFileSourceBuilder {
        RemoteFileSourceBuilder::new(client)
    }

    async fn resolve(&self) -> Result<Arc<dyn ConfigFile>> {
        let resolve = self
            .client
            .resolve_file(&self.namespace, &self.file_group, &self.file_name);

        match self.timeout {
            Some(limit) => time::timeout(limit, resolve)
                .await
                .map_err(|elapsed| SourceError::Resolution(Box::new(elapsed)))?
                .map_err(SourceError::Resolution),
            None => resolve.await.map_err(SourceError::Resolution),
        }
    }
}

#[async_trait]
impl ConfigSource for RemoteFileSource {
    async fn load(&self) -> Result<Vec<KeyValue>> {
        let file = self.resolve().await?;

        // Pin the handle for watch(); repeat loads re-pin.
        *self.file.write().unwrap() = Some(Arc::clone(&file));

        let content = file.content();
        tracing::debug!(
            namespace = %self.namespace,
            file_group = %self.file_group,
            file = %self.file_name,
            "loaded remote config file"
        );

        Ok(vec![KeyValue::for_file(&self.file_name, &content)])
    }

    async fn watch(&self) -> Result<Box<dyn ConfigWatcher>> {
        let file = self
            .file
            .read()
            .unwrap()
            .clone()
            .ok_or(SourceError::NotInitialized)?;

        Ok(Box::new(FileWatcher::new(file)))
    }
}

impl fmt::Debug for RemoteFileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteFileSource")
            .field("namespace", &self.namespace)
            .field("file_group", &self.file_group)
            .field("file_name", &self.file_name)
            .field("timeout", &self.timeout)
            .field("loaded", &self.file.read().unwrap().is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`RemoteFileSource`].
///
/// Options are applied over defaults; validation runs in [`build()`](Self::build)
/// after every option has been applied.
///
/// # Examples
///
/// ```rust,no_run
/// use confpull::sources::RemoteFileSource;
/// use std::sync::Arc;
///
/// # fn example(client: Arc<dyn confpull::client::ConfigClient>) -> confpull::error::Result<()> {
/// let source = RemoteFileSource::builder(client)
///     .with_file_group("payments")
///     .with_file_name("service.yaml")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct RemoteFileSourceBuilder {
    client: Arc<dyn ConfigClient>,
    namespace: String,
    file_group: String,
    file_name: String,
    timeout: Option<Duration>,
}

impl RemoteFileSourceBuilder {
    /// Create a builder with default settings.
    pub fn new(client: Arc<dyn ConfigClient>) -> Self {
        Self {
            client,
            namespace: DEFAULT_NAMESPACE.to_string(),
            file_group: String::new(),
            file_name: String::new(),
            timeout: None,
        }
    }

    /// Set the config-center namespace.
    ///
    /// Defaults to `"default"`; an empty value falls back to the default.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the file group. Required.
    pub fn with_file_group(mut self, file_group: impl Into<String>) -> Self {
        self.file_group = file_group.into();
        self
    }

    /// Set the file name. Required.
    ///
    /// The name doubles as the record key, and its extension becomes the
    /// record's format hint.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Bound the time a single load may spend resolving the file.
    ///
    /// Default is unbounded. Expiry surfaces as
    /// [`SourceError::Resolution`](crate::error::SourceError::Resolution).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the source.
    ///
    /// Performs no remote calls.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Validation`](crate::error::SourceError::Validation)
    /// if the file group or file name is empty once all options are applied.
    pub fn build(self) -> Result<RemoteFileSource> {
        if self.file_group.is_empty() {
            return Err(SourceError::Validation(
                "file_group must not be empty".to_string(),
            ));
        }
        if self.file_name.is_empty() {
            return Err(SourceError::Validation(
                "file_name must not be empty".to_string(),
            ));
        }

        let namespace = if self.namespace.is_empty() {
            DEFAULT_NAMESPACE.to_string()
        } else {
            self.namespace
        };

        Ok(RemoteFileSource {
            client: self.client,
            namespace,
            file_group: self.file_group,
            file_name: self.file_name,
            timeout: self.timeout,
            file: RwLock::new(None),
        })
    }
}
