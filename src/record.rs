//! The key/value record emitted by sources and watchers.

use serde::{Deserialize, Serialize};

/// One logical configuration entry.
///
/// Both [`ConfigSource::load`](crate::sources::ConfigSource::load) and
/// [`ConfigWatcher::next`](crate::sources::ConfigWatcher::next) emit records of this
/// shape: the key is the remote file name, the value is the raw content
/// bytes, and the format is an extension-derived hint for downstream
/// parsers. This crate never interprets the format itself.
///
/// # Examples
///
/// ```rust
/// use confpull::record::KeyValue;
///
/// let kv = KeyValue::for_file("default.yaml", "server:\n  port: 8080");
/// assert_eq!(kv.key, "default.yaml");
/// assert_eq!(kv.format, "yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// Record key; for file-backed sources this is the file name.
    pub key: String,
    /// Raw content bytes.
    pub value: Vec<u8>,
    /// Extension-derived format hint, empty when the name has no extension.
    pub format: String,
}

impl KeyValue {
    /// Build the record for a config file's current content.
    ///
    /// Key and format are both derived from `file_name`; the content travels
    /// as raw bytes.
    pub fn for_file(file_name: &str, content: &str) -> Self {
        Self {
            key: file_name.to_string(),
            value: content.as_bytes().to_vec(),
            format: format_hint(file_name).to_string(),
        }
    }
}

/// Derive the format hint from a file name.
///
/// Returns the text after the last `.`, case preserved, or the empty string
/// when the name contains no `.`.
///
/// # Examples
///
/// ```rust
/// use confpull::record::format_hint;
///
/// assert_eq!(format_hint("config.yaml"), "yaml");
/// assert_eq!(format_hint("archive.tar.gz"), "gz");
/// assert_eq!(format_hint("Procfile"), "");
/// ```
pub fn format_hint(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension)
        .unwrap_or("")
}
