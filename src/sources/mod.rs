//! Configuration source implementations.

mod config_source;
mod remote;

pub use config_source::{ConfigSource, ConfigWatcher};
pub use remote::{DEFAULT_NAMESPACE, RemoteFileSource, RemoteFileSourceBuilder};
