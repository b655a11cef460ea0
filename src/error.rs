//! Error types, one enum per layer.
//!
//! The state machine only ever sees [`FetchError`] (as banner text). Store and
//! config failures are logged at the edges and the application keeps running.

use thiserror::Error;

/// A search request that did not produce a result list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport, timeout or body decoding failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Failure of the persisted key-value slot.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Configuration file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not find home directory")]
    NoHome,
}
