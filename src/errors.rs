//! Error taxonomy for the reconciliation daemon.
//!
//! Transient failures (`DirectoryError`) are retried on the next poll tick;
//! configuration failures are fatal before the loop starts. Sink delivery
//! failures are not errors at all: sinks report them as a boolean so the
//! loop keeps running.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Coordination-store failures, transient by definition
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Configuration loading failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration validation failures
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Filesystem failures surfaced by utility helpers
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    SignalSenderClosed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Connection or query failure against the coordination store.
    /// The current tick is skipped and retried on the next one.
    #[error("Coordination store unavailable: {0}")]
    Unavailable(String),

    /// A single registration payload that does not decode into
    /// `{address, port}`. Logged at warning level and skipped per entry.
    #[error("Malformed registration at {path}: {reason}")]
    MalformedRegistration { path: String, reason: String },
}
