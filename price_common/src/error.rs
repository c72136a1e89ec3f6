//! Error types shared between client and server.
//!
//! The `PriceError` enum unifies the failure cases of fetching prices over
//! HTTP, decoding live-update frames, socket I/O and channel communication so
//! every crate can propagate a single error type.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum PriceError {
    /// I/O error originating from sockets or the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level HTTP failure (connect, timeout, body decoding).
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The price API answered with a non-success status code.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A live-update frame that is syntactically valid but not usable.
    #[error("Frame error: {0}")]
    Frame(String),

    /// Invalid address or other malformed configuration value.
    #[error("Format error: {0}")]
    Format(String),

    /// Channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for PriceError {
    fn from(err: PoisonError<T>) -> Self {
        PriceError::MutexLock(err.to_string())
    }
}
