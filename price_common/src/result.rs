//! Result type alias shared across the workspace.
//!
//! Functions default the error type to the common `PriceError`, so they can
//! simply return `Result<T>`.
use crate::error::PriceError;

/// Workspace-wide `Result` alias with `PriceError` as the default error.
pub type Result<T, E = PriceError> = std::result::Result<T, E>;
