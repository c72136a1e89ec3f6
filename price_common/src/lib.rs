//!
//! Common types and utilities shared by the price server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `PriceError` used across the workspace.
//! - `result` — handy `Result<T, PriceError>` alias.
//! - `prices` — price records, price mappings and display currencies.
//! - `wire` — live-update frames exchanged between client and server.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod prices;
pub mod result;
pub mod wire;

pub use error::PriceError;
pub use prices::{Currency, PriceMapping, PriceRecord};
pub use result::Result;
