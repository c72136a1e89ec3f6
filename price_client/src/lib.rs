//! Crypto price client.
//!
//! Fetches a price mapping from an HTTP price API, filters it by name,
//! switches the display currency and applies live updates pushed by the
//! price server. Modules:
//! - `state` — `AppState`, `Action` and the reducer.
//! - `search` — case-insensitive name filter.
//! - `app` — `PriceApp`, the fetch/search/update orchestration.
//! - `source` — `PriceSource` and its HTTP implementation.
//! - `updates` — live update `Subscription`.
//! - `input` / `view` — terminal input and text rendering.
//! - `runtime` — worker threads and the event loop.
#![warn(missing_docs)]
pub mod app;
pub mod args;
pub mod input;
pub mod runtime;
pub mod search;
pub mod source;
pub mod state;
pub mod updates;
pub mod view;

pub use app::{AppEvent, Effect, FetchRequest, PriceApp, FETCH_ERROR_MESSAGE};
pub use source::{HttpPriceSource, PriceSource};
pub use state::{Action, AppState};
