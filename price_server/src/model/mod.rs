//! Domain models for the price server.
//!
//! - `price_board` — the current synthetic price of every asset and its random walk.
//! - `price_generator` — background ticker broadcasting `PriceEvent`s to subscribers.

pub mod price_board;
pub mod price_generator;
