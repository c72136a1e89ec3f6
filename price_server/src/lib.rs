//! Live update server for crypto prices.
//!
//! Clients connect over TCP, send a subscription line and then receive a
//! `priceUpdate` frame with the full price mapping at every generator tick.
//! The building blocks are:
//!
//! - `PriceGenerator` — ticks a `PriceBoard` and broadcasts `PriceEvent`s to all
//!   subscribers via `crossbeam_channel` senders.
//! - `UpdateListener` — accepts TCP connections and hands them to the main loop.
//! - `handle_client_stream` — one thread per client, writing frames until the
//!   client disconnects or the generator shuts down.
//! - `serve` — the main loop wiring the three together.
#![warn(missing_docs)]
pub mod args;
pub mod listener;
pub mod model;
pub mod server;
pub mod stream;

pub use listener::UpdateListener;
pub use model::price_board::PriceBoard;
pub use model::price_generator::{PriceEvent, PriceGenerator};
pub use server::serve;
