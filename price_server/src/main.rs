//! Price update server.
//!
//! Pushes synthetic `priceUpdate` events to every connected `price_client`.
//!
//! Usage example (CLI):
//! ```bash
//! price_server --bind 0.0.0.0:3001 --interval-ms 1000
//! ```
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::bounded;
use log::info;
use price_common::net::parse_asset_list;
use price_common::{PriceError, Result};
use price_server::args::Args;
use price_server::{PriceBoard, PriceGenerator, UpdateListener, serve};

fn main() -> Result<(), PriceError> {
    init_logger();
    let args = Args::parse();

    let assets = parse_asset_list(&args.assets);
    if assets.is_empty() {
        return Err(PriceError::Format("--assets must name at least one asset".to_string()));
    }
    let listener = UpdateListener::bind(&args.bind)?;
    let generator = PriceGenerator::start(
        PriceBoard::new(&assets),
        Duration::from_millis(args.interval_ms.max(1)),
    );

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down server...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| PriceError::Format(format!("Error setting Ctrl+C handler: {}", e)))?;

    let result = serve(listener, &generator, shutdown_rx);
    generator.stop();
    result
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
