//! Price Client — an interactive terminal client for cryptocurrency prices.
//! It loads prices from the CoinGecko simple price API, lets the user search
//! assets by name, switch between USD and EUR, and keeps the displayed prices
//! fresh with updates pushed by `price_server`.
//!
//! Usage example (CLI):
//! ```bash
//! price_client --updates-addr 127.0.0.1:3001 --currency eur
//! ```
//!
//! Type a name and press Enter to search; `:usd` / `:eur` switch currency,
//! `:search` searches again and `:quit` exits.
use std::io::{self, BufReader};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::unbounded;
use log::{info, warn};
use price_client::args::Args;
use price_client::runtime::{run_event_loop, spawn_fetch, spawn_input_reader, write_screen};
use price_client::updates::Subscription;
use price_client::{AppEvent, HttpPriceSource, PriceApp, PriceSource};
use price_common::net::parse_asset_list;
use price_common::{PriceError, Result};

fn main() -> Result<(), PriceError> {
    init_logger();
    let args = Args::parse();

    let source: Arc<dyn PriceSource> = Arc::new(HttpPriceSource::new(
        &args.api_url,
        parse_asset_list(&args.assets),
        Duration::from_secs(args.timeout_secs),
    )?);

    let mut app = PriceApp::new();
    app.handle_currency_change(args.currency);
    let mut stdout = io::stdout();

    if args.once {
        let request = app.mount(args.search.as_deref());
        let outcome = source.fetch_prices();
        app.complete_fetch(request, outcome);
        return write_screen(&mut stdout, &app);
    }

    let (tx, rx) = unbounded::<AppEvent>();
    {
        let tx = tx.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down client...");
            let _ = tx.send(AppEvent::Shutdown);
        })
        .map_err(|e| PriceError::Format(format!("Error setting Ctrl+C handler: {}", e)))?;
    }

    spawn_input_reader(BufReader::new(io::stdin()), tx.clone());

    let _subscription = if args.no_updates {
        None
    } else {
        match Subscription::connect(&args.updates_addr, tx.clone()) {
            Ok(subscription) => Some(subscription),
            Err(e) => {
                warn!(
                    "Live updates unavailable at {}: {}. Continuing without them.",
                    args.updates_addr, e
                );
                None
            }
        }
    };

    let request = app.mount(args.search.as_deref());
    spawn_fetch(source.clone(), request, tx.clone());
    write_screen(&mut stdout, &app)?;

    info!("Client is running. Type :quit or press Ctrl+C to exit.");
    run_event_loop(&mut app, &rx, &tx, source, &mut stdout)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
