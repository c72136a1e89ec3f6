//! Command-line arguments for the price client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use price_common::Currency;
use price_common::net::{SIMPLE_PRICE_URL, default_asset_list, default_updates_addr};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Price API endpoint returning a simple price mapping.
    #[clap(long, default_value = SIMPLE_PRICE_URL)]
    pub api_url: String,

    /// Comma separated asset identifiers to request.
    #[clap(long, default_value_t = default_asset_list())]
    pub assets: String,

    /// Address of the live update channel.
    #[clap(long, default_value_t = default_updates_addr())]
    pub updates_addr: String,

    /// Do not subscribe to live updates.
    #[clap(long)]
    pub no_updates: bool,

    /// Initial display currency.
    #[clap(long, value_enum, default_value_t = Currency::Usd)]
    pub currency: Currency,

    /// Search for this term as soon as the client starts.
    #[clap(long)]
    pub search: Option<String>,

    /// HTTP timeout for price requests, in seconds.
    #[clap(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Fetch once, print the screen and exit.
    #[clap(long)]
    pub once: bool,
}
