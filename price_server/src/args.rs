//! Command-line arguments for the price server.
use clap::Parser;
use price_common::net::{UPDATES_PORT, default_asset_list};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to accept live update subscribers on.
    #[clap(long, default_value_t = format!("0.0.0.0:{}", UPDATES_PORT))]
    pub bind: String,

    /// Milliseconds between two price updates.
    #[clap(long, default_value_t = 2000)]
    pub interval_ms: u64,

    /// Comma separated asset identifiers to generate prices for.
    #[clap(long, default_value_t = default_asset_list())]
    pub assets: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use price_common::net::{DEFAULT_ASSETS, parse_asset_list};

    #[test]
    fn defaults_serve_shared_assets_on_update_port() {
        let args = Args::parse_from(["price_server"]);
        assert_eq!(args.bind, "0.0.0.0:3001");
        assert_eq!(args.interval_ms, 2000);
        assert_eq!(parse_asset_list(&args.assets), DEFAULT_ASSETS);
    }
}
