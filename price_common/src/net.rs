//! Shared networking constants and helpers used by client and server.

/// TCP port of the live update channel (server -> client pushes).
pub const UPDATES_PORT: u16 = 3001;

/// Host the client connects to for live updates by default.
pub const UPDATES_HOST: &str = "127.0.0.1";

/// Base URL of the CoinGecko "simple price" endpoint.
pub const SIMPLE_PRICE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Assets requested from the price API and generated by the server by default.
pub const DEFAULT_ASSETS: [&str; 3] = ["bitcoin", "ethereum", "litecoin"];

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Address of the live update channel on the local machine.
pub fn default_updates_addr() -> String {
    addr(UPDATES_HOST, UPDATES_PORT)
}

/// `DEFAULT_ASSETS` as a comma separated list, the form CLI flags take.
pub fn default_asset_list() -> String {
    DEFAULT_ASSETS.join(",")
}

/// Split a comma separated asset list, dropping blanks and surrounding spaces.
pub fn parse_asset_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}
