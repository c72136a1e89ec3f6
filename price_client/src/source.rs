//! Price data sources.
//!
//! The application only needs one operation from the outside world: "give me
//! the full current price mapping". `PriceSource` captures it so the fetch
//! orchestration can run against the CoinGecko HTTP API in production and
//! against canned mappings in tests.
use std::time::Duration;

use log::{debug, info};
#[cfg(test)]
use mockall::automock;
use price_common::{PriceError, PriceMapping, Result};
use reqwest::blocking::Client;

/// Anything able to produce a full price mapping.
#[cfg_attr(test, automock)]
pub trait PriceSource: Send + Sync {
    /// Fetch the complete price mapping.
    fn fetch_prices(&self) -> Result<PriceMapping>;
}

/// Blocking HTTP client for the "simple price" endpoint.
pub struct HttpPriceSource {
    client: Client,
    url: String,
    ids: Vec<String>,
}

impl HttpPriceSource {
    /// Create a source querying `ids` at `url` in USD and EUR.
    pub fn new(url: &str, ids: Vec<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("price_client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        info!("Price source: {} ids={}", url, ids.join(","));
        Ok(Self {
            client,
            url: url.to_string(),
            ids,
        })
    }

    /// Query parameters sent with every request.
    pub fn query(&self) -> [(&'static str, String); 2] {
        [("ids", self.ids.join(",")), ("vs_currencies", "usd,eur".to_string())]
    }
}

impl PriceSource for HttpPriceSource {
    fn fetch_prices(&self) -> Result<PriceMapping> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).query(&self.query()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::Status(status.as_u16()));
        }

        let mapping = response.json::<PriceMapping>()?;
        debug!("Received prices for {} assets", mapping.len());
        Ok(mapping)
    }
}
