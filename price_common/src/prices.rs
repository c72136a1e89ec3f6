//! Price records, price mappings and display currencies.
//!
//! A `PriceMapping` is the payload of both the price API and the live update
//! channel: asset identifier → `PriceRecord`. Mappings are never merged; every
//! fetch or push replaces the previous one wholesale.
use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Per-currency price of a single asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Price in US dollars.
    pub usd: f64,
    /// Price in euros.
    pub eur: f64,
}

impl PriceRecord {
    /// Create a record from both quotes.
    pub fn new(usd: f64, eur: f64) -> Self {
        Self { usd, eur }
    }

    /// Price expressed in `currency`. No conversion is performed.
    pub fn price(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
        }
    }
}

/// Asset identifier → price record, ordered by identifier.
pub type PriceMapping = BTreeMap<String, PriceRecord>;

/// Currency selected for display.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Currency {
    /// US dollar.
    #[default]
    Usd,
    /// Euro.
    Eur,
}

impl Currency {
    /// Symbol used in price lines.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    /// Upper-case label used by the currency selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Every selectable currency, in display order.
    pub fn all() -> [Currency; 2] {
        [Currency::Usd, Currency::Eur]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mapping_decodes_simple_price_payload() {
        let body = r#"{
            "litecoin": {"usd": 150, "eur": 120},
            "bitcoin": {"usd": 50000, "eur": 40000.5}
        }"#;
        let mapping: PriceMapping = serde_json::from_str(body).unwrap();

        assert_eq!(
            mapping.keys().cloned().collect::<Vec<_>>(),
            vec!["bitcoin".to_string(), "litecoin".to_string()]
        );
        assert_eq!(mapping["bitcoin"], PriceRecord::new(50000.0, 40000.5));
    }

    #[test]
    fn record_missing_a_currency_is_rejected() {
        let body = r#"{"bitcoin": {"usd": 50000}}"#;
        assert!(serde_json::from_str::<PriceMapping>(body).is_err());
    }

    #[test]
    fn record_selects_price_by_currency() {
        let record = PriceRecord::new(3000.0, 2500.0);
        assert_eq!(record.price(Currency::Usd), 3000.0);
        assert_eq!(record.price(Currency::Eur), 2500.0);
    }

    #[test]
    fn currency_names_and_symbols() {
        assert_eq!(Currency::default(), Currency::Usd);
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!(Currency::Eur.to_string(), "eur");
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"usd\"");
        assert!("gbp".parse::<Currency>().is_err());
    }
}
