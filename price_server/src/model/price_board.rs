//! Synthetic prices for the live update channel.
//!
//! A `PriceBoard` holds the full current `PriceMapping`. Every tick moves each
//! asset by the same small random factor in both currencies, so the USD/EUR
//! ratio of an asset never drifts.
use price_common::{PriceMapping, PriceRecord};
use rand::Rng;

/// Largest relative move of a single tick.
pub const MAX_CHANGE: f64 = 0.01;
/// Prices never fall below this value.
pub const MIN_PRICE: f64 = 0.01;

/// Starting quotes for well-known assets; anything else starts at 100 USD.
fn seed_price(asset: &str) -> PriceRecord {
    match asset {
        "bitcoin" => PriceRecord::new(50000.0, 40000.0),
        "ethereum" => PriceRecord::new(3000.0, 2500.0),
        "litecoin" => PriceRecord::new(150.0, 120.0),
        _ => PriceRecord::new(100.0, 92.0),
    }
}

/// Apply a relative `change` (e.g. `0.005` for +0.5%) to `price`, clamped to
/// [`MIN_PRICE`].
pub fn apply_change(price: f64, change: f64) -> f64 {
    (price * (1.0 + change)).max(MIN_PRICE)
}

/// Current synthetic price of every served asset.
#[derive(Debug, Clone)]
pub struct PriceBoard {
    prices: PriceMapping,
}

impl PriceBoard {
    /// Board seeded for `assets`.
    pub fn new<S: AsRef<str>>(assets: &[S]) -> Self {
        let prices = assets
            .iter()
            .map(|a| (a.as_ref().to_string(), seed_price(a.as_ref())))
            .collect();
        Self { prices }
    }

    /// Current mapping.
    pub fn snapshot(&self) -> &PriceMapping {
        &self.prices
    }

    /// Move every asset by a random change in `[-MAX_CHANGE, MAX_CHANGE)`.
    pub fn tick(&mut self) -> &PriceMapping {
        let mut rng = rand::rng();
        for record in self.prices.values_mut() {
            let change: f64 = rng.random_range(-MAX_CHANGE..MAX_CHANGE);
            record.usd = apply_change(record.usd, change);
            record.eur = apply_change(record.eur, change);
        }
        &self.prices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_assets_use_seed_prices() {
        let board = PriceBoard::new(&["bitcoin", "dogecoin"]);
        assert_eq!(board.snapshot()["bitcoin"], PriceRecord::new(50000.0, 40000.0));
        assert_eq!(board.snapshot()["dogecoin"], PriceRecord::new(100.0, 92.0));
    }

    #[test]
    fn change_is_relative_and_clamped() {
        assert_eq!(apply_change(100.0, 0.01), 101.0);
        assert_eq!(apply_change(0.01, -0.5), MIN_PRICE);
    }

    #[test]
    fn tick_stays_within_bounds_and_keeps_assets() {
        let mut board = PriceBoard::new(&["bitcoin", "ethereum", "litecoin"]);
        for _ in 0..100 {
            let before = board.snapshot().clone();
            let after = board.tick().clone();
            assert_eq!(
                before.keys().collect::<Vec<_>>(),
                after.keys().collect::<Vec<_>>()
            );
            for (asset, record) in &after {
                let old = before[asset];
                assert!(record.usd > 0.0 && record.eur > 0.0);
                assert!((record.usd / old.usd - 1.0).abs() <= MAX_CHANGE + 1e-9);
            }
        }
    }
}
