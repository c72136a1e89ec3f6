#![allow(dead_code)]

use std::sync::Mutex;

use price_client::PriceSource;
use price_common::{PriceError, PriceMapping, PriceRecord, Result};

pub fn mapping(entries: &[(&str, f64, f64)]) -> PriceMapping {
    entries
        .iter()
        .map(|(id, usd, eur)| (id.to_string(), PriceRecord::new(*usd, *eur)))
        .collect()
}

pub fn market() -> PriceMapping {
    mapping(&[
        ("bitcoin", 50000.0, 40000.0),
        ("ethereum", 3000.0, 2500.0),
        ("litecoin", 150.0, 120.0),
    ])
}

/// Source replaying a fixed list of outcomes, then failing.
pub struct ScriptedSource {
    outcomes: Mutex<Vec<Result<PriceMapping>>>,
}

impl ScriptedSource {
    pub fn new(mut outcomes: Vec<Result<PriceMapping>>) -> Self {
        outcomes.reverse();
        Self {
            outcomes: Mutex::new(outcomes),
        }
    }

    pub fn always_failing() -> Self {
        Self::new(Vec::new())
    }
}

impl PriceSource for ScriptedSource {
    fn fetch_prices(&self) -> Result<PriceMapping> {
        self.outcomes
            .lock()?
            .pop()
            .unwrap_or_else(|| Err(PriceError::Format("Failed to fetch data".to_string())))
    }
}
