//! Line-oriented text rendering of the application state.
use price_common::{Currency, PriceMapping};

use crate::state::AppState;

/// Page title.
pub const TITLE: &str = "Chercher les prix de vos cryptomonnaies";
/// Shown in the input line while the search term is empty.
pub const PLACEHOLDER: &str = "Donner le nom du Crypto";
/// Search button label.
pub const SEARCH_LABEL: &str = "Rechercher";
/// Shown while a fetch is in flight.
pub const LOADING_TEXT: &str = "Loading...";
/// Shown when a search matched nothing.
pub const NO_RESULTS_TEXT: &str = "Aucun résultat trouvé";
/// Heading of the results list.
pub const RESULTS_HEADING: &str = "Crypto Prices";

/// Render `state` as the lines of one screen.
pub fn render(state: &AppState) -> Vec<String> {
    let mut lines = vec![TITLE.to_string()];

    if state.search_term.is_empty() {
        lines.push(format!("> {}", PLACEHOLDER));
    } else {
        lines.push(format!("> {}", state.search_term));
    }
    lines.push(format!("[{}]", SEARCH_LABEL));
    lines.push(currency_selectors(state.currency));

    if state.loading {
        lines.push(LOADING_TEXT.to_string());
    }
    if let Some(error) = &state.error {
        lines.push(error.clone());
    }
    if state.search_clicked {
        if let Some(results) = &state.search_results {
            if results.is_empty() {
                lines.push(NO_RESULTS_TEXT.to_string());
            } else {
                lines.extend(price_list(results, state.currency));
            }
        }
    }
    lines
}

/// Two mutually exclusive radio-style selectors, e.g. `(x) USD  ( ) EUR`.
fn currency_selectors(selected: Currency) -> String {
    Currency::all()
        .iter()
        .map(|c| {
            let mark = if *c == selected { 'x' } else { ' ' };
            format!("({}) {}", mark, c.label())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn price_list(results: &PriceMapping, currency: Currency) -> Vec<String> {
    let mut lines = vec![RESULTS_HEADING.to_string()];
    for (id, record) in results {
        lines.push(id.clone());
        lines.push(price_line(record.price(currency), currency));
    }
    lines
}

/// `Current price in $: 50000`.
pub fn price_line(price: f64, currency: Currency) -> String {
    format!("Current price in {}: {}", currency.symbol(), price)
}
