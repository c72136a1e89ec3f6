//! Case-insensitive name filtering of price mappings.
use price_common::PriceMapping;

/// Entries of `mapping` whose identifier contains `term`, ignoring case.
///
/// The term is used as typed; callers decide whether an empty term means
/// "no search" before calling this.
pub fn filter_by_term(mapping: &PriceMapping, term: &str) -> PriceMapping {
    let needle = term.to_lowercase();
    mapping
        .iter()
        .filter(|(id, _)| id.to_lowercase().contains(&needle))
        .map(|(id, record)| (id.clone(), *record))
        .collect()
}
