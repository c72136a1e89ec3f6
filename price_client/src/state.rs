//! Application state and the reducer that drives it.
//!
//! `AppState` is never mutated in place: every `Action` produces a new state
//! through [`reduce`], and the [`Store`] swaps it in wholesale.
use log::debug;
use price_common::{Currency, PriceMapping};
use strum_macros::AsRefStr;

/// Everything the view needs to render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Full last-known price set.
    pub data: Option<PriceMapping>,
    /// Filter text typed by the user.
    pub search_term: String,
    /// Entries of `data` matching `search_term` when they were derived.
    pub search_results: Option<PriceMapping>,
    /// True only while a fetch is in flight.
    pub loading: bool,
    /// Message of the most recent failed fetch.
    pub error: Option<String>,
    /// Display currency.
    pub currency: Currency,
    /// Set once the user explicitly triggered a search.
    pub search_clicked: bool,
}

/// State transitions, one per field.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetData(PriceMapping),
    SetSearchTerm(String),
    SetSearchResults(Option<PriceMapping>),
    SetLoading(bool),
    SetError(Option<String>),
    SetCurrency(Currency),
    SetSearchClicked(bool),
}

impl Action {
    /// Name of the action kind, e.g. `SET_DATA`.
    pub fn kind(&self) -> &str {
        self.as_ref()
    }
}

/// Pure transition function: returns the state that follows `action`.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::SetData(data) => AppState {
            data: Some(data),
            ..state.clone()
        },
        Action::SetSearchTerm(search_term) => AppState {
            search_term,
            ..state.clone()
        },
        Action::SetSearchResults(search_results) => AppState {
            search_results,
            ..state.clone()
        },
        Action::SetLoading(loading) => AppState {
            loading,
            ..state.clone()
        },
        Action::SetError(error) => AppState {
            error,
            ..state.clone()
        },
        Action::SetCurrency(currency) => AppState {
            currency,
            ..state.clone()
        },
        Action::SetSearchClicked(search_clicked) => AppState {
            search_clicked,
            ..state.clone()
        },
    }
}

/// Owner of the current state.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    /// Store seeded with `state` instead of the defaults.
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply `action` and replace the current state with the result.
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatch {}", action.kind());
        self.state = reduce(&self.state, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use price_common::PriceRecord;

    fn mapping(entries: &[(&str, f64, f64)]) -> PriceMapping {
        entries
            .iter()
            .map(|(id, usd, eur)| (id.to_string(), PriceRecord::new(*usd, *eur)))
            .collect()
    }

    fn populated() -> AppState {
        AppState {
            data: Some(mapping(&[("bitcoin", 50000.0, 40000.0)])),
            search_term: "bit".to_string(),
            search_results: Some(PriceMapping::new()),
            loading: true,
            error: Some("boom".to_string()),
            currency: Currency::Eur,
            search_clicked: true,
        }
    }

    #[test]
    fn initial_state_matches_mount_values() {
        let state = AppState::default();
        assert_eq!(state.data, None);
        assert_eq!(state.search_term, "");
        assert_eq!(state.search_results, None);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.currency, Currency::Usd);
        assert!(!state.search_clicked);
    }

    #[test]
    fn set_data_replaces_only_data() {
        let before = populated();
        let data = mapping(&[("crypto", 100.0, 90.0)]);
        let after = reduce(&before, Action::SetData(data.clone()));
        assert_eq!(after, AppState { data: Some(data), ..before });
    }

    #[test]
    fn set_search_term_replaces_only_search_term() {
        let before = populated();
        let after = reduce(&before, Action::SetSearchTerm("bitcoin".to_string()));
        assert_eq!(
            after,
            AppState {
                search_term: "bitcoin".to_string(),
                ..before
            }
        );
    }

    #[test]
    fn set_search_results_replaces_only_search_results() {
        let before = populated();
        let results = mapping(&[("bitcoin", 100.0, 0.0)]);
        let after = reduce(&before, Action::SetSearchResults(Some(results.clone())));
        assert_eq!(
            after,
            AppState {
                search_results: Some(results),
                ..before.clone()
            }
        );

        let cleared = reduce(&before, Action::SetSearchResults(None));
        assert_eq!(cleared.search_results, None);
        assert_eq!(cleared.data, before.data);
    }

    #[test]
    fn set_loading_replaces_only_loading() {
        let before = AppState::default();
        let after = reduce(&before, Action::SetLoading(true));
        assert_eq!(after, AppState { loading: true, ..before });
    }

    #[test]
    fn set_error_replaces_only_error() {
        let before = AppState::default();
        let after = reduce(&before, Action::SetError(Some("An error occurred".to_string())));
        assert_eq!(
            after,
            AppState {
                error: Some("An error occurred".to_string()),
                ..before
            }
        );
    }

    #[test]
    fn set_currency_replaces_only_currency() {
        let before = AppState::default();
        let after = reduce(&before, Action::SetCurrency(Currency::Eur));
        assert_eq!(
            after,
            AppState {
                currency: Currency::Eur,
                ..before
            }
        );
    }

    #[test]
    fn set_search_clicked_replaces_only_search_clicked() {
        let before = AppState::default();
        let after = reduce(&before, Action::SetSearchClicked(true));
        assert_eq!(
            after,
            AppState {
                search_clicked: true,
                ..before
            }
        );
    }

    #[test]
    fn reapplying_current_values_leaves_state_equal() {
        let state = populated();
        let actions = vec![
            Action::SetData(state.data.clone().unwrap()),
            Action::SetSearchTerm(state.search_term.clone()),
            Action::SetSearchResults(state.search_results.clone()),
            Action::SetLoading(state.loading),
            Action::SetError(state.error.clone()),
            Action::SetCurrency(state.currency),
            Action::SetSearchClicked(state.search_clicked),
        ];
        for action in actions {
            assert_eq!(reduce(&state, action), state);
        }
    }

    #[test]
    fn action_kinds_use_screaming_snake_case() {
        assert_eq!(Action::SetData(PriceMapping::new()).kind(), "SET_DATA");
        assert_eq!(Action::SetSearchClicked(true).kind(), "SET_SEARCH_CLICKED");
    }

    #[test]
    fn store_replaces_state_on_dispatch() {
        let mut store = Store::default();
        store.dispatch(Action::SetLoading(true));
        store.dispatch(Action::SetCurrency(Currency::Eur));
        assert!(store.state().loading);
        assert_eq!(store.state().currency, Currency::Eur);
    }
}
