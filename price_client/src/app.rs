//! Fetch, search, currency and live-update orchestration.
//!
//! `PriceApp` owns the [`Store`] and turns user intents and external events
//! into actions. Network I/O never happens here directly: starting a fetch
//! yields a [`FetchRequest`] that the runtime executes (inline or on a worker
//! thread) and hands back to [`PriceApp::complete_fetch`] together with its
//! outcome. Completions are applied in arrival order, so an older response
//! that resolves last overwrites newer state.
use log::{debug, info, warn};
use price_common::{Currency, PriceMapping, Result};

use crate::input::UserInput;
use crate::search::filter_by_term;
use crate::source::PriceSource;
use crate::state::{Action, AppState, Store};

/// Error text shown when a fetch fails.
pub const FETCH_ERROR_MESSAGE: &str =
    "Une erreur s'est produite lors de la récupération des données.";

/// An issued fetch, carrying the search term that was active when it started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic request number, starting at 1.
    pub id: u64,
    /// Search term captured at fetch start.
    pub search_term: String,
}

/// Everything the event loop can receive.
#[derive(Debug)]
pub enum AppEvent {
    /// A parsed line typed by the user.
    Input(UserInput),
    /// A fetch finished, successfully or not.
    FetchCompleted(FetchRequest, Result<PriceMapping>),
    /// The live update channel pushed a replacement mapping.
    PriceUpdate(PriceMapping),
    /// The live update channel went away.
    UpdatesClosed,
    /// Ctrl+C or end of input.
    Shutdown,
}

/// Follow-up work the runtime must perform after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do besides re-rendering.
    Idle,
    /// Execute this fetch and report back with `AppEvent::FetchCompleted`.
    Fetch(FetchRequest),
    /// Leave the event loop.
    Quit,
}

/// The top-level controller.
#[derive(Debug, Default)]
pub struct PriceApp {
    store: Store,
    issued: u64,
    latest_completed: u64,
}

impl PriceApp {
    /// Controller with the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller starting from an arbitrary state.
    pub fn with_state(state: AppState) -> Self {
        Self {
            store: Store::with_state(state),
            ..Self::default()
        }
    }

    /// Current state, for rendering.
    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// First fetch of the session. When `initial_term` is given it is
    /// searched for right away, otherwise the full mapping is loaded.
    pub fn mount(&mut self, initial_term: Option<&str>) -> FetchRequest {
        if let Some(term) = initial_term {
            self.handle_search_term(term);
            if let Some(request) = self.handle_search() {
                return request;
            }
        }
        self.begin_fetch()
    }

    /// Mark a fetch as started and return the request to execute.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.store.dispatch(Action::SetLoading(true));
        self.store.dispatch(Action::SetError(None));
        self.issued += 1;
        let request = FetchRequest {
            id: self.issued,
            search_term: self.state().search_term.clone(),
        };
        debug!("Fetch #{} started (term={:?})", request.id, request.search_term);
        request
    }

    /// Apply the outcome of `request`.
    pub fn complete_fetch(&mut self, request: FetchRequest, outcome: Result<PriceMapping>) {
        if request.id < self.latest_completed {
            debug!(
                "Fetch #{} resolved after #{}; applying anyway",
                request.id, self.latest_completed
            );
        }
        self.latest_completed = self.latest_completed.max(request.id);

        match outcome {
            Ok(mapping) => {
                info!("Fetch #{} returned {} assets", request.id, mapping.len());
                let results = if request.search_term.is_empty() {
                    None
                } else {
                    Some(filter_by_term(&mapping, &request.search_term))
                };
                self.store.dispatch(Action::SetData(mapping));
                self.store.dispatch(Action::SetSearchResults(results));
            }
            Err(e) => {
                warn!("Fetch #{} failed: {}", request.id, e);
                self.store
                    .dispatch(Action::SetError(Some(FETCH_ERROR_MESSAGE.to_string())));
            }
        }
        self.store.dispatch(Action::SetLoading(false));
    }

    /// Run a whole fetch against `source` on the calling thread.
    pub fn fetch_data(&mut self, source: &dyn PriceSource) {
        let request = self.begin_fetch();
        let outcome = source.fetch_prices();
        self.complete_fetch(request, outcome);
    }

    /// Input binding: replace the search term.
    pub fn handle_search_term(&mut self, text: &str) {
        self.store.dispatch(Action::SetSearchTerm(text.to_string()));
    }

    /// Search button: start a fetch unless the term is blank.
    pub fn handle_search(&mut self) -> Option<FetchRequest> {
        if self.state().search_term.trim().is_empty() {
            debug!("Search ignored: empty term");
            return None;
        }
        self.store.dispatch(Action::SetSearchClicked(true));
        Some(self.begin_fetch())
    }

    /// Currency selector. Display only, never refetches.
    pub fn handle_currency_change(&mut self, currency: Currency) {
        self.store.dispatch(Action::SetCurrency(currency));
    }

    /// A mapping pushed by the live update channel.
    pub fn apply_update(&mut self, mapping: PriceMapping) {
        debug!("Live update with {} assets", mapping.len());
        let term = self.state().search_term.clone();
        let results = (!term.is_empty()).then(|| filter_by_term(&mapping, &term));
        self.store.dispatch(Action::SetData(mapping));
        if let Some(results) = results {
            self.store.dispatch(Action::SetSearchResults(Some(results)));
        }
    }

    /// Route one event and report what the runtime should do next.
    pub fn handle_event(&mut self, event: AppEvent) -> Effect {
        match event {
            AppEvent::Input(UserInput::Search(text)) => {
                self.handle_search_term(&text);
                self.handle_search().map_or(Effect::Idle, Effect::Fetch)
            }
            AppEvent::Input(UserInput::SearchAgain) => {
                self.handle_search().map_or(Effect::Idle, Effect::Fetch)
            }
            AppEvent::Input(UserInput::Currency(currency)) => {
                self.handle_currency_change(currency);
                Effect::Idle
            }
            AppEvent::Input(UserInput::Quit) | AppEvent::Shutdown => Effect::Quit,
            AppEvent::FetchCompleted(request, outcome) => {
                self.complete_fetch(request, outcome);
                Effect::Idle
            }
            AppEvent::PriceUpdate(mapping) => {
                self.apply_update(mapping);
                Effect::Idle
            }
            AppEvent::UpdatesClosed => {
                warn!("Live update channel closed; prices will only change on search");
                Effect::Idle
            }
        }
    }
}
