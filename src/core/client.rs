//! The converter controller: owns the catalog, the selection and the display
//! state, and drives the backend service.

use crate::core::conversion::{ConversionRequest, ConversionResult, ServiceError};
use crate::core::currency::CurrencyCatalog;
use crate::core::service::CurrencyService;
use crate::core::state::{Selection, UiState, View, render};
use crate::core::validation;
use anyhow::{Result, bail};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load currencies. Please try again.";

type StateObserver = Box<dyn FnMut(&UiState) + Send>;

/// A conversion that has been dispatched but not yet completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConversion {
    pub seq: u64,
    pub request: ConversionRequest,
}

pub struct ConverterClient<S> {
    service: S,
    catalog: Arc<CurrencyCatalog>,
    selection: Selection,
    state: UiState,
    default_from: String,
    default_to: String,
    last_seq: u64,
    observer: Option<StateObserver>,
}

impl<S: CurrencyService> ConverterClient<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            catalog: Arc::new(CurrencyCatalog::default()),
            selection: Selection::default(),
            state: UiState::Idle,
            default_from: "USD".to_string(),
            default_to: "EUR".to_string(),
            last_seq: 0,
            observer: None,
        }
    }

    /// Sets the currencies selected after a catalog load, when present.
    pub fn with_defaults(mut self, from: &str, to: &str) -> Self {
        self.default_from = from.to_string();
        self.default_to = to.to_string();
        self
    }

    /// Registers a callback invoked on every display state transition.
    pub fn on_state_change(&mut self, observer: impl FnMut(&UiState) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn catalog(&self) -> Arc<CurrencyCatalog> {
        Arc::clone(&self.catalog)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn view(&self) -> View {
        render(&self.state, &self.catalog)
    }

    fn set_state(&mut self, state: UiState) {
        self.state = state;
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.state);
        }
    }

    /// Fetches the currency catalog and resets the selection to the defaults.
    ///
    /// On failure the catalog is emptied, the selection cleared and a load
    /// error shown. Returns the number of currencies loaded.
    #[instrument(name = "LoadCurrencies", skip(self))]
    pub async fn load_currencies(&mut self) -> Result<usize, ServiceError> {
        match self.service.list_currencies().await {
            Ok(currencies) => {
                let catalog = CurrencyCatalog::new(currencies);
                debug!(count = catalog.len(), "Loaded currency catalog");

                self.selection.from = catalog.find(&self.default_from).map(|c| c.code.clone());
                self.selection.to = catalog.find(&self.default_to).map(|c| c.code.clone());
                let count = catalog.len();
                self.catalog = Arc::new(catalog);
                if self.state == UiState::ErrorShown(LOAD_FAILURE_MESSAGE.to_string()) {
                    self.set_state(UiState::Idle);
                }
                Ok(count)
            }
            Err(e) => {
                error!(error = %e, "Error loading currencies");
                self.catalog = Arc::new(CurrencyCatalog::default());
                self.selection.clear();
                self.set_state(UiState::ErrorShown(LOAD_FAILURE_MESSAGE.to_string()));
                Err(e)
            }
        }
    }

    pub fn select_from(&mut self, code: &str) -> Result<()> {
        self.selection.from = Some(self.known_code(code)?);
        Ok(())
    }

    pub fn select_to(&mut self, code: &str) -> Result<()> {
        self.selection.to = Some(self.known_code(code)?);
        Ok(())
    }

    fn known_code(&self, code: &str) -> Result<String> {
        match self.catalog.find(code.trim()) {
            Some(currency) => Ok(currency.code.clone()),
            None => bail!("Unknown currency: {}", code.trim()),
        }
    }

    /// Exchanges the source and target selections. No request is made.
    pub fn swap(&mut self) {
        self.selection.swap();
        debug!(from = ?self.selection.from, to = ?self.selection.to, "Swapped currencies");
    }

    /// Validates `amount_input` against the current selection and, if valid,
    /// runs the conversion to completion.
    ///
    /// Ignored while another conversion is in flight.
    pub async fn submit(&mut self, amount_input: &str) -> &UiState {
        if self.state.is_loading() {
            warn!("Conversion already in progress, ignoring submit");
            return &self.state;
        }

        if let Some(pending) = self.begin_conversion(amount_input) {
            let outcome = self.service.convert(&pending.request).await;
            self.finish_conversion(pending.seq, outcome);
        }
        &self.state
    }

    /// Clears the previous result or error, validates the input and, on
    /// success, switches to the loading state and hands back the request to
    /// send. Validation failures are shown immediately and return `None`.
    ///
    /// Every attempt, valid or not, supersedes any conversion still in flight.
    pub fn begin_conversion(&mut self, amount_input: &str) -> Option<PendingConversion> {
        self.set_state(UiState::Idle);
        self.last_seq += 1;

        let request = match validation::validate(
            amount_input,
            self.selection.from.as_deref(),
            self.selection.to.as_deref(),
        ) {
            Ok(request) => request,
            Err(e) => {
                debug!(error = ?e, "Conversion input rejected");
                self.set_state(UiState::ErrorShown(e.to_string()));
                return None;
            }
        };

        let pending = PendingConversion {
            seq: self.last_seq,
            request,
        };
        debug!(seq = pending.seq, request = ?pending.request, "Dispatching conversion");
        self.set_state(UiState::Loading);
        Some(pending)
    }

    /// Applies the outcome of the conversion dispatched as `seq`.
    ///
    /// Outcomes of superseded requests are dropped so a late response never
    /// replaces a newer one. Returns whether the outcome was applied.
    pub fn finish_conversion(
        &mut self,
        seq: u64,
        outcome: Result<ConversionResult, ServiceError>,
    ) -> bool {
        if seq != self.last_seq {
            debug!(seq, latest = self.last_seq, "Discarding superseded conversion response");
            return false;
        }

        let state = match outcome {
            Ok(result) => UiState::ResultShown(result),
            Err(e) => {
                error!(error = %e, "Conversion error");
                UiState::ErrorShown(e.conversion_message())
            }
        };
        self.set_state(state);
        true
    }

    /// Asks the backend to refresh its rates against `base_currency`.
    pub async fn refresh_rates(&self, base_currency: &str) -> Result<String, ServiceError> {
        self.service.refresh_rates(base_currency).await
    }
}
