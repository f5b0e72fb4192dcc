//! Display state of the converter and the pure state-to-view mapping.

use crate::core::conversion::ConversionResult;
use crate::core::currency::CurrencyCatalog;
use crate::core::format::{format_amount, format_rate, format_timestamp_in};
use chrono::{Local, TimeZone};
use std::fmt::Display;

/// The currently selected currency pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl Selection {
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub fn clear(&mut self) {
        self.from = None;
        self.to = None;
    }
}

/// What the converter is showing. Exactly one variant is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    ResultShown(ConversionResult),
    ErrorShown(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Converted amount with 2 decimals, without symbol or code.
    pub converted_amount: String,
    /// Exchange rate with 6 decimals.
    pub exchange_rate: String,
    /// e.g. `€ 92.50 EUR`
    pub amount_line: String,
    /// e.g. `$ 100.00 USD`, present when the backend echoes the amount.
    pub source_line: Option<String>,
    /// e.g. `1 USD = 0.925000 EUR`
    pub rate_line: String,
    pub timestamp_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub submit_enabled: bool,
    pub loading: bool,
    pub result: Option<ResultView>,
    pub error: Option<String>,
}

/// Maps a state to what should be displayed, resolving symbols against
/// `catalog` and timestamps in the local time zone.
pub fn render(state: &UiState, catalog: &CurrencyCatalog) -> View {
    render_in(state, catalog, &Local)
}

pub fn render_in<Tz>(state: &UiState, catalog: &CurrencyCatalog, tz: &Tz) -> View
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut view = View {
        submit_enabled: true,
        loading: false,
        result: None,
        error: None,
    };

    match state {
        UiState::Idle => {}
        UiState::Loading => {
            view.submit_enabled = false;
            view.loading = true;
        }
        UiState::ResultShown(result) => view.result = Some(render_result(result, catalog, tz)),
        UiState::ErrorShown(message) => view.error = Some(message.clone()),
    }
    view
}

fn render_result<Tz>(result: &ConversionResult, catalog: &CurrencyCatalog, tz: &Tz) -> ResultView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let from = result.from_currency.as_str();
    let to = result.to_currency.as_str();
    let converted_amount = format_amount(result.converted_amount);
    let exchange_rate = format_rate(result.exchange_rate);

    ResultView {
        amount_line: format!("{} {converted_amount} {to}", catalog.symbol_for(to)),
        source_line: result
            .amount
            .map(|a| format!("{} {} {from}", catalog.symbol_for(from), format_amount(a))),
        rate_line: format!("1 {from} = {exchange_rate} {to}"),
        timestamp_line: format!(
            "Last updated: {}",
            format_timestamp_in(&result.last_updated, tz)
        ),
        converted_amount,
        exchange_rate,
    }
}
