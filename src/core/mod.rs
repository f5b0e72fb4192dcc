//! Core converter logic, independent of any terminal or HTTP library

pub mod client;
pub mod config;
pub mod conversion;
pub mod currency;
pub mod format;
pub mod log;
pub mod service;
pub mod state;
pub mod validation;

// Re-export main types for cleaner imports
pub use client::{ConverterClient, PendingConversion};
pub use conversion::{ConversionRequest, ConversionResult, ServiceError};
pub use currency::{Currency, CurrencyCatalog};
pub use service::CurrencyService;
pub use state::{Selection, UiState, View};
