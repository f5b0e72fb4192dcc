//! Conversion request/response types and the backend error union.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when a non-2xx conversion response carries no error text.
pub const CONVERSION_FAILED: &str = "Conversion failed";
/// Message shown when the conversion call could not complete at all.
pub const CONVERSION_UNAVAILABLE: &str = "Failed to convert currency. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRequest {
    pub from_currency: String,
    pub to_currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// A successful conversion as reported by the backend.
///
/// Decimal fields accept JSON numbers as well as the string encoding the
/// backend uses for fixed-point values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversionResult {
    pub converted_amount: Decimal,
    pub exchange_rate: Decimal,
    pub from_currency: String,
    pub to_currency: String,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// Failures talking to the currency backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Text to show the user when a conversion fails with this error.
    pub fn conversion_message(&self) -> String {
        match self {
            ServiceError::Status {
                message: Some(msg), ..
            } if !msg.is_empty() => msg.clone(),
            ServiceError::Status { .. } => CONVERSION_FAILED.to_string(),
            ServiceError::Transport(_) | ServiceError::Decode(_) => {
                CONVERSION_UNAVAILABLE.to_string()
            }
        }
    }
}
