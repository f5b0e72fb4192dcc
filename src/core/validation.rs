//! Input validation for a conversion attempt.

use crate::core::conversion::ConversionRequest;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid amount greater than 0")]
    MissingAmount,
    #[error("Please enter a valid amount greater than 0")]
    NonNumericAmount(String),
    #[error("Please enter a valid amount greater than 0")]
    NonPositiveAmount(Decimal),
    #[error("Please select a currency to convert from")]
    MissingFromCurrency,
    #[error("Please select a currency to convert to")]
    MissingToCurrency,
}

/// Parses a user-entered amount. Plain and scientific notation are accepted.
pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingAmount);
    }

    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ValidationError::NonNumericAmount(trimmed.to_string()))?;

    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

/// Checks the amount first, then the source and target selections, and
/// stops at the first failure.
pub fn validate(
    amount: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<ConversionRequest, ValidationError> {
    let amount = parse_amount(amount)?;

    let from_currency = from
        .filter(|c| !c.trim().is_empty())
        .ok_or(ValidationError::MissingFromCurrency)?;
    let to_currency = to
        .filter(|c| !c.trim().is_empty())
        .ok_or(ValidationError::MissingToCurrency)?;

    Ok(ConversionRequest {
        from_currency: from_currency.to_string(),
        to_currency: to_currency.to_string(),
        amount,
    })
}
