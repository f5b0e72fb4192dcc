//! Backend currency service abstraction

use crate::core::conversion::{ConversionRequest, ConversionResult, ServiceError};
use crate::core::currency::Currency;
use async_trait::async_trait;

#[async_trait]
pub trait CurrencyService: Send + Sync {
    async fn list_currencies(&self) -> Result<Vec<Currency>, ServiceError>;

    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ServiceError>;

    /// Asks the backend to refresh its stored rates for `base_currency` and
    /// returns the backend's confirmation message.
    async fn refresh_rates(&self, base_currency: &str) -> Result<String, ServiceError>;
}
