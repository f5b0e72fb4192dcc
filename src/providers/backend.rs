use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, instrument};

use crate::core::conversion::{ConversionRequest, ConversionResult, ServiceError};
use crate::core::currency::Currency;
use crate::core::service::CurrencyService;

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RefreshBody {
    message: String,
}

// HttpCurrencyService talks JSON over HTTP to the converter backend
pub struct HttpCurrencyService {
    base_url: String,
    client: Client,
}

impl HttpCurrencyService {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("fxc/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpCurrencyService {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

fn transport_error(e: reqwest::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

/// Reads the body and decodes it as `T` on success. Non-2xx responses become
/// `ServiceError::Status`, carrying the backend's `error` text when present.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status();
    let text = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.error);
        debug!(status = %status, ?message, "Backend returned an error status");
        return Err(ServiceError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&text).map_err(|e| ServiceError::Decode(e.to_string()))
}

#[async_trait]
impl CurrencyService for HttpCurrencyService {
    #[instrument(name = "ListCurrencies", skip(self))]
    async fn list_currencies(&self) -> Result<Vec<Currency>, ServiceError> {
        let url = self.url("/currencies/");
        debug!("Requesting currency catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    #[instrument(
        name = "Convert",
        skip(self, request),
        fields(from = %request.from_currency, to = %request.to_currency)
    )]
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ServiceError> {
        let url = self.url("/conversions/");
        debug!(amount = %request.amount, "Requesting conversion from {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        debug!(status = %response.status(), "Received conversion response");
        read_json(response).await
    }

    #[instrument(name = "RefreshRates", skip(self))]
    async fn refresh_rates(&self, base_currency: &str) -> Result<String, ServiceError> {
        let url = self.url("/rates/refresh/");
        debug!("Requesting rate refresh from {}", url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "base_currency": base_currency }))
            .send()
            .await
            .map_err(transport_error)?;

        let body: RefreshBody = read_json(response).await?;
        Ok(body.message)
    }
}
