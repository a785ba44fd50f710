//! Protheus REST provider for the price-table and payment-condition datasets.
//!
//! Both endpoints answer an authenticated `GET` with a JSON array of flat
//! records. Authentication is HTTP Basic with a service account supplied by
//! configuration.

mod models;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

use crate::errors::SourceError;
use crate::models::{Dataset, PaymentCondition, PriceRow};
use crate::provider::PriceSource;

use models::{PaymentConditionRecord, PriceTableRecord};

/// Provider ID constant
const PROVIDER_ID: &str = "PROTHEUS_REST";

/// Path of the price-table endpoint below the API root.
pub const DEFAULT_PRICE_TABLE_PATH: &str = "tabelapreco";

/// Path of the payment-conditions endpoint below the API root.
pub const DEFAULT_CONDITIONS_PATH: &str = "se4";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Service-account credentials for HTTP Basic Auth.
#[derive(Clone, Default)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Whether there is anything to send.
    pub fn is_empty(&self) -> bool {
        self.username.trim().is_empty()
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Full URLs of the two dataset endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEndpoints {
    pub price_table_url: String,
    pub conditions_url: String,
}

impl SourceEndpoints {
    /// Builds both URLs from the API root using the default endpoint paths.
    pub fn from_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            price_table_url: format!("{}/{}", base, DEFAULT_PRICE_TABLE_PATH),
            conditions_url: format!("{}/{}", base, DEFAULT_CONDITIONS_PATH),
        }
    }

    fn url_for(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::PriceTable => &self.price_table_url,
            Dataset::PaymentConditions => &self.conditions_url,
        }
    }
}

/// Fetches both datasets from the Protheus REST API.
///
/// # Example
///
/// ```ignore
/// use pricedesk_price_source::{BasicCredentials, ProtheusRestSource, SourceEndpoints};
///
/// let source = ProtheusRestSource::new(
///     SourceEndpoints::from_base("http://erp.local:1807/rest/api/v1/calccomponentesorc2022"),
///     BasicCredentials::new("integration", "secret"),
/// )?;
/// ```
pub struct ProtheusRestSource {
    client: Client,
    endpoints: SourceEndpoints,
    credentials: BasicCredentials,
}

impl ProtheusRestSource {
    pub fn new(
        endpoints: SourceEndpoints,
        credentials: BasicCredentials,
    ) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoints, credentials, REQUEST_TIMEOUT)
    }

    /// Builds the HTTP client with `timeout` applied to every request.
    ///
    /// Fails only when the TLS backend cannot be initialized.
    pub fn with_timeout(
        endpoints: SourceEndpoints,
        credentials: BasicCredentials,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        if credentials.is_empty() {
            warn!("{}: no service-account credentials configured", PROVIDER_ID);
        }

        Ok(Self {
            client,
            endpoints,
            credentials,
        })
    }

    /// GETs one dataset and decodes it as a JSON array of `R`.
    async fn fetch_records<R>(&self, dataset: Dataset) -> Result<Vec<R>, SourceError>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoints.url_for(dataset);
        info!("{}: GET {} ({})", PROVIDER_ID, url, dataset.as_str());

        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if !self.credentials.is_empty() {
            request = request.basic_auth(
                &self.credentials.username,
                Some(&self.credentials.password),
            );
        }

        let response = request
            .send()
            .await
            .map_err(|e| SourceError::from_transport(dataset, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{}: {} answered HTTP {}", PROVIDER_ID, url, status);
            return Err(SourceError::HttpStatus {
                dataset,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::from_transport(dataset, e))?;

        let records: Vec<R> =
            serde_json::from_slice(&body).map_err(|e| SourceError::Decode {
                dataset,
                message: e.to_string(),
            })?;

        debug!(
            "{}: decoded {} records for {}",
            PROVIDER_ID,
            records.len(),
            dataset.as_str()
        );
        Ok(records)
    }
}

#[async_trait]
impl PriceSource for ProtheusRestSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_price_table(&self) -> Result<Vec<PriceRow>, SourceError> {
        let records: Vec<PriceTableRecord> = self.fetch_records(Dataset::PriceTable).await?;
        Ok(records.into_iter().map(PriceRow::from).collect())
    }

    async fn fetch_payment_conditions(&self) -> Result<Vec<PaymentCondition>, SourceError> {
        let records: Vec<PaymentConditionRecord> =
            self.fetch_records(Dataset::PaymentConditions).await?;
        Ok(records.into_iter().map(PaymentCondition::from).collect())
    }
}
