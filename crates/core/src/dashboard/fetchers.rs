//! Remote fetchers with memoized, degrade-on-failure results.

use log::{info, warn};
use std::sync::Arc;

use pricedesk_price_source::{Dataset, PaymentCondition, PriceRow, PriceSource, SourceError};

use crate::cache::MemoCache;

use super::dashboard_model::Notice;

/// Result of one dataset fetch as the rest of the pipeline sees it.
///
/// A failed fetch is an empty table plus an error notice. The outcome is
/// cached as a unit, so the notice keeps showing until the next refresh.
#[derive(Debug, Clone)]
pub struct FetchOutcome<T> {
    pub rows: Arc<Vec<T>>,
    pub notice: Option<Notice>,
}

impl<T> FetchOutcome<T> {
    pub fn loaded(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(rows),
            notice: None,
        }
    }

    pub fn failed(err: &SourceError) -> Self {
        Self {
            rows: Arc::new(Vec::new()),
            notice: Some(Notice::error(format!(
                "Failed to load the {}: {}",
                err.dataset(),
                err
            ))),
        }
    }
}

/// The two dataset fetchers over a [`PriceSource`], each memoized until
/// [`invalidate_all`](Self::invalidate_all).
pub struct CachedFetchers {
    source: Arc<dyn PriceSource>,
    prices: MemoCache<Dataset, FetchOutcome<PriceRow>>,
    conditions: MemoCache<Dataset, FetchOutcome<PaymentCondition>>,
}

impl CachedFetchers {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self {
            source,
            prices: MemoCache::new(),
            conditions: MemoCache::new(),
        }
    }

    pub async fn price_table(&self) -> FetchOutcome<PriceRow> {
        self.prices
            .get_or_compute(Dataset::PriceTable, || async {
                let result = self.source.fetch_price_table().await;
                settle(self.source.id(), Dataset::PriceTable, result)
            })
            .await
    }

    pub async fn payment_conditions(&self) -> FetchOutcome<PaymentCondition> {
        self.conditions
            .get_or_compute(Dataset::PaymentConditions, || async {
                let result = self.source.fetch_payment_conditions().await;
                settle(self.source.id(), Dataset::PaymentConditions, result)
            })
            .await
    }

    /// Forgets both cached results; the next read goes to the network.
    pub async fn invalidate_all(&self) {
        self.prices.invalidate_all().await;
        self.conditions.invalidate_all().await;
    }
}

fn settle<T>(
    source_id: &str,
    dataset: Dataset,
    result: Result<Vec<T>, SourceError>,
) -> FetchOutcome<T> {
    match result {
        Ok(rows) => {
            info!(
                "Fetched {} {} rows from {}",
                rows.len(),
                dataset.as_str(),
                source_id
            );
            FetchOutcome::loaded(rows)
        }
        Err(err) => {
            warn!("Fetching {} from {} failed: {}", dataset.as_str(), source_id, err);
            FetchOutcome::failed(&err)
        }
    }
}
