//! Price source trait definition.

use async_trait::async_trait;

use crate::errors::SourceError;
use crate::models::{PaymentCondition, PriceRow};

/// Trait for the backends that serve the two remote datasets.
///
/// Implementations return already-normalized records: product codes are
/// zero-padded, condition codes are text and numeric fields default to zero.
/// Caching is the caller's concern; every call should hit the backend.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use pricedesk_price_source::{PaymentCondition, PriceRow, PriceSource, SourceError};
///
/// struct FixedSource;
///
/// #[async_trait]
/// impl PriceSource for FixedSource {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_price_table(&self) -> Result<Vec<PriceRow>, SourceError> {
///         Ok(Vec::new())
///     }
///
///     async fn fetch_payment_conditions(&self) -> Result<Vec<PaymentCondition>, SourceError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Unique identifier for this source, used for logging.
    fn id(&self) -> &'static str;

    /// Fetch every (product, price table) row.
    async fn fetch_price_table(&self) -> Result<Vec<PriceRow>, SourceError>;

    /// Fetch every payment condition.
    async fn fetch_payment_conditions(&self) -> Result<Vec<PaymentCondition>, SourceError>;
}
