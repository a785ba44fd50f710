//! Domain records produced by the price source.

mod dataset;
pub mod lenient;
mod payment_condition;
mod price_row;

pub use dataset::Dataset;
pub use payment_condition::PaymentCondition;
pub use price_row::{pad_product_code, PriceRow, PRODUCT_CODE_WIDTH};
