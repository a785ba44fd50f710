//! Pricedesk Price Source Crate
//!
//! Typed access to the two remote datasets the dashboard is built from:
//! the product price table and the payment-condition table.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |   PriceSource    | --> |  ProtheusRestSource  |  (HTTP GET + Basic Auth)
//! +------------------+     +----------------------+
//!                                    |
//!                                    v
//!                          +----------------------+
//!                          |    Wire records      |  (verbatim API field names,
//!                          +----------------------+   lenient decoding)
//!                                    |
//!                                    v
//!                          +----------------------+
//!                          | PriceRow /           |  (normalized keys,
//!                          | PaymentCondition     |   zero-defaulted numbers)
//!                          +----------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PriceRow`] - One product in one price table
//! - [`PaymentCondition`] - One payment condition and its markup percentage
//! - [`Dataset`] - Which remote dataset an operation or error refers to
//! - [`PriceSource`] - Trait implemented by every dataset provider

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::SourceError;
pub use models::{Dataset, PaymentCondition, PriceRow, PRODUCT_CODE_WIDTH};
pub use provider::protheus::{
    BasicCredentials, ProtheusRestSource, SourceEndpoints, DEFAULT_CONDITIONS_PATH,
    DEFAULT_PRICE_TABLE_PATH,
};
pub use provider::PriceSource;
