//! Pricedesk Core - price table lookup pipeline and session state.
//!
//! This crate joins the remote price table with the payment conditions,
//! derives gross prices, narrows the result by the operator's selection and
//! keeps per-session cache and refresh state. It knows nothing about HTTP
//! serving; the `pricedesk-price-source` crate supplies the data.

pub mod cache;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod filters;
pub mod grid;
pub mod pricing;
pub mod utils;

pub use dashboard::{DashboardSession, DashboardView, Notice, NoticeLevel, RefreshStatus};
pub use filters::{FilterSelection, ProductOption, TableOption};
pub use grid::GridView;
pub use pricing::{DerivedPriceRow, PriceGridRow};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
