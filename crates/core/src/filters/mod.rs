//! Filter layer: selector options and narrowing of the derived table.
//!
//! Nothing here mutates its input. Each call builds a fresh view from the
//! latest derived table, so the same selection always yields the same rows.

mod filters_model;
mod options;
mod selection;


pub use filters_model::{FilterSelection, ProductOption, TableOption};
pub use options::{list_products, list_tables, product_options_for};
pub use selection::{apply_filters, filter_by_table};
