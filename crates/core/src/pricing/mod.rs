//! Join & derivation engine.
//!
//! Turns the two fetched datasets into the presentation table:
//!
//! ```text
//! PriceRow[] ──┐
//!              ├─ left join on condition code ─> markup ─> tax ─> DerivedPriceRow[]
//! PaymentCondition[] ──┘
//! ```
//!
//! - **Models** (`pricing_model.rs`) - `DerivedPriceRow` and the display row
//! - **Derivation** (`derivation.rs`) - Join, ceiling rounding, labels

mod derivation;
mod pricing_model;


pub use derivation::{
    ceil_to_cents, derive, gross_up, price_with_markup, price_with_tax, Derivation,
};
pub use pricing_model::{DerivedPriceRow, PriceGridRow};
