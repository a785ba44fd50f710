use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::labels::combined_label;

/// A price row joined with its payment condition, carrying the derived
/// gross prices.
///
/// Base price and interest percentage are intermediates and are not kept.
/// Table code and description stay for filtering only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedPriceRow {
    pub product_code: String,
    pub product_description: String,
    pub table_code: String,
    pub table_description: String,
    /// `"<condition code> - <condition description>"`
    pub condition_label: String,
    pub ipi_pct: Decimal,
    /// Base price grossed up by the condition's interest, ceiled to cents.
    #[serde(with = "rust_decimal::serde::str")]
    pub price_with_markup: Decimal,
    /// `price_with_markup` grossed up by IPI, ceiled to cents.
    #[serde(with = "rust_decimal::serde::str")]
    pub price_with_markup_and_tax: Decimal,
}

impl DerivedPriceRow {
    /// `"<product code> - <product description>"`, the product filter key.
    pub fn product_label(&self) -> String {
        combined_label(&self.product_code, &self.product_description)
    }

    /// `"<table code> - <table description>"`
    pub fn table_label(&self) -> String {
        combined_label(&self.table_code, &self.table_description)
    }
}

/// One grid row, in display column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceGridRow {
    pub product_code: String,
    pub product_description: String,
    pub payment_condition: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_without_tax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_with_tax: Decimal,
    pub ipi: Decimal,
}

impl From<&DerivedPriceRow> for PriceGridRow {
    fn from(row: &DerivedPriceRow) -> Self {
        Self {
            product_code: row.product_code.clone(),
            product_description: row.product_description.clone(),
            payment_condition: row.condition_label.clone(),
            price_without_tax: row.price_with_markup,
            price_with_tax: row.price_with_markup_and_tax,
            ipi: row.ipi_pct,
        }
    }
}
