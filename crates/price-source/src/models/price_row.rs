use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Width product codes are zero-padded to.
pub const PRODUCT_CODE_WIDTH: usize = 6;

/// One product priced in one price table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRow {
    /// Zero-padded, always [`PRODUCT_CODE_WIDTH`] characters or longer.
    pub product_code: String,
    pub product_description: String,
    pub table_description: String,
    pub table_code: String,
    /// Sale price before markup and tax. Zero when the API sent garbage.
    pub base_price: Decimal,
    /// Payment-condition code in textual form (join key).
    pub condition_code: String,
    /// IPI tax percentage. Zero when missing.
    pub ipi_pct: Decimal,
}

/// Left-pads a product code with zeros to [`PRODUCT_CODE_WIDTH`] characters.
///
/// Codes already at or beyond the width are returned unchanged.
pub fn pad_product_code(code: &str) -> String {
    format!("{:0>width$}", code, width = PRODUCT_CODE_WIDTH)
}
