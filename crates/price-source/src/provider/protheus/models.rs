//! Wire records returned by the Protheus REST endpoints.
//!
//! Field names are the API's column identifiers and must stay verbatim.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::lenient;
use crate::models::{pad_product_code, PaymentCondition, PriceRow};

/// One record of the `tabelapreco` endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct PriceTableRecord {
    #[serde(rename = "DA1_CODPRO", default, deserialize_with = "lenient::text")]
    product_code: String,
    #[serde(rename = "B1_DESC", default, deserialize_with = "lenient::text")]
    product_description: String,
    #[serde(rename = "DA0_DESCRI", default, deserialize_with = "lenient::text")]
    table_description: String,
    #[serde(rename = "DA1_CODTAB", default, deserialize_with = "lenient::text")]
    table_code: String,
    #[serde(
        rename = "DA1_PRCVEN",
        default,
        deserialize_with = "lenient::decimal_or_zero"
    )]
    sale_price: Decimal,
    #[serde(rename = "DA0_CONDPG", default, deserialize_with = "lenient::text")]
    condition_code: String,
    #[serde(
        rename = "B1_IPI",
        default,
        deserialize_with = "lenient::decimal_or_zero"
    )]
    ipi: Decimal,
}

impl From<PriceTableRecord> for PriceRow {
    fn from(record: PriceTableRecord) -> Self {
        PriceRow {
            product_code: pad_product_code(&record.product_code),
            product_description: record.product_description,
            table_description: record.table_description,
            table_code: record.table_code,
            base_price: record.sale_price,
            condition_code: record.condition_code,
            ipi_pct: record.ipi,
        }
    }
}

/// One record of the `se4` endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct PaymentConditionRecord {
    #[serde(rename = "E4_CODIGO", default, deserialize_with = "lenient::text")]
    code: String,
    #[serde(rename = "E4_DESCRI", default, deserialize_with = "lenient::text")]
    description: String,
    #[serde(
        rename = "E4_XACRESC",
        default,
        deserialize_with = "lenient::decimal_or_zero"
    )]
    surcharge: Decimal,
}

impl From<PaymentConditionRecord> for PaymentCondition {
    fn from(record: PaymentConditionRecord) -> Self {
        PaymentCondition {
            code: record.code,
            description: record.description,
            interest_pct: record.surcharge,
        }
    }
}
