use serde::{Deserialize, Serialize};
use std::fmt;

/// The remote datasets the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dataset {
    /// Product prices per price table.
    PriceTable,
    /// Payment conditions and their markup percentages.
    PaymentConditions,
}

impl Dataset {
    /// Stable identifier, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::PriceTable => "PRICE_TABLE",
            Dataset::PaymentConditions => "PAYMENT_CONDITIONS",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::PriceTable => f.write_str("price table"),
            Dataset::PaymentConditions => f.write_str("payment conditions"),
        }
    }
}
