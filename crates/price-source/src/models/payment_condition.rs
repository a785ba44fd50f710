use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment condition: financing terms and the markup they add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCondition {
    /// Condition code in textual form (join key).
    pub code: String,
    pub description: String,
    /// Interest/markup percentage. Zero when missing.
    pub interest_pct: Decimal,
}
