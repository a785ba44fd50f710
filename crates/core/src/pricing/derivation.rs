use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

use pricedesk_price_source::{PaymentCondition, PriceRow};

use crate::constants::MONEY_DECIMAL_PLACES;
use crate::utils::labels::combined_label;

use super::pricing_model::DerivedPriceRow;

/// Rounds up to the next cent: the smallest multiple of 0.01 that is
/// greater than or equal to `value`. The result always carries two decimal
/// places; `None` when the value is too large to carry them.
pub fn ceil_to_cents(value: Decimal) -> Option<Decimal> {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::ToPositiveInfinity);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    (rounded.scale() == MONEY_DECIMAL_PLACES).then_some(rounded)
}

/// `amount * (1 + pct / 100)`, unrounded. `None` on overflow.
pub fn gross_up(amount: Decimal, pct: Decimal) -> Option<Decimal> {
    let factor = Decimal::ONE.checked_add(pct.checked_div(Decimal::ONE_HUNDRED)?)?;
    amount.checked_mul(factor)
}

/// Base price with the payment condition's markup, ceiled to cents.
pub fn price_with_markup(base_price: Decimal, interest_pct: Decimal) -> Option<Decimal> {
    gross_up(base_price, interest_pct).and_then(ceil_to_cents)
}

/// Marked-up price with IPI, ceiled to cents.
///
/// Takes the already rounded marked-up price; rounding twice is intended.
pub fn price_with_tax(price_with_markup: Decimal, ipi_pct: Decimal) -> Option<Decimal> {
    gross_up(price_with_markup, ipi_pct).and_then(ceil_to_cents)
}

/// Output of [`derive`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Derivation {
    pub rows: Vec<DerivedPriceRow>,
    /// Product labels whose gross prices fell outside the decimal range.
    /// Those rows carry the base price unchanged in both price columns.
    pub out_of_range: Vec<String>,
}

/// Left-joins prices to payment conditions and derives the gross prices.
///
/// Every price row yields exactly one derived row. A condition code missing
/// from `conditions` gives a blank description and no markup. When a code
/// appears more than once in `conditions`, the first occurrence wins.
pub fn derive(prices: &[PriceRow], conditions: &[PaymentCondition]) -> Derivation {
    let mut by_code: HashMap<&str, &PaymentCondition> = HashMap::with_capacity(conditions.len());
    for condition in conditions {
        if by_code.contains_key(condition.code.as_str()) {
            warn!(
                "Duplicate payment condition '{}' ignored; keeping the first one",
                condition.code
            );
            continue;
        }
        by_code.insert(condition.code.as_str(), condition);
    }

    let mut unmatched = 0usize;
    let mut out_of_range = Vec::new();
    let rows: Vec<DerivedPriceRow> = prices
        .iter()
        .map(|price| {
            let condition = by_code.get(price.condition_code.as_str());
            if condition.is_none() {
                unmatched += 1;
            }
            let (description, interest_pct) = condition
                .map(|c| (c.description.as_str(), c.interest_pct))
                .unwrap_or(("", Decimal::ZERO));

            let mut row = DerivedPriceRow {
                product_code: price.product_code.clone(),
                product_description: price.product_description.clone(),
                table_code: price.table_code.clone(),
                table_description: price.table_description.clone(),
                condition_label: combined_label(&price.condition_code, description),
                ipi_pct: price.ipi_pct,
                price_with_markup: price.base_price,
                price_with_markup_and_tax: price.base_price,
            };

            let gross = price_with_markup(price.base_price, interest_pct)
                .and_then(|marked_up| Some((marked_up, price_with_tax(marked_up, price.ipi_pct)?)));
            match gross {
                Some((marked_up, taxed)) => {
                    row.price_with_markup = marked_up;
                    row.price_with_markup_and_tax = taxed;
                }
                None => {
                    warn!(
                        "Gross price of '{}' in table '{}' overflows; keeping the base price",
                        row.product_label(),
                        row.table_code
                    );
                    out_of_range.push(row.product_label());
                }
            }
            row
        })
        .collect();

    debug!(
        "Derived {} rows from {} conditions ({} without a matching condition)",
        rows.len(),
        conditions.len(),
        unmatched
    );
    Derivation { rows, out_of_range }
}
