//! Property-based integration tests for the pricing pipeline.
//!
//! These tests verify that the rounding, join and filter invariants hold
//! across random inputs, using the `proptest` crate for generation.

use pricedesk_core::filters::{apply_filters, list_tables, FilterSelection};
use pricedesk_core::pricing::{derive, gross_up, price_with_markup, price_with_tax};
use pricedesk_price_source::{PaymentCondition, PriceRow};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Money with up to four decimal places, 0 to 100k.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000).prop_map(|units| Decimal::new(units, 4))
}

/// A non-negative percentage with two decimal places, 0 to 100.
fn arb_pct() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|bp| Decimal::new(bp, 2))
}

fn arb_code() -> impl Strategy<Value = String> {
    "[0-9]{1,3}"
}

fn arb_price_row() -> impl Strategy<Value = PriceRow> {
    (
        "[0-9]{6}",
        "[A-Z][a-z]{2,8}",
        arb_code(),
        arb_amount(),
        arb_code(),
        arb_pct(),
    )
        .prop_map(|(product, desc, table, base, cond, ipi)| PriceRow {
            product_code: product,
            product_description: desc,
            table_description: format!("Table {}", table),
            table_code: table,
            base_price: base,
            condition_code: cond,
            ipi_pct: ipi,
        })
}

fn arb_condition() -> impl Strategy<Value = PaymentCondition> {
    (arb_code(), "[a-z ]{0,12}", arb_pct()).prop_map(|(code, description, interest)| {
        PaymentCondition {
            code,
            description,
            interest_pct: interest,
        }
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_prices_never_decrease(base in arb_amount(), interest in arb_pct(), ipi in arb_pct()) {
        let marked_up = price_with_markup(base, interest).unwrap();
        let taxed = price_with_tax(marked_up, ipi).unwrap();

        prop_assert!(marked_up >= base);
        prop_assert!(taxed >= marked_up);
    }

    #[test]
    fn prop_markup_is_smallest_cent_multiple_at_or_above(base in arb_amount(), interest in arb_pct()) {
        let exact = gross_up(base, interest).unwrap();
        let marked_up = price_with_markup(base, interest).unwrap();
        let cent = Decimal::new(1, 2);

        prop_assert_eq!(marked_up.scale(), 2);
        prop_assert!(marked_up >= exact);
        prop_assert!(marked_up - cent < exact);
    }

    #[test]
    fn prop_left_join_preserves_row_count(
        prices in prop::collection::vec(arb_price_row(), 0..30),
        conditions in prop::collection::vec(arb_condition(), 0..10),
    ) {
        let derivation = derive(&prices, &conditions);
        prop_assert_eq!(derivation.rows.len(), prices.len());
        prop_assert!(derivation.out_of_range.is_empty());
    }

    #[test]
    fn prop_filtering_is_idempotent(
        prices in prop::collection::vec(arb_price_row(), 1..30),
        conditions in prop::collection::vec(arb_condition(), 0..10),
        pick in any::<prop::sample::Index>(),
        with_product in any::<bool>(),
    ) {
        let derived = derive(&prices, &conditions).rows;
        let chosen = &derived[pick.index(derived.len())];
        let mut selection = FilterSelection::all().with_table(chosen.table_label());
        if with_product {
            selection = selection.with_products([chosen.product_label()]);
        }

        let once = apply_filters(&derived, &selection);
        let twice = apply_filters(&once, &selection);

        prop_assert!(!once.is_empty());
        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Example-based checks
// =============================================================================

#[test]
fn two_tables_listed_in_code_order_and_filter_each_other_out() {
    let row = |product: &str, table: &str| PriceRow {
        product_code: product.to_string(),
        product_description: "Widget".to_string(),
        table_description: format!("Table {}", table),
        table_code: table.to_string(),
        base_price: Decimal::new(1000, 2),
        condition_code: "001".to_string(),
        ipi_pct: Decimal::ZERO,
    };
    let prices = vec![row("000001", "20"), row("000002", "10"), row("000003", "20")];
    let derived = derive(&prices, &[]).rows;

    let tables = list_tables(&derived);

    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].code, "10");
    assert_eq!(tables[1].code, "20");

    let only_ten = apply_filters(&derived, &FilterSelection::all().with_table(&tables[0].label));
    assert_eq!(only_ten.len(), 1);
    assert!(only_ten.iter().all(|r| r.table_code == "10"));
}
