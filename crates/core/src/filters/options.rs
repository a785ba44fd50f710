use std::collections::BTreeSet;

use crate::pricing::DerivedPriceRow;

use super::filters_model::{ProductOption, TableOption};
use super::selection::filter_by_table;

/// Distinct price tables present in `rows`, sorted ascending by code.
pub fn list_tables(rows: &[DerivedPriceRow]) -> Vec<TableOption> {
    let pairs: BTreeSet<(&str, &str)> = rows
        .iter()
        .map(|r| (r.table_code.as_str(), r.table_description.as_str()))
        .collect();

    pairs
        .into_iter()
        .map(|(code, description)| TableOption::new(code, description))
        .collect()
}

/// Distinct products present in `rows`, sorted ascending by label.
///
/// Pass rows already narrowed to the selected table.
pub fn list_products(rows: &[DerivedPriceRow]) -> Vec<ProductOption> {
    let pairs: BTreeSet<(&str, &str)> = rows
        .iter()
        .map(|r| (r.product_code.as_str(), r.product_description.as_str()))
        .collect();

    let mut options: Vec<ProductOption> = pairs
        .into_iter()
        .map(|(code, description)| ProductOption::new(code, description))
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label));
    options
}

/// Product options offered under a table selection (`None` = all tables).
pub fn product_options_for(rows: &[DerivedPriceRow], table: Option<&str>) -> Vec<ProductOption> {
    let narrowed = filter_by_table(rows, table);
    list_products(&narrowed)
}
