use crate::pricing::DerivedPriceRow;
use crate::utils::labels::label_code;

use super::filters_model::FilterSelection;

/// Rows of the table named by `table_label`; every row when `None`.
///
/// The table code is the label's text before the first `" - "`, compared
/// exactly against each row's table code.
pub fn filter_by_table(rows: &[DerivedPriceRow], table_label: Option<&str>) -> Vec<DerivedPriceRow> {
    match table_label {
        None => rows.to_vec(),
        Some(label) => {
            let code = label_code(label);
            rows.iter()
                .filter(|r| r.table_code == code)
                .cloned()
                .collect()
        }
    }
}

/// Narrows `rows` by table, then by product labels.
///
/// An empty product set applies no product filtering.
pub fn apply_filters(rows: &[DerivedPriceRow], selection: &FilterSelection) -> Vec<DerivedPriceRow> {
    let mut narrowed = filter_by_table(rows, selection.table.as_deref());
    if !selection.products.is_empty() {
        narrowed.retain(|r| selection.products.contains(&r.product_label()));
    }
    narrowed
}
