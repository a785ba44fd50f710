use serde::{Deserialize, Serialize};

use crate::constants::GRID_PAGE_SIZE;
use crate::pricing::{DerivedPriceRow, PriceGridRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Numeric,
}

/// One grid column. `field` is the JSON key in [`PriceGridRow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    pub field: String,
    pub header: String,
    pub kind: ColumnKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub sortable: bool,
    pub filterable: bool,
    pub resizable: bool,
    pub editable: bool,
}

impl GridColumn {
    fn new(field: &str, header: &str, kind: ColumnKind) -> Self {
        Self {
            field: field.to_string(),
            header: header.to_string(),
            kind,
            width: None,
            sortable: true,
            filterable: true,
            resizable: true,
            editable: false,
        }
    }

    fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}

/// Everything the grid widget needs to render one page set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    pub columns: Vec<GridColumn>,
    pub rows: Vec<PriceGridRow>,
    pub page_size: usize,
    pub total_rows: usize,
}

impl GridView {
    /// Columns in display order.
    pub fn columns() -> Vec<GridColumn> {
        vec![
            GridColumn::new("productCode", "Product Code", ColumnKind::Text),
            GridColumn::new("productDescription", "Product Description", ColumnKind::Text),
            GridColumn::new("paymentCondition", "Payment Condition", ColumnKind::Text),
            GridColumn::new("priceWithoutTax", "Price without Tax", ColumnKind::Numeric),
            GridColumn::new("priceWithTax", "Price with Tax", ColumnKind::Numeric),
            GridColumn::new("ipi", "IPI", ColumnKind::Numeric).with_width(80),
        ]
    }

    /// Builds the grid input from filtered rows, dropping the table columns.
    pub fn from_rows(rows: &[DerivedPriceRow]) -> Self {
        let rows: Vec<PriceGridRow> = rows.iter().map(PriceGridRow::from).collect();
        Self {
            columns: Self::columns(),
            total_rows: rows.len(),
            rows,
            page_size: GRID_PAGE_SIZE,
        }
    }
}
