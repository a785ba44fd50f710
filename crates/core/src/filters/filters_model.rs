use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::utils::labels::combined_label;

/// An entry of the price-table selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOption {
    pub code: String,
    pub description: String,
    pub label: String,
}

impl TableOption {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        let code = code.into();
        let description = description.into();
        let label = combined_label(&code, &description);
        Self {
            code,
            description,
            label,
        }
    }
}

/// An entry of the product multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub code: String,
    pub description: String,
    pub label: String,
}

impl ProductOption {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        let code = code.into();
        let description = description.into();
        let label = combined_label(&code, &description);
        Self {
            code,
            description,
            label,
        }
    }
}

/// The operator's current choices.
///
/// `table` is a [`TableOption`] label (`None` shows every table);
/// `products` holds [`ProductOption`] labels (empty shows every product).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub table: Option<String>,
    #[serde(default)]
    pub products: BTreeSet<String>,
}

impl FilterSelection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, label: impl Into<String>) -> Self {
        self.table = Some(label.into());
        self
    }

    pub fn with_products<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products = labels.into_iter().map(Into::into).collect();
        self
    }
}
