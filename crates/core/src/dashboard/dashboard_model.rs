use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::filters::{FilterSelection, ProductOption, TableOption};
use crate::grid::GridView;
use crate::utils::time_utils::last_updated_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A message for the operator, rendered above the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// When the data was last (re)loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshStatus {
    pub last_updated: Option<DateTime<Local>>,
    /// `dd/mm/YYYY HH:MM:SS`, or a placeholder when never refreshed.
    pub label: String,
}

impl RefreshStatus {
    pub fn new(last_updated: Option<DateTime<Local>>) -> Self {
        Self {
            label: last_updated_label(last_updated.as_ref()),
            last_updated,
        }
    }
}

/// The whole page after one interaction.
///
/// `grid` is `None` when the price table came back empty; the notices then
/// carry the "no data" warning instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub title: String,
    pub status: RefreshStatus,
    pub notices: Vec<Notice>,
    pub tables: Vec<TableOption>,
    pub selection: FilterSelection,
    pub products: Vec<ProductOption>,
    pub grid: Option<GridView>,
}

impl DashboardView {
    pub fn has_data(&self) -> bool {
        self.grid.is_some()
    }
}
