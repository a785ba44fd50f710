//! Input contract of the external grid widget.
//!
//! The grid itself (sorting, per-column filters, pagination) runs in the
//! frontend. This module describes what it is handed: column definitions in
//! display order, the already narrowed rows and the page size.

mod grid_model;

pub use grid_model::{ColumnKind, GridColumn, GridView};
