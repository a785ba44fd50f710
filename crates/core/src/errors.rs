//! Core error types for the price lookup.
//!
//! Fetch failures are not errors at this level: the dashboard degrades them
//! into notices and empty tables, and out-of-range prices into warnings.
//! What remains is rejected user input.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the price lookup.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

impl Error {
    pub fn invalid_selection(message: impl Into<String>) -> Self {
        Self::InvalidSelection(message.into())
    }
}
