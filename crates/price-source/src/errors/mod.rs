//! Error types for the price source crate.

use thiserror::Error;

use crate::models::Dataset;

/// Errors that can occur while fetching a remote dataset.
///
/// Every variant names the [`Dataset`] it happened on so callers can tell
/// the operator which table is unavailable.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("Network error while loading the {dataset}: {source}")]
    Network {
        dataset: Dataset,
        #[source]
        source: reqwest::Error,
    },

    /// The request did not complete within the client timeout.
    #[error("Timed out while loading the {dataset}")]
    Timeout { dataset: Dataset },

    /// The API answered with a non-success status.
    #[error("The {dataset} endpoint returned HTTP {status}")]
    HttpStatus { dataset: Dataset, status: u16 },

    /// The body was not a JSON array of records.
    #[error("Could not decode the {dataset} response: {message}")]
    Decode { dataset: Dataset, message: String },
}

impl SourceError {
    /// Classifies a transport error raised by reqwest.
    pub fn from_transport(dataset: Dataset, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout { dataset }
        } else if err.is_decode() {
            Self::Decode {
                dataset,
                message: err.to_string(),
            }
        } else {
            Self::Network {
                dataset,
                source: err,
            }
        }
    }

    /// The dataset this error refers to.
    pub fn dataset(&self) -> Dataset {
        match self {
            Self::Network { dataset, .. }
            | Self::Timeout { dataset }
            | Self::HttpStatus { dataset, .. }
            | Self::Decode { dataset, .. } => *dataset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_names_dataset() {
        let err = SourceError::HttpStatus {
            dataset: Dataset::PaymentConditions,
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "The payment conditions endpoint returned HTTP 503"
        );
        assert_eq!(err.dataset(), Dataset::PaymentConditions);
    }

    #[test]
    fn test_decode_message_names_dataset() {
        let err = SourceError::Decode {
            dataset: Dataset::PriceTable,
            message: "expected a sequence".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not decode the price table response: expected a sequence"
        );
    }

    #[test]
    fn test_timeout_dataset() {
        let err = SourceError::Timeout {
            dataset: Dataset::PriceTable,
        };
        assert_eq!(err.dataset(), Dataset::PriceTable);
        assert_eq!(err.to_string(), "Timed out while loading the price table");
    }
}
