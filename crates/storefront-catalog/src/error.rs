//! # Catalog Errors
//!
//! A fetch either succeeds, reports absence (`Ok(None)`), or fails with
//! [`CatalogError`]. The failure is surfaced to the caller unchanged; the
//! catalog layer performs no retry and no backoff.

use thiserror::Error;

/// Catalog fetch failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be reached or did not answer.
    #[error("Product catalog unavailable: {reason}")]
    Unavailable { reason: String },
}

impl CatalogError {
    /// Creates an unavailable error with the given reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        CatalogError::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_carries_reason() {
        let err = CatalogError::unavailable("connection refused");
        assert_eq!(
            err.to_string(),
            "Product catalog unavailable: connection refused"
        );
    }
}
