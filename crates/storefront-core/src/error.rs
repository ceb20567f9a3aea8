//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! The error taxonomy is deliberately small. Store commands are total over
//! their input domain: an unknown product or order id is a no-op, not a
//! fault, which keeps callers resilient to stale references (a double-tap
//! removing an already-removed line). The only faults the core can raise
//! are the ones below.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted on an empty cart.
    ///
    /// ## When This Occurs
    /// - The cart was cleared between render and checkout tap
    /// - A second checkout fires after the first already drained the cart
    #[error("Cannot create an order from an empty cart")]
    EmptyCart,

    /// A status string did not match any known order status.
    #[error("Unknown order status: {0}")]
    InvalidStatus(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::EmptyCart.to_string(),
            "Cannot create an order from an empty cart"
        );
        assert_eq!(
            CoreError::InvalidStatus("returned".to_string()).to_string(),
            "Unknown order status: returned"
        );
    }
}
