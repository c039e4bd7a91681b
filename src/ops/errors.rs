// ============================================================================
// Operation Errors
// Error types for binary money operations
// ============================================================================

use std::fmt;

/// Errors raised by money operations.
///
/// These are precondition violations surfaced synchronously to the caller;
/// nothing is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Operands carry different currencies in an operation where a
    /// cross-currency result is meaningless
    CurrencyMismatch {
        /// The operation that rejected its operands
        operation: &'static str,
        left: String,
        right: String,
    },
    /// Allocation called with an empty ratio list or a non-positive ratio
    InvalidAllocationRatios,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::CurrencyMismatch {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "currency mismatch in {}: {} vs {}",
                    operation, left, right
                )
            },
            MoneyError::InvalidAllocationRatios => {
                write!(f, "allocation ratios must be a non-empty list of positive values")
            },
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
