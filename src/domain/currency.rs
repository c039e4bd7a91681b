// ============================================================================
// Currency Descriptor
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes the unit a monetary amount is counted in.
///
/// `base` is the radix of the currency's subdivision (10 for every ISO
/// currency, other values for non-decimal units) and `exponent` the number
/// of fractional digits implied by the minor unit (2 for USD cents, 0 for
/// JPY). Both are values of the backing numeric type so the scale
/// normalizer can feed them straight to calculator primitives.
///
/// Descriptors are caller-supplied; this crate ships no currency table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency<N> {
    code: String,
    base: N,
    exponent: N,
}

impl<N> Currency<N> {
    /// Create a descriptor. Assumes the code is a meaningful identifier
    /// (e.g. an ISO 4217 code) and `base`/`exponent` are positive
    /// integer-valued; validation belongs to the embedding application.
    pub fn new(code: impl Into<String>, base: N, exponent: N) -> Self {
        Self {
            code: code.into(),
            base,
            exponent,
        }
    }

    /// The currency code. Binary money operations compare exactly this.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Radix of the minor-unit subdivision.
    #[inline]
    pub fn base(&self) -> &N {
        &self.base
    }

    /// Number of fractional digits of the minor unit.
    #[inline]
    pub fn exponent(&self) -> &N {
        &self.exponent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let usd: Currency<i64> = Currency::new("USD", 10, 2);
        assert_eq!(usd.code(), "USD");
        assert_eq!(*usd.base(), 10);
        assert_eq!(*usd.exponent(), 2);
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let a: Currency<i64> = Currency::new("USD", 10, 2);
        let b: Currency<i64> = Currency::new("USD", 10, 2);
        let c: Currency<i64> = Currency::new("USD", 10, 3);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
