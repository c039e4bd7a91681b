// ============================================================================
// Money Value Object
// ============================================================================

use crate::domain::Currency;
use crate::interfaces::Calculator;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable monetary value: an integer amount counted in
/// `base^scale`-ths of the major unit of its currency.
///
/// The calculator flavor is part of the type, so a `Money<Int64Calculator>`
/// can never be mixed into an operation over `Money<DecimalCalculator>`;
/// the pairing invariant holds by construction rather than by runtime
/// checks.
///
/// Every operation returns a new value. Fields are private; read access
/// goes through the borrow accessors or [`snapshot`](Money::snapshot).
///
/// # Example
/// ```
/// use coinage::domain::{Currency, Money};
/// use coinage::numeric::Int64Calculator;
///
/// let usd = Currency::new("USD", 10, 2);
/// let price: Money<Int64Calculator> = Money::new(500, usd);
/// assert_eq!(*price.amount(), 500);
/// assert_eq!(*price.scale(), 2);
/// ```
pub struct Money<C: Calculator> {
    amount: C::Num,
    currency: Currency<C::Num>,
    scale: C::Num,
}

impl<C: Calculator> Money<C> {
    /// Create a value at the currency's own exponent.
    ///
    /// `amount` is a count of minor units and is assumed integer-valued;
    /// input validation is the embedding application's concern.
    pub fn new(amount: C::Num, currency: Currency<C::Num>) -> Self {
        let scale = currency.exponent().clone();
        Self {
            amount,
            currency,
            scale,
        }
    }

    /// Create a value at an explicit scale, e.g. fractional cents.
    pub fn with_scale(amount: C::Num, currency: Currency<C::Num>, scale: C::Num) -> Self {
        Self {
            amount,
            currency,
            scale,
        }
    }

    /// The raw integer amount, in `base^scale`-ths of the major unit.
    #[inline]
    pub fn amount(&self) -> &C::Num {
        &self.amount
    }

    #[inline]
    pub fn currency(&self) -> &Currency<C::Num> {
        &self.currency
    }

    /// Number of fractional digits the amount is expressed at. Defaults to
    /// the currency exponent; two values of the same currency may carry
    /// different scales and are normalized before any binary operation.
    #[inline]
    pub fn scale(&self) -> &C::Num {
        &self.scale
    }

    /// Owned read-only view of the internal state.
    pub fn snapshot(&self) -> MoneySnapshot<C::Num> {
        MoneySnapshot {
            amount: self.amount.clone(),
            currency: self.currency.clone(),
            scale: self.scale.clone(),
        }
    }

    /// New value sharing this one's currency.
    pub(crate) fn rebuild(&self, amount: C::Num, scale: C::Num) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
            scale,
        }
    }
}

// Manual impls: deriving would put bounds on the calculator marker type
// itself instead of on `C::Num`.

impl<C: Calculator> Clone for Money<C> {
    fn clone(&self) -> Self {
        Self {
            amount: self.amount.clone(),
            currency: self.currency.clone(),
            scale: self.scale.clone(),
        }
    }
}

impl<C: Calculator> fmt::Debug for Money<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Money")
            .field("amount", &self.amount)
            .field("currency", &self.currency.code())
            .field("scale", &self.scale)
            .finish()
    }
}

impl<C: Calculator> PartialEq for Money<C>
where
    C::Num: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
            && self.currency == other.currency
            && self.scale == other.scale
    }
}

/// Detached, serializable view of a [`Money`] value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneySnapshot<N> {
    pub amount: N,
    pub currency: Currency<N>,
    pub scale: N,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Int64Calculator;

    fn usd() -> Currency<i64> {
        Currency::new("USD", 10, 2)
    }

    #[test]
    fn test_new_defaults_scale_to_exponent() {
        let d: Money<Int64Calculator> = Money::new(500, usd());
        assert_eq!(*d.amount(), 500);
        assert_eq!(*d.scale(), 2);
        assert_eq!(d.currency().code(), "USD");
    }

    #[test]
    fn test_with_scale_overrides_exponent() {
        let d: Money<Int64Calculator> = Money::with_scale(5000, usd(), 3);
        assert_eq!(*d.scale(), 3);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let d: Money<Int64Calculator> = Money::new(500, usd());
        let snap = d.snapshot();
        assert_eq!(snap.amount, 500);
        assert_eq!(snap.scale, 2);
        assert_eq!(snap.currency, usd());
        // the original is untouched and still usable
        assert_eq!(*d.amount(), 500);
    }

    #[test]
    fn test_debug_shows_code_not_whole_descriptor() {
        let d: Money<Int64Calculator> = Money::new(500, usd());
        let rendered = format!("{:?}", d);
        assert!(rendered.contains("USD"));
        assert!(rendered.contains("500"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_serializes() {
        let d: Money<Int64Calculator> = Money::new(500, usd());
        let json = serde_json::to_string(&d.snapshot()).unwrap();
        assert!(json.contains("\"code\":\"USD\""));
        assert!(json.contains("\"amount\":500"));
    }
}
