// ============================================================================
// Formatting Pipeline
// Unit conversion and caller-defined rendering
// ============================================================================

use crate::domain::{Currency, Money};
use crate::interfaces::Calculator;
use std::fmt;

/// Structured payload handed to [`to_format`](Money::to_format)
/// transformers.
pub struct FormatPayload<'a, C: Calculator> {
    /// The value in major units, rounded to the object's scale. Lossy
    /// float; for display only.
    pub amount: f64,
    pub currency: &'a Currency<C::Num>,
    /// The value being formatted, for transformers that need the precise
    /// internals.
    pub money: &'a Money<C>,
}

impl<C: Calculator> Money<C> {
    /// Convert the internal integer amount to major units, rounded to
    /// `digits` fractional digits.
    ///
    /// Goes through the calculator's `to_number`, so this is lossy by
    /// design and must not feed back into precise arithmetic. Rounding is
    /// half away from zero (`f64::round`) at the requested digit count.
    pub fn to_unit(&self, digits: u32) -> f64 {
        let divisor = C::power(self.currency().base(), self.scale());
        let unit = C::to_number(self.amount()) / C::to_number(&divisor);
        let factor = 10f64.powi(digits as i32);
        (unit * factor).round() / factor
    }

    /// Render through a caller-supplied transformer.
    ///
    /// Computes the unit-scale amount at this value's own scale, then
    /// hands a [`FormatPayload`] to `transformer`, which owns all locale
    /// and presentation policy. This method performs no string logic
    /// itself.
    ///
    /// # Example
    /// ```
    /// use coinage::domain::{Currency, Money};
    /// use coinage::numeric::Int64Calculator;
    ///
    /// let usd = Currency::new("USD", 10, 2);
    /// let price: Money<Int64Calculator> = Money::new(1050, usd);
    /// let label = price.to_format(|p| format!("{} {:.2}", p.currency.code(), p.amount));
    /// assert_eq!(label, "USD 10.50");
    /// ```
    pub fn to_format<R, F>(&self, transformer: F) -> R
    where
        F: FnOnce(FormatPayload<'_, C>) -> R,
    {
        let digits = C::to_number(self.scale()) as u32;
        let amount = self.to_unit(digits);
        transformer(FormatPayload {
            amount,
            currency: self.currency(),
            money: self,
        })
    }
}

/// Debug-friendly rendering at the currency's exponent width, e.g.
/// `10.50 USD`. Not locale-aware; real presentation belongs in a
/// `to_format` transformer.
impl<C: Calculator> fmt::Display for Money<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = C::to_number(self.currency().exponent()) as usize;
        write!(
            f,
            "{:.*} {}",
            digits,
            self.to_unit(digits as u32),
            self.currency().code()
        )
    }
}
