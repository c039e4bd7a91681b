// ============================================================================
// Comparison Operations
// Ordering and equality over monetary values
// ============================================================================

use crate::domain::Money;
use crate::interfaces::Calculator;
use crate::ops::errors::MoneyResult;
use crate::ops::normalize::{guard_same_currency, normalize_scale};
use std::cmp::Ordering;

impl<C: Calculator> Money<C> {
    /// `true` when the amount is strictly below zero.
    ///
    /// Zero is scale-invariant, so no normalization is needed.
    pub fn is_negative(&self) -> bool {
        C::compare(self.amount(), &C::zero()) == Ordering::Less
    }

    /// `true` when the amount is exactly zero, at any scale.
    pub fn is_zero(&self) -> bool {
        C::compare(self.amount(), &C::zero()) == Ordering::Equal
    }

    /// `true` when the amount is strictly above zero.
    pub fn is_positive(&self) -> bool {
        C::compare(self.amount(), &C::zero()) == Ordering::Greater
    }

    /// `true` when both values carry the same currency code.
    pub fn has_same_currency(&self, other: &Self) -> bool {
        self.currency().code() == other.currency().code()
    }

    /// `true` when both values denote the same quantity once expressed at
    /// a common scale. Ignores the currency.
    pub fn has_same_amount(&self, other: &Self) -> bool {
        let (a, b, _) = normalize_scale(self, other);
        C::compare(&a, &b) == Ordering::Equal
    }

    /// Value equality: same currency code and same normalized amount.
    ///
    /// Unlike the ordering operators this is a total function: asking
    /// whether a USD value equals a EUR value is meaningful, and the
    /// answer is simply `false`.
    pub fn equal(&self, other: &Self) -> bool {
        self.has_same_currency(other) && self.has_same_amount(other)
    }

    /// Strict ordering. Errors on currency mismatch: without a conversion
    /// rate, ordering across currencies is a programming mistake rather
    /// than a `false`.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        guard_same_currency("greater_than", self, other)?;
        let (a, b, _) = normalize_scale(self, other);
        Ok(C::compare(&a, &b) == Ordering::Greater)
    }

    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        guard_same_currency("greater_than_or_equal", self, other)?;
        let (a, b, _) = normalize_scale(self, other);
        Ok(matches!(
            C::compare(&a, &b),
            Ordering::Greater | Ordering::Equal
        ))
    }

    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        guard_same_currency("less_than", self, other)?;
        let (a, b, _) = normalize_scale(self, other);
        Ok(C::compare(&a, &b) == Ordering::Less)
    }

    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        guard_same_currency("less_than_or_equal", self, other)?;
        let (a, b, _) = normalize_scale(self, other);
        Ok(matches!(C::compare(&a, &b), Ordering::Less | Ordering::Equal))
    }
}
