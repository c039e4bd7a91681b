// ============================================================================
// Arithmetic Operations
// Currency-guarded combination of monetary values
// ============================================================================

use crate::domain::Money;
use crate::interfaces::Calculator;
use crate::ops::errors::{MoneyError, MoneyResult};
use crate::ops::normalize::{guard_same_currency, normalize_scale};
use std::cmp::Ordering;

impl<C: Calculator> Money<C> {
    /// Sum of two values of the same currency, at their common scale.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        guard_same_currency("add", self, other)?;
        let (a, b, scale) = normalize_scale(self, other);
        Ok(self.rebuild(C::add(&a, &b), scale))
    }

    /// Difference of two values of the same currency, at their common
    /// scale.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        guard_same_currency("subtract", self, other)?;
        let (a, b, scale) = normalize_scale(self, other);
        Ok(self.rebuild(C::subtract(&a, &b), scale))
    }

    /// Multiply by an integer-valued factor. The scale is unchanged, so
    /// the result stays an exact count of the same subdivisions.
    pub fn multiply(&self, factor: &C::Num) -> Self {
        self.rebuild(C::multiply(self.amount(), factor), self.scale().clone())
    }

    /// Re-express this value at a different scale.
    ///
    /// Raising the scale is exact. Lowering it truncates toward zero, one
    /// `integer_divide` against `base^(scale difference)`; sub-unit
    /// information below the new scale is discarded.
    pub fn rescale(&self, scale: C::Num) -> Self {
        match C::compare(&scale, self.scale()) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => {
                let diff = C::subtract(&scale, self.scale());
                let factor = C::power(self.currency().base(), &diff);
                self.rebuild(C::multiply(self.amount(), &factor), scale)
            },
            Ordering::Less => {
                let diff = C::subtract(self.scale(), &scale);
                let factor = C::power(self.currency().base(), &diff);
                self.rebuild(C::integer_divide(self.amount(), &factor), scale)
            },
        }
    }

    /// `true` when the amount does not divide evenly into major units,
    /// i.e. a minor-unit remainder exists at this value's scale.
    pub fn has_sub_units(&self) -> bool {
        let unit = C::power(self.currency().base(), self.scale());
        C::compare(&C::modulo(self.amount(), &unit), &C::zero()) != Ordering::Equal
    }

    /// Split this value into parts proportional to `ratios` without
    /// creating or destroying minor units.
    ///
    /// Each share starts as the truncated proportional amount; whatever
    /// remains is handed out one minor unit at a time starting from the
    /// first share, so earlier ratios absorb the rounding. The parts sum
    /// exactly to the original amount at the original scale.
    ///
    /// # Errors
    /// `InvalidAllocationRatios` when `ratios` is empty or contains a
    /// ratio that is not strictly positive.
    pub fn allocate(&self, ratios: &[C::Num]) -> MoneyResult<Vec<Self>> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidAllocationRatios);
        }
        let zero = C::zero();
        if ratios
            .iter()
            .any(|r| C::compare(r, &zero) != Ordering::Greater)
        {
            return Err(MoneyError::InvalidAllocationRatios);
        }

        let total = ratios
            .iter()
            .fold(zero.clone(), |acc, r| C::add(&acc, r));
        let mut shares: Vec<C::Num> = ratios
            .iter()
            .map(|r| C::integer_divide(&C::multiply(self.amount(), r), &total))
            .collect();

        let allocated = shares
            .iter()
            .fold(zero.clone(), |acc, s| C::add(&acc, s));
        let mut remainder = C::subtract(self.amount(), &allocated);

        // truncation leaves strictly less than one unit per share, so this
        // terminates within ratios.len() steps
        let mut idx = 0;
        loop {
            match C::compare(&remainder, &zero) {
                Ordering::Equal => break,
                Ordering::Greater => {
                    shares[idx] = C::increment(&shares[idx]);
                    remainder = C::decrement(&remainder);
                },
                Ordering::Less => {
                    shares[idx] = C::decrement(&shares[idx]);
                    remainder = C::increment(&remainder);
                },
            }
            idx = (idx + 1) % shares.len();
        }

        Ok(shares
            .into_iter()
            .map(|s| self.rebuild(s, self.scale().clone()))
            .collect())
    }
}
