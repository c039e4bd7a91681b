// ============================================================================
// Decimal Calculator
// rust_decimal backend for amounts beyond machine-integer range
// ============================================================================

use crate::interfaces::Calculator;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Calculator over `rust_decimal::Decimal` amounts.
///
/// Proves the capability set is sufficient for a structurally unrelated
/// third-party numeric type: `Decimal` is a 96-bit scaled integer, not a
/// machine integer, yet every money operation behaves identically to the
/// integer backends because nothing outside this impl touches the amount.
///
/// Amounts are still integer-valued counts of minor subdivisions. Feeding
/// a fractional `Decimal` in as an amount is a caller precondition
/// violation, same as any other malformed input.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalCalculator;

impl Calculator for DecimalCalculator {
    type Num = Decimal;

    #[inline]
    fn zero() -> Decimal {
        Decimal::ZERO
    }

    #[inline]
    fn increment(v: &Decimal) -> Decimal {
        *v + Decimal::ONE
    }

    #[inline]
    fn decrement(v: &Decimal) -> Decimal {
        *v - Decimal::ONE
    }

    #[inline]
    fn compare(a: &Decimal, b: &Decimal) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn add(a: &Decimal, b: &Decimal) -> Decimal {
        *a + *b
    }

    #[inline]
    fn subtract(a: &Decimal, b: &Decimal) -> Decimal {
        *a - *b
    }

    #[inline]
    fn multiply(a: &Decimal, b: &Decimal) -> Decimal {
        *a * *b
    }

    #[inline]
    fn integer_divide(a: &Decimal, b: &Decimal) -> Decimal {
        (*a / *b).trunc()
    }

    #[inline]
    fn modulo(a: &Decimal, b: &Decimal) -> Decimal {
        // Decimal's `%` keeps the dividend's sign, matching trunc division
        *a % *b
    }

    fn power(base: &Decimal, exponent: &Decimal) -> Decimal {
        // Scale exponents are small; repeated multiplication stays exact
        // and avoids pulling in the `maths` feature.
        let n = exponent
            .to_u32()
            .expect("exponent must be a non-negative integer");
        let mut result = Decimal::ONE;
        for _ in 0..n {
            result *= *base;
        }
        result
    }

    #[inline]
    fn to_number(v: &Decimal) -> f64 {
        v.to_f64().unwrap_or(f64::NAN)
    }
}
