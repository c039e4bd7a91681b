// ============================================================================
// Int64 Calculator
// Native machine-integer backend
// ============================================================================

use crate::interfaces::Calculator;
use std::cmp::Ordering;

/// Calculator over native `i64` amounts.
///
/// The cheapest backend. Amounts are counts of minor subdivisions, so the
/// usable range is `i64` minor units (for a base-10 currency with two
/// fractional digits, roughly ±92 quadrillion major units).
///
/// Arithmetic uses the native operators; overflow behaves like any other
/// `i64` overflow in the embedding program (panic in debug builds, wrap in
/// release). Callers needing headroom beyond `i64` should pick
/// [`Int128Calculator`](crate::numeric::Int128Calculator) or
/// [`DecimalCalculator`](crate::numeric::DecimalCalculator).
#[derive(Debug, Clone, Copy, Default)]
pub struct Int64Calculator;

impl Calculator for Int64Calculator {
    type Num = i64;

    #[inline]
    fn zero() -> i64 {
        0
    }

    #[inline]
    fn increment(v: &i64) -> i64 {
        v + 1
    }

    #[inline]
    fn decrement(v: &i64) -> i64 {
        v - 1
    }

    #[inline]
    fn compare(a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn add(a: &i64, b: &i64) -> i64 {
        a + b
    }

    #[inline]
    fn subtract(a: &i64, b: &i64) -> i64 {
        a - b
    }

    #[inline]
    fn multiply(a: &i64, b: &i64) -> i64 {
        a * b
    }

    #[inline]
    fn integer_divide(a: &i64, b: &i64) -> i64 {
        // Rust's `/` on integers already truncates toward zero
        a / b
    }

    #[inline]
    fn modulo(a: &i64, b: &i64) -> i64 {
        a % b
    }

    #[inline]
    fn power(base: &i64, exponent: &i64) -> i64 {
        base.pow(*exponent as u32)
    }

    #[inline]
    fn to_number(v: &i64) -> f64 {
        *v as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::contract_tests;

    #[test]
    fn test_primitives() {
        assert_eq!(Int64Calculator::zero(), 0);
        assert_eq!(Int64Calculator::increment(&41), 42);
        assert_eq!(Int64Calculator::decrement(&0), -1);
        assert_eq!(Int64Calculator::add(&2, &3), 5);
        assert_eq!(Int64Calculator::subtract(&2, &3), -1);
        assert_eq!(Int64Calculator::multiply(&6, &7), 42);
    }

    #[test]
    fn test_integer_divide_truncates_toward_zero() {
        assert_eq!(Int64Calculator::integer_divide(&7, &2), 3);
        assert_eq!(Int64Calculator::integer_divide(&-7, &2), -3);
        assert_eq!(Int64Calculator::integer_divide(&7, &-2), -3);
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(Int64Calculator::modulo(&7, &2), 1);
        assert_eq!(Int64Calculator::modulo(&-7, &2), -1);
    }

    #[test]
    fn test_power() {
        assert_eq!(Int64Calculator::power(&10, &0), 1);
        assert_eq!(Int64Calculator::power(&10, &3), 1000);
        assert_eq!(Int64Calculator::power(&2, &10), 1024);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(Int64Calculator::to_number(&1050), 1050.0);
        assert_eq!(Int64Calculator::to_number(&-1), -1.0);
    }

    #[test]
    fn test_contract_conformance() {
        contract_tests::verify_division_identity::<Int64Calculator>();
        contract_tests::verify_order_consistency::<Int64Calculator>();
        contract_tests::verify_power::<Int64Calculator>();
    }
}
