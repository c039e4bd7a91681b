// ============================================================================
// Calculator Interface
// Defines the contract for pluggable numeric backends
// ============================================================================

use std::cmp::Ordering;
use std::fmt::Debug;

/// Strategy pattern interface for numeric backends.
/// Implementations: Int64Calculator, Int128Calculator, DecimalCalculator.
///
/// A calculator is a stateless capability table: every method is an
/// associated function over the backing type `Num`, and the money core
/// performs arithmetic exclusively through these primitives. No native
/// operator is ever applied to an amount directly, so the same operation
/// code produces identical results whether `Num` is a machine integer or a
/// third-party big-number type.
///
/// Implementations must not fail for well-formed inputs. Division by zero
/// and non-integer operands are caller precondition violations; whatever
/// the backing type does in that case (panic, saturate) propagates as-is.
pub trait Calculator {
    /// The numeric type backing monetary amounts, scales, and currency
    /// bases. Amounts are always integer-valued counts of minor
    /// subdivisions, even when `Num` could represent fractions.
    type Num: Clone + Debug;

    /// The additive identity.
    fn zero() -> Self::Num;

    /// Successor by one unit.
    fn increment(v: &Self::Num) -> Self::Num;

    /// Predecessor by one unit.
    fn decrement(v: &Self::Num) -> Self::Num;

    /// Total order over amounts. Must be antisymmetric and transitive for
    /// every representable integer value.
    fn compare(a: &Self::Num, b: &Self::Num) -> Ordering;

    fn add(a: &Self::Num, b: &Self::Num) -> Self::Num;

    fn subtract(a: &Self::Num, b: &Self::Num) -> Self::Num;

    fn multiply(a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Integer division truncating toward zero. Callers guarantee `b` is
    /// never zero.
    fn integer_divide(a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Remainder consistent with `integer_divide`:
    /// `a == integer_divide(a, b) * b + modulo(a, b)`.
    fn modulo(a: &Self::Num, b: &Self::Num) -> Self::Num;

    /// Integer exponentiation. `exponent` is integer-valued and
    /// non-negative on every well-formed call.
    fn power(base: &Self::Num, exponent: &Self::Num) -> Self::Num;

    /// Best-effort conversion to a platform float, used only for
    /// display-oriented output. Precision loss beyond `f64` range is
    /// acceptable here.
    fn to_number(v: &Self::Num) -> f64;
}

#[cfg(test)]
pub(crate) mod contract_tests {
    //! Shared conformance checks run by every backend's test module.

    use super::Calculator;
    use std::cmp::Ordering;

    /// Build the small integer `n` out of nothing but `zero`/`increment`.
    pub(crate) fn nth<C: Calculator>(n: u32) -> C::Num {
        let mut v = C::zero();
        for _ in 0..n {
            v = C::increment(&v);
        }
        v
    }

    /// `a == integer_divide(a, b) * b + modulo(a, b)` over a small grid,
    /// both signs.
    pub(crate) fn verify_division_identity<C: Calculator>() {
        for a in 0..40u32 {
            for b in 1..12u32 {
                // shift the dividend range to cover negatives
                let a = C::subtract(&nth::<C>(a), &nth::<C>(20));
                let b = nth::<C>(b);
                let q = C::integer_divide(&a, &b);
                let r = C::modulo(&a, &b);
                let recombined = C::add(&C::multiply(&q, &b), &r);
                assert_eq!(
                    C::compare(&recombined, &a),
                    Ordering::Equal,
                    "division identity broken for {:?} / {:?}",
                    a,
                    b
                );
            }
        }
    }

    /// compare is antisymmetric and consistent with add/subtract.
    pub(crate) fn verify_order_consistency<C: Calculator>() {
        let five = nth::<C>(5);
        let nine = nth::<C>(9);
        assert_eq!(C::compare(&five, &nine), Ordering::Less);
        assert_eq!(C::compare(&nine, &five), Ordering::Greater);
        assert_eq!(C::compare(&five, &five), Ordering::Equal);

        let diff = C::subtract(&five, &nine);
        assert_eq!(C::compare(&diff, &C::zero()), Ordering::Less);
        let back = C::add(&diff, &nine);
        assert_eq!(C::compare(&back, &five), Ordering::Equal);
    }

    /// power matches repeated multiplication for small exponents.
    pub(crate) fn verify_power<C: Calculator>() {
        let base = nth::<C>(10);
        let mut expected = C::increment(&C::zero());
        for exp in 0..6u32 {
            let got = C::power(&base, &nth::<C>(exp));
            assert_eq!(
                C::compare(&got, &expected),
                Ordering::Equal,
                "10^{} mismatch",
                exp
            );
            expected = C::multiply(&expected, &base);
        }
    }
}
