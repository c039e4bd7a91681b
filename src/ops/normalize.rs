// ============================================================================
// Scale Normalization
// Brings two amounts of differing scale to a common unit
// ============================================================================

use crate::domain::Money;
use crate::interfaces::Calculator;
use crate::ops::errors::{MoneyError, MoneyResult};
use std::cmp::Ordering;

/// Express two amounts of the same currency in a common unit.
///
/// The common scale is the larger of the two; the lower-scale amount is
/// raised by `base^(scale difference)` computed with the calculator's own
/// `power`/`multiply`, so the conversion is exact in the backing type and
/// never round-trips through floats. Returns the two raised amounts and
/// the common scale.
///
/// Equal scales pass both amounts through untouched; no `power` call is
/// made, which matters when the backing type is an expensive
/// arbitrary-precision one.
///
/// Callers are responsible for checking currency equality first; this
/// function only looks at scales.
pub fn normalize_scale<C: Calculator>(a: &Money<C>, b: &Money<C>) -> (C::Num, C::Num, C::Num) {
    match C::compare(a.scale(), b.scale()) {
        Ordering::Equal => (a.amount().clone(), b.amount().clone(), a.scale().clone()),
        Ordering::Less => (
            raise_amount(a, b.scale()),
            b.amount().clone(),
            b.scale().clone(),
        ),
        Ordering::Greater => (
            a.amount().clone(),
            raise_amount(b, a.scale()),
            a.scale().clone(),
        ),
    }
}

/// Re-express `money`'s amount at a higher scale. `target_scale` must not
/// be below the current scale.
pub(crate) fn raise_amount<C: Calculator>(money: &Money<C>, target_scale: &C::Num) -> C::Num {
    let diff = C::subtract(target_scale, money.scale());
    let factor = C::power(money.currency().base(), &diff);
    tracing::trace!(
        code = money.currency().code(),
        factor = ?factor,
        "raising amount to common scale"
    );
    C::multiply(money.amount(), &factor)
}

/// Reject operand pairs whose currency codes differ.
///
/// Checked before normalization: there is no meaningful unit conversion
/// between currencies, so a mismatch is a programming error, never a
/// silent coercion.
pub(crate) fn guard_same_currency<C: Calculator>(
    operation: &'static str,
    a: &Money<C>,
    b: &Money<C>,
) -> MoneyResult<()> {
    if a.currency().code() == b.currency().code() {
        Ok(())
    } else {
        tracing::warn!(
            operation,
            left = a.currency().code(),
            right = b.currency().code(),
            "rejecting cross-currency operands"
        );
        Err(MoneyError::CurrencyMismatch {
            operation,
            left: a.currency().code().to_string(),
            right: b.currency().code().to_string(),
        })
    }
}
