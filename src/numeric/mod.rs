// ============================================================================
// Numeric Module
// Concrete calculator backends for monetary amounts
// ============================================================================
//
// This module provides:
// - Int64Calculator: native i64 amounts (cheapest, default choice)
// - Int128Calculator: wide-integer amounts for sub-minor-unit scales
// - DecimalCalculator: rust_decimal amounts (third-party big-number type)
//
// Design principles:
// - A backend is a zero-sized marker type implementing `Calculator`
// - All three satisfy the same contract; money operations cannot tell
//   them apart
// - Backends never carry state; pairing with a monetary value happens at
//   the type level

mod decimal;
mod int128;
mod int64;

pub use decimal::DecimalCalculator;
pub use int128::Int128Calculator;
pub use int64::Int64Calculator;
