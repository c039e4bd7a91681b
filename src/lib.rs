// ============================================================================
// Coinage Library
// Currency-safe monetary values with pluggable numeric backends
// ============================================================================

//! # Coinage
//!
//! Immutable monetary values whose arithmetic is correct regardless of the
//! numeric type backing the amount.
//!
//! ## Features
//!
//! - **Pluggable numeric backends** through the [`Calculator`] capability
//!   trait (`i64`, `i128`, and `rust_decimal::Decimal` ship in the box)
//! - **Scale normalization**: values of the same currency expressed at
//!   different fractional precisions compare and combine exactly
//! - **Currency safety**: ordering and arithmetic across currencies is an
//!   error, never a silent coercion
//! - **Caller-defined rendering** via transformer closures; no locale
//!   logic in the core
//!
//! ## Example
//!
//! ```rust
//! use coinage::prelude::*;
//!
//! let usd = Currency::new("USD", 10, 2);
//!
//! // 5.00 USD in cents, and the same amount in tenths of a cent
//! let price: Money<Int64Calculator> = Money::new(500, usd.clone());
//! let quote: Money<Int64Calculator> = Money::with_scale(5000, usd.clone(), 3);
//! assert!(price.equal(&quote));
//!
//! // arithmetic normalizes to the finer scale
//! let tip: Money<Int64Calculator> = Money::new(75, usd.clone());
//! let total = price.add(&tip).unwrap();
//! assert_eq!(*total.amount(), 575);
//!
//! // ordering across currencies is a programming error
//! let eur = Currency::new("EUR", 10, 2);
//! let foreign: Money<Int64Calculator> = Money::new(500, eur);
//! assert!(price.greater_than(&foreign).is_err());
//! assert!(!price.equal(&foreign));
//!
//! // rendering policy belongs to the caller
//! let label = total.to_format(|p| format!("{:.2} {}", p.amount, p.currency.code()));
//! assert_eq!(label, "5.75 USD");
//! ```
//!
//! [`Calculator`]: crate::interfaces::Calculator

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod ops;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Currency, Money, MoneySnapshot};
    pub use crate::interfaces::Calculator;
    pub use crate::numeric::{DecimalCalculator, Int128Calculator, Int64Calculator};
    pub use crate::ops::{normalize_scale, FormatPayload, MoneyError, MoneyResult};
}
