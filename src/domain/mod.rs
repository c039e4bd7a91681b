// ============================================================================
// Domain Models Module
// Contains the monetary value objects
// ============================================================================

pub mod currency;
pub mod money;

pub use currency::Currency;
pub use money::{Money, MoneySnapshot};
