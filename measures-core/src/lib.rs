//! Measures Core - Fundamental numeric types
//!
//! This crate provides the numeric layer used throughout Measures:
//! - `Amount`: the numeric abstraction converters are written against
//! - `Decimal`: arbitrary precision decimal amounts
//! - `AmountType`: the representation picked for this build
//!
//! The representation is chosen with Cargo features: `double` (default),
//! `single` or `decimal`. When several are enabled the priority is
//! `decimal`, then `single`, then `double`.

mod amount;
mod decimal;

pub use amount::{Amount, AmountError};
pub use decimal::{Decimal, DECIMAL_PRECISION};

/// Amount representation for this build
#[cfg(feature = "decimal")]
pub type AmountType = Decimal;

/// Amount representation for this build
#[cfg(all(feature = "single", not(feature = "decimal")))]
pub type AmountType = f32;

/// Amount representation for this build
#[cfg(not(any(feature = "single", feature = "decimal")))]
pub type AmountType = f64;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Amount, AmountError, AmountType, Decimal};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_type_is_selected() {
        let name = <AmountType as Amount>::NAME;
        assert!(["f32", "f64", "decimal"].contains(&name));

        #[cfg(not(any(feature = "single", feature = "decimal")))]
        assert_eq!(name, "f64");
    }

    #[test]
    fn test_amount_type_arithmetic() {
        let a = <AmountType as Amount>::parse("1.5").unwrap();
        let b = AmountType::from_i64(2);
        assert_eq!(Amount::to_f64(&(a * b)), 3.0);
    }
}
