//! The amount numeric type
//!
//! Converters, factors and measures are written once against [`Amount`];
//! a build picks one representation through Cargo features and exposes it
//! as [`crate::AmountType`].

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

use num_traits::{One, Zero};
use thiserror::Error;

use crate::Decimal;

/// Error type for amount parsing and arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Invalid amount literal: {0}")]
    Parse(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Numeric representation of an amount.
///
/// Implemented for `f32`, `f64` and [`Decimal`].
pub trait Amount:
    Clone
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Short name of the representation ("f32", "f64", "decimal")
    const NAME: &'static str;

    fn from_i64(v: i64) -> Self;

    fn from_f64(v: f64) -> Self;

    /// Parse a decimal literal: "0.0254", "1.01325e5", "602214076e15" or a
    /// ratio such as "101325/760". Exact for [`Decimal`], correctly rounded
    /// for floats.
    fn parse(literal: &str) -> Result<Self, AmountError>;

    fn to_f64(&self) -> f64;

    /// Integer power
    fn powi(&self, exp: i32) -> Self {
        let mut result = Self::one();
        for _ in 0..exp.unsigned_abs() {
            result = result * self.clone();
        }
        if exp < 0 {
            Self::one() / result
        } else {
            result
        }
    }

    /// 10^exp
    fn ten_pow(exp: i32) -> Self {
        Self::from_i64(10).powi(exp)
    }
}

fn parse_float_literal<F>(literal: &str) -> Result<F, AmountError>
where
    F: std::str::FromStr + Div<Output = F> + Zero,
{
    let s = literal.trim();
    let parse = |part: &str| {
        part.trim()
            .parse::<F>()
            .map_err(|_| AmountError::Parse(s.to_string()))
    };

    match s.split_once('/') {
        Some((num, den)) => {
            let den = parse(den)?;
            if den.is_zero() {
                return Err(AmountError::DivisionByZero);
            }
            Ok(parse(num)? / den)
        }
        None => parse(s),
    }
}

macro_rules! impl_amount_for_float {
    ($Float:ty) => {
        impl Amount for $Float {
            const NAME: &'static str = stringify!($Float);

            fn from_i64(v: i64) -> Self {
                v as $Float
            }

            fn from_f64(v: f64) -> Self {
                v as $Float
            }

            fn parse(literal: &str) -> Result<Self, AmountError> {
                parse_float_literal::<$Float>(literal)
            }

            fn to_f64(&self) -> f64 {
                *self as f64
            }

            fn powi(&self, exp: i32) -> Self {
                <$Float>::powi(*self, exp)
            }

            // Parsing "1e-3" rounds once, where powi(-3) would round twice.
            fn ten_pow(exp: i32) -> Self {
                format!("1e{}", exp).parse::<$Float>().unwrap_or_else(|_| <$Float>::powi(10.0, exp))
            }
        }
    };
}
impl_amount_for_float!(f32);
impl_amount_for_float!(f64);

impl Amount for Decimal {
    const NAME: &'static str = "decimal";

    fn from_i64(v: i64) -> Self {
        Decimal::from_i64(v)
    }

    fn from_f64(v: f64) -> Self {
        Decimal::from_f64(v)
    }

    fn parse(literal: &str) -> Result<Self, AmountError> {
        Decimal::from_str(literal)
    }

    fn to_f64(&self) -> f64 {
        Decimal::to_f64(self).unwrap_or(f64::NAN)
    }

    fn powi(&self, exp: i32) -> Self {
        self.pow(exp)
    }

    fn ten_pow(exp: i32) -> Self {
        Decimal::ten_pow(exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_float_ten_pow_matches_literals() {
        assert_eq!(f64::ten_pow(-3), 0.001);
        assert_eq!(f64::ten_pow(6), 1_000_000.0);
        assert_eq!(f64::ten_pow(-24), 1e-24);
        assert_eq!(f32::ten_pow(3), 1000.0f32);
    }

    #[test]
    fn test_parse_ratio_literal() {
        let torr = <f64 as Amount>::parse("101325/760").unwrap();
        assert_relative_eq!(torr, 133.322_368_421, max_relative = 1e-9);
        assert_eq!(<f64 as Amount>::parse("1/0"), Err(AmountError::DivisionByZero));
        assert!(matches!(<f32 as Amount>::parse("psi"), Err(AmountError::Parse(_))));
    }

    #[test]
    fn test_decimal_amount() {
        let a = <Decimal as Amount>::parse("0.0254").unwrap();
        let b = a.clone() * Decimal::from_i64(12);
        assert_eq!(b, Decimal::from_str("0.3048").unwrap());
        assert_eq!(Amount::to_f64(&b), 0.3048);
    }

    /// Amount relying on the trait's default `powi` and `ten_pow`
    #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
    struct Plain(f64);

    impl std::fmt::Display for Plain {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Add for Plain {
        type Output = Plain;
        fn add(self, rhs: Plain) -> Plain {
            Plain(self.0 + rhs.0)
        }
    }

    impl Sub for Plain {
        type Output = Plain;
        fn sub(self, rhs: Plain) -> Plain {
            Plain(self.0 - rhs.0)
        }
    }

    impl Mul for Plain {
        type Output = Plain;
        fn mul(self, rhs: Plain) -> Plain {
            Plain(self.0 * rhs.0)
        }
    }

    impl Div for Plain {
        type Output = Plain;
        fn div(self, rhs: Plain) -> Plain {
            Plain(self.0 / rhs.0)
        }
    }

    impl Zero for Plain {
        fn zero() -> Self {
            Plain(0.0)
        }
        fn is_zero(&self) -> bool {
            self.0 == 0.0
        }
    }

    impl One for Plain {
        fn one() -> Self {
            Plain(1.0)
        }
    }

    impl Amount for Plain {
        const NAME: &'static str = "plain";

        fn from_i64(v: i64) -> Self {
            Plain(v as f64)
        }

        fn from_f64(v: f64) -> Self {
            Plain(v)
        }

        fn parse(literal: &str) -> Result<Self, AmountError> {
            parse_float_literal::<f64>(literal).map(Plain)
        }

        fn to_f64(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_default_powi() {
        assert_eq!(Plain(2.0).powi(10), Plain(1024.0));
        assert_eq!(Plain(2.0).powi(-2), Plain(0.25));
        assert_eq!(Plain(7.5).powi(0), Plain(1.0));
        assert_eq!(Plain::ten_pow(3), Plain(1000.0));
        assert_eq!(Plain::ten_pow(-1), Plain(0.1));
    }

    #[test]
    fn test_overridden_powi() {
        assert_eq!(Amount::powi(&2.0f64, 10), 1024.0);
        assert_eq!(Amount::powi(&Decimal::from_i64(2), -2), Decimal::from_str("0.25").unwrap());
    }

    #[test]
    fn test_names() {
        assert_eq!(<f32 as Amount>::NAME, "f32");
        assert_eq!(<f64 as Amount>::NAME, "f64");
        assert_eq!(<Decimal as Amount>::NAME, "decimal");
    }
}
