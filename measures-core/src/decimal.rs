//! Arbitrary precision decimal amounts using dashu
//!
//! Uses dashu-float (DBig) for base-10 arithmetic, so decimal conversion
//! factors such as 0.0254 or 273.15 are held exactly. A round trip through a
//! unit's standard amount is exact only when its factor terminates within
//! [`DECIMAL_PRECISION`] digits; factors like 1/60 or 5/9 round at that
//! precision.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use dashu_float::DBig;
use dashu_int::IBig;
use num_traits::{One, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::AmountError;

/// Working precision for decimal amounts (significant decimal digits)
pub const DECIMAL_PRECISION: usize = 50;

/// Arbitrary precision decimal amount
///
/// Every value carries [`DECIMAL_PRECISION`] digits of working precision, so
/// multiplication and division round at that precision instead of growing
/// without bound.
#[derive(Debug, Clone)]
pub struct Decimal {
    inner: DBig,
}

impl Decimal {
    // ========== Construction ==========

    /// Ensure a DBig has adequate precision for calculations
    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(DECIMAL_PRECISION).value()
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "1/3", "1.5e10", "-42"
    pub fn from_str(s: &str) -> Result<Self, AmountError> {
        let s = s.trim();

        // Rational format "a/b"
        if s.contains('/') && !s.contains('.') && !s.contains('e') && !s.contains('E') {
            let parts: Vec<&str> = s.split('/').collect();
            if parts.len() == 2 {
                let num: DBig = parts[0]
                    .trim()
                    .parse()
                    .map_err(|_| AmountError::Parse(s.to_string()))?;
                let den: DBig = parts[1]
                    .trim()
                    .parse()
                    .map_err(|_| AmountError::Parse(s.to_string()))?;

                if den == DBig::ZERO {
                    return Err(AmountError::DivisionByZero);
                }

                let result = Self::with_work_precision(num) / Self::with_work_precision(den);
                return Ok(Self { inner: result });
            }
        }

        // Scientific notation: "602214076e15", "1.01325e5"
        if s.contains('e') || s.contains('E') {
            let s_lower = s.to_lowercase();
            let parts: Vec<&str> = s_lower.split('e').collect();
            if parts.len() == 2 {
                let exp: isize = parts[1]
                    .parse()
                    .map_err(|_| AmountError::Parse(s.to_string()))?;
                let scale = DBig::from_parts(IBig::ONE, exp);

                // mantissa * 10^exponent, exact
                let result = if parts[0].contains('.') {
                    let mantissa: DBig = parts[0]
                        .parse()
                        .map_err(|_| AmountError::Parse(s.to_string()))?;
                    mantissa * scale
                } else {
                    let mantissa: IBig = parts[0]
                        .parse()
                        .map_err(|_| AmountError::Parse(s.to_string()))?;
                    DBig::from_parts(mantissa, exp)
                };
                return Ok(Self { inner: Self::with_work_precision(result) });
            }
        }

        let inner: DBig = s.parse().map_err(|_| AmountError::Parse(s.to_string()))?;
        Ok(Self { inner: Self::with_work_precision(inner) })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Create from f64, going through its shortest round-trip decimal form.
    /// NaN and infinities map to zero.
    pub fn from_f64(f: f64) -> Self {
        if !f.is_finite() {
            return Self::zero();
        }
        Self::from_str(&format!("{:e}", f)).unwrap_or_else(|_| Self::zero())
    }

    /// Exact power of ten
    pub fn ten_pow(exp: i32) -> Self {
        Self { inner: Self::with_work_precision(DBig::from_parts(IBig::ONE, exp as isize)) }
    }

    // ========== Arithmetic ==========

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, AmountError> {
        if other.is_zero() {
            Err(AmountError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Integer power (exact up to working precision)
    pub fn pow(&self, exp: i32) -> Self {
        let mut result = Self::one();
        for _ in 0..exp.unsigned_abs() {
            result = Self { inner: &result.inner * &self.inner };
        }

        if exp < 0 {
            Self::one().checked_div(&result).unwrap_or_else(|_| Self::zero())
        } else {
            result
        }
    }

    // ========== Conversion ==========

    /// Convert to f64, rounding to nearest. `None` when out of f64 range.
    pub fn to_f64(&self) -> Option<f64> {
        let value = self.inner.to_f64().value();
        if value.is_finite() {
            Some(value)
        } else {
            None
        }
    }
}

// ========== Trait Implementations ==========

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(Ordering::Equal)
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        Decimal { inner: self.inner + rhs.inner }
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        Decimal { inner: self.inner - rhs.inner }
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        Decimal { inner: self.inner * rhs.inner }
    }
}

/// Panics when `rhs` is zero; use [`Decimal::checked_div`] where the divisor
/// is not known to be non-zero.
impl Div for Decimal {
    type Output = Decimal;

    fn div(self, rhs: Decimal) -> Decimal {
        Decimal { inner: self.inner / rhs.inner }
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal { inner: -self.inner }
    }
}

impl Zero for Decimal {
    fn zero() -> Self {
        Self { inner: Self::with_work_precision(DBig::ZERO) }
    }

    fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }
}

impl One for Decimal {
    fn one() -> Self {
        Self { inner: Self::with_work_precision(DBig::ONE) }
    }
}
