//! Metric unit prefixes

use std::fmt;

use measures_core::{Amount, AmountType};
use serde::{Deserialize, Serialize};

/// SI metric prefix, yocto (10^-24) through yotta (10^24)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deka,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

impl UnitPrefix {
    /// All prefixes in ascending order of factor
    pub const ALL: [UnitPrefix; 20] = [
        UnitPrefix::Yocto,
        UnitPrefix::Zepto,
        UnitPrefix::Atto,
        UnitPrefix::Femto,
        UnitPrefix::Pico,
        UnitPrefix::Nano,
        UnitPrefix::Micro,
        UnitPrefix::Milli,
        UnitPrefix::Centi,
        UnitPrefix::Deci,
        UnitPrefix::Deka,
        UnitPrefix::Hecto,
        UnitPrefix::Kilo,
        UnitPrefix::Mega,
        UnitPrefix::Giga,
        UnitPrefix::Tera,
        UnitPrefix::Peta,
        UnitPrefix::Exa,
        UnitPrefix::Zetta,
        UnitPrefix::Yotta,
    ];

    /// Symbol prepended to the standard unit symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            UnitPrefix::Yocto => "y",
            UnitPrefix::Zepto => "z",
            UnitPrefix::Atto => "a",
            UnitPrefix::Femto => "f",
            UnitPrefix::Pico => "p",
            UnitPrefix::Nano => "n",
            UnitPrefix::Micro => "μ",
            UnitPrefix::Milli => "m",
            UnitPrefix::Centi => "c",
            UnitPrefix::Deci => "d",
            UnitPrefix::Deka => "da",
            UnitPrefix::Hecto => "h",
            UnitPrefix::Kilo => "k",
            UnitPrefix::Mega => "M",
            UnitPrefix::Giga => "G",
            UnitPrefix::Tera => "T",
            UnitPrefix::Peta => "P",
            UnitPrefix::Exa => "E",
            UnitPrefix::Zetta => "Z",
            UnitPrefix::Yotta => "Y",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            UnitPrefix::Yocto => "yocto",
            UnitPrefix::Zepto => "zepto",
            UnitPrefix::Atto => "atto",
            UnitPrefix::Femto => "femto",
            UnitPrefix::Pico => "pico",
            UnitPrefix::Nano => "nano",
            UnitPrefix::Micro => "micro",
            UnitPrefix::Milli => "milli",
            UnitPrefix::Centi => "centi",
            UnitPrefix::Deci => "deci",
            UnitPrefix::Deka => "deka",
            UnitPrefix::Hecto => "hecto",
            UnitPrefix::Kilo => "kilo",
            UnitPrefix::Mega => "mega",
            UnitPrefix::Giga => "giga",
            UnitPrefix::Tera => "tera",
            UnitPrefix::Peta => "peta",
            UnitPrefix::Exa => "exa",
            UnitPrefix::Zetta => "zetta",
            UnitPrefix::Yotta => "yotta",
        }
    }

    /// Power of ten the prefix stands for
    pub const fn exponent(self) -> i32 {
        match self {
            UnitPrefix::Yocto => -24,
            UnitPrefix::Zepto => -21,
            UnitPrefix::Atto => -18,
            UnitPrefix::Femto => -15,
            UnitPrefix::Pico => -12,
            UnitPrefix::Nano => -9,
            UnitPrefix::Micro => -6,
            UnitPrefix::Milli => -3,
            UnitPrefix::Centi => -2,
            UnitPrefix::Deci => -1,
            UnitPrefix::Deka => 1,
            UnitPrefix::Hecto => 2,
            UnitPrefix::Kilo => 3,
            UnitPrefix::Mega => 6,
            UnitPrefix::Giga => 9,
            UnitPrefix::Tera => 12,
            UnitPrefix::Peta => 15,
            UnitPrefix::Exa => 18,
            UnitPrefix::Zetta => 21,
            UnitPrefix::Yotta => 24,
        }
    }

    /// Multiplicative factor, 10^exponent, in amount type `A`
    pub fn factor_in<A: Amount>(self) -> A {
        A::ten_pow(self.exponent())
    }

    /// Multiplicative factor in this build's amount type
    pub fn factor(self) -> AmountType {
        self.factor_in::<AmountType>()
    }
}

impl fmt::Display for UnitPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use measures_core::Decimal;

    #[test]
    fn test_factor_correctness() {
        assert_eq!(UnitPrefix::Kilo.factor_in::<f64>(), 1000.0);
        assert_eq!(UnitPrefix::Milli.factor_in::<f64>(), 0.001);
        assert_eq!(UnitPrefix::Mega.factor_in::<f64>(), 1_000_000.0);
        assert_eq!(UnitPrefix::Yocto.factor_in::<f64>(), 1e-24);
        assert_eq!(UnitPrefix::Yotta.factor_in::<f64>(), 1e24);
    }

    #[test]
    fn test_decimal_factors_are_exact() {
        assert_eq!(UnitPrefix::Milli.factor_in::<Decimal>(), Decimal::from_str("0.001").unwrap());
        assert_eq!(UnitPrefix::Kilo.factor_in::<Decimal>(), Decimal::from_i64(1000));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(UnitPrefix::Kilo.symbol(), "k");
        assert_eq!(UnitPrefix::Micro.symbol(), "μ");
        assert_eq!(UnitPrefix::Deka.symbol(), "da");
        assert_eq!(UnitPrefix::Mega.to_string(), "M");
    }

    #[test]
    fn test_table_is_ascending() {
        let exponents: Vec<i32> = UnitPrefix::ALL.iter().map(|p| p.exponent()).collect();
        assert!(exponents.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(exponents.first(), Some(&-24));
        assert_eq!(exponents.last(), Some(&24));
    }
}
