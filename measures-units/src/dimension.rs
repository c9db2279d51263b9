//! Dimensional analysis types
//!
//! Each physical quantity has dimensions represented as a 7-element vector
//! of exact rational exponents:
//! [length, mass, time, current, temperature, amount, luminosity]

use std::fmt;
use std::ops::{Div, Mul};

use num_rational::Rational32;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// The seven SI base dimensions, in vector order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseDimension {
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::ElectricCurrent,
        BaseDimension::Temperature,
        BaseDimension::AmountOfSubstance,
        BaseDimension::LuminousIntensity,
    ];

    /// Position in the exponent vector
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Conventional dimension symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::ElectricCurrent => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::AmountOfSubstance => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }
}

/// Represents the dimensions of a physical quantity
/// as exponents of the 7 SI base dimensions.
///
/// Equality is exact: exponents are rationals, never floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    exponents: [Rational32; 7],
}

impl Dimension {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0]);

    /// Length dimension [L]
    pub const LENGTH: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0]);

    /// Mass dimension [M]
    pub const MASS: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0]);

    /// Time dimension [T]
    pub const TIME: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0]);

    /// Electric current dimension [I]
    pub const ELECTRIC_CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0]);

    /// Temperature dimension [Θ]
    pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0]);

    /// Amount of substance dimension [N]
    pub const AMOUNT_OF_SUBSTANCE: Dimension = Dimension::new([0, 0, 0, 0, 0, 1, 0]);

    /// Luminous intensity dimension [J]
    pub const LUMINOUS_INTENSITY: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 1]);

    /// Create a new dimension from integer exponents
    pub const fn new(exponents: [i32; 7]) -> Self {
        let mut ratios = [Rational32::new_raw(0, 1); 7];
        let mut i = 0;
        while i < 7 {
            ratios[i] = Rational32::new_raw(exponents[i], 1);
            i += 1;
        }
        Dimension { exponents: ratios }
    }

    /// Create a new dimension from rational exponents
    pub fn from_ratios(exponents: [Rational32; 7]) -> Self {
        Dimension { exponents }
    }

    /// The single base dimension `base` with exponent one
    pub fn base(base: BaseDimension) -> Self {
        let mut exponents = [Rational32::zero(); 7];
        exponents[base.index()] = Rational32::one();
        Dimension { exponents }
    }

    /// Exponent of one base dimension
    pub fn exponent(&self, base: BaseDimension) -> Rational32 {
        self.exponents[base.index()]
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|e| e.is_zero())
    }

    /// Multiply dimensions (add exponents)
    ///
    /// # Panics
    ///
    /// When an exponent's numerator or denominator overflows `i32`. Physical
    /// dimensions stay far inside that range.
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        self.zip_with(other, |a, b| a + b)
    }

    /// Divide dimensions (subtract exponents)
    ///
    /// # Panics
    ///
    /// When an exponent overflows `i32`, as for [`Dimension::multiply`].
    pub fn divide(&self, other: &Dimension) -> Dimension {
        self.zip_with(other, |a, b| a - b)
    }

    /// Raise to a rational power (scale exponents).
    /// `power(Rational32::new(1, 2))` is the dimension of a square root.
    ///
    /// # Panics
    ///
    /// When an exponent overflows `i32`, as for [`Dimension::multiply`].
    pub fn power(&self, exp: impl Into<Rational32>) -> Dimension {
        let exp = exp.into();
        let mut result = self.exponents;
        for e in result.iter_mut() {
            *e *= exp;
        }
        Dimension { exponents: result }
    }

    /// Exact componentwise equality
    pub fn equals(&self, other: &Dimension) -> bool {
        self == other
    }

    /// Invert dimensions (negate exponents)
    pub fn invert(&self) -> Dimension {
        self.power(-1)
    }

    fn zip_with(&self, other: &Dimension, op: impl Fn(Rational32, Rational32) -> Rational32) -> Dimension {
        let mut result = self.exponents;
        for (e, o) in result.iter_mut().zip(other.exponents.iter()) {
            *e = op(*e, *o);
        }
        Dimension { exponents: result }
    }

    /// Common name of the dimension ("pressure", "flow", ...), if it has one
    pub fn name(&self) -> Option<&'static str> {
        if !self.exponents.iter().all(|e| e.is_integer()) {
            return None;
        }
        let ints: Vec<i32> = self.exponents.iter().map(|e| e.to_integer()).collect();
        match ints.as_slice() {
            [0, 0, 0, 0, 0, 0, 0] => Some("dimensionless"),
            [1, 0, 0, 0, 0, 0, 0] => Some("length"),
            [0, 1, 0, 0, 0, 0, 0] => Some("mass"),
            [0, 0, 1, 0, 0, 0, 0] => Some("time"),
            [0, 0, 0, 1, 0, 0, 0] => Some("current"),
            [0, 0, 0, 0, 1, 0, 0] => Some("temperature"),
            [0, 0, 0, 0, 0, 1, 0] => Some("amount"),
            [0, 0, 0, 0, 0, 0, 1] => Some("luminosity"),
            [1, 0, -1, 0, 0, 0, 0] => Some("velocity"),
            [1, 0, -2, 0, 0, 0, 0] => Some("acceleration"),
            [1, 1, -2, 0, 0, 0, 0] => Some("force"),
            [2, 1, -2, 0, 0, 0, 0] => Some("energy"),
            [2, 1, -3, 0, 0, 0, 0] => Some("power"),
            [-1, 1, -2, 0, 0, 0, 0] => Some("pressure"),
            [-1, 1, -3, 0, 0, 0, 0] => Some("pressure drift"),
            [2, 0, 0, 0, 0, 0, 0] => Some("area"),
            [3, 0, 0, 0, 0, 0, 0] => Some("volume"),
            [3, 0, -1, 0, 0, 0, 0] => Some("flow"),
            [0, 0, -1, 0, 0, 0, 0] => Some("frequency"),
            [2, 0, -2, 0, 0, 0, 0] => Some("absorbed dose"),
            _ => None,
        }
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        self.multiply(&rhs)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        self.divide(&rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        for base in BaseDimension::ALL {
            let exp = self.exponent(base);
            if exp.is_zero() {
                continue;
            }
            if exp.is_one() {
                parts.push(base.symbol().to_string());
            } else {
                // Ratio displays as "2" or "1/2"
                parts.push(format!("{}^{}", base.symbol(), exp));
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn velocity() -> Dimension {
        Dimension::new([1, 0, -1, 0, 0, 0, 0])
    }

    #[test]
    fn test_dimensionless() {
        assert!(Dimension::DIMENSIONLESS.is_dimensionless());
        assert!(!Dimension::LENGTH.is_dimensionless());
        assert_eq!(Dimension::default(), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn test_divide() {
        let v = Dimension::LENGTH.divide(&Dimension::TIME);
        assert_eq!(v, velocity());
        assert_eq!(v.name(), Some("velocity"));
    }

    #[test]
    fn test_pressure_composition() {
        // Pressure = M L^-1 T^-2
        let pressure = Dimension::LENGTH.power(-1) * Dimension::MASS * Dimension::TIME.power(-2);
        assert_eq!(pressure, Dimension::new([-1, 1, -2, 0, 0, 0, 0]));
        assert_eq!(pressure.name(), Some("pressure"));
    }

    #[test]
    fn test_power_composition() {
        // Power = L^2 M T^-3
        let power = Dimension::LENGTH.power(2) * Dimension::MASS / Dimension::TIME.power(3);
        assert!(power.equals(&Dimension::new([2, 1, -3, 0, 0, 0, 0])));
    }

    #[test]
    fn test_rational_power() {
        let area = Dimension::LENGTH.power(2);
        let side = area.power(Rational32::new(1, 2));
        assert_eq!(side, Dimension::LENGTH);

        let root_time = Dimension::TIME.power(Rational32::new(1, 2));
        assert_eq!(root_time.exponent(BaseDimension::Time), Rational32::new(1, 2));
        assert_eq!(root_time.name(), None);
        assert_eq!(root_time.multiply(&root_time), Dimension::TIME);
    }

    #[test]
    fn test_base_constructor() {
        assert_eq!(Dimension::base(BaseDimension::Temperature), Dimension::TEMPERATURE);
        assert_eq!(
            Dimension::base(BaseDimension::LuminousIntensity),
            Dimension::LUMINOUS_INTENSITY
        );
    }

    #[test]
    #[should_panic]
    fn test_exponent_overflow_panics() {
        let huge = Dimension::LENGTH.power(1 << 30);
        let _ = huge.multiply(&huge);
    }

    #[test]
    fn test_invert() {
        assert_eq!(Dimension::TIME.invert().name(), Some("frequency"));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", Dimension::LENGTH), "L");
        assert_eq!(format!("{}", velocity()), "L T^-1");
        assert_eq!(format!("{}", Dimension::TIME.power(Rational32::new(1, 2))), "T^1/2");
    }

    #[test]
    fn test_serde_round_trip() {
        let pressure = Dimension::new([-1, 1, -2, 0, 0, 0, 0]);
        let json = serde_json::to_string(&pressure).unwrap();
        let back: Dimension = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pressure);
    }

    fn arb_dimension() -> impl Strategy<Value = Dimension> {
        (prop::array::uniform7(-6i32..=6), 1i32..=4).prop_map(|(nums, den)| {
            let mut exponents = [Rational32::zero(); 7];
            for (e, n) in exponents.iter_mut().zip(nums.iter()) {
                *e = Rational32::new(*n, den);
            }
            Dimension::from_ratios(exponents)
        })
    }

    proptest! {
        #[test]
        fn multiply_is_associative(a in arb_dimension(), b in arb_dimension(), c in arb_dimension()) {
            prop_assert_eq!(a.multiply(&b).multiply(&c), a.multiply(&b.multiply(&c)));
        }

        #[test]
        fn multiply_is_commutative(a in arb_dimension(), b in arb_dimension()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn dimensionless_is_identity(a in arb_dimension()) {
            prop_assert_eq!(a.multiply(&Dimension::DIMENSIONLESS), a);
        }

        #[test]
        fn divide_by_self_is_dimensionless(a in arb_dimension()) {
            prop_assert!(a.divide(&a).is_dimensionless());
        }

        #[test]
        fn zeroth_power_is_dimensionless(a in arb_dimension()) {
            prop_assert_eq!(a.power(0), Dimension::DIMENSIONLESS);
        }
    }
}
