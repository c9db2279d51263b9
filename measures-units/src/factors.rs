//! Conversion factors and physical constants used when declaring units
//!
//! Factors are stored as decimal literals and parsed into the amount type on
//! use, so a `Decimal` build gets them exactly and float builds get them
//! correctly rounded.

use measures_core::{Amount, AmountType};

/// A named multiplicative factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factor {
    literal: &'static str,
    approx: f64,
}

impl Factor {
    pub const fn new(literal: &'static str, approx: f64) -> Self {
        Factor { literal, approx }
    }

    /// The exact decimal literal
    pub const fn literal(&self) -> &'static str {
        self.literal
    }

    /// The factor in amount type `A`.
    ///
    /// Every literal in this module parses in every amount type; a literal
    /// that does not is a bug and trips a debug assertion.
    pub fn value_in<A: Amount>(&self) -> A {
        match A::parse(self.literal) {
            Ok(value) => value,
            Err(err) => {
                debug_assert!(false, "factor literal {} does not parse: {}", self.literal, err);
                A::from_f64(self.approx)
            }
        }
    }

    /// The factor in this build's amount type
    pub fn value(&self) -> AmountType {
        self.value_in::<AmountType>()
    }
}

// Time
pub const SECONDS_PER_MINUTE: Factor = Factor::new("60", 60.0);
pub const SECONDS_PER_HOUR: Factor = Factor::new("3600", 3600.0);
pub const SECONDS_PER_DAY: Factor = Factor::new("86400", 86400.0);
pub const SECONDS_PER_WEEK: Factor = Factor::new("604800", 604800.0);
pub const SECONDS_PER_JULIAN_YEAR: Factor = Factor::new("31557600", 31557600.0);

// Temperature
pub const KELVIN_CELSIUS_INTERCEPT: Factor = Factor::new("273.15", 273.15);
pub const KELVIN_FAHRENHEIT_INTERCEPT: Factor = Factor::new("459.67", 459.67);
pub const KELVIN_FAHRENHEIT_SLOPE: Factor = Factor::new("5/9", 5.0 / 9.0);

// Electromagnetism
pub const COULOMBS_PER_ELEMENTARY_CHARGE: Factor = Factor::new("1.602176634e-19", 1.602176634e-19);
pub const JOULES_PER_ELECTRON_VOLT: Factor = COULOMBS_PER_ELEMENTARY_CHARGE;

// Length, area, volume
pub const METERS_PER_ANGSTROM: Factor = Factor::new("1e-10", 1e-10);
pub const METERS_PER_INCH: Factor = Factor::new("0.0254", 0.0254);
pub const METERS_PER_FOOT: Factor = Factor::new("0.3048", 0.3048);
pub const METERS_PER_YARD: Factor = Factor::new("0.9144", 0.9144);
pub const METERS_PER_MILE: Factor = Factor::new("1609.344", 1609.344);
pub const METERS_PER_NAUTICAL_MILE: Factor = Factor::new("1852", 1852.0);
pub const SQUARE_METERS_PER_BARN: Factor = Factor::new("1e-28", 1e-28);
pub const CUBIC_METERS_PER_US_LIQUID_GALLON: Factor = Factor::new("0.003785411784", 0.003785411784);

// Mass
pub const KILOGRAMS_PER_ELECTRON_MASS: Factor = Factor::new("9.1093837015e-31", 9.1093837015e-31);
pub const KILOGRAMS_PER_ATOMIC_MASS_UNIT: Factor = Factor::new("1.66053906660e-27", 1.66053906660e-27);

// Radioactivity
pub const BECQUERELS_PER_CURIE: Factor = Factor::new("37000000000", 3.7e10);

// Pressure
pub const PASCALS_PER_TORR: Factor = Factor::new("101325/760", 101325.0 / 760.0);
pub const PASCALS_PER_STANDARD_ATMOSPHERE: Factor = Factor::new("101325", 101325.0);
pub const PASCALS_PER_TECHNICAL_ATMOSPHERE: Factor = Factor::new("98066.5", 98066.5);
pub const PASCALS_PER_BAR: Factor = Factor::new("100000", 100000.0);
pub const PASCALS_PER_POUND_PER_SQUARE_INCH: Factor = Factor::new("6894.757293168", 6894.757293168);

// Plane angle
pub const RADIANS_PER_DEGREE: Factor = Factor::new(
    "0.017453292519943295769236907684886127134428718885417",
    std::f64::consts::PI / 180.0,
);
pub const RADIANS_PER_ARC_MINUTE: Factor = Factor::new(
    "0.00029088820866572159615394846141476878557381198142362",
    std::f64::consts::PI / 10800.0,
);
pub const RADIANS_PER_ARC_SECOND: Factor = Factor::new(
    "0.0000048481368110953599358991410235794797595635330237270",
    std::f64::consts::PI / 648000.0,
);

/// a²
pub fn square<A: Amount>(a: A) -> A {
    a.clone() * a
}

/// a³
pub fn cube<A: Amount>(a: A) -> A {
    a.clone() * a.clone() * a
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use measures_core::Decimal;

    const ALL: [Factor; 26] = [
        SECONDS_PER_MINUTE,
        SECONDS_PER_HOUR,
        SECONDS_PER_DAY,
        SECONDS_PER_WEEK,
        SECONDS_PER_JULIAN_YEAR,
        KELVIN_CELSIUS_INTERCEPT,
        KELVIN_FAHRENHEIT_INTERCEPT,
        KELVIN_FAHRENHEIT_SLOPE,
        COULOMBS_PER_ELEMENTARY_CHARGE,
        METERS_PER_ANGSTROM,
        METERS_PER_INCH,
        METERS_PER_FOOT,
        METERS_PER_YARD,
        METERS_PER_MILE,
        METERS_PER_NAUTICAL_MILE,
        SQUARE_METERS_PER_BARN,
        CUBIC_METERS_PER_US_LIQUID_GALLON,
        KILOGRAMS_PER_ELECTRON_MASS,
        KILOGRAMS_PER_ATOMIC_MASS_UNIT,
        BECQUERELS_PER_CURIE,
        PASCALS_PER_TORR,
        PASCALS_PER_STANDARD_ATMOSPHERE,
        PASCALS_PER_TECHNICAL_ATMOSPHERE,
        PASCALS_PER_BAR,
        PASCALS_PER_POUND_PER_SQUARE_INCH,
        RADIANS_PER_DEGREE,
    ];

    #[test]
    fn test_literals_agree_with_approximations() {
        for factor in ALL {
            let parsed = <f64 as Amount>::parse(factor.literal()).unwrap();
            assert_relative_eq!(parsed, factor.approx, max_relative = 1e-12);
            let exact = <Decimal as Amount>::parse(factor.literal()).unwrap();
            assert_relative_eq!(Amount::to_f64(&exact), factor.approx, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_every_literal_parses_in_every_amount_type() {
        let extra = [JOULES_PER_ELECTRON_VOLT, RADIANS_PER_ARC_MINUTE, RADIANS_PER_ARC_SECOND];
        for factor in ALL.iter().chain(extra.iter()) {
            assert!(<f32 as Amount>::parse(factor.literal()).is_ok(), "{}", factor.literal());
            assert!(<f64 as Amount>::parse(factor.literal()).is_ok(), "{}", factor.literal());
            assert!(<Decimal as Amount>::parse(factor.literal()).is_ok(), "{}", factor.literal());
        }
    }

    #[test]
    fn test_derived_lengths_are_consistent() {
        let inch = METERS_PER_INCH.value_in::<Decimal>();
        assert_eq!(inch.clone() * Decimal::from_i64(12), METERS_PER_FOOT.value_in::<Decimal>());
        assert_eq!(
            inch * Decimal::from_i64(12 * 3 * 1760),
            METERS_PER_MILE.value_in::<Decimal>()
        );
    }

    #[test]
    fn test_derived_times_are_consistent() {
        let minute = SECONDS_PER_MINUTE.value_in::<f64>();
        assert_eq!(minute * 60.0, SECONDS_PER_HOUR.value_in::<f64>());
        assert_eq!(SECONDS_PER_DAY.value_in::<f64>() * 7.0, SECONDS_PER_WEEK.value_in::<f64>());
        assert_eq!(SECONDS_PER_DAY.value_in::<f64>() * 365.25, SECONDS_PER_JULIAN_YEAR.value_in::<f64>());
    }

    #[test]
    fn test_arc_units() {
        let degree = RADIANS_PER_DEGREE.value_in::<f64>();
        assert_relative_eq!(RADIANS_PER_ARC_MINUTE.value_in::<f64>() * 60.0, degree, max_relative = 1e-15);
        assert_relative_eq!(RADIANS_PER_ARC_SECOND.value_in::<f64>() * 3600.0, degree, max_relative = 1e-15);
    }

    #[test]
    fn test_square_and_cube() {
        assert_eq!(square(3.0f64), 9.0);
        assert_eq!(cube(Decimal::from_str("0.1").unwrap()), Decimal::from_str("0.001").unwrap());
    }
}
