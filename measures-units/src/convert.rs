//! Conversion between units of one quantity
//!
//! Every conversion, typed or dynamic, is the same composition: the source
//! unit's to-standard converter followed by the target unit's from-standard
//! converter.

use measures_core::{Amount, AmountType};

use crate::error::ConversionError;
use crate::registry;
use crate::unit::Converter;
use crate::{Quantity, Unit};

/// Compose two converter pairs: `to.from_standard(from.to_standard(amount))`
pub fn compose<A: Amount>(amount: A, from: &Converter<A>, to: &Converter<A>) -> A {
    to.from_standard(from.to_standard(amount))
}

/// Convert between two units of the same quantity.
///
/// Mixing quantities does not type-check, so this cannot fail.
pub fn convert<Q: Quantity, A: Amount>(amount: A, from: &Unit<Q, A>, to: &Unit<Q, A>) -> A {
    compose(amount, from.converter(), to.converter())
}

/// Convert between units named by registry identifiers, through the
/// process-wide registry.
///
/// Fails with `NotInitialized` before [`registry::initialize`], with
/// `UnknownUnit` for an unregistered identifier and with
/// `DimensionMismatch` when the units belong to different quantities.
pub fn convert_by_id(amount: AmountType, from: &str, to: &str) -> Result<AmountType, ConversionError> {
    registry::global()?.convert(amount, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes;
    use crate::units::{
        Length, Pressure, BAR, CELSIUS, FAHRENHEIT, FOOT, INCH, KELVIN, KILOMETER, LITER,
        CUBIC_METER, METER, MILE, PASCAL, PSI, PSIA, STANDARD_ATMOSPHERE, TORR,
    };
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn amount(literal: &str) -> AmountType {
        <AmountType as Amount>::parse(literal).unwrap()
    }

    fn f(a: AmountType) -> f64 {
        Amount::to_f64(&a)
    }

    #[test]
    fn test_celsius_zero_is_kelvin_273_15() {
        assert_relative_eq!(f(convert(amount("0"), &*CELSIUS, &*KELVIN)), 273.15, max_relative = 1e-6);
    }

    #[test]
    fn test_one_atmosphere_in_pascal() {
        assert_relative_eq!(
            f(convert(amount("1"), &*STANDARD_ATMOSPHERE, &*PASCAL)),
            101325.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_bar_through_pascal_to_psi() {
        let pa = convert(amount("1"), &*BAR, &*PASCAL);
        assert_relative_eq!(f(pa.clone()), 100000.0, max_relative = 1e-6);
        let psi = convert(pa, &*PASCAL, &*PSI);
        assert_relative_eq!(f(psi), 14.5038, max_relative = 1e-5);
    }

    #[test]
    fn test_liter_in_cubic_meters() {
        assert_relative_eq!(f(convert(amount("1"), &*LITER, &*CUBIC_METER)), 0.001, max_relative = 1e-6);
    }

    #[test]
    fn test_compose_matches_typed_convert() {
        let a = amount("3.5");
        let typed = convert(a.clone(), &*INCH, &*FOOT);
        let composed = compose(a, INCH.converter(), FOOT.converter());
        assert_eq!(typed, composed);
    }

    #[test]
    fn test_generic_over_amount_type() {
        let km: Unit<Length, f32> = Unit::prefixed(crate::UnitPrefix::Kilo);
        let m: Unit<Length, f32> = Unit::standard("m");
        assert_eq!(convert(2.0f32, &km, &m), 2000.0f32);
    }

    #[test]
    fn test_convert_by_id_uses_global_registry() {
        registry::initialize().unwrap();
        let pa = convert_by_id(amount("1"), "bar", "Pa").unwrap();
        assert_relative_eq!(f(pa), 100000.0, max_relative = 1e-6);
        let k = convert_by_id(amount("0"), "°C", "K").unwrap();
        assert_relative_eq!(f(k), 273.15, max_relative = 1e-6);
    }

    #[test]
    fn test_pressure_to_volume_is_dimension_mismatch() {
        registry::initialize().unwrap();
        let err = convert_by_id(amount("1"), "bar", "l").unwrap_err();
        assert_eq!(err.code(), codes::DIMENSION_MISMATCH);
        match err {
            ConversionError::DimensionMismatch { from_quantity, to_quantity, .. } => {
                assert_eq!(from_quantity, Pressure::NAME);
                assert_eq!(to_quantity, "Volume");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_unit_by_id() {
        registry::initialize().unwrap();
        let err = convert_by_id(amount("1"), "furlong", "m").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("furlong".into()));
    }

    #[test]
    fn test_typed_and_dynamic_paths_agree() {
        registry::initialize().unwrap();
        let a = amount("12.5");
        let typed = convert(a.clone(), &*MILE, &*KILOMETER);
        let dynamic = convert_by_id(a, "mi", "km").unwrap();
        assert_eq!(typed, dynamic);
    }

    proptest! {
        #[test]
        fn prop_round_trip_between_units(x in -1.0e6f64..1.0e6f64) {
            let a = <AmountType as Amount>::from_f64(x);
            let scale = x.abs().max(1.0);

            let back = convert(convert(a.clone(), &*BAR, &*TORR), &*TORR, &*BAR);
            prop_assert!((f(back) - x).abs() <= 1e-4 * scale);

            let back = convert(convert(a.clone(), &*FAHRENHEIT, &*CELSIUS), &*CELSIUS, &*FAHRENHEIT);
            prop_assert!((f(back) - x).abs() <= 1e-4 * scale);

            let back = convert(convert(a.clone(), &*PSIA, &*PSI), &*PSI, &*PSIA);
            prop_assert!((f(back) - x).abs() <= 1e-4 * scale);

            let back = convert(convert(a, &*METER, &*MILE), &*MILE, &*METER);
            prop_assert!((f(back) - x).abs() <= 1e-4 * scale);
        }
    }
}
