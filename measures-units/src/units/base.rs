//! Quantities over a single SI base dimension

use std::sync::LazyLock;

use measures_core::AmountType;

use crate::factors::{self, Factor};
use crate::registry::RegistryBuilder;
use crate::{Dimension, Unit, UnitPrefix};

fn linear<Q: crate::Quantity>(symbol: &str, name: &str, factor: Factor) -> Unit<Q> {
    Unit::linear(symbol, factor.value()).with_display_name(name)
}

// ========== Length ==========

quantity!(
    /// Length, standard unit the meter
    Length, "Length", METER, Dimension::LENGTH
);

pub static METER: LazyLock<Unit<Length>> =
    LazyLock::new(|| Unit::standard("m").with_display_name("meter"));
pub static KILOMETER: LazyLock<Unit<Length>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Kilo).with_display_name("kilometer"));
pub static DECIMETER: LazyLock<Unit<Length>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Deci).with_display_name("decimeter"));
pub static CENTIMETER: LazyLock<Unit<Length>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Centi).with_display_name("centimeter"));
pub static MILLIMETER: LazyLock<Unit<Length>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Milli).with_display_name("millimeter"));
pub static MICROMETER: LazyLock<Unit<Length>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Micro).with_display_name("micrometer"));
pub static NANOMETER: LazyLock<Unit<Length>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Nano).with_display_name("nanometer"));
pub static ANGSTROM: LazyLock<Unit<Length>> =
    LazyLock::new(|| linear("Å", "ångström", factors::METERS_PER_ANGSTROM));
pub static INCH: LazyLock<Unit<Length>> =
    LazyLock::new(|| linear("in", "inch", factors::METERS_PER_INCH));
pub static FOOT: LazyLock<Unit<Length>> =
    LazyLock::new(|| linear("ft", "foot", factors::METERS_PER_FOOT));
pub static YARD: LazyLock<Unit<Length>> =
    LazyLock::new(|| linear("yd", "yard", factors::METERS_PER_YARD));
pub static MILE: LazyLock<Unit<Length>> =
    LazyLock::new(|| linear("mi", "mile", factors::METERS_PER_MILE));
pub static NAUTICAL_MILE: LazyLock<Unit<Length>> =
    LazyLock::new(|| linear("NM", "nautical mile", factors::METERS_PER_NAUTICAL_MILE));

// ========== Mass ==========

quantity!(
    /// Mass, standard unit the kilogram
    Mass, "Mass", KILOGRAM, Dimension::MASS
);

pub static KILOGRAM: LazyLock<Unit<Mass>> =
    LazyLock::new(|| Unit::standard("kg").with_display_name("kilogram"));
// The standard unit already carries a prefix, so gram-based units are linear
pub static GRAM: LazyLock<Unit<Mass>> =
    LazyLock::new(|| Unit::linear("g", UnitPrefix::Milli.factor()).with_display_name("gram"));
pub static MILLIGRAM: LazyLock<Unit<Mass>> =
    LazyLock::new(|| Unit::linear("mg", UnitPrefix::Micro.factor()).with_display_name("milligram"));
pub static TONNE: LazyLock<Unit<Mass>> =
    LazyLock::new(|| Unit::linear("t", UnitPrefix::Kilo.factor()).with_display_name("tonne"));
pub static ATOMIC_MASS_UNIT: LazyLock<Unit<Mass>> = LazyLock::new(|| {
    linear("u", "atomic mass unit", factors::KILOGRAMS_PER_ATOMIC_MASS_UNIT)
});
pub static ELECTRON_MASS: LazyLock<Unit<Mass>> =
    LazyLock::new(|| linear("mₑ", "electron mass", factors::KILOGRAMS_PER_ELECTRON_MASS));

// ========== Time ==========

quantity!(
    /// Time, standard unit the second
    Time, "Time", SECOND, Dimension::TIME
);

pub static SECOND: LazyLock<Unit<Time>> =
    LazyLock::new(|| Unit::standard("s").with_display_name("second"));
pub static MILLISECOND: LazyLock<Unit<Time>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Milli).with_display_name("millisecond"));
pub static MICROSECOND: LazyLock<Unit<Time>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Micro).with_display_name("microsecond"));
pub static NANOSECOND: LazyLock<Unit<Time>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Nano).with_display_name("nanosecond"));
pub static MINUTE: LazyLock<Unit<Time>> =
    LazyLock::new(|| linear("min", "minute", factors::SECONDS_PER_MINUTE));
pub static HOUR: LazyLock<Unit<Time>> =
    LazyLock::new(|| linear("h", "hour", factors::SECONDS_PER_HOUR));
pub static DAY: LazyLock<Unit<Time>> =
    LazyLock::new(|| linear("d", "day", factors::SECONDS_PER_DAY));
pub static WEEK: LazyLock<Unit<Time>> =
    LazyLock::new(|| linear("wk", "week", factors::SECONDS_PER_WEEK));
pub static JULIAN_YEAR: LazyLock<Unit<Time>> =
    LazyLock::new(|| linear("a", "julian year", factors::SECONDS_PER_JULIAN_YEAR));

// ========== Electric current ==========

quantity!(
    /// Electric current, standard unit the ampere
    ElectricCurrent, "ElectricCurrent", AMPERE, Dimension::ELECTRIC_CURRENT
);

pub static AMPERE: LazyLock<Unit<ElectricCurrent>> =
    LazyLock::new(|| Unit::standard("A").with_display_name("ampere"));
pub static MILLIAMPERE: LazyLock<Unit<ElectricCurrent>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Milli).with_display_name("milliampere"));
pub static MICROAMPERE: LazyLock<Unit<ElectricCurrent>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Micro).with_display_name("microampere"));

// ========== Temperature ==========

quantity!(
    /// Thermodynamic temperature, standard unit the kelvin
    Temperature, "Temperature", KELVIN, Dimension::TEMPERATURE
);

pub static KELVIN: LazyLock<Unit<Temperature>> =
    LazyLock::new(|| Unit::standard("K").with_display_name("kelvin"));

pub static CELSIUS: LazyLock<Unit<Temperature>> = LazyLock::new(|| {
    let intercept = factors::KELVIN_CELSIUS_INTERCEPT.value();
    let back = intercept.clone();
    Unit::general(
        "°C",
        move |a: AmountType| a + intercept.clone(),
        move |a: AmountType| a - back.clone(),
    )
    .with_display_name("degree Celsius")
});

pub static FAHRENHEIT: LazyLock<Unit<Temperature>> = LazyLock::new(|| {
    let intercept = factors::KELVIN_FAHRENHEIT_INTERCEPT.value();
    let slope = factors::KELVIN_FAHRENHEIT_SLOPE.value();
    let (back_intercept, back_slope) = (intercept.clone(), slope.clone());
    Unit::general(
        "°F",
        move |a: AmountType| (a + intercept.clone()) * slope.clone(),
        move |a: AmountType| a / back_slope.clone() - back_intercept.clone(),
    )
    .with_display_name("degree Fahrenheit")
});

pub static RANKINE: LazyLock<Unit<Temperature>> =
    LazyLock::new(|| linear("°R", "degree Rankine", factors::KELVIN_FAHRENHEIT_SLOPE));

// ========== Amount of substance ==========

quantity!(
    /// Amount of substance, standard unit the mole
    AmountOfSubstance, "AmountOfSubstance", MOLE, Dimension::AMOUNT_OF_SUBSTANCE
);

pub static MOLE: LazyLock<Unit<AmountOfSubstance>> =
    LazyLock::new(|| Unit::standard("mol").with_display_name("mole"));
pub static MILLIMOLE: LazyLock<Unit<AmountOfSubstance>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Milli).with_display_name("millimole"));
pub static MICROMOLE: LazyLock<Unit<AmountOfSubstance>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Micro).with_display_name("micromole"));

// ========== Luminous intensity ==========

quantity!(
    /// Luminous intensity, standard unit the candela
    LuminousIntensity, "LuminousIntensity", CANDELA, Dimension::LUMINOUS_INTENSITY
);

pub static CANDELA: LazyLock<Unit<LuminousIntensity>> =
    LazyLock::new(|| Unit::standard("cd").with_display_name("candela"));

pub(super) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .reference(&*METER)
        .unit(&*KILOMETER)
        .unit(&*DECIMETER)
        .unit(&*CENTIMETER)
        .unit(&*MILLIMETER)
        .unit(&*MICROMETER)
        .unit(&*NANOMETER)
        .unit(&*ANGSTROM)
        .unit(&*INCH)
        .unit(&*FOOT)
        .unit(&*YARD)
        .unit(&*MILE)
        .unit(&*NAUTICAL_MILE)
        .reference(&*KILOGRAM)
        .unit(&*GRAM)
        .unit(&*MILLIGRAM)
        .unit(&*TONNE)
        .unit(&*ATOMIC_MASS_UNIT)
        .unit(&*ELECTRON_MASS)
        .reference(&*SECOND)
        .unit(&*MILLISECOND)
        .unit(&*MICROSECOND)
        .unit(&*NANOSECOND)
        .unit(&*MINUTE)
        .unit(&*HOUR)
        .unit(&*DAY)
        .unit(&*WEEK)
        .unit(&*JULIAN_YEAR)
        .reference(&*AMPERE)
        .unit(&*MILLIAMPERE)
        .unit(&*MICROAMPERE)
        .reference(&*KELVIN)
        .unit(&*CELSIUS)
        .unit(&*FAHRENHEIT)
        .unit(&*RANKINE)
        .reference(&*MOLE)
        .unit(&*MILLIMOLE)
        .unit(&*MICROMOLE)
        .reference(&*CANDELA)
}
