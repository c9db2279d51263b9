//! Quantities composed from the base dimensions

use std::sync::LazyLock;

use measures_core::AmountType;

use crate::factors::{self, cube, square};
use crate::registry::RegistryBuilder;
use crate::{Dimension, Unit, UnitPrefix};

// ========== Area ==========

quantity!(
    /// Area, standard unit the square meter
    Area, "Area", SQUARE_METER, Dimension::LENGTH.power(2)
);

pub static SQUARE_METER: LazyLock<Unit<Area>> =
    LazyLock::new(|| Unit::standard("m²").with_display_name("square meter"));
pub static SQUARE_DECIMETER: LazyLock<Unit<Area>> = LazyLock::new(|| {
    Unit::linear("dm²", square(UnitPrefix::Deci.factor())).with_display_name("square decimeter")
});
pub static SQUARE_CENTIMETER: LazyLock<Unit<Area>> = LazyLock::new(|| {
    Unit::linear("cm²", square(UnitPrefix::Centi.factor())).with_display_name("square centimeter")
});
pub static SQUARE_MILLIMETER: LazyLock<Unit<Area>> = LazyLock::new(|| {
    Unit::linear("mm²", square(UnitPrefix::Milli.factor())).with_display_name("square millimeter")
});
pub static BARN: LazyLock<Unit<Area>> = LazyLock::new(|| {
    Unit::linear("b", factors::SQUARE_METERS_PER_BARN.value()).with_display_name("barn")
});
pub static HECTARE: LazyLock<Unit<Area>> = LazyLock::new(|| {
    Unit::linear("ha", square(UnitPrefix::Hecto.factor())).with_display_name("hectare")
});

// ========== Volume ==========

quantity!(
    /// Volume, standard unit the cubic meter
    Volume, "Volume", CUBIC_METER, Dimension::LENGTH.power(3)
);

pub static CUBIC_METER: LazyLock<Unit<Volume>> =
    LazyLock::new(|| Unit::standard("m³").with_display_name("cubic meter"));
pub static LITER: LazyLock<Unit<Volume>> =
    LazyLock::new(|| Unit::linear("l", cube(UnitPrefix::Deci.factor())).with_display_name("liter"));
pub static MILLILITER: LazyLock<Unit<Volume>> = LazyLock::new(|| {
    Unit::linear("ml", cube(UnitPrefix::Centi.factor())).with_display_name("milliliter")
});
pub static CUBIC_DECIMETER: LazyLock<Unit<Volume>> = LazyLock::new(|| {
    Unit::linear("dm³", cube(UnitPrefix::Deci.factor())).with_display_name("cubic decimeter")
});
pub static CUBIC_CENTIMETER: LazyLock<Unit<Volume>> = LazyLock::new(|| {
    Unit::linear("cm³", cube(UnitPrefix::Centi.factor())).with_display_name("cubic centimeter")
});
pub static CUBIC_MILLIMETER: LazyLock<Unit<Volume>> = LazyLock::new(|| {
    Unit::linear("mm³", cube(UnitPrefix::Milli.factor())).with_display_name("cubic millimeter")
});
pub static US_GALLON: LazyLock<Unit<Volume>> = LazyLock::new(|| {
    Unit::linear("gal", factors::CUBIC_METERS_PER_US_LIQUID_GALLON.value())
        .with_display_name("US liquid gallon")
});

// ========== Flow ==========

quantity!(
    /// Volumetric flow, standard unit the cubic meter per second
    Flow, "Flow", CUBIC_METER_PER_SECOND, Dimension::LENGTH.power(3) / Dimension::TIME
);

pub static CUBIC_METER_PER_SECOND: LazyLock<Unit<Flow>> =
    LazyLock::new(|| Unit::standard("m³/s").with_display_name("cubic meter per second"));
pub static SCCM: LazyLock<Unit<Flow>> = LazyLock::new(|| {
    let per_minute = cube(UnitPrefix::Centi.factor()) / factors::SECONDS_PER_MINUTE.value();
    Unit::linear("sccm", per_minute).with_display_name("standard cubic centimeter per minute")
});
pub static SLM: LazyLock<Unit<Flow>> = LazyLock::new(|| {
    let per_minute = cube(UnitPrefix::Deci.factor()) / factors::SECONDS_PER_MINUTE.value();
    Unit::linear("slm", per_minute).with_display_name("standard liter per minute")
});

// ========== Pressure ==========

quantity!(
    /// Pressure, standard unit the pascal
    Pressure, "Pressure", PASCAL,
    Dimension::MASS * Dimension::LENGTH.power(-1) * Dimension::TIME.power(-2)
);

pub static PASCAL: LazyLock<Unit<Pressure>> =
    LazyLock::new(|| Unit::standard("Pa").with_display_name("pascal"));
pub static KILOPASCAL: LazyLock<Unit<Pressure>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Kilo).with_display_name("kilopascal"));
pub static MEGAPASCAL: LazyLock<Unit<Pressure>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Mega).with_display_name("megapascal"));
pub static GIGAPASCAL: LazyLock<Unit<Pressure>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Giga).with_display_name("gigapascal"));
pub static MILLIPASCAL: LazyLock<Unit<Pressure>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Milli).with_display_name("millipascal"));
pub static MICROPASCAL: LazyLock<Unit<Pressure>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Micro).with_display_name("micropascal"));
pub static NANOPASCAL: LazyLock<Unit<Pressure>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Nano).with_display_name("nanopascal"));
pub static TORR: LazyLock<Unit<Pressure>> = LazyLock::new(|| {
    Unit::linear("Torr", factors::PASCALS_PER_TORR.value()).with_display_name("torr")
});
pub static MILLITORR: LazyLock<Unit<Pressure>> = LazyLock::new(|| {
    Unit::linear("mTorr", factors::PASCALS_PER_TORR.value() * UnitPrefix::Milli.factor())
        .with_display_name("millitorr")
});
pub static BAR: LazyLock<Unit<Pressure>> =
    LazyLock::new(|| Unit::linear("bar", factors::PASCALS_PER_BAR.value()).with_display_name("bar"));
pub static KILOBAR: LazyLock<Unit<Pressure>> = LazyLock::new(|| {
    Unit::linear("kbar", factors::PASCALS_PER_BAR.value() * UnitPrefix::Kilo.factor())
        .with_display_name("kilobar")
});
pub static MEGABAR: LazyLock<Unit<Pressure>> = LazyLock::new(|| {
    Unit::linear("Mbar", factors::PASCALS_PER_BAR.value() * UnitPrefix::Mega.factor())
        .with_display_name("megabar")
});
pub static MILLIBAR: LazyLock<Unit<Pressure>> = LazyLock::new(|| {
    Unit::linear("mbar", factors::PASCALS_PER_BAR.value() * UnitPrefix::Milli.factor())
        .with_display_name("millibar")
});
pub static TECHNICAL_ATMOSPHERE: LazyLock<Unit<Pressure>> = LazyLock::new(|| {
    Unit::linear("at", factors::PASCALS_PER_TECHNICAL_ATMOSPHERE.value())
        .with_display_name("technical atmosphere")
});
pub static STANDARD_ATMOSPHERE: LazyLock<Unit<Pressure>> = LazyLock::new(|| {
    Unit::linear("atm", factors::PASCALS_PER_STANDARD_ATMOSPHERE.value())
        .with_display_name("standard atmosphere")
});
pub static PSI: LazyLock<Unit<Pressure>> = LazyLock::new(|| {
    Unit::linear("psi", factors::PASCALS_PER_POUND_PER_SQUARE_INCH.value())
        .with_display_name("pound per square inch")
});
/// Gauge pressure; same scale as psi, relative to ambient
pub static PSIG: LazyLock<Unit<Pressure>> = LazyLock::new(|| {
    Unit::linear("psig", factors::PASCALS_PER_POUND_PER_SQUARE_INCH.value())
        .with_display_name("pound per square inch gauge")
});
/// Absolute pressure in psi, offset by one standard atmosphere
pub static PSIA: LazyLock<Unit<Pressure>> = LazyLock::new(|| {
    let psi = factors::PASCALS_PER_POUND_PER_SQUARE_INCH.value();
    let atm = factors::PASCALS_PER_STANDARD_ATMOSPHERE.value();
    let (back_psi, back_atm) = (psi.clone(), atm.clone());
    Unit::general(
        "psia",
        move |a: AmountType| a * psi.clone() + atm.clone(),
        move |a: AmountType| (a - back_atm.clone()) / back_psi.clone(),
    )
    .with_display_name("pound per square inch absolute")
});

// ========== Pressure drift ==========

quantity!(
    /// Rate of pressure change, standard unit the pascal per second
    PressureDrift, "PressureDrift", PASCAL_PER_SECOND,
    Dimension::MASS * Dimension::LENGTH.power(-1) * Dimension::TIME.power(-3)
);

pub static PASCAL_PER_SECOND: LazyLock<Unit<PressureDrift>> =
    LazyLock::new(|| Unit::standard("Pa/s").with_display_name("pascal per second"));
pub static MILLITORR_PER_MINUTE: LazyLock<Unit<PressureDrift>> = LazyLock::new(|| {
    let factor = factors::PASCALS_PER_TORR.value() * UnitPrefix::Milli.factor()
        / factors::SECONDS_PER_MINUTE.value();
    Unit::linear("mTorr/min", factor).with_display_name("millitorr per minute")
});
pub static MILLIBAR_PER_MINUTE: LazyLock<Unit<PressureDrift>> = LazyLock::new(|| {
    let factor = factors::PASCALS_PER_BAR.value() * UnitPrefix::Milli.factor()
        / factors::SECONDS_PER_MINUTE.value();
    Unit::linear("mbar/min", factor).with_display_name("millibar per minute")
});

// ========== Power ==========

quantity!(
    /// Power, standard unit the watt
    Power, "Power", WATT,
    Dimension::MASS * Dimension::LENGTH.power(2) * Dimension::TIME.power(-3)
);

pub static WATT: LazyLock<Unit<Power>> =
    LazyLock::new(|| Unit::standard("W").with_display_name("watt"));
pub static KILOWATT: LazyLock<Unit<Power>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Kilo).with_display_name("kilowatt"));
pub static MEGAWATT: LazyLock<Unit<Power>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Mega).with_display_name("megawatt"));
pub static MILLIWATT: LazyLock<Unit<Power>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Milli).with_display_name("milliwatt"));

// ========== Absorbed dose ==========

quantity!(
    /// Absorbed dose of ionizing radiation (J/kg), standard unit the gray
    AbsorbedDose, "AbsorbedDose", GRAY,
    Dimension::LENGTH.power(2) * Dimension::TIME.power(-2)
);

pub static GRAY: LazyLock<Unit<AbsorbedDose>> =
    LazyLock::new(|| Unit::standard("Gy").with_display_name("gray"));
pub static CENTIGRAY: LazyLock<Unit<AbsorbedDose>> =
    LazyLock::new(|| Unit::prefixed(UnitPrefix::Centi).with_display_name("centigray"));

// ========== Relative permeability ==========

quantity!(
    /// Ratio of a material's permeability to that of free space
    RelativePermeability, "RelativePermeability", ONE, Dimension::DIMENSIONLESS
);

/// Registered under the id "1" since its symbol is empty
pub static ONE: LazyLock<Unit<RelativePermeability>> =
    LazyLock::new(|| Unit::standard("").with_display_name("one"));

pub(super) fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .reference(&*SQUARE_METER)
        .unit(&*SQUARE_DECIMETER)
        .unit(&*SQUARE_CENTIMETER)
        .unit(&*SQUARE_MILLIMETER)
        .unit(&*BARN)
        .unit(&*HECTARE)
        .reference(&*CUBIC_METER)
        .unit(&*LITER)
        .unit(&*MILLILITER)
        .unit(&*CUBIC_DECIMETER)
        .unit(&*CUBIC_CENTIMETER)
        .unit(&*CUBIC_MILLIMETER)
        .unit(&*US_GALLON)
        .reference(&*CUBIC_METER_PER_SECOND)
        .unit(&*SCCM)
        .unit(&*SLM)
        .reference(&*PASCAL)
        .unit(&*KILOPASCAL)
        .unit(&*MEGAPASCAL)
        .unit(&*GIGAPASCAL)
        .unit(&*MILLIPASCAL)
        .unit(&*MICROPASCAL)
        .unit(&*NANOPASCAL)
        .unit(&*TORR)
        .unit(&*MILLITORR)
        .unit(&*BAR)
        .unit(&*KILOBAR)
        .unit(&*MEGABAR)
        .unit(&*MILLIBAR)
        .unit(&*TECHNICAL_ATMOSPHERE)
        .unit(&*STANDARD_ATMOSPHERE)
        .unit(&*PSI)
        .unit(&*PSIG)
        .unit(&*PSIA)
        .reference(&*PASCAL_PER_SECOND)
        .unit(&*MILLITORR_PER_MINUTE)
        .unit(&*MILLIBAR_PER_MINUTE)
        .reference(&*WATT)
        .unit(&*KILOWATT)
        .unit(&*MEGAWATT)
        .unit(&*MILLIWATT)
        .reference(&*GRAY)
        .unit(&*CENTIGRAY)
        .reference_as("1", &*ONE)
}
