//! Measures Units - Dimension algebra and unit conversion
//!
//! Provides dimensionally safe amounts and conversions between units.
//!
//! - `Dimension`: exponents over the seven SI base dimensions
//! - `Quantity`: marker types (Pressure, Volume, ...) fixing a dimension
//!   and a standard unit
//! - `Unit`: a symbol plus converters to and from the standard unit
//! - `convert`: typed conversion, which cannot fail
//! - `UnitRegistry`: dynamic conversion by unit identifier, which checks
//!   that both units share a quantity
//!
//! Quantities declared here:
//! - Length (m, km, in, ft, mi, etc.)
//! - Mass (kg, g, t, u, etc.)
//! - Time (s, min, h, d, etc.)
//! - Electric current, amount of substance, luminous intensity
//! - Temperature (K, °C, °F, °R)
//! - Area, Volume, Flow (m², l, gal, sccm, etc.)
//! - Pressure and pressure drift (Pa, bar, Torr, psi, psia, etc.)
//! - Power, absorbed dose, relative permeability
//!
//! The amount representation is picked by Cargo feature, see
//! [`measures_core::AmountType`].

mod convert;
mod dimension;
mod error;
mod measure;
mod prefix;
mod quantity;
mod unit;

pub mod factors;
pub mod registry;
pub mod units;

pub use convert::{compose, convert, convert_by_id};
pub use dimension::{BaseDimension, Dimension};
pub use error::{codes, ConversionError};
pub use measure::Measure;
pub use prefix::UnitPrefix;
pub use quantity::{Quantity, QuantityKind};
pub use registry::{RegistryBuilder, RegistryEntry, UnitInfo, UnitRegistry};
pub use unit::{ConvertFn, Converter, Unit};

pub use measures_core::{Amount, AmountError, AmountType, Decimal};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        convert, convert_by_id, Amount, AmountType, ConversionError, Dimension, Measure, Quantity,
        Unit, UnitPrefix,
    };
}
