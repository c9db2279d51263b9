//! Quantity and unit declarations
//!
//! Each quantity is a marker type with its dimension and standard unit;
//! units are process-wide statics built on first use. The runtime registry
//! is derived from these same statics by [`standard_registry`], so the typed
//! and the dynamic view of a unit always share one converter pair.

/// Declare a quantity marker type
macro_rules! quantity {
    ($(#[$meta:meta])* $Name:ident, $display:literal, $standard:ident, $dimension:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $Name;

        impl $crate::Quantity for $Name {
            const NAME: &'static str = $display;

            fn dimension() -> $crate::Dimension {
                $dimension
            }

            fn standard_unit() -> &'static $crate::Unit<Self> {
                &$standard
            }
        }
    };
}

mod base;
mod derived;

pub use base::*;
pub use derived::*;

use crate::error::ConversionError;
use crate::registry::{RegistryBuilder, UnitRegistry};

/// Register every declared unit, standard units as references
pub fn register_all(builder: RegistryBuilder) -> RegistryBuilder {
    let builder = base::register(builder);
    derived::register(builder)
}

/// Build the registry of every declared unit
pub fn standard_registry() -> Result<UnitRegistry, ConversionError> {
    register_all(RegistryBuilder::new()).build()
}
