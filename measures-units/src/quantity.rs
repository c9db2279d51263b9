//! Quantity marker types

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Dimension, Unit};

/// A physical quantity, such as pressure or volume.
///
/// Implemented by zero-sized marker types, one per quantity, so that
/// "same quantity" is checked by the type system wherever the quantity is
/// statically known.
pub trait Quantity: Copy + fmt::Debug + Default + Send + Sync + 'static {
    /// Display name of the quantity
    const NAME: &'static str;

    /// Dimension over the SI base dimensions, composed from the base
    /// dimension vectors
    fn dimension() -> Dimension;

    /// The unit with identity converters
    fn standard_unit() -> &'static Unit<Self>;

    /// Runtime identifier of this quantity
    fn kind() -> QuantityKind {
        QuantityKind::of::<Self>()
    }
}

/// Runtime identifier of a quantity, for code that only knows units
/// dynamically. Two kinds are equal iff they name the same marker type.
#[derive(Debug, Clone, Copy)]
pub struct QuantityKind {
    name: &'static str,
    dimension: Dimension,
    type_id: TypeId,
}

impl QuantityKind {
    pub fn of<Q: Quantity>() -> Self {
        QuantityKind {
            name: Q::NAME,
            dimension: Q::dimension(),
            type_id: TypeId::of::<Q>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }
}

impl PartialEq for QuantityKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for QuantityKind {}

impl Hash for QuantityKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
