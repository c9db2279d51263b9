//! Runtime unit registry
//!
//! Maps unit identifiers to their quantity, symbol and converter pair, for
//! code that only knows units dynamically. Built once from the declared
//! units and read-only afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use measures_core::AmountType;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::convert::compose;
use crate::error::ConversionError;
use crate::unit::Converter;
use crate::{units, Dimension, Quantity, QuantityKind, Unit};

/// One registered unit
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    id: String,
    symbol: String,
    display_name: Option<String>,
    quantity: QuantityKind,
    converter: Converter<AmountType>,
    reference: bool,
}

impl RegistryEntry {
    fn of<Q: Quantity>(id: String, unit: &Unit<Q>, reference: bool) -> Self {
        RegistryEntry {
            id,
            symbol: unit.symbol().to_string(),
            display_name: unit.display_name().map(str::to_string),
            quantity: Q::kind(),
            converter: unit.converter().clone(),
            reference,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn quantity(&self) -> QuantityKind {
        self.quantity
    }

    pub fn converter(&self) -> &Converter<AmountType> {
        &self.converter
    }

    /// Whether this is the reference (identity) entry of its quantity
    pub fn is_reference(&self) -> bool {
        self.reference
    }

    pub fn to_reference(&self, amount: AmountType) -> AmountType {
        self.converter.to_standard(amount)
    }

    pub fn from_reference(&self, amount: AmountType) -> AmountType {
        self.converter.from_standard(amount)
    }

    pub fn info(&self) -> UnitInfo {
        UnitInfo {
            id: self.id.clone(),
            symbol: self.symbol.clone(),
            display_name: self.display_name.clone(),
            quantity: self.quantity.name().to_string(),
            dimension: self.quantity.dimension(),
            dimension_name: self.quantity.dimension().name().map(str::to_string),
            reference: self.reference,
        }
    }
}

/// Serializable snapshot of a registry entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInfo {
    pub id: String,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub quantity: String,
    pub dimension: Dimension,
    /// Common name of the dimension, e.g. "pressure"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_name: Option<String>,
    pub reference: bool,
}

/// Collects units, then validates them into a [`UnitRegistry`].
///
/// Identifiers default to the unit symbol. Each quantity needs exactly one
/// reference entry, given explicitly with [`RegistryBuilder::reference`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<RegistryEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the reference unit of `Q`
    pub fn reference<Q: Quantity>(self, unit: &Unit<Q>) -> Self {
        let id = unit.symbol().to_string();
        self.reference_as(id, unit)
    }

    /// Register the reference unit of `Q` under an explicit identifier
    pub fn reference_as<Q: Quantity>(mut self, id: impl Into<String>, unit: &Unit<Q>) -> Self {
        self.entries.push(RegistryEntry::of(id.into(), unit, true));
        self
    }

    pub fn unit<Q: Quantity>(self, unit: &Unit<Q>) -> Self {
        let id = unit.symbol().to_string();
        self.unit_as(id, unit)
    }

    pub fn unit_as<Q: Quantity>(mut self, id: impl Into<String>, unit: &Unit<Q>) -> Self {
        self.entries.push(RegistryEntry::of(id.into(), unit, false));
        self
    }

    /// Validate and freeze the registry
    pub fn build(self) -> Result<UnitRegistry, ConversionError> {
        let mut index = HashMap::with_capacity(self.entries.len());
        let mut references = HashMap::new();

        for (position, entry) in self.entries.iter().enumerate() {
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(ConversionError::DuplicateUnit(entry.id.clone()));
            }
            if entry.reference {
                if !entry.converter.is_identity() {
                    return Err(ConversionError::NonIdentityReference(entry.id.clone()));
                }
                if references.insert(entry.quantity, position).is_some() {
                    return Err(ConversionError::DuplicateReference(entry.quantity.name()));
                }
            }
            debug!(
                id = %entry.id,
                quantity = entry.quantity.name(),
                reference = entry.reference,
                "registered unit"
            );
        }

        if let Some(orphan) = self.entries.iter().find(|e| !references.contains_key(&e.quantity)) {
            return Err(ConversionError::MissingReference(orphan.quantity.name()));
        }

        info!(
            units = self.entries.len(),
            quantities = references.len(),
            "unit registry built"
        );

        Ok(UnitRegistry {
            entries: self.entries,
            index,
            references,
        })
    }
}

/// Read-only table of registered units
#[derive(Debug)]
pub struct UnitRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
    references: HashMap<QuantityKind, usize>,
}

impl UnitRegistry {
    pub fn get(&self, id: &str) -> Result<&RegistryEntry, ConversionError> {
        self.index
            .get(id)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| ConversionError::UnknownUnit(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Quantity of a dynamically named unit
    pub fn associated_quantity(&self, id: &str) -> Result<QuantityKind, ConversionError> {
        self.get(id).map(RegistryEntry::quantity)
    }

    pub fn symbol(&self, id: &str) -> Result<&str, ConversionError> {
        self.get(id).map(RegistryEntry::symbol)
    }

    /// The reference entry of a quantity, if any of its units are registered
    pub fn reference_of(&self, kind: QuantityKind) -> Option<&RegistryEntry> {
        self.references.get(&kind).map(|&position| &self.entries[position])
    }

    /// Convert between two registered units of the same quantity
    pub fn convert(&self, amount: AmountType, from: &str, to: &str) -> Result<AmountType, ConversionError> {
        self.try_convert(amount, from, to).inspect_err(|err| {
            debug!(from, to, error = %err, "conversion failed");
        })
    }

    fn try_convert(&self, amount: AmountType, from: &str, to: &str) -> Result<AmountType, ConversionError> {
        let source = self.get(from)?;
        let target = self.get(to)?;
        if source.quantity != target.quantity {
            return Err(ConversionError::dimension_mismatch(
                from,
                to,
                source.quantity.name(),
                target.quantity.name(),
                source.quantity.dimension(),
                target.quantity.dimension(),
            ));
        }
        Ok(compose(amount, &source.converter, &target.converter))
    }

    /// Express an amount of a registered unit in its quantity's reference unit
    pub fn to_reference(&self, amount: AmountType, id: &str) -> Result<AmountType, ConversionError> {
        self.get(id).map(|entry| entry.to_reference(amount))
    }

    /// All units of a quantity, in registration order
    pub fn units_of(&self, kind: QuantityKind) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter().filter(move |e| e.quantity == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of every entry, in registration order
    pub fn describe(&self) -> Vec<UnitInfo> {
        self.entries.iter().map(RegistryEntry::info).collect()
    }
}

static GLOBAL: OnceLock<UnitRegistry> = OnceLock::new();

/// Build the process-wide registry from the declared units.
///
/// Call once at startup, before any dynamic conversion. Later calls return
/// the registry already installed.
pub fn initialize() -> Result<&'static UnitRegistry, ConversionError> {
    if let Some(registry) = GLOBAL.get() {
        return Ok(registry);
    }
    let registry = units::standard_registry()?;
    Ok(GLOBAL.get_or_init(|| registry))
}

/// The process-wide registry; `NotInitialized` before [`initialize`]
pub fn global() -> Result<&'static UnitRegistry, ConversionError> {
    installed(&GLOBAL)
}

fn installed(cell: &OnceLock<UnitRegistry>) -> Result<&UnitRegistry, ConversionError> {
    cell.get().ok_or(ConversionError::NotInitialized)
}
