//! Conversion and registry errors
//!
//! Errors never abort the process. They are values returned to the caller,
//! each with a machine-readable code.

use measures_core::AmountError;
use thiserror::Error;

use crate::Dimension;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const DUPLICATE_UNIT: &str = "DUPLICATE_UNIT";
    pub const MISSING_REFERENCE: &str = "MISSING_REFERENCE";
    pub const DUPLICATE_REFERENCE: &str = "DUPLICATE_REFERENCE";
    pub const NON_IDENTITY_REFERENCE: &str = "NON_IDENTITY_REFERENCE";
    pub const NON_INVERTIBLE: &str = "NON_INVERTIBLE";
    pub const AMOUNT_ERROR: &str = "AMOUNT_ERROR";
    pub const NOT_INITIALIZED: &str = "NOT_INITIALIZED";
}

/// Errors that can occur during unit conversion and registry construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Units belong to different quantities
    #[error("cannot convert {from} ({from_quantity}, {from_dim}) to {to} ({to_quantity}, {to_dim}): dimension mismatch")]
    DimensionMismatch {
        from: String,
        to: String,
        from_quantity: &'static str,
        to_quantity: &'static str,
        from_dim: Dimension,
        to_dim: Dimension,
    },

    /// Unit identifier has no registry entry
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unit registered twice: {0}")]
    DuplicateUnit(String),

    #[error("quantity {0} has units but no reference unit")]
    MissingReference(&'static str),

    #[error("quantity {0} has more than one reference unit")]
    DuplicateReference(&'static str),

    #[error("reference unit {0} does not have identity converters")]
    NonIdentityReference(String),

    /// Round-trip verification found a sample that does not come back
    #[error("converters of unit {symbol} are not inverses at amount {sample}")]
    NonInvertible { symbol: String, sample: String },

    #[error("amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("unit registry has not been initialized")]
    NotInitialized,
}

impl ConversionError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            ConversionError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            ConversionError::DuplicateUnit(_) => codes::DUPLICATE_UNIT,
            ConversionError::MissingReference(_) => codes::MISSING_REFERENCE,
            ConversionError::DuplicateReference(_) => codes::DUPLICATE_REFERENCE,
            ConversionError::NonIdentityReference(_) => codes::NON_IDENTITY_REFERENCE,
            ConversionError::NonInvertible { .. } => codes::NON_INVERTIBLE,
            ConversionError::Amount(_) => codes::AMOUNT_ERROR,
            ConversionError::NotInitialized => codes::NOT_INITIALIZED,
        }
    }

    /// Build a dimension mismatch error
    pub fn dimension_mismatch(
        from: impl Into<String>,
        to: impl Into<String>,
        from_quantity: &'static str,
        to_quantity: &'static str,
        from_dim: Dimension,
        to_dim: Dimension,
    ) -> Self {
        ConversionError::DimensionMismatch {
            from: from.into(),
            to: to.into(),
            from_quantity,
            to_quantity,
            from_dim,
            to_dim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = ConversionError::dimension_mismatch(
            "bar",
            "l",
            "Pressure",
            "Volume",
            Dimension::new([-1, 1, -2, 0, 0, 0, 0]),
            Dimension::new([3, 0, 0, 0, 0, 0, 0]),
        );
        assert_eq!(err.code(), codes::DIMENSION_MISMATCH);
        assert_eq!(
            err.to_string(),
            "cannot convert bar (Pressure, L^-1 M T^-2) to l (Volume, L^3): dimension mismatch"
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(ConversionError::UnknownUnit("furlong".into()).code(), codes::UNKNOWN_UNIT);
        assert_eq!(ConversionError::NotInitialized.code(), codes::NOT_INITIALIZED);
        let amount: ConversionError = AmountError::DivisionByZero.into();
        assert_eq!(amount.code(), codes::AMOUNT_ERROR);
        assert_eq!(amount.to_string(), "amount error: Division by zero");
    }
}
