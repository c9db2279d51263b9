//! Unit representation with converter pairs

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use measures_core::{Amount, AmountType};

use crate::error::ConversionError;
use crate::{Dimension, Quantity, QuantityKind, UnitPrefix};

/// Shared converter function
pub type ConvertFn<A> = Arc<dyn Fn(A) -> A + Send + Sync>;

/// Converter pair between a unit and its quantity's standard unit
#[derive(Clone)]
pub enum Converter<A: Amount> {
    /// The standard unit itself
    Identity,
    /// standard = amount * factor; the inverse divides by the same factor
    Factor(A),
    /// Caller-supplied pair, e.g. affine temperature scales.
    /// The pair is trusted to be mutually inverse.
    Custom {
        to_standard: ConvertFn<A>,
        from_standard: ConvertFn<A>,
    },
}

impl<A: Amount> Converter<A> {
    pub fn to_standard(&self, amount: A) -> A {
        match self {
            Converter::Identity => amount,
            Converter::Factor(factor) => amount * factor.clone(),
            Converter::Custom { to_standard, .. } => to_standard(amount),
        }
    }

    pub fn from_standard(&self, amount: A) -> A {
        match self {
            Converter::Identity => amount,
            Converter::Factor(factor) => amount / factor.clone(),
            Converter::Custom { from_standard, .. } => from_standard(amount),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Converter::Identity)
    }
}

impl<A: Amount> fmt::Debug for Converter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Converter::Identity => write!(f, "Identity"),
            Converter::Factor(factor) => f.debug_tuple("Factor").field(factor).finish(),
            Converter::Custom { .. } => write!(f, "Custom"),
        }
    }
}

/// A unit of quantity `Q`: a display symbol and a converter pair to and
/// from `Q`'s standard unit. Units are immutable once built.
#[derive(Debug, Clone)]
pub struct Unit<Q: Quantity, A: Amount = AmountType> {
    symbol: String,
    display_name: Option<String>,
    converter: Converter<A>,
    quantity: PhantomData<fn() -> Q>,
}

impl<Q: Quantity, A: Amount> Unit<Q, A> {
    fn with_converter(symbol: impl Into<String>, converter: Converter<A>) -> Self {
        Unit {
            symbol: symbol.into(),
            display_name: None,
            converter,
            quantity: PhantomData,
        }
    }

    /// The standard unit of `Q` (identity converters)
    pub fn standard(symbol: impl Into<String>) -> Self {
        Self::with_converter(symbol, Converter::Identity)
    }

    /// Prefixed standard unit, e.g. kilo + "Pa" = "kPa" scaling by 1000
    pub fn prefixed(prefix: UnitPrefix) -> Self {
        let symbol = format!("{}{}", prefix.symbol(), Q::standard_unit().symbol());
        Self::with_converter(symbol, Converter::Factor(prefix.factor_in::<A>()))
    }

    /// Linear unit: standard = amount * factor
    pub fn linear(symbol: impl Into<String>, factor: A) -> Self {
        Self::with_converter(symbol, Converter::Factor(factor))
    }

    /// Unit with caller-supplied converters. The caller is responsible for
    /// `from_standard` being the inverse of `to_standard`; see
    /// [`Unit::verify_round_trip`].
    pub fn general<T, F>(symbol: impl Into<String>, to_standard: T, from_standard: F) -> Self
    where
        T: Fn(A) -> A + Send + Sync + 'static,
        F: Fn(A) -> A + Send + Sync + 'static,
    {
        Self::with_converter(
            symbol,
            Converter::Custom {
                to_standard: Arc::new(to_standard),
                from_standard: Arc::new(from_standard),
            },
        )
    }

    /// Builder: set the longer display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn converter(&self) -> &Converter<A> {
        &self.converter
    }

    /// Convert an amount in this unit to the standard unit
    pub fn to_standard(&self, amount: A) -> A {
        self.converter.to_standard(amount)
    }

    /// Convert an amount in the standard unit to this unit
    pub fn from_standard(&self, amount: A) -> A {
        self.converter.from_standard(amount)
    }

    /// Convert an amount in this unit to `target`
    pub fn convert_to(&self, amount: A, target: &Unit<Q, A>) -> A {
        crate::convert::compose(amount, &self.converter, &target.converter)
    }

    pub fn is_standard(&self) -> bool {
        self.converter.is_identity()
    }

    pub fn quantity(&self) -> QuantityKind {
        Q::kind()
    }

    pub fn dimension(&self) -> Dimension {
        Q::dimension()
    }

    /// Check `from_standard(to_standard(a)) == a` for every sample, within
    /// `tolerance` relative to `max(|a|, 1)`.
    ///
    /// Construction never runs this; it is an opt-in check for units built
    /// with [`Unit::general`].
    pub fn verify_round_trip(&self, samples: &[A], tolerance: A) -> Result<(), ConversionError> {
        for sample in samples {
            let back = self.from_standard(self.to_standard(sample.clone()));
            let magnitude = abs(sample.clone());
            let scale = if magnitude < A::one() { A::one() } else { magnitude };
            if abs_diff(back, sample.clone()) > tolerance.clone() * scale {
                return Err(ConversionError::NonInvertible {
                    symbol: self.symbol.clone(),
                    sample: sample.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<Q: Quantity, A: Amount> fmt::Display for Unit<Q, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

fn abs<A: Amount>(a: A) -> A {
    if a < A::zero() {
        A::zero() - a
    } else {
        a
    }
}

fn abs_diff<A: Amount>(a: A, b: A) -> A {
    if a > b {
        a - b
    } else {
        b - a
    }
}
