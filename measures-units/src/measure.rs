//! An amount together with its unit

use std::fmt;
use std::ops::{Add, Sub};

use measures_core::{Amount, AmountType};

use crate::convert::convert;
use crate::{Quantity, Unit};

/// A single amount of quantity `Q`, expressed in one of its units
#[derive(Debug, Clone)]
pub struct Measure<Q: Quantity, A: Amount = AmountType> {
    amount: A,
    unit: &'static Unit<Q, A>,
}

impl<Q: Quantity, A: Amount> Measure<Q, A> {
    pub fn new(amount: A, unit: &'static Unit<Q, A>) -> Self {
        Measure { amount, unit }
    }

    pub fn amount(&self) -> &A {
        &self.amount
    }

    pub fn unit(&self) -> &'static Unit<Q, A> {
        self.unit
    }

    /// The amount expressed in the standard unit of `Q`
    pub fn standard_amount(&self) -> A {
        self.unit.to_standard(self.amount.clone())
    }

    /// The same measure expressed in `unit`
    pub fn convert_to(&self, unit: &'static Unit<Q, A>) -> Self {
        Measure {
            amount: convert(self.amount.clone(), self.unit, unit),
            unit,
        }
    }
}

/// The right-hand side is converted into the left unit
impl<Q: Quantity, A: Amount> Add for Measure<Q, A> {
    type Output = Measure<Q, A>;

    fn add(self, rhs: Self) -> Self::Output {
        let rhs = convert(rhs.amount, rhs.unit, self.unit);
        Measure::new(self.amount + rhs, self.unit)
    }
}

impl<Q: Quantity, A: Amount> Sub for Measure<Q, A> {
    type Output = Measure<Q, A>;

    fn sub(self, rhs: Self) -> Self::Output {
        let rhs = convert(rhs.amount, rhs.unit, self.unit);
        Measure::new(self.amount - rhs, self.unit)
    }
}

/// Measures are equal when their standard amounts are
impl<Q: Quantity, A: Amount> PartialEq for Measure<Q, A> {
    fn eq(&self, other: &Self) -> bool {
        self.standard_amount() == other.standard_amount()
    }
}

impl<Q: Quantity, A: Amount> fmt::Display for Measure<Q, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Pressure, Volume, BAR, CUBIC_METER, KILOPASCAL, LITER, MILLIBAR, PASCAL};
    use approx::assert_relative_eq;

    fn amount(literal: &str) -> AmountType {
        <AmountType as Amount>::parse(literal).unwrap()
    }

    fn f(a: &AmountType) -> f64 {
        Amount::to_f64(a)
    }

    #[test]
    fn test_standard_amount() {
        let m: Measure<Pressure> = Measure::new(amount("2"), &BAR);
        assert_relative_eq!(f(&m.standard_amount()), 200000.0, max_relative = 1e-6);
        assert_eq!(m.unit().symbol(), "bar");
    }

    #[test]
    fn test_convert_to() {
        let m: Measure<Volume> = Measure::new(amount("2500"), &LITER);
        let m3 = m.convert_to(&CUBIC_METER);
        assert_relative_eq!(f(m3.amount()), 2.5, max_relative = 1e-6);
        assert_eq!(m3.unit().symbol(), "m³");
    }

    #[test]
    fn test_add_and_sub_keep_left_unit() {
        let a: Measure<Pressure> = Measure::new(amount("1"), &BAR);
        let b: Measure<Pressure> = Measure::new(amount("500"), &MILLIBAR);
        let sum = a.clone() + b.clone();
        assert_eq!(sum.unit().symbol(), "bar");
        assert_relative_eq!(f(sum.amount()), 1.5, max_relative = 1e-6);
        let diff = a - b;
        assert_relative_eq!(f(diff.amount()), 0.5, max_relative = 1e-6);
    }

    #[test]
    fn test_equality_across_units() {
        let kpa: Measure<Pressure> = Measure::new(amount("100"), &KILOPASCAL);
        let pa: Measure<Pressure> = Measure::new(amount("100000"), &PASCAL);
        assert_eq!(kpa, pa);
    }

    #[test]
    fn test_display() {
        let m: Measure<Pressure> = Measure::new(amount("3"), &BAR);
        assert_eq!(m.to_string(), "3 bar");
    }
}
