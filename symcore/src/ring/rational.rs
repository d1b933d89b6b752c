use rug::Rational;
use super::{Field, Ring};

/// The field of rational numbers, backed by arbitrary-precision [`Rational`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rationals;

impl Ring for Rationals {
    type Element = Rational;

    fn zero(&self) -> Rational {
        Rational::new()
    }

    fn one(&self) -> Rational {
        Rational::from(1)
    }

    fn add(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::from(a + b)
    }

    fn multiply(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::from(a * b)
    }

    fn negate(&self, a: &Rational) -> Rational {
        Rational::from(-a)
    }

    fn subtract(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::from(a - b)
    }

    fn is_zero(&self, a: &Rational) -> bool {
        *a == 0
    }

    fn as_field(&self) -> Option<&dyn Field<Element = Rational>> {
        Some(self)
    }
}

impl Field for Rationals {
    fn inverse(&self, a: &Rational) -> Option<Rational> {
        if self.is_zero(a) {
            None
        } else {
            Some(a.clone().recip())
        }
    }
}
