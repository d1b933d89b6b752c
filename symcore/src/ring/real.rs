use crate::function::Function;
use super::{Field, Ring};

/// The field of real numbers, approximated by [`f64`].
///
/// Unlike the exact structures, the reals can evaluate every elementary [`Function`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reals;

impl Ring for Reals {
    type Element = f64;

    fn zero(&self) -> f64 {
        0.0
    }

    fn one(&self) -> f64 {
        1.0
    }

    fn add(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn multiply(&self, a: &f64, b: &f64) -> f64 {
        a * b
    }

    fn negate(&self, a: &f64) -> f64 {
        -a
    }

    fn subtract(&self, a: &f64, b: &f64) -> f64 {
        a - b
    }

    fn times(&self, a: &f64, n: u32) -> f64 {
        a * f64::from(n)
    }

    fn pow(&self, a: &f64, n: u32) -> f64 {
        match i32::try_from(n) {
            Ok(n) => a.powi(n),
            Err(_) => a.powf(f64::from(n)),
        }
    }

    fn apply(&self, function: Function, a: &f64) -> Option<f64> {
        Some(match function {
            Function::Sin => a.sin(),
            Function::Cos => a.cos(),
            Function::Tan => a.tan(),
            Function::Exp => a.exp(),
            Function::Ln => a.ln(),
            Function::Sqrt => a.sqrt(),
        })
    }

    fn as_field(&self) -> Option<&dyn Field<Element = f64>> {
        Some(self)
    }
}

impl Field for Reals {
    fn inverse(&self, a: &f64) -> Option<f64> {
        if *a == 0.0 {
            None
        } else {
            Some(a.recip())
        }
    }
}
