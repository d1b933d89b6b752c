//! The algebraic-structure interface that expressions are generic over.
//!
//! A [`Ring`] is a *structure object*: a value describing how to do arithmetic on some element
//! type, rather than a trait implemented by the element type itself. This lets the same element
//! type take part in different structures (for example, integers modulo different primes), and
//! lets expression operations receive the structure explicitly, exactly where they need `0`, `1`,
//! or coefficient arithmetic.
//!
//! Structures that support division also implement [`Field`] and advertise it through
//! [`Ring::as_field`]. Operations that need division check this capability at runtime and fail
//! with [`UnsupportedOperation`](crate::error::UnsupportedOperation) over structures that are
//! only rings.

mod integer;
mod rational;
mod real;

pub use integer::Integers;
pub use rational::Rationals;
pub use real::Reals;

use crate::function::Function;
use std::fmt::{Debug, Display};

/// A set with addition, multiplication, additive identity, multiplicative identity, and
/// negation.
///
/// Implementations must satisfy the usual ring laws; the crate relies on them when rewriting
/// expressions (for example, `a * 0 = 0`).
pub trait Ring: Debug + Send + Sync {
    /// The type of the elements of this ring.
    type Element: Clone + Debug + Display + PartialEq + Send + Sync;

    /// The additive identity.
    fn zero(&self) -> Self::Element;

    /// The multiplicative identity.
    fn one(&self) -> Self::Element;

    /// Returns `a + b`.
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Returns `a * b`.
    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Returns `-a`.
    fn negate(&self, a: &Self::Element) -> Self::Element;

    /// Returns `a - b`.
    fn subtract(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.add(a, &self.negate(b))
    }

    /// Returns true if `a` is the additive identity.
    fn is_zero(&self, a: &Self::Element) -> bool {
        *a == self.zero()
    }

    /// Returns true if `a` is the multiplicative identity.
    fn is_one(&self, a: &Self::Element) -> bool {
        *a == self.one()
    }

    /// Returns `a + a + ... + a` (`n` times), or zero if `n` is zero.
    ///
    /// Rings have no native integer-scaling operator, so this is the only way to multiply an
    /// element by a natural number.
    fn times(&self, a: &Self::Element, n: u32) -> Self::Element {
        let mut result = self.zero();
        for _ in 0..n {
            result = self.add(&result, a);
        }
        result
    }

    /// Returns the image of the natural number `n` in this ring, `1 + 1 + ... + 1`.
    fn from_count(&self, n: u32) -> Self::Element {
        self.times(&self.one(), n)
    }

    /// Returns `a^n`, using square-and-multiply.
    fn pow(&self, a: &Self::Element, n: u32) -> Self::Element {
        let mut result = self.one();
        let mut base = a.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.multiply(&result, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = self.multiply(&base, &base);
            }
        }

        result
    }

    /// Applies an elementary function to an element, if this structure can evaluate it.
    ///
    /// Returns [`None`] by default; structures like the [`Reals`] override this.
    fn apply(&self, function: Function, a: &Self::Element) -> Option<Self::Element> {
        let _ = (function, a);
        None
    }

    /// Returns this structure as a [`Field`], if it is one.
    fn as_field(&self) -> Option<&dyn Field<Element = Self::Element>> {
        None
    }
}

/// A [`Ring`] where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Returns the multiplicative inverse of `a`, or [`None`] if `a` has no inverse.
    fn inverse(&self, a: &Self::Element) -> Option<Self::Element>;

    /// Returns `a / b`, or [`None`] if `b` has no inverse.
    fn divide(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        self.inverse(b).map(|inv| self.multiply(a, &inv))
    }
}
