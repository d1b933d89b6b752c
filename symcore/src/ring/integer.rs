use rug::Integer;
use super::Ring;

/// The ring of integers, backed by arbitrary-precision [`Integer`]s.
///
/// This structure is a ring but **not** a field, so operations that need division (such as
/// integrating a polynomial) fail over it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Integers;

impl Ring for Integers {
    type Element = Integer;

    fn zero(&self) -> Integer {
        Integer::new()
    }

    fn one(&self) -> Integer {
        Integer::from(1)
    }

    fn add(&self, a: &Integer, b: &Integer) -> Integer {
        Integer::from(a + b)
    }

    fn multiply(&self, a: &Integer, b: &Integer) -> Integer {
        Integer::from(a * b)
    }

    fn negate(&self, a: &Integer) -> Integer {
        Integer::from(-a)
    }

    fn subtract(&self, a: &Integer, b: &Integer) -> Integer {
        Integer::from(a - b)
    }

    fn is_zero(&self, a: &Integer) -> bool {
        a.is_zero()
    }

    fn times(&self, a: &Integer, n: u32) -> Integer {
        Integer::from(a * n)
    }
}
