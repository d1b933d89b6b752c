//! Products of variables raised to positive integer powers.

use crate::{ctxt::Ctxt, error::InvalidArgument, fmt::Latex, ring::Ring, Result, Variable};
use std::{cmp::Ordering, collections::BTreeMap, fmt};
use symcore_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A product of variables, each raised to a strictly positive integer power, such as `x^2*y`.
///
/// A variable that does not appear in the monomial has an implicit exponent of zero; zero
/// exponents are never stored. The empty monomial ([`Monomial::one`]) is the multiplicative
/// identity.
///
/// # Ordering
///
/// Monomials are ordered by [degree](Monomial::degree) first, then by comparing their sorted
/// `(variable name, exponent)` lists. This order is total and consistent with equality, which
/// lets [`Polynomial`](crate::Polynomial) print its terms in a deterministic, descending-degree
/// order. It is not a mathematical canonicalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monomial {
    exponents: BTreeMap<Variable, u32>,
}

impl Monomial {
    /// The empty monomial, `1`.
    pub fn one() -> Self {
        Self::default()
    }

    /// The monomial consisting of a single variable with exponent one.
    pub fn variable(var: Variable) -> Self {
        Self { exponents: BTreeMap::from([(var, 1)]) }
    }

    /// Creates a monomial from `(variable, exponent)` pairs.
    ///
    /// Zero exponents are dropped, and exponents of repeated variables are summed. Returns an
    /// [`InvalidArgument`] error if any exponent is negative, or if an exponent does not fit in a
    /// `u32`.
    pub fn new(exponents: impl IntoIterator<Item = (Variable, i64)>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (var, exp) in exponents {
            let exp = u32::try_from(exp).map_err(|_| Error::new(
                format!("{}^{}", var, exp),
                InvalidArgument {
                    reason: format!("the exponent of `{}` must be a non-negative integer that fits in 32 bits", var),
                },
            ))?;
            if exp > 0 {
                let total = map.get(&var).copied().unwrap_or(0u32)
                    .checked_add(exp)
                    .ok_or_else(|| exponent_overflow(&var, format!("{}^{}", var, exp)))?;
                map.insert(var, total);
            }
        }
        Ok(Self { exponents: map })
    }

    /// Creates a monomial from `(variable, exponent)` pairs with unsigned exponents. Zero
    /// exponents are dropped, and exponents of repeated variables are summed.
    ///
    /// Returns an [`InvalidArgument`] error if a summed exponent does not fit in a `u32`.
    pub fn from_exponents(exponents: impl IntoIterator<Item = (Variable, u32)>) -> Result<Self> {
        Self::new(exponents.into_iter().map(|(var, exp)| (var, i64::from(exp))))
    }

    /// Returns the exponent of the given variable, which is zero if the variable does not appear.
    pub fn power(&self, var: &Variable) -> u32 {
        self.exponents.get(var).copied().unwrap_or(0)
    }

    /// Returns the total degree, the sum of all exponents.
    pub fn degree(&self) -> u64 {
        self.exponents.values().copied().map(u64::from).sum()
    }

    /// Returns true if this is the empty monomial.
    pub fn is_one(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Returns true if the variable appears in this monomial.
    pub fn contains(&self, var: &Variable) -> bool {
        self.exponents.contains_key(var)
    }

    /// Iterates over the `(variable, exponent)` pairs, sorted by variable name.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, u32)> {
        self.exponents.iter().map(|(var, exp)| (var, *exp))
    }

    /// Iterates over the variables in this monomial, sorted by name.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.exponents.keys()
    }

    /// Returns the product of two monomials.
    ///
    /// Returns an [`InvalidArgument`] error if a summed exponent does not fit in a `u32`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let mut exponents = self.exponents.clone();
        for (var, exp) in &other.exponents {
            let entry = exponents.entry(var.clone()).or_insert(0);
            *entry = entry
                .checked_add(*exp)
                .ok_or_else(|| exponent_overflow(var, format!("({})*({})", self, other)))?;
        }
        Ok(Self { exponents })
    }

    /// Raises the monomial to the given power.
    ///
    /// Returns an [`InvalidArgument`] error if a resulting exponent does not fit in a `u32`.
    pub fn pow(&self, n: u32) -> Result<Self> {
        if n == 0 {
            return Ok(Self::one());
        }
        let exponents = self.exponents
            .iter()
            .map(|(var, exp)| {
                exp.checked_mul(n)
                    .map(|exp| (var.clone(), exp))
                    .ok_or_else(|| exponent_overflow(var, format!("({})^{}", self, n)))
            })
            .collect::<Result<_>>()?;
        Ok(Self { exponents })
    }

    /// Returns this monomial with the variable removed.
    pub fn without(&self, var: &Variable) -> Self {
        let mut exponents = self.exponents.clone();
        exponents.remove(var);
        Self { exponents }
    }

    /// Returns this monomial with the exponent of the variable replaced. An exponent of zero
    /// removes the variable.
    pub fn with_power(&self, var: &Variable, exp: u32) -> Self {
        let mut exponents = self.exponents.clone();
        if exp == 0 {
            exponents.remove(var);
        } else {
            exponents.insert(var.clone(), exp);
        }
        Self { exponents }
    }

    /// Evaluates the monomial by repeated multiplication.
    ///
    /// Returns a [`MissingVariable`](crate::error::MissingVariable) error if any variable has no
    /// value in the context.
    pub fn evaluate<R>(&self, ctxt: &Ctxt<R::Element>, ring: &R) -> Result<R::Element>
    where
        R: Ring + ?Sized,
    {
        let mut result = ring.one();
        for (var, exp) in &self.exponents {
            let value = ctxt.require(var, self)?;
            for _ in 0..*exp {
                result = ring.multiply(&result, value);
            }
        }
        Ok(result)
    }
}

/// The error returned when the exponent of `var` would not fit in a `u32`.
fn exponent_overflow(var: &Variable, source: String) -> Error {
    Error::new(source, InvalidArgument {
        reason: format!("the exponent of `{}` does not fit in 32 bits", var),
    })
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree()
            .cmp(&other.degree())
            .then_with(|| {
                let lhs = self.exponents.iter().map(|(var, exp)| (var.name(), *exp));
                let rhs = other.exponents.iter().map(|(var, exp)| (var.name(), *exp));
                lhs.cmp(rhs)
            })
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }

        let mut iter = self.exponents.iter();
        let write_factor = |f: &mut fmt::Formatter<'_>, var: &Variable, exp: u32| {
            if exp == 1 {
                write!(f, "{}", var)
            } else {
                write!(f, "{}^{}", var, exp)
            }
        };
        if let Some((var, exp)) = iter.next() {
            write_factor(f, var, *exp)?;
            for (var, exp) in iter {
                write!(f, "*")?;
                write_factor(f, var, *exp)?;
            }
        }
        Ok(())
    }
}

impl Latex for Monomial {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }

        for (i, (var, exp)) in self.exponents.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if *exp == 1 {
                write!(f, "{}", var)?;
            } else {
                write!(f, "{}^{{{}}}", var, exp)?;
            }
        }
        Ok(())
    }
}
