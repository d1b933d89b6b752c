//! Canonical multivariate polynomials.

use crate::{
    ctxt::Ctxt,
    error::{InvalidArgument, UnsupportedOperation},
    fmt::Latex,
    monomial::Monomial,
    ring::Ring,
    Result,
    Variable,
};
use std::{collections::{BTreeMap, BTreeSet}, fmt::{self, Display}};
use symcore_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A multivariate polynomial with coefficients of type `T`, stored as a map from [`Monomial`] to
/// coefficient.
///
/// A polynomial is always in canonical form: no two terms share a monomial, and no stored
/// coefficient is the ring's zero. The zero polynomial has no terms at all. Because every
/// constructor and operation maintains this form, two polynomials are mathematically equal if and
/// only if they compare equal with [`PartialEq`].
///
/// Like expressions, polynomials do not know their coefficient structure; every operation that
/// needs coefficient arithmetic receives it as an argument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial<T> {
    terms: BTreeMap<Monomial, T>,
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self { terms: BTreeMap::new() }
    }
}

/// Adds `coeff` to the coefficient of `monomial` in `terms`, using the ring's addition.
fn merge_term<R>(terms: &mut BTreeMap<Monomial, R::Element>, monomial: Monomial, coeff: R::Element, ring: &R)
where
    R: Ring + ?Sized,
{
    match terms.get_mut(&monomial) {
        Some(existing) => *existing = ring.add(existing, &coeff),
        None => {
            terms.insert(monomial, coeff);
        },
    }
}

impl<T> Polynomial<T> {
    /// The zero polynomial, with no terms.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the polynomial has no terms. Same as [`Polynomial::is_zero`].
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the terms in descending monomial order.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &T)> {
        self.terms.iter().rev()
    }

    /// Returns the coefficient of the given monomial, if that term is present.
    pub fn coefficient(&self, monomial: &Monomial) -> Option<&T> {
        self.terms.get(monomial)
    }

    /// Returns the total degree of the polynomial: the largest degree of any of its monomials, or
    /// zero for the zero polynomial.
    pub fn degree(&self) -> u64 {
        self.terms.keys().map(Monomial::degree).max().unwrap_or(0)
    }

    /// Returns every variable that appears in some term.
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.terms
            .keys()
            .flat_map(Monomial::variables)
            .cloned()
            .collect()
    }
}

impl<T: Clone + PartialEq> Polynomial<T> {
    /// Creates a polynomial from `(monomial, coefficient)` pairs.
    ///
    /// Coefficients of repeated monomials are summed, and terms whose coefficient ends up zero are
    /// removed.
    pub fn new<R>(terms: impl IntoIterator<Item = (Monomial, T)>, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        let mut map = BTreeMap::new();
        for (monomial, coeff) in terms {
            merge_term(&mut map, monomial, coeff, ring);
        }
        map.retain(|_, coeff| !ring.is_zero(coeff));
        Self { terms: map }
    }

    /// A polynomial consisting of a single constant term.
    pub fn constant<R>(value: T, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        Self::monomial(Monomial::one(), value, ring)
    }

    /// The polynomial `var`.
    pub fn variable<R>(var: Variable, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        Self::monomial(Monomial::variable(var), ring.one(), ring)
    }

    /// A polynomial with a single term.
    pub fn monomial<R>(monomial: Monomial, coeff: T, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        Self::new([(monomial, coeff)], ring)
    }

    /// If this polynomial has no terms involving a variable, returns its constant value.
    pub fn as_constant<R>(&self, ring: &R) -> Option<T>
    where
        R: Ring<Element = T> + ?Sized,
    {
        match self.terms.len() {
            0 => Some(ring.zero()),
            1 => self.terms.get(&Monomial::one()).cloned(),
            _ => None,
        }
    }

    /// Returns `self + other`.
    pub fn add<R>(&self, other: &Self, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        Self::new(
            self.terms.iter()
                .chain(other.terms.iter())
                .map(|(m, c)| (m.clone(), c.clone())),
            ring,
        )
    }

    /// Returns `-self`.
    pub fn negate<R>(&self, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        Self::new(self.terms.iter().map(|(m, c)| (m.clone(), ring.negate(c))), ring)
    }

    /// Returns `self - other`.
    pub fn subtract<R>(&self, other: &Self, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        self.add(&other.negate(ring), ring)
    }

    /// Multiplies every coefficient by `factor`.
    pub fn scale<R>(&self, factor: &T, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        Self::new(self.terms.iter().map(|(m, c)| (m.clone(), ring.multiply(c, factor))), ring)
    }

    /// Returns `self * other`, by full distributive expansion.
    ///
    /// Returns an [`InvalidArgument`] error if an exponent of the product does not fit in a `u32`.
    pub fn multiply<R>(&self, other: &Self, ring: &R) -> Result<Self>
    where
        R: Ring<Element = T> + ?Sized,
    {
        let mut map = BTreeMap::new();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                merge_term(&mut map, m1.multiply(m2)?, ring.multiply(c1, c2), ring);
            }
        }
        map.retain(|_, coeff| !ring.is_zero(coeff));
        Ok(Self { terms: map })
    }

    /// Raises the polynomial to the given power by repeated multiplication. `p^0` is `1`, even if
    /// `p` is zero.
    ///
    /// Returns an [`InvalidArgument`] error if an exponent of the result does not fit in a `u32`.
    /// This is checked on every term before any multiplication is done.
    pub fn pow<R>(&self, n: u32, ring: &R) -> Result<Self>
    where
        R: Ring<Element = T> + ?Sized,
    {
        for m in self.terms.keys() {
            m.pow(n)?;
        }

        let mut result = Self::constant(ring.one(), ring);
        for _ in 0..n {
            result = result.multiply(self, ring)?;
        }
        Ok(result)
    }

    /// Differentiates the polynomial with respect to the given variable, term by term.
    ///
    /// The term `c*x^n` becomes `(c*n)*x^(n-1)`, where `c*n` is computed by adding `c` to itself
    /// `n` times. Terms without `x` vanish.
    pub fn differentiate<R>(&self, var: &Variable, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        Self::new(
            self.terms.iter().filter_map(|(m, c)| {
                let power = m.power(var);
                if power == 0 {
                    return None;
                }
                Some((m.with_power(var, power - 1), ring.times(c, power)))
            }),
            ring,
        )
    }
}

impl<T: Clone + PartialEq + Display> Polynomial<T> {
    /// Integrates the polynomial with respect to the given variable, with no constant of
    /// integration.
    ///
    /// The term `c*x^n` becomes `(c/(n+1))*x^(n+1)`. This requires dividing by `n+1`, so the
    /// coefficient structure must be a [`Field`](crate::Field); otherwise an
    /// [`UnsupportedOperation`] error is returned.
    pub fn integrate<R>(&self, var: &Variable, ring: &R) -> Result<Self>
    where
        R: Ring<Element = T> + ?Sized,
    {
        let field = ring.as_field().ok_or_else(|| Error::new(self.to_string(), UnsupportedOperation {
            operation: "integrate",
            reason: "integrating a polynomial requires dividing its coefficients, but the coefficient structure is not a field".to_string(),
        }))?;

        let mut terms = Vec::with_capacity(self.terms.len());
        for (m, c) in &self.terms {
            let power = m.power(var).checked_add(1).ok_or_else(|| Error::new(self.to_string(), InvalidArgument {
                reason: format!("the exponent of `{}` does not fit in 32 bits after integration", var),
            }))?;
            let divisor = field.from_count(power);
            let coeff = field.divide(c, &divisor).ok_or_else(|| Error::new(self.to_string(), UnsupportedOperation {
                operation: "integrate",
                reason: format!("the coefficient structure cannot divide by {}", power),
            }))?;
            terms.push((m.with_power(var, power), coeff));
        }

        Ok(Self::new(terms, ring))
    }

    /// Evaluates the polynomial at the values assigned in the context.
    ///
    /// Each term contributes `coefficient * var1^e1 * var2^e2 * ...`. Returns a
    /// [`MissingVariable`](crate::error::MissingVariable) error if a variable of some term has no
    /// assigned value.
    pub fn evaluate<R>(&self, ctxt: &Ctxt<T>, ring: &R) -> Result<T>
    where
        R: Ring<Element = T> + ?Sized,
    {
        let mut sum = ring.zero();
        for (m, c) in &self.terms {
            let mut term = c.clone();
            for (var, exp) in m.iter() {
                let value = ctxt.require(var, self)?;
                term = ring.multiply(&term, &ring.pow(value, exp));
            }
            sum = ring.add(&sum, &term);
        }
        Ok(sum)
    }
}

/// Renders a single term as `c*m`, omitting a coefficient of `1` and writing `-m` for a
/// coefficient of `-1`.
fn term_to_string<T: Display>(monomial: &Monomial, coeff: &T) -> String {
    let coeff = coeff.to_string();
    if monomial.is_one() {
        coeff
    } else if coeff == "1" {
        monomial.to_string()
    } else if coeff == "-1" {
        format!("-{}", monomial)
    } else {
        format!("{}*{}", coeff, monomial)
    }
}

/// Writes terms in the form `a + b - c`, folding a leading minus sign of every term after the
/// first into the separator.
pub(crate) fn write_terms(f: &mut fmt::Formatter<'_>, terms: impl Iterator<Item = String>) -> fmt::Result {
    let mut empty = true;
    for term in terms {
        if empty {
            write!(f, "{}", term)?;
            empty = false;
        } else if let Some(rest) = term.strip_prefix('-') {
            write!(f, " - {}", rest)?;
        } else {
            write!(f, " + {}", term)?;
        }
    }
    if empty {
        write!(f, "0")?;
    }
    Ok(())
}

impl<T: Display> Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(f, self.terms().map(|(m, c)| term_to_string(m, c)))
    }
}

impl<T: Display> Latex for Polynomial<T> {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_terms(f, self.terms().map(|(m, c)| {
            let coeff = c.to_string();
            let monomial = m.as_display().to_string();
            if m.is_one() {
                coeff
            } else if coeff == "1" {
                monomial
            } else if coeff == "-1" {
                format!("-{}", monomial)
            } else {
                format!("{} {}", coeff, monomial)
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::{MissingVariable, UnsupportedOperation}, ring::{Integers, Rationals, Reals}};
    use assert_float_eq::*;
    use pretty_assertions::assert_eq;
    use rug::{Integer, Rational};
    use super::*;

    fn var(name: &str) -> Variable {
        Variable::new(name).unwrap()
    }

    fn x_pow(n: u32) -> Monomial {
        Monomial::variable(var("x")).pow(n).unwrap()
    }

    /// `x^2 + 1` over the integers.
    fn x2_plus_1() -> Polynomial<Integer> {
        Polynomial::new([(x_pow(2), Integer::from(1)), (Monomial::one(), Integer::from(1))], &Integers)
    }

    #[test]
    fn zero_pruning() {
        let p = Polynomial::new([
            (x_pow(2), Integer::from(3)),
            (Monomial::variable(var("y")), Integer::from(-2)),
            (Monomial::one(), Integer::from(7)),
        ], &Integers);
        let neg = p.scale(&Integer::from(-1), &Integers);
        let sum = p.add(&neg, &Integers);
        assert!(sum.is_zero());
        assert_eq!(sum.to_string(), "0");
    }

    #[test]
    fn construction_merges_and_prunes() {
        let p = Polynomial::new([
            (x_pow(1), Integer::from(2)),
            (x_pow(1), Integer::from(-2)),
            (Monomial::one(), Integer::from(0)),
            (x_pow(3), Integer::from(1)),
            (x_pow(3), Integer::from(4)),
        ], &Integers);
        assert_eq!(p.len(), 1);
        assert_eq!(p.coefficient(&x_pow(3)), Some(&Integer::from(5)));
    }

    #[test]
    fn multiply_difference_of_squares() {
        let x_plus_1 = Polynomial::new([(x_pow(1), Integer::from(1)), (Monomial::one(), Integer::from(1))], &Integers);
        let x_minus_1 = Polynomial::new([(x_pow(1), Integer::from(1)), (Monomial::one(), Integer::from(-1))], &Integers);
        let product = x_plus_1.multiply(&x_minus_1, &Integers).unwrap();
        assert_eq!(product.to_string(), "x^2 - 1");
        assert_eq!(product.degree(), 2);
    }

    #[test]
    fn pow_expands() {
        let x_plus_1 = Polynomial::new([(x_pow(1), Integer::from(1)), (Monomial::one(), Integer::from(1))], &Integers);
        assert_eq!(x_plus_1.pow(3, &Integers).unwrap().to_string(), "x^3 + 3*x^2 + 3*x + 1");
        assert_eq!(x_plus_1.pow(0, &Integers).unwrap().to_string(), "1");
    }

    #[test]
    fn exponents_at_the_u32_limit() {
        let top = Monomial::from_exponents([(var("x"), u32::MAX), (var("y"), 1)]).unwrap();
        let p = Polynomial::new([(top, Rational::from(2)), (x_pow(2), Rational::from(1))], &Rationals);
        assert_eq!(p.degree(), u64::from(u32::MAX) + 1);
        assert_eq!(p.to_string(), "2*x^4294967295*y + x^2");

        let x = Polynomial::variable(var("x"), &Rationals);
        assert!(p.multiply(&x, &Rationals).unwrap_err().is::<InvalidArgument>());
        assert!(p.pow(2, &Rationals).unwrap_err().is::<InvalidArgument>());
        assert!(p.integrate(&var("x"), &Rationals).unwrap_err().is::<InvalidArgument>());
        assert_eq!(p.integrate(&var("y"), &Rationals).unwrap().to_string(), "x^4294967295*y^2 + x^2*y");
    }

    #[test]
    fn display_descending() {
        let p = Polynomial::new([
            (Monomial::one(), Integer::from(-4)),
            (Monomial::variable(var("y")), Integer::from(-1)),
            (x_pow(2), Integer::from(1)),
            (Monomial::from_exponents([(var("x"), 1), (var("y"), 1)]).unwrap(), Integer::from(2)),
        ], &Integers);
        assert_eq!(p.to_string(), "x^2 + 2*x*y - y - 4");
        assert_eq!(p.as_display().to_string(), "x^{2} + 2 x y - y - 4");
    }

    #[test]
    fn differentiate() {
        let p = Polynomial::new([
            (x_pow(3), Integer::from(2)),
            (Monomial::from_exponents([(var("x"), 1), (var("y"), 2)]).unwrap(), Integer::from(5)),
            (Monomial::variable(var("y")), Integer::from(7)),
        ], &Integers);
        let dp = p.differentiate(&var("x"), &Integers);
        assert_eq!(dp.to_string(), "5*y^2 + 6*x^2");
    }

    #[test]
    fn integrate_over_field() {
        let p = Polynomial::new([(x_pow(2), Rational::from(3)), (Monomial::one(), Rational::from(1))], &Rationals);
        let ip = p.integrate(&var("x"), &Rationals).unwrap();
        assert_eq!(ip.to_string(), "x^3 + x");
        assert_eq!(ip.differentiate(&var("x"), &Rationals), p);
    }

    #[test]
    fn integrate_over_ring_is_unsupported() {
        let err = x2_plus_1().integrate(&var("x"), &Integers).unwrap_err();
        assert!(err.is::<UnsupportedOperation>());
        assert_eq!(err.source, "x^2 + 1");
    }

    #[test]
    fn evaluate() {
        let ctxt = Ctxt::from_iter([(var("x"), Integer::from(3))]);
        assert_eq!(x2_plus_1().evaluate(&ctxt, &Integers).unwrap(), 10);

        let err = x2_plus_1().evaluate(&Ctxt::new(), &Integers).unwrap_err();
        assert!(err.is::<MissingVariable>());
    }

    #[test]
    fn evaluate_reals() {
        let p = Polynomial::new([(x_pow(2), 0.5), (Monomial::one(), -1.0)], &Reals);
        let ctxt = Ctxt::from_iter([(var("x"), 3.0)]);
        assert_float_absolute_eq!(p.evaluate(&ctxt, &Reals).unwrap(), 3.5);
    }

    #[test]
    fn as_constant() {
        assert_eq!(Polynomial::<Integer>::zero().as_constant(&Integers), Some(Integer::new()));
        assert_eq!(Polynomial::constant(Integer::from(4), &Integers).as_constant(&Integers), Some(Integer::from(4)));
        assert_eq!(x2_plus_1().as_constant(&Integers), None);
    }

    #[test]
    fn variables() {
        let p = Polynomial::new([
            (Monomial::from_exponents([(var("y"), 1), (var("z"), 2)]).unwrap(), Integer::from(1)),
            (x_pow(1), Integer::from(1)),
        ], &Integers);
        assert_eq!(p.variables().into_iter().collect::<Vec<_>>(), vec![var("x"), var("y"), var("z")]);
    }
}
