//! Truncated power series.

use crate::{
    error::{IncompatibleCenters, InvalidArgument, UnsupportedOperation},
    fmt::Latex,
    polynomial::write_terms,
    ring::Ring,
    Result,
};
use std::fmt::{self, Display};
use symcore_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A truncated power series `a0 + a1*(x - c) + a2*(x - c)^2 + ...` around a center `c`.
///
/// The coefficient at index `n` is the coefficient of `(x - c)^n`. A series always has at least
/// one coefficient. Trailing zero coefficients are kept as they are; use [`Series::truncate`] to
/// drop terms explicitly.
///
/// The radius of convergence is carried along for reference only: it is combined by taking the
/// minimum when two series are combined, but no operation checks it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Series<T> {
    coefficients: Vec<T>,
    center: T,
    radius: f64,
}

impl<T> Series<T> {
    /// Creates a series with the given coefficients around the given center, with an infinite
    /// radius of convergence.
    ///
    /// Returns an [`InvalidArgument`] error if there are no coefficients.
    pub fn new(coefficients: Vec<T>, center: T) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(Error::new("[]", InvalidArgument {
                reason: "a series needs at least one coefficient".to_string(),
            }));
        }
        Ok(Self { coefficients, center, radius: f64::INFINITY })
    }

    /// Returns the series with the given radius of convergence.
    ///
    /// Returns an [`InvalidArgument`] error if the radius is negative or NaN.
    pub fn with_radius(mut self, radius: f64) -> Result<Self> {
        if radius.is_nan() || radius < 0.0 {
            return Err(Error::new(radius.to_string(), InvalidArgument {
                reason: "the radius of convergence must be a non-negative number".to_string(),
            }));
        }
        self.radius = radius;
        Ok(self)
    }

    /// Returns the coefficients, in increasing order of power.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the coefficient of `(x - c)^n`, if the series has that many terms.
    pub fn coefficient(&self, n: usize) -> Option<&T> {
        self.coefficients.get(n)
    }

    /// Returns the center `c`.
    pub fn center(&self) -> &T {
        &self.center
    }

    /// Returns the radius of convergence.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the number of coefficients. This is always at least one.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always returns false, since a series has at least one coefficient.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: Clone + PartialEq + Display> Series<T> {
    /// Returns an [`IncompatibleCenters`] error if the two series have different centers.
    ///
    /// The error's source is `(self) op (other)`, with one span over each operand. Spans are
    /// counted in characters.
    fn check_centers(&self, other: &Self, op: &str) -> Result<()> {
        if self.center == other.center {
            return Ok(());
        }

        let left = self.to_string();
        let right = other.to_string();
        let source = format!("({}) {} ({})", left, op, right);
        let (left_len, right_len) = (left.chars().count(), right.chars().count());
        let right_start = left_len + op.chars().count() + 5;
        Err(Error::with_spans(
            source,
            vec![1..1 + left_len, right_start..right_start + right_len],
            IncompatibleCenters {
                left: self.center.to_string(),
                right: other.center.to_string(),
            },
        ))
    }

    /// Combines the coefficients termwise, padding the shorter series with zeros.
    fn zip_padded<R>(&self, other: &Self, ring: &R, f: impl Fn(&T, &T) -> T) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        let zero = ring.zero();
        let len = self.len().max(other.len());
        let coefficients = (0..len)
            .map(|n| f(
                self.coefficients.get(n).unwrap_or(&zero),
                other.coefficients.get(n).unwrap_or(&zero),
            ))
            .collect();
        Self {
            coefficients,
            center: self.center.clone(),
            radius: self.radius.min(other.radius),
        }
    }

    /// Returns `self + other`. The result has as many terms as the longer operand.
    pub fn add<R>(&self, other: &Self, ring: &R) -> Result<Self>
    where
        R: Ring<Element = T> + ?Sized,
    {
        self.check_centers(other, "+")?;
        Ok(self.zip_padded(other, ring, |a, b| ring.add(a, b)))
    }

    /// Returns `self - other`. The result has as many terms as the longer operand.
    pub fn subtract<R>(&self, other: &Self, ring: &R) -> Result<Self>
    where
        R: Ring<Element = T> + ?Sized,
    {
        self.check_centers(other, "-")?;
        Ok(self.zip_padded(other, ring, |a, b| ring.subtract(a, b)))
    }

    /// Returns the Cauchy product `self * other`, whose coefficient at index `n` is the sum of
    /// `a[k] * b[n - k]` over all valid `k`. The result has `len(a) + len(b) - 1` terms.
    pub fn multiply<R>(&self, other: &Self, ring: &R) -> Result<Self>
    where
        R: Ring<Element = T> + ?Sized,
    {
        self.check_centers(other, "*")?;

        let mut coefficients = vec![ring.zero(); self.len() + other.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                coefficients[i + j] = ring.add(&coefficients[i + j], &ring.multiply(a, b));
            }
        }

        Ok(Self {
            coefficients,
            center: self.center.clone(),
            radius: self.radius.min(other.radius),
        })
    }

    /// Returns `-self`.
    pub fn negate<R>(&self, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        self.map_coefficients(|a| ring.negate(a))
    }

    /// Multiplies every coefficient by `factor`.
    pub fn scale<R>(&self, factor: &T, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        self.map_coefficients(|a| ring.multiply(a, factor))
    }

    fn map_coefficients(&self, f: impl Fn(&T) -> T) -> Self {
        Self {
            coefficients: self.coefficients.iter().map(f).collect(),
            center: self.center.clone(),
            radius: self.radius,
        }
    }

    /// Differentiates the series term by term: the coefficient at index `n - 1` of the result is
    /// `n * a[n]`.
    ///
    /// The constant term is dropped, so the result has one term fewer, except that a series with
    /// a single term differentiates to the single term `0`.
    pub fn derivative<R>(&self, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        let coefficients = if self.len() == 1 {
            vec![ring.zero()]
        } else {
            self.coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(n, a)| ring.times(a, n as u32))
                .collect()
        };

        Self { coefficients, center: self.center.clone(), radius: self.radius }
    }

    /// Integrates the series term by term, with a constant of integration of zero: the
    /// coefficient at index `n + 1` of the result is `a[n] / (n + 1)`.
    ///
    /// This requires dividing by `n + 1`, so the coefficient structure must be a
    /// [`Field`](crate::Field); otherwise an [`UnsupportedOperation`] error is returned.
    pub fn integral<R>(&self, ring: &R) -> Result<Self>
    where
        R: Ring<Element = T> + ?Sized,
    {
        let unsupported = |reason: String| Error::new(self.to_string(), UnsupportedOperation {
            operation: "integrate",
            reason,
        });
        let field = ring.as_field().ok_or_else(|| unsupported(
            "integrating a series requires dividing its coefficients, but the coefficient structure is not a field".to_string(),
        ))?;

        let mut coefficients = Vec::with_capacity(self.len() + 1);
        coefficients.push(ring.zero());
        for (n, a) in self.coefficients.iter().enumerate() {
            let divisor = n as u32 + 1;
            let coeff = field.divide(a, &field.from_count(divisor))
                .ok_or_else(|| unsupported(format!("the coefficient structure cannot divide by {}", divisor)))?;
            coefficients.push(coeff);
        }

        Ok(Self { coefficients, center: self.center.clone(), radius: self.radius })
    }

    /// Evaluates the series at `x`, using Horner's method on `x - c`.
    ///
    /// The radius of convergence is not checked.
    pub fn evaluate<R>(&self, x: &T, ring: &R) -> T
    where
        R: Ring<Element = T> + ?Sized,
    {
        let offset = ring.subtract(x, &self.center);
        self.coefficients
            .iter()
            .rev()
            .fold(ring.zero(), |acc, a| ring.add(&ring.multiply(&acc, &offset), a))
    }

    /// Keeps only the first `n` terms. At least one term is always kept.
    pub fn truncate(&self, n: usize) -> Self {
        Self {
            coefficients: self.coefficients.iter().take(n.max(1)).cloned().collect(),
            center: self.center.clone(),
            radius: self.radius,
        }
    }
}

impl<T: Display> Series<T> {
    /// Renders the base `x - c` of the powers, or `x` if the center renders as `0`.
    fn base(&self) -> (String, bool) {
        let center = self.center.to_string();
        if center == "0" {
            ("x".to_string(), false)
        } else if let Some(rest) = center.strip_prefix('-') {
            (format!("x + {}", rest), true)
        } else {
            (format!("x - {}", center), true)
        }
    }
}

/// Series are rendered as polynomials in `x`, skipping coefficients that render as `0`.
impl<T: Display> Display for Series<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (base, grouped) = self.base();
        let base = if grouped { format!("({})", base) } else { base };
        write_terms(f, self.coefficients.iter().enumerate().filter_map(|(n, a)| {
            let coeff = a.to_string();
            if coeff == "0" {
                return None;
            }
            let power = match n {
                0 => return Some(coeff),
                1 => base.clone(),
                _ => format!("{}^{}", base, n),
            };
            Some(match coeff.as_str() {
                "1" => power,
                "-1" => format!("-{}", power),
                _ => format!("{}*{}", coeff, power),
            })
        }))
    }
}

impl<T: Display> Latex for Series<T> {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (base, grouped) = self.base();
        let base = if grouped { format!("\\left({}\\right)", base) } else { base };
        write_terms(f, self.coefficients.iter().enumerate().filter_map(|(n, a)| {
            let coeff = a.to_string();
            if coeff == "0" {
                return None;
            }
            let power = match n {
                0 => return Some(coeff),
                1 => base.clone(),
                _ => format!("{}^{{{}}}", base, n),
            };
            Some(match coeff.as_str() {
                "1" => power,
                "-1" => format!("-{}", power),
                _ => format!("{} {}", coeff, power),
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::ring::{Integers, Rationals, Reals};
    use assert_float_eq::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;
    use rug::{Integer, Rational};
    use super::*;

    fn ints(coefficients: &[i32]) -> Series<Integer> {
        Series::new(coefficients.iter().map(|&c| Integer::from(c)).collect(), Integer::new()).unwrap()
    }

    /// The text a character span covers.
    fn spanned(source: &str, span: &std::ops::Range<usize>) -> String {
        source.chars().skip(span.start).take(span.len()).collect()
    }

    fn coefficients(series: &Series<Integer>) -> Vec<i32> {
        series.coefficients().iter().map(|c| c.to_i32().unwrap()).collect()
    }

    #[test]
    fn empty_series_is_invalid() {
        let err = Series::<Integer>::new(vec![], Integer::new()).unwrap_err();
        assert!(err.is::<InvalidArgument>());
    }

    #[test]
    fn invalid_radius() {
        assert!(ints(&[1]).with_radius(-1.0).unwrap_err().is::<InvalidArgument>());
        assert!(ints(&[1]).with_radius(f64::NAN).unwrap_err().is::<InvalidArgument>());
        assert_eq!(ints(&[1]).with_radius(0.0).unwrap().radius(), 0.0);
    }

    #[test]
    fn add_pads_with_zeros() {
        let sum = ints(&[1, 2, 3]).add(&ints(&[4, 5]), &Integers).unwrap();
        assert_eq!(coefficients(&sum), vec![5, 7, 3]);

        let difference = ints(&[1]).subtract(&ints(&[4, 5]), &Integers).unwrap();
        assert_eq!(coefficients(&difference), vec![-3, -5]);
    }

    #[test]
    fn cauchy_product() {
        // (1 + x)(1 - x + x^2) = 1 + x^3
        let product = ints(&[1, 1]).multiply(&ints(&[1, -1, 1]), &Integers).unwrap();
        assert_eq!(coefficients(&product), vec![1, 0, 0, 1]);
    }

    #[test]
    fn cauchy_product_length() {
        let mut rng = rand::thread_rng();
        for _ in 0..8 {
            let m = rng.gen_range(1..8);
            let n = rng.gen_range(1..8);
            let a = ints(&vec![1; m]);
            let b = ints(&vec![2; n]);
            assert_eq!(a.multiply(&b, &Integers).unwrap().len(), m + n - 1);
        }
    }

    #[test]
    fn radius_is_the_minimum() {
        let a = ints(&[1]).with_radius(2.0).unwrap();
        let b = ints(&[1]).with_radius(0.5).unwrap();
        assert_eq!(a.add(&b, &Integers).unwrap().radius(), 0.5);
        assert_eq!(a.multiply(&ints(&[1]), &Integers).unwrap().radius(), 2.0);
    }

    #[test]
    fn incompatible_centers() {
        let a = ints(&[1, 2]);
        let b = Series::new(vec![Integer::from(3)], Integer::from(1)).unwrap();
        let err = a.add(&b, &Integers).unwrap_err();
        let kind = err.downcast_ref::<IncompatibleCenters>().unwrap();
        assert_eq!(kind.left, "0");
        assert_eq!(kind.right, "1");
        assert_eq!(err.source, "(1 + 2*x) + (3)");
        assert_eq!(spanned(&err.source, &err.spans[0]), "1 + 2*x");
        assert_eq!(spanned(&err.source, &err.spans[1]), "3");

        assert!(a.multiply(&b, &Integers).unwrap_err().is::<IncompatibleCenters>());
        assert!(a.subtract(&b, &Integers).unwrap_err().is::<IncompatibleCenters>());
    }

    #[test]
    fn derivative() {
        assert_eq!(coefficients(&ints(&[5, 3, 2, 1]).derivative(&Integers)), vec![3, 4, 3]);
        assert_eq!(coefficients(&ints(&[5]).derivative(&Integers)), vec![0]);
    }

    #[test]
    fn integral_divides_by_the_new_power() {
        let series = Series::new(vec![Rational::from(1), Rational::from(2), Rational::from(3)], Rational::new()).unwrap();
        let integral = series.integral(&Rationals).unwrap();
        assert_eq!(integral.coefficients(), &[
            Rational::new(),
            Rational::from(1),
            Rational::from(1),
            Rational::from(1),
        ]);
        assert_eq!(integral.derivative(&Rationals), series);
    }

    #[test]
    fn integral_over_ring_is_unsupported() {
        let err = ints(&[1, 2]).integral(&Integers).unwrap_err();
        assert!(err.is::<UnsupportedOperation>());
    }

    #[test]
    fn evaluate_horner() {
        // 1 + 2(x - 1) + 3(x - 1)^2 at x = 3 is 1 + 4 + 12
        let series = Series::new(vec![1.0, 2.0, 3.0], 1.0).unwrap();
        assert_float_absolute_eq!(series.evaluate(&3.0, &Reals), 17.0);
    }

    #[test]
    fn truncate_keeps_one_term() {
        assert_eq!(coefficients(&ints(&[1, 2, 3]).truncate(2)), vec![1, 2]);
        assert_eq!(coefficients(&ints(&[1, 2, 3]).truncate(0)), vec![1]);
    }

    #[test]
    fn display() {
        assert_eq!(ints(&[1, 0, -1, 2]).to_string(), "1 - x^2 + 2*x^3");
        assert_eq!(ints(&[0, 0]).to_string(), "0");

        let series = Series::new(vec![Integer::from(1), Integer::from(1)], Integer::from(-2)).unwrap();
        assert_eq!(series.to_string(), "1 + (x + 2)");
        assert_eq!(series.as_display().to_string(), "1 + \\left(x + 2\\right)");
    }
}
