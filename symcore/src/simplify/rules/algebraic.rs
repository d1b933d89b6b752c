//! Power rules, and merging of polynomial leaves into canonical polynomials.

use crate::{
    expr::Expr,
    polynomial::Polynomial,
    ring::Ring,
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};

/// `a^0 = 1`
///
/// `0^0` is defined as `1` by this rule, though it may be undefined in other mathematical
/// contexts.
pub fn power_zero<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let opt = do_power(expr, |_, exp| {
        if exp == 0 {
            Some(Expr::Constant(ring.one()))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one<R>(
    expr: &Expr<R::Element>,
    _: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let opt = do_power(expr, |base, exp| {
        if exp == 1 {
            Some(base.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `2^3 = 8`
pub fn fold_constant_power<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let opt = do_power(expr, |base, exp| {
        Some(Expr::Constant(ring.pow(base.as_constant()?, exp)))
    })?;

    step_collector.push(Step::FoldConstantPower);
    Some(opt)
}

/// `(x+1)^2 = x^2+2x+1`
///
/// Powers of polynomials are expanded into a single polynomial. A power whose expansion would
/// have an exponent that does not fit in a `u32` is left unexpanded.
pub fn expand_power<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let opt = do_power(expr, |base, exp| {
        base.as_polynomial()?.pow(exp, ring).ok().map(Expr::Polynomial)
    })?;

    step_collector.push(Step::ExpandPower);
    Some(opt)
}

/// Returns the expression as a polynomial if it is a polynomial or a constant.
fn to_polynomial<R>(expr: &Expr<R::Element>, ring: &R) -> Option<Polynomial<R::Element>>
where
    R: Ring + ?Sized,
{
    match expr {
        Expr::Polynomial(polynomial) => Some(polynomial.clone()),
        Expr::Constant(value) => Some(Polynomial::constant(value.clone(), ring)),
        _ => None,
    }
}

/// `(x+1) + (x-1) = 2x`
/// `2 * (x+1) = 2x+2`
///
/// Sums and products of two polynomials, or of a polynomial and a constant, are merged into a
/// single polynomial. Two constants are left to [`fold_constants`](super::arithmetic::fold_constants).
/// A product whose exponents would not fit in a `u32` is left unmerged.
pub fn merge_polynomials<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let (lhs, rhs) = match expr {
        Expr::Sum(lhs, rhs) | Expr::Product(lhs, rhs) => (lhs, rhs),
        _ => return None,
    };
    if lhs.as_polynomial().is_none() && rhs.as_polynomial().is_none() {
        return None;
    }

    let left = to_polynomial(lhs, ring)?;
    let right = to_polynomial(rhs, ring)?;
    let merged = match expr {
        Expr::Sum(..) => left.add(&right, ring),
        _ => left.multiply(&right, ring).ok()?,
    };

    step_collector.push(Step::MergePolynomials);
    Some(Expr::Polynomial(merged))
}

/// A polynomial with only a constant term (or no terms at all) becomes a constant.
pub fn collapse_polynomial<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let value = expr.as_polynomial()?.as_constant(ring)?;

    step_collector.push(Step::CollapsePolynomial);
    Some(Expr::Constant(value))
}

/// Applies all algebraic rules.
pub fn all<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    power_zero(expr, ring, step_collector)
        .or_else(|| power_one(expr, ring, step_collector))
        .or_else(|| fold_constant_power(expr, ring, step_collector))
        .or_else(|| expand_power(expr, ring, step_collector))
        .or_else(|| merge_polynomials(expr, ring, step_collector))
        .or_else(|| collapse_polynomial(expr, ring, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::{monomial::Monomial, ring::Integers, Variable};
    use pretty_assertions::assert_eq;
    use rug::Integer;
    use super::*;

    fn int(n: i32) -> Expr<Integer> {
        Expr::constant(Integer::from(n))
    }

    fn x() -> Expr<Integer> {
        Expr::variable(Variable::new("x").unwrap(), &Integers)
    }

    #[test]
    fn powers() {
        assert_eq!(power_zero(&Expr::power(x(), 0), &Integers, &mut ()), Some(int(1)));
        assert_eq!(power_one(&Expr::power(x(), 1), &Integers, &mut ()), Some(x()));
        assert_eq!(fold_constant_power(&Expr::power(int(2), 10), &Integers, &mut ()), Some(int(1024)));
    }

    #[test]
    fn expand() {
        let x_plus_1 = Expr::polynomial(Polynomial::new([
            (Monomial::variable(Variable::new("x").unwrap()), Integer::from(1)),
            (Monomial::one(), Integer::from(1)),
        ], &Integers));
        let expanded = expand_power(&Expr::power(x_plus_1, 2), &Integers, &mut ()).unwrap();
        assert_eq!(expanded.to_string(), "x^2 + 2*x + 1");
    }

    #[test]
    fn expand_leaves_oversized_exponents() {
        let x_var = Monomial::variable(Variable::new("x").unwrap());
        let big = Expr::polynomial(Polynomial::monomial(x_var.pow(65536).unwrap(), Integer::from(1), &Integers));
        assert_eq!(expand_power(&Expr::power(big.clone(), 65536), &Integers, &mut ()), None);
        assert_eq!(merge_polynomials(&Expr::product(big.clone(), big), &Integers, &mut ()).unwrap().to_string(), "x^131072");

        let top = Expr::polynomial(Polynomial::monomial(x_var.pow(u32::MAX).unwrap(), Integer::from(1), &Integers));
        assert_eq!(merge_polynomials(&Expr::product(top, x()), &Integers, &mut ()), None);
    }

    #[test]
    fn merge() {
        let merged = merge_polynomials(&Expr::sum(x(), int(3)), &Integers, &mut ()).unwrap();
        assert_eq!(merged.to_string(), "x + 3");

        let merged = merge_polynomials(&Expr::product(int(2), x()), &Integers, &mut ()).unwrap();
        assert_eq!(merged.to_string(), "2*x");

        let merged = merge_polynomials(&Expr::sum(x(), x().negate(&Integers)), &Integers, &mut ()).unwrap();
        assert_eq!(merged, Expr::polynomial(Polynomial::zero()));

        assert_eq!(merge_polynomials(&Expr::sum(int(1), int(2)), &Integers, &mut ()), None);
    }

    #[test]
    fn collapse() {
        let constant = Expr::polynomial(Polynomial::constant(Integer::from(7), &Integers));
        assert_eq!(collapse_polynomial(&constant, &Integers, &mut ()), Some(int(7)));
        assert_eq!(collapse_polynomial(&Expr::polynomial(Polynomial::zero()), &Integers, &mut ()), Some(int(0)));
        assert_eq!(collapse_polynomial(&x(), &Integers, &mut ()), None);
    }
}
