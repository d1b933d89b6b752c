use crate::{error::UnsupportedOperation, polynomial::Polynomial, ring::Ring, Result, Variable};
use std::{fmt::Display, sync::Arc};
use symcore_error::Error;
use super::Expr;

impl<T: Clone + PartialEq + Display> Expr<T> {
    /// Substitutes `substitution` for every free occurrence of `var`.
    ///
    /// Sums and products are rebuilt with [`Expr::add`] and [`Expr::multiply`], so constants that
    /// meet are folded, but nothing else is simplified. Each polynomial term `c*m*var^n` becomes
    /// `(c*m) * substitution * ... * substitution` (`n` factors), and the terms are summed in
    /// descending order. Polynomials that do not mention `var` are kept as they are.
    ///
    /// Substituting for the variable of integration of an [`Expr::Integral`] returns an
    /// [`UnsupportedOperation`] error.
    pub fn compose<R>(&self, var: &Variable, substitution: &Self, ring: &R) -> Result<Self>
    where
        R: Ring<Element = T> + ?Sized,
    {
        match self {
            Self::Constant(_) => Ok(self.clone()),
            Self::Sum(lhs, rhs) => {
                let lhs = lhs.compose(var, substitution, ring)?;
                Ok(lhs.add(rhs.compose(var, substitution, ring)?, ring))
            },
            Self::Product(lhs, rhs) => {
                let lhs = lhs.compose(var, substitution, ring)?;
                Ok(lhs.multiply(rhs.compose(var, substitution, ring)?, ring))
            },
            Self::Division(num, den) => Ok(Self::division(
                num.compose(var, substitution, ring)?,
                den.compose(var, substitution, ring)?,
            )),
            Self::Power(base, exp) => Ok(Self::power(base.compose(var, substitution, ring)?, *exp)),
            Self::Call(function, arg) => Ok(Self::call(*function, arg.compose(var, substitution, ring)?)),
            Self::Integral(integrand, integral_var) => {
                if integral_var == var {
                    return Err(Error::new(self.to_string(), UnsupportedOperation {
                        operation: "substitute into",
                        reason: format!("`{}` is the variable of integration", var),
                    }));
                }
                Ok(Self::integral(integrand.compose(var, substitution, ring)?, integral_var.clone()))
            },
            Self::Polynomial(polynomial) => Ok(compose_polynomial(self, polynomial, var, substitution, ring)),
        }
    }
}

fn compose_polynomial<R>(
    expr: &Expr<R::Element>,
    polynomial: &Polynomial<R::Element>,
    var: &Variable,
    substitution: &Expr<R::Element>,
    ring: &R,
) -> Expr<R::Element>
where
    R: Ring + ?Sized,
{
    if !polynomial.terms().any(|(m, _)| m.contains(var)) {
        return expr.clone();
    }

    let substitution = Arc::new(substitution.clone());
    let mut result: Option<Expr<R::Element>> = None;
    for (monomial, coeff) in polynomial.terms() {
        let rest = Polynomial::monomial(monomial.without(var), coeff.clone(), ring);
        let mut term = Expr::Polynomial(rest);
        // `term` is never a constant, so there is nothing for `multiply` to fold
        for _ in 0..monomial.power(var) {
            term = Expr::product(term, Arc::clone(&substitution));
        }
        result = Some(match result {
            Some(sum) => sum.add(term, ring),
            None => term,
        });
    }

    result.unwrap_or_else(|| expr.clone())
}

#[cfg(test)]
mod tests {
    use crate::{ctxt::Ctxt, error::UnsupportedOperation, function::Function, monomial::Monomial, ring::Integers};
    use pretty_assertions::assert_eq;
    use rug::Integer;
    use super::*;

    fn var(name: &str) -> Variable {
        Variable::new(name).unwrap()
    }

    fn int(n: i32) -> Expr<Integer> {
        Expr::constant(Integer::from(n))
    }

    fn x() -> Expr<Integer> {
        Expr::variable(var("x"), &Integers)
    }

    fn x2_plus_1() -> Expr<Integer> {
        Expr::polynomial(Polynomial::new([
            (Monomial::variable(var("x")).pow(2).unwrap(), Integer::from(1)),
            (Monomial::one(), Integer::from(1)),
        ], &Integers))
    }

    #[test]
    fn compose_polynomials() {
        // (x^2 + 1) ∘ (x + 1) = (x + 1)^2 + 1, which is 10 at x = 2
        let x_plus_1 = Expr::sum(x(), int(1));
        let composed = x2_plus_1().compose(&var("x"), &x_plus_1, &Integers).unwrap();
        assert_eq!(composed.to_string(), "1*(x + 1)*(x + 1) + 1");

        let ctxt = Ctxt::from_iter([(var("x"), Integer::from(2))]);
        assert_eq!(composed.evaluate(&ctxt, &Integers).unwrap(), 10);
    }

    #[test]
    fn multivariate_terms_keep_other_variables() {
        // (2xy) ∘ (x := 3) = 2y*3
        let p = Expr::polynomial(Polynomial::monomial(
            Monomial::from_exponents([(var("x"), 1), (var("y"), 1)]).unwrap(),
            Integer::from(2),
            &Integers,
        ));
        let composed = p.compose(&var("x"), &int(3), &Integers).unwrap();
        assert_eq!(composed.to_string(), "2*y*3");
    }

    #[test]
    fn untouched_polynomial_is_kept() {
        let y = Expr::variable(var("y"), &Integers);
        assert_eq!(y.compose(&var("x"), &int(3), &Integers).unwrap(), y);
    }

    #[test]
    fn polynomial_leaves_are_not_folded() {
        let expr = Expr::product(x(), int(4));
        let composed = expr.compose(&var("x"), &int(3), &Integers).unwrap();
        // x becomes 1*3, which is not folded since 1 is a polynomial
        assert_eq!(composed.to_string(), "1*3*4");
    }

    #[test]
    fn compose_through_calls_and_integrals() {
        let expr = Expr::integral(Expr::call(Function::Exp, x()), var("t"));
        let composed = expr.compose(&var("x"), &int(0), &Integers).unwrap();
        assert_eq!(composed.to_string(), "∫(exp(1*0)) dt");
    }

    #[test]
    fn bound_variable_is_unsupported() {
        let expr = Expr::integral(x(), var("x"));
        let err = expr.compose(&var("x"), &int(1), &Integers).unwrap_err();
        assert!(err.is::<UnsupportedOperation>());
    }
}
