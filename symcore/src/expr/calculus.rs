//! Symbolic differentiation and closed-form integration.

use crate::{error::UnsupportedOperation, function::Function, ring::Ring, Result, Variable};
use std::{fmt::Display, sync::Arc};
use symcore_error::Error;
use super::Expr;

impl<T: Clone + PartialEq + Display> Expr<T> {
    /// Differentiates the expression with respect to the given variable.
    ///
    /// The result is built directly from the differentiation rules and is not simplified; for
    /// example, the derivative of `f*g` is always `f'*g + f*g'`, even when `f'` is zero. Pass the
    /// result to [`simplify`](crate::simplify()) to clean it up.
    ///
    /// - `c' = 0`
    /// - `(f + g)' = f' + g'`
    /// - `(f * g)' = f' * g + f * g'`
    /// - `(f / g)' = (f' * g + (-1) * (f * g')) / (g * g)`
    /// - `(f^n)' = (n * f^(n - 1)) * f'`
    /// - `(∫(f) dx)' = f` with respect to `x`; other variables differentiate under the integral
    /// - polynomials are differentiated term by term
    /// - function calls use the chain rule
    pub fn differentiate<R>(&self, var: &Variable, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        match self {
            Self::Constant(_) => Self::Constant(ring.zero()),
            Self::Sum(lhs, rhs) => Self::sum(lhs.differentiate(var, ring), rhs.differentiate(var, ring)),
            Self::Product(lhs, rhs) => Self::sum(
                Self::product(lhs.differentiate(var, ring), Arc::clone(rhs)),
                Self::product(Arc::clone(lhs), rhs.differentiate(var, ring)),
            ),
            Self::Division(num, den) => {
                let minus_one = Self::Constant(ring.negate(&ring.one()));
                let numerator = Self::sum(
                    Self::product(num.differentiate(var, ring), Arc::clone(den)),
                    Self::product(minus_one, Self::product(Arc::clone(num), den.differentiate(var, ring))),
                );
                Self::division(numerator, Self::product(Arc::clone(den), Arc::clone(den)))
            },
            Self::Integral(integrand, integral_var) => {
                if integral_var == var {
                    (**integrand).clone()
                } else {
                    Self::integral(integrand.differentiate(var, ring), integral_var.clone())
                }
            },
            Self::Polynomial(polynomial) => Self::Polynomial(polynomial.differentiate(var, ring)),
            Self::Power(base, exp) => {
                if *exp == 0 {
                    return Self::Constant(ring.zero());
                }
                Self::product(
                    Self::product(Self::Constant(ring.from_count(*exp)), Self::power(Arc::clone(base), exp - 1)),
                    base.differentiate(var, ring),
                )
            },
            Self::Call(function, arg) => chain_rule(*function, arg, var, ring),
        }
    }

    /// Integrates the expression with respect to the given variable, with no constant of
    /// integration.
    ///
    /// Only closed forms that follow directly from the structure of the expression are computed:
    ///
    /// - `∫c dx = c*x`
    /// - `∫(f + g) dx = ∫f dx + ∫g dx`
    /// - polynomials are integrated term by term, which requires a [`Field`](crate::Field)
    /// - powers of polynomials are expanded, then integrated as polynomials
    ///
    /// Everything else (products, quotients, function calls, integrals) returns an
    /// [`UnsupportedOperation`] error. To represent such an integral symbolically, construct it
    /// with [`Expr::integral`] instead.
    pub fn integrate<R>(&self, var: &Variable, ring: &R) -> Result<Self>
    where
        R: Ring<Element = T> + ?Sized,
    {
        match self {
            Self::Constant(_) => Ok(Self::product(self.clone(), Self::variable(var.clone(), ring))),
            Self::Sum(lhs, rhs) => Ok(Self::sum(lhs.integrate(var, ring)?, rhs.integrate(var, ring)?)),
            Self::Polynomial(polynomial) => Ok(Self::Polynomial(polynomial.integrate(var, ring)?)),
            Self::Power(base, exp) => match &**base {
                Self::Polynomial(polynomial) => Ok(Self::Polynomial(polynomial.pow(*exp, ring)?.integrate(var, ring)?)),
                _ => Err(self.unsupported_integral("there is no closed form for powers of non-polynomial expressions")),
            },
            Self::Product(..) => Err(self.unsupported_integral("integrating products is not supported")),
            Self::Division(..) => Err(self.unsupported_integral("integrating quotients is not supported")),
            Self::Integral(..) => Err(self.unsupported_integral("integrating an unevaluated integral is not supported")),
            Self::Call(function, _) => Err(self.unsupported_integral(&format!("integrating `{}` is not supported", function))),
        }
    }

    fn unsupported_integral(&self, reason: &str) -> Error {
        Error::new(self.to_string(), UnsupportedOperation {
            operation: "integrate",
            reason: reason.to_string(),
        })
    }
}

/// Differentiates `function(arg)` using the chain rule.
///
/// - `sin(u)' = cos(u) * u'`
/// - `cos(u)' = ((-1) * sin(u)) * u'`
/// - `tan(u)' = u' / cos(u)^2`
/// - `exp(u)' = exp(u) * u'`
/// - `ln(u)' = u' / u`
/// - `sqrt(u)' = u' / (2 * sqrt(u))`
fn chain_rule<R>(function: Function, arg: &Arc<Expr<R::Element>>, var: &Variable, ring: &R) -> Expr<R::Element>
where
    R: Ring + ?Sized,
{
    let inner = arg.differentiate(var, ring);
    let call = |function| Expr::call(function, Arc::clone(arg));
    match function {
        Function::Sin => Expr::product(call(Function::Cos), inner),
        Function::Cos => Expr::product(
            Expr::product(Expr::Constant(ring.negate(&ring.one())), call(Function::Sin)),
            inner,
        ),
        Function::Tan => Expr::division(inner, Expr::power(call(Function::Cos), 2)),
        Function::Exp => Expr::product(call(Function::Exp), inner),
        Function::Ln => Expr::division(inner, Arc::clone(arg)),
        Function::Sqrt => Expr::division(
            inner,
            Expr::product(Expr::Constant(ring.from_count(2)), call(Function::Sqrt)),
        ),
    }
}
