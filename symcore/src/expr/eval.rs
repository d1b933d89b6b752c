use crate::{
    ctxt::Ctxt,
    error::{DivisionByZero, UnsupportedOperation},
    ring::Ring,
    Result,
};
use std::fmt::Display;
use symcore_error::Error;
use super::Expr;

impl<T: Clone + PartialEq + Display> Expr<T> {
    /// Evaluates the expression to a single coefficient, using the values assigned in the context.
    ///
    /// # Errors
    ///
    /// - [`MissingVariable`](crate::error::MissingVariable) if a variable has no assigned value.
    /// - [`UnsupportedOperation`] if the expression contains a division and the coefficient
    ///   structure is not a [`Field`](crate::Field), if it contains an unevaluated integral, or if
    ///   it calls a function the structure cannot [`apply`](Ring::apply).
    /// - [`DivisionByZero`] if a denominator evaluates to an element without an inverse.
    pub fn evaluate<R>(&self, ctxt: &Ctxt<T>, ring: &R) -> Result<T>
    where
        R: Ring<Element = T> + ?Sized,
    {
        match self {
            Self::Constant(value) => Ok(value.clone()),
            Self::Sum(lhs, rhs) => Ok(ring.add(&lhs.evaluate(ctxt, ring)?, &rhs.evaluate(ctxt, ring)?)),
            Self::Product(lhs, rhs) => Ok(ring.multiply(&lhs.evaluate(ctxt, ring)?, &rhs.evaluate(ctxt, ring)?)),
            Self::Division(num, den) => {
                let field = ring.as_field().ok_or_else(|| Error::new(self.to_string(), UnsupportedOperation {
                    operation: "evaluate",
                    reason: "division requires the coefficient structure to be a field".to_string(),
                }))?;
                let num = num.evaluate(ctxt, ring)?;
                let den = den.evaluate(ctxt, ring)?;
                field.divide(&num, &den).ok_or_else(|| Error::new(self.to_string(), DivisionByZero))
            },
            Self::Integral(..) => Err(Error::new(self.to_string(), UnsupportedOperation {
                operation: "evaluate",
                reason: "an unevaluated integral has no value".to_string(),
            })),
            Self::Polynomial(polynomial) => polynomial.evaluate(ctxt, ring),
            Self::Power(base, exp) => Ok(ring.pow(&base.evaluate(ctxt, ring)?, *exp)),
            Self::Call(function, arg) => {
                let arg = arg.evaluate(ctxt, ring)?;
                ring.apply(*function, &arg).ok_or_else(|| Error::new(self.to_string(), UnsupportedOperation {
                    operation: "evaluate",
                    reason: format!("the coefficient structure cannot evaluate `{}`", function),
                }))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::MissingVariable,
        function::Function,
        ring::{Integers, Rationals, Reals},
        Variable,
    };
    use assert_float_eq::*;
    use pretty_assertions::assert_eq;
    use rug::{Integer, Rational};
    use super::*;

    fn var(name: &str) -> Variable {
        Variable::new(name).unwrap()
    }

    #[test]
    fn arithmetic() {
        let x = Expr::variable(var("x"), &Integers);
        let expr = Expr::sum(
            Expr::product(Expr::constant(Integer::from(3)), Expr::power(x, 3)),
            Expr::constant(Integer::from(-4)),
        );
        let ctxt = Ctxt::from_iter([(var("x"), Integer::from(2))]);
        assert_eq!(expr.evaluate(&ctxt, &Integers).unwrap(), 20);
    }

    #[test]
    fn missing_variable_is_never_zero() {
        let expr = Expr::sum(Expr::variable(var("width"), &Integers), Expr::variable(var("height"), &Integers));
        let ctxt = Ctxt::from_iter([(var("width"), Integer::from(2)), (var("heights"), Integer::from(0))]);
        let err = expr.evaluate(&ctxt, &Integers).unwrap_err();
        let kind = err.downcast_ref::<MissingVariable>().unwrap();
        assert_eq!(kind.name, "height");
        assert_eq!(kind.suggestions, vec!["heights".to_string()]);
    }

    #[test]
    fn division_needs_a_field() {
        let expr = Expr::division(Expr::constant(Integer::from(1)), Expr::constant(Integer::from(2)));
        let err = expr.evaluate(&Ctxt::new(), &Integers).unwrap_err();
        assert!(err.is::<UnsupportedOperation>());

        let expr = Expr::division(Expr::constant(Rational::from(1)), Expr::constant(Rational::from(2)));
        assert_eq!(expr.evaluate(&Ctxt::new(), &Rationals).unwrap(), Rational::from((1, 2)));
    }

    #[test]
    fn division_by_zero() {
        let x = Expr::variable(var("x"), &Rationals);
        let expr = Expr::division(Expr::constant(Rational::from(1)), x);
        let ctxt = Ctxt::from_iter([(var("x"), Rational::new())]);
        let err = expr.evaluate(&ctxt, &Rationals).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.source, "1/x");
    }

    #[test]
    fn integral_has_no_value() {
        let expr = Expr::integral(Expr::constant(Integer::from(1)), var("x"));
        let err = expr.evaluate(&Ctxt::new(), &Integers).unwrap_err();
        assert!(err.is::<UnsupportedOperation>());
    }

    #[test]
    fn calls() {
        let x = Expr::variable(var("x"), &Reals);
        let expr = Expr::sum(
            Expr::power(Expr::call(Function::Sin, x.clone()), 2),
            Expr::power(Expr::call(Function::Cos, x), 2),
        );
        let ctxt = Ctxt::from_iter([(var("x"), 0.8)]);
        assert_float_absolute_eq!(expr.evaluate(&ctxt, &Reals).unwrap(), 1.0);

        let expr = Expr::call(Function::Exp, Expr::constant(Integer::from(0)));
        let err = expr.evaluate(&Ctxt::new(), &Integers).unwrap_err();
        assert_eq!(err.downcast_ref::<UnsupportedOperation>().unwrap().operation, "evaluate");
    }
}
