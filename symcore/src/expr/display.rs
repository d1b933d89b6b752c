//! Plain-text and LaTeX rendering of expressions.
//!
//! Rendering is structural: nodes are written in storage order and never reordered. Parentheses
//! are inserted only where operator precedence requires them, so the rendered text parses back to
//! the same tree shape. A right child of equal precedence is always parenthesized, which keeps
//! `a + (b + c)` distinguishable from `(a + b) + c`.

use crate::{fmt::{fmt_grouped, Latex}, function::Function};
use std::fmt::{self, Display, Formatter};
use super::Expr;

/// Binding strength of a rendered node, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Sum,
    Product,
    Power,
    Atom,
}

/// Classifies the rendered text of a leaf (a constant or polynomial).
///
/// Coefficients are opaque to this crate, so their rendering is the only thing to go by: `-3` and
/// `1/2` bind like products, `x^2` like a power, and `x - 1` like a sum.
fn leaf_precedence(text: &str) -> Precedence {
    if text.contains(" + ") || text.contains(" - ") {
        Precedence::Sum
    } else if text.starts_with('-') || text.contains('*') || text.contains('/') {
        Precedence::Product
    } else if text.contains('^') {
        Precedence::Power
    } else if text.chars().all(|c| c.is_alphanumeric() || c == '.' || c == '_') {
        Precedence::Atom
    } else {
        Precedence::Product
    }
}

impl<T: Display> Expr<T> {
    fn precedence(&self) -> Precedence {
        match self {
            Self::Constant(value) => leaf_precedence(&value.to_string()),
            Self::Polynomial(polynomial) => leaf_precedence(&polynomial.to_string()),
            Self::Sum(..) | Self::Integral(..) => Precedence::Sum,
            Self::Product(..) | Self::Division(..) => Precedence::Product,
            Self::Power(..) => Precedence::Power,
            Self::Call(..) => Precedence::Atom,
        }
    }

    /// Writes a left operand, parenthesized if it binds looser than the operator.
    fn fmt_left(&self, f: &mut Formatter<'_>, op: Precedence) -> fmt::Result {
        if self.precedence() < op {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }

    /// Writes a right operand, parenthesized if it binds looser than or as loose as the operator.
    fn fmt_right(&self, f: &mut Formatter<'_>, op: Precedence) -> fmt::Result {
        if self.precedence() <= op {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl<T: Display> Display for Expr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Polynomial(polynomial) => write!(f, "{}", polynomial),
            Self::Sum(lhs, rhs) => {
                lhs.fmt_left(f, Precedence::Sum)?;
                write!(f, " + ")?;
                rhs.fmt_right(f, Precedence::Sum)
            },
            Self::Product(lhs, rhs) => {
                lhs.fmt_left(f, Precedence::Product)?;
                write!(f, "*")?;
                rhs.fmt_right(f, Precedence::Product)
            },
            Self::Division(lhs, rhs) => {
                lhs.fmt_left(f, Precedence::Product)?;
                write!(f, "/")?;
                rhs.fmt_right(f, Precedence::Product)
            },
            Self::Power(base, exp) => {
                base.fmt_right(f, Precedence::Power)?;
                write!(f, "^{}", exp)
            },
            Self::Integral(integrand, var) => write!(f, "∫({}) d{}", integrand, var),
            Self::Call(function, arg) => write!(f, "{}({})", function, arg),
        }
    }
}

impl<T: Display> Latex for Expr<T> {
    fn fmt_latex(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Polynomial(polynomial) => polynomial.fmt_latex(f),
            Self::Sum(lhs, rhs) => {
                fmt_grouped(f, &**lhs, lhs.precedence() < Precedence::Sum)?;
                write!(f, " + ")?;
                fmt_grouped(f, &**rhs, rhs.precedence() <= Precedence::Sum)
            },
            Self::Product(lhs, rhs) => {
                fmt_grouped(f, &**lhs, lhs.precedence() < Precedence::Product)?;
                write!(f, " \\cdot ")?;
                fmt_grouped(f, &**rhs, rhs.precedence() <= Precedence::Product)
            },
            Self::Division(lhs, rhs) => {
                write!(f, "\\frac{{")?;
                lhs.fmt_latex(f)?;
                write!(f, "}}{{")?;
                rhs.fmt_latex(f)?;
                write!(f, "}}")
            },
            Self::Power(base, exp) => {
                write!(f, "{{")?;
                fmt_grouped(f, &**base, base.precedence() <= Precedence::Power)?;
                write!(f, "}}^{{{}}}", exp)
            },
            Self::Integral(integrand, var) => {
                write!(f, "\\int ")?;
                fmt_grouped(f, &**integrand, integrand.precedence() <= Precedence::Sum)?;
                write!(f, " \\, d{}", var)
            },
            Self::Call(Function::Sqrt, arg) => {
                write!(f, "\\sqrt{{")?;
                arg.fmt_latex(f)?;
                write!(f, "}}")
            },
            Self::Call(function, arg) => {
                write!(f, "\\{}\\left(", function)?;
                arg.fmt_latex(f)?;
                write!(f, "\\right)")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{polynomial::Polynomial, monomial::Monomial, ring::{Integers, Rationals}, Variable};
    use pretty_assertions::assert_eq;
    use rug::{Integer, Rational};
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

    fn y() -> Expr<Integer> {
        Expr::variable(var("y"), &Integers)
    }

    #[test]
    fn right_nesting_is_parenthesized() {
        let left = Expr::sum(Expr::sum(x(), y()), int(1));
        let right = Expr::sum(x(), Expr::sum(y(), int(1)));
        assert_eq!(left.to_string(), "x + y + 1");
        assert_eq!(right.to_string(), "x + (y + 1)");
    }

    #[test]
    fn products_and_sums() {
        let expr = Expr::product(Expr::sum(x(), int(1)), y());
        assert_eq!(expr.to_string(), "(x + 1)*y");

        let expr = Expr::sum(Expr::product(x(), int(2)), Expr::division(y(), int(3)));
        assert_eq!(expr.to_string(), "x*2 + y/3");

        let expr = Expr::division(x(), Expr::product(y(), y()));
        assert_eq!(expr.to_string(), "x/(y*y)");
    }

    #[test]
    fn negative_constants_are_grouped() {
        let expr = Expr::product(x(), int(-1));
        assert_eq!(expr.to_string(), "x*(-1)");

        let expr = Expr::power(int(-2), 2);
        assert_eq!(expr.to_string(), "(-2)^2");
    }

    #[test]
    fn polynomial_leaves() {
        // a multi-term polynomial binds like a sum
        let p = Polynomial::new([
            (Monomial::variable(var("x")).pow(2).unwrap(), Integer::from(1)),
            (Monomial::one(), Integer::from(-1)),
        ], &Integers);
        let expr = Expr::product(int(2), Expr::polynomial(p));
        assert_eq!(expr.to_string(), "2*(x^2 - 1)");

        let x2 = Expr::polynomial(Polynomial::monomial(Monomial::variable(var("x")).pow(2).unwrap(), Integer::from(1), &Integers));
        assert_eq!(Expr::power(x2, 3).to_string(), "(x^2)^3");
    }

    #[test]
    fn rational_constants_are_grouped() {
        let half = Expr::constant(Rational::from((1, 2)));
        let x = Expr::variable(var("x"), &Rationals);
        assert_eq!(Expr::power(half.clone(), 2).to_string(), "(1/2)^2");
        assert_eq!(Expr::product(x, half).to_string(), "x*(1/2)");
    }

    #[test]
    fn calls_and_integrals() {
        let expr = Expr::power(Expr::call(Function::Sin, x()), 2);
        assert_eq!(expr.to_string(), "sin(x)^2");

        let expr = Expr::product(Expr::integral(Expr::sum(x(), int(1)), var("x")), y());
        assert_eq!(expr.to_string(), "(∫(x + 1) dx)*y");
    }

    #[test]
    fn latex() {
        let expr = Expr::division(
            Expr::product(Expr::sum(x(), int(1)), Expr::call(Function::Sin, y())),
            Expr::power(Expr::call(Function::Sqrt, x()), 3),
        );
        assert_eq!(
            expr.as_display().to_string(),
            "\\frac{\\left(x + 1\\right) \\cdot \\sin\\left(y\\right)}{{\\sqrt{x}}^{3}}",
        );

        let expr = Expr::integral(Expr::sum(x(), int(1)), var("x"));
        assert_eq!(expr.as_display().to_string(), "\\int \\left(x + 1\\right) \\, dx");

        let expr = Expr::power(Expr::sum(x(), int(1)), 2);
        assert_eq!(expr.as_display().to_string(), "{\\left(x + 1\\right)}^{2}");
    }
}
