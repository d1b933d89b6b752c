//! Symbolic algebra over abstract coefficient structures.
//!
//! This crate represents mathematical formulas as trees of [`Expr`] nodes whose numeric leaves
//! are elements of some [`Ring`]. The crate never assumes a concrete numeric representation:
//! every operation that needs `0`, `1`, or coefficient arithmetic receives the coefficient
//! structure as an explicit argument, and operations that need division ask the structure for its
//! [`Field`] capability at runtime.
//!
//! ```
//! use symcore::{ctxt::Ctxt, ring::Rationals, Expr, Polynomial, Variable};
//! use rug::Rational;
//!
//! let x = Variable::new("x").unwrap();
//!
//! // x^2 + 1
//! let p = Polynomial::new([
//!     (symcore::Monomial::variable(x.clone()).pow(2).unwrap(), Rational::from(1)),
//!     (symcore::Monomial::one(), Rational::from(1)),
//! ], &Rationals);
//! let expr = Expr::Polynomial(p);
//!
//! // d/dx (x^2 + 1) = 2x
//! let derivative = expr.differentiate(&x, &Rationals);
//! assert_eq!(derivative.to_string(), "2*x");
//!
//! let ctxt = Ctxt::from_iter([(x, Rational::from(3))]);
//! assert_eq!(derivative.evaluate(&ctxt, &Rationals).unwrap(), 6);
//! ```
//!
//! The crate is organized as follows:
//!
//! - [`ring`]: the [`Ring`] / [`Field`] capability traits and the reference structures
//!   [`Integers`](ring::Integers), [`Rationals`](ring::Rationals), and [`Reals`](ring::Reals).
//! - [`Variable`], [`Monomial`], and [`Polynomial`]: the atoms and the canonical polynomial form.
//! - [`expr`]: the expression tree and its calculus, substitution, and evaluation operations.
//! - [`series`]: truncated power series.
//! - [`mod@simplify`]: the rule-driven simplifier.
//! - [`fmt`]: LaTeX rendering.

pub mod ctxt;
pub mod error;
pub mod expr;
pub mod fmt;
pub mod function;
pub mod monomial;
pub mod polynomial;
pub mod ring;
pub mod series;
pub mod simplify;
pub mod step_collector;
pub mod variable;

pub use expr::Expr;
pub use function::Function;
pub use monomial::Monomial;
pub use polynomial::Polynomial;
pub use ring::{Field, Ring};
pub use series::Series;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
pub use symcore_error::Error;
pub use variable::Variable;

/// The result type returned by fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
