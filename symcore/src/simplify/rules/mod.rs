//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify and the
//! coefficient structure as arguments, and returns `Some(expr)` with the simplified expression if
//! the rule applies, or `None` if the rule does not apply. Rules only look at the node they are
//! given and its direct children; the driver in [`super`] applies them bottom-up over the whole
//! tree.

pub mod algebraic;
pub mod arithmetic;
pub mod trigonometry;

use crate::{expr::Expr, function::Function, ring::Ring, step_collector::StepCollector};
use super::step::Step;

/// If the expression is a sum, calls the given transformation function with the left and
/// right-hand-side of the sum.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_sum<T>(
    expr: &Expr<T>,
    f: impl Fn(&Expr<T>, &Expr<T>) -> Option<Expr<T>>,
) -> Option<Expr<T>> {
    if let Expr::Sum(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a product, calls the given transformation function with the left and
/// right-hand-side of the product.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_product<T>(
    expr: &Expr<T>,
    f: impl Fn(&Expr<T>, &Expr<T>) -> Option<Expr<T>>,
) -> Option<Expr<T>> {
    if let Expr::Product(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a division, calls the given transformation function with the numerator
/// and denominator.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_division<T>(
    expr: &Expr<T>,
    f: impl Fn(&Expr<T>, &Expr<T>) -> Option<Expr<T>>,
) -> Option<Expr<T>> {
    if let Expr::Division(num, den) = expr {
        f(num, den)
    } else {
        None
    }
}

/// If the expression is a power expression, calls the given transformation function with the base
/// and exponent.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_power<T>(
    expr: &Expr<T>,
    f: impl Fn(&Expr<T>, u32) -> Option<Expr<T>>,
) -> Option<Expr<T>> {
    if let Expr::Power(base, exp) = expr {
        f(base, *exp)
    } else {
        None
    }
}

/// If the expression is a call to the given function, calls the given transformation function
/// with the argument.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_call<T>(
    expr: &Expr<T>,
    function: Function,
    f: impl Fn(&Expr<T>) -> Option<Expr<T>>,
) -> Option<Expr<T>> {
    match expr {
        Expr::Call(target, arg) if *target == function => f(arg),
        _ => None,
    }
}

/// Applies the first applicable rule of any pass.
pub fn all<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    arithmetic::all(expr, ring, step_collector)
        .or_else(|| algebraic::all(expr, ring, step_collector))
        .or_else(|| trigonometry::all(expr, ring, step_collector))
}
