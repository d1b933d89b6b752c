//! Trigonometric identities, and exact values of the elementary functions.

use crate::{
    expr::Expr,
    function::Function,
    ring::Ring,
    simplify::{rules::do_sum, step::Step},
    step_collector::StepCollector,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A value that can be produced in any ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Known {
    Zero,
    One,
}

impl Known {
    /// Classifies the expression, if it is trivially zero or one.
    fn of<R>(expr: &Expr<R::Element>, ring: &R) -> Option<Self>
    where
        R: Ring + ?Sized,
    {
        if expr.is_trivially_zero(ring) {
            Some(Self::Zero)
        } else if expr.is_trivially_one(ring) {
            Some(Self::One)
        } else {
            None
        }
    }

    fn to_element<R>(self, ring: &R) -> R::Element
    where
        R: Ring + ?Sized,
    {
        match self {
            Self::Zero => ring.zero(),
            Self::One => ring.one(),
        }
    }
}

/// Exact values of functions at arguments that are exact in every ring.
static EXACT_VALUES: Lazy<HashMap<(Function, Known), Known>> = Lazy::new(|| {
    HashMap::from([
        ((Function::Sin, Known::Zero), Known::Zero),
        ((Function::Cos, Known::Zero), Known::One),
        ((Function::Tan, Known::Zero), Known::Zero),
        ((Function::Exp, Known::Zero), Known::One),
        ((Function::Ln, Known::One), Known::Zero),
        ((Function::Sqrt, Known::Zero), Known::Zero),
        ((Function::Sqrt, Known::One), Known::One),
    ])
});

/// If the expression is the square of a call to `function`, written either as `f(a)^2` or
/// `f(a)*f(a)`, returns the argument `a`.
fn square_of<T: PartialEq>(expr: &Expr<T>, function: Function) -> Option<&Expr<T>> {
    match expr {
        Expr::Power(base, 2) => match &**base {
            Expr::Call(f, arg) if *f == function => Some(&**arg),
            _ => None,
        },
        Expr::Product(lhs, rhs) => match (&**lhs, &**rhs) {
            (Expr::Call(f, a), Expr::Call(g, b)) if *f == function && *g == function && a == b => {
                Some(&**a)
            },
            _ => None,
        },
        _ => None,
    }
}

/// `sin(x)^2 + cos(x)^2 = 1`
/// `cos(x)^2 + sin(x)^2 = 1`
pub fn pythagorean<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let opt = do_sum(expr, |lhs, rhs| {
        let matches = |first: Function, second: Function| {
            match (square_of(lhs, first), square_of(rhs, second)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        };

        if matches(Function::Sin, Function::Cos) || matches(Function::Cos, Function::Sin) {
            Some(Expr::Constant(ring.one()))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Pythagorean);
    Some(opt)
}

/// `sin(0) = 0`, `cos(0) = 1`, `tan(0) = 0`, `exp(0) = 1`, `ln(1) = 0`, `sqrt(0) = 0`,
/// `sqrt(1) = 1`
pub fn exact_value<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let Expr::Call(function, arg) = expr else {
        return None;
    };
    let known = Known::of(&**arg, ring)?;
    let value = EXACT_VALUES.get(&(*function, known))?;

    step_collector.push(Step::ExactValue(*function));
    Some(Expr::Constant(value.to_element(ring)))
}

/// Applies all trigonometric rules.
pub fn all<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    pythagorean(expr, ring, step_collector)
        .or_else(|| exact_value(expr, ring, step_collector))
}
