//! Identities of addition, multiplication, and division, and folding of constants.

use crate::{
    expr::Expr,
    ring::Ring,
    simplify::{rules::{do_division, do_product, do_sum}, step::Step},
    step_collector::StepCollector,
};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let opt = do_sum(expr, |lhs, rhs| {
        if rhs.is_trivially_zero(ring) {
            Some(lhs.clone())
        } else if lhs.is_trivially_zero(ring) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let opt = do_product(expr, |lhs, rhs| {
        if lhs.is_trivially_zero(ring) || rhs.is_trivially_zero(ring) {
            Some(Expr::Constant(ring.zero()))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let opt = do_product(expr, |lhs, rhs| {
        if rhs.is_trivially_one(ring) {
            Some(lhs.clone())
        } else if lhs.is_trivially_one(ring) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let opt = do_division(expr, |num, den| {
        if den.is_trivially_one(ring) {
            Some(num.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `0/a = 0`
///
/// `0/0` is left alone.
pub fn divide_zero<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let opt = do_division(expr, |num, den| {
        if num.is_trivially_zero(ring) && !den.is_trivially_zero(ring) {
            Some(Expr::Constant(ring.zero()))
        } else {
            None
        }
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `2+3 = 5`
/// `2*3 = 6`
pub fn fold_constants<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let opt = match expr {
        Expr::Sum(lhs, rhs) => Some(Expr::Constant(ring.add(lhs.as_constant()?, rhs.as_constant()?))),
        Expr::Product(lhs, rhs) => Some(Expr::Constant(ring.multiply(lhs.as_constant()?, rhs.as_constant()?))),
        _ => None,
    }?;

    step_collector.push(Step::FoldConstants);
    Some(opt)
}

/// Applies all arithmetic rules.
pub fn all<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    add_zero(expr, ring, step_collector)
        .or_else(|| multiply_zero(expr, ring, step_collector))
        .or_else(|| multiply_one(expr, ring, step_collector))
        .or_else(|| divide_one(expr, ring, step_collector))
        .or_else(|| divide_zero(expr, ring, step_collector))
        .or_else(|| fold_constants(expr, ring, step_collector))
}
