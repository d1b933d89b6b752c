//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into a simpler,
//! equivalent one. Simplification runs in iterations; each iteration applies three passes to the
//! whole tree in order:
//!
//! 1. [`rules::arithmetic`]: identities such as `a+0 = a` and `a*1 = a`, and constant folding.
//! 2. [`rules::algebraic`]: power identities, and merging polynomial leaves into one canonical
//!    polynomial.
//! 3. [`rules::trigonometry`]: the Pythagorean identity and exact values of functions.
//!
//! Every pass is a bottom-up rewrite: children are rewritten before their parent, and the parent
//! is then given one chance to match a rule. Iterations stop once the rendering of the expression
//! no longer changes, or after [`SimplifyConfig::max_iterations`] iterations.
//!
//! ```
//! use symcore::{ring::Integers, simplify, Expr, Variable};
//! use rug::Integer;
//!
//! let x = Expr::variable(Variable::new("x").unwrap(), &Integers);
//!
//! // (x + 0) * 1 = x
//! let expr = Expr::product(
//!     Expr::sum(x.clone(), Expr::constant(Integer::from(0))),
//!     Expr::constant(Integer::from(1)),
//! );
//! assert_eq!(simplify(&expr, &Integers), x);
//! ```

pub mod rules;
pub mod step;

use crate::{expr::Expr, ring::Ring, step_collector::StepCollector};
use std::sync::Arc;
use step::Step;
use tracing::{debug, trace, warn};

/// Options for [`simplify_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyConfig {
    /// The maximum number of iterations to run before giving up on reaching a fixed point.
    pub max_iterations: usize,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self { max_iterations: 10 }
    }
}

/// A single simplification pass, applied to one node at a time.
type Pass<R> = fn(
    &Expr<<R as Ring>::Element>,
    &R,
    &mut dyn StepCollector<Step>,
) -> Option<Expr<<R as Ring>::Element>>;

/// Forwards steps to the inner collector, tracing each one.
struct Traced<'a>(&'a mut dyn StepCollector<Step>);

impl StepCollector<Step> for Traced<'_> {
    fn push(&mut self, step: Step) {
        trace!(?step, "applied simplification rule");
        self.0.push(step);
    }
}

/// Applies the pass to every node of the tree, children first.
///
/// Returns `Some(expr)` if any node was rewritten.
fn rewrite<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
    pass: Pass<R>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let mut changed = false;
    let rebuilt = expr.map_children(|child| match rewrite(&**child, ring, step_collector, pass) {
        Some(new_child) => {
            changed = true;
            Arc::new(new_child)
        },
        None => Arc::clone(child),
    });

    match pass(&rebuilt, ring, step_collector) {
        Some(new_expr) => Some(new_expr),
        None if changed => Some(rebuilt),
        None => None,
    }
}

/// Runs one iteration: the arithmetic, algebraic, and trigonometric passes, in that order.
fn simplify_once<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr<R::Element>>
where
    R: Ring + ?Sized,
{
    let passes: [Pass<R>; 3] = [
        rules::arithmetic::all::<R>,
        rules::algebraic::all::<R>,
        rules::trigonometry::all::<R>,
    ];

    let mut current: Option<Expr<R::Element>> = None;
    for pass in passes {
        let input = current.as_ref().unwrap_or(expr);
        if let Some(new_expr) = rewrite(input, ring, step_collector, pass) {
            current = Some(new_expr);
        }
    }
    current
}

/// Base implementation of the simplification algorithm.
fn inner_simplify_with<R>(
    expr: &Expr<R::Element>,
    ring: &R,
    config: &SimplifyConfig,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr<R::Element>
where
    R: Ring + ?Sized,
{
    let mut step_collector = Traced(step_collector);
    let mut expr = expr.clone();
    let mut previous = expr.to_string();

    for iteration in 0..config.max_iterations {
        if let Some(new_expr) = simplify_once(&expr, ring, &mut step_collector) {
            expr = new_expr;
        }

        let rendered = expr.to_string();
        debug!(iteration, expr = %rendered, "simplifier iteration");
        if rendered == previous {
            debug!(iteration, "simplifier converged");
            return expr;
        }
        previous = rendered;
    }

    warn!(
        max_iterations = config.max_iterations,
        expr = %previous,
        "simplifier stopped at the iteration cap without converging"
    );
    expr
}

/// Simplify the given expression, using the default [`SimplifyConfig`].
pub fn simplify<R>(expr: &Expr<R::Element>, ring: &R) -> Expr<R::Element>
where
    R: Ring + ?Sized,
{
    inner_simplify_with(expr, ring, &SimplifyConfig::default(), &mut ())
}

/// Simplify the given expression, using the given configuration.
pub fn simplify_with<R>(expr: &Expr<R::Element>, ring: &R, config: &SimplifyConfig) -> Expr<R::Element>
where
    R: Ring + ?Sized,
{
    inner_simplify_with(expr, ring, config, &mut ())
}

/// Simplify the given expression, using the default [`SimplifyConfig`]. The steps taken by the
/// simplifier will also be collected and returned, in the order they were applied.
pub fn simplify_with_steps<R>(expr: &Expr<R::Element>, ring: &R) -> (Expr<R::Element>, Vec<Step>)
where
    R: Ring + ?Sized,
{
    let mut steps = Vec::new();
    let expr = inner_simplify_with(expr, ring, &SimplifyConfig::default(), &mut steps);
    (expr, steps)
}
