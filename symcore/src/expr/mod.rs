//! The expression tree.
//!
//! # Representation
//!
//! An [`Expr`] is a closed tree of nodes whose leaves are either constants of some coefficient type
//! `T` or canonical [`Polynomial`]s (the only place variables appear, apart from the bound variable
//! of an [`Expr::Integral`]). Interior nodes are binary: `x + (y + z)` and `(x + y) + z` are
//! different trees, and no operation reorders or flattens them.
//!
//! Children are held behind [`Arc`], so expressions are immutable and every derived expression
//! (a derivative, a substitution, a simplified form) shares the untouched subtrees of the
//! expression it was derived from. Cloning an expression is cheap.
//!
//! ```
//! use symcore::{ring::Integers, Expr, Variable};
//! use rug::Integer;
//!
//! let x = Variable::new("x").unwrap();
//! let expr = Expr::variable(x.clone(), &Integers)
//!     .multiply(Expr::constant(Integer::from(3)), &Integers)
//!     .add(Expr::constant(Integer::from(1)), &Integers);
//! assert_eq!(expr.to_string(), "x*3 + 1");
//! ```
//!
//! # Coefficient structures
//!
//! An expression does not know which [`Ring`] its constants belong to. Every operation that needs
//! `0`, `1`, or coefficient arithmetic receives the structure as an argument, and operations that
//! need division (integration of polynomials, evaluation of [`Expr::Division`]) ask the structure
//! for its [`Field`](crate::Field) capability at runtime.
//!
//! # Limits
//!
//! Evaluation, differentiation, composition, rendering, and the simplifier recurse once per level
//! of the tree, and so does dropping the last reference to a tree. A tree tens of thousands of
//! levels deep can overflow the stack in any of them. [`Expr::depth`], [`Expr::node_count`], and
//! [`Expr::post_order_iter`] use an explicit stack instead, so callers that accept expressions of
//! unbounded size should check [`Expr::depth`] before doing anything else with them.

mod calculus;
mod compose;
mod display;
mod eval;
pub mod iter;

use crate::{function::Function, polynomial::Polynomial, ring::Ring, simplify::rules, Variable};
use iter::ExprIter;
use std::{collections::BTreeSet, fmt::Display, sync::Arc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A symbolic expression with coefficients of type `T`.
///
/// Equality is structural: `x + y` and `y + x` are different expressions, even though they are
/// mathematically equal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr<T> {
    /// A constant coefficient.
    Constant(T),

    /// The sum of two expressions, `left + right`.
    Sum(Arc<Expr<T>>, Arc<Expr<T>>),

    /// The product of two expressions, `left * right`.
    Product(Arc<Expr<T>>, Arc<Expr<T>>),

    /// The quotient of two expressions, `numerator / denominator`. Evaluating it requires a
    /// [`Field`](crate::Field).
    Division(Arc<Expr<T>>, Arc<Expr<T>>),

    /// An unevaluated indefinite integral of the expression with respect to the variable.
    ///
    /// This is distinct from [`Expr::integrate`], which computes a closed form.
    Integral(Arc<Expr<T>>, Variable),

    /// A canonical multivariate polynomial.
    Polynomial(Polynomial<T>),

    /// An expression raised to a non-negative integer power.
    Power(Arc<Expr<T>>, u32),

    /// An elementary function applied to an expression.
    Call(Function, Arc<Expr<T>>),
}

impl<T> Expr<T> {
    /// Creates a constant expression.
    pub fn constant(value: T) -> Self {
        Self::Constant(value)
    }

    /// Creates the sum `left + right`, without any folding.
    pub fn sum(left: impl Into<Arc<Self>>, right: impl Into<Arc<Self>>) -> Self {
        Self::Sum(left.into(), right.into())
    }

    /// Creates the product `left * right`, without any folding.
    pub fn product(left: impl Into<Arc<Self>>, right: impl Into<Arc<Self>>) -> Self {
        Self::Product(left.into(), right.into())
    }

    /// Creates the quotient `numerator / denominator`.
    pub fn division(numerator: impl Into<Arc<Self>>, denominator: impl Into<Arc<Self>>) -> Self {
        Self::Division(numerator.into(), denominator.into())
    }

    /// Creates the unevaluated integral `∫(integrand) d(var)`.
    pub fn integral(integrand: impl Into<Arc<Self>>, var: Variable) -> Self {
        Self::Integral(integrand.into(), var)
    }

    /// Creates the power `base^exponent`.
    pub fn power(base: impl Into<Arc<Self>>, exponent: u32) -> Self {
        Self::Power(base.into(), exponent)
    }

    /// Creates the function application `function(argument)`.
    pub fn call(function: Function, argument: impl Into<Arc<Self>>) -> Self {
        Self::Call(function, argument.into())
    }

    /// Creates a polynomial expression.
    pub fn polynomial(polynomial: Polynomial<T>) -> Self {
        Self::Polynomial(polynomial)
    }

    /// Returns the constant value if this is an [`Expr::Constant`].
    pub fn as_constant(&self) -> Option<&T> {
        match self {
            Self::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the polynomial if this is an [`Expr::Polynomial`].
    pub fn as_polynomial(&self) -> Option<&Polynomial<T>> {
        match self {
            Self::Polynomial(polynomial) => Some(polynomial),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first). Every node is visited once, including shared subtrees, which are
    /// visited once per occurrence.
    pub fn post_order_iter(&self) -> ExprIter<'_, T> {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree. Leaves (constants and polynomials) count as one.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the depth of the tree. A leaf has depth one.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, depth)) = stack.pop() {
            max = max.max(depth);
            match expr {
                Self::Constant(_) | Self::Polynomial(_) => (),
                Self::Sum(lhs, rhs) | Self::Product(lhs, rhs) | Self::Division(lhs, rhs) => {
                    stack.push((&**lhs, depth + 1));
                    stack.push((&**rhs, depth + 1));
                },
                Self::Integral(inner, _) | Self::Power(inner, _) | Self::Call(_, inner) => {
                    stack.push((&**inner, depth + 1));
                },
            }
        }
        max
    }

    /// Returns every variable this expression depends on, sorted by name.
    ///
    /// This includes the variable of every [`Expr::Integral`] node, since an indefinite integral
    /// is a function of its variable of integration.
    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut vars = BTreeSet::new();
        for expr in self.post_order_iter() {
            match expr {
                Self::Polynomial(polynomial) => vars.extend(polynomial.variables()),
                Self::Integral(_, var) => {
                    vars.insert(var.clone());
                },
                _ => (),
            }
        }
        vars
    }

    /// Returns a copy of this node with each direct child replaced by `f(child)`. Leaves are
    /// returned unchanged.
    pub(crate) fn map_children(&self, mut f: impl FnMut(&Arc<Self>) -> Arc<Self>) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Constant(_) | Self::Polynomial(_) => self.clone(),
            Self::Sum(lhs, rhs) => Self::Sum(f(lhs), f(rhs)),
            Self::Product(lhs, rhs) => Self::Product(f(lhs), f(rhs)),
            Self::Division(lhs, rhs) => Self::Division(f(lhs), f(rhs)),
            Self::Integral(inner, var) => Self::Integral(f(inner), var.clone()),
            Self::Power(inner, exp) => Self::Power(f(inner), *exp),
            Self::Call(function, inner) => Self::Call(*function, f(inner)),
        }
    }
}

impl<T: Clone + PartialEq + Display> Expr<T> {
    /// Creates the expression `var`, as a single-term polynomial.
    pub fn variable<R>(var: Variable, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        Self::Polynomial(Polynomial::variable(var, ring))
    }

    /// Returns `self + other`.
    ///
    /// Two constants are folded into one; any other combination produces an [`Expr::Sum`].
    pub fn add<R>(self, other: Self, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        match (self, other) {
            (Self::Constant(a), Self::Constant(b)) => Self::Constant(ring.add(&a, &b)),
            (lhs, rhs) => Self::sum(lhs, rhs),
        }
    }

    /// Returns `self * other`.
    ///
    /// Two constants are folded into one; any other combination produces an [`Expr::Product`].
    pub fn multiply<R>(self, other: Self, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        match (self, other) {
            (Self::Constant(a), Self::Constant(b)) => Self::Constant(ring.multiply(&a, &b)),
            (lhs, rhs) => Self::product(lhs, rhs),
        }
    }

    /// Returns `-self`.
    ///
    /// Constants and polynomials are negated directly; anything else is multiplied by `-1`.
    pub fn negate<R>(&self, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        match self {
            Self::Constant(value) => Self::Constant(ring.negate(value)),
            Self::Polynomial(polynomial) => Self::Polynomial(polynomial.negate(ring)),
            expr => Self::product(Self::Constant(ring.negate(&ring.one())), expr.clone()),
        }
    }

    /// Returns `self - other`, as `self + (-other)`.
    pub fn subtract<R>(self, other: Self, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        let other = other.negate(ring);
        self.add(other, ring)
    }

    /// Returns true if this expression is obviously zero: the constant zero, or the zero
    /// polynomial. This is a syntactic check, not a proof.
    pub fn is_trivially_zero<R>(&self, ring: &R) -> bool
    where
        R: Ring<Element = T> + ?Sized,
    {
        match self {
            Self::Constant(value) => ring.is_zero(value),
            Self::Polynomial(polynomial) => polynomial.is_zero(),
            _ => false,
        }
    }

    /// Returns true if this expression is obviously one: the constant one, or the constant
    /// polynomial one.
    pub fn is_trivially_one<R>(&self, ring: &R) -> bool
    where
        R: Ring<Element = T> + ?Sized,
    {
        match self {
            Self::Constant(value) => ring.is_one(value),
            Self::Polynomial(polynomial) => polynomial
                .as_constant(ring)
                .map_or(false, |value| ring.is_one(&value)),
            _ => false,
        }
    }

    /// Applies the first applicable simplification identity to this node only, without recursing
    /// into children or repeating. Returns a clone of `self` if no identity applies.
    ///
    /// Use [`simplify`](crate::simplify()) to simplify a whole tree to a fixed point.
    pub fn simplify<R>(&self, ring: &R) -> Self
    where
        R: Ring<Element = T> + ?Sized,
    {
        rules::all(self, ring, &mut ()).unwrap_or_else(|| self.clone())
    }

    /// Replaces every subtree structurally equal to `target` with `replacement`.
    ///
    /// Matching is purely structural: `x + y` does not match `y + x`, and a polynomial matches
    /// only a structurally equal polynomial. Subtrees of a replaced node are not searched.
    pub fn replace(&self, target: &Self, replacement: &Self) -> Self {
        if self == target {
            return replacement.clone();
        }
        self.map_children(|child| {
            let replaced = child.replace(target, replacement);
            if replaced == **child {
                Arc::clone(child)
            } else {
                Arc::new(replaced)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{monomial::Monomial, ring::Integers};
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

    #[test]
    fn depth_of_a_long_chain() {
        let mut expr = x();
        for _ in 0..1_000 {
            expr = Expr::sum(expr, int(1));
        }
        assert_eq!(expr.depth(), 1_001);
        assert_eq!(expr.node_count(), 2_001);
    }

    #[test]
    fn constants_fold() {
        assert_eq!(int(2).add(int(3), &Integers), int(5));
        assert_eq!(int(2).multiply(int(3), &Integers), int(6));
        assert_eq!(int(2).subtract(int(3), &Integers), int(-1));
    }

    #[test]
    fn non_constants_do_not_fold() {
        let sum = x().add(int(3), &Integers);
        assert_eq!(sum, Expr::sum(x(), int(3)));

        let product = int(3).multiply(x(), &Integers);
        assert_eq!(product, Expr::product(int(3), x()));
    }

    #[test]
    fn structural_equality() {
        let y = Expr::variable(var("y"), &Integers);
        assert_ne!(x().add(y.clone(), &Integers), y.add(x(), &Integers));
    }

    #[test]
    fn negate() {
        assert_eq!(int(4).negate(&Integers), int(-4));
        assert_eq!(
            x().negate(&Integers),
            Expr::polynomial(Polynomial::monomial(Monomial::variable(var("x")), Integer::from(-1), &Integers)),
        );
        let call = Expr::call(Function::Sin, x());
        assert_eq!(call.negate(&Integers), Expr::product(int(-1), call.clone()));
    }

    #[test]
    fn node_count_and_depth() {
        // (x + 1) * sin(x)
        let expr = Expr::product(Expr::sum(x(), int(1)), Expr::call(Function::Sin, x()));
        assert_eq!(expr.node_count(), 6);
        assert_eq!(expr.depth(), 3);
        assert_eq!(int(1).depth(), 1);
    }

    #[test]
    fn variables_include_integration_variable() {
        let y = Expr::variable(var("y"), &Integers);
        let expr = Expr::sum(Expr::integral(int(1), var("t")), Expr::product(x(), y));
        assert_eq!(expr.variables().into_iter().collect::<Vec<_>>(), vec![var("t"), var("x"), var("y")]);
    }

    #[test]
    fn replace_subtree() {
        let sin_x = Expr::call(Function::Sin, x());
        let expr = Expr::sum(sin_x.clone(), Expr::product(int(2), sin_x.clone()));
        let replaced = expr.replace(&sin_x, &int(0));
        assert_eq!(replaced, Expr::sum(int(0), Expr::product(int(2), int(0))));
    }

    #[test]
    fn replace_keeps_unchanged_subtrees_shared() {
        let shared = Arc::new(Expr::call(Function::Cos, x()));
        let expr = Expr::Sum(Arc::clone(&shared), Arc::new(int(1)));
        let replaced = expr.replace(&int(1), &int(2));
        match replaced {
            Expr::Sum(lhs, rhs) => {
                assert!(Arc::ptr_eq(&lhs, &shared));
                assert_eq!(*rhs, int(2));
            },
            other => panic!("expected a sum, got {:?}", other),
        }
    }

    #[test]
    fn trivial_checks() {
        assert!(int(0).is_trivially_zero(&Integers));
        assert!(Expr::polynomial(Polynomial::<Integer>::zero()).is_trivially_zero(&Integers));
        assert!(Expr::polynomial(Polynomial::constant(Integer::from(1), &Integers)).is_trivially_one(&Integers));
        assert!(!x().is_trivially_one(&Integers));
    }
}
