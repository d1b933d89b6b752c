use crate::function::Function;

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a/1 = a`
    DivideOne,

    /// `0/a = 0`
    DivideZero,

    /// `2+3 = 5`
    /// `2*3 = 6`
    FoldConstants,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `2^3 = 8`
    FoldConstantPower,

    /// `(x+1)^2 = x^2+2x+1`
    ExpandPower,

    /// `(x+1) + (x-1) = 2x`
    /// `2 * (x+1) = 2x+2`
    MergePolynomials,

    /// A polynomial with only a constant term becomes a constant.
    CollapsePolynomial,

    /// `sin(a)^2 + cos(a)^2 = 1`
    Pythagorean,

    /// A function applied to an argument with a well-known value, such as `sin(0) = 0`.
    ExactValue(Function),
}
