//! LaTeX rendering.
//!
//! Every public value type in this crate implements [`Latex`] in addition to [`Display`]. The
//! plain-text [`Display`] form is meant to be read back by humans and is used as the source text
//! of error reports; the LaTeX form is meant to be typeset.

use std::fmt::{Display, Formatter, Result};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Helper to write `value` surrounded by `\left(` and `\right)` if `paren` is true.
pub(crate) fn fmt_grouped<T: Latex + ?Sized>(f: &mut Formatter, value: &T, paren: bool) -> Result {
    if paren {
        write!(f, "\\left(")?;
        value.fmt_latex(f)?;
        write!(f, "\\right)")
    } else {
        value.fmt_latex(f)
    }
}
