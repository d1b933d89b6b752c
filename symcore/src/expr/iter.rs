use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a, T> {
    /// Nodes waiting to be visited, each paired with whether its children have already been pushed.
    stack: Vec<(&'a Expr<T>, bool)>,
}

impl<'a, T> ExprIter<'a, T> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr<T>) -> Self {
        Self { stack: vec![(expr, false)] }
    }
}

impl<'a, T> Iterator for ExprIter<'a, T> {
    type Item = &'a Expr<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.stack.pop()?;
            if expanded {
                return Some(expr);
            }

            self.stack.push((expr, true));
            match expr {
                Expr::Constant(_) | Expr::Polynomial(_) => (),
                Expr::Sum(lhs, rhs) | Expr::Product(lhs, rhs) | Expr::Division(lhs, rhs) => {
                    self.stack.push((&**rhs, false));
                    self.stack.push((&**lhs, false));
                },
                Expr::Integral(inner, _) | Expr::Power(inner, _) | Expr::Call(_, inner) => {
                    self.stack.push((&**inner, false));
                },
            }
        }
    }
}
