//! Depth-first traversal over the [`Expr`] tree.

use crate::ast::Expr;

/// Trait that implements the [Visitor pattern](https://en.wikipedia.org/wiki/Visitor_pattern)
/// for a depth first walk on [`Expr`] AST. [`pre_visit`](ExprVisitor::pre_visit) is called
/// before any children are visited, and then [`post_visit`](ExprVisitor::post_visit) is called
/// after all children have been visited. Only [`pre_visit`](ExprVisitor::pre_visit) is required.
pub trait ExprVisitor {
    type Error;

    /// Called before any children are visited. Return `Ok(false)` to cut short the recursion
    /// (skip traversing and return).
    fn pre_visit(&mut self, expr: &Expr) -> Result<bool, Self::Error>;

    /// Called after all children are visited. Return `Ok(false)` to cut short the recursion
    /// (skip traversing and return).
    fn post_visit(&mut self, _expr: &Expr) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

/// Walk `expr` depth first, visiting children in the order
/// [`Expr::children`] yields them. Returns `Ok(true)` if every node was
/// visited and `Ok(false)` if a visitor call cut the walk short.
pub fn walk_expr<V: ExprVisitor>(visitor: &mut V, expr: &Expr) -> Result<bool, V::Error> {
    if !visitor.pre_visit(expr)? {
        return Ok(false);
    }

    for child in expr.children() {
        if !walk_expr(visitor, child)? {
            return Ok(false);
        }
    }

    visitor.post_visit(expr)
}
