//! Unary expression parsing for PromQL
//!
//! - `-expr` - Negation
//! - `+expr` - No-op (identity)
//!
//! Unary operators bind tighter than every binary operator except `^`, so
//! `-2 ^ 2` is `-(2 ^ 2)` while `-a * b` is `(-a) * b`.

use crate::ast::{BinaryOp, Expr, UnaryExpr, UnaryOp};
use crate::error::ParseError;
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// The unary operator a token spells, if any.
pub fn unary_op(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Sub => Some(UnaryOp::Minus),
        TokenKind::Add => Some(UnaryOp::Plus),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn parse_unary_expr(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = unary_op(self.peek_kind()) else {
            return self.parse_postfix_expr();
        };
        self.advance();

        // the operand keeps any `^` chain, and chained signs recurse
        let expr = self.parse_binary_expr(BinaryOp::Pow.precedence())?;
        Ok(Expr::Unary(Box::new(UnaryExpr { op, expr })))
    }
}
