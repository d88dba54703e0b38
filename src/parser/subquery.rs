//! Subquery suffixes.
//!
//! A subquery evaluates an instant expression over a range at a fixed
//! resolution:
//!
//! ```text
//! <expr>[<range>:<step>]
//! <expr>[<range>:]
//! <expr>[<range>:<step>] offset 5m @ end()
//! ```
//!
//! An omitted step means the evaluation interval.

use crate::ast::{Expr, SubqueryExpr};
use crate::error::ParseError;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// Wrap `expr` in the subquery whose `[` is the next token.
    pub(crate) fn parse_subquery(&mut self, expr: Expr) -> Result<Expr, ParseError> {
        self.expect(TokenKind::LeftBracket)?;
        let range = self.parse_duration()?;
        self.expect(TokenKind::Colon)?;
        let step = if self.check(TokenKind::Duration) {
            Some(self.parse_duration()?)
        } else {
            None
        };
        self.expect(TokenKind::RightBracket)?;

        let (at, offset) = self.parse_modifiers()?;
        let mut subquery = SubqueryExpr::new(expr, range, step);
        subquery.at = at;
        subquery.offset = offset;
        Ok(Expr::Subquery(Box::new(subquery)))
    }
}
