//! Expression grammar.
//!
//! Binary operators are handled by precedence climbing; everything else is
//! plain recursive descent over the token stream.
//!
//! ```text
//! expr          = unary_expr (binary_op modifier? expr)*
//! unary_expr    = ("+" | "-") unary_operand | postfix_expr
//! postfix_expr  = primary_expr subquery*
//! primary_expr  = number | string | selector | paren_expr | call | aggregation
//! paren_expr    = "(" expr ")"
//! ```

use crate::ast::{AggregateOp, BinaryExpr, Expr};
use crate::error::ParseError;
use crate::lexer::identifier::Keyword;
use crate::lexer::{Literal, TokenKind};
use crate::parser::Parser;
use crate::parser::binary::binary_op;

impl<'a> Parser<'a> {
    /// Parse an expression, stopping at the first token that cannot
    /// continue it.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_expr(0)
    }

    /// Precedence climbing. Only operators binding at least as tightly as
    /// `min_precedence` are folded into the result.
    ///
    /// Every recursive path of the grammar passes through here, so this is
    /// where nesting depth is counted. Each fold of `lhs` counts as one
    /// more level.
    pub(crate) fn parse_binary_expr(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        self.nested(|p| {
            let mut lhs = p.parse_unary_expr()?;

            while let Some(op) = binary_op(p.peek_kind()) {
                let precedence = op.precedence();
                if precedence < min_precedence {
                    break;
                }
                p.deepen()?;
                p.advance();

                let modifier = p.parse_binary_modifier(op)?;
                let next_min = if op.is_right_associative() {
                    precedence
                } else {
                    precedence + 1
                };
                let rhs = p.parse_binary_expr(next_min)?;

                lhs = Expr::Binary(Box::new(BinaryExpr {
                    op,
                    lhs,
                    rhs,
                    modifier,
                }));
            }

            Ok(lhs)
        })
    }

    /// A primary expression followed by any number of subquery suffixes.
    pub(crate) fn parse_postfix_expr(&mut self) -> Result<Expr, ParseError> {
        let depth = self.depth;
        let result = self.parse_subquery_chain();
        self.depth = depth;
        result
    }

    fn parse_subquery_chain(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary_expr()?;
        while self.check(TokenKind::LeftBracket) {
            self.deepen()?;
            expr = self.parse_subquery(expr)?;
        }
        Ok(expr)
    }

    fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        match self.peek_kind() {
            TokenKind::LeftParen => self.parse_paren_expr(),
            TokenKind::Number => {
                let token = self.advance();
                match token.value {
                    Literal::Number(n) => Ok(Expr::Number(n)),
                    _ => Err(ParseError::unexpected(token.pos, "number", token.describe())),
                }
            }
            TokenKind::String => {
                let token = self.advance();
                match token.value {
                    Literal::String(s) => Ok(Expr::String(s)),
                    _ => Err(ParseError::unexpected(token.pos, "string", token.describe())),
                }
            }
            TokenKind::LeftBrace => self.parse_selector(None),
            TokenKind::Identifier => self.parse_identifier_expr(),
            _ => Err(self.unexpected("expression")),
        }
    }

    fn parse_paren_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect(TokenKind::LeftParen)?;
        let inner = self.parse_expr()?;
        self.expect(TokenKind::RightParen)?;
        Ok(Expr::Paren(Box::new(inner)))
    }

    /// An expression starting with an identifier:
    /// - aggregation: `sum(...)`, `avg by (job) (...)`
    /// - number keyword: `Inf`, `NaN`
    /// - function call: `rate(...)`
    /// - vector or matrix selector: `metric`, `metric{job="x"}[5m]`
    fn parse_identifier_expr(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek().clone();
        let next = self.peek_nth(1);
        let next_kind = next.kind;
        let next_opens_grouping = next_kind == TokenKind::Identifier
            && (Keyword::By.matches(next.text) || Keyword::Without.matches(next.text));

        if let Some(op) = AggregateOp::from_name(token.text)
            && (next_kind == TokenKind::LeftParen || next_opens_grouping)
        {
            return self.parse_aggregation(op);
        }

        if !matches!(next_kind, TokenKind::LeftParen | TokenKind::LeftBrace) {
            match Keyword::lookup(token.text) {
                Some(Keyword::Inf) => {
                    self.advance();
                    return Ok(Expr::Number(f64::INFINITY));
                }
                Some(Keyword::NaN) => {
                    self.advance();
                    return Ok(Expr::Number(f64::NAN));
                }
                _ => {}
            }
        }

        if next_kind == TokenKind::LeftParen {
            return self.parse_call();
        }

        self.advance();
        self.parse_selector(Some(token.text.to_string()))
    }
}
