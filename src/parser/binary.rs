//! Binary operators and their modifiers.
//!
//! ```text
//! a + b
//! a > bool 5
//! a / on (job) b
//! a * ignoring (instance) group_left (version) b
//! ```
//!
//! Modifiers sit between the operator and the right-hand side:
//! `bool`, then `on (...)` or `ignoring (...)`, then optionally
//! `group_left` or `group_right` with their own label list.

use crate::ast::{
    BinaryModifier, BinaryOp, GroupModifier, GroupSide, VectorMatching, VectorMatchingOp,
};
use crate::error::ParseError;
use crate::lexer::identifier::{Keyword, is_label_name};
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// The binary operator a token spells, if any.
pub fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Add => BinaryOp::Add,
        TokenKind::Sub => BinaryOp::Sub,
        TokenKind::Mul => BinaryOp::Mul,
        TokenKind::Div => BinaryOp::Div,
        TokenKind::Mod => BinaryOp::Mod,
        TokenKind::Pow => BinaryOp::Pow,
        TokenKind::Atan2 => BinaryOp::Atan2,
        TokenKind::Eql => BinaryOp::Eq,
        TokenKind::Neq => BinaryOp::Ne,
        TokenKind::Lss => BinaryOp::Lt,
        TokenKind::Lte => BinaryOp::Le,
        TokenKind::Gtr => BinaryOp::Gt,
        TokenKind::Gte => BinaryOp::Ge,
        TokenKind::And => BinaryOp::And,
        TokenKind::Or => BinaryOp::Or,
        TokenKind::Unless => BinaryOp::Unless,
        _ => return None,
    };
    Some(op)
}

impl<'a> Parser<'a> {
    /// Parse whatever modifiers follow `op`. `None` when there are none.
    pub(crate) fn parse_binary_modifier(
        &mut self,
        op: BinaryOp,
    ) -> Result<Option<BinaryModifier>, ParseError> {
        let mut modifier = BinaryModifier::default();

        if self.check_keyword(Keyword::Bool) {
            if !op.is_comparison() {
                return Err(self.unexpected(format!("expression after \"{}\"", op)));
            }
            self.advance();
            modifier.return_bool = true;
        }

        let matching_op = if self.check_keyword(Keyword::On) {
            Some(VectorMatchingOp::On)
        } else if self.check_keyword(Keyword::Ignoring) {
            Some(VectorMatchingOp::Ignoring)
        } else {
            None
        };

        // `on` without a label list is a metric called "on"
        if let Some(matching_op) = matching_op
            && self.peek_nth(1).kind == TokenKind::LeftParen
        {
            self.advance();
            let labels = self.parse_label_list()?;
            let group = self.parse_group_modifier(op)?;
            modifier.matching = Some(VectorMatching {
                op: matching_op,
                labels,
                group,
            });
        }

        Ok((!modifier.is_empty()).then_some(modifier))
    }

    fn parse_group_modifier(&mut self, op: BinaryOp) -> Result<Option<GroupModifier>, ParseError> {
        let side = if self.check_keyword(Keyword::GroupLeft) {
            GroupSide::Left
        } else if self.check_keyword(Keyword::GroupRight) {
            GroupSide::Right
        } else {
            return Ok(None);
        };
        if op.is_set_operator() {
            return Err(self.unexpected(format!("expression after \"{}\"", op)));
        }
        self.advance();

        let labels = if self.check(TokenKind::LeftParen) {
            self.parse_label_list()?
        } else {
            Vec::new()
        };
        Ok(Some(GroupModifier { side, labels }))
    }

    /// `(label, ...)` with an optional trailing comma. Used by grouping
    /// clauses and vector matching.
    pub(crate) fn parse_label_list(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(TokenKind::LeftParen)?;
        let mut labels = Vec::new();
        while !self.check(TokenKind::RightParen) {
            labels.push(self.parse_label_name()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RightParen)?;
        Ok(labels)
    }

    /// A label name. `and`, `or`, `unless` and `atan2` lex as operators but
    /// are valid label names.
    pub(crate) fn parse_label_name(&mut self) -> Result<String, ParseError> {
        let token = self.peek();
        let is_label = match token.kind {
            TokenKind::Identifier => is_label_name(token.text),
            kind => kind.is_keyword_operator(),
        };
        if !is_label {
            return Err(self.unexpected("label name"));
        }
        Ok(self.advance().text.to_string())
    }
}
