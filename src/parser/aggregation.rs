//! Aggregation expressions and their grouping clauses.
//!
//! ```text
//! sum(http_requests)
//! sum by (job) (http_requests)
//! sum(http_requests) without (instance)
//! topk(5, http_requests)
//! count_values("version", build_info)
//! ```
//!
//! The grouping clause may come before or after the parenthesized
//! arguments, but not both.

use std::fmt;

#[cfg(feature = "ser")]
use serde::Serialize;

use crate::ast::{AggregateOp, Aggregation, Expr, write_labels};
use crate::error::ParseError;
use crate::lexer::TokenKind;
use crate::lexer::identifier::Keyword;
use crate::parser::Parser;

/// The action for aggregation grouping: `by` or `without`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum GroupingAction {
    /// Keep only the listed labels.
    By,
    /// Keep every label except the listed ones.
    Without,
}

impl fmt::Display for GroupingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingAction::By => write!(f, "by"),
            GroupingAction::Without => write!(f, "without"),
        }
    }
}

/// Grouping clause for aggregation expressions.
///
/// ```rust
/// use promql_series::parser::aggregation::{Grouping, GroupingAction};
///
/// let g = Grouping {
///     action: GroupingAction::By,
///     labels: vec!["job".to_string(), "instance".to_string()],
/// };
/// assert_eq!(g.to_string(), "by (job, instance)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct Grouping {
    pub action: GroupingAction,
    pub labels: Vec<String>,
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.action)?;
        write_labels(f, &self.labels)
    }
}

impl<'a> Parser<'a> {
    /// Parse an aggregation whose operator keyword is the next token.
    pub(crate) fn parse_aggregation(&mut self, op: AggregateOp) -> Result<Expr, ParseError> {
        self.advance();

        let grouping_before = self.parse_grouping()?;

        self.expect(TokenKind::LeftParen)?;
        let param = if op.takes_param() {
            let param = self.parse_expr()?;
            self.expect(TokenKind::Comma)?;
            Some(param)
        } else {
            None
        };
        let expr = self.parse_expr()?;
        self.expect(TokenKind::RightParen)?;

        let grouping = match grouping_before {
            Some(grouping) => Some(grouping),
            None => self.parse_grouping()?,
        };

        Ok(Expr::Aggregation(Box::new(Aggregation {
            op,
            expr,
            param,
            grouping,
        })))
    }

    /// `by (...)` or `without (...)`, if the next token starts one.
    fn parse_grouping(&mut self) -> Result<Option<Grouping>, ParseError> {
        let action = if self.check_keyword(Keyword::By) {
            GroupingAction::By
        } else if self.check_keyword(Keyword::Without) {
            GroupingAction::Without
        } else {
            return Ok(None);
        };
        self.advance();

        let labels = self.parse_label_list()?;
        Ok(Some(Grouping { action, labels }))
    }
}
