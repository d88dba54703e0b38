//! Vector and matrix selectors.
//!
//! ```text
//! metric_name
//! metric_name{label_matchers}
//! {label_matchers}
//! {"quoted.metric.name", label_matchers}
//! selector[5m]
//! selector offset 5m @ 1609746000
//! ```
//!
//! Label matchers:
//! - `=`  : equality
//! - `!=` : inequality
//! - `=~` : regex match
//! - `!~` : regex not match

use std::fmt;

#[cfg(feature = "ser")]
use serde::Serialize;

use crate::ast::{Expr, write_quoted};
use crate::error::ParseError;
use crate::lexer::duration::Duration;
use crate::lexer::identifier::{Keyword, is_metric_name};
use crate::lexer::{Literal, TokenKind};
use crate::parser::Parser;

/// The label that holds a series' metric name.
pub const METRIC_NAME_LABEL: &str = "__name__";

/// `@` modifier pinning evaluation to a timestamp.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum AtModifier {
    /// Unix timestamp in milliseconds
    Timestamp(i64),
    /// `@ start()`
    Start,
    /// `@ end()`
    End,
}

impl fmt::Display for AtModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtModifier::Timestamp(ts) => {
                let secs = *ts as f64 / 1000.0;
                write!(f, "@ {:.3}", secs)
            }
            AtModifier::Start => write!(f, "@ start()"),
            AtModifier::End => write!(f, "@ end()"),
        }
    }
}

/// Label matching operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum LabelMatchOp {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `=~`
    RegexMatch,
    /// `!~`
    RegexNotMatch,
}

impl LabelMatchOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelMatchOp::Equal => "=",
            LabelMatchOp::NotEqual => "!=",
            LabelMatchOp::RegexMatch => "=~",
            LabelMatchOp::RegexNotMatch => "!~",
        }
    }

    fn from_token(kind: TokenKind) -> Option<LabelMatchOp> {
        match kind {
            TokenKind::Assign => Some(LabelMatchOp::Equal),
            TokenKind::Neq => Some(LabelMatchOp::NotEqual),
            TokenKind::RegexMatch => Some(LabelMatchOp::RegexMatch),
            TokenKind::RegexNoMatch => Some(LabelMatchOp::RegexNotMatch),
            _ => None,
        }
    }
}

impl fmt::Display for LabelMatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single `label op "value"` constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct LabelMatcher {
    pub name: String,
    pub op: LabelMatchOp,
    pub value: String,
}

impl LabelMatcher {
    pub fn new(name: impl Into<String>, op: LabelMatchOp, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            op,
            value: value.into(),
        }
    }

    /// Whether this matcher accepts a series that lacks the label.
    ///
    /// Regexes are not compiled; only the common empty-matching patterns
    /// are recognised.
    pub fn matches_empty(&self) -> bool {
        match self.op {
            LabelMatchOp::Equal => self.value.is_empty(),
            LabelMatchOp::NotEqual => !self.value.is_empty(),
            LabelMatchOp::RegexMatch => {
                matches!(self.value.as_str(), "" | ".*" | "^$" | "^.*$")
            }
            LabelMatchOp::RegexNotMatch => self.value == ".+",
        }
    }

    /// `__name__="..."` holding a valid metric name.
    fn names_metric(&self) -> bool {
        self.name == METRIC_NAME_LABEL
            && self.op == LabelMatchOp::Equal
            && is_metric_name(&self.value)
    }
}

impl fmt::Display for LabelMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.op)?;
        write_quoted(f, &self.value)
    }
}

/// An instant vector selector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct VectorSelector {
    /// Metric name, absent when the selector is label matchers only
    pub name: Option<String>,
    pub matchers: Vec<LabelMatcher>,
    pub offset: Option<Duration>,
    pub at: Option<AtModifier>,
}

impl VectorSelector {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            matchers: Vec::new(),
            offset: None,
            at: None,
        }
    }

    pub fn with_matchers(matchers: Vec<LabelMatcher>) -> Self {
        Self {
            name: None,
            matchers,
            offset: None,
            at: None,
        }
    }

    /// A selector must not match every series: it needs a name or at least
    /// one matcher that rejects the empty string.
    pub fn has_non_empty_matcher(&self) -> bool {
        self.name.is_some() || self.matchers.iter().any(|m| !m.matches_empty())
    }

    /// Name and matchers, without modifiers.
    fn fmt_base(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // a name that would lex as something else goes inside the braces
        let bare_name = self.name.as_deref().filter(|name| prints_bare(name));
        let quoted_name = match bare_name {
            Some(_) => None,
            None => self.name.as_deref(),
        };

        if let Some(name) = bare_name {
            write!(f, "{}", name)?;
        }
        if quoted_name.is_some() || !self.matchers.is_empty() || self.name.is_none() {
            write!(f, "{{")?;
            let mut first = true;
            if let Some(name) = quoted_name {
                write_quoted(f, name)?;
                first = false;
            }
            for m in &self.matchers {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}", m)?;
                first = false;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}

/// Names that re-parse as a selector when printed without quotes.
fn prints_bare(name: &str) -> bool {
    let is_keyword_operator = ["and", "or", "unless", "atan2"]
        .iter()
        .any(|kw| kw.eq_ignore_ascii_case(name));
    let is_number = matches!(Keyword::lookup(name), Some(Keyword::Inf | Keyword::NaN));
    is_metric_name(name) && !is_keyword_operator && !is_number
}

fn fmt_modifiers(
    f: &mut fmt::Formatter<'_>,
    at: Option<&AtModifier>,
    offset: Option<&Duration>,
) -> fmt::Result {
    if let Some(at) = at {
        write!(f, " {}", at)?;
    }
    if let Some(offset) = offset {
        write!(f, " offset {}", offset)?;
    }
    Ok(())
}

impl fmt::Display for VectorSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_base(f)?;
        fmt_modifiers(f, self.at.as_ref(), self.offset.as_ref())
    }
}

/// A range vector selector: a vector selector with a `[range]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct MatrixSelector {
    pub selector: VectorSelector,
    pub range: Duration,
}

impl MatrixSelector {
    pub fn new(selector: VectorSelector, range: Duration) -> Self {
        Self { selector, range }
    }

    pub fn name(&self) -> Option<&str> {
        self.selector.name.as_deref()
    }
}

impl fmt::Display for MatrixSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.selector.fmt_base(f)?;
        write!(f, "[{}]", self.range)?;
        fmt_modifiers(f, self.selector.at.as_ref(), self.selector.offset.as_ref())
    }
}

impl<'a> Parser<'a> {
    /// Parse the rest of a selector. `name` is the already consumed metric
    /// name; without it the next token must be `{`.
    pub(crate) fn parse_selector(&mut self, name: Option<String>) -> Result<Expr, ParseError> {
        let start = self.peek().pos;
        let mut selector = VectorSelector {
            name,
            matchers: Vec::new(),
            offset: None,
            at: None,
        };

        if selector.name.is_none() || self.check(TokenKind::LeftBrace) {
            selector.matchers = self.parse_label_matchers()?;
        }

        if let Some(index) = selector.matchers.iter().position(LabelMatcher::names_metric) {
            if selector.name.is_some() {
                return Err(ParseError::unexpected(
                    start,
                    "a single metric name",
                    "metric name given twice",
                ));
            }
            selector.name = Some(selector.matchers.remove(index).value);
        }

        if !selector.has_non_empty_matcher() {
            return Err(ParseError::unexpected(
                start,
                "a label matcher that does not match the empty string",
                "a selector matching every series",
            ));
        }

        let range = if self.looks_like_range() {
            self.advance();
            let range = self.parse_duration()?;
            self.expect(TokenKind::RightBracket)?;
            Some(range)
        } else {
            None
        };

        let (at, offset) = self.parse_modifiers()?;
        selector.at = at;
        selector.offset = offset;

        Ok(match range {
            Some(range) => Expr::MatrixSelector(MatrixSelector::new(selector, range)),
            None => Expr::VectorSelector(selector),
        })
    }

    /// `[<duration>]`, as opposed to a subquery's `[<duration>:`.
    fn looks_like_range(&self) -> bool {
        self.check(TokenKind::LeftBracket)
            && self.peek_nth(1).kind == TokenKind::Duration
            && self.peek_nth(2).kind == TokenKind::RightBracket
    }

    /// `{matcher, ...}` with an optional trailing comma.
    fn parse_label_matchers(&mut self) -> Result<Vec<LabelMatcher>, ParseError> {
        self.expect(TokenKind::LeftBrace)?;
        let mut matchers = Vec::new();
        while !self.check(TokenKind::RightBrace) {
            matchers.push(self.parse_label_matcher()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        if !self.check(TokenKind::RightBrace) {
            return Err(self.unexpected("\",\" or \"}\""));
        }
        self.advance();
        Ok(matchers)
    }

    /// `label op "value"`, or a lone quoted metric name.
    fn parse_label_matcher(&mut self) -> Result<LabelMatcher, ParseError> {
        if self.check(TokenKind::String) {
            let value = self.parse_string()?;
            return Ok(LabelMatcher::new(METRIC_NAME_LABEL, LabelMatchOp::Equal, value));
        }

        let name = self.parse_label_name()?;
        let Some(op) = LabelMatchOp::from_token(self.peek_kind()) else {
            return Err(self.unexpected("label matching operator"));
        };
        self.advance();
        let value = self.parse_string()?;
        Ok(LabelMatcher::new(name, op, value))
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        if !self.check(TokenKind::String) {
            return Err(self.unexpected("string"));
        }
        match self.advance().value {
            Literal::String(s) => Ok(s),
            _ => Err(self.unexpected("string")),
        }
    }

    pub(crate) fn parse_duration(&mut self) -> Result<Duration, ParseError> {
        if !self.check(TokenKind::Duration) {
            return Err(self.unexpected("duration"));
        }
        match self.advance().value {
            Literal::Duration(d) => Ok(d),
            _ => Err(self.unexpected("duration")),
        }
    }

    /// `offset` and `@` modifiers, in either order, each at most once.
    pub(crate) fn parse_modifiers(
        &mut self,
    ) -> Result<(Option<AtModifier>, Option<Duration>), ParseError> {
        let mut at = None;
        let mut offset = None;

        loop {
            if self.check_keyword(Keyword::Offset) {
                if offset.is_some() {
                    return Err(self.unexpected("a single offset modifier"));
                }
                self.advance();
                offset = Some(self.parse_offset()?);
            } else if self.check(TokenKind::At) {
                if at.is_some() {
                    return Err(self.unexpected("a single @ modifier"));
                }
                self.advance();
                at = Some(self.parse_at()?);
            } else {
                return Ok((at, offset));
            }
        }
    }

    /// `[+|-]<duration>` after `offset`.
    fn parse_offset(&mut self) -> Result<Duration, ParseError> {
        let negative = self.eat(TokenKind::Sub);
        if !negative {
            self.eat(TokenKind::Add);
        }
        let d = self.parse_duration()?;
        Ok(if negative { d.negate() } else { d })
    }

    /// `<timestamp>`, `start()` or `end()` after `@`.
    fn parse_at(&mut self) -> Result<AtModifier, ParseError> {
        let token = self.peek();
        if token.kind == TokenKind::Identifier
            && self.peek_nth(1).kind == TokenKind::LeftParen
            && self.peek_nth(2).kind == TokenKind::RightParen
        {
            let at = if Keyword::Start.matches(token.text) {
                Some(AtModifier::Start)
            } else if Keyword::End.matches(token.text) {
                Some(AtModifier::End)
            } else {
                None
            };
            if let Some(at) = at {
                self.advance();
                self.advance();
                self.advance();
                return Ok(at);
            }
        }

        let negative = self.eat(TokenKind::Sub);
        if !negative {
            self.eat(TokenKind::Add);
        }
        let token = self.peek();
        let secs = match (token.kind, &token.value) {
            (TokenKind::Number, Literal::Number(n)) if n.is_finite() => *n,
            _ => return Err(self.unexpected("timestamp, start() or end()")),
        };
        self.advance();

        let secs = if negative { -secs } else { secs };
        Ok(AtModifier::Timestamp((secs * 1000.0).round() as i64))
    }
}
