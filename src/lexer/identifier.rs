//! Identifiers and contextual keywords.
//!
//! - **Metric names**: `[a-zA-Z_:][a-zA-Z0-9_:]*` (colons appear in
//!   recording rule names such as `job:requests:rate5m`)
//! - **Label names**: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! Apart from the set operators, PromQL keywords are only keywords in
//! the position where the grammar expects them: `sum` is a metric name
//! unless it is followed by `(` or a grouping clause, and `offset` is a
//! perfectly good label name. The lexer therefore emits them as plain
//! identifiers and the parser asks [`Keyword::lookup`] when it needs to.

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while_m_n},
    combinator::recognize,
    sequence::pair,
};

#[inline]
pub fn is_metric_start(c: char) -> bool {
    c == '_' || c == ':' || c.is_ascii_alphabetic()
}

#[inline]
pub fn is_metric_char(c: char) -> bool {
    c == '_' || c == ':' || c.is_ascii_alphanumeric()
}

#[inline]
pub fn is_label_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

#[inline]
pub fn is_label_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Parse a metric name: `[a-zA-Z_:][a-zA-Z0-9_:]*`
///
/// ```
/// use promql_series::lexer::identifier::metric_name;
///
/// let (rest, name) = metric_name("job:http_requests:rate5m{").unwrap();
/// assert_eq!(name, "job:http_requests:rate5m");
/// assert_eq!(rest, "{");
/// ```
pub fn metric_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while_m_n(1, 1, is_metric_start),
        take_while(is_metric_char),
    ))
    .parse(input)
}

/// Parse a label name: `[a-zA-Z_][a-zA-Z0-9_]*`
pub fn label_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while_m_n(1, 1, is_label_start),
        take_while(is_label_char),
    ))
    .parse(input)
}

/// Whether `s` as a whole is a valid metric name.
pub fn is_metric_name(s: &str) -> bool {
    matches!(metric_name(s), Ok(("", _)))
}

/// Whether `s` as a whole is a valid label name.
pub fn is_label_name(s: &str) -> bool {
    matches!(label_name(s), Ok(("", _)))
}

/// Words the parser treats specially in particular grammar positions.
///
/// Aggregation operators are looked up separately through
/// [`AggregateOp::from_name`](crate::ast::AggregateOp::from_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // grouping clauses
    By,
    Without,
    // vector matching
    On,
    Ignoring,
    GroupLeft,
    GroupRight,
    Bool,
    // selector modifiers
    Offset,
    Start,
    End,
    // number literals
    Inf,
    NaN,
}

impl Keyword {
    const ALL: [Keyword; 12] = [
        Keyword::By,
        Keyword::Without,
        Keyword::On,
        Keyword::Ignoring,
        Keyword::GroupLeft,
        Keyword::GroupRight,
        Keyword::Bool,
        Keyword::Offset,
        Keyword::Start,
        Keyword::End,
        Keyword::Inf,
        Keyword::NaN,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::By => "by",
            Keyword::Without => "without",
            Keyword::On => "on",
            Keyword::Ignoring => "ignoring",
            Keyword::GroupLeft => "group_left",
            Keyword::GroupRight => "group_right",
            Keyword::Bool => "bool",
            Keyword::Offset => "offset",
            Keyword::Start => "start",
            Keyword::End => "end",
            Keyword::Inf => "inf",
            Keyword::NaN => "nan",
        }
    }

    /// Case-insensitive lookup.
    pub fn lookup(word: &str) -> Option<Keyword> {
        Self::ALL
            .into_iter()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(word))
    }

    /// Whether `word` spells this keyword, ignoring case.
    pub fn matches(&self, word: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(word)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
