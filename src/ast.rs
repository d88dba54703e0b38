//! AST type definitions for PromQL expressions.
//!
//! [`Expr`] is a closed set of node variants. Selector types live in
//! [`parser::selector`](crate::parser::selector) and the grouping clause in
//! [`parser::aggregation`](crate::parser::aggregation), next to the code that
//! parses them.
//!
//! Every node implements `Display`, printing PromQL that parses back to the
//! same tree.

use std::fmt;

#[cfg(feature = "ser")]
use serde::Serialize;

use crate::lexer::duration::Duration;
use crate::parser::aggregation::Grouping;
use crate::parser::selector::{AtModifier, MatrixSelector, VectorSelector};

/// Root expression type for PromQL AST
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum Expr {
    /// Numeric literal: `42`, `2.5`, `0x1F`, `1e-10`, `Inf`, `NaN`
    Number(f64),

    /// String literal: `"hello"`, `'world'`, `` `raw` ``
    String(String),

    /// Instant vector selector: `http_requests{job="api"}`
    VectorSelector(VectorSelector),

    /// Range vector selector: `http_requests{job="api"}[5m]`
    MatrixSelector(MatrixSelector),

    /// Function call: `rate(http_requests[5m])`
    Call(Call),

    /// Aggregation: `sum by (job) (http_requests)`
    Aggregation(Box<Aggregation>),

    /// Binary operation: `foo + bar`, `foo / on(job) bar`
    Binary(Box<BinaryExpr>),

    /// Unary operation: `-foo`, `+bar`
    Unary(Box<UnaryExpr>),

    /// Parenthesized: `(foo + bar)`
    Paren(Box<Expr>),

    /// Subquery: `rate(http_requests[5m])[30m:1m]`
    Subquery(Box<SubqueryExpr>),
}

impl Expr {
    /// Direct sub-expressions, left to right.
    ///
    /// Selectors and literals have none; a matrix selector's vector selector
    /// is not an `Expr` and is reached through the node itself.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Number(_)
            | Expr::String(_)
            | Expr::VectorSelector(_)
            | Expr::MatrixSelector(_) => Vec::new(),
            Expr::Call(call) => call.args.iter().collect(),
            Expr::Aggregation(agg) => agg.param.iter().chain(Some(&agg.expr)).collect(),
            Expr::Binary(bin) => vec![&bin.lhs, &bin.rhs],
            Expr::Unary(unary) => vec![&unary.expr],
            Expr::Paren(inner) => vec![inner.as_ref()],
            Expr::Subquery(sub) => vec![&sub.expr],
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "Inf")
                    } else {
                        write!(f, "-Inf")
                    }
                } else {
                    write!(f, "{}", n)
                }
            }
            Expr::String(s) => write_quoted(f, s),
            Expr::VectorSelector(v) => write!(f, "{}", v),
            Expr::MatrixSelector(m) => write!(f, "{}", m),
            Expr::Call(c) => write!(f, "{}", c),
            Expr::Aggregation(a) => write!(f, "{}", a),
            Expr::Binary(b) => write!(f, "{}", b),
            Expr::Unary(u) => write!(f, "{}", u),
            Expr::Paren(e) => write!(f, "({})", e),
            Expr::Subquery(s) => write!(f, "{}", s),
        }
    }
}

/// Write `s` as a double-quoted PromQL string literal.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

/// Write a comma-separated label list in parentheses: `(a, b)`
pub(crate) fn write_labels(f: &mut fmt::Formatter<'_>, labels: &[String]) -> fmt::Result {
    write!(f, "(")?;
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", label)?;
    }
    write!(f, ")")
}

/// Function call expression
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct Call {
    pub name: String,
    pub args: Vec<Expr>,
}

impl Call {
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

/// Aggregation operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
#[cfg_attr(feature = "ser", serde(rename_all = "snake_case"))]
pub enum AggregateOp {
    Sum,
    Min,
    Max,
    Avg,
    Count,
    Stddev,
    Stdvar,
    CountValues,
    Group,
    Topk,
    Bottomk,
    Quantile,
}

impl AggregateOp {
    pub const ALL: [AggregateOp; 12] = [
        AggregateOp::Sum,
        AggregateOp::Min,
        AggregateOp::Max,
        AggregateOp::Avg,
        AggregateOp::Count,
        AggregateOp::Stddev,
        AggregateOp::Stdvar,
        AggregateOp::CountValues,
        AggregateOp::Group,
        AggregateOp::Topk,
        AggregateOp::Bottomk,
        AggregateOp::Quantile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateOp::Sum => "sum",
            AggregateOp::Min => "min",
            AggregateOp::Max => "max",
            AggregateOp::Avg => "avg",
            AggregateOp::Count => "count",
            AggregateOp::Stddev => "stddev",
            AggregateOp::Stdvar => "stdvar",
            AggregateOp::CountValues => "count_values",
            AggregateOp::Group => "group",
            AggregateOp::Topk => "topk",
            AggregateOp::Bottomk => "bottomk",
            AggregateOp::Quantile => "quantile",
        }
    }

    /// Case-insensitive lookup by keyword.
    pub fn from_name(name: &str) -> Option<AggregateOp> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(name))
    }

    /// `topk`, `bottomk`, `quantile` and `count_values` take a leading parameter.
    pub fn takes_param(&self) -> bool {
        matches!(
            self,
            AggregateOp::Topk | AggregateOp::Bottomk | AggregateOp::Quantile | AggregateOp::CountValues
        )
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregation expression
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct Aggregation {
    pub op: AggregateOp,
    /// The expression to aggregate
    pub expr: Expr,
    /// Parameter for parametric aggregations (topk, quantile, etc.)
    pub param: Option<Expr>,
    pub grouping: Option<Grouping>,
}

impl Aggregation {
    pub fn new(op: AggregateOp, expr: Expr) -> Self {
        Self {
            op,
            expr,
            param: None,
            grouping: None,
        }
    }

    pub fn with_param(op: AggregateOp, param: Expr, expr: Expr) -> Self {
        Self {
            op,
            expr,
            param: Some(param),
            grouping: None,
        }
    }

    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = Some(grouping);
        self
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.op)?;
        if let Some(ref grouping) = self.grouping {
            write!(f, " {} ", grouping)?;
        }
        write!(f, "(")?;
        if let Some(ref param) = self.param {
            write!(f, "{}, ", param)?;
        }
        write!(f, "{})", self.expr)
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,   // +
    Sub,   // -
    Mul,   // *
    Div,   // /
    Mod,   // %
    Pow,   // ^
    Atan2, // atan2

    // Comparison
    Eq, // ==
    Ne, // !=
    Lt, // <
    Le, // <=
    Gt, // >
    Ge, // >=

    // Set operations
    And,    // and
    Or,     // or
    Unless, // unless
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "^",
            BinaryOp::Atan2 => "atan2",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Unless => "unless",
        }
    }

    /// Binding strength, higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And | BinaryOp::Unless => 2,
            BinaryOp::Eq
            | BinaryOp::Ne
            | BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge => 3,
            BinaryOp::Add | BinaryOp::Sub => 4,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod | BinaryOp::Atan2 => 5,
            BinaryOp::Pow => 6,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(self, BinaryOp::Pow)
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
        )
    }

    pub fn is_set_operator(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or | BinaryOp::Unless)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Vector matching for binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum VectorMatchingOp {
    On,       // on (label1, label2)
    Ignoring, // ignoring (label1, label2)
}

impl fmt::Display for VectorMatchingOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorMatchingOp::On => write!(f, "on"),
            VectorMatchingOp::Ignoring => write!(f, "ignoring"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum GroupSide {
    Left,  // group_left
    Right, // group_right
}

impl fmt::Display for GroupSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupSide::Left => write!(f, "group_left"),
            GroupSide::Right => write!(f, "group_right"),
        }
    }
}

/// Group modifier for many-to-one/one-to-many matching
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct GroupModifier {
    pub side: GroupSide,
    /// Extra labels copied from the "one" side
    pub labels: Vec<String>,
}

impl fmt::Display for GroupModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.side)?;
        if !self.labels.is_empty() {
            write!(f, " ")?;
            write_labels(f, &self.labels)?;
        }
        Ok(())
    }
}

/// `on (...)` / `ignoring (...)` with an optional group modifier
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct VectorMatching {
    pub op: VectorMatchingOp,
    pub labels: Vec<String>,
    pub group: Option<GroupModifier>,
}

impl fmt::Display for VectorMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.op)?;
        write_labels(f, &self.labels)?;
        if let Some(ref group) = self.group {
            write!(f, " {}", group)?;
        }
        Ok(())
    }
}

/// Modifier for binary operations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct BinaryModifier {
    /// Return 0/1 instead of filtering (comparisons only)
    pub return_bool: bool,
    pub matching: Option<VectorMatching>,
}

impl BinaryModifier {
    pub fn is_empty(&self) -> bool {
        !self.return_bool && self.matching.is_none()
    }
}

impl fmt::Display for BinaryModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.return_bool {
            write!(f, "bool")?;
            if self.matching.is_some() {
                write!(f, " ")?;
            }
        }
        if let Some(ref matching) = self.matching {
            write!(f, "{}", matching)?;
        }
        Ok(())
    }
}

/// Binary expression
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub lhs: Expr,
    pub rhs: Expr,
    pub modifier: Option<BinaryModifier>,
}

impl BinaryExpr {
    pub fn new(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self {
            op,
            lhs,
            rhs,
            modifier: None,
        }
    }
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lhs, self.op)?;
        if let Some(ref modifier) = self.modifier
            && !modifier.is_empty()
        {
            write!(f, " {}", modifier)?;
        }
        write!(f, " {}", self.rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unary expression
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: Expr,
}

impl UnaryExpr {
    pub fn new(op: UnaryOp, expr: Expr) -> Self {
        Self { op, expr }
    }
}

impl fmt::Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.expr)
    }
}

/// Subquery expression
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct SubqueryExpr {
    pub expr: Expr,
    pub range: Duration,
    /// Resolution; the evaluation interval when absent
    pub step: Option<Duration>,
    pub offset: Option<Duration>,
    pub at: Option<AtModifier>,
}

impl SubqueryExpr {
    pub fn new(expr: Expr, range: Duration, step: Option<Duration>) -> Self {
        Self {
            expr,
            range,
            step,
            offset: None,
            at: None,
        }
    }
}

impl fmt::Display for SubqueryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}:", self.expr, self.range)?;
        if let Some(ref step) = self.step {
            write!(f, "{}", step)?;
        }
        write!(f, "]")?;
        if let Some(ref at) = self.at {
            write!(f, " {}", at)?;
        }
        if let Some(ref offset) = self.offset {
            write!(f, " offset {}", offset)?;
        }
        Ok(())
    }
}
