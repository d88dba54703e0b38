//! Function calls.
//!
//! Calls are parsed generically: any identifier followed by `(` is a call,
//! whether or not the name is a built-in. [`FUNCTIONS`] lists the
//! built-ins so callers can tell function names from metric names when
//! working on raw text.

use crate::ast::{Call, Expr};
use crate::error::ParseError;
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// Built-in PromQL function names.
pub static FUNCTIONS: &[&str] = &[
    // math
    "abs",
    "ceil",
    "floor",
    "exp",
    "sqrt",
    "ln",
    "log2",
    "log10",
    "sgn",
    "deg",
    "rad",
    "pi",
    "acos",
    "acosh",
    "asin",
    "asinh",
    "atan",
    "atanh",
    "cos",
    "cosh",
    "sin",
    "sinh",
    "tan",
    "tanh",
    "round",
    "clamp",
    "clamp_min",
    "clamp_max",
    // sorting
    "sort",
    "sort_desc",
    "sort_by_label",
    "sort_by_label_desc",
    // counters and gauges
    "rate",
    "irate",
    "increase",
    "delta",
    "idelta",
    "deriv",
    "changes",
    "resets",
    "predict_linear",
    "double_exponential_smoothing",
    // over time
    "avg_over_time",
    "sum_over_time",
    "count_over_time",
    "min_over_time",
    "max_over_time",
    "stddev_over_time",
    "stdvar_over_time",
    "last_over_time",
    "present_over_time",
    "absent_over_time",
    "quantile_over_time",
    "mad_over_time",
    // time
    "time",
    "timestamp",
    "hour",
    "minute",
    "month",
    "year",
    "day_of_week",
    "day_of_month",
    "day_of_year",
    "days_in_month",
    // labels and types
    "label_replace",
    "label_join",
    "absent",
    "scalar",
    "vector",
    "info",
    // histograms
    "histogram_quantile",
    "histogram_avg",
    "histogram_count",
    "histogram_sum",
    "histogram_stddev",
    "histogram_stdvar",
    "histogram_fraction",
];

/// Whether `name` is a built-in function.
///
/// ```rust
/// use promql_series::parser::function::is_known_function;
///
/// assert!(is_known_function("rate"));
/// assert!(!is_known_function("http_requests_total"));
/// ```
pub fn is_known_function(name: &str) -> bool {
    FUNCTIONS.contains(&name)
}

impl<'a> Parser<'a> {
    /// `name(arg, ...)` with an optional trailing comma. The name is the
    /// next token.
    pub(crate) fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let name = self.advance().text.to_string();
        self.expect(TokenKind::LeftParen)?;

        let mut args = Vec::new();
        while !self.check(TokenKind::RightParen) {
            args.push(self.parse_expr()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RightParen)?;

        Ok(Expr::Call(Call::new(name, args)))
    }
}
