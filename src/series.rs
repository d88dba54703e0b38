//! Metric series extraction.
//!
//! Walks a parsed expression and collects the metric name of every vector
//! selector it reaches, including the selector inside each matrix
//! selector. The result is sorted and free of duplicates.
//!
//! ```rust
//! use promql_series::{extract_series, parse};
//!
//! let expr = parse("rate(a[5m]) / rate(b[5m]) + a").unwrap();
//! assert_eq!(extract_series(&expr), vec!["a", "b"]);
//! ```

use std::collections::BTreeSet;
use std::convert::Infallible;

use tracing::{debug, trace};

use crate::ast::Expr;
use crate::parser::parse;
use crate::parser::selector::VectorSelector;
use crate::visitor::{ExprVisitor, walk_expr};

/// Visitor accumulating metric names into an ordered set.
///
/// Selectors without a name (`{job="api"}`) contribute nothing.
#[derive(Debug, Default, Clone)]
pub struct SeriesCollector {
    series: BTreeSet<String>,
}

impl SeriesCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, selector: &VectorSelector) {
        if let Some(name) = &selector.name
            && self.series.insert(name.clone())
        {
            trace!(series = %name, "found series");
        }
    }

    /// Names collected so far, in ascending order.
    pub fn into_series(self) -> Vec<String> {
        self.series.into_iter().collect()
    }
}

impl ExprVisitor for SeriesCollector {
    type Error = Infallible;

    fn pre_visit(&mut self, expr: &Expr) -> Result<bool, Self::Error> {
        match expr {
            Expr::VectorSelector(selector) => self.record(selector),
            Expr::MatrixSelector(matrix) => self.record(&matrix.selector),
            Expr::Number(_)
            | Expr::String(_)
            | Expr::Call(_)
            | Expr::Aggregation(_)
            | Expr::Binary(_)
            | Expr::Unary(_)
            | Expr::Paren(_)
            | Expr::Subquery(_) => {}
        }
        Ok(true)
    }
}

/// Sorted, deduplicated metric names referenced anywhere in `expr`.
pub fn extract_series(expr: &Expr) -> Vec<String> {
    let mut collector = SeriesCollector::new();
    let Ok(_) = walk_expr(&mut collector, expr);
    collector.into_series()
}

/// Parse `query` and extract its series.
///
/// A query that does not parse yields an empty list; the error is logged
/// at debug level. Callers wanting a best-effort answer for such queries
/// can use [`extract_series_fallback`](crate::extract_series_fallback).
pub fn extract_series_from_query(query: &str) -> Vec<String> {
    match parse(query) {
        Ok(expr) => extract_series(&expr),
        Err(err) => {
            debug!(%err, query, "query did not parse, no series extracted");
            Vec::new()
        }
    }
}
