//! # PromQL Series
//!
//! Find the metric series a Prometheus Query Language (PromQL) query reads,
//! without running it.
//!
//! The query is tokenized, parsed into an Abstract Syntax Tree (AST) with a
//! precedence-climbing parser, and the tree is walked to collect the name of
//! every vector selector. The result is sorted and deduplicated.
//!
//! ## Quick Start
//!
//! ```rust
//! use promql_series::extract_series_from_query;
//!
//! let series = extract_series_from_query(
//!     "rate(http_requests_total[5m]) / rate(http_requests_duration_seconds_count[5m])",
//! );
//! assert_eq!(
//!     series,
//!     vec!["http_requests_duration_seconds_count", "http_requests_total"]
//! );
//! ```
//!
//! ## Examples
//!
//! ### Working with the tree
//!
//! [`parse()`] returns the AST, and [`extract_series()`] walks it:
//!
//! ```rust
//! use promql_series::{Expr, extract_series, parse};
//!
//! let expr = parse(r#"sum by (app, proc) (
//!   instance_memory_limit_bytes - instance_memory_usage_bytes
//! ) / 1024 / 1024"#).unwrap();
//! assert!(matches!(expr, Expr::Binary(_)));
//! assert_eq!(
//!     extract_series(&expr),
//!     vec!["instance_memory_limit_bytes", "instance_memory_usage_bytes"]
//! );
//! ```
//!
//! ### Handling syntax errors
//!
//! Parse failures carry the byte offset of the offending token. Falling
//! back to the lexical extractor is the caller's call:
//!
//! ```rust
//! use promql_series::{extract_series_fallback, parse};
//!
//! let query = "sum(rate(cpu_seconds_total[5m])";
//! let err = parse(query).unwrap_err();
//! assert_eq!(err.position(), query.len());
//! assert_eq!(extract_series_fallback(query), vec!["cpu_seconds_total"]);
//! ```
//!
//! ### Custom traversals
//!
//! [`SeriesCollector`] is one [`ExprVisitor`]; other analyses plug into the
//! same [`walk_expr`]:
//!
//! ```rust
//! use std::convert::Infallible;
//! use promql_series::{Expr, ExprVisitor, parse, walk_expr};
//!
//! #[derive(Default)]
//! struct CallCounter(usize);
//!
//! impl ExprVisitor for CallCounter {
//!     type Error = Infallible;
//!
//!     fn pre_visit(&mut self, expr: &Expr) -> Result<bool, Self::Error> {
//!         if let Expr::Call(_) = expr {
//!             self.0 += 1;
//!         }
//!         Ok(true)
//!     }
//! }
//!
//! let expr = parse("abs(rate(x[1m])) + time()").unwrap();
//! let mut counter = CallCounter::default();
//! let Ok(_) = walk_expr(&mut counter, &expr);
//! assert_eq!(counter.0, 3);
//! ```
//!
//! ## AST Types
//!
//! The parser produces an [`Expr`] enum which can be one of:
//!
//! - [`Expr::Number`] - Numeric literals (`42`, `3.14`, `Inf`, `NaN`)
//! - [`Expr::String`] - String literals (`"hello"`, `'world'`)
//! - [`Expr::VectorSelector`] - Instant vector selectors (`metric{label="value"}`)
//! - [`Expr::MatrixSelector`] - Range vector selectors (`metric[5m]`)
//! - [`Expr::Call`] - Function calls (`rate(...)`, `histogram_quantile(...)`)
//! - [`Expr::Aggregation`] - Aggregation expressions (`sum by (job) (...)`)
//! - [`Expr::Binary`] - Binary operations (`a + b`, `foo and bar`)
//! - [`Expr::Unary`] - Unary operations (`-metric`)
//! - [`Expr::Paren`] - Parenthesized expressions (`(a + b)`)
//! - [`Expr::Subquery`] - Subqueries (`metric[5m:1m]`)
//!
//! ## Modules
//!
//! - [`lexer`] - Tokenizer and its nom sub-lexers
//! - [`ast`] - Abstract Syntax Tree type definitions
//! - [`parser`] - Recursive descent parser producing the AST
//! - [`visitor`] - Depth-first traversal
//! - [`series`] - Series extraction from a tree
//! - [`fallback`] - Lexical series extraction from raw text
//!
//! ## Display
//!
//! All AST types implement [`std::fmt::Display`], printing PromQL that
//! parses back to the same tree:
//!
//! ```rust
//! use promql_series::parse;
//!
//! let ast = parse("1 + 2 * 3").unwrap();
//! assert_eq!(ast.to_string(), "1 + 2 * 3");
//! ```

pub mod ast;
pub mod error;
pub mod fallback;
pub mod lexer;
pub mod parser;
pub mod series;
pub mod visitor;

pub use ast::{
    AggregateOp, Aggregation, BinaryExpr, BinaryModifier, BinaryOp, Call, Expr, GroupModifier,
    GroupSide, SubqueryExpr, UnaryExpr, UnaryOp, VectorMatching, VectorMatchingOp,
};
pub use error::{LexError, ParseError};
pub use fallback::{extract_series_fallback, is_known_function};
pub use lexer::duration::Duration;
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::aggregation::{Grouping, GroupingAction};
pub use parser::selector::{
    AtModifier, LabelMatchOp, LabelMatcher, METRIC_NAME_LABEL, MatrixSelector, VectorSelector,
};
pub use parser::{DEFAULT_MAX_DEPTH, ParseOptions, parse, parse_with_options};
pub use series::{SeriesCollector, extract_series, extract_series_from_query};
pub use visitor::{ExprVisitor, walk_expr};
