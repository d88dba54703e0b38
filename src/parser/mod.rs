//! PromQL expression parser.
//!
//! The entry points are [`parse`] and [`parse_with_options`]. Both run the
//! lexer, then a recursive-descent parser over the token stream that uses
//! precedence climbing for binary operators.
//!
//! # Submodules
//!
//! - [`aggregation`] - Aggregations and their grouping clauses (`by`, `without`)
//! - [`binary`] - Binary operators and vector matching modifiers
//! - [`mod@expr`] - Precedence climbing and primary expressions
//! - [`function`] - Function calls and the table of known functions
//! - [`selector`] - Vector and matrix selectors, `offset` and `@`
//! - [`subquery`] - Subquery suffixes
//! - [`unary`] - Unary operators
//!
//! # Example
//!
//! ```rust
//! use promql_series::parser::parse;
//!
//! let ast = parse("sum(rate(http_requests[5m])) by (job)").unwrap();
//! assert_eq!(ast.to_string(), "sum by (job) (rate(http_requests[5m]))");
//! ```

pub mod aggregation;
pub mod binary;
pub mod expr;
pub mod function;
pub mod selector;
pub mod subquery;
pub mod unary;

use crate::ast::Expr;
use crate::error::ParseError;
use crate::lexer::identifier::Keyword;
use crate::lexer::{Token, TokenKind, tokenize};

/// Nesting limit used by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for [`parse_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// How deeply expressions may nest (parentheses, calls, operators)
    /// before parsing fails with [`ParseError::DepthLimitExceeded`].
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parse a complete PromQL expression with default options.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    parse_with_options(input, ParseOptions::default())
}

/// Parse a complete PromQL expression.
///
/// The whole input must form one expression; anything left over is an
/// error.
///
/// ```rust
/// use promql_series::{ParseError, ParseOptions, parse_with_options};
///
/// let opts = ParseOptions::default().with_max_depth(2);
/// let err = parse_with_options("((((x))))", opts).unwrap_err();
/// assert!(matches!(err, ParseError::DepthLimitExceeded { limit: 2, .. }));
/// ```
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(tokens, options.max_depth);
    let expr = parser.parse_expr()?;
    parser.expect_eof()?;
    Ok(expr)
}

/// Cursor over a token stream.
///
/// The stream always ends with `Eof` and the cursor never moves past it,
/// so `pos` is always a valid index.
pub(crate) struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Token<'a>>, max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    pub(crate) fn peek(&self) -> &Token<'a> {
        self.peek_nth(0)
    }

    /// Look `n` tokens ahead, stopping at `Eof`.
    pub(crate) fn peek_nth(&self, n: usize) -> &Token<'a> {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[(self.pos + n).min(last)]
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn advance(&mut self) -> Token<'a> {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Consume the next token if it is of `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    /// Whether the next token is the identifier `keyword`.
    pub(crate) fn check_keyword(&self, keyword: Keyword) -> bool {
        let token = self.peek();
        token.kind == TokenKind::Identifier && keyword.matches(token.text)
    }

    pub(crate) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let token = self.peek();
        ParseError::unexpected(token.pos, expected, token.describe())
    }

    /// Run `f` one nesting level deeper. Levels added inside `f` are
    /// released when it returns.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let depth = self.depth;
        self.deepen()?;
        let result = f(self);
        self.depth = depth;
        result
    }

    /// Claim one more level of tree height.
    ///
    /// Loops that wrap an already built node (operator chains, stacked
    /// subqueries) call this per wrap, so the tree never gets taller than
    /// the limit allows even though the parser itself does not recurse.
    pub(crate) fn deepen(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                pos: self.peek().pos,
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        if self.check(TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }
}
