//! Whitespace and comment skipping.
//!
//! PromQL ignores spaces, tabs, carriage returns and newlines between
//! tokens. A `#` starts a comment that runs to the end of the line.
//!
//! ```rust
//! use promql_series::lexer::whitespace::skip_trivia;
//!
//! let (rest, _) = skip_trivia("  # select everything\n  up").unwrap();
//! assert_eq!(rest, "up");
//! ```

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, not_line_ending},
    combinator::value,
    multi::many0,
    sequence::preceded,
};

/// Whitespace characters recognised between tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// A `#` comment, returning its text without the marker.
pub fn line_comment(input: &str) -> IResult<&str, &str> {
    preceded(char('#'), not_line_ending).parse(input)
}

/// Skip any run of whitespace and comments. Never fails.
pub fn skip_trivia(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((
            value((), take_while1(is_whitespace)),
            value((), line_comment),
        ))),
    )
    .parse(input)
}
