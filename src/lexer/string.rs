//! String literals.
//!
//! PromQL accepts three quoting styles:
//!
//! - `"double"` and `'single'` quotes, which process escape sequences
//!   (`\a \b \f \n \r \t \v \\ \" \'`, `\xNN`, `\NNN` octal, `\uNNNN`,
//!   `\UNNNNNNNN`) and may not span lines
//! - `` `raw` `` backticks, taken verbatim
//!
//! ```rust
//! use promql_series::lexer::string::string_literal;
//!
//! let (_, s) = string_literal(r#""GET \"/\"""#).unwrap();
//! assert_eq!(s, r#"GET "/""#);
//!
//! let (_, s) = string_literal(r"`\d+`").unwrap();
//! assert_eq!(s, r"\d+");
//! ```

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{take_until, take_while_m_n},
    character::complete::{anychar, char},
    combinator::{map, map_opt, value, verify},
    multi::many0,
    sequence::{delimited, preceded},
};

/// Parse a quoted string and return its unescaped contents.
pub fn string_literal(input: &str) -> IResult<&str, String> {
    alt((quoted('"'), quoted('\''), raw_string)).parse(input)
}

fn raw_string(input: &str) -> IResult<&str, String> {
    map(delimited(char('`'), take_until("`"), char('`')), str::to_string).parse(input)
}

fn quoted(quote: char) -> impl FnMut(&str) -> IResult<&str, String> {
    move |input: &str| {
        delimited(
            char(quote),
            map(
                many0(alt((
                    preceded(char('\\'), escape),
                    verify(anychar, |&c| c != quote && c != '\\' && c != '\n'),
                ))),
                |chars: Vec<char>| chars.into_iter().collect::<String>(),
            ),
            char(quote),
        )
        .parse(input)
    }
}

/// Decode the part of an escape sequence after the backslash.
fn escape(input: &str) -> IResult<&str, char> {
    alt((
        value('\x07', char('a')),
        value('\x08', char('b')),
        value('\x0c', char('f')),
        value('\n', char('n')),
        value('\r', char('r')),
        value('\t', char('t')),
        value('\x0b', char('v')),
        value('\\', char('\\')),
        value('"', char('"')),
        value('\'', char('\'')),
        preceded(char('x'), code_point(2, 16)),
        preceded(char('u'), code_point(4, 16)),
        preceded(char('U'), code_point(8, 16)),
        code_point(3, 8),
    ))
    .parse(input)
}

/// Exactly `width` digits in `radix`, decoded as a Unicode scalar value.
fn code_point(width: usize, radix: u32) -> impl FnMut(&str) -> IResult<&str, char> {
    move |input: &str| {
        map_opt(
            take_while_m_n(width, width, |c: char| c.is_digit(radix)),
            |digits: &str| u32::from_str_radix(digits, radix).ok().and_then(char::from_u32),
        )
        .parse(input)
    }
}
