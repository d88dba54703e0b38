// Unsigned number literals.
//
// Signs are separate tokens, so `-1` lexes as SUB NUMBER and the parser
// builds a unary expression. `Inf` and `NaN` are lexed as identifiers and
// turned into numbers by the parser.
//
// Accepted forms:
//   42  2.75  .5  5.  1e10  2.5E-3   decimal
//   0x1F  0X2a                       hexadecimal
//   0o755  0755                      octal

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, one_of},
    combinator::{map_res, opt, recognize},
    sequence::{pair, preceded},
};

/// Parse an unsigned numeric literal into its `f64` value.
pub fn number(input: &str) -> IResult<&str, f64> {
    alt((hexadecimal, octal, decimal)).parse(input)
}

fn hex_digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_hexdigit())(input)
}

fn octal_digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| matches!(c, '0'..='7'))(input)
}

fn hexadecimal(input: &str) -> IResult<&str, f64> {
    map_res(
        preceded(tag_no_case("0x"), hex_digits),
        |digits: &str| i64::from_str_radix(digits, 16).map(|v| v as f64),
    )
    .parse(input)
}

/// `0o755` or the legacy `0755`. A legacy octal that turns out to be a
/// float (`0755.5`, `01e3`) is left for the decimal parser.
fn octal(input: &str) -> IResult<&str, f64> {
    let prefixed = preceded(tag_no_case("0o"), octal_digits);
    let legacy = recognize(pair(char('0'), octal_digits));
    let (rest, digits) = alt((prefixed, legacy)).parse(input)?;

    if rest.starts_with(['.', 'e', 'E']) || rest.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Digit,
        )));
    }

    match i64::from_str_radix(digits, 8) {
        Ok(v) => Ok((rest, v as f64)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::MapRes,
        ))),
    }
}

fn decimal_digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit())(input)
}

fn exponent(input: &str) -> IResult<&str, &str> {
    recognize((one_of("eE"), opt(one_of("+-")), decimal_digits)).parse(input)
}

fn decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(alt((
            // .5, .5e3
            recognize((char('.'), decimal_digits, opt(exponent))),
            // 5, 5., 5.25, 5e3, 5.25e-3
            recognize((
                decimal_digits,
                opt(pair(char('.'), opt(decimal_digits))),
                opt(exponent),
            )),
        ))),
        str::parse::<f64>,
    )
    .parse(input)
}
