//! Tokenizer for PromQL query text.
//!
//! The sub-modules hold the nom parsers for individual lexemes. [`tokenize`]
//! drives them over the whole input and produces a flat token stream that
//! always ends with a single [`TokenKind::Eof`].
//!
//! ```rust
//! use promql_series::lexer::{TokenKind, tokenize};
//!
//! let tokens = tokenize("rate(http_requests_total[5m])").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::LeftParen,
//!         TokenKind::Identifier,
//!         TokenKind::LeftBracket,
//!         TokenKind::Duration,
//!         TokenKind::RightBracket,
//!         TokenKind::RightParen,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

pub mod duration;
pub mod identifier;
pub mod number;
pub mod string;
pub mod whitespace;

use std::fmt;

use tracing::trace;

use crate::error::LexError;

use self::duration::Duration;
use self::identifier::{is_label_char, is_label_start, is_metric_char, label_name, metric_name};

/// Kinds of token produced by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Duration,

    LeftBrace,    // {
    RightBrace,   // }
    LeftParen,    // (
    RightParen,   // )
    LeftBracket,  // [
    RightBracket, // ]
    Comma,        // ,
    Colon,        // :
    At,           // @

    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Mod, // %
    Pow, // ^

    Eql, // ==
    Neq, // !=
    Lss, // <
    Lte, // <=
    Gtr, // >
    Gte, // >=

    Assign,       // =
    RegexMatch,   // =~
    RegexNoMatch, // !~

    And,
    Or,
    Unless,
    Atan2,

    Eof,
}

impl TokenKind {
    /// `and`, `or`, `unless` and `atan2`, which lex from identifier-shaped text.
    pub fn is_keyword_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::And | TokenKind::Or | TokenKind::Unless | TokenKind::Atan2
        )
    }

    fn keyword_operator(word: &str) -> Option<TokenKind> {
        [
            ("and", TokenKind::And),
            ("or", TokenKind::Or),
            ("unless", TokenKind::Unless),
            ("atan2", TokenKind::Atan2),
        ]
        .into_iter()
        .find(|(kw, _)| kw.eq_ignore_ascii_case(word))
        .map(|(_, kind)| kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Duration => "duration",
            TokenKind::LeftBrace => "\"{\"",
            TokenKind::RightBrace => "\"}\"",
            TokenKind::LeftParen => "\"(\"",
            TokenKind::RightParen => "\")\"",
            TokenKind::LeftBracket => "\"[\"",
            TokenKind::RightBracket => "\"]\"",
            TokenKind::Comma => "\",\"",
            TokenKind::Colon => "\":\"",
            TokenKind::At => "\"@\"",
            TokenKind::Add => "\"+\"",
            TokenKind::Sub => "\"-\"",
            TokenKind::Mul => "\"*\"",
            TokenKind::Div => "\"/\"",
            TokenKind::Mod => "\"%\"",
            TokenKind::Pow => "\"^\"",
            TokenKind::Eql => "\"==\"",
            TokenKind::Neq => "\"!=\"",
            TokenKind::Lss => "\"<\"",
            TokenKind::Lte => "\"<=\"",
            TokenKind::Gtr => "\">\"",
            TokenKind::Gte => "\">=\"",
            TokenKind::Assign => "\"=\"",
            TokenKind::RegexMatch => "\"=~\"",
            TokenKind::RegexNoMatch => "\"!~\"",
            TokenKind::And => "\"and\"",
            TokenKind::Or => "\"or\"",
            TokenKind::Unless => "\"unless\"",
            TokenKind::Atan2 => "\"atan2\"",
            TokenKind::Eof => "end of input",
        };
        f.write_str(s)
    }
}

/// Decoded value carried by literal tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Number(f64),
    String(String),
    Duration(Duration),
}

/// A lexeme with its byte offset in the query text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Source text exactly as written.
    pub text: &'a str,
    pub pos: usize,
    pub value: Literal,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, text: &'a str, pos: usize) -> Self {
        Self {
            kind,
            text,
            pos,
            value: Literal::None,
        }
    }

    /// Short human-readable form used in error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Identifier => format!("identifier \"{}\"", self.text),
            TokenKind::Number => format!("number {}", self.text),
            TokenKind::String => format!("string {}", self.text),
            TokenKind::Duration => format!("duration {}", self.text),
            _ => format!("\"{}\"", self.text),
        }
    }
}

/// Split `input` into tokens.
///
/// Fails on the first character that cannot start a token, on strings that
/// are unterminated or contain bad escapes, and on numeric literals glued
/// to identifier characters (`5x`, `1.5m`).
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(input);
    lexer.run()?;
    trace!(tokens = lexer.tokens.len(), "tokenized query");
    Ok(lexer.tokens)
}

struct Lexer<'a> {
    input: &'a str,
    rest: &'a str,
    bracket_depth: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            rest: input,
            bracket_depth: 0,
            tokens: Vec::new(),
        }
    }

    fn pos(&self) -> usize {
        self.input.len() - self.rest.len()
    }

    /// Consume `len` bytes as a token of `kind`.
    fn emit(&mut self, kind: TokenKind, len: usize) -> &mut Token<'a> {
        let pos = self.pos();
        let (text, rest) = self.rest.split_at(len);
        self.rest = rest;
        self.tokens.push(Token::new(kind, text, pos));
        let last = self.tokens.len() - 1;
        &mut self.tokens[last]
    }

    fn run(&mut self) -> Result<(), LexError> {
        loop {
            if let Ok((rest, ())) = whitespace::skip_trivia(self.rest) {
                self.rest = rest;
            }

            let mut chars = self.rest.chars();
            let Some(c) = chars.next() else {
                self.emit(TokenKind::Eof, 0);
                return Ok(());
            };
            let next = chars.next();

            match c {
                '0'..='9' => self.numeric()?,
                '.' if next.is_some_and(|n| n.is_ascii_digit()) => self.numeric()?,
                '"' | '\'' | '`' => self.string()?,
                ':' if self.bracket_depth == 0 && next.is_some_and(is_metric_char) => {
                    self.identifier()
                }
                c if is_label_start(c) => self.identifier(),
                _ => self.operator(c, next)?,
            }
        }
    }

    fn identifier(&mut self) {
        // colons inside brackets separate subquery range and step
        let parsed = if self.bracket_depth == 0 {
            metric_name(self.rest)
        } else {
            label_name(self.rest)
        };
        let len = match parsed {
            Ok((_, name)) => name.len(),
            Err(_) => 1,
        };
        let word = &self.rest[..len];
        let kind = TokenKind::keyword_operator(word).unwrap_or(TokenKind::Identifier);
        self.emit(kind, len);
    }

    /// A duration if the digits carry a unit, a number otherwise.
    fn numeric(&mut self) -> Result<(), LexError> {
        let pos = self.pos();

        if let Ok((after, d)) = duration::duration(self.rest)
            && !glued(after)
        {
            let len = self.rest.len() - after.len();
            self.emit(TokenKind::Duration, len).value = Literal::Duration(d);
            return Ok(());
        }

        match number::number(self.rest) {
            Ok((after, n)) if !glued(after) => {
                let len = self.rest.len() - after.len();
                self.emit(TokenKind::Number, len).value = Literal::Number(n);
                Ok(())
            }
            _ => Err(self.malformed_numeric(pos)),
        }
    }

    fn malformed_numeric(&self, pos: usize) -> LexError {
        let end = self
            .rest
            .find(|c: char| !(is_label_char(c) || c == '.'))
            .unwrap_or(self.rest.len());
        let literal = self.rest[..end].to_string();

        let digits = literal.trim_start_matches(|c: char| c.is_ascii_digit());
        let looks_like_duration = digits.len() < literal.len()
            && !digits.is_empty()
            && digits.starts_with(|c: char| c.is_ascii_alphabetic());

        if looks_like_duration {
            LexError::MalformedDuration { literal, pos }
        } else {
            LexError::MalformedNumber { literal, pos }
        }
    }

    fn string(&mut self) -> Result<(), LexError> {
        let pos = self.pos();
        match string::string_literal(self.rest) {
            Ok((after, value)) => {
                let len = self.rest.len() - after.len();
                self.emit(TokenKind::String, len).value = Literal::String(value);
                Ok(())
            }
            Err(_) if closing_quote_exists(self.rest) => Err(LexError::InvalidEscape { pos }),
            Err(_) => Err(LexError::UnterminatedString { pos }),
        }
    }

    fn operator(&mut self, c: char, next: Option<char>) -> Result<(), LexError> {
        let (kind, len) = match (c, next) {
            ('=', Some('=')) => (TokenKind::Eql, 2),
            ('=', Some('~')) => (TokenKind::RegexMatch, 2),
            ('=', _) => (TokenKind::Assign, 1),
            ('!', Some('=')) => (TokenKind::Neq, 2),
            ('!', Some('~')) => (TokenKind::RegexNoMatch, 2),
            ('<', Some('=')) => (TokenKind::Lte, 2),
            ('<', _) => (TokenKind::Lss, 1),
            ('>', Some('=')) => (TokenKind::Gte, 2),
            ('>', _) => (TokenKind::Gtr, 1),
            ('+', _) => (TokenKind::Add, 1),
            ('-', _) => (TokenKind::Sub, 1),
            ('*', _) => (TokenKind::Mul, 1),
            ('/', _) => (TokenKind::Div, 1),
            ('%', _) => (TokenKind::Mod, 1),
            ('^', _) => (TokenKind::Pow, 1),
            ('{', _) => (TokenKind::LeftBrace, 1),
            ('}', _) => (TokenKind::RightBrace, 1),
            ('(', _) => (TokenKind::LeftParen, 1),
            (')', _) => (TokenKind::RightParen, 1),
            ('[', _) => {
                self.bracket_depth += 1;
                (TokenKind::LeftBracket, 1)
            }
            (']', _) => {
                self.bracket_depth = self.bracket_depth.saturating_sub(1);
                (TokenKind::RightBracket, 1)
            }
            (',', _) => (TokenKind::Comma, 1),
            (':', _) => (TokenKind::Colon, 1),
            ('@', _) => (TokenKind::At, 1),
            _ => {
                return Err(LexError::UnexpectedChar {
                    ch: c,
                    pos: self.pos(),
                });
            }
        };
        self.emit(kind, len);
        Ok(())
    }
}

/// Whether a numeric literal runs straight into an identifier or a dot.
fn glued(after: &str) -> bool {
    after.starts_with(|c: char| is_label_char(c) || c == '.')
}

/// Distinguishes a bad escape from a missing closing quote. Quoted strings
/// end at the first newline.
fn closing_quote_exists(input: &str) -> bool {
    let mut chars = input.chars();
    let Some(quote) = chars.next() else {
        return false;
    };
    if quote == '`' {
        return chars.any(|c| c == '`');
    }
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\n' => return false,
            c if c == quote => return true,
            _ => {}
        }
    }
    false
}
