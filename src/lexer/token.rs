//! Token definitions.
//!
//! Tokens borrow their lexeme text from the input buffer. The lexeme is
//! always the exact matched slice, escape syntax and surrounding quotes
//! included; decoding escapes is out of scope for the lexer.

use std::fmt;

/// The construct left open when the lexer reports [`Token::Open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// A `//` comment with no terminating newline yet.
    LineComment,
    /// A `/*` comment with no `*/` yet.
    BlockComment,
    /// A `"` or `@"` string literal with no closing quote yet.
    DoubleQuote,
    /// A `'` character literal with no closing quote yet.
    SingleQuote,
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Delimiter::LineComment => "//",
            Delimiter::BlockComment => "/*",
            Delimiter::DoubleQuote => "\"",
            Delimiter::SingleQuote => "'",
        };
        f.write_str(s)
    }
}

/// A single lexical token.
///
/// `End`, `Open` and `Error` are terminal: they always end a token stream.
/// `Open` means the input is a valid prefix of an unfinished token and more
/// input could complete it; `Error` means no further input can help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Identifier(&'a str),
    Keyword(&'a str),
    /// An identifier spelling the profile maps to its own tag rather than
    /// `Keyword` or `Identifier` (Java's `true`/`false`/`null`,
    /// Objective-C's `self`, `nil`, `YES`, ...). The first field is the tag.
    UniqueToken(&'static str, &'a str),
    Integer(&'a str),
    Float(&'a str),
    Char(&'a str),
    Str(&'a str),
    Punctuator(&'a str),
    /// End of a well-formed stream.
    End,
    /// Open literal or comment; more input could make the stream well formed.
    Open(Delimiter),
    /// Malformed literal; more input won't help.
    Error,
}

impl<'a> Token<'a> {
    /// True for the three stream-terminating variants.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Token::End | Token::Open(_) | Token::Error)
    }

    /// The matched lexeme, if this token carries one.
    pub fn text(&self) -> Option<&'a str> {
        match self {
            Token::Identifier(s)
            | Token::Keyword(s)
            | Token::UniqueToken(_, s)
            | Token::Integer(s)
            | Token::Float(s)
            | Token::Char(s)
            | Token::Str(s)
            | Token::Punctuator(s) => Some(s),
            Token::End | Token::Open(_) | Token::Error => None,
        }
    }
}

/// The result of a single [`Lexer::next_token`](crate::lexer::Lexer::next_token)
/// call: the token plus the unconsumed remainder of the input.
///
/// The remainder is always a suffix of the input. For any non-terminal token
/// it is strictly shorter than the input; for `Open` and `Error` it is the
/// original input unchanged, so the caller can retry from scratch once more
/// text has been appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome<'a> {
    pub token: Token<'a>,
    pub rest: &'a str,
}

impl<'a> Outcome<'a> {
    pub fn new(token: Token<'a>, rest: &'a str) -> Self {
        Self { token, rest }
    }
}
