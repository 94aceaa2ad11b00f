//! The tokenizer engine.
//!
//! [`Lexer`] is configured once with a language profile and then classifies
//! input one token at a time. Dispatch follows a fixed priority order:
//! after the whitespace/comment skip loop come string literals, character
//! literals, identifiers (checked against keywords and unique tokens),
//! directives, floats, hex floats, integers, and finally punctuators.
//! Float forms must be probed before plain integers because a leading digit
//! run is ambiguous (`10.3` vs `10`).
//!
//! For `Open` and `Error` outcomes the remainder is the whole input the
//! call received, untouched, so the caller can append more text and retry
//! from scratch.

use crate::error::{CreplError, CreplResult};
use crate::lexer::literal::{scan_char_c, scan_char_java, scan_string, Scan};
use crate::lexer::profile::{EscapeStyle, Language, LanguageProfile};
use crate::lexer::punctuator;
use crate::lexer::token::{Delimiter, Outcome, Token};

pub struct Lexer {
    profile: LanguageProfile,
}

impl Lexer {
    pub fn new(language: Language) -> Lexer {
        Lexer {
            profile: LanguageProfile::new(language),
        }
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    pub fn language(&self) -> Language {
        self.profile.language
    }

    /// Classify the next token of `input`.
    pub fn next_token<'a>(&self, input: &'a str) -> Outcome<'a> {
        // Consume any run of whitespace and comments before looking for a
        // real token. Comments are internal; they never reach the caller.
        let mut rest = input.trim_start();
        loop {
            if let Some(body) = rest.strip_prefix("//") {
                match body.find('\n') {
                    Some(nl) => rest = body[nl + 1..].trim_start(),
                    None => return Outcome::new(Token::Open(Delimiter::LineComment), input),
                }
            } else if let Some(body) = rest.strip_prefix("/*") {
                match body.find("*/") {
                    Some(end) => rest = body[end + 2..].trim_start(),
                    None => return Outcome::new(Token::Open(Delimiter::BlockComment), input),
                }
            } else {
                break;
            }
        }

        if let Some(prefix) = self.string_prefix(rest) {
            return self.lex_string(input, rest, prefix);
        }
        if rest.starts_with('\'') {
            return self.lex_char(input, rest);
        }
        if let Some(len) = (self.profile.identifier)(rest) {
            let word = &rest[..len];
            let token = if self.profile.is_keyword(word) {
                Token::Keyword(word)
            } else if let Some(tag) = self.profile.unique_tag(word) {
                Token::UniqueToken(tag, word)
            } else {
                Token::Identifier(word)
            };
            return Outcome::new(token, &rest[len..]);
        }
        if self.profile.directives_enabled && rest.starts_with('@') {
            if let Some(len) = (self.profile.identifier)(&rest[1..]) {
                if self.profile.is_directive(&rest[1..1 + len]) {
                    return Outcome::new(Token::Keyword(&rest[..1 + len]), &rest[1 + len..]);
                }
                return Outcome::new(Token::Error, input);
            }
            // a bare `@` falls through to the punctuator tables
        }
        if let Some(len) = (self.profile.float)(rest) {
            return Outcome::new(Token::Float(&rest[..len]), &rest[len..]);
        }
        if let Some(len) = (self.profile.hex_float)(rest) {
            return Outcome::new(Token::Float(&rest[..len]), &rest[len..]);
        }
        if let Some(len) = (self.profile.integer)(rest) {
            return Outcome::new(Token::Integer(&rest[..len]), &rest[len..]);
        }
        if rest.is_empty() {
            return Outcome::new(Token::End, rest);
        }
        let (graph, after) = punctuator::resolve(&self.profile.punctuators, rest);
        Outcome::new(Token::Punctuator(graph), after)
    }

    /// Tokenize `input` to completion. The returned stream always ends with
    /// exactly one terminal token (`End`, `Open` or `Error`).
    pub fn tokenize<'a>(&self, input: &'a str) -> CreplResult<Vec<Token<'a>>> {
        let mut tokens = Vec::new();
        let mut rest = input;
        loop {
            let out = self.next_token(rest);
            let terminal = out.token.is_terminal();
            tokens.push(out.token);
            if terminal {
                return Ok(tokens);
            }
            if out.rest.len() >= rest.len() {
                return Err(CreplError::NoProgress(rest.to_string()));
            }
            rest = out.rest;
        }
    }

    /// The opening length of a string literal at `rest`, if one starts
    /// there: 1 for `"`, 2 for Objective-C's `@"`.
    fn string_prefix(&self, rest: &str) -> Option<usize> {
        if rest.starts_with('"') {
            Some(1)
        } else if self.profile.directives_enabled && rest.starts_with("@\"") {
            Some(2)
        } else {
            None
        }
    }

    fn lex_string<'a>(&self, input: &'a str, rest: &'a str, prefix: usize) -> Outcome<'a> {
        match scan_string(&rest[prefix..]) {
            Scan::Done(len) => {
                Outcome::new(Token::Str(&rest[..prefix + len]), &rest[prefix + len..])
            }
            Scan::Open => Outcome::new(Token::Open(Delimiter::DoubleQuote), input),
            Scan::Error => Outcome::new(Token::Error, input),
        }
    }

    fn lex_char<'a>(&self, input: &'a str, rest: &'a str) -> Outcome<'a> {
        let scan = match self.profile.escape_style {
            EscapeStyle::C => scan_char_c(&rest[1..]),
            EscapeStyle::Java => scan_char_java(&rest[1..]),
        };
        match scan {
            Scan::Done(len) => Outcome::new(Token::Char(&rest[..1 + len]), &rest[1 + len..]),
            Scan::Open => Outcome::new(Token::Open(Delimiter::SingleQuote), input),
            Scan::Error => Outcome::new(Token::Error, input),
        }
    }
}
