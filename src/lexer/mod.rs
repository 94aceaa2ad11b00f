//! Incremental lexical analysis for the shell's supported languages.
//!
//! The lexer's job is not to build a parse tree but to answer one question
//! for the shell: is the buffered input a complete statement, an unfinished
//! one, or garbage? It therefore reports three terminal conditions instead
//! of the usual one: `End` (well formed so far), `Open` (inside an
//! unclosed literal or comment; more input could help) and `Error`
//! (malformed; more input cannot help).

mod literal;
mod patterns;
mod profile;
mod punctuator;
mod token;
mod tokenizer;

pub use patterns::Matcher;
pub use punctuator::PunctuatorTables;
pub use profile::{EscapeStyle, Language, LanguageProfile};
pub use token::{Delimiter, Outcome, Token};
pub use tokenizer::Lexer;
