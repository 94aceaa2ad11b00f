//! The statement-completeness predicate.
//!
//! The lexer only classifies; deciding whether a buffered line is ready to
//! compile happens here. A buffer is complete when it lexes to more than
//! one token, its braces balance, the stream ends cleanly, and the last
//! real token is `;` or `}`. A buffer ending in an open literal or comment
//! is simply not complete yet; a malformed literal or a stray close brace
//! is an error the caller reports and discards.

use crate::error::{CreplError, CreplResult};
use crate::lexer::{Lexer, Token};

/// Check that `{`/`}` punctuators balance to zero. A negative count at any
/// point is reported immediately.
fn braces_balanced(tokens: &[Token]) -> CreplResult<bool> {
    let mut depth: i32 = 0;
    for token in tokens {
        match token {
            Token::Punctuator("{") => depth += 1,
            Token::Punctuator("}") => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Err(CreplError::UnbalancedBrace);
        }
    }
    Ok(depth == 0)
}

/// Decide whether the buffered input forms a complete statement.
///
/// `Ok(false)` means the shell should read a continuation line and re-lex
/// the grown buffer from scratch. Command lines (first non-blank character
/// `#`) never reach the lexer and are always complete.
pub fn line_complete(lexer: &Lexer, line: &str) -> CreplResult<bool> {
    if line.trim_start().starts_with('#') {
        return Ok(true);
    }
    let tokens = lexer.tokenize(line)?;
    // A malformed literal can never be repaired by continuation lines, so
    // reject it even when an open brace would otherwise ask for more input.
    if matches!(tokens.as_slice(), [.., Token::Error]) {
        return Err(CreplError::Malformed);
    }
    if !braces_balanced(&tokens)? {
        return Ok(false);
    }
    match tokens.as_slice() {
        [.., Token::Punctuator(";" | "}"), Token::End] => Ok(true),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Language;
    use test_case::test_case;

    #[test_case("int x = 1;" ; "semicolon terminated")]
    #[test_case("void f() { return; }" ; "brace terminated")]
    #[test_case("  #list" ; "command line")]
    #[test_case("#include <stdio.h>" ; "command with argument")]
    #[test_case(";" ; "empty statement")]
    fn complete(line: &str) {
        let lexer = Lexer::new(Language::C);
        assert!(line_complete(&lexer, line).unwrap());
    }

    #[test_case("int x = 1" ; "no terminator")]
    #[test_case("void f() {" ; "open brace")]
    #[test_case("puts(\"unclosed" ; "open string literal")]
    #[test_case("x = 1; /* trailing" ; "open comment")]
    #[test_case("" ; "empty buffer")]
    fn incomplete(line: &str) {
        let lexer = Lexer::new(Language::C);
        assert!(!line_complete(&lexer, line).unwrap());
    }

    #[test]
    fn stray_close_brace_is_a_hard_error() {
        let lexer = Lexer::new(Language::C);
        assert!(matches!(
            line_complete(&lexer, "} int x = 1; {"),
            Err(CreplError::UnbalancedBrace)
        ));
    }

    #[test_case("char c = 'ab';" ; "at top level")]
    #[test_case("void f() { char c = 'ab';" ; "inside an open brace")]
    fn malformed_literal_is_rejected(line: &str) {
        let lexer = Lexer::new(Language::Java);
        assert!(matches!(
            line_complete(&lexer, line),
            Err(CreplError::Malformed)
        ));
    }
}
