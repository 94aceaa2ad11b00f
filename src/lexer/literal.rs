//! Quoted-literal sub-lexers.
//!
//! The scanners receive the literal body, i.e. the text immediately after
//! the opening quote, and report how far a well-formed literal extends.
//! They never decode escapes; the engine slices the exact lexeme (quotes
//! and escape syntax included) out of the input.
//!
//! All three scanners are explicit loops over the byte view of the body.
//! Byte-wise scanning is safe here because every byte they compare against
//! is ASCII, and UTF-8 continuation bytes can never collide with ASCII.

/// Result of scanning a literal body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// A complete literal; the value is the body length including the
    /// closing quote.
    Done(usize),
    /// The body is a valid prefix of a literal; more input could finish it.
    Open,
    /// The body can never become a valid literal.
    Error,
}

/// Escapes accepted after a backslash in a C character literal.
const C_CHAR_ESCAPES: &[u8] = b"'\"?\\abfnrtv";

/// Named escapes accepted after a backslash in a Java character literal.
const JAVA_CHAR_ESCAPES: &[u8] = b"btnfr'\"\\";

/// Scan a string literal body (shared by every profile; Objective-C's
/// `@"..."` form reuses it after its prefix).
///
/// An escaped character is a backslash plus any one following character,
/// consumed as a pair without interpretation. A bare newline before the
/// closing quote is an error. A trailing backslash, a backslash-newline, or
/// plain end of input leave the literal open.
pub fn scan_string(body: &str) -> Scan {
    let b = body.as_bytes();
    let mut i = 0;
    while i < b.len() {
        match b[i] {
            b'"' => return Scan::Done(i + 1),
            b'\n' => return Scan::Error,
            b'\\' => {
                if i + 1 >= b.len() || b[i + 1] == b'\n' {
                    return Scan::Open;
                }
                i += 2;
            }
            _ => i += 1,
        }
    }
    Scan::Open
}

/// Scan a C character literal body.
///
/// Multi-character literals (`'ab'`) are accepted, as compilers accept
/// them. Valid escapes are the named set, one to three octal digits, or
/// `\x` plus a hex digit (further hex digits ride along as plain
/// characters). A backslash followed by anything else, including end of
/// input or a newline, is an error; so is a raw newline.
pub fn scan_char_c(body: &str) -> Scan {
    let b = body.as_bytes();
    let mut i = 0;
    while i < b.len() {
        match b[i] {
            b'\'' => return Scan::Done(i + 1),
            b'\n' => return Scan::Error,
            b'\\' => {
                let Some(&escaped) = b.get(i + 1) else {
                    return Scan::Error;
                };
                if C_CHAR_ESCAPES.contains(&escaped) {
                    i += 2;
                } else if (b'0'..=b'7').contains(&escaped) {
                    let mut n = 1;
                    while n < 3 && b.get(i + 1 + n).is_some_and(|c| (b'0'..=b'7').contains(c)) {
                        n += 1;
                    }
                    i += 1 + n;
                } else if escaped == b'x' && b.get(i + 2).is_some_and(|c| c.is_ascii_hexdigit()) {
                    i += 3;
                } else {
                    return Scan::Error;
                }
            }
            _ => i += 1,
        }
    }
    Scan::Open
}

/// Scan a Java character literal body.
///
/// Exactly one logical character is allowed between the quotes: a plain
/// character, a named escape, a range-bound octal escape (two digits up to
/// `\77`, three digits up to `\377`), or `\u` plus exactly four hex digits.
/// Anything extra before the closing quote is an error ("char literal too
/// long"), as is an empty literal or a malformed escape. A valid prefix cut
/// short by end of input is open.
pub fn scan_char_java(body: &str) -> Scan {
    let b = body.as_bytes();
    let Some(&first) = b.first() else {
        return Scan::Open;
    };

    let consumed = match first {
        b'\'' | b'\n' => return Scan::Error,
        b'\\' => {
            let Some(&escaped) = b.get(1) else {
                return Scan::Open;
            };
            if JAVA_CHAR_ESCAPES.contains(&escaped) {
                2
            } else if (b'0'..=b'7').contains(&escaped) {
                // Maximal munch under the range constraint: a third digit is
                // taken only when the first digit is 0-3.
                let mut n = 1;
                if b.get(2).is_some_and(|c| (b'0'..=b'7').contains(c)) {
                    n = 2;
                    if escaped <= b'3' && b.get(3).is_some_and(|c| (b'0'..=b'7').contains(c)) {
                        n = 3;
                    }
                }
                1 + n
            } else if escaped == b'u' {
                for k in 0..4 {
                    match b.get(2 + k) {
                        None => return Scan::Open,
                        Some(c) if c.is_ascii_hexdigit() => {}
                        Some(_) => return Scan::Error,
                    }
                }
                6
            } else {
                return Scan::Error;
            }
        }
        // A plain character, possibly multi-byte.
        _ => body.chars().next().map_or(1, |c| c.len_utf8()),
    };

    match b.get(consumed) {
        None => Scan::Open,
        Some(b'\'') => Scan::Done(consumed + 1),
        Some(_) => Scan::Error,
    }
}
