//! Longest-prefix matchers for identifiers and numeric literals.
//!
//! Each matcher inspects the start of the input and returns the byte length
//! of the matched prefix, or `None`. The grammars are deliberate, quirks
//! included; see DESIGN.md before "fixing" anything here.

/// A prefix matcher stored in a language profile.
pub type Matcher = fn(&str) -> Option<usize>;

fn digits(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    i
}

fn hex_digits(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_hexdigit() {
        i += 1;
    }
    i
}

fn octal_digits(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && (b'0'..=b'7').contains(&b[i]) {
        i += 1;
    }
    i
}

/// Optional exponent part: marker, optional sign, one or more digits.
/// Returns the end index, or `i` unchanged when no full exponent is present
/// (a dangling `e` or `e-` is left for the caller's remainder).
fn exponent(b: &[u8], i: usize, lower: u8, upper: u8) -> usize {
    match b.get(i) {
        Some(&c) if c == lower || c == upper => {
            let mut j = i + 1;
            if matches!(b.get(j), Some(b'+') | Some(b'-')) {
                j += 1;
            }
            let k = digits(b, j);
            if k > j {
                k
            } else {
                i
            }
        }
        _ => i,
    }
}

/// C-family identifier: ASCII letter or underscore, then letters, digits
/// or underscores.
pub fn c_identifier(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    let first = *b.first()?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }
    let mut i = 1;
    while i < b.len() && (b[i].is_ascii_alphanumeric() || b[i] == b'_') {
        i += 1;
    }
    Some(i)
}

/// Java-family identifier: a Unicode letter, `_` or `$`, then Unicode
/// alphanumerics, `_` or `$`.
pub fn java_identifier(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return None;
    }
    let mut end = first.len_utf8();
    for (i, c) in chars {
        if c.is_alphanumeric() || c == '_' || c == '$' {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    Some(end)
}

/// Integer body shared by both families: decimal, octal (`0` prefix), hex
/// (`0x` prefix), or a lone `0`. The suffix alternatives are tried in the
/// listed order and at most one is taken.
fn integer(s: &str, suffixes: &[&str]) -> Option<usize> {
    let b = s.as_bytes();
    let body = match *b.first()? {
        b'1'..=b'9' => digits(b, 1),
        b'0' => {
            if matches!(b.get(1), Some(b'x') | Some(b'X'))
                && b.get(2).is_some_and(|c| c.is_ascii_hexdigit())
            {
                hex_digits(b, 2)
            } else if b.get(1).is_some_and(|c| (b'0'..=b'7').contains(c)) {
                octal_digits(b, 1)
            } else {
                1
            }
        }
        _ => return None,
    };
    for suffix in suffixes {
        if s[body..].starts_with(suffix) {
            return Some(body + suffix.len());
        }
    }
    Some(body)
}

pub fn c_integer(s: &str) -> Option<usize> {
    // Ordered alternation: `ll`/`LL` are listed after `l`/`L` and
    // therefore never win. Deliberate; see DESIGN.md.
    integer(s, &["u", "U", "l", "L", "ll", "LL"])
}

pub fn java_integer(s: &str) -> Option<usize> {
    integer(s, &["l", "L"])
}

fn one_of(b: &[u8], i: usize, set: &[u8]) -> usize {
    match b.get(i) {
        Some(c) if set.contains(c) => i + 1,
        _ => i,
    }
}

/// C float: a mantissa with a mandatory decimal point (`12.3`, `12.`,
/// `.998`), optional decimal exponent, optional `f`/`F`/`l`/`L` suffix.
pub fn c_float(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    let int_end = digits(b, 0);
    if b.get(int_end) != Some(&b'.') {
        return None;
    }
    let frac_end = digits(b, int_end + 1);
    let mantissa = if frac_end > int_end + 1 {
        frac_end
    } else if int_end > 0 {
        int_end + 1
    } else {
        return None;
    };
    let exp = exponent(b, mantissa, b'e', b'E');
    Some(one_of(b, exp, b"fFlL"))
}

/// C hex float: `0x` prefix, hex mantissa with a mandatory point, optional
/// binary exponent, optional `f`/`F`/`l`/`L` suffix.
pub fn c_hex_float(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    if b.len() < 3 || b[0] != b'0' || !matches!(b[1], b'x' | b'X') {
        return None;
    }
    let int_end = hex_digits(b, 2);
    if b.get(int_end) != Some(&b'.') {
        return None;
    }
    let frac_end = hex_digits(b, int_end + 1);
    let mantissa = if frac_end > int_end + 1 {
        frac_end
    } else if int_end > 2 {
        int_end + 1
    } else {
        return None;
    };
    let exp = exponent(b, mantissa, b'p', b'P');
    Some(one_of(b, exp, b"fFlL"))
}

/// Java float: in addition to the dotted forms, a bare digit run is a float
/// when followed by an exponent (`45e7`) or a float suffix (`123f`).
pub fn java_float(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    let int_end = digits(b, 0);
    if b.get(int_end) == Some(&b'.') {
        let frac_end = digits(b, int_end + 1);
        if int_end > 0 || frac_end > int_end + 1 {
            let exp = exponent(b, frac_end, b'e', b'E');
            return Some(one_of(b, exp, b"fFdD"));
        }
        return None;
    }
    if int_end == 0 {
        return None;
    }
    let exp = exponent(b, int_end, b'e', b'E');
    if exp > int_end {
        return Some(one_of(b, exp, b"fFdD"));
    }
    let suffixed = one_of(b, int_end, b"fFdD");
    if suffixed > int_end {
        Some(suffixed)
    } else {
        None
    }
}

/// Java hex float: the binary exponent is mandatory and the point is not
/// (`0X11P-5` is valid).
pub fn java_hex_float(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    if b.len() < 3 || b[0] != b'0' || !matches!(b[1], b'x' | b'X') {
        return None;
    }
    let int_end = hex_digits(b, 2);
    let mantissa = if b.get(int_end) == Some(&b'.') {
        let frac_end = hex_digits(b, int_end + 1);
        if frac_end > int_end + 1 {
            frac_end
        } else if int_end > 2 {
            int_end + 1
        } else {
            return None;
        }
    } else if int_end > 2 {
        int_end
    } else {
        return None;
    };
    let exp = exponent(b, mantissa, b'p', b'P');
    if exp == mantissa {
        return None;
    }
    Some(one_of(b, exp, b"fFdD"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched<'a>(m: Matcher, s: &'a str) -> Option<&'a str> {
        m(s).map(|n| &s[..n])
    }

    #[test]
    fn c_identifiers() {
        assert_eq!(matched(c_identifier, "hello3?"), Some("hello3"));
        assert_eq!(matched(c_identifier, "_Bool x"), Some("_Bool"));
        assert_eq!(matched(c_identifier, "9lives"), None);
    }

    #[test]
    fn java_identifiers() {
        for input in ["_hello", "$hello", "hello_", "hello$", "a1234", "λ1234"] {
            assert_eq!(matched(java_identifier, input), Some(input));
        }
        assert_eq!(matched(java_identifier, "1abc"), None);
    }

    #[test]
    fn c_integers() {
        assert_eq!(matched(c_integer, "123x"), Some("123"));
        assert_eq!(matched(c_integer, "546ux"), Some("546u"));
        assert_eq!(matched(c_integer, "778l9"), Some("778l"));
        assert_eq!(matched(c_integer, "0754"), Some("0754"));
        assert_eq!(matched(c_integer, "089"), Some("0"));
        assert_eq!(matched(c_integer, "0xAAA0F9Z"), Some("0xAAA0F9"));
        assert_eq!(matched(c_integer, "0Xabcdef0123456789M"), Some("0Xabcdef0123456789"));
        assert_eq!(matched(c_integer, "0"), Some("0"));
        assert_eq!(matched(c_integer, "0x"), Some("0"));
    }

    #[test]
    fn c_integer_suffix_order() {
        // `l` is tried before `ll`, so a doubled suffix is never consumed
        // whole.
        assert_eq!(matched(c_integer, "78ll"), Some("78l"));
    }

    #[test]
    fn c_floats() {
        assert_eq!(matched(c_float, "12.3 boot"), Some("12.3"));
        assert_eq!(matched(c_float, "12. boot"), Some("12."));
        assert_eq!(matched(c_float, ".998 boot"), Some(".998"));
        assert_eq!(matched(c_float, "10.3e-78 boot"), Some("10.3e-78"));
        assert_eq!(matched(c_float, "10.99E+99 boot"), Some("10.99E+99"));
        assert_eq!(matched(c_float, "10.9f boot"), Some("10.9f"));
        assert_eq!(matched(c_float, "45e7"), None);
        assert_eq!(matched(c_float, "."), None);
        assert_eq!(matched(c_float, "0x1.8"), None);
    }

    #[test]
    fn c_float_dangling_exponent() {
        assert_eq!(matched(c_float, "10.3e boot"), Some("10.3"));
        assert_eq!(matched(c_float, "10.3e- boot"), Some("10.3"));
    }

    #[test]
    fn c_hex_floats() {
        assert_eq!(matched(c_hex_float, "0xABCDEF.0123456789 b"), Some("0xABCDEF.0123456789"));
        assert_eq!(matched(c_hex_float, "0xabcdef. b"), Some("0xabcdef."));
        assert_eq!(matched(c_hex_float, "0xabcdef.123p-17boon"), Some("0xabcdef.123p-17"));
        assert_eq!(matched(c_hex_float, "0xabcdef.123p-17L b"), Some("0xabcdef.123p-17L"));
        assert_eq!(matched(c_hex_float, "0x11P-5"), None);
    }

    #[test]
    fn java_floats() {
        for input in ["12.3", "45e7", "123f", "12.", ".5", "1e10d"] {
            assert_eq!(matched(java_float, input), Some(input));
        }
        assert_eq!(matched(java_float, "123"), None);
        assert_eq!(matched(java_float, "0x11P-5"), None);
    }

    #[test]
    fn java_hex_floats() {
        for input in ["0x1abcdef.012p10", "0X11P-5"] {
            assert_eq!(matched(java_hex_float, input), Some(input));
        }
        // the binary exponent is not optional in the Java grammar
        assert_eq!(matched(java_hex_float, "0x11"), None);
        assert_eq!(matched(java_hex_float, "0x1.8"), None);
    }
}
