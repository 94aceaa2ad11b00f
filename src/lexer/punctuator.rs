//! Longest-match punctuator resolution.
//!
//! Profiles carry four tables of operator and punctuation spellings, one
//! per graph length. Resolution probes the longest table first so that
//! `<<=` wins over `<<` and `<`, matching maximal munch in the language
//! standards.

/// Punctuator spellings grouped by byte length, index 0 holding the
/// one-byte graphs.
pub type PunctuatorTables = [&'static [&'static str]; 4];

/// Split the longest known punctuator off the front of `input`, returning
/// the lexeme and the remainder.
///
/// When no table entry matches, the first character is consumed on its own
/// as a catch-all, so stray bytes surface as one-character punctuator
/// tokens instead of stalling the scan.
pub fn resolve<'a>(tables: &PunctuatorTables, input: &'a str) -> (&'a str, &'a str) {
    for len in (1..=4).rev() {
        if let Some(found) = lookup(tables, input, len) {
            return (found, &input[len..]);
        }
    }
    let width = input.chars().next().map_or(1, |c| c.len_utf8());
    input.split_at(width)
}

fn lookup<'a>(tables: &PunctuatorTables, input: &'a str, len: usize) -> Option<&'a str> {
    if input.len() < len || !input.is_char_boundary(len) {
        return None;
    }
    let head = &input[..len];
    tables[len - 1].contains(&head).then_some(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: PunctuatorTables = [
        &["<", "=", ";", "+"],
        &["<<", "==", "+="],
        &["<<="],
        &[">>>="],
    ];

    #[test]
    fn longest_match_wins() {
        assert_eq!(resolve(&TABLES, "<<= 4"), ("<<=", " 4"));
        assert_eq!(resolve(&TABLES, "<< 4"), ("<<", " 4"));
        assert_eq!(resolve(&TABLES, "< 4"), ("<", " 4"));
        assert_eq!(resolve(&TABLES, ">>>= x"), (">>>=", " x"));
    }

    #[test]
    fn triple_equals_is_two_then_one() {
        assert_eq!(resolve(&TABLES, "===garbage"), ("==", "=garbage"));
    }

    #[test]
    fn unknown_byte_consumed_alone() {
        assert_eq!(resolve(&TABLES, "`rest"), ("`", "rest"));
        // multi-byte characters split on the proper boundary
        assert_eq!(resolve(&TABLES, "§rest"), ("§", "rest"));
    }
}
