//! Per-language grammar tables.
//!
//! A [`LanguageProfile`] is the immutable bundle the tokenizer engine is
//! configured with: pattern matchers for identifiers and numeric literals,
//! punctuator tables by graph length, the keyword set, the unique-token
//! map, and the escape-rule variant. Profiles come in two families that
//! share almost everything: the C family (C, C++, Objective-C) and the
//! Java family (Java, C#). Objective-C additionally enables `@` directive
//! handling.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::CreplError;
use crate::lexer::patterns::{
    c_float, c_hex_float, c_identifier, c_integer, java_float, java_hex_float, java_identifier,
    java_integer, Matcher,
};
use crate::lexer::punctuator::PunctuatorTables;

/// The languages the shell can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    Cpp,
    ObjectiveC,
    Java,
    CSharp,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::C,
        Language::Cpp,
        Language::ObjectiveC,
        Language::Java,
        Language::CSharp,
    ];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::C => "C",
            Language::Cpp => "C++",
            Language::ObjectiveC => "Objective-C",
            Language::Java => "Java",
            Language::CSharp => "C#",
        };
        f.write_str(name)
    }
}

impl FromStr for Language {
    type Err = CreplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Language::C),
            "c++" | "cpp" => Ok(Language::Cpp),
            "objective-c" | "objc" => Ok(Language::ObjectiveC),
            "java" => Ok(Language::Java),
            "c#" | "csharp" => Ok(Language::CSharp),
            _ => Err(CreplError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Which escape and literal rules the quoted-literal sub-lexers apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeStyle {
    /// C-style character literals: multi-character bodies, `\x` hex and
    /// greedy octal escapes.
    C,
    /// Java-style character literals: exactly one logical character,
    /// `\uXXXX` escapes, range-bound octal escapes.
    Java,
}

/// Everything the tokenizer engine needs to know about one language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub language: Language,
    pub identifier: Matcher,
    pub integer: Matcher,
    pub float: Matcher,
    pub hex_float: Matcher,
    pub punctuators: PunctuatorTables,
    pub escape_style: EscapeStyle,
    /// Whether `@identifier` and `@"..."` forms are recognized.
    pub directives_enabled: bool,
    keywords: HashSet<&'static str>,
    uniques: HashMap<&'static str, &'static str>,
    directives: HashSet<&'static str>,
}

// C99 reserved words.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Bool", "_Complex", "_Imaginary",
];

// Keywords C++ adds on top of the C set.
const CPP_EXTRA_KEYWORDS: &[&str] = &[
    "asm", "bool", "catch", "class", "const_cast", "delete", "dynamic_cast", "explicit",
    "export", "false", "friend", "mutable", "namespace", "new", "operator", "private",
    "protected", "public", "reinterpret_cast", "static_cast", "template", "this", "throw",
    "true", "try", "typeid", "typename", "using", "virtual", "wchar_t",
];

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while",
];

const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "finally", "fixed", "float", "for", "foreach",
    "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock", "long",
    "namespace", "new", "object", "operator", "out", "override", "params", "private",
    "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof",
    "stackalloc", "static", "string", "struct", "switch", "this", "throw", "try", "typeof",
    "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual", "void", "volatile",
    "while",
];

// Objective-C `@` directive names, stored without the `@` prefix.
const OBJC_DIRECTIVES: &[&str] = &[
    "interface", "implementation", "protocol", "end", "class", "selector", "encode",
    "synchronized", "try", "catch", "finally", "throw", "property", "synthesize", "dynamic",
    "optional", "required", "private", "protected", "public", "package", "autoreleasepool",
];

// Bareword pseudo-keywords that get their own token tag.
const OBJC_UNIQUES: &[&str] = &[
    "self", "super", "nil", "Nil", "YES", "NO", "BOOL", "id", "SEL", "IMP",
];

const JAVA_FAMILY_UNIQUES: &[&str] = &["true", "false", "null"];

const MONOGRAPHS: &[&str] = &[
    ";", ",", ".", ":", "?", "~", "!", "%", "^", "&", "*", "-", "+", "=", "|", "<", ">", "/",
    "#", "(", ")", "{", "}", "[", "]", "@",
];

const DIGRAPHS: &[&str] = &[
    "++", "--", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "&=", "^=", "|=", "&&",
    "||", "->", "::", "<<", ">>",
];

const C_TRIGRAPHS: &[&str] = &["<<=", ">>=", "..."];

const JAVA_TRIGRAPHS: &[&str] = &["<<=", ">>=", "...", ">>>"];

const JAVA_QUADGRAPHS: &[&str] = &[">>>="];

impl LanguageProfile {
    pub fn new(language: Language) -> LanguageProfile {
        match language {
            Language::C => Self::c_family(language, C_KEYWORDS.iter().copied().collect(), &[]),
            Language::Cpp => {
                let keywords = C_KEYWORDS
                    .iter()
                    .chain(CPP_EXTRA_KEYWORDS)
                    .copied()
                    .collect();
                Self::c_family(language, keywords, &[])
            }
            Language::ObjectiveC => {
                let mut profile =
                    Self::c_family(language, C_KEYWORDS.iter().copied().collect(), OBJC_UNIQUES);
                profile.directives_enabled = true;
                profile.directives = OBJC_DIRECTIVES.iter().copied().collect();
                profile
            }
            Language::Java => Self::java_family(
                language,
                JAVA_KEYWORDS.iter().copied().collect(),
                JAVA_FAMILY_UNIQUES,
            ),
            Language::CSharp => Self::java_family(
                language,
                CSHARP_KEYWORDS.iter().copied().collect(),
                JAVA_FAMILY_UNIQUES,
            ),
        }
    }

    fn c_family(
        language: Language,
        keywords: HashSet<&'static str>,
        uniques: &[&'static str],
    ) -> LanguageProfile {
        LanguageProfile {
            language,
            identifier: c_identifier,
            integer: c_integer,
            float: c_float,
            hex_float: c_hex_float,
            punctuators: [MONOGRAPHS, DIGRAPHS, C_TRIGRAPHS, &[]],
            escape_style: EscapeStyle::C,
            directives_enabled: false,
            keywords,
            uniques: uniques.iter().map(|&s| (s, s)).collect(),
            directives: HashSet::new(),
        }
    }

    fn java_family(
        language: Language,
        keywords: HashSet<&'static str>,
        uniques: &[&'static str],
    ) -> LanguageProfile {
        LanguageProfile {
            language,
            identifier: java_identifier,
            integer: java_integer,
            float: java_float,
            hex_float: java_hex_float,
            punctuators: [MONOGRAPHS, DIGRAPHS, JAVA_TRIGRAPHS, JAVA_QUADGRAPHS],
            escape_style: EscapeStyle::Java,
            directives_enabled: false,
            keywords,
            uniques: uniques.iter().map(|&s| (s, s)).collect(),
            directives: HashSet::new(),
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// The unique-token tag for `word`, if the profile maps it to one.
    pub fn unique_tag(&self, word: &str) -> Option<&'static str> {
        self.uniques.get(word).copied()
    }

    /// Whether `name` (without the `@`) is a known directive keyword.
    pub fn is_directive(&self, name: &str) -> bool {
        self.directives.contains(name)
    }
}
