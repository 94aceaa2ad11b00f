//! Accumulated program state for one shell session.
//!
//! A session is three ordered line buffers (header, class body, main body)
//! plus the libraries, program arguments and the output of the last
//! successful run. Evaluation is speculative: the shell clones the session,
//! adds the new line to the clone, and only adopts the clone if the
//! compile-and-run succeeds, so a bad line never corrupts the session.

use crate::lexer::Language;

/// Where the next input line is spliced into the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    /// Decide by the placement heuristics.
    #[default]
    Auto,
    /// Ahead of all definitions (`#header`).
    Header,
    /// Inside the class body but outside main (`#class`).
    Class,
    /// Inside the main method (`#main`).
    Main,
}

impl Location {
    /// One-character marker shown in the prompt.
    pub fn marker(self) -> char {
        match self {
            Location::Auto => ' ',
            Location::Header => 'H',
            Location::Class => 'C',
            Location::Main => 'M',
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    language: Language,
    pub header_lines: Vec<String>,
    pub class_lines: Vec<String>,
    pub main_lines: Vec<String>,
    /// Compiled library object files, by basename.
    pub libraries: Vec<String>,
    /// Program arguments passed verbatim on the run command line.
    pub arguments: String,
    /// Output of the last successful run, for incremental diffing.
    pub output: String,
    /// Placement override for the next added line.
    pub location: Location,
}

impl Session {
    pub fn new(language: Language) -> Session {
        Session {
            language,
            header_lines: Vec::new(),
            class_lines: Vec::new(),
            main_lines: Vec::new(),
            libraries: Vec::new(),
            arguments: String::new(),
            output: String::new(),
            location: Location::Auto,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn clear(&mut self) {
        self.header_lines.clear();
        self.class_lines.clear();
        self.main_lines.clear();
        self.libraries.clear();
        self.arguments.clear();
        self.output.clear();
        self.location = Location::Auto;
    }

    /// Total number of buffered lines across the three buffers.
    pub fn size(&self) -> usize {
        self.header_lines.len() + self.class_lines.len() + self.main_lines.len()
    }

    /// Add a line at `location`, applying the placement heuristics when
    /// the location is `Auto`.
    pub fn add(&mut self, line: &str, location: Location) {
        let buffer = match location {
            Location::Auto => {
                if self.is_header_line(line) {
                    &mut self.header_lines
                } else if self.is_class_line(line) {
                    &mut self.class_lines
                } else {
                    &mut self.main_lines
                }
            }
            Location::Header => &mut self.header_lines,
            Location::Class => &mut self.class_lines,
            Location::Main => &mut self.main_lines,
        };
        buffer.push(line.to_string());
    }

    /// Java `import` and C# `using` lines belong ahead of the class.
    fn is_header_line(&self, line: &str) -> bool {
        let header_word = match self.language {
            Language::Java => "import",
            Language::CSharp => "using",
            _ => return false,
        };
        line.split_whitespace().next() == Some(header_word)
    }

    /// Enum declarations are illegal inside a method body in Java and C#;
    /// they go into the class body.
    fn is_class_line(&self, line: &str) -> bool {
        let mut words = line.split_whitespace();
        match self.language {
            Language::Java => match words.next() {
                Some("public") | Some("protected") | Some("private") => {
                    words.next() == Some("enum")
                }
                _ => false,
            },
            Language::CSharp => match words.next() {
                Some("public") => words.next() == Some("enum"),
                Some("enum") => true,
                _ => false,
            },
            _ => false,
        }
    }

    /// Numbered listing of all buffered lines, header lines first.
    /// Multi-line entries keep one line number for the whole entry.
    pub fn list(&self) -> String {
        let mut listing = String::new();
        let mut lineno = 1;
        let buffers = [&self.header_lines, &self.class_lines, &self.main_lines];
        for buffer in buffers {
            for entry in buffer.iter() {
                for (i, line) in entry.split('\n').enumerate() {
                    if i == 0 {
                        listing.push_str(&format!("{lineno:03}> {line}\n"));
                    } else {
                        listing.push_str(&format!("...> {line}\n"));
                    }
                }
                lineno += 1;
            }
        }
        listing
    }

    /// Delete the buffered line with the given 1-based number, counting
    /// across the three buffers in listing order.
    pub fn delete(&mut self, lineno: usize) -> Result<(), String> {
        if lineno == 0 {
            return Err("line number must be positive".to_string());
        }
        let mut index = lineno - 1;
        let buffers = [
            &mut self.header_lines,
            &mut self.class_lines,
            &mut self.main_lines,
        ];
        for buffer in buffers {
            if index < buffer.len() {
                buffer.remove(index);
                return Ok(());
            }
            index -= buffer.len();
        }
        Err(format!("no line numbered {lineno}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn auto_placement_defaults_to_main() {
        let mut sess = Session::new(Language::C);
        sess.add("int x = 1;", Location::Auto);
        assert_eq!(sess.main_lines, vec!["int x = 1;"]);
        assert!(sess.header_lines.is_empty());
    }

    #[test]
    fn java_imports_go_to_header() {
        let mut sess = Session::new(Language::Java);
        sess.add("import java.util.List;", Location::Auto);
        sess.add("int x = 1;", Location::Auto);
        assert_eq!(sess.header_lines, vec!["import java.util.List;"]);
        assert_eq!(sess.main_lines, vec!["int x = 1;"]);
    }

    #[test]
    fn csharp_using_goes_to_header() {
        let mut sess = Session::new(Language::CSharp);
        sess.add("using System.Text;", Location::Auto);
        assert_eq!(sess.header_lines, vec!["using System.Text;"]);
    }

    #[test]
    fn enum_declarations_go_to_class_body() {
        let mut sess = Session::new(Language::Java);
        sess.add("public enum Suit { CLUBS, SPADES }", Location::Auto);
        assert_eq!(sess.class_lines.len(), 1);
        assert!(sess.main_lines.is_empty());

        let mut sess = Session::new(Language::CSharp);
        sess.add("enum Suit { Clubs, Spades }", Location::Auto);
        assert_eq!(sess.class_lines.len(), 1);

        // C has no class body heuristics
        let mut sess = Session::new(Language::C);
        sess.add("enum suit { CLUBS, SPADES };", Location::Auto);
        assert_eq!(sess.main_lines.len(), 1);
    }

    #[test]
    fn explicit_location_overrides_heuristics() {
        let mut sess = Session::new(Language::Java);
        sess.add("import java.util.List;", Location::Main);
        assert_eq!(sess.main_lines, vec!["import java.util.List;"]);
    }

    #[test]
    fn listing_numbers_entries_across_buffers() {
        let mut sess = Session::new(Language::C);
        sess.add("int x = 1;", Location::Auto);
        sess.add("typedef int myint;", Location::Header);
        sess.add("for (;;) {\n  break;\n}", Location::Auto);
        assert_eq!(
            sess.list(),
            "001> typedef int myint;\n\
             002> int x = 1;\n\
             003> for (;;) {\n\
             ...>   break;\n\
             ...> }\n"
        );
    }

    #[test]
    fn delete_counts_in_listing_order() {
        let mut sess = Session::new(Language::C);
        sess.add("typedef int myint;", Location::Header);
        sess.add("int x = 1;", Location::Auto);
        sess.add("int y = 2;", Location::Auto);
        sess.delete(2).unwrap();
        assert_eq!(sess.main_lines, vec!["int y = 2;"]);
        assert_eq!(sess.header_lines.len(), 1);

        assert!(sess.delete(0).is_err());
        assert!(sess.delete(9).is_err());
        assert_eq!(sess.size(), 2);
    }
}
