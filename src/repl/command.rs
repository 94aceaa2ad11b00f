//! Shell command parsing.
//!
//! Command lines start with `#`. Command names may be abbreviated to any
//! unambiguous prefix, with just enough characters required to tell
//! overlapping names apart (`#deb` for debug versus `#de 3` for delete,
//! `#hea` versus `#hel`). An abbreviation that fits no command, or a
//! command with a malformed argument, parses to nothing and is reported
//! as unrecognized.

/// A parsed `#` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the program arguments for subsequent runs.
    Arguments(String),
    /// Place the next line in the class body.
    Class,
    /// Toggle debug output.
    Debug,
    /// Delete the numbered session line.
    Delete(usize),
    /// Switch the project directory, clearing the session.
    Directory(String),
    /// Place the next line ahead of all definitions.
    Header,
    Help,
    /// Add a header to the includes, keeping it only if it compiles.
    Include(String),
    /// Create or edit a library source and link it in.
    Library(String),
    /// List the buffered session lines.
    List,
    /// Place the next line in the main body.
    Main,
    /// Remove a library and its files.
    RmLibrary(String),
}

fn abbreviates(word: &str, full: &str, min: usize) -> bool {
    word.len() >= min && full.starts_with(word)
}

/// Parse a command line. The caller has already established that the line
/// starts with `#`.
pub fn parse(line: &str) -> Option<Command> {
    let stripped = line.trim().strip_prefix('#')?;
    let (word, arg) = match stripped.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (stripped, ""),
    };

    // "args" is the conventional short form even though it is not a prefix
    // of "arguments".
    if word == "args" || abbreviates(word, "arguments", 1) {
        return Some(Command::Arguments(arg.to_string()));
    }
    if abbreviates(word, "class", 1) && arg.is_empty() {
        return Some(Command::Class);
    }
    if abbreviates(word, "debug", 3) && arg.is_empty() {
        return Some(Command::Debug);
    }
    if abbreviates(word, "delete", 2) {
        if let Ok(lineno) = arg.parse() {
            return Some(Command::Delete(lineno));
        }
    }
    if abbreviates(word, "directory", 2) && !arg.is_empty() {
        return Some(Command::Directory(arg.to_string()));
    }
    if abbreviates(word, "header", 3) && arg.is_empty() {
        return Some(Command::Header);
    }
    if abbreviates(word, "help", 3) && arg.is_empty() {
        return Some(Command::Help);
    }
    if abbreviates(word, "include", 1) && !arg.is_empty() {
        return Some(Command::Include(arg.to_string()));
    }
    if abbreviates(word, "library", 3) && !arg.is_empty() {
        return Some(Command::Library(arg.to_string()));
    }
    if abbreviates(word, "list", 3) && arg.is_empty() {
        return Some(Command::List);
    }
    if abbreviates(word, "main", 1) && arg.is_empty() {
        return Some(Command::Main);
    }
    if (abbreviates(word, "rm-library", 4) || abbreviates(word, "remove-library", 8))
        && !arg.is_empty()
    {
        return Some(Command::RmLibrary(arg.to_string()));
    }
    None
}

/// The `#help` text.
pub const HELP: &str = "\
#arguments         Set the command line arguments.  Type them separated by whitespace as
                   if you were invoking the command from a shell.
#class             Put the following line outside the main method, but inside class body.
                   For C, C++, and Objective C, the line is put outside the main function
                   and after the header lines.
#delete  <LINE_NO> Delete the indicated line number
#dir     <DIR>     Change to indicated directory.  This clears the session.
#header            Put the following line outside the class body.  For C, C++, and
                   Objective C, the line goes ahead of all function definitions.
#help              Display this menu
#include <HEADER>  Include the indicated header file.
#library <LIBRARY> Edit the indicated library.
#list              List all header lines, class lines, and main lines.
#main              Put the following line inside the main method.  Normally it is not
                   necessary to specify this; will override built-in logic for determing
                   line position.
#rm-lib  <LIBRARY> Remove the indicated library.
";

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("#arguments foo bar", Command::Arguments("foo bar".into()))]
    #[test_case("#args", Command::Arguments(String::new()))]
    #[test_case("#args -n 5", Command::Arguments("-n 5".into()))]
    #[test_case("#a x", Command::Arguments("x".into()))]
    #[test_case("#class", Command::Class)]
    #[test_case("#c", Command::Class)]
    #[test_case("#deb", Command::Debug)]
    #[test_case("#delete 3", Command::Delete(3))]
    #[test_case("#de 12", Command::Delete(12))]
    #[test_case("#dir /tmp/scratch", Command::Directory("/tmp/scratch".into()))]
    #[test_case("#hea", Command::Header)]
    #[test_case("#hel", Command::Help)]
    #[test_case("#include <stdio.h>", Command::Include("<stdio.h>".into()))]
    #[test_case("#i \"util.h\"", Command::Include("\"util.h\"".into()))]
    #[test_case("#library util", Command::Library("util".into()))]
    #[test_case("#list", Command::List)]
    #[test_case("#m", Command::Main)]
    #[test_case("#rm-lib util", Command::RmLibrary("util".into()))]
    #[test_case("#remove-library util", Command::RmLibrary("util".into()))]
    fn parses(line: &str, expected: Command) {
        assert_eq!(parse(line), Some(expected));
    }

    #[test_case("#h" ; "ambiguous header or help")]
    #[test_case("#de" ; "delete without a line number")]
    #[test_case("#delete three" ; "delete with a bad line number")]
    #[test_case("#class extra" ; "class takes no argument")]
    #[test_case("#frobnicate" ; "unknown command")]
    #[test_case("#library" ; "library without a name")]
    fn rejects(line: &str) {
        assert_eq!(parse(line), None);
    }
}
