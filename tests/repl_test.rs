//! Shell loop tests that stay on the command path, so no external
//! compiler is needed.

use std::fs;
use std::io::Cursor;

use crepl::lexer::Language;
use crepl::repl::Repl;
use tempfile::tempdir;

/// Feed `input` to a non-interactive shell in a scratch directory and
/// return what it wrote.
fn shell_output(language: Language, input: &str) -> String {
    let dir = tempdir().expect("scratch directory");
    let mut repl = Repl::new(language, dir.path());
    repl.interactive = false;
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut writer: Vec<u8> = Vec::new();
    repl.run(&mut reader, &mut writer).expect("repl run");
    String::from_utf8(writer).expect("utf8 output")
}

#[test]
fn help_lists_the_commands() {
    let output = shell_output(Language::C, "#help\n");
    assert!(output.contains("#arguments"));
    assert!(output.contains("#include <HEADER>"));
    assert!(output.contains("#list"));
}

#[test]
fn unrecognized_commands_are_reported() {
    let output = shell_output(Language::C, "#frobnicate\n");
    assert!(output.contains("Unrecognized command: #frobnicate"));
}

#[test]
fn delete_out_of_range_is_reported() {
    let output = shell_output(Language::C, "#delete 5\n");
    assert!(output.contains("couldn't delete line 5"));
}

#[test]
fn list_is_empty_for_a_fresh_session() {
    let output = shell_output(Language::Java, "#list\n");
    // only the trailing newline printed at end of input
    assert_eq!(output, "\n");
}

#[test]
fn debug_toggles() {
    let output = shell_output(Language::C, "#debug\n#debug\n");
    assert!(output.contains("debug on"));
    assert!(output.contains("debug off"));
}

#[test]
fn existing_objects_and_headers_are_picked_up() {
    let dir = tempdir().expect("scratch directory");
    fs::write(dir.path().join("util.o"), b"").expect("object file");
    fs::write(dir.path().join("util.h"), b"").expect("header file");
    fs::write(dir.path().join("notes.txt"), b"").expect("stray file");

    let mut repl = Repl::new(Language::C, dir.path());
    repl.interactive = false;
    let mut reader = Cursor::new(b"#list\n".to_vec());
    let mut writer: Vec<u8> = Vec::new();
    repl.run(&mut reader, &mut writer).expect("repl run");
    let output = String::from_utf8(writer).expect("utf8 output");

    assert!(output.contains("Using libraries: util.o"));
    assert!(output.contains("Using headers: util.h"));
    assert!(output.contains("001> util.h"));
    assert!(!output.contains("notes.txt"));
}

#[test]
fn class_files_count_as_java_objects() {
    let dir = tempdir().expect("scratch directory");
    fs::write(dir.path().join("Util.class"), b"").expect("class file");

    let mut repl = Repl::new(Language::Java, dir.path());
    repl.interactive = false;
    let mut reader = Cursor::new(b"".to_vec());
    let mut writer: Vec<u8> = Vec::new();
    repl.run(&mut reader, &mut writer).expect("repl run");
    let output = String::from_utf8(writer).expect("utf8 output");

    assert!(output.contains("Using libraries: Util.class"));
    assert!(!output.contains("Using headers"));
}

#[test]
fn interactive_prompts_show_location_and_line_number() {
    let dir = tempdir().expect("scratch directory");
    let mut repl = Repl::new(Language::C, dir.path());
    repl.interactive = true;
    let mut reader = Cursor::new(b"#class\n#list\n".to_vec());
    let mut writer: Vec<u8> = Vec::new();
    repl.run(&mut reader, &mut writer).expect("repl run");
    let output = String::from_utf8(writer).expect("utf8 output");

    // fresh prompt, then the class-location prompt after #class
    assert!(output.contains(" 001> "));
    assert!(output.contains("C001> "));
}

#[test]
fn lexically_broken_buffers_are_discarded() {
    let output = shell_output(Language::C, "int c = '\\q';\n#list\n");
    assert!(output.contains("input doesn't lex"));
}
