//! The interactive compile-and-run shell.
//!
//! Each completed input line is evaluated speculatively: the session is
//! cloned, the line added, the whole program regenerated, compiled and
//! run. Only a successful run is adopted, and only the output the new run
//! added beyond the previous run's output is printed, so re-executing the
//! accumulated program every time still reads like incremental evaluation.

pub mod command;
pub mod complete;
pub mod session;
pub mod template;
pub mod toolchain;

pub use command::Command;
pub use complete::line_complete;
pub use session::{Location, Session};
pub use toolchain::{LanguageFiles, Toolchain};

use std::env;
use std::fs;
use std::io::{BufRead, Write};
use std::process;

use log::{debug, info};

use crate::error::{CreplError, CreplResult};
use crate::lexer::{Language, Lexer};

pub struct Repl {
    lexer: Lexer,
    toolchain: Toolchain,
    session: Session,
    debug: bool,
    /// Whether to print prompts (off when input is piped).
    pub interactive: bool,
}

impl Repl {
    pub fn new(language: Language, directory: impl Into<std::path::PathBuf>) -> Repl {
        Repl {
            lexer: Lexer::new(language),
            toolchain: Toolchain::new(language, directory),
            session: Session::new(language),
            debug: false,
            interactive: true,
        }
    }

    pub fn language(&self) -> Language {
        self.lexer.language()
    }

    /// Turn debug output on or off (also toggled at runtime by `#debug`).
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Drive the shell until end of input.
    pub fn run(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> CreplResult<()> {
        let directory = self.toolchain.directory().to_path_buf();
        self.set_directory(directory.to_string_lossy().as_ref(), output)?;
        loop {
            let line = match self.get_line(input, output)? {
                Some(line) => line,
                None => {
                    writeln!(output)?;
                    return Ok(());
                }
            };
            if line.trim_start().starts_with('#') {
                self.process_command(&line, output)?;
            } else {
                self.process_line(&line, output)?;
                self.session.location = Location::Auto;
            }
        }
    }

    /// Accumulate input until the buffer forms a complete statement.
    /// Returns `None` at end of input. A buffer the lexer rejects is
    /// reported and discarded.
    fn get_line(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> CreplResult<Option<String>> {
        let mut line = String::new();
        let mut continued = false;
        loop {
            if self.interactive {
                let marker = self.session.location.marker();
                if continued {
                    write!(output, "{marker}...> ")?;
                } else {
                    write!(output, "{marker}{:03}> ", self.session.size() + 1)?;
                }
                output.flush()?;
            }
            let mut part = String::new();
            if input.read_line(&mut part)? == 0 {
                return Ok(None);
            }
            line.push_str(&part);
            match line_complete(&self.lexer, &line) {
                Ok(true) => return Ok(Some(line)),
                Ok(false) => continued = true,
                Err(err @ (CreplError::Malformed | CreplError::UnbalancedBrace)) => {
                    writeln!(output, "input doesn't lex: {err}")?;
                    line.clear();
                    continued = false;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn process_command(&mut self, line: &str, output: &mut dyn Write) -> CreplResult<()> {
        let Some(command) = command::parse(line) else {
            writeln!(output, "Unrecognized command: {}", line.trim())?;
            return Ok(());
        };
        debug!("command: {command:?}");
        match command {
            Command::Arguments(arguments) => self.session.arguments = arguments,
            Command::Class => self.session.location = Location::Class,
            Command::Header => self.session.location = Location::Header,
            Command::Main => self.session.location = Location::Main,
            Command::Debug => {
                self.debug = !self.debug;
                writeln!(output, "debug {}", if self.debug { "on" } else { "off" })?;
            }
            Command::Delete(lineno) => {
                if let Err(message) = self.session.delete(lineno) {
                    writeln!(output, "couldn't delete line {lineno}: {message}")?;
                } else if self.session.size() == 0 {
                    self.session.output.clear();
                }
            }
            Command::Directory(directory) => self.set_directory(&directory, output)?,
            Command::Help => write!(output, "{}", command::HELP)?,
            Command::Include(header) => self.include_header(&header, output)?,
            Command::Library(name) => {
                if let Err(err) = self.edit_library(&name, output) {
                    writeln!(output, "{err}")?;
                }
            }
            Command::List => write!(output, "{}", self.session.list())?,
            Command::RmLibrary(name) => {
                if let Err(err) = self.rm_library(&name) {
                    writeln!(output, "{err}")?;
                }
            }
        }
        Ok(())
    }

    /// Evaluate a program line speculatively; adopt the grown session only
    /// if it compiles and runs.
    fn process_line(&mut self, line: &str, output: &mut dyn Write) -> CreplResult<()> {
        let mut candidate = self.session.clone();
        candidate.add(line, self.session.location);
        match self.evaluate(&candidate, output) {
            Ok(run_output) => {
                self.print_new_output(&run_output, output)?;
                candidate.output = run_output;
                self.session = candidate;
                Ok(())
            }
            Err(err @ (CreplError::Compilation { .. } | CreplError::Execution { .. })) => {
                writeln!(output, "{err}")?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Write the generated source, compile it against the session's
    /// libraries, and run it.
    fn evaluate(&self, candidate: &Session, output: &mut dyn Write) -> CreplResult<String> {
        let source = template::render_main(candidate);
        let source_path = self.toolchain.source_path();
        if self.debug {
            writeln!(output, "DEBUG source:\n{source}")?;
        }
        fs::write(&source_path, source)?;
        self.toolchain.compile_executable(&candidate.libraries)?;
        self.toolchain.run_executable(&candidate.arguments)
    }

    /// Print only what the new run added beyond the previous run's output.
    /// When the new output is not an extension of the old (the program's
    /// earlier behavior changed), print all of it.
    fn print_new_output(&self, run_output: &str, output: &mut dyn Write) -> CreplResult<()> {
        let fresh = match run_output.strip_prefix(self.session.output.as_str()) {
            Some(suffix) => suffix,
            None => run_output,
        };
        output.write_all(fresh.as_bytes())?;
        if !fresh.is_empty() && !fresh.ends_with('\n') {
            writeln!(output)?;
        }
        Ok(())
    }

    /// Switch the project directory. The session is cleared and any
    /// compiled libraries and headers already in the directory are
    /// picked up.
    fn set_directory(&mut self, directory: &str, output: &mut dyn Write) -> CreplResult<()> {
        fs::create_dir_all(directory)?;
        let language = self.language();
        self.toolchain = Toolchain::new(language, directory);
        self.session.clear();
        let object_suffix = format!(".{}", language.object_suffix());
        for name in directory_entries(directory)? {
            if name.ends_with(&object_suffix) {
                self.session.libraries.push(name);
            } else if let Some(header_suffix) = language.header_suffix() {
                if name.ends_with(&format!(".{header_suffix}")) {
                    self.session.header_lines.push(name);
                }
            }
        }
        if !self.session.libraries.is_empty() {
            writeln!(output, "Using libraries: {}", self.session.libraries.join(" "))?;
        }
        if !self.session.header_lines.is_empty() {
            writeln!(output, "Using headers: {}", self.session.header_lines.join(" "))?;
        }
        info!("project directory: {directory}");
        Ok(())
    }

    /// `#include H`: keep the new header only if the program still
    /// compiles with it.
    fn include_header(&mut self, header: &str, output: &mut dyn Write) -> CreplResult<()> {
        let mut candidate = self.session.clone();
        if !candidate.header_lines.iter().any(|h| h == header) {
            candidate.header_lines.push(header.to_string());
        }
        let source = template::render_main(&candidate);
        fs::write(self.toolchain.source_path(), source)?;
        match self.toolchain.compile_executable(&candidate.libraries) {
            Ok(_) => {
                self.session = candidate;
                Ok(())
            }
            Err(CreplError::Compilation { .. }) => {
                writeln!(output, "failed to include {header}")?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// `#library L`: open the library source (and header, where the
    /// language has headers) in the user's editor, then compile and link
    /// it into the session.
    fn edit_library(&mut self, name: &str, output: &mut dyn Write) -> CreplResult<()> {
        let language = self.language();
        let base = library_base_name(name, language)
            .ok_or_else(|| CreplError::LibraryEdit(format!("bad name: {name}")))?;
        let source = format!("{base}.{}", language.source_suffix());
        let header = language.header_suffix().map(|s| format!("{base}.{s}"));

        let mut files = vec![self.toolchain.directory().join(&source)];
        if let Some(h) = &header {
            files.push(self.toolchain.directory().join(h));
        }
        let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
        let status = process::Command::new(&editor).args(&files).status()?;
        if !status.success() {
            return Err(CreplError::LibraryEdit(format!("{editor} exited unsuccessfully")));
        }
        if !files.iter().all(|f| f.exists()) {
            writeln!(output, "no library created")?;
            return Ok(());
        }

        let object = self.toolchain.compile_library(&source)?;
        if !self.session.libraries.contains(&object) {
            self.session.libraries.push(object);
        }
        if let Some(h) = header {
            if !self.session.header_lines.contains(&h) {
                self.session.header_lines.push(h);
            }
        }
        Ok(())
    }

    /// `#rm-library L`: delete the library's files and drop it from the
    /// session.
    fn rm_library(&mut self, name: &str) -> CreplResult<()> {
        let language = self.language();
        let base = library_base_name(name, language)
            .ok_or_else(|| CreplError::LibraryEdit(format!("bad name: {name}")))?;
        let source = format!("{base}.{}", language.source_suffix());
        let object = self.toolchain.source_to_object(&source);
        remove_if_present(&self.toolchain.directory().join(&source))?;
        self.session.libraries.retain(|l| l != &object);
        if let Some(suffix) = language.header_suffix() {
            let header = format!("{base}.{suffix}");
            remove_if_present(&self.toolchain.directory().join(&header))?;
            self.session.header_lines.retain(|h| h != &header);
        }
        Ok(())
    }
}

/// Strip a known source or header suffix off a library name; any other dot
/// suffix is rejected.
fn library_base_name(name: &str, language: Language) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    let mut suffixes = vec![language.source_suffix()];
    if let Some(h) = language.header_suffix() {
        suffixes.push(h);
    }
    match name.rsplit_once('.') {
        None => Some(name.to_string()),
        Some((base, suffix)) if !base.is_empty() && suffixes.contains(&suffix) => {
            Some(base.to_string())
        }
        Some(_) => None,
    }
}

fn directory_entries(directory: &str) -> CreplResult<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(directory)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

fn remove_if_present(path: &std::path::Path) -> CreplResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
