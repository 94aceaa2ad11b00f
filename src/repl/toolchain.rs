//! External compiler and runtime invocation.
//!
//! Every language is driven through the same three operations: compile the
//! generated main source to an executable, compile a library source, and
//! run the executable. Command lines are built as argument vectors (never
//! through a shell) and logged at debug level before running.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{CreplError, CreplResult};
use crate::lexer::Language;

/// Per-language file name and suffix conventions.
pub trait LanguageFiles {
    fn source_file(self) -> &'static str;
    fn executable_file(self) -> &'static str;
    fn source_suffix(self) -> &'static str;
    fn header_suffix(self) -> Option<&'static str>;
    fn object_suffix(self) -> &'static str;
}

impl LanguageFiles for Language {
    fn source_file(self) -> &'static str {
        match self {
            Language::C => "main.c",
            Language::Cpp => "main.cpp",
            Language::ObjectiveC => "main.m",
            Language::Java => "Main.java",
            Language::CSharp => "Top.cs",
        }
    }

    fn executable_file(self) -> &'static str {
        match self {
            Language::C | Language::Cpp | Language::ObjectiveC => "main",
            Language::Java => "Main",
            Language::CSharp => "Top.exe",
        }
    }

    fn source_suffix(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::ObjectiveC => "m",
            Language::Java => "java",
            Language::CSharp => "cs",
        }
    }

    fn header_suffix(self) -> Option<&'static str> {
        match self {
            Language::C | Language::Cpp | Language::ObjectiveC => Some("h"),
            Language::Java | Language::CSharp => None,
        }
    }

    fn object_suffix(self) -> &'static str {
        match self {
            Language::C | Language::Cpp | Language::ObjectiveC => "o",
            Language::Java => "class",
            Language::CSharp => "dll",
        }
    }
}

/// Builds and runs toolchain commands inside one project directory.
pub struct Toolchain {
    language: Language,
    directory: PathBuf,
}

impl Toolchain {
    pub fn new(language: Language, directory: impl Into<PathBuf>) -> Toolchain {
        Toolchain {
            language,
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn source_path(&self) -> PathBuf {
        self.directory.join(self.language.source_file())
    }

    pub fn executable_path(&self) -> PathBuf {
        self.directory.join(self.language.executable_file())
    }

    /// Map a library source basename to its compiled object basename.
    pub fn source_to_object(&self, source: &str) -> String {
        let suffix = format!(".{}", self.language.source_suffix());
        match source.strip_suffix(&suffix) {
            Some(stem) => format!("{stem}.{}", self.language.object_suffix()),
            None => source.to_string(),
        }
    }

    fn join_str(&self, file: &str) -> String {
        self.directory.join(file).to_string_lossy().into_owned()
    }

    /// The compile command for the generated main source, with the given
    /// compiled libraries linked in.
    pub fn compile_executable_command(&self, libraries: &[String]) -> (String, Vec<String>) {
        let source = self.join_str(self.language.source_file());
        let executable = self.join_str(self.language.executable_file());
        let library_paths: Vec<String> = libraries.iter().map(|l| self.join_str(l)).collect();
        let dir = self.directory.to_string_lossy().into_owned();
        match self.language {
            Language::C | Language::Cpp => {
                let compiler = if self.language == Language::Cpp { "g++" } else { "gcc" };
                let mut args = vec!["-o".to_string(), executable, source];
                args.extend(library_paths);
                (compiler.to_string(), args)
            }
            Language::ObjectiveC => {
                let mut args = Vec::new();
                if cfg!(target_os = "macos") {
                    args.extend(["-framework".to_string(), "Foundation".to_string()]);
                }
                args.extend([source, "-o".to_string(), executable]);
                args.extend(library_paths);
                ("gcc".to_string(), args)
            }
            Language::Java => ("javac".to_string(), vec!["-cp".to_string(), dir, source]),
            Language::CSharp => {
                let mut args = Vec::new();
                if !library_paths.is_empty() {
                    args.push(format!("-reference:{}", library_paths.join(",")));
                }
                args.push(source);
                ("mcs".to_string(), args)
            }
        }
    }

    /// The compile command for a library source basename.
    pub fn compile_library_command(&self, library: &str) -> (String, Vec<String>) {
        let source = self.join_str(library);
        let object = self.join_str(&self.source_to_object(library));
        match self.language {
            Language::C | Language::Cpp | Language::ObjectiveC => {
                let compiler = if self.language == Language::Cpp { "g++" } else { "gcc" };
                (
                    compiler.to_string(),
                    vec!["-c".to_string(), source, "-o".to_string(), object],
                )
            }
            Language::Java => ("javac".to_string(), vec![source]),
            Language::CSharp => (
                "mcs".to_string(),
                vec!["-target:library".to_string(), source],
            ),
        }
    }

    /// The run command, before program arguments are appended.
    pub fn run_command(&self) -> (String, Vec<String>) {
        let executable = self.join_str(self.language.executable_file());
        let dir = self.directory.to_string_lossy().into_owned();
        match self.language {
            Language::C | Language::Cpp | Language::ObjectiveC => (executable, Vec::new()),
            Language::Java => (
                "java".to_string(),
                vec![
                    "-cp".to_string(),
                    dir,
                    self.language.executable_file().to_string(),
                ],
            ),
            Language::CSharp => ("mono".to_string(), vec![executable]),
        }
    }

    /// Compile the generated main source, returning the executable path.
    pub fn compile_executable(&self, libraries: &[String]) -> CreplResult<PathBuf> {
        let (program, args) = self.compile_executable_command(libraries);
        debug!("compile_executable: {program} {}", args.join(" "));
        let output = Command::new(&program).args(&args).output()?;
        if !output.status.success() {
            return Err(CreplError::Compilation {
                output: combined_output(&output),
            });
        }
        Ok(self.executable_path())
    }

    /// Compile a library source, returning the compiled object basename.
    pub fn compile_library(&self, library: &str) -> CreplResult<String> {
        let (program, args) = self.compile_library_command(library);
        debug!("compile_library: {program} {}", args.join(" "));
        let output = Command::new(&program).args(&args).output()?;
        if !output.status.success() {
            return Err(CreplError::Compilation {
                output: combined_output(&output),
            });
        }
        Ok(self.source_to_object(library))
    }

    /// Run the executable with the given whitespace-separated arguments,
    /// returning its standard output.
    pub fn run_executable(&self, arguments: &str) -> CreplResult<String> {
        let (program, mut args) = self.run_command();
        args.extend(arguments.split_whitespace().map(str::to_string));
        debug!("run_executable: {program} {}", args.join(" "));
        let output = Command::new(&program).args(&args).output()?;
        if !output.status.success() {
            return Err(CreplError::Execution {
                output: combined_output(&output),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn combined_output(output: &std::process::Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_conventions() {
        assert_eq!(Language::C.source_file(), "main.c");
        assert_eq!(Language::Java.source_file(), "Main.java");
        assert_eq!(Language::CSharp.executable_file(), "Top.exe");
        assert_eq!(Language::Java.header_suffix(), None);
        assert_eq!(Language::Cpp.header_suffix(), Some("h"));
        assert_eq!(Language::Java.object_suffix(), "class");
    }

    #[test]
    fn object_mapping() {
        let tc = Toolchain::new(Language::C, "/proj");
        assert_eq!(tc.source_to_object("util.c"), "util.o");
        let tc = Toolchain::new(Language::CSharp, "/proj");
        assert_eq!(tc.source_to_object("util.cs"), "util.dll");
    }

    #[test]
    fn c_compile_command_links_libraries() {
        let tc = Toolchain::new(Language::C, "/proj");
        let (program, args) = tc.compile_executable_command(&["util.o".to_string()]);
        assert_eq!(program, "gcc");
        assert_eq!(
            args,
            vec!["-o", "/proj/main", "/proj/main.c", "/proj/util.o"]
        );
    }

    #[test]
    fn java_commands_use_classpath() {
        let tc = Toolchain::new(Language::Java, "/proj");
        let (program, args) = tc.compile_executable_command(&[]);
        assert_eq!(program, "javac");
        assert_eq!(args, vec!["-cp", "/proj", "/proj/Main.java"]);
        let (program, args) = tc.run_command();
        assert_eq!(program, "java");
        assert_eq!(args, vec!["-cp", "/proj", "Main"]);
    }

    #[test]
    fn csharp_references_use_comma_connector() {
        let tc = Toolchain::new(Language::CSharp, "/proj");
        let (program, args) =
            tc.compile_executable_command(&["a.dll".to_string(), "b.dll".to_string()]);
        assert_eq!(program, "mcs");
        assert_eq!(args, vec!["-reference:/proj/a.dll,/proj/b.dll", "/proj/Top.cs"]);
        let (program, args) = tc.run_command();
        assert_eq!(program, "mono");
        assert_eq!(args, vec!["/proj/Top.exe"]);
    }

    #[test]
    fn library_compile_commands() {
        let tc = Toolchain::new(Language::Cpp, "/proj");
        let (program, args) = tc.compile_library_command("util.cpp");
        assert_eq!(program, "g++");
        assert_eq!(args, vec!["-c", "/proj/util.cpp", "-o", "/proj/util.o"]);

        let tc = Toolchain::new(Language::CSharp, "/proj");
        let (program, args) = tc.compile_library_command("util.cs");
        assert_eq!(program, "mcs");
        assert_eq!(args, vec!["-target:library", "/proj/util.cs"]);
    }
}
