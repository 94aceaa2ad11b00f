//! Unified error handling for crepl.
//!
//! The lexer itself reports recoverable conditions through terminal tokens
//! (`Open`, `Error`), never through this type. `CreplError` covers everything
//! that must abort or be reported at the shell boundary: bad language tags,
//! internal consistency failures, brace mismatches, and toolchain failures.

use thiserror::Error;

/// Errors surfaced by the crepl library.
#[derive(Error, Debug)]
pub enum CreplError {
    /// The language tag given at startup names no known profile.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Two successive lexer calls consumed nothing. This indicates a
    /// misconfigured language profile, not bad user input, and must abort
    /// rather than spin.
    #[error("lexer made no progress on input {0:?}; this is a bug in the language profile")]
    NoProgress(String),

    /// A close brace appeared before any matching open brace. Reported
    /// immediately; the buffer is never retried.
    #[error("close brace without a preceding open brace")]
    UnbalancedBrace,

    /// The buffered input contains a malformed literal that no amount of
    /// further input can repair.
    #[error("input does not lex: malformed string or character literal")]
    Malformed,

    /// An external compiler exited unsuccessfully.
    #[error("compilation failed:\n{output}")]
    Compilation { output: String },

    /// The compiled program exited unsuccessfully.
    #[error("execution failed:\n{output}")]
    Execution { output: String },

    /// A library source could not be created or compiled.
    #[error("library edit failed: {0}")]
    LibraryEdit(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type CreplResult<T> = Result<T, CreplError>;
