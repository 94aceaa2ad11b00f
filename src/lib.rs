//! crepl: an interactive compile-and-run shell for C, C++, Objective-C,
//! Java and C#.
//!
//! The core is an incremental lexer that classifies buffered input as
//! complete, unfinished or malformed without parsing it; the shell uses
//! that verdict to decide when to hand the accumulated program to the
//! language's compiler and run it.

pub mod error;
pub mod lexer;
pub mod repl;

pub use error::{CreplError, CreplResult};
pub use lexer::{Language, Lexer, Token};
pub use repl::{Repl, Session};
