//! A minimal interactive command interpreter.
//!
//! Lines are read from the terminal, split on whitespace into an argument
//! vector and either handled in-process by a builtin (`cd`, `help`, `exit`) or
//! run as a child process that the shell waits for before prompting again.
//! There are no pipelines, redirections, quoting or variable expansion.
//!
//! The main entry point is [`Interpreter`]; [`command`] holds the traits for
//! writing your own builtins and [`io_adapters`] the sources of input lines.

mod builtin;
pub mod command;
mod external;
mod interpreter;
pub mod io_adapters;
mod lexer;
pub mod prompt;

pub use builtin::{BuiltinRegistry, Cd, Exit, Help};
pub use command::{BuiltinCommand, Continuation, Streams};
pub use external::{ChildOutcome, ExternalCommand, LaunchError, launch};
pub use interpreter::Interpreter;
pub use io_adapters::{EditorSource, LineSource, ReadOutcome, ReaderSource};
pub use lexer::{DELIMITERS, split_into_tokens};
