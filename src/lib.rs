//! A minimal interactive command dispatcher.
//!
//! Each line read from a [`LineSource`] is bounded, split on whitespace, and the first
//! token is matched against a fixed set of builtins: `pwd`, `cd`, `ls` and `exit`.
//! Failures are reported on the error stream and never stop the loop.
//!
//! The main entry point is [`Interpreter`]. The public modules [`command`] and [`env`]
//! expose the traits and state commands are written against.

mod builtin;
pub mod command;
pub mod env;
mod interpreter;
mod io_adapters;
mod lexer;
mod parser;

#[cfg(test)]
mod testing;

pub use builtin::{DEFAULT_CD_TARGET, DEFAULT_LS_TARGET};
pub use interpreter::{Interpreter, PROMPT_SUFFIX};
pub use io_adapters::{EditorSource, Input, LineSource, ReaderSource};
pub use lexer::{CommandLine, MAX_LINE, split_into_tokens};
pub use parser::{Invocation, construct_invocation};
