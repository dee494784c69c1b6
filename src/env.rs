use crate::command::ExitCode;
use std::env as stdenv;
use std::io;
use std::path::{Path, PathBuf};

/// Mutable state shared by the interpreter and the commands it runs.
///
/// The environment contains:
/// - `should_exit`: a flag the REPL loop checks to know when to terminate.
/// - `last_status`: the status of the most recently executed command.
///
/// The working directory is not stored here. The process owns it, and
/// [`Environment::current_dir`] / [`Environment::set_current_dir`] go straight to the OS.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// When set to true, indicates that an interactive loop should exit.
    pub should_exit: bool,
    /// Status of the last command run through the interpreter.
    pub last_status: ExitCode,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query the process working directory.
    pub fn current_dir(&self) -> io::Result<PathBuf> {
        stdenv::current_dir()
    }

    /// Change the process working directory.
    ///
    /// `path` is passed to the OS as-is: relative paths resolve against the current
    /// directory and no tilde expansion happens.
    pub fn set_current_dir(&mut self, path: &Path) -> io::Result<()> {
        stdenv::set_current_dir(path)
    }
}
