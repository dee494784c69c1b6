use crate::env::Environment;
use anyhow::Result;
use std::io::Write;

/// Conventional status code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// Statuses are recorded per command and never become the process exit code.
pub type ExitCode = i32;

/// Status of a builtin that reported an error.
pub const STATUS_FAILURE: ExitCode = 1;

/// Status of a name that no factory recognised.
pub const STATUS_NOT_FOUND: ExitCode = 127;

/// Object-safe trait for any command that can be executed by the shell.
///
/// This is implemented by built-ins via a blanket impl.
pub trait ExecutableCommand {
    /// Executes the command, writing regular output to `stdout` and diagnostics to `stderr`.
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode>;
}

/// Factory that tries to create a command from a name and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `name`.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided name and arguments.
    fn try_create(
        &self,
        env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>>;
}
