use crate::command::{CommandFactory, ExecutableCommand, ExitCode, STATUS_FAILURE};
use crate::env::Environment;
use crate::interpreter::Factory;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Target of `cd` without operands. Passed to the OS literally, without tilde expansion.
pub const DEFAULT_CD_TARGET: &str = "~";

/// Directory listed by `ls` without operands.
pub const DEFAULT_LS_TARGET: &str = ".";

/// Built-in commands known to the shell at compile time.
///
/// Builtins are executed directly in-process. Operands reach them exactly as tokenized:
/// nothing is treated as a flag, so `cd -d` or `ls help` name paths like any other word.
pub(crate) trait BuiltinCommand: Sized {
    /// Canonical name of the command, e.g. "pwd" or "cd".
    fn name() -> &'static str;

    /// Builds the command from the tokens that followed its name.
    fn from_operands(args: &[&str]) -> Self;

    /// Executes the command using the provided output streams and environment.
    ///
    /// Return value should follow shell conventions: 0 for success, non-zero for error.
    fn execute(
        self,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        match <T as BuiltinCommand>::execute(*self, stdout, stderr, env) {
            Ok(x) => Ok(x),
            Err(e) => {
                writeln!(stderr, "{:#}", e)?;
                Ok(STATUS_FAILURE)
            }
        }
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(
        &self,
        _env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(Box::new(T::from_operands(args)))
        } else {
            None
        }
    }
}

/// First operand, if any, as an owned path string.
fn first_operand(args: &[&str]) -> Option<String> {
    args.first().map(|s| s.to_string())
}

/// Print the current working directory to standard output. Operands are ignored.
pub struct Pwd;

impl BuiltinCommand for Pwd {
    fn name() -> &'static str {
        "pwd"
    }

    fn from_operands(_args: &[&str]) -> Self {
        Pwd
    }

    fn execute(
        self,
        stdout: &mut dyn Write,
        _stderr: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let cwd = env.current_dir().context("pwd")?;
        writeln!(stdout, "{}", cwd.display())?;
        Ok(0)
    }
}

/// Change the current working directory.
/// Without a target the literal path `~` is tried; no tilde expansion is performed.
pub struct Cd {
    /// directory to switch to; extra operands are dropped.
    pub target: Option<String>,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    fn from_operands(args: &[&str]) -> Self {
        Cd {
            target: first_operand(args),
        }
    }

    fn execute(
        self,
        _stdout: &mut dyn Write,
        _stderr: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let target = self.target.as_deref().unwrap_or(DEFAULT_CD_TARGET);

        env.set_current_dir(Path::new(target))
            .with_context(|| format!("cd: {}", target))?;
        Ok(0)
    }
}

/// List directory entries, one per line, in the order the filesystem returns them.
pub struct Ls {
    /// directory to list; extra operands are dropped.
    pub path: Option<String>,
}

impl BuiltinCommand for Ls {
    fn name() -> &'static str {
        "ls"
    }

    fn from_operands(args: &[&str]) -> Self {
        Ls {
            path: first_operand(args),
        }
    }

    fn execute(
        self,
        stdout: &mut dyn Write,
        _stderr: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        let path = self.path.as_deref().unwrap_or(DEFAULT_LS_TARGET);

        let entries = fs::read_dir(path).with_context(|| format!("ls: {}", path))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("ls: {}", path))?;
            writeln!(stdout, "{}", entry.file_name().to_string_lossy())?;
        }
        Ok(0)
    }
}

/// Exit the shell. Trailing tokens are ignored; the shell always exits with status 0.
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn from_operands(_args: &[&str]) -> Self {
        Exit
    }

    fn execute(
        self,
        _stdout: &mut dyn Write,
        _stderr: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        env.should_exit = true;
        Ok(0)
    }
}
