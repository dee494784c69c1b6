use crate::command::{CommandFactory, ExitCode, STATUS_NOT_FOUND};
use crate::env::Environment;
use crate::io_adapters::{Input, LineSource};
use crate::lexer::{CommandLine, MAX_LINE};
use crate::parser;
use log::debug;
use std::io::Write;

/// Appended to the working directory to form the prompt.
pub const PROMPT_SUFFIX: &str = "$ ";

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate, i.e. builtins.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// A minimal shell-like interpreter that dispatches lines to builtin commands.
///
/// The interpreter maintains an [`Environment`] and a list of [`CommandFactory`] objects
/// that are queried to create commands by name. See [`Default`] for the builtins
/// included out of the box.
///
/// Example
/// ```
/// use minishell::Interpreter;
/// let mut sh = Interpreter::default();
/// let mut out: Vec<u8> = Vec::new();
/// let mut err: Vec<u8> = Vec::new();
/// let code = sh.run("frobnicate", &[], &mut out, &mut err).unwrap();
/// assert_eq!(code, 127);
/// assert_eq!(String::from_utf8(err).unwrap(), "frobnicate: command not found\n");
/// ```
pub struct Interpreter {
    env: Environment,
    commands: Vec<Box<dyn CommandFactory>>,
    max_line: usize,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            env: Environment::new(),
            commands,
            max_line: MAX_LINE,
        }
    }

    /// Set the size of the line buffer in bytes. Longer lines are truncated.
    pub fn with_max_line(mut self, max_line: usize) -> Self {
        self.max_line = max_line;
        self
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Run a single command invocation by name with arguments.
    ///
    /// Unknown names are reported to `stderr` as `<name>: command not found`.
    /// Only failures to write to the output streams are returned as errors.
    pub fn run(
        &mut self,
        name: &str,
        args: &[&str],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        let created = self
            .commands
            .iter()
            .find_map(|factory| factory.try_create(&self.env, name, args));

        let status = match created {
            Some(cmd) => cmd.execute(stdout, stderr, &mut self.env)?,
            None => {
                writeln!(stderr, "{}: command not found", name)?;
                STATUS_NOT_FOUND
            }
        };

        debug!("ran {:?} with {:?}: status {}", name, args, status);
        self.env.last_status = status;
        Ok(status)
    }

    /// Tokenize `line` and run it. Returns `None` when the line holds no tokens.
    pub fn execute_line(
        &mut self,
        line: &CommandLine,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> anyhow::Result<Option<ExitCode>> {
        let tokens = line.tokens();
        let Some(invocation) = parser::construct_invocation(&tokens) else {
            return Ok(None);
        };
        self.run(invocation.name, &invocation.args, stdout, stderr)
            .map(Some)
    }

    /// The prompt for the next read: the working directory followed by `$ `.
    ///
    /// If the working directory cannot be determined, a diagnostic goes to `stderr`
    /// and the bare suffix is used instead.
    pub fn prompt(&self, stderr: &mut dyn Write) -> anyhow::Result<String> {
        match self.env.current_dir() {
            Ok(cwd) => Ok(format!("{}{}", cwd.display(), PROMPT_SUFFIX)),
            Err(e) => {
                writeln!(stderr, "minishell: cannot determine current directory: {}", e)?;
                Ok(PROMPT_SUFFIX.to_string())
            }
        }
    }

    /// Read-Eval-Print Loop.
    ///
    /// Runs until the source reports end of input or `exit` is executed. Command
    /// failures are reported and the loop continues; only I/O errors on the source
    /// or the output streams end it early.
    pub fn repl(
        &mut self,
        input: &mut dyn LineSource,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        while !self.env.should_exit {
            let prompt = self.prompt(stderr)?;
            match input.read_line(&prompt)? {
                Input::Line(raw) => {
                    let line = CommandLine::new(raw, self.max_line);
                    self.execute_line(&line, stdout, stderr)?;
                    stdout.flush()?;
                }
                Input::Interrupted => {
                    debug!("line abandoned");
                }
                Input::Eof => {
                    debug!("end of input");
                    break;
                }
            }
        }
        Ok(0)
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the default set of builtins: `pwd`, `cd`, `ls`, `exit`.
    fn default() -> Self {
        use crate::builtin::*;
        Self::new(vec![
            Box::new(Factory::<Pwd>::default()),
            Box::new(Factory::<Cd>::default()),
            Box::new(Factory::<Ls>::default()),
            Box::new(Factory::<Exit>::default()),
        ])
    }
}
