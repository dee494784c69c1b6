use argh::FromArgs;
use log::{debug, warn};
use minishell::{EditorSource, Interpreter, MAX_LINE, ReaderSource};
use std::io::{self, IsTerminal};

/// Smallest usable line buffer: one content byte plus the terminator.
const MIN_LINE: usize = 2;

#[derive(FromArgs)]
/// A minimal interactive shell with `pwd`, `cd`, `ls` and `exit` builtins.
struct Options {
    #[argh(switch)]
    /// read standard input without line editing; implied when stdin is not a terminal.
    plain: bool,

    #[argh(option, default = "MAX_LINE")]
    /// size of the line buffer in bytes; longer input lines are truncated.
    max_line: usize,
}

fn main() {
    env_logger::init();
    let options: Options = argh::from_env();

    let max_line = options.max_line.max(MIN_LINE);
    let mut sh = Interpreter::default().with_max_line(max_line);
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let editor = if options.plain || !io::stdin().is_terminal() {
        None
    } else {
        match EditorSource::new() {
            Ok(editor) => Some(editor.with_max_line(max_line)),
            Err(e) => {
                warn!("{:#}; falling back to plain input", e);
                None
            }
        }
    };

    let result = match editor {
        Some(mut editor) => sh.repl(&mut editor, &mut stdout, &mut stderr),
        None => {
            let mut source =
                ReaderSource::new(io::stdin().lock(), io::stdout()).with_max_line(max_line);
            sh.repl(&mut source, &mut stdout, &mut stderr)
        }
    };

    // The shell exits 0 even when input breaks down; the failure is only reported.
    if let Err(e) = result {
        debug!("repl stopped: {:?}", e);
        eprintln!("minishell: {:#}", e);
    }
}
