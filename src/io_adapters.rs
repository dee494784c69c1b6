use crate::lexer::MAX_LINE;
use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::io::{BufRead, Read, Write};

/// One step of input as seen by the REPL loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text, possibly still carrying its trailing newline.
    Line(String),
    /// The user abandoned the current line (Ctrl-C in the editor).
    Interrupted,
    /// No more input will arrive.
    Eof,
}

/// Anything that can produce the next input line after showing a prompt.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Most bytes a single read may hand out for a buffer of `max_line` bytes.
fn read_limit(max_line: usize) -> usize {
    max_line.saturating_sub(1).max(1)
}

/// Cuts `line` into pieces of at most `limit` bytes, on character boundaries.
///
/// A character wider than `limit` still forms a piece of its own.
fn split_bounded(line: &str, limit: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = line;
    while rest.len() > limit {
        let mut cut = limit;
        while cut > 0 && !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        if cut == 0 {
            cut = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        let (head, tail) = rest.split_at(cut);
        pieces.push(head.to_string());
        rest = tail;
    }
    pieces.push(rest.to_string());
    pieces
}

/// Interactive line source backed by [`rustyline`].
///
/// Provides in-line editing only; nothing is recorded in a history. An edited line
/// longer than the buffer is handed out in buffer-sized pieces, one per read.
pub struct EditorSource {
    editor: DefaultEditor,
    limit: usize,
    pending: VecDeque<String>,
}

impl EditorSource {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| anyhow::anyhow!("failed to set up line editor: {}", e))?;
        Ok(Self {
            editor,
            limit: read_limit(MAX_LINE),
            pending: VecDeque::new(),
        })
    }

    pub fn with_max_line(mut self, max_line: usize) -> Self {
        self.limit = read_limit(max_line);
        self
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        if let Some(piece) = self.pending.pop_front() {
            return Ok(Input::Line(piece));
        }
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.pending.extend(split_bounded(&line, self.limit));
                Ok(Input::Line(self.pending.pop_front().unwrap_or_default()))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(anyhow::anyhow!("failed to read line: {}", err)),
        }
    }
}

/// Plain line source over any buffered reader.
///
/// The prompt is written and flushed to `prompt_out` before each read. Each read takes
/// at most `max_line - 1` bytes, stopping after a newline; whatever is left of a longer
/// line stays in the reader and comes back from the next read. Bytes are decoded
/// lossily, so invalid UTF-8 never stops the loop.
pub struct ReaderSource<R, W> {
    reader: R,
    prompt_out: W,
    limit: usize,
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self {
            reader,
            prompt_out,
            limit: read_limit(MAX_LINE),
        }
    }

    pub fn with_max_line(mut self, max_line: usize) -> Self {
        self.limit = read_limit(max_line);
        self
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        self.prompt_out.write_all(prompt.as_bytes())?;
        self.prompt_out.flush()?;

        let mut buf = Vec::new();
        let read = (&mut self.reader)
            .take(self.limit as u64)
            .read_until(b'\n', &mut buf)
            .context("failed to read line")?;
        if read == 0 {
            return Ok(Input::Eof);
        }
        Ok(Input::Line(String::from_utf8_lossy(&buf).into_owned()))
    }
}
