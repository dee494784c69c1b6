//! A module implementing the command-line buffer and its tokenization.
//!
//! A [`CommandLine`] owns the text of the most recent input line. Tokens are plain
//! `&str` slices borrowed from it, so they can never outlive the line they were cut from.

use log::warn;

/// Default size of the line buffer in bytes, terminator included.
///
/// The stored content is therefore at most `MAX_LINE - 1` bytes long.
pub const MAX_LINE: usize = 1024;

/// A single, bounded line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    text: String,
}

impl CommandLine {
    /// Builds a command line from raw input.
    ///
    /// Strips a single trailing newline and truncates the rest to `max_line - 1` bytes,
    /// cutting on a character boundary. A carriage return is ordinary text.
    pub fn new(raw: impl Into<String>, max_line: usize) -> Self {
        let mut text = raw.into();
        if text.ends_with('\n') {
            text.pop();
        }

        let limit = max_line.saturating_sub(1);
        if text.len() > limit {
            let mut cut = limit;
            while !text.is_char_boundary(cut) {
                cut -= 1;
            }
            warn!(
                "input line of {} bytes truncated to {} bytes",
                text.len(),
                cut
            );
            text.truncate(cut);
        }

        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the line holds no tokens at all (empty or whitespace only).
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Splits the line into whitespace-separated tokens.
    pub fn tokens(&self) -> Vec<&str> {
        split_into_tokens(&self.text)
    }
}

/// Splits `line` on runs of whitespace. Empty tokens are never produced.
pub fn split_into_tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
