//! Sources of input lines for the read-eval loop.

use crate::errors::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, Write};
use tracing::debug;

/// Something that hands out one line of user input at a time.
pub trait LineSource {
    /// Shows `prompt` and blocks until a full line is available.
    ///
    /// The returned line has no trailing newline. `Ok(None)` means the input is
    /// exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive line editor with in-memory history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new(config: rustyline::Config) -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::with_config(config)?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C abandons the line being edited.
                debug!("line interrupted");
                Ok(Some(String::new()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads lines from any buffered reader, writing the prompt to `output`.
///
/// Used when standard input is not a terminal, and by tests.
pub struct PlainSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlainSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> LineSource for PlainSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD rather than ending the session.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
