//! Crate-wide error type.

use std::io;

use thiserror::Error;

/// Failures the shell reports to the user.
///
/// Everything except [`ShellError::LineEditor`] and [`ShellError::Input`] is
/// recoverable: it is printed on the error stream and the loop keeps going.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("expected argument to \"cd\"")]
    MissingCdArgument,

    #[error("{path}: {source}")]
    ChangeDir { path: String, source: io::Error },

    #[error("{program}: command not found")]
    CommandNotFound { program: String },

    #[error("{program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("{program}: failed waiting for child: {source}")]
    Wait { program: String, source: io::Error },

    #[error("line editor")]
    LineEditor(#[from] rustyline::error::ReadlineError),

    #[error("reading input")]
    Input(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
