//! A minimal interactive shell.
//!
//! Each input line is split into words by a quote- and escape-aware tokenizer, then
//! dispatched either to one of the in-process builtins (`cd`, `help`, `exit`) or to an
//! external program that is spawned and waited for. There are no pipelines,
//! redirections or expansions; the interesting parts are the tokenizer in [`lexer`]
//! and the builtin-versus-external dispatch in [`Interpreter`].
//!
//! ```
//! use minsh::{Continuation, Interpreter};
//!
//! let sh = Interpreter::default();
//! assert_eq!(sh.dispatch(&[]), Continuation::Continue);
//! assert_eq!(sh.dispatch(&["exit".to_string()]), Continuation::Terminate);
//! ```

mod builtin;
pub mod command;
pub mod config;
pub mod errors;
mod external;
pub mod io_adapters;
mod interpreter;
pub mod lexer;
pub mod logging;

pub use command::Continuation;
pub use interpreter::{DEFAULT_PROMPT, Interpreter, StopReason};
pub use lexer::tokenize;
