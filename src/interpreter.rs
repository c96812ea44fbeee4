use crate::command::{CommandFactory, Continuation, ExecutableCommand, Streams};
use crate::errors::Result;
use crate::external::ExternalCommand;
use crate::io_adapters::LineSource;
use crate::lexer;
use std::io::{self, Write};
use tracing::{debug, info};

/// Prompt shown before each line when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports the builtins defined in this crate.
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

/// Why the read-eval loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The line source ran dry.
    EndOfInput,
    /// A command asked the shell to terminate.
    Exit,
}

/// A minimal interactive shell.
///
/// Holds the builtin table, fixed at construction, and runs commands either in
/// process (builtins) or as child processes (everything else).
///
/// Example
/// ```
/// use minsh::{Continuation, Interpreter};
/// let sh = Interpreter::default();
/// let code = sh.dispatch(&["help".to_string()]);
/// assert_eq!(code, Continuation::Continue);
/// ```
pub struct Interpreter {
    builtins: Vec<Box<dyn CommandFactory>>,
    prompt: String,
}

impl Interpreter {
    /// Create a new interpreter with a custom builtin table.
    pub(crate) fn new(builtins: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            builtins,
            prompt: DEFAULT_PROMPT.to_owned(),
        }
    }

    /// Replace the prompt shown before each line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Run one command, writing builtin output to the process's stdout and stderr.
    pub fn dispatch(&self, args: &[String]) -> Continuation {
        let mut stdout = io::stdout();
        let mut stderr = io::stderr();
        self.dispatch_with(args, &mut Streams::new(&mut stdout, &mut stderr))
    }

    /// Run one command.
    ///
    /// An empty argument list does nothing. A first word naming a builtin runs that
    /// builtin; anything else is started as an external program. Failures are
    /// reported on `streams.stderr` and never stop the shell.
    pub fn dispatch_with(&self, args: &[String], streams: &mut Streams<'_>) -> Continuation {
        let argv: Vec<&str> = args.iter().map(String::as_str).collect();
        let Some((&name, rest)) = argv.split_first() else {
            return Continuation::Continue;
        };

        let command: Box<dyn ExecutableCommand> = match self.lookup_builtin(name, rest) {
            Some(builtin) => {
                debug!(command = name, "running builtin");
                builtin
            }
            None => {
                debug!(command = name, "launching external program");
                match ExternalCommand::new(&argv) {
                    Some(external) => Box::new(external),
                    None => return Continuation::Continue,
                }
            }
        };

        match command.execute(streams) {
            Ok(continuation) => continuation,
            Err(err) => {
                debug!(command = name, error = %err, "command failed");
                // Nowhere left to report a broken error stream.
                let _ = writeln!(streams.stderr, "sh: {}", err);
                Continuation::Continue
            }
        }
    }

    fn lookup_builtin(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        self.builtins
            .iter()
            .find_map(|factory| factory.try_create(name, args))
    }

    /// Read-eval loop on the process's standard streams.
    pub fn repl(&self, source: &mut dyn LineSource) -> Result<StopReason> {
        let mut stdout = io::stdout();
        let mut stderr = io::stderr();
        self.run(source, &mut Streams::new(&mut stdout, &mut stderr))
    }

    /// Read-eval loop: read a line, split it, run it, until `exit` or end of input.
    ///
    /// Only a failure of the line source itself ends the loop with an error.
    pub fn run(
        &self,
        source: &mut dyn LineSource,
        streams: &mut Streams<'_>,
    ) -> Result<StopReason> {
        info!("shell started");
        loop {
            let Some(line) = source.read_line(&self.prompt)? else {
                info!("end of input");
                return Ok(StopReason::EndOfInput);
            };
            let args = lexer::tokenize(&line);
            debug!(?args, "tokenized line");
            if self.dispatch_with(&args, streams) == Continuation::Terminate {
                info!("exit requested");
                return Ok(StopReason::Exit);
            }
        }
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the builtins `cd`, `help` and `exit`.
    fn default() -> Self {
        Self::new(crate::builtin::builtin_table())
    }
}
