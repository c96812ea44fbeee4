use anyhow::Result;
use std::io::Write;

/// What the read-eval loop should do after a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Read the next line.
    Continue,
    /// Stop the loop; the shell exits successfully.
    Terminate,
}

/// Output channels available to a command running inside the shell process.
///
/// Builtins write here. External programs inherit the shell's real standard
/// streams instead, so they only use these to flush pending output before spawning.
pub struct Streams<'a> {
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    pub fn new(stdout: &'a mut dyn Write, stderr: &'a mut dyn Write) -> Self {
        Self { stdout, stderr }
    }
}

/// Object-safe trait for any command that can be executed by the shell.
///
/// This is implemented by built-ins via a blanket impl and by external commands.
pub trait ExecutableCommand {
    /// Executes the command.
    ///
    /// An `Err` is a recoverable failure: the caller reports it and keeps the loop
    /// running.
    fn execute(self: Box<Self>, streams: &mut Streams<'_>) -> Result<Continuation>;
}

/// Factory that tries to create a command from a name and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `name`.
pub trait CommandFactory {
    /// Name this factory answers to.
    fn name(&self) -> &'static str;

    /// Attempt to create a command instance for the provided name and arguments.
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>>;
}
