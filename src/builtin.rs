use crate::command::{CommandFactory, Continuation, ExecutableCommand, Streams};
use crate::errors::ShellError;
use crate::interpreter::Factory;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::env;
use tracing::debug;

/// The builtin table, in lookup order. `help` lists the names in this order too.
pub(crate) fn builtin_table() -> Vec<Box<dyn CommandFactory>> {
    vec![
        Box::new(Factory::<Cd>::default()),
        Box::new(Factory::<Help>::default()),
        Box::new(Factory::<Exit>::default()),
    ]
}

/// Built-in commands known to the shell at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed directly
/// in-process without spawning a child process.
pub(crate) trait BuiltinCommand: Sized + FromArgs + 'static {
    /// Canonical name of the command, e.g. "cd" or "exit".
    fn name() -> &'static str;

    /// Executes the command, writing any output to `streams`.
    fn execute(self, streams: &mut Streams<'_>) -> Result<Continuation>;

    /// Parses the arguments that follow the command name.
    fn parse(args: &[&str]) -> std::result::Result<Self, EarlyExit> {
        Self::from_args(&[Self::name()], args)
    }

    /// Command to run instead when argument parsing stops early, either because of
    /// `--help` or because the arguments were rejected.
    fn on_early_exit(early: EarlyExit) -> Box<dyn ExecutableCommand> {
        Box::new(InvalidArgs {
            command: Self::name(),
            output: early.output,
            is_error: early.status.is_err(),
        })
    }
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(self: Box<Self>, streams: &mut Streams<'_>) -> Result<Continuation> {
        <T as BuiltinCommand>::execute(*self, streams)
    }
}

struct InvalidArgs {
    command: &'static str,
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(self: Box<Self>, streams: &mut Streams<'_>) -> Result<Continuation> {
        let output = self.output.trim_end();
        if self.is_error {
            writeln!(streams.stderr, "sh: {}: {}", self.command, output)?;
        } else {
            writeln!(streams.stdout, "{}", output)?;
        }
        Ok(Continuation::Continue)
    }
}

impl<T: BuiltinCommand> CommandFactory for Factory<T> {
    fn name(&self) -> &'static str {
        T::name()
    }

    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(match T::parse(args) {
                Ok(cmd) => Box::new(cmd),
                Err(early) => {
                    debug!(builtin = name, "argument parsing stopped early");
                    T::on_early_exit(early)
                }
            })
        } else {
            None
        }
    }
}

#[derive(FromArgs)]
/// Change the current working directory.
pub struct Cd {
    #[argh(positional)]
    /// directory to switch to; absolute or relative to the current directory.
    pub target: Option<String>,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    /// A lone operand is always the target, even when it looks like a flag.
    fn parse(args: &[&str]) -> std::result::Result<Self, EarlyExit> {
        match args {
            [target] if *target != "--help" => Ok(Cd {
                target: Some((*target).to_owned()),
            }),
            _ => Self::from_args(&[Self::name()], args),
        }
    }

    fn execute(self, _streams: &mut Streams<'_>) -> Result<Continuation> {
        let target = self.target.ok_or(ShellError::MissingCdArgument)?;
        env::set_current_dir(&target).map_err(|source| ShellError::ChangeDir {
            path: target.clone(),
            source,
        })?;
        debug!(dir = %target, "changed working directory");
        Ok(Continuation::Continue)
    }
}

#[derive(FromArgs)]
/// Show the builtin commands.
pub struct Help {
    #[argh(positional, greedy)]
    /// ignored.
    pub _args: Vec<String>,
}

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn execute(self, streams: &mut Streams<'_>) -> Result<Continuation> {
        let out = &mut *streams.stdout;
        writeln!(out, "minsh")?;
        writeln!(out, "Type program names and arguments, and hit enter.")?;
        writeln!(out, "The following are built in:")?;
        for factory in builtin_table() {
            writeln!(out, "  {}", factory.name())?;
        }
        writeln!(out, "Use the man command for information on other programs.")?;
        Ok(Continuation::Continue)
    }

    fn on_early_exit(_early: EarlyExit) -> Box<dyn ExecutableCommand> {
        Box::new(Help { _args: Vec::new() })
    }
}

#[derive(FromArgs)]
/// Exit the shell.
pub struct Exit {
    #[argh(positional, greedy)]
    /// ignored; the shell always exits successfully.
    pub _args: Vec<String>,
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self, _streams: &mut Streams<'_>) -> Result<Continuation> {
        Ok(Continuation::Terminate)
    }

    fn on_early_exit(_early: EarlyExit) -> Box<dyn ExecutableCommand> {
        Box::new(Exit { _args: Vec::new() })
    }
}
