use crate::command::{Continuation, ExecutableCommand, Streams};
use crate::errors::ShellError;
use anyhow::Result;
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Command that is not a builtin.
///
/// Runs as a child process inheriting the shell's environment, working directory
/// and standard streams. The shell blocks until the child terminates.
pub struct ExternalCommand {
    name: String,
    args: Vec<OsString>,
}

impl ExternalCommand {
    /// Builds the command from a full argument list, program name first.
    ///
    /// Returns `None` for an empty list.
    pub fn new(argv: &[&str]) -> Option<Self> {
        let (name, args) = argv.split_first()?;
        Some(Self {
            name: (*name).to_owned(),
            args: args.iter().map(OsString::from).collect(),
        })
    }
}

impl ExecutableCommand for ExternalCommand {
    fn execute(self: Box<Self>, streams: &mut Streams<'_>) -> Result<Continuation> {
        // The child writes straight to the inherited descriptors.
        streams.stdout.flush()?;
        streams.stderr.flush()?;

        let mut child = Command::new(&self.name)
            .args(&self.args)
            .spawn()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => ShellError::CommandNotFound {
                    program: self.name.clone(),
                },
                _ => ShellError::Spawn {
                    program: self.name.clone(),
                    source,
                },
            })?;
        debug!(program = %self.name, pid = child.id(), "spawned child");

        // `wait` only returns once the child exited or was killed by a signal;
        // stopped children are not reported.
        let exit_status = child.wait().map_err(|source| ShellError::Wait {
            program: self.name.clone(),
            source,
        })?;
        debug!(
            program = %self.name,
            code = status_code(exit_status),
            "child terminated"
        );
        Ok(Continuation::Continue)
    }
}

fn status_code(exit_status: ExitStatus) -> i32 {
    match exit_status.code() {
        Some(x) => x,
        None => terminated_by_signal(exit_status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> i32 {
    -1
}
