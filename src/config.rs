//! Command-line configuration.

use crate::interpreter::DEFAULT_PROMPT;
use argh::FromArgs;
use std::str::FromStr;

/// Verbosity of the diagnostic log written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!(
                "unknown log level `{}`, expected error|warn|info|debug|trace",
                other
            )),
        }
    }
}

#[derive(FromArgs, Debug)]
/// A minimal interactive shell.
pub struct Cli {
    #[argh(option)]
    /// prompt shown before each line (default "> ")
    pub prompt: Option<String>,

    #[argh(option)]
    /// log verbosity: error, warn, info, debug or trace
    pub log_level: Option<LogLevel>,

    #[argh(switch)]
    /// read plain lines from stdin even when it is a terminal
    pub plain: bool,
}

/// Settings the shell runs with.
#[derive(Debug, Clone)]
pub struct Config {
    pub prompt: String,
    pub log_level: Option<LogLevel>,
    pub plain: bool,
}

/// Most lines remembered by the interactive editor.
const HISTORY_SIZE: usize = 1000;

impl Config {
    /// Settings for the interactive line editor.
    pub fn editor_config(&self) -> rustyline::Result<rustyline::Config> {
        Ok(rustyline::Config::builder()
            .auto_add_history(true)
            .max_history_size(HISTORY_SIZE)?
            .completion_type(rustyline::CompletionType::List)
            .build())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_owned(),
            log_level: None,
            plain: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let defaults = Config::default();
        Self {
            prompt: cli.prompt.unwrap_or(defaults.prompt),
            log_level: cli.log_level,
            plain: cli.plain,
        }
    }
}
