use anyhow::{Context, Result};
use minsh::Interpreter;
use minsh::config::{Cli, Config};
use minsh::io_adapters::{EditorSource, PlainSource};
use minsh::logging::init_logging;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::from(argh::from_env::<Cli>());

    if let Err(e) = init_logging(config.log_level) {
        eprintln!("sh: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sh: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let sh = Interpreter::default().with_prompt(config.prompt.as_str());
    let stdin = io::stdin();

    let reason = if config.plain || !stdin.is_terminal() {
        let mut source = PlainSource::new(stdin.lock(), io::stdout());
        sh.repl(&mut source)?
    } else {
        let editor_config = config
            .editor_config()
            .context("invalid line editor settings")?;
        let mut source = EditorSource::new(editor_config).context("failed to start line editor")?;
        sh.repl(&mut source)?
    };
    tracing::debug!(?reason, "shell stopped");
    Ok(())
}
