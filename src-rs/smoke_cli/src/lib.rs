pub mod cli;
pub mod render;

use std::env;
use std::process::ExitCode;

use rest_smoke_rs::Runner;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Command, Variant};
use render::Console;

/// How a run ended, as seen by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    /// Completed run, quiet stop on an unavailable server, or usage text.
    Success,
    /// A call after the liveness check failed, or the client could not be built.
    Failure,
    /// Arguments or environment could not be parsed.
    BadUsage,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Success => 0,
            Exit::Failure => 1,
            Exit::BadUsage => 2,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Shared entry point of both binaries.
pub fn run(variant: Variant) -> ExitCode {
    init_tracing();
    run_with(variant, env::args().skip(1), |key| env::var(key).ok()).into()
}

pub fn run_with<I, F>(variant: Variant, args: I, env: F) -> Exit
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let config = match cli::parse_args(variant, args, env) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Usage) => {
            render::usage(variant);
            return Exit::Success;
        }
        Err(err) => {
            render::error(&err.to_string());
            render::usage(variant);
            return Exit::BadUsage;
        }
    };

    let runner = match Runner::new(config.runner) {
        Ok(runner) => runner,
        Err(err) => {
            render::error(&err.to_string());
            return Exit::Failure;
        }
    };

    let mut console = Console::new(config.summary);
    match runner.run(&mut console) {
        Ok(outcome) => {
            debug!(?outcome, "finished");
            Exit::Success
        }
        Err(err) => {
            render::error(&err.to_string());
            Exit::Failure
        }
    }
}
