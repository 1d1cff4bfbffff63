use std::time::Duration;

use rest_smoke_rs::RunnerConfig;

const URL_VAR: &str = "REST_SMOKE_URL";
const TIMEOUT_VAR: &str = "REST_SMOKE_TIMEOUT";
// One day; larger values overflow the client's deadline arithmetic.
pub const MAX_TIMEOUT_SECS: u64 = 24 * 60 * 60;

/// Which of the two entry points is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Open,
    /// Requires the bearer token as the single positional argument.
    Authenticated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub runner: RunnerConfig,
    pub summary: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(CliConfig),
    Usage,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

pub fn parse_args<I, F>(variant: Variant, args: I, env: F) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let mut runner = RunnerConfig::default();
    if let Some(url) = env_opt(&env, URL_VAR) {
        runner.base_url = url;
    }
    if let Some(raw) = env_opt(&env, TIMEOUT_VAR) {
        runner.timeout = parse_timeout(&raw)?;
    }
    let mut summary = false;
    let mut positionals = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Usage),
            "--base" => {
                runner.base_url = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
            }
            "--timeout" => {
                let value = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                runner.timeout = parse_timeout(&value)?;
            }
            "--summary" => summary = true,
            "--" => {
                positionals.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--") => return Err(CliError::UnknownFlag(arg)),
            _ => positionals.push(arg),
        }
    }

    match variant {
        Variant::Open => {
            if let Some(extra) = positionals.into_iter().next() {
                return Err(CliError::UnexpectedArgument(extra));
            }
        }
        Variant::Authenticated => {
            let mut positionals = positionals.into_iter();
            let Some(token) = positionals.next() else {
                return Ok(Command::Usage);
            };
            if let Some(extra) = positionals.next() {
                return Err(CliError::UnexpectedArgument(extra));
            }
            runner.token = Some(token);
        }
    }

    Ok(Command::Run(CliConfig { runner, summary }))
}

fn env_opt<F: Fn(&str) -> Option<String>>(env: &F, key: &str) -> Option<String> {
    match env(key) {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn parse_timeout(raw: &str) -> Result<Option<Duration>, CliError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Ok(None),
        Ok(secs) if secs <= MAX_TIMEOUT_SECS => Ok(Some(Duration::from_secs(secs))),
        _ => Err(CliError::InvalidTimeout(raw.to_string())),
    }
}
