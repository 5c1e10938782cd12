use crate::action::Action;
use crate::vars::*;
use clap::{Args, CommandFactory, FromArgMatches, Parser};
use std::time::Duration;

/// Trigger an action in the running development server
///
/// Name and about text are set per binary, see `Cli::parse_for`
#[derive(Parser, Debug, Clone)]
#[command(version = FULL_VERSION, long_about = None)]
pub struct Cli {
    /// Host of the development server
    #[arg(long, env = ENV_HOST)]
    pub host: Option<String>,

    /// Port of the development server, defaults to the port of the action
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Timeout in seconds for each socket operation, waits forever when unset
    #[arg(short, long, env = ENV_TIMEOUT, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Path to config file
    #[arg(short, long, env = ENV_CONFIG)]
    pub config: Option<String>,

    /// Exit with non-zero code when the command could not be delivered
    #[arg(long)]
    pub fail_on_error: bool,

    /// Increase log verbosity, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub info: CmdInfoArgs,
}

/// Flags that print something and exit without triggering anything
#[derive(Args, Debug, Clone)]
#[group(multiple = false)]
pub struct CmdInfoArgs {
    /// Print shell completion script, shell is detected from $SHELL when empty
    #[arg(long, value_name = "SHELL", num_args = 0..=1, default_missing_value = "auto")]
    pub completions: Option<String>,

    /// Show all options useable in the config file
    #[arg(long)]
    pub config_options: bool,
}

impl Cli {
    /// Command definition named after the binary of the action
    pub fn command_for(action: Action) -> clap::Command {
        Self::command()
            .name(action.bin_name())
            .bin_name(action.bin_name())
            .about(action.about())
    }

    pub fn try_parse_for<I, T>(action: Action, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut matches = Self::command_for(action).try_get_matches_from(args)?;
        Self::from_arg_matches_mut(&mut matches)
    }

    /// Parse the process arguments, exits on error or `--help` like `Parser::parse`
    pub fn parse_for(action: Action) -> Self {
        Self::try_parse_for(action, std::env::args_os()).unwrap_or_else(|err| err.exit())
    }
}

/// Parse seconds as float into duration, zero or negative makes no sense
pub fn parse_timeout(input: &str) -> Result<Duration, String> {
    let secs: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("{input:?} is not a number"))?;

    seconds_to_timeout(secs)
}

pub fn seconds_to_timeout(secs: f64) -> Result<Duration, String> {
    if secs <= 0.0 {
        return Err(format!("timeout has to be positive, got {secs}"));
    }

    let timeout = Duration::try_from_secs_f64(secs)
        .map_err(|err| format!("invalid timeout {secs}: {err}"))?;

    // sockets refuse a zero timeout
    if timeout.is_zero() {
        return Err(format!("timeout {secs} is too small"));
    }

    Ok(timeout)
}
