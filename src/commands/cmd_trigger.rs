use crate::action::Action;
use crate::cli::{seconds_to_timeout, Cli};
use crate::config::{self, Config};
use crate::prelude::*;
use crate::trigger::{Trigger, TriggerError};
use std::process::ExitCode;

/// Combine flags, environment and config into a trigger
///
/// Flags and environment win over the config, the config over the defaults
pub fn build_trigger(action: Action, cli_args: &Cli, config: &Config) -> Result<Trigger> {
    let mut trigger = Trigger::new(action);

    if let Some(host) = cli_args.host.as_deref().or(config.host(action)) {
        trigger = trigger.with_host(host);
    }

    if let Some(port) = cli_args.port.or(port_from_env(action)?).or(config.port(action)) {
        trigger = trigger.with_port(port);
    }

    let timeout = match (cli_args.timeout, config.timeout) {
        (Some(x), _) => Some(x),
        (None, Some(secs)) => Some(
            seconds_to_timeout(secs).map_err(|err| anyhow!("Invalid timeout in config: {err}"))?,
        ),
        (None, None) => None,
    };

    Ok(trigger.with_timeout(timeout))
}

/// Port from the action specific env var, it is per action so clap cannot handle it
fn port_from_env(action: Action) -> Result<Option<u16>> {
    match std::env::var(action.port_env()) {
        Ok(x) if !x.trim().is_empty() => x
            .trim()
            .parse::<u16>()
            .map(Some)
            .with_context(|| format!("Invalid port {:?} in {}", x, action.port_env())),
        _ => Ok(None),
    }
}

/// Line printed for the outcome, the response content never changes it
pub fn outcome_message(action: Action, outcome: &std::result::Result<Vec<u8>, TriggerError>) -> String {
    match outcome {
        Ok(_) => action.success_message().to_string(),
        Err(err) => format!("Error: {err}"),
    }
}

/// Deliver the command of the action and report it
pub fn trigger_action(action: Action, cli_args: &Cli) -> Result<ExitCode> {
    let config = config::load(cli_args.config.as_deref())?;
    let trigger = build_trigger(action, cli_args, &config)?;

    log::debug!("Triggering {action} using {trigger:?}");

    let outcome = trigger.send();
    println!("{}", outcome_message(action, &outcome));

    match outcome {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            log::debug!("{err:?}");

            if cli_args.fail_on_error {
                Ok(ExitCode::from(err.exit_code()))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        },
    }
}
