//! Trigger hot reload or hot restart of a running development server
//!
//! Each trigger connects to the server, sends a single command byte followed
//! by a newline, reads back whatever the server answers and hangs up

mod vars;
mod util;
mod commands;
pub mod action;
pub mod cli;
pub mod config;
pub mod trigger;

pub use action::Action;
pub use trigger::{Trigger, TriggerError};
pub use vars::*;

use std::process::ExitCode;

#[allow(unused)]
pub mod prelude {
    pub use anyhow::{anyhow, Context, Result};
}

/// Entry point shared by both binaries
pub fn run(action: Action) -> ExitCode {
    let args = cli::Cli::parse_for(action);

    match command(action, &args) {
        Ok(x) => x,
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        },
    }
}

fn command(action: Action, args: &cli::Cli) -> prelude::Result<ExitCode> {
    util::init_logger(args.verbose)?;

    if let Some(shell) = &args.info.completions {
        commands::shell_completion_generation(action, shell)?;
        return Ok(ExitCode::SUCCESS);
    }

    if args.info.config_options {
        commands::show_config_options();
        return Ok(ExitCode::SUCCESS);
    }

    commands::trigger_action(action, args)
}
