use crate::prelude::*;
use log::LevelFilter;
use std::str::FromStr;

/// Levels in order of verbosity
const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Raise level by verbosity steps, saturating at trace
pub fn raise_level(base: LevelFilter, verbosity: u8) -> LevelFilter {
    let index = LEVELS.iter().position(|x| *x == base).unwrap_or(2);

    LEVELS[(index + verbosity as usize).min(LEVELS.len() - 1)]
}

/// Base log level from the value of the environ, warn if unset
///
/// Unknown values are returned as error so they can be reported once logging works
pub fn parse_log_level(input: Option<&str>) -> std::result::Result<LevelFilter, String> {
    match input.map(str::trim) {
        Some(x) if !x.is_empty() => LevelFilter::from_str(x).map_err(|_| x.to_string()),
        _ => Ok(LevelFilter::Warn),
    }
}

/// Initialize logger to stderr, stdout is reserved for the result line
pub fn init_logger(verbosity: u8) -> Result<()> {
    let env_level = std::env::var(crate::ENV_LOG_LEVEL).ok();
    let (base, invalid) = match parse_log_level(env_level.as_deref()) {
        Ok(x) => (x, None),
        Err(x) => (LevelFilter::Warn, Some(x)),
    };

    simple_logger::SimpleLogger::new()
        .with_level(raise_level(base, verbosity))
        .init()
        .with_context(|| "Failed to initialize logger")?;

    if let Some(x) = invalid {
        log::warn!("Ignoring unknown log level {:?} in {}", x, crate::ENV_LOG_LEVEL);
    }

    Ok(())
}
