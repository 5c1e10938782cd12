//! File containing constants

/// Prefix env var name with proper prefix
#[macro_export]
macro_rules! ENV_VAR_PREFIX {
    ($($args:literal),*) => {
        concat!(env!("CARGO_PKG_NAME_UPPERCASE"), "_", $($args),*)
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const FULL_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
);

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Host both triggers connect to unless overridden
pub const DEFAULT_HOST: &str = "localhost";

/// Port the development server listens on for the reload command
pub const RELOAD_PORT: u16 = 57503;

/// Port the development server listens on for the restart command
pub const RESTART_PORT: u16 = 62696;

/// Command byte for hot reload
pub const RELOAD_COMMAND: u8 = b'r';

/// Command byte for hot restart, case matters
pub const RESTART_COMMAND: u8 = b'R';

/// Every command is terminated by this byte
pub const COMMAND_TERMINATOR: u8 = b'\n';

/// Maximum amount of bytes read back from the server, the rest is ignored
pub const RESPONSE_BUFFER_SIZE: usize = 1024;

/// Name of the config file inside the app config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Set log level from the environ
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Override the target host
pub const ENV_HOST: &str = ENV_VAR_PREFIX!("HOST");

/// Override the reload port
pub const ENV_RELOAD_PORT: &str = ENV_VAR_PREFIX!("RELOAD_PORT");

/// Override the restart port
pub const ENV_RESTART_PORT: &str = ENV_VAR_PREFIX!("RESTART_PORT");

/// Timeout in seconds for each socket operation
pub const ENV_TIMEOUT: &str = ENV_VAR_PREFIX!("TIMEOUT");

/// Path to the config file
pub const ENV_CONFIG: &str = ENV_VAR_PREFIX!("CONFIG");
