use crate::vars::*;

/// What the development server is asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reload code without losing state
    Reload,

    /// Restart the whole application
    Restart,
}

impl Action {
    /// Single byte sent to the server
    pub const fn command_byte(self) -> u8 {
        match self {
            Self::Reload => RELOAD_COMMAND,
            Self::Restart => RESTART_COMMAND,
        }
    }

    /// Full payload written to the socket
    pub const fn payload(self) -> [u8; 2] {
        [self.command_byte(), COMMAND_TERMINATOR]
    }

    pub const fn default_port(self) -> u16 {
        match self {
            Self::Reload => RELOAD_PORT,
            Self::Restart => RESTART_PORT,
        }
    }

    /// Environment variable overriding the port for this action only
    pub const fn port_env(self) -> &'static str {
        match self {
            Self::Reload => ENV_RELOAD_PORT,
            Self::Restart => ENV_RESTART_PORT,
        }
    }

    /// Printed when the command was delivered, the response does not matter
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Reload => "Hot reload triggered",
            Self::Restart => "Hot restart triggered",
        }
    }

    /// Name of the binary and the completion scripts
    pub const fn bin_name(self) -> &'static str {
        match self {
            Self::Reload => "hot-reload",
            Self::Restart => "hot-restart",
        }
    }

    pub const fn about(self) -> &'static str {
        match self {
            Self::Reload => "Ask the running development server to hot reload",
            Self::Restart => "Ask the running development server to hot restart",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Reload => "reload",
            Self::Restart => "restart",
        })
    }
}
