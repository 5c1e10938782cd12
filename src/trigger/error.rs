use std::io;
use thiserror::Error;

/// Step of the exchange that was running when something went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Connect,
    Send,
    Receive,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Connect => "connect",
            Self::Send => "send",
            Self::Receive => "receive",
        })
    }
}

/// Every way delivering a command can fail
///
/// All of them end up printed as a single `Error: ..` line, the variants only
/// matter for logging and `--fail-on-error` exit codes
#[derive(Error, Debug)]
pub enum TriggerError {
    #[error("Could not resolve {target}: {source}")]
    Resolve {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("Connection to {target} refused")]
    Refused { target: String },

    #[error("Timed out during {stage} with {target}")]
    TimedOut { stage: Stage, target: String },

    #[error("Could not connect to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not send command to {target}: {source}")]
    Send {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not read response from {target}: {source}")]
    Receive {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl TriggerError {
    /// Sort an io error into the right variant
    pub fn classify(stage: Stage, target: &str, err: io::Error) -> Self {
        let target = target.to_string();

        match (stage, err.kind()) {
            // read timeouts on unix come back as EAGAIN
            (_, io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) => Self::TimedOut { stage, target },
            (Stage::Connect, io::ErrorKind::ConnectionRefused) => Self::Refused { target },
            (Stage::Connect, _) => Self::Connect { target, source: err },
            (Stage::Send, _) => Self::Send { target, source: err },
            (Stage::Receive, _) => Self::Receive { target, source: err },
        }
    }

    /// Exit code used when errors are not swallowed
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Refused { .. } => 2,
            Self::TimedOut { .. } => 3,
            Self::Resolve { .. } | Self::Connect { .. } => 4,
            Self::Send { .. } => 5,
            Self::Receive { .. } => 6,
        }
    }
}
