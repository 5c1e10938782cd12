//! Configuration version 1

use code_docs::{code_docs_struct, DocumentedStruct};
use serde::{Deserialize, Serialize};

// save all the fields and docs so they can be printed as always up-to-date documentation
code_docs_struct! {
    /// Settings shared by both triggers, each trigger has its own table that overrides them
    #[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
    #[serde(deny_unknown_fields)]
    pub struct Config1 {
        /// Host of the development server, defaults to `localhost`
        #[serde(default)]
        pub host: Option<String>,

        /// Timeout in seconds for each of connect, send and receive
        ///
        /// When unset the triggers wait forever
        #[serde(default)]
        pub timeout: Option<f64>,

        /// Settings for `hot-reload`
        #[serde(default)]
        pub reload: Endpoint1,

        /// Settings for `hot-restart`
        #[serde(default)]
        pub restart: Endpoint1,
    }
}

code_docs_struct! {
    /// Where a single trigger connects to
    #[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
    #[serde(deny_unknown_fields)]
    pub struct Endpoint1 {
        /// Host for this trigger only
        #[serde(default)]
        pub host: Option<String>,

        /// Port the server listens on for this command
        #[serde(default)]
        pub port: Option<u16>,
    }
}

/// Documentation of all fields, in the order they appear in the file
pub fn commented_fields() -> String {
    format!(
        "{}\n\n[reload] / [restart]\n{}",
        Config1::commented_fields().unwrap_or_default(),
        Endpoint1::commented_fields().unwrap_or_default(),
    )
}
