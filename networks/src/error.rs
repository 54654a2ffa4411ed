//! Unified error types for the registry and the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or querying a [`Registry`](crate::Registry).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input could not be parsed, or a field is missing or invalid.
    #[error("malformed config: {0}")]
    Malformed(String),

    /// `defaultNetwork` does not name a declared network.
    #[error("default network '{0}' is not declared in networks")]
    InvalidDefault(String),

    /// No network with this name is declared.
    #[error("unknown network '{0}'")]
    UnknownNetwork(String),

    /// The network exists but does not list this account.
    #[error("unknown account '{account}' on network '{network}'")]
    UnknownAccount {
        /// Network that was searched.
        network: String,
        /// Account name that was not found.
        account: String,
    },

    /// A `$VAR` / `${VAR}` reference names an unset environment variable.
    #[error("env var '{var}' not found")]
    UnresolvedEnv {
        /// Name of the missing variable.
        var: String,
    },

    /// The configuration file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// File that was accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Builds a [`ConfigError::Malformed`] scoped to a network.
    pub(crate) fn malformed_in(network: &str, reason: impl std::fmt::Display) -> Self {
        Self::Malformed(format!("network '{network}': {reason}"))
    }
}

/// Top-level error type for the command-line tool.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or queried.
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    /// A command was invoked with arguments it cannot act on.
    #[error("usage: {0}")]
    Usage(String),

    /// Output could not be rendered.
    #[error("output: {0}")]
    Output(String),
}
