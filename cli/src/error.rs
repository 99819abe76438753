//! Error types for the Parlance CLI.

use std::io;

use parlance::{I18nError, LoadError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration or a message file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The `--count` value is not a plural operand.
    #[error("invalid --count value: {source}")]
    InvalidCount {
        /// Parse failure for the count.
        #[source]
        source: I18nError,
    },

    /// The message could not be rendered.
    #[error("failed to render `{id}`: {source}")]
    Render {
        /// Requested message identifier.
        id: String,
        /// Pipeline failure.
        #[source]
        source: I18nError,
    },

    /// `tags --country` named a country without registered languages.
    #[error("country `{country}` has no registered languages")]
    UnknownCountry {
        /// Requested country code.
        country: String,
    },

    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
