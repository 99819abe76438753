//! Parlance command-line library.
//!
//! Backs the `parlance` binary, which loads a bundle from a configuration
//! file and renders messages from it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`commands`] - Command execution
//! - [`error`] - Error types for command failures

pub mod cli;
pub mod commands;
pub mod error;
