//! Validar CLI Library
//!
//! Command-line companion for the Validar suite: probe the deployment
//! under test, print the resolved settings, and inspect the locator
//! and destination registries tests navigate by.

#![warn(missing_docs)]

mod commands;
mod error;

pub use commands::{CheckArgs, Cli, Commands};
pub use error::{CliError, CliResult};
