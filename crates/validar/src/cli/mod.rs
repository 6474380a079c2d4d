//! Wrapper around the product's `martillo` command-line tool.
//!
//! The suite shells out to the real binary, captures `(status, output)`
//! pairs, and parses the tool's info and listing formats. Non-zero
//! exits surface as [`crate::Error::CliReturnCode`], the expected
//! outcome of negative CLI tests.

mod commands;
mod parse;
mod runner;

/// Factory helpers that create entities through the CLI.
pub mod factory;

pub use commands::{options_to_args, LifecycleEnvironmentCli, OrganizationCli};
pub use parse::{parse_info, parse_list};
pub use runner::{CliOutput, Runner};
