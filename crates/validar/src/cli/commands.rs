//! Typed wrappers for the CLI's subcommands.
//!
//! Options are passed as `(flag, value)` pairs and lowered to
//! `--flag value` arguments, matching how the records produced by
//! [`super::parse::parse_info`] are keyed.

use std::collections::HashMap;

use super::parse::{parse_info, parse_list};
use super::runner::{CliOutput, Runner};
use crate::result::ValidarResult;

/// Lower `(flag, value)` pairs to command-line arguments
#[must_use]
pub fn options_to_args<'a>(options: &'a [(&'a str, &'a str)]) -> Vec<String> {
    let mut args = Vec::with_capacity(options.len() * 2);
    for (flag, value) in options {
        args.push(format!("--{flag}"));
        args.push((*value).to_string());
    }
    args
}

async fn run(
    runner: &Runner,
    subcommand: &[&str],
    options: &[(&str, &str)],
) -> ValidarResult<CliOutput> {
    let lowered = options_to_args(options);
    let mut args: Vec<&str> = subcommand.to_vec();
    args.extend(lowered.iter().map(String::as_str));
    runner.execute_ok(&args).await
}

/// `organization` subcommands
#[derive(Debug)]
pub struct OrganizationCli;

impl OrganizationCli {
    /// `organization create`
    pub async fn create(runner: &Runner, options: &[(&str, &str)]) -> ValidarResult<CliOutput> {
        run(runner, &["organization", "create"], options).await
    }

    /// `organization info`, parsed into a record
    pub async fn info(
        runner: &Runner,
        options: &[(&str, &str)],
    ) -> ValidarResult<HashMap<String, String>> {
        let output = run(runner, &["organization", "info"], options).await?;
        parse_info(&output.stdout)
    }

    /// `organization list`, parsed into records
    pub async fn list(
        runner: &Runner,
        options: &[(&str, &str)],
    ) -> ValidarResult<Vec<HashMap<String, String>>> {
        let output = run(runner, &["organization", "list"], options).await?;
        parse_list(&output.stdout)
    }
}

/// `lifecycle-environment` subcommands
#[derive(Debug)]
pub struct LifecycleEnvironmentCli;

impl LifecycleEnvironmentCli {
    /// `lifecycle-environment create`
    pub async fn create(runner: &Runner, options: &[(&str, &str)]) -> ValidarResult<CliOutput> {
        run(runner, &["lifecycle-environment", "create"], options).await
    }

    /// `lifecycle-environment info`, parsed into a record
    pub async fn info(
        runner: &Runner,
        options: &[(&str, &str)],
    ) -> ValidarResult<HashMap<String, String>> {
        let output = run(runner, &["lifecycle-environment", "info"], options).await?;
        parse_info(&output.stdout)
    }

    /// `lifecycle-environment list`, parsed into records
    pub async fn list(
        runner: &Runner,
        options: &[(&str, &str)],
    ) -> ValidarResult<Vec<HashMap<String, String>>> {
        let output = run(runner, &["lifecycle-environment", "list"], options).await?;
        parse_list(&output.stdout)
    }

    /// `lifecycle-environment update`
    pub async fn update(runner: &Runner, options: &[(&str, &str)]) -> ValidarResult<CliOutput> {
        run(runner, &["lifecycle-environment", "update"], options).await
    }

    /// `lifecycle-environment delete`
    pub async fn delete(runner: &Runner, options: &[(&str, &str)]) -> ValidarResult<CliOutput> {
        run(runner, &["lifecycle-environment", "delete"], options).await
    }

    /// `lifecycle-environment paths`: the promotion paths of an
    /// organization, one per output line
    pub async fn paths(runner: &Runner, options: &[(&str, &str)]) -> ValidarResult<Vec<String>> {
        let output = run(runner, &["lifecycle-environment", "paths"], options).await?;
        Ok(output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}
