//! Factory helpers that create entities through the CLI.
//!
//! Each helper fills in any missing required fields with generated
//! data, creates the entity, and returns the parsed `info` record of
//! what the server actually stored.

use std::collections::HashMap;

use super::commands::{LifecycleEnvironmentCli, OrganizationCli};
use super::runner::Runner;
use crate::datagen::DataFactory;
use crate::result::ValidarResult;

/// Create an organization with a generated name and return its record
pub async fn make_org(
    runner: &Runner,
    factory: &mut DataFactory,
) -> ValidarResult<HashMap<String, String>> {
    let name = factory.unique_name("org");
    let _ = OrganizationCli::create(runner, &[("name", &name)]).await?;
    OrganizationCli::info(runner, &[("name", &name)]).await
}

/// Create a lifecycle environment and return its record.
///
/// `options` must scope the organization (`organization-id`,
/// `organization`, or `organization-label`); a missing `name` is
/// generated.
pub async fn make_lifecycle_environment(
    runner: &Runner,
    factory: &mut DataFactory,
    options: &[(&str, &str)],
) -> ValidarResult<HashMap<String, String>> {
    let generated_name;
    let mut create_options: Vec<(&str, &str)> = options.to_vec();
    if !options.iter().any(|(flag, _)| *flag == "name") {
        generated_name = factory.unique_name("lce");
        create_options.push(("name", &generated_name));
    }
    let _ = LifecycleEnvironmentCli::create(runner, &create_options).await?;

    // Look the record up the way it was scoped at creation.
    let info_options: Vec<(&str, &str)> = create_options
        .iter()
        .filter(|(flag, _)| {
            matches!(
                *flag,
                "name" | "organization-id" | "organization" | "organization-label"
            )
        })
        .copied()
        .collect();
    LifecycleEnvironmentCli::info(runner, &info_options).await
}
