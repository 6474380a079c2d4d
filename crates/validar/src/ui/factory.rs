//! Session-scoped helpers that create entities through the UI.
//!
//! These mirror how tests actually start: navigate to the listing page,
//! then drive the page object's create form. Callers verify the result
//! with the page object's `search`.

use crate::result::ValidarResult;
use crate::ui::base::Ui;
use crate::ui::navigator::{Destination, Navigator};
use crate::ui::pages::{ConfigGroupsPage, EnvironmentPage, MediumPage};

/// Navigate to the environments listing and create one
pub async fn make_environment(
    ui: &Ui,
    name: &str,
    orgs: &[&str],
    org_select: bool,
) -> ValidarResult<()> {
    Navigator::new(ui).go_to(Destination::Environments).await?;
    EnvironmentPage::new(ui).create(name, orgs, org_select).await
}

/// Navigate to the media listing and create a medium
pub async fn make_media(ui: &Ui, name: &str, path: &str, os_family: &str) -> ValidarResult<()> {
    Navigator::new(ui)
        .go_to(Destination::InstallationMedia)
        .await?;
    MediumPage::new(ui).create(name, path, os_family).await
}

/// Navigate to the config groups listing and create one
pub async fn make_config_groups(ui: &Ui, name: &str) -> ValidarResult<()> {
    Navigator::new(ui).go_to(Destination::ConfigGroups).await?;
    ConfigGroupsPage::new(ui).create(name).await
}
