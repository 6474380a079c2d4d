//! Environment page object.

use crate::result::ValidarResult;
use crate::ui::base::{Element, Ui};
use crate::ui::navigator::{Destination, Navigator};
use crate::ui::SEARCH_NAME_THRESHOLD;

/// CRUD operations for environments
#[derive(Debug)]
pub struct EnvironmentPage<'a> {
    ui: &'a Ui,
}

impl<'a> EnvironmentPage<'a> {
    /// Create the page object over the base page
    #[must_use]
    pub const fn new(ui: &'a Ui) -> Self {
        Self { ui }
    }

    /// Create an environment, optionally assigning organizations
    /// through the two-pane editor. Success is verified by the caller
    /// via [`Self::search`].
    pub async fn create(
        &self,
        name: &str,
        orgs: &[&str],
        org_select: bool,
    ) -> ValidarResult<()> {
        self.ui.click_name("env.new").await?;
        self.ui.field_update("env.name", name).await?;
        if !orgs.is_empty() {
            self.ui
                .configure_entity(orgs, Some("tab.org"), org_select)
                .await?;
        }
        self.ui.click_name("common.submit").await
    }

    /// Locate an environment in the listing by exact name, or by the
    /// filtered-search widget once the name outgrows the exact-match
    /// widget.
    pub async fn search(&self, name: &str) -> ValidarResult<Option<Element>> {
        Navigator::new(self.ui)
            .go_to(Destination::Environments)
            .await?;
        let target = if name.chars().count() <= SEARCH_NAME_THRESHOLD {
            self.ui.locator("env.row")?.bind(name)
        } else {
            self.ui.locator("common.filtered_entity")?.bind(name)
        };
        self.ui.search_entity(name, &target).await
    }

    /// Update an environment: optionally rename it and edit its
    /// organization associations.
    pub async fn update(
        &self,
        old_name: &str,
        new_name: Option<&str>,
        orgs: &[&str],
        new_orgs: &[&str],
        org_select: bool,
    ) -> ValidarResult<()> {
        let element = self.search(old_name).await?.ok_or_else(|| {
            crate::Error::Page {
                message: format!("environment {old_name} not found for update"),
            }
        })?;
        element.click().await?;
        if let Some(new_name) = new_name {
            self.ui.field_update("env.name", new_name).await?;
        }
        if !orgs.is_empty() {
            self.ui
                .configure_entity(orgs, Some("tab.org"), org_select)
                .await?;
        }
        if !new_orgs.is_empty() {
            self.ui
                .configure_entity(new_orgs, Some("tab.org"), true)
                .await?;
        }
        self.ui.click_name("common.submit").await
    }

    /// Delete an environment, accepting or dismissing the confirmation
    /// prompt per `really`.
    pub async fn delete(&self, name: &str, really: bool) -> ValidarResult<()> {
        Navigator::new(self.ui)
            .go_to(Destination::Environments)
            .await?;
        self.ui
            .delete_entity(name, really, "env.row", "env.delete", "env.dropdown")
            .await
    }
}
