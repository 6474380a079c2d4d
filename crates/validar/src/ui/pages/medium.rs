//! Installation media page object.

use crate::result::ValidarResult;
use crate::ui::base::{Element, Ui};
use crate::ui::navigator::{Destination, Navigator};
use crate::ui::SEARCH_NAME_THRESHOLD;

/// CRUD operations for installation media
#[derive(Debug)]
pub struct MediumPage<'a> {
    ui: &'a Ui,
}

impl<'a> MediumPage<'a> {
    /// Create the page object over the base page
    #[must_use]
    pub const fn new(ui: &'a Ui) -> Self {
        Self { ui }
    }

    /// Create a medium with its path URL and operating system family.
    /// Success is verified by the caller via [`Self::search`].
    pub async fn create(&self, name: &str, path: &str, os_family: &str) -> ValidarResult<()> {
        self.ui.click_name("medium.new").await?;
        self.ui.field_update("medium.name", name).await?;
        self.ui.field_update("medium.path", path).await?;
        if !os_family.is_empty() {
            self.ui.select("medium.os_family", os_family).await?;
        }
        self.ui.click_name("common.submit").await
    }

    /// Locate a medium in the listing by name
    pub async fn search(&self, name: &str) -> ValidarResult<Option<Element>> {
        Navigator::new(self.ui)
            .go_to(Destination::InstallationMedia)
            .await?;
        let target = if name.chars().count() <= SEARCH_NAME_THRESHOLD {
            self.ui.locator("medium.row")?.bind(name)
        } else {
            self.ui.locator("common.filtered_entity")?.bind(name)
        };
        self.ui.search_entity(name, &target).await
    }

    /// Update a medium's name, path and OS family
    pub async fn update(
        &self,
        old_name: &str,
        new_name: Option<&str>,
        new_path: Option<&str>,
        new_os_family: Option<&str>,
    ) -> ValidarResult<()> {
        let element = self.search(old_name).await?.ok_or_else(|| {
            crate::Error::Page {
                message: format!("medium {old_name} not found for update"),
            }
        })?;
        element.click().await?;
        if let Some(new_name) = new_name {
            self.ui.field_update("medium.name", new_name).await?;
        }
        if let Some(new_path) = new_path {
            self.ui.field_update("medium.path", new_path).await?;
        }
        if let Some(new_os_family) = new_os_family {
            self.ui.select("medium.os_family", new_os_family).await?;
        }
        self.ui.click_name("common.submit").await
    }

    /// Delete a medium, accepting or dismissing the confirmation prompt
    pub async fn delete(&self, name: &str, really: bool) -> ValidarResult<()> {
        Navigator::new(self.ui)
            .go_to(Destination::InstallationMedia)
            .await?;
        self.ui
            .delete_entity(
                name,
                really,
                "medium.row",
                "medium.delete",
                "medium.dropdown",
            )
            .await
    }
}
