//! Config groups page object.

use crate::result::ValidarResult;
use crate::ui::base::{Element, Ui};
use crate::ui::navigator::{Destination, Navigator};
use crate::ui::SEARCH_NAME_THRESHOLD;

/// CRUD operations for config groups
#[derive(Debug)]
pub struct ConfigGroupsPage<'a> {
    ui: &'a Ui,
}

impl<'a> ConfigGroupsPage<'a> {
    /// Create the page object over the base page
    #[must_use]
    pub const fn new(ui: &'a Ui) -> Self {
        Self { ui }
    }

    /// Create a config group. Success is verified by the caller via
    /// [`Self::search`].
    pub async fn create(&self, name: &str) -> ValidarResult<()> {
        self.ui.click_name("cg.new").await?;
        self.ui.field_update("cg.name", name).await?;
        self.ui.click_name("common.submit").await
    }

    /// Locate a config group in the listing by name
    pub async fn search(&self, name: &str) -> ValidarResult<Option<Element>> {
        Navigator::new(self.ui)
            .go_to(Destination::ConfigGroups)
            .await?;
        let target = if name.chars().count() <= SEARCH_NAME_THRESHOLD {
            self.ui.locator("cg.row")?.bind(name)
        } else {
            self.ui.locator("common.filtered_entity")?.bind(name)
        };
        self.ui.search_entity(name, &target).await
    }

    /// Rename a config group
    pub async fn update(&self, old_name: &str, new_name: &str) -> ValidarResult<()> {
        let element = self.search(old_name).await?.ok_or_else(|| {
            crate::Error::Page {
                message: format!("config group {old_name} not found for update"),
            }
        })?;
        element.click().await?;
        self.ui.field_update("cg.name", new_name).await?;
        self.ui.click_name("common.submit").await
    }

    /// Delete a config group, accepting or dismissing the confirmation
    /// prompt
    pub async fn delete(&self, name: &str, really: bool) -> ValidarResult<()> {
        Navigator::new(self.ui)
            .go_to(Destination::ConfigGroups)
            .await?;
        self.ui
            .delete_entity(name, really, "cg.row", "cg.delete", "cg.dropdown")
            .await
    }
}
