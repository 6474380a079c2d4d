//! Menu navigation to listing pages.
//!
//! A destination is a logical page name; its menu path is the fixed
//! click sequence that reaches it from the product's top bar. This is a
//! flat mapping, not pathfinding — one destination, one sequence.

use tracing::debug;

use crate::result::ValidarResult;
use crate::ui::base::Ui;

/// The listing pages the suite navigates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Hosts → Environments
    Environments,
    /// Hosts → Installation Media
    InstallationMedia,
    /// Configure → Config Groups
    ConfigGroups,
    /// Content → Content Views
    ContentViews,
    /// Content → Lifecycle Environments
    LifecycleEnvironments,
    /// Content → Activation Keys
    ActivationKeys,
}

impl Destination {
    /// Registry names of the menu items clicked, in order
    #[must_use]
    pub const fn menu_path(&self) -> &'static [&'static str] {
        match self {
            Self::Environments => &["menu.hosts", "menu.hosts.environments"],
            Self::InstallationMedia => &["menu.hosts", "menu.hosts.media"],
            Self::ConfigGroups => &["menu.configure", "menu.configure.config_groups"],
            Self::ContentViews => &["menu.content", "menu.content.content_views"],
            Self::LifecycleEnvironments => {
                &["menu.content", "menu.content.lifecycle_environments"]
            }
            Self::ActivationKeys => &["menu.content", "menu.content.activation_keys"],
        }
    }

    /// Human-readable destination name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Environments => "environments",
            Self::InstallationMedia => "installation media",
            Self::ConfigGroups => "config groups",
            Self::ContentViews => "content views",
            Self::LifecycleEnvironments => "lifecycle environments",
            Self::ActivationKeys => "activation keys",
        }
    }

    /// Every destination, for the runner's listing
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Environments,
            Self::InstallationMedia,
            Self::ConfigGroups,
            Self::ContentViews,
            Self::LifecycleEnvironments,
            Self::ActivationKeys,
        ]
    }
}

/// Executes menu click sequences over the base page
#[derive(Debug)]
pub struct Navigator<'a> {
    ui: &'a Ui,
}

impl<'a> Navigator<'a> {
    /// Create a navigator over the base page
    #[must_use]
    pub const fn new(ui: &'a Ui) -> Self {
        Self { ui }
    }

    /// Click through the menu to the destination's listing page
    pub async fn go_to(&self, destination: Destination) -> ValidarResult<()> {
        debug!(destination = destination.name(), "navigating");
        for name in destination.menu_path() {
            self.ui.click_name(name).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_destination_has_a_two_step_path() {
        for destination in Destination::all() {
            assert_eq!(
                destination.menu_path().len(),
                2,
                "{} should be menu then item",
                destination.name()
            );
        }
    }

    #[test]
    fn test_paths_start_at_a_top_level_menu() {
        for destination in Destination::all() {
            let first = destination.menu_path()[0];
            assert!(
                matches!(first, "menu.hosts" | "menu.configure" | "menu.content"),
                "{first} is not a top-level menu"
            );
        }
    }

    #[cfg(not(feature = "browser"))]
    mod with_mock_page {
        use super::*;
        use crate::ui::page::{Action, MockElement, Page};
        use crate::Settings;

        fn ui_with_menus() -> Ui {
            let ui = Ui::new(
                Page::new(),
                Settings::new().with_wait_timeout(60).with_poll_interval(5),
            );
            for name in [
                "menu.hosts",
                "menu.hosts.environments",
                "menu.content",
                "menu.content.content_views",
            ] {
                let locator = ui.locator(name).unwrap();
                ui.page().insert(locator.selector(), MockElement::visible());
            }
            ui
        }

        #[tokio::test]
        async fn test_go_to_clicks_menu_then_item() {
            let ui = ui_with_menus();
            Navigator::new(&ui)
                .go_to(Destination::Environments)
                .await
                .unwrap();

            let clicks: Vec<String> = ui
                .page()
                .actions()
                .into_iter()
                .filter_map(|action| match action {
                    Action::Click(query) => Some(query),
                    _ => None,
                })
                .collect();
            assert_eq!(clicks.len(), 2);
            assert!(clicks[0].contains("hosts_menu"));
            assert!(clicks[1].contains("menu_item_environments"));
        }

        #[tokio::test]
        async fn test_go_to_missing_menu_fails() {
            let ui = ui_with_menus();
            let err = Navigator::new(&ui)
                .go_to(Destination::ConfigGroups)
                .await
                .unwrap_err();
            assert!(matches!(err, crate::Error::ElementNotFound { .. }));
        }
    }
}
