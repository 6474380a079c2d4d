//! The locator registry.
//!
//! Symbolic names keep page objects free of selector strings. Names are
//! namespaced by page (`env.*`, `medium.*`, `cg.*`), with `common.*`
//! for widgets shared across pages, `menu.*` for navigation, `tab.*`
//! for form tabs, and `login.*`/`account.*` for the session pages.
//!
//! Entries whose selector carries a `{}` placeholder target one row of
//! a listing by entity name and must be bound before use.

use std::collections::HashMap;

use super::locator::Selector;

/// Static mapping from symbolic names to selectors
#[derive(Debug, Clone)]
pub struct LocatorRegistry {
    entries: HashMap<&'static str, Selector>,
}

impl Default for LocatorRegistry {
    fn default() -> Self {
        let mut entries = HashMap::new();
        let mut add = |name: &'static str, selector: Selector| {
            let _ = entries.insert(name, selector);
        };

        // Session pages
        add("login.username", Selector::css("input#login_login"));
        add("login.password", Selector::css("input#login_password"));
        add("login.submit", Selector::css("button[name='commit']"));
        add("account.menu", Selector::css("a#account_menu"));
        add("account.logout", Selector::css("a#menu_item_logout"));

        // Top-level menus and their items
        add("menu.hosts", Selector::css("a#hosts_menu"));
        add(
            "menu.hosts.environments",
            Selector::css("a#menu_item_environments"),
        );
        add("menu.hosts.media", Selector::css("a#menu_item_media"));
        add("menu.configure", Selector::css("a#configure_menu"));
        add(
            "menu.configure.config_groups",
            Selector::css("a#menu_item_config_groups"),
        );
        add("menu.content", Selector::css("a#content_menu"));
        add(
            "menu.content.content_views",
            Selector::css("a#menu_item_content_views"),
        );
        add(
            "menu.content.lifecycle_environments",
            Selector::css("a#menu_item_lifecycle_environments"),
        );
        add(
            "menu.content.activation_keys",
            Selector::css("a#menu_item_activation_keys"),
        );

        // Shared widgets
        add("common.submit", Selector::css("button[type='submit']"));
        add("common.cancel", Selector::css("a.cancel"));
        add("common.search_input", Selector::css("input#search"));
        add("common.search_button", Selector::css("button#btn-search"));
        add(
            "common.name_haserror",
            Selector::css("div.form-group.has-error input[id$='_name']"),
        );
        add("common.haserror", Selector::css("div.alert-danger"));
        add(
            "common.filtered_entity",
            Selector::xpath("//a[contains(@href,'/edit') and normalize-space(.)='{}']"),
        );
        // Two-pane association editor: available pane on the left,
        // selected pane on the right.
        add(
            "common.entity_select",
            Selector::xpath(
                "//div[contains(@class,'ms-selectable')]//span[normalize-space(.)='{}']",
            ),
        );
        add(
            "common.entity_deselect",
            Selector::xpath(
                "//div[contains(@class,'ms-selection')]//span[normalize-space(.)='{}']",
            ),
        );

        // Form tabs
        add("tab.org", Selector::css("a[href='#organizations']"));
        add("tab.locations", Selector::css("a[href='#locations']"));

        // Environments
        add("env.new", Selector::css("a[href$='environments/new']"));
        add("env.name", Selector::css("input#environment_name"));
        add(
            "env.row",
            Selector::xpath("//td/a[contains(@href,'environments') and normalize-space(.)='{}']"),
        );
        add(
            "env.dropdown",
            Selector::xpath(
                "//td/a[contains(@href,'environments') and normalize-space(.)='{}']/ancestor::tr//a[@data-toggle='dropdown']",
            ),
        );
        add(
            "env.delete",
            Selector::xpath(
                "//td/a[contains(@href,'environments') and normalize-space(.)='{}']/ancestor::tr//a[@data-method='delete']",
            ),
        );

        // Installation media
        add("medium.new", Selector::css("a[href$='media/new']"));
        add("medium.name", Selector::css("input#medium_name"));
        add("medium.path", Selector::css("input#medium_path"));
        add("medium.os_family", Selector::css("select#medium_os_family"));
        add(
            "medium.row",
            Selector::xpath("//td/a[contains(@href,'media') and normalize-space(.)='{}']"),
        );
        add(
            "medium.dropdown",
            Selector::xpath(
                "//td/a[contains(@href,'media') and normalize-space(.)='{}']/ancestor::tr//a[@data-toggle='dropdown']",
            ),
        );
        add(
            "medium.delete",
            Selector::xpath(
                "//td/a[contains(@href,'media') and normalize-space(.)='{}']/ancestor::tr//a[@data-method='delete']",
            ),
        );

        // Config groups
        add("cg.new", Selector::css("a[href$='config_groups/new']"));
        add("cg.name", Selector::css("input#config_group_name"));
        add(
            "cg.row",
            Selector::xpath("//td/a[contains(@href,'config_groups') and normalize-space(.)='{}']"),
        );
        add(
            "cg.dropdown",
            Selector::xpath(
                "//td/a[contains(@href,'config_groups') and normalize-space(.)='{}']/ancestor::tr//a[@data-toggle='dropdown']",
            ),
        );
        add(
            "cg.delete",
            Selector::xpath(
                "//td/a[contains(@href,'config_groups') and normalize-space(.)='{}']/ancestor::tr//a[@data-method='delete']",
            ),
        );

        Self { entries }
    }
}

impl LocatorRegistry {
    /// Create the registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a selector by symbolic name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Selector> {
        self.entries.get(name)
    }

    /// All registered names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered locators
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
