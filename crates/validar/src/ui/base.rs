//! Generic page primitives shared by every page object.
//!
//! [`Ui`] owns the page handle, the locator registry and the suite's
//! wait budget. Every wait-based operation either returns the located
//! element or fails with [`Error::ElementNotFound`] once the budget is
//! exhausted; nothing silently succeeds on a missing element.

use std::time::Duration;

use tracing::debug;

use crate::result::{Error, ValidarResult};
use crate::ui::locator::{Locator, Selector};
use crate::ui::locators::LocatorRegistry;
use crate::ui::page::Page;
use crate::ui::wait::{poll_until, WaitOptions};
use crate::Settings;

/// A located element, bound to the page it was found on
#[derive(Debug, Clone)]
pub struct Element {
    locator: Locator,
    page: Page,
}

impl Element {
    /// The locator this element was found by
    #[must_use]
    pub const fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Click this element
    pub async fn click(&self) -> ValidarResult<()> {
        self.page.click(self.locator.selector()).await
    }

    /// Text content of this element
    pub async fn text(&self) -> ValidarResult<Option<String>> {
        self.page.text(self.locator.selector()).await
    }
}

/// Page handle plus registry plus wait budget: the base page object
#[derive(Debug, Clone)]
pub struct Ui {
    page: Page,
    registry: LocatorRegistry,
    settings: Settings,
}

impl Ui {
    /// Create the base page object over a page handle
    #[must_use]
    pub fn new(page: Page, settings: Settings) -> Self {
        Self {
            page,
            registry: LocatorRegistry::new(),
            settings,
        }
    }

    /// The underlying page handle
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// The suite settings
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The locator registry
    #[must_use]
    pub const fn registry(&self) -> &LocatorRegistry {
        &self.registry
    }

    /// Resolve a symbolic name into a locator carrying the suite's wait
    /// budget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocator`] for names missing from the
    /// registry.
    pub fn locator(&self, name: &str) -> ValidarResult<Locator> {
        let selector = self
            .registry
            .get(name)
            .ok_or_else(|| Error::UnknownLocator {
                name: name.to_string(),
            })?;
        Ok(Locator::new(selector.clone())
            .with_timeout(self.settings.wait_timeout())
            .with_poll_interval(self.settings.poll_interval()))
    }

    /// Wait for an element to be present, up to the locator's budget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] once the budget is exhausted.
    pub async fn wait_until_element(&self, locator: &Locator) -> ValidarResult<Element> {
        let options = WaitOptions::new()
            .with_timeout(locator.options().timeout.as_millis() as u64)
            .with_poll_interval(locator.options().poll_interval.as_millis() as u64);
        let selector = locator.selector().clone();
        let page = self.page.clone();
        let found = poll_until(options, || {
            let page = page.clone();
            let selector = selector.clone();
            async move { page.exists(&selector).await.unwrap_or(false) }
        })
        .await;
        if found {
            debug!(%locator, "element located");
            Ok(Element {
                locator: locator.clone(),
                page: self.page.clone(),
            })
        } else {
            debug!(%locator, timeout_ms = options.timeout_ms, "element wait exhausted");
            Err(Error::ElementNotFound {
                locator: locator.to_string(),
                ms: options.timeout_ms,
            })
        }
    }

    /// Single presence probe, no wait
    pub async fn present_now(&self, locator: &Locator) -> ValidarResult<bool> {
        self.page.exists(locator.selector()).await
    }

    /// Wait for an element, then click it
    pub async fn click(&self, locator: &Locator) -> ValidarResult<()> {
        self.wait_until_element(locator).await?;
        self.page.click(locator.selector()).await
    }

    /// Resolve a name from the registry and click it
    pub async fn click_name(&self, name: &str) -> ValidarResult<()> {
        self.click(&self.locator(name)?).await
    }

    /// Wait for a text field and replace its contents
    pub async fn field_update(&self, name: &str, text: &str) -> ValidarResult<()> {
        let locator = self.locator(name)?;
        self.wait_until_element(&locator).await?;
        self.page.fill(locator.selector(), text).await
    }

    /// Wait for a dropdown and select an option by visible text
    pub async fn select(&self, name: &str, option: &str) -> ValidarResult<()> {
        let locator = self.locator(name)?;
        self.wait_until_element(&locator).await?;
        self.page.select_option(locator.selector(), option).await
    }

    /// Drive the available/selected two-pane association editor.
    ///
    /// Optionally clicks a form tab first, then clicks each named item
    /// in the source pane — the available pane when `entity_select` is
    /// true, the selected pane (deselection) otherwise. Items move in
    /// the order given, so membership order is preserved; passing a
    /// subset of the available items is a partial selection.
    pub async fn configure_entity(
        &self,
        entities: &[&str],
        tab: Option<&str>,
        entity_select: bool,
    ) -> ValidarResult<()> {
        if entities.is_empty() {
            return Ok(());
        }
        if let Some(tab_name) = tab {
            self.click_name(tab_name).await?;
        }
        let template_name = if entity_select {
            "common.entity_select"
        } else {
            "common.entity_deselect"
        };
        let template = self.locator(template_name)?;
        for entity in entities {
            self.click(&template.bind(entity)).await?;
        }
        Ok(())
    }

    /// Dropdown-confirmed destructive delete.
    ///
    /// Locates the entity row, arms the confirmation prompt per
    /// `really`, opens the row's dropdown and clicks its delete action.
    pub async fn delete_entity(
        &self,
        name: &str,
        really: bool,
        row_locator: &str,
        delete_locator: &str,
        drop_locator: &str,
    ) -> ValidarResult<()> {
        self.wait_until_element(&self.locator(row_locator)?.bind(name))
            .await?;
        self.page.arm_confirm(really).await?;
        self.click(&self.locator(drop_locator)?.bind(name)).await?;
        self.click(&self.locator(delete_locator)?.bind(name)).await?;
        debug!(entity = name, confirmed = really, "delete triggered");
        Ok(())
    }

    /// Search the listing for an entity by name.
    ///
    /// Fills the search widget, submits, and waits for the row matching
    /// `target` (already bound to the name). Absence after the bounded
    /// wait is the `None` signal, not an error.
    pub async fn search_entity(
        &self,
        name: &str,
        target: &Locator,
    ) -> ValidarResult<Option<Element>> {
        let input = self.locator("common.search_input")?;
        self.wait_until_element(&input).await?;
        self.page.fill(input.selector(), name).await?;
        self.click_name("common.search_button").await?;
        match self.wait_until_element(target).await {
            Ok(element) => Ok(Some(element)),
            Err(Error::ElementNotFound { .. }) => Ok(None),
            Err(other) => Err(other),
        }
    }

    /// A short-budget locator for probing error indicators
    pub(crate) fn probe_locator(&self, name: &str) -> ValidarResult<Locator> {
        Ok(self
            .locator(name)?
            .with_timeout(Duration::from_millis(self.settings.poll_interval_ms * 4)))
    }

    /// Whether the form shows the name-validation error indicator
    pub async fn has_name_error(&self) -> ValidarResult<bool> {
        self.probe_present("common.name_haserror").await
    }

    /// Whether the page shows the general error indicator
    pub async fn has_error(&self) -> ValidarResult<bool> {
        self.probe_present("common.haserror").await
    }

    async fn probe_present(&self, name: &str) -> ValidarResult<bool> {
        let locator = self.probe_locator(name)?;
        match self.wait_until_element(&locator).await {
            Ok(_) => Ok(true),
            Err(Error::ElementNotFound { .. }) => Ok(false),
            Err(other) => Err(other),
        }
    }

    /// Convenience selector lookup for tests and the runner binary
    pub fn selector_for(&self, name: &str) -> ValidarResult<Selector> {
        self.registry
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownLocator {
                name: name.to_string(),
            })
    }
}
