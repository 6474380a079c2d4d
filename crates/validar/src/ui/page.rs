//! The browser page seam.
//!
//! When compiled with the `browser` feature, a [`Page`] drives Chromium
//! over the Chrome DevTools Protocol via chromiumoxide. Without the
//! feature it is an in-memory mock DOM with the same surface, so the
//! page-object layer and its tests run anywhere.
//!
//! Elements are addressed by the JavaScript query a [`Selector`] lowers
//! to; the mock keys its DOM by that same query string.

use crate::result::{Error, ValidarResult};
use crate::ui::locator::Selector;
use crate::Settings;

/// Browser configuration derived from suite settings
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    /// Run without a visible window
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1280,
            viewport_height: 800,
        }
    }
}

impl BrowserOptions {
    /// Derive browser options from suite settings
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            headless: settings.headless,
            ..Self::default()
        }
    }

    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }
}

// ============================================================================
// Real CDP implementation (when `browser` feature is enabled)
// ============================================================================

#[cfg(feature = "browser")]
mod cdp {
    use super::{BrowserOptions, Error, Selector, ValidarResult};
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Browser instance with a live CDP connection
    #[derive(Debug)]
    pub struct Browser {
        options: BrowserOptions,
        inner: Arc<Mutex<CdpBrowser>>,
        #[allow(dead_code)]
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a browser
        ///
        /// # Errors
        ///
        /// Returns an error if the browser cannot be launched
        pub async fn launch(options: BrowserOptions) -> ValidarResult<Self> {
            let mut builder = CdpConfig::builder();
            if !options.headless {
                builder = builder.with_head();
            }
            builder = builder.window_size(options.viewport_width, options.viewport_height);

            let config = builder.build().map_err(|e| Error::BrowserLaunch {
                message: e.to_string(),
            })?;

            let (browser, mut handler) =
                CdpBrowser::launch(config)
                    .await
                    .map_err(|e| Error::BrowserLaunch {
                        message: e.to_string(),
                    })?;

            // Drive the CDP event stream until the connection drops
            let handle = tokio::spawn(async move {
                while let Some(event) = handler.next().await {
                    if event.is_err() {
                        break;
                    }
                }
            });

            Ok(Self {
                options,
                inner: Arc::new(Mutex::new(browser)),
                handle,
            })
        }

        /// Open a new page
        ///
        /// # Errors
        ///
        /// Returns an error if the page cannot be created
        pub async fn new_page(&self) -> ValidarResult<Page> {
            let browser = self.inner.lock().await;
            let page = browser
                .new_page("about:blank")
                .await
                .map_err(|e| Error::Page {
                    message: e.to_string(),
                })?;
            Ok(Page {
                inner: Arc::new(Mutex::new(page)),
            })
        }

        /// The options this browser was launched with
        #[must_use]
        pub const fn options(&self) -> &BrowserOptions {
            &self.options
        }

        /// Close the browser
        pub async fn close(self) -> ValidarResult<()> {
            let mut browser = self.inner.lock().await;
            browser.close().await.map_err(|e| Error::BrowserLaunch {
                message: e.to_string(),
            })?;
            Ok(())
        }
    }

    /// A browser page with a live CDP connection
    #[derive(Debug, Clone)]
    pub struct Page {
        inner: Arc<Mutex<CdpPage>>,
    }

    impl Page {
        async fn eval<T: serde::de::DeserializeOwned>(&self, expr: &str) -> ValidarResult<T> {
            let page = self.inner.lock().await;
            let result = page.evaluate(expr).await.map_err(|e| Error::Page {
                message: e.to_string(),
            })?;
            result.into_value().map_err(|e| Error::Page {
                message: e.to_string(),
            })
        }

        /// Navigate to a URL
        pub async fn goto(&self, url: &str) -> ValidarResult<()> {
            let page = self.inner.lock().await;
            page.goto(url).await.map_err(|e| Error::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
            page.wait_for_navigation()
                .await
                .map_err(|e| Error::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            Ok(())
        }

        /// Current page URL
        pub async fn current_url(&self) -> String {
            let page = self.inner.lock().await;
            match page.url().await {
                Ok(Some(url)) => url,
                _ => String::new(),
            }
        }

        /// Whether at least one visible element matches
        pub async fn exists(&self, selector: &Selector) -> ValidarResult<bool> {
            let count: i64 = self.eval(&selector.to_count_query()).await?;
            Ok(count > 0)
        }

        /// Click the first matching element
        pub async fn click(&self, selector: &Selector) -> ValidarResult<()> {
            let js = format!(
                "(() => {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
                selector.to_query()
            );
            let clicked: bool = self.eval(&js).await?;
            if clicked {
                Ok(())
            } else {
                Err(Error::Page {
                    message: format!("click target not present: {selector}"),
                })
            }
        }

        /// Clear a text field and type `text` into it
        pub async fn fill(&self, selector: &Selector, text: &str) -> ValidarResult<()> {
            let literal = serde_json::to_string(text)?;
            let js = format!(
                "(() => {{ const el = {}; if (!el) return false; \
                 el.value = {literal}; \
                 el.dispatchEvent(new Event('input', {{bubbles: true}})); \
                 el.dispatchEvent(new Event('change', {{bubbles: true}})); \
                 return true; }})()",
                selector.to_query()
            );
            let filled: bool = self.eval(&js).await?;
            if filled {
                Ok(())
            } else {
                Err(Error::Page {
                    message: format!("fill target not present: {selector}"),
                })
            }
        }

        /// Select a dropdown option by its visible text
        pub async fn select_option(&self, selector: &Selector, option: &str) -> ValidarResult<()> {
            let literal = serde_json::to_string(option)?;
            let js = format!(
                "(() => {{ const el = {}; if (!el) return false; \
                 const opt = Array.from(el.options).find(o => o.textContent.trim() === {literal}); \
                 if (!opt) return false; \
                 el.value = opt.value; \
                 el.dispatchEvent(new Event('change', {{bubbles: true}})); \
                 return true; }})()",
                selector.to_query()
            );
            let selected: bool = self.eval(&js).await?;
            if selected {
                Ok(())
            } else {
                Err(Error::Page {
                    message: format!("option {option:?} not present in {selector}"),
                })
            }
        }

        /// Text content of the first matching element, if present
        pub async fn text(&self, selector: &Selector) -> ValidarResult<Option<String>> {
            let js = format!(
                "(() => {{ const el = {}; return el ? el.textContent : null; }})()",
                selector.to_query()
            );
            self.eval(&js).await
        }

        /// Arm the next confirmation prompt to be accepted or dismissed
        pub async fn arm_confirm(&self, accept: bool) -> ValidarResult<()> {
            let js = format!("window.confirm = () => {accept}; true");
            let _: bool = self.eval(&js).await?;
            Ok(())
        }
    }
}

// ============================================================================
// Mock implementation (when `browser` feature is NOT enabled)
// ============================================================================

#[cfg(not(feature = "browser"))]
mod mock {
    use super::{BrowserOptions, Error, Selector, ValidarResult};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// An element in the mock DOM
    #[derive(Debug, Clone)]
    pub struct MockElement {
        /// Text content
        pub text: String,
        /// Field value
        pub value: String,
        /// Whether the element is visible
        pub visible: bool,
    }

    impl MockElement {
        /// A visible element with no text
        #[must_use]
        pub fn visible() -> Self {
            Self {
                text: String::new(),
                value: String::new(),
                visible: true,
            }
        }

        /// A visible element with text content
        #[must_use]
        pub fn with_text(text: impl Into<String>) -> Self {
            Self {
                text: text.into(),
                value: String::new(),
                visible: true,
            }
        }
    }

    /// A recorded page interaction
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Action {
        /// Navigation to a URL
        Goto(String),
        /// Click on the element matching a query
        Click(String),
        /// A field fill
        Fill {
            /// Resolved query
            query: String,
            /// Text typed
            text: String,
        },
        /// A dropdown selection
        Select {
            /// Resolved query
            query: String,
            /// Option chosen
            option: String,
        },
        /// A confirmation prompt was armed
        ConfirmArmed(bool),
    }

    /// Scripted consequence of clicking an element
    #[derive(Debug, Clone)]
    pub enum ClickEffect {
        /// Insert an element into the DOM
        Insert(String, MockElement),
        /// Remove an element from the DOM
        Remove(String),
    }

    #[derive(Debug, Default)]
    struct MockState {
        url: String,
        elements: HashMap<String, MockElement>,
        click_effects: HashMap<String, Vec<ClickEffect>>,
        actions: Vec<Action>,
    }

    /// Browser instance (mock)
    #[derive(Debug)]
    pub struct Browser {
        options: BrowserOptions,
    }

    impl Browser {
        /// Launch a browser (mock)
        pub async fn launch(options: BrowserOptions) -> ValidarResult<Self> {
            Ok(Self { options })
        }

        /// Open a new page
        pub async fn new_page(&self) -> ValidarResult<Page> {
            Ok(Page::new())
        }

        /// The options this browser was launched with
        #[must_use]
        pub const fn options(&self) -> &BrowserOptions {
            &self.options
        }

        /// Close the browser (mock)
        pub async fn close(self) -> ValidarResult<()> {
            Ok(())
        }
    }

    /// A browser page backed by an in-memory DOM
    #[derive(Debug, Clone, Default)]
    pub struct Page {
        state: Arc<Mutex<MockState>>,
    }

    impl Page {
        /// Create an empty mock page
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
            self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
        }

        /// Seed an element into the mock DOM
        pub fn insert(&self, selector: &Selector, element: MockElement) {
            let _ = self.lock().elements.insert(selector.to_query(), element);
        }

        /// Remove an element from the mock DOM
        pub fn remove(&self, selector: &Selector) {
            let _ = self.lock().elements.remove(&selector.to_query());
        }

        /// Script what clicking `selector` does to the DOM
        pub fn on_click(&self, selector: &Selector, effects: Vec<ClickEffect>) {
            let _ = self
                .lock()
                .click_effects
                .insert(selector.to_query(), effects);
        }

        /// Build a click effect that inserts an element
        #[must_use]
        pub fn insert_effect(selector: &Selector, element: MockElement) -> ClickEffect {
            ClickEffect::Insert(selector.to_query(), element)
        }

        /// Build a click effect that removes an element
        #[must_use]
        pub fn remove_effect(selector: &Selector) -> ClickEffect {
            ClickEffect::Remove(selector.to_query())
        }

        /// The interactions recorded so far
        #[must_use]
        pub fn actions(&self) -> Vec<Action> {
            self.lock().actions.clone()
        }

        /// Current field value of an element
        #[must_use]
        pub fn value_of(&self, selector: &Selector) -> Option<String> {
            self.lock()
                .elements
                .get(&selector.to_query())
                .map(|el| el.value.clone())
        }

        /// Navigate to a URL
        pub async fn goto(&self, url: &str) -> ValidarResult<()> {
            let mut state = self.lock();
            state.url = url.to_string();
            state.actions.push(Action::Goto(url.to_string()));
            Ok(())
        }

        /// Current page URL
        pub async fn current_url(&self) -> String {
            self.lock().url.clone()
        }

        /// Whether at least one visible element matches
        pub async fn exists(&self, selector: &Selector) -> ValidarResult<bool> {
            Ok(self
                .lock()
                .elements
                .get(&selector.to_query())
                .is_some_and(|el| el.visible))
        }

        /// Click the first matching element
        pub async fn click(&self, selector: &Selector) -> ValidarResult<()> {
            let query = selector.to_query();
            let mut state = self.lock();
            if !state.elements.contains_key(&query) {
                return Err(Error::Page {
                    message: format!("click target not present: {selector}"),
                });
            }
            state.actions.push(Action::Click(query.clone()));
            if let Some(effects) = state.click_effects.get(&query).cloned() {
                for effect in effects {
                    match effect {
                        ClickEffect::Insert(target, element) => {
                            let _ = state.elements.insert(target, element);
                        }
                        ClickEffect::Remove(target) => {
                            let _ = state.elements.remove(&target);
                        }
                    }
                }
            }
            Ok(())
        }

        /// Clear a text field and type `text` into it
        pub async fn fill(&self, selector: &Selector, text: &str) -> ValidarResult<()> {
            let query = selector.to_query();
            let mut state = self.lock();
            match state.elements.get_mut(&query) {
                Some(element) => {
                    element.value = text.to_string();
                    state.actions.push(Action::Fill {
                        query,
                        text: text.to_string(),
                    });
                    Ok(())
                }
                None => Err(Error::Page {
                    message: format!("fill target not present: {selector}"),
                }),
            }
        }

        /// Select a dropdown option by its visible text
        pub async fn select_option(&self, selector: &Selector, option: &str) -> ValidarResult<()> {
            let query = selector.to_query();
            let mut state = self.lock();
            match state.elements.get_mut(&query) {
                Some(element) => {
                    element.value = option.to_string();
                    state.actions.push(Action::Select {
                        query,
                        option: option.to_string(),
                    });
                    Ok(())
                }
                None => Err(Error::Page {
                    message: format!("select target not present: {selector}"),
                }),
            }
        }

        /// Text content of the first matching element, if present
        pub async fn text(&self, selector: &Selector) -> ValidarResult<Option<String>> {
            Ok(self
                .lock()
                .elements
                .get(&selector.to_query())
                .map(|el| el.text.clone()))
        }

        /// Arm the next confirmation prompt to be accepted or dismissed
        pub async fn arm_confirm(&self, accept: bool) -> ValidarResult<()> {
            self.lock().actions.push(Action::ConfirmArmed(accept));
            Ok(())
        }
    }
}

// Re-export based on feature
#[cfg(feature = "browser")]
pub use cdp::{Browser, Page};

#[cfg(not(feature = "browser"))]
pub use mock::{Action, Browser, ClickEffect, MockElement, Page};
