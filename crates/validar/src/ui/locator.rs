//! Locator abstraction for element selection.
//!
//! A [`Selector`] addresses an element; a [`Locator`] pairs a selector
//! with wait behavior. Selectors that target one row of a listing by
//! entity name are written as templates with a `{}` placeholder and
//! bound to a concrete name at use time.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS};

/// Selector type for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector (e.g. `input#environment_name`)
    Css(String),
    /// XPath selector
    XPath(String),
    /// Text content selector
    Text(String),
    /// CSS selector filtered by text content
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Text content to match
        text: String,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create an XPath selector
    #[must_use]
    pub fn xpath(selector: impl Into<String>) -> Self {
        Self::XPath(selector.into())
    }

    /// Create a text selector
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The raw selector string
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Css(s) | Self::XPath(s) | Self::Text(s) => s,
            Self::CssWithText { css, .. } => css,
        }
    }

    /// True if this selector still carries an unbound `{}` placeholder
    #[must_use]
    pub fn is_template(&self) -> bool {
        match self {
            Self::Css(s) | Self::XPath(s) | Self::Text(s) => s.contains("{}"),
            Self::CssWithText { css, text } => css.contains("{}") || text.contains("{}"),
        }
    }

    /// Substitute the `{}` placeholder with a concrete value
    #[must_use]
    pub fn bind(&self, value: &str) -> Self {
        let fill = |s: &str| s.replace("{}", value);
        match self {
            Self::Css(s) => Self::Css(fill(s)),
            Self::XPath(s) => Self::XPath(fill(s)),
            Self::Text(s) => Self::Text(fill(s)),
            Self::CssWithText { css, text } => Self::CssWithText {
                css: fill(css),
                text: fill(text),
            },
        }
    }

    /// Convert to a JavaScript query returning the first match (or null)
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelector({s:?})"),
            Self::XPath(s) => {
                format!("document.evaluate({s:?}, document, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue")
            }
            Self::Text(t) => {
                format!("Array.from(document.querySelectorAll('*')).find(el => el.textContent.includes({t:?}))")
            }
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).find(el => el.textContent.includes({text:?}))")
            }
        }
    }

    /// Convert to a JavaScript query counting matches
    #[must_use]
    pub fn to_count_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelectorAll({s:?}).length"),
            Self::XPath(s) => {
                format!("document.evaluate({s:?}, document, null, XPathResult.ORDERED_NODE_SNAPSHOT_TYPE, null).snapshotLength")
            }
            Self::Text(t) => {
                format!("Array.from(document.querySelectorAll('*')).filter(el => el.textContent.includes({t:?})).length")
            }
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.includes({text:?})).length")
            }
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css(s) => write!(f, "css={s}"),
            Self::XPath(s) => write!(f, "xpath={s}"),
            Self::Text(s) => write!(f, "text={s}"),
            Self::CssWithText { css, text } => write!(f, "css={css}[text~={text}]"),
        }
    }
}

/// Wait behavior for a locator
#[derive(Debug, Clone)]
pub struct LocatorOptions {
    /// Timeout for bounded waits
    pub timeout: Duration,
    /// Polling interval for bounded waits
    pub poll_interval: Duration,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_WAIT_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

/// A locator for finding and interacting with elements
#[derive(Debug, Clone)]
pub struct Locator {
    selector: Selector,
    options: LocatorOptions,
}

impl Locator {
    /// Create a locator from a selector
    #[must_use]
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            options: LocatorOptions::default(),
        }
    }

    /// Get the selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Get the options
    #[must_use]
    pub const fn options(&self) -> &LocatorOptions {
        &self.options
    }

    /// Set a custom timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Set a custom polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.options.poll_interval = interval;
        self
    }

    /// Bind the selector's `{}` placeholder to a concrete value
    #[must_use]
    pub fn bind(&self, value: &str) -> Self {
        Self {
            selector: self.selector.bind(value),
            options: self.options.clone(),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.selector.fmt(f)
    }
}
