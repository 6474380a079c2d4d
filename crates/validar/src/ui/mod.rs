//! Browser-driven page-object layer.
//!
//! Structure mirrors the data flow of a UI test: a [`Session`] acquires
//! an authenticated [`page::Page`], the [`Navigator`] positions it on a
//! listing page, and a page object performs entity operations through
//! the base primitives in [`base::Ui`], addressing elements through the
//! [`locators::LocatorRegistry`].

/// Generic page primitives shared by every page object.
pub mod base;

/// Locator model: selectors, queries, templates.
pub mod locator;

/// The registry of symbolic locator names.
pub mod locators;

/// Menu navigation to listing pages.
pub mod navigator;

/// The browser page seam (CDP or in-memory mock).
pub mod page;

/// Entity page objects.
pub mod pages;

/// Session-scoped helpers that create entities through the UI.
pub mod factory;

/// Scoped login/logout.
pub mod session;

/// Bounded-wait options and the poll loop.
pub mod wait;

pub use base::{Element, Ui};
pub use locator::{Locator, Selector};
pub use locators::LocatorRegistry;
pub use navigator::{Destination, Navigator};
pub use page::Page;
pub use session::Session;
pub use wait::WaitOptions;

/// Names longer than this cannot be targeted by the exact-match listing
/// widget; `search` dispatches to the filtered-search locator instead.
pub const SEARCH_NAME_THRESHOLD: usize = 30;
