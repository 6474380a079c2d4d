//! Entity page objects.
//!
//! One page object per product entity type, each composing the base
//! primitives with its own locators to expose create, search, update
//! and delete. All of them share the same search contract: names at or
//! below [`crate::ui::SEARCH_NAME_THRESHOLD`] characters are located
//! through the exact-match row locator; longer names go through the
//! filtered-search widget.

mod config_groups;
mod environment;
mod medium;

pub use config_groups::ConfigGroupsPage;
pub use environment::EnvironmentPage;
pub use medium::MediumPage;
