//! Validar: Functional Test Suite for the Forja Server
//!
//! Validar (Spanish: "to validate") exercises a live Forja deployment
//! through its three public surfaces and asserts product behavior:
//! entity CRUD, lifecycle transitions, and publish/promote workflows.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     VALIDAR Architecture                          │
//! ├──────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────────────┐    │
//! │   │ Test Case  │───►│ Session /  │───►│ Forja deployment   │    │
//! │   │ (Rust)     │    │ api::Client│    │ (REST, martillo,   │    │
//! │   │            │    │ cli::Runner│    │  web UI)           │    │
//! │   └────────────┘    └────────────┘    └────────────────────┘    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The UI layer is a page-object model: a locator registry, a base page
//! with bounded-wait primitives, a navigator that maps logical
//! destinations to menu click sequences, and one page object per entity
//! type. Sessions scope an authenticated browser context and guarantee
//! logout on every exit path.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(test, allow(clippy::large_stack_arrays, clippy::large_stack_frames))]

/// REST client for the product API (`api/v2`, `content/api/v2`).
pub mod api;

/// Wrapper around the product's `martillo` command-line tool.
pub mod cli;

mod config;
mod datagen;
mod result;

/// Browser-driven page-object layer.
pub mod ui;

pub use config::{Settings, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS};
pub use datagen::{invalid_values_list, valid_data_list, DataFactory, Seed, StringKind};
pub use result::{Error, ValidarResult};

/// Initialize tracing for live suite runs.
///
/// Honors `RUST_LOG`; defaults to `info`. Safe to call from every test
/// in a binary — only the first call installs the subscriber.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
