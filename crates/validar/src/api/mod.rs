//! REST client for the product API.
//!
//! Infrastructure entities live under `api/v2`, content entities under
//! `content/api/v2`. The client is a thin JSON wrapper; the typed
//! entities in [`entities`] own the endpoint paths and payload shapes.
//! Long-running operations (publish, promote, sync) come back as tasks
//! and are awaited with [`tasks::wait_for`].

mod client;

/// Typed product entities and their operations.
pub mod entities;

/// Server task polling.
pub mod tasks;

pub use client::{Client, ServerStatus};
