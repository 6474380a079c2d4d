//! Server task polling.
//!
//! Publish, promote and sync answer immediately with a task record;
//! the operation itself runs server-side. Completion is awaited with
//! the same bounded fixed-interval poll the UI layer uses for element
//! waits.

use serde::Deserialize;
use tracing::debug;

use super::client::Client;
use crate::result::{Error, ValidarResult};
use crate::ui::wait::{poll_until, WaitOptions};

/// A server-side task
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    /// Task identifier
    pub id: String,
    /// Lifecycle state: `planned`, `running`, `paused`, `stopped`
    #[serde(default)]
    pub state: String,
    /// Outcome once stopped: `success`, `warning`, `error`
    #[serde(default)]
    pub result: String,
}

impl Task {
    /// Whether the task has reached a terminal state
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.state == "stopped"
    }

    /// Whether the task stopped successfully
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.is_stopped() && self.result == "success"
    }
}

/// Read a task by id
pub async fn read(api: &Client, task_id: &str) -> ValidarResult<Task> {
    let value = api.get(&format!("api/v2/tasks/{task_id}")).await?;
    Ok(serde_json::from_value(value)?)
}

/// Poll a task until it stops, bounded by `options`.
///
/// # Errors
///
/// [`Error::TaskTimeout`] if the task is still running when the budget
/// runs out; [`Error::Task`] if it stopped in a non-success state.
pub async fn wait_for(api: &Client, task_id: &str, options: WaitOptions) -> ValidarResult<Task> {
    let stopped = poll_until(options, || async move {
        match read(api, task_id).await {
            Ok(task) => task.is_stopped(),
            Err(_) => false,
        }
    })
    .await;
    if !stopped {
        return Err(Error::TaskTimeout {
            id: task_id.to_string(),
            ms: options.timeout_ms,
        });
    }
    let task = read(api, task_id).await?;
    debug!(id = %task.id, result = %task.result, "task stopped");
    if task.succeeded() {
        Ok(task)
    } else {
        Err(Error::Task {
            id: task.id.clone(),
            state: task.result.clone(),
        })
    }
}
