//! Result and error types for Validar.

use thiserror::Error;

/// Result type for Validar operations
pub type ValidarResult<T> = Result<T, Error>;

/// Errors that can occur while driving the product under test.
///
/// The taxonomy mirrors the three interfaces: HTTP error responses from
/// the API, non-zero exits from the CLI, and element-wait failures from
/// the UI. Negative tests assert on these variants directly; everything
/// else propagates to the test boundary unhandled.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with an HTTP error status
    #[error("API request failed with status {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body (truncated server message)
        body: String,
    },

    /// The CLI exited non-zero
    #[error("CLI exited with code {code}: {stderr}")]
    CliReturnCode {
        /// Process exit code
        code: i32,
        /// Captured standard error
        stderr: String,
    },

    /// CLI output did not parse into the expected shape
    #[error("Unparseable CLI output: {message}")]
    CliOutput {
        /// What failed to parse
        message: String,
    },

    /// An expected element never appeared within the bounded wait
    #[error("Element {locator} not found after {ms}ms")]
    ElementNotFound {
        /// Resolved locator query
        locator: String,
        /// Wait budget that was exhausted
        ms: u64,
    },

    /// A symbolic locator name is missing from the registry
    #[error("Unknown locator name: {name}")]
    UnknownLocator {
        /// The name that failed to resolve
        name: String,
    },

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Page-level driver error (evaluate, click, fill)
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Login or logout did not complete
    #[error("Session error: {message}")]
    Session {
        /// Error message
        message: String,
    },

    /// A server task finished in a non-success state
    #[error("Task {id} ended in state {state}")]
    Task {
        /// Server task identifier
        id: String,
        /// Terminal state reported by the server
        state: String,
    },

    /// Timed out polling a server task
    #[error("Task {id} still running after {ms}ms")]
    TaskTimeout {
        /// Server task identifier
        id: String,
        /// Poll budget that was exhausted
        ms: u64,
    },

    /// Invalid or incomplete settings
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for HTTP error responses, the expected outcome of negative
    /// API tests.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// HTTP status of an API error, if that is what this is.
    #[must_use]
    pub const fn api_status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for non-zero CLI exits, the expected outcome of negative
    /// CLI tests.
    #[must_use]
    pub const fn is_cli_return_code(&self) -> bool {
        matches!(self, Self::CliReturnCode { .. })
    }
}
