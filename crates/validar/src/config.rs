//! Suite configuration.
//!
//! Settings describe the deployment under test: where the server is, how
//! to authenticate, and how patient the UI layer should be. Values come
//! from the environment (`VALIDAR_*`) with builder-style overrides for
//! programmatic use.

use std::time::Duration;

use crate::result::{Error, ValidarResult};

/// Default timeout for element waits and task polls (30 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 30_000;

/// Default polling interval for element waits (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Suite settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the server under test (e.g. `https://forja.example.com`)
    pub server_url: String,
    /// Admin login
    pub username: String,
    /// Admin password
    pub password: String,
    /// Verify the server's TLS certificate (self-signed deployments say no)
    pub verify_tls: bool,
    /// Path to the `martillo` binary
    pub cli_binary: String,
    /// Element wait budget in milliseconds
    pub wait_timeout_ms: u64,
    /// Element wait polling interval in milliseconds
    pub poll_interval_ms: u64,
    /// Run the browser headless
    pub headless: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: String::from("https://localhost"),
            username: String::from("admin"),
            password: String::from("changeme"),
            verify_tls: false,
            cli_binary: String::from("martillo"),
            wait_timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            headless: true,
        }
    }
}

impl Settings {
    /// Create settings with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from `VALIDAR_*` environment variables.
    ///
    /// `VALIDAR_SERVER_URL` is required; everything else falls back to
    /// defaults. Boolean variables accept `1`/`true`/`yes`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the server URL is missing or a
    /// numeric variable fails to parse.
    pub fn from_env() -> ValidarResult<Self> {
        let mut settings = Self::default();
        settings.server_url =
            std::env::var("VALIDAR_SERVER_URL").map_err(|_| Error::Config {
                message: "VALIDAR_SERVER_URL is not set".to_string(),
            })?;
        if let Ok(user) = std::env::var("VALIDAR_USERNAME") {
            settings.username = user;
        }
        if let Ok(pass) = std::env::var("VALIDAR_PASSWORD") {
            settings.password = pass;
        }
        if let Ok(binary) = std::env::var("VALIDAR_CLI_BINARY") {
            settings.cli_binary = binary;
        }
        if let Ok(value) = std::env::var("VALIDAR_VERIFY_TLS") {
            settings.verify_tls = parse_bool(&value);
        }
        if let Ok(value) = std::env::var("VALIDAR_HEADLESS") {
            settings.headless = parse_bool(&value);
        }
        if let Ok(value) = std::env::var("VALIDAR_WAIT_TIMEOUT_MS") {
            settings.wait_timeout_ms = parse_ms("VALIDAR_WAIT_TIMEOUT_MS", &value)?;
        }
        if let Ok(value) = std::env::var("VALIDAR_POLL_INTERVAL_MS") {
            settings.poll_interval_ms = parse_ms("VALIDAR_POLL_INTERVAL_MS", &value)?;
        }
        tracing::debug!(server = %settings.server_url, "settings loaded from environment");
        Ok(settings)
    }

    /// Set the server URL
    #[must_use]
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    /// Set the credentials
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set the `martillo` binary path
    #[must_use]
    pub fn with_cli_binary(mut self, binary: impl Into<String>) -> Self {
        self.cli_binary = binary.into();
        self
    }

    /// Set TLS verification
    #[must_use]
    pub const fn with_verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Set the element wait budget
    #[must_use]
    pub const fn with_wait_timeout(mut self, ms: u64) -> Self {
        self.wait_timeout_ms = ms;
        self
    }

    /// Set the element wait polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Element wait budget as a Duration
    #[must_use]
    pub const fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }

    /// Polling interval as a Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Absolute URL for a server path
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.server_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "yes" | "TRUE" | "Yes")
}

fn parse_ms(name: &str, value: &str) -> ValidarResult<u64> {
    value.trim().parse().map_err(|_| Error::Config {
        message: format!("{name} must be an integer number of milliseconds, got {value:?}"),
    })
}
