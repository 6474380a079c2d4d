//! Subprocess execution of the product CLI.

use tokio::process::Command;
use tracing::debug;

use crate::result::{Error, ValidarResult};
use crate::Settings;

/// Captured result of one CLI invocation
#[derive(Debug, Clone)]
pub struct CliOutput {
    /// Process exit code (`-1` if terminated by a signal)
    pub code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CliOutput {
    /// Whether the invocation exited zero
    #[must_use]
    pub const fn success(&self) -> bool {
        self.code == 0
    }

    /// Standard output split into lines
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Executes `martillo` subcommands with the suite's connection flags
#[derive(Debug, Clone)]
pub struct Runner {
    settings: Settings,
}

impl Runner {
    /// Create a runner from suite settings
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// The settings this runner connects with
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run a subcommand and capture its output, whatever the exit code.
    ///
    /// Connection flags (`--server`, `--username`, `--password`) are
    /// prepended from settings.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the binary cannot be spawned at all.
    pub async fn execute(&self, args: &[&str]) -> ValidarResult<CliOutput> {
        debug!(binary = %self.settings.cli_binary, ?args, "executing CLI");
        let output = Command::new(&self.settings.cli_binary)
            .arg("--server")
            .arg(&self.settings.server_url)
            .arg("--username")
            .arg(&self.settings.username)
            .arg("--password")
            .arg(&self.settings.password)
            .args(args)
            .output()
            .await?;
        Ok(CliOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Run a subcommand and require a zero exit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CliReturnCode`] on a non-zero exit.
    pub async fn execute_ok(&self, args: &[&str]) -> ValidarResult<CliOutput> {
        let output = self.execute(args).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(Error::CliReturnCode {
                code: output.code,
                stderr: output.stderr.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_settings() -> Settings {
        Settings::new()
            .with_server_url("https://forja.test")
            .with_credentials("admin", "changeme")
            .with_cli_binary("echo")
    }

    #[tokio::test]
    async fn test_execute_prepends_connection_flags() {
        let runner = Runner::new(echo_settings());
        let output = runner
            .execute(&["lifecycle-environment", "list"])
            .await
            .unwrap();
        assert!(output.success());
        assert!(output.stdout.contains("--server https://forja.test"));
        assert!(output.stdout.contains("lifecycle-environment list"));
    }

    #[tokio::test]
    async fn test_execute_ok_maps_nonzero_exit() {
        let runner = Runner::new(echo_settings().with_cli_binary("false"));
        let err = runner.execute_ok(&[]).await.unwrap_err();
        match err {
            Error::CliReturnCode { code, .. } => assert_ne!(code, 0),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_missing_binary_is_io_error() {
        let runner = Runner::new(echo_settings().with_cli_binary("definitely-not-a-binary"));
        let err = runner.execute(&[]).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_output_lines() {
        let output = CliOutput {
            code: 0,
            stdout: "a\nb\n".to_string(),
            stderr: String::new(),
        };
        assert_eq!(output.lines(), vec!["a", "b"]);
    }
}
