//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Validar library error
    #[error("{0}")]
    Validar(#[from] validar::Error),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_constructor() {
        let err = CliError::config("missing server URL");
        assert!(err.to_string().contains("missing server URL"));
    }

    #[test]
    fn test_validar_error_passthrough() {
        let err = CliError::from(validar::Error::Config {
            message: "bad".to_string(),
        });
        assert!(matches!(err, CliError::Validar(_)));
    }
}
