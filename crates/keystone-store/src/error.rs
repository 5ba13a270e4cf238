//! Store and loader error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`ConfigStore`](crate::ConfigStore) operations.
///
/// Reads of unset keys fail loudly with [`StoreError::KeyNotFound`] rather
/// than returning a sentinel; callers that want fallback behavior handle
/// the error themselves.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested key was never defaulted nor set.
    #[error("configuration key not found: {path}")]
    KeyNotFound {
        /// Full dotted path of the missing key.
        path: String,
    },

    /// A path segment resolved to a leaf where a namespace was required.
    #[error("not a namespace: {path} is a {kind}")]
    NotANamespace {
        /// Full dotted path of the offending segment.
        path: String,
        /// Shape of the value actually found.
        kind: &'static str,
    },

    /// The value exists but has a different shape than requested.
    #[error("type mismatch for {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Full dotted path of the value.
        path: String,
        /// Shape the caller asked for.
        expected: &'static str,
        /// Shape actually stored.
        found: &'static str,
    },
}

impl StoreError {
    /// Create a new key-not-found error.
    pub fn key_not_found(path: impl Into<String>) -> Self {
        Self::KeyNotFound { path: path.into() }
    }

    /// Create a new not-a-namespace error.
    pub fn not_a_namespace(path: impl Into<String>, kind: &'static str) -> Self {
        Self::NotANamespace {
            path: path.into(),
            kind,
        }
    }

    /// Create a new type-mismatch error.
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected,
            found,
        }
    }
}

/// Errors that can occur while loading the typed configuration schema.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Failed to read configuration file.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Environment variable parsing error.
    #[error("failed to parse environment variable {var}: {reason}")]
    EnvParseError {
        /// The environment variable name.
        var: String,
        /// Explanation of the parsing error.
        reason: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for {field}: {reason}")]
    InvalidValue {
        /// The field with the invalid value.
        field: String,
        /// Explanation of why the value is invalid.
        reason: String,
    },

    /// Validation error after loading.
    #[error("configuration validation failed: {0}")]
    ValidationError(String),
}

impl ConfigError {
    /// Create a new file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a new environment variable parse error.
    pub fn env_parse_error(var: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EnvParseError {
            var: var.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid value error.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new validation error.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_display() {
        let err = StoreError::key_not_found("data.host");
        assert!(err.to_string().contains("data.host"));
    }

    #[test]
    fn test_not_a_namespace_display() {
        let err = StoreError::not_a_namespace("data.host", "string");
        assert!(err.to_string().contains("data.host"));
        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = StoreError::type_mismatch("api.port", "string", "integer");
        assert!(err.to_string().contains("api.port"));
        assert!(err.to_string().contains("expected string"));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = ConfigError::file_not_found("/etc/keystone.toml");
        assert!(err.to_string().contains("/etc/keystone.toml"));
    }

    #[test]
    fn test_env_parse_error_display() {
        let err = ConfigError::env_parse_error("KEYSTONE__API__PORT", "expected integer");
        assert!(err.to_string().contains("KEYSTONE__API__PORT"));
        assert!(err.to_string().contains("expected integer"));
    }
}
