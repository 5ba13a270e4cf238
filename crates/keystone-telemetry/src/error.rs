//! Telemetry error types.

use thiserror::Error;

/// Errors that can occur during telemetry initialization.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Logging initialization failed.
    #[error("logging initialization failed: {0}")]
    LoggingInit(String),

    /// The configured log level could not be resolved from the store.
    #[error(transparent)]
    Store(#[from] keystone_store::StoreError),
}

/// Result alias for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init_display() {
        let err = TelemetryError::LoggingInit("invalid level".to_string());
        assert!(err.to_string().contains("invalid level"));
    }
}
