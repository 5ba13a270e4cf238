//! Built-in parameter handlers.
//!
//! Each handler consumes a fixed number of raw tokens and writes exactly
//! one configuration key, overwriting any prior value and emitting one
//! trace line per successful write.

use keystone_store::{is_recognized_level, ConfigStore};
use tracing::info;

use crate::{HandlerDescriptor, ParamError, ParamHandler};

/// Writes `raw[0]` to `data.host`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataHost;

impl ParamHandler for DataHost {
    fn descriptor(&self) -> HandlerDescriptor {
        HandlerDescriptor::new("data-host", 1, "data.host")
    }

    fn parse(&self, raw: &[String], store: &ConfigStore) -> Result<(), ParamError> {
        let host = self.descriptor().token(raw, 0)?;
        store.set("data", "host", host.into())?;
        info!(key = "data.host", value = host, "set data host");
        Ok(())
    }
}

/// Writes `raw[0]` to `data.root`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataRoot;

impl ParamHandler for DataRoot {
    fn descriptor(&self) -> HandlerDescriptor {
        HandlerDescriptor::new("data-root", 1, "data.root")
    }

    fn parse(&self, raw: &[String], store: &ConfigStore) -> Result<(), ParamError> {
        let root = self.descriptor().token(raw, 0)?;
        store.set("data", "root", root.into())?;
        info!(key = "data.root", value = root, "set data root");
        Ok(())
    }
}

/// Parses `raw[0]` as a port number and writes it to `api.port`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPort;

impl ParamHandler for ApiPort {
    fn descriptor(&self) -> HandlerDescriptor {
        HandlerDescriptor::new("api-port", 1, "api.port")
    }

    fn parse(&self, raw: &[String], store: &ConfigStore) -> Result<(), ParamError> {
        let descriptor = self.descriptor();
        let token = descriptor.token(raw, 0)?;
        let port: u16 = token.parse().map_err(|_| {
            ParamError::invalid_argument(
                descriptor.name,
                format!("expected a port number, got {token:?}"),
            )
        })?;
        if port == 0 {
            return Err(ParamError::invalid_argument(
                descriptor.name,
                "port must be nonzero",
            ));
        }
        store.set("api", "port", port.into())?;
        info!(key = "api.port", value = i64::from(port), "set api port");
        Ok(())
    }
}

/// Upper-cases `raw[0]`, checks it against the recognized level names,
/// and writes it to `logs.elvl`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLevel;

impl ParamHandler for LogLevel {
    fn descriptor(&self) -> HandlerDescriptor {
        HandlerDescriptor::new("log-level", 1, "logs.elvl")
    }

    fn parse(&self, raw: &[String], store: &ConfigStore) -> Result<(), ParamError> {
        let descriptor = self.descriptor();
        let token = descriptor.token(raw, 0)?;
        if !is_recognized_level(token) {
            return Err(ParamError::invalid_argument(
                descriptor.name,
                format!("unrecognized level {token:?}"),
            ));
        }
        let level = token.to_uppercase();
        store.set("logs", "elvl", level.as_str().into())?;
        info!(key = "logs.elvl", value = %level, "set log level");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystone_store::{ConfigValue, StoreError};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_data_host_overwrites_default() {
        let store = ConfigStore::with_defaults();
        assert_eq!(store.get_str("data", "host").unwrap(), "localhost");

        DataHost.parse(&args(&["example.org"]), &store).unwrap();
        assert_eq!(store.get_str("data", "host").unwrap(), "example.org");
    }

    #[test]
    fn test_data_host_empty_input_writes_nothing() {
        let store = ConfigStore::new();
        let err = DataHost.parse(&[], &store).unwrap_err();
        assert!(matches!(err, ParamError::InvalidArgument { .. }));
        assert!(matches!(
            store.get("data", "host"),
            Err(StoreError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_data_host_creates_namespace() {
        let store = ConfigStore::new();
        DataHost.parse(&args(&["example.org"]), &store).unwrap();
        assert_eq!(store.get_str("data", "host").unwrap(), "example.org");
    }

    #[test]
    fn test_data_root() {
        let store = ConfigStore::with_defaults();
        DataRoot.parse(&args(&["/srv/keystone"]), &store).unwrap();
        assert_eq!(store.get_str("data", "root").unwrap(), "/srv/keystone");
    }

    #[test]
    fn test_api_port_parses_integer() {
        let store = ConfigStore::with_defaults();
        ApiPort.parse(&args(&["8080"]), &store).unwrap();
        assert_eq!(store.get("api", "port").unwrap(), ConfigValue::from(8080i64));
    }

    #[test]
    fn test_api_port_rejects_non_numeric() {
        let store = ConfigStore::with_defaults();
        let err = ApiPort.parse(&args(&["not-a-port"]), &store).unwrap_err();
        assert!(matches!(err, ParamError::InvalidArgument { .. }));
        // Prior value untouched
        assert_eq!(store.get_int("api", "port").unwrap(), 5000);
    }

    #[test]
    fn test_api_port_rejects_zero() {
        let store = ConfigStore::with_defaults();
        let err = ApiPort.parse(&args(&["0"]), &store).unwrap_err();
        assert!(matches!(err, ParamError::InvalidArgument { .. }));
    }

    #[test]
    fn test_log_level_uppercases() {
        let store = ConfigStore::with_defaults();
        LogLevel.parse(&args(&["debug"]), &store).unwrap();
        assert_eq!(store.get_str("logs", "elvl").unwrap(), "DEBUG");
    }

    #[test]
    fn test_log_level_rejects_unknown() {
        let store = ConfigStore::with_defaults();
        let err = LogLevel.parse(&args(&["LOUD"]), &store).unwrap_err();
        assert!(matches!(err, ParamError::InvalidArgument { .. }));
        assert_eq!(store.get_str("logs", "elvl").unwrap(), "INFO");
    }

    #[test]
    fn test_handlers_ignore_extra_tokens() {
        let store = ConfigStore::with_defaults();
        DataHost
            .parse(&args(&["example.org", "ignored"]), &store)
            .unwrap();
        assert_eq!(store.get_str("data", "host").unwrap(), "example.org");
    }
}
