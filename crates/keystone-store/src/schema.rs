//! Typed default configuration schema.
//!
//! This module defines the namespace structure the store is seeded with.
//! Each struct maps to one store namespace; the external key names are a
//! compatibility contract and carry over verbatim into the seeded tree,
//! including the `DEFAULT` namespace holding the service name.

use serde::{Deserialize, Serialize};

use crate::value::{ConfigTable, ConfigValue};
use crate::ConfigError;

/// Service name used to render name-dependent default values.
pub const SERVICE_NAME: &str = "keystone";

/// Log level names accepted by the `logs.elvl` key.
pub const RECOGNIZED_LEVELS: [&str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

/// Complete Keystone configuration schema.
///
/// This is the root type behind the store's default seed. Use
/// [`ConfigLoader`](crate::ConfigLoader) to load it from files and
/// environment variables, or [`KeystoneConfig::default`] for the built-in
/// values.
///
/// # Example
///
/// ```
/// use keystone_store::KeystoneConfig;
///
/// let config = KeystoneConfig::default();
/// assert_eq!(config.data.host, "localhost");
/// assert_eq!(config.api.port, 5000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KeystoneConfig {
    /// Service name, seeded under `DEFAULT.name`.
    #[serde(default = "default_name")]
    pub name: String,

    /// Network binding section, seeded under `api`.
    #[serde(default)]
    pub api: ApiConfig,

    /// Data location section, seeded under `data`.
    #[serde(default)]
    pub data: DataConfig,

    /// Descriptive metadata section, seeded under `info`.
    #[serde(default)]
    pub info: InfoConfig,

    /// Logging section, seeded under `logs`.
    #[serde(default)]
    pub logs: LogsConfig,
}

impl Default for KeystoneConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            api: ApiConfig::default(),
            data: DataConfig::default(),
            info: InfoConfig::default(),
            logs: LogsConfig::default(),
        }
    }
}

impl KeystoneConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if:
    /// - `api.port` is zero
    /// - `logs.elvl` is not a recognized level name
    /// - `name` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::invalid_value("name", "must not be empty"));
        }
        if self.api.port == 0 {
            return Err(ConfigError::invalid_value("api.port", "must be nonzero"));
        }
        if !is_recognized_level(&self.logs.elvl) {
            return Err(ConfigError::invalid_value(
                "logs.elvl",
                format!(
                    "unrecognized level {:?}, expected one of {}",
                    self.logs.elvl,
                    RECOGNIZED_LEVELS.join(", ")
                ),
            ));
        }
        Ok(())
    }

    /// Converts the schema into the namespace tree the store is seeded
    /// with, preserving the external key names verbatim.
    #[must_use]
    pub fn to_table(&self) -> ConfigTable {
        let mut root = ConfigTable::new();

        let mut default_ns = ConfigTable::new();
        default_ns.insert("name".into(), self.name.as_str().into());
        root.insert("DEFAULT".into(), default_ns.into());

        let mut api = ConfigTable::new();
        api.insert("ipv4".into(), self.api.ipv4.as_str().into());
        api.insert("ipv6".into(), self.api.ipv6.as_str().into());
        api.insert("port".into(), self.api.port.into());
        api.insert("root".into(), self.api.root.as_str().into());
        root.insert("api".into(), api.into());

        let mut data = ConfigTable::new();
        data.insert("host".into(), self.data.host.as_str().into());
        data.insert("root".into(), self.data.root.as_str().into());
        data.insert("spec".into(), self.data.spec.as_str().into());
        root.insert("data".into(), data.into());

        let mut info = ConfigTable::new();
        info.insert("desc".into(), self.info.desc.as_str().into());
        info.insert("link".into(), self.info.link.as_str().into());
        info.insert("mail".into(), self.info.mail.as_str().into());
        info.insert("repo".into(), self.info.repo.as_str().into());
        root.insert("info".into(), info.into());

        let mut logs = ConfigTable::new();
        logs.insert("elvl".into(), self.logs.elvl.as_str().into());
        root.insert("logs".into(), logs.into());

        root
    }
}

/// Returns `true` if `level` names a recognized log level.
///
/// The comparison is case-insensitive; the store conventionally holds the
/// upper-cased form.
#[must_use]
pub fn is_recognized_level(level: &str) -> bool {
    RECOGNIZED_LEVELS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(level))
}

/// Network binding configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// IPv4 bind address.
    #[serde(default = "default_ipv4")]
    pub ipv4: String,

    /// IPv6 bind network.
    #[serde(default = "default_ipv6")]
    pub ipv6: String,

    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// URL root the API is served under.
    #[serde(default = "default_api_root")]
    pub root: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            ipv4: default_ipv4(),
            ipv6: default_ipv6(),
            port: default_port(),
            root: default_api_root(),
        }
    }
}

fn default_name() -> String {
    SERVICE_NAME.to_string()
}

fn default_ipv4() -> String {
    "0.0.0.0".to_string()
}

fn default_ipv6() -> String {
    "::/0".to_string()
}

const fn default_port() -> u16 {
    5000
}

fn default_api_root() -> String {
    "/api".to_string()
}

/// Data location configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Backing data host.
    #[serde(default = "default_data_host")]
    pub host: String,

    /// Storage root directory.
    #[serde(default = "default_data_root")]
    pub root: String,

    /// Per-dataset spec file name.
    #[serde(default = "default_data_spec")]
    pub spec: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            host: default_data_host(),
            root: default_data_root(),
            spec: default_data_spec(),
        }
    }
}

fn default_data_host() -> String {
    "localhost".to_string()
}

// The original rendered these from the service name at read time; here
// they are rendered once at construction.
fn default_data_root() -> String {
    format!("/var/lib/{SERVICE_NAME}")
}

fn default_data_spec() -> String {
    format!(".{SERVICE_NAME}")
}

/// Descriptive metadata configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InfoConfig {
    /// One-line service description.
    #[serde(default = "default_desc")]
    pub desc: String,

    /// Project homepage.
    #[serde(default = "default_link")]
    pub link: String,

    /// Contact address.
    #[serde(default = "default_mail")]
    pub mail: String,

    /// Source repository.
    #[serde(default = "default_repo")]
    pub repo: String,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            desc: default_desc(),
            link: default_link(),
            mail: default_mail(),
            repo: default_repo(),
        }
    }
}

fn default_desc() -> String {
    format!("{SERVICE_NAME} - runtime configuration service")
}

fn default_link() -> String {
    "https://keystone-rs.github.io".to_string()
}

fn default_mail() -> String {
    "maintainers@keystone-rs.dev".to_string()
}

fn default_repo() -> String {
    "https://github.com/keystone-rs/keystone".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LogsConfig {
    /// Effective log level name.
    #[serde(default = "default_elvl")]
    pub elvl: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            elvl: default_elvl(),
        }
    }
}

fn default_elvl() -> String {
    "INFO".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = KeystoneConfig::default();
        assert_eq!(config.name, "keystone");
        assert_eq!(config.api.ipv4, "0.0.0.0");
        assert_eq!(config.api.ipv6, "::/0");
        assert_eq!(config.api.port, 5000);
        assert_eq!(config.api.root, "/api");
        assert_eq!(config.data.host, "localhost");
        assert_eq!(config.data.root, "/var/lib/keystone");
        assert_eq!(config.data.spec, ".keystone");
        assert_eq!(config.logs.elvl, "INFO");
    }

    #[test]
    fn test_default_config_validates() {
        assert!(KeystoneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = KeystoneConfig {
            api: ApiConfig {
                port: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.port"));
    }

    #[test]
    fn test_unknown_level_rejected() {
        let config = KeystoneConfig {
            logs: LogsConfig {
                elvl: "LOUD".to_string(),
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logs.elvl"));
    }

    #[test]
    fn test_level_recognition_is_case_insensitive() {
        assert!(is_recognized_level("info"));
        assert!(is_recognized_level("INFO"));
        assert!(is_recognized_level("Warn"));
        assert!(!is_recognized_level("VERBOSE"));
    }

    #[test]
    fn test_to_table_preserves_external_keys() {
        let table = KeystoneConfig::default().to_table();
        let data = table["data"].as_table().unwrap();
        assert_eq!(data["host"].as_str(), Some("localhost"));
        assert_eq!(data["root"].as_str(), Some("/var/lib/keystone"));
        assert_eq!(data["spec"].as_str(), Some(".keystone"));

        let api = table["api"].as_table().unwrap();
        assert_eq!(api["port"].as_int(), Some(5000));

        let default_ns = table["DEFAULT"].as_table().unwrap();
        assert_eq!(default_ns["name"].as_str(), Some("keystone"));

        let info = table["info"].as_table().unwrap();
        assert!(info.contains_key("desc"));
        assert!(info.contains_key("link"));
        assert!(info.contains_key("mail"));
        assert!(info.contains_key("repo"));

        assert_eq!(table["logs"].as_table().unwrap()["elvl"].as_str(), Some("INFO"));
    }

    #[test]
    fn test_toml_deserialize_with_defaults() {
        let toml = r#"
            [data]
            host = "db.internal"
        "#;
        let config: KeystoneConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.data.host, "db.internal");
        // Defaults applied
        assert_eq!(config.data.root, "/var/lib/keystone");
        assert_eq!(config.api.port, 5000);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml = r#"
            [data]
            host = "db.internal"
            unknown_field = "value"
        "#;
        let result: Result<KeystoneConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
