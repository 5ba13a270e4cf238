//! Layered configuration loader.
//!
//! [`ConfigLoader`] assembles a [`KeystoneConfig`] from layers, with later
//! layers overriding earlier ones:
//! 1. Built-in default values
//! 2. A TOML or JSON configuration file
//! 3. Environment variables

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use crate::{ConfigError, KeystoneConfig};

/// Configuration loader with a layered approach.
///
/// # Example
///
/// ```no_run
/// use keystone_store::ConfigLoader;
///
/// # fn main() -> Result<(), keystone_store::ConfigError> {
/// let config = ConfigLoader::new()
///     .with_defaults()
///     .with_optional_file("keystone.toml")?
///     .with_env_prefix("KEYSTONE")
///     .load()?;
///
/// println!("data host: {}", config.data.host);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigLoader {
    config: KeystoneConfig,
    env_prefix: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new loader starting from the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: KeystoneConfig::default(),
            env_prefix: None,
        }
    }

    /// Start from default configuration values.
    ///
    /// This is what `new()` does already; chain it for clarity.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.config = KeystoneConfig::default();
        self
    }

    /// Load configuration from a file.
    ///
    /// Supports TOML (`.toml`) and JSON (`.json`); the format is chosen by
    /// the file extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file does not exist, cannot be read,
    /// contains invalid TOML/JSON, or contains unknown fields.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
        self.config = Self::parse_file(&content, path)?;
        Ok(self)
    }

    /// Load configuration from a file if it exists, otherwise continue
    /// with the current layer untouched.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or
    /// parsed.
    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            self.with_file(path)
        } else {
            Ok(self)
        }
    }

    /// Load configuration from a string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if parsing fails or the format is not
    /// `"toml"` or `"json"`.
    pub fn with_string(mut self, content: &str, format: &str) -> Result<Self, ConfigError> {
        self.config = match format.to_lowercase().as_str() {
            "toml" => toml::from_str(content)?,
            "json" => serde_json::from_str(content)?,
            _ => {
                return Err(ConfigError::validation_error(format!(
                    "unsupported configuration format: {format}"
                )))
            }
        };
        Ok(self)
    }

    /// Set the environment variable prefix for overrides.
    ///
    /// Variables use the `PREFIX__SECTION__KEY` grammar, for example
    /// `KEYSTONE__DATA__HOST=db.internal` or `KEYSTONE__API__PORT=8080`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_uppercase());
        self
    }

    /// Load a `.env` file into the process environment.
    ///
    /// Missing files are ignored.
    #[must_use]
    pub fn with_dotenv(self) -> Self {
        let _ = dotenvy::dotenv();
        self
    }

    /// Finalize and return the loaded configuration.
    ///
    /// Applies environment variable overrides (if a prefix was set) and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an override fails to parse or validation
    /// fails.
    pub fn load(mut self) -> Result<KeystoneConfig, ConfigError> {
        if let Some(prefix) = self.env_prefix.take() {
            self.apply_env_overrides(&prefix)?;
        }

        self.config.validate()?;
        Ok(self.config)
    }

    /// Finalize without validation.
    ///
    /// Use this to inspect or modify the configuration before validating
    /// it yourself.
    #[must_use]
    pub fn load_unvalidated(self) -> KeystoneConfig {
        self.config
    }

    // Parse configuration file based on extension
    fn parse_file(content: &str, path: &Path) -> Result<KeystoneConfig, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(toml::from_str(content)?),
            Some("json") => Ok(serde_json::from_str(content)?),
            _ => Err(ConfigError::validation_error(format!(
                "unsupported configuration file format: {}",
                path.display()
            ))),
        }
    }

    // Apply environment variable overrides
    fn apply_env_overrides(&mut self, prefix: &str) -> Result<(), ConfigError> {
        let env_vars: HashMap<String, String> = env::vars()
            .filter(|(k, _)| k.starts_with(prefix))
            .collect();

        for (key, value) in env_vars {
            self.apply_env_var(&key, &value, prefix)?;
        }

        Ok(())
    }

    // Apply a single environment variable
    fn apply_env_var(&mut self, key: &str, value: &str, prefix: &str) -> Result<(), ConfigError> {
        let key_without_prefix = key
            .strip_prefix(prefix)
            .and_then(|k| k.strip_prefix("__"))
            .ok_or_else(|| ConfigError::env_parse_error(key, "invalid key format"))?;

        let parts: Vec<&str> = key_without_prefix.split("__").collect();

        match parts.as_slice() {
            ["NAME"] => {
                self.config.name = value.to_string();
            }

            // api section
            ["API", "IPV4"] => {
                self.config.api.ipv4 = value.to_string();
            }
            ["API", "IPV6"] => {
                self.config.api.ipv6 = value.to_string();
            }
            ["API", "PORT"] => {
                self.config.api.port = value
                    .parse()
                    .map_err(|_| ConfigError::env_parse_error(key, "expected integer"))?;
            }
            ["API", "ROOT"] => {
                self.config.api.root = value.to_string();
            }

            // data section
            ["DATA", "HOST"] => {
                self.config.data.host = value.to_string();
            }
            ["DATA", "ROOT"] => {
                self.config.data.root = value.to_string();
            }
            ["DATA", "SPEC"] => {
                self.config.data.spec = value.to_string();
            }

            // info section
            ["INFO", "DESC"] => {
                self.config.info.desc = value.to_string();
            }
            ["INFO", "LINK"] => {
                self.config.info.link = value.to_string();
            }
            ["INFO", "MAIL"] => {
                self.config.info.mail = value.to_string();
            }
            ["INFO", "REPO"] => {
                self.config.info.repo = value.to_string();
            }

            // logs section
            ["LOGS", "ELVL"] => {
                self.config.logs.elvl = value.to_uppercase();
            }

            // Unknown key - ignore (could also warn)
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config, KeystoneConfig::default());
    }

    #[test]
    fn test_with_string_toml_overrides_defaults() {
        let toml = r#"
            [data]
            host = "db.internal"

            [api]
            port = 8080
        "#;
        let config = ConfigLoader::new()
            .with_string(toml, "toml")
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(config.data.host, "db.internal");
        assert_eq!(config.api.port, 8080);
        // Untouched sections keep defaults
        assert_eq!(config.logs.elvl, "INFO");
    }

    #[test]
    fn test_with_string_json() {
        let json = r#"{"data": {"host": "db.internal"}}"#;
        let config = ConfigLoader::new()
            .with_string(json, "json")
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(config.data.host, "db.internal");
    }

    #[test]
    fn test_with_string_unsupported_format() {
        let result = ConfigLoader::new().with_string("data: {}", "yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_with_file_missing() {
        let result = ConfigLoader::new().with_file("/nonexistent/keystone.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_with_optional_file_missing_is_ok() {
        let loader = ConfigLoader::new()
            .with_optional_file("/nonexistent/keystone.toml")
            .unwrap();
        assert_eq!(loader.load_unvalidated(), KeystoneConfig::default());
    }

    #[test]
    fn test_with_file_toml() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[data]\nhost = \"db.internal\"").unwrap();

        let config = ConfigLoader::new()
            .with_file(file.path())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(config.data.host, "db.internal");
    }

    #[test]
    fn test_env_override_applies() {
        let mut loader = ConfigLoader::new();
        loader
            .apply_env_var("KEYSTONE__DATA__HOST", "db.internal", "KEYSTONE")
            .unwrap();
        loader
            .apply_env_var("KEYSTONE__API__PORT", "8080", "KEYSTONE")
            .unwrap();
        loader
            .apply_env_var("KEYSTONE__LOGS__ELVL", "debug", "KEYSTONE")
            .unwrap();

        let config = loader.load_unvalidated();
        assert_eq!(config.data.host, "db.internal");
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.logs.elvl, "DEBUG");
    }

    #[test]
    fn test_env_layer_overrides_file_layer() {
        let toml = r#"
            [data]
            host = "from-file"
            root = "/srv/from-file"
        "#;
        let mut loader = ConfigLoader::new().with_string(toml, "toml").unwrap();
        loader
            .apply_env_var("KEYSTONE__DATA__HOST", "from-env", "KEYSTONE")
            .unwrap();

        let config = loader.load_unvalidated();
        // Env wins over the file layer
        assert_eq!(config.data.host, "from-env");
        // File keys the env did not touch survive
        assert_eq!(config.data.root, "/srv/from-file");
        // Untouched sections keep defaults
        assert_eq!(config.api.port, 5000);
    }

    #[test]
    fn test_env_override_bad_integer() {
        let mut loader = ConfigLoader::new();
        let result = loader.apply_env_var("KEYSTONE__API__PORT", "not-a-port", "KEYSTONE");
        assert!(matches!(result, Err(ConfigError::EnvParseError { .. })));
    }

    #[test]
    fn test_env_override_unknown_key_ignored() {
        let mut loader = ConfigLoader::new();
        loader
            .apply_env_var("KEYSTONE__NO__SUCH__KEY", "value", "KEYSTONE")
            .unwrap();
        assert_eq!(loader.load_unvalidated(), KeystoneConfig::default());
    }

    #[test]
    fn test_load_validates() {
        let toml = r#"
            [logs]
            elvl = "LOUD"
        "#;
        let result = ConfigLoader::new().with_string(toml, "toml").unwrap().load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
