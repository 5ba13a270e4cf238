//! Shared namespaced configuration store for Keystone.
//!
//! This crate provides the process-wide configuration store that the rest
//! of the application reads, along with:
//! - A typed default schema ([`KeystoneConfig`]) preserving the external
//!   key names (`api.*`, `data.*`, `info.*`, `logs.*`, `DEFAULT.name`)
//! - A layered loader (defaults → file → environment)
//! - Dotted-path and namespace/key access resolving to the same storage
//!
//! # Overview
//!
//! The store is constructed explicitly at startup and shared by `Arc`;
//! there is no hidden global. Namespaces are created lazily on first
//! write, and reads of unset keys fail loudly with
//! [`StoreError::KeyNotFound`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use keystone_store::{ConfigLoader, ConfigStore};
//!
//! # fn main() -> Result<(), keystone_store::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_env_prefix("KEYSTONE")
//!     .load()?;
//!
//! let store = Arc::new(ConfigStore::from_config(&config));
//! assert_eq!(store.get_str("data", "host").unwrap(), "localhost");
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! name = "keystone"
//!
//! [api]
//! ipv4 = "0.0.0.0"
//! ipv6 = "::/0"
//! port = 5000
//! root = "/api"
//!
//! [data]
//! host = "localhost"
//! root = "/var/lib/keystone"
//! spec = ".keystone"
//!
//! [logs]
//! elvl = "INFO"
//! ```
//!
//! # Environment Variable Overrides
//!
//! All schema values can be overridden using the `PREFIX__SECTION__KEY`
//! grammar, for example:
//!
//! - `KEYSTONE__DATA__HOST=db.internal`
//! - `KEYSTONE__API__PORT=8080`
//! - `KEYSTONE__LOGS__ELVL=debug`

#![warn(missing_docs)]

mod error;
mod loader;
mod schema;
mod store;
mod value;

pub use error::{ConfigError, StoreError};
pub use loader::ConfigLoader;
pub use schema::{
    is_recognized_level, ApiConfig, DataConfig, InfoConfig, KeystoneConfig, LogsConfig,
    RECOGNIZED_LEVELS, SERVICE_NAME,
};
pub use store::ConfigStore;
pub use value::{ConfigTable, ConfigValue};
