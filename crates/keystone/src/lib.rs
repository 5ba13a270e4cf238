//! # Keystone
//!
//! **Runtime configuration service**: discrete parameter handlers accept
//! raw external input (CLI tokens, request fields, environment-style
//! values) and translate it into entries of a single shared, namespaced
//! configuration store that the rest of the application reads thereafter.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use keystone::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Seed the store once at startup and share it by Arc.
//! let store = Arc::new(ConfigStore::with_defaults());
//!
//! // Handlers are resolved by name and write through to the store.
//! let registry = HandlerRegistry::builtin()?;
//! registry.dispatch("data-host", &["example.org".to_string()], &store)?;
//!
//! assert_eq!(store.get_str("data", "host")?, "example.org");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! raw input ──► HandlerRegistry ──► ParamHandler::parse ──► ConfigStore
//!                                                              ▲
//!                                        readers everywhere ───┘
//! ```
//!
//! The handler contract is a trait, so a non-conforming `parse` signature
//! is a compile error; descriptor-level conformance (name, arity, target
//! key) is verified when the handler is registered, before any dispatch.

#![doc(html_root_url = "https://docs.rs/keystone/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export store types
pub use keystone_store as store;

// Re-export parameter handler types
pub use keystone_params as params;

// Re-export telemetry types
pub use keystone_telemetry as telemetry;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use keystone::prelude::*;
/// ```
pub mod prelude {
    pub use keystone_store::{
        ConfigError, ConfigLoader, ConfigStore, ConfigTable, ConfigValue, KeystoneConfig,
        StoreError,
    };

    pub use keystone_params::{HandlerDescriptor, HandlerRegistry, ParamError, ParamHandler};

    pub use keystone_telemetry::{init_logging, LogConfig};
}
