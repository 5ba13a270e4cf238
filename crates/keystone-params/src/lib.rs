//! Parameter handlers for the Keystone configuration service.
//!
//! A parameter handler converts raw external input (CLI tokens, request
//! fields, environment-style values) into a single write against the
//! shared [`ConfigStore`](keystone_store::ConfigStore).
//!
//! The handler contract is the [`ParamHandler`] trait: the compiler
//! enforces the `parse` signature, and the [`HandlerRegistry`] verifies
//! each handler's declared [`HandlerDescriptor`] at registration time, so
//! a malformed handler fails at startup rather than at first use.
//!
//! # Example
//!
//! ```
//! use keystone_params::HandlerRegistry;
//! use keystone_store::ConfigStore;
//!
//! let registry = HandlerRegistry::builtin().unwrap();
//! let store = ConfigStore::with_defaults();
//!
//! registry
//!     .dispatch("data-host", &["example.org".to_string()], &store)
//!     .unwrap();
//! assert_eq!(store.get_str("data", "host").unwrap(), "example.org");
//! ```

#![warn(missing_docs)]

mod error;
mod handler;
pub mod handlers;
mod registry;

pub use error::ParamError;
pub use handler::{HandlerDescriptor, ParamHandler};
pub use registry::HandlerRegistry;
