//! Logging bootstrap for Keystone.
//!
//! One job: install a `tracing-subscriber` stack whose level follows the
//! store's `logs.elvl` key. Everything else in the workspace logs through
//! the ordinary `tracing` macros.

#![warn(missing_docs)]

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, LogConfig};
