//! The parameter handler contract.
//!
//! [`ParamHandler`] is the trait every handler implements. The trait fixes
//! the `parse` signature at compile time, so an implementation with a
//! deviating shape does not build. The parts the compiler cannot see, the
//! handler's declared name, arity, and target key, live in the
//! [`HandlerDescriptor`] and are verified by the registry before the
//! handler becomes dispatchable.

use keystone_store::ConfigStore;

use crate::ParamError;

/// Declared metadata of a parameter handler.
///
/// The descriptor is the handler's contract with the registry: `name` is
/// the external parameter name it is dispatched under, `arity` is the
/// number of raw tokens it consumes, and `target` is the dotted
/// configuration key it writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerDescriptor {
    /// External parameter name (e.g. `data-host`).
    pub name: &'static str,
    /// Number of raw tokens consumed by `parse`.
    pub arity: usize,
    /// Dotted configuration key written (e.g. `data.host`).
    pub target: &'static str,
}

impl HandlerDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub const fn new(name: &'static str, arity: usize, target: &'static str) -> Self {
        Self {
            name,
            arity,
            target,
        }
    }

    /// Returns the token at `index`, or an
    /// [`InvalidArgument`](ParamError::InvalidArgument) error naming this
    /// parameter when the caller under-supplied tokens.
    pub fn token<'a>(&self, raw: &'a [String], index: usize) -> Result<&'a str, ParamError> {
        raw.get(index).map(String::as_str).ok_or_else(|| {
            ParamError::invalid_argument(
                self.name,
                format!("expected {} value(s), got {}", self.arity, raw.len()),
            )
        })
    }
}

/// A parameter handler: translates raw external input into one
/// configuration write.
///
/// Handlers are stateless strategy objects; they hold no mutable state
/// beyond the store they write into, and may be instantiated freely.
/// A successful `parse` performs exactly one write and emits one `info!`
/// trace naming the key and the new value.
///
/// # Example
///
/// ```
/// use keystone_params::{HandlerDescriptor, ParamError, ParamHandler};
/// use keystone_store::ConfigStore;
///
/// struct CacheDir;
///
/// impl ParamHandler for CacheDir {
///     fn descriptor(&self) -> HandlerDescriptor {
///         HandlerDescriptor::new("cache-dir", 1, "cache.dir")
///     }
///
///     fn parse(&self, raw: &[String], store: &ConfigStore) -> Result<(), ParamError> {
///         let dir = self.descriptor().token(raw, 0)?;
///         store.set("cache", "dir", dir.into())?;
///         Ok(())
///     }
/// }
/// ```
pub trait ParamHandler: Send + Sync {
    /// Returns the handler's declared metadata.
    fn descriptor(&self) -> HandlerDescriptor;

    /// Parses the raw values and writes the derived value into the store.
    ///
    /// # Errors
    ///
    /// - [`ParamError::InvalidArgument`] if `raw` is under-supplied or a
    ///   token does not parse into the target value.
    /// - [`ParamError::Store`] if the configuration write fails.
    fn parse(&self, raw: &[String], store: &ConfigStore) -> Result<(), ParamError>;
}
