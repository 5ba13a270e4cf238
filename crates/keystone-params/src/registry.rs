//! Handler registry and dispatch.
//!
//! The registry is the load-time gate for handler contracts: a handler
//! whose declared descriptor is malformed never becomes dispatchable.
//! Registration happens once at startup, so a [`ContractViolation`]
//! surfaces before any traffic is served.
//!
//! [`ContractViolation`]: crate::ParamError::ContractViolation

use std::collections::HashMap;

use keystone_store::ConfigStore;
use tracing::debug;

use crate::handlers::{ApiPort, DataHost, DataRoot, LogLevel};
use crate::{ParamError, ParamHandler};

/// A registry of parameter handlers keyed by external parameter name.
///
/// # Example
///
/// ```
/// use keystone_params::HandlerRegistry;
/// use keystone_store::ConfigStore;
///
/// let registry = HandlerRegistry::builtin().unwrap();
/// let store = ConfigStore::with_defaults();
///
/// registry
///     .dispatch("data-host", &["example.org".to_string()], &store)
///     .unwrap();
/// assert_eq!(store.get_str("data", "host").unwrap(), "example.org");
/// ```
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<&'static str, Box<dyn ParamHandler>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Creates a registry preloaded with the built-in handlers.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::ContractViolation`] if a built-in descriptor
    /// is malformed; this is a programmer error and should abort startup.
    pub fn builtin() -> Result<Self, ParamError> {
        let mut registry = Self::new();
        registry.register(Box::new(DataHost))?;
        registry.register(Box::new(DataRoot))?;
        registry.register(Box::new(ApiPort))?;
        registry.register(Box::new(LogLevel))?;
        Ok(registry)
    }

    /// Registers a handler after verifying its declared descriptor.
    ///
    /// The descriptor must carry a non-empty name, a nonzero arity, a
    /// `namespace.key` shaped target, and a name not already taken.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::ContractViolation`] on any descriptor
    /// violation. The violation is structural: callers must treat it as
    /// fatal at initialization, not recover from it.
    pub fn register(&mut self, handler: Box<dyn ParamHandler>) -> Result<(), ParamError> {
        let descriptor = handler.descriptor();

        if descriptor.name.is_empty() {
            return Err(ParamError::contract_violation(
                "<unnamed>",
                "descriptor name must not be empty",
            ));
        }
        if descriptor.arity == 0 {
            return Err(ParamError::contract_violation(
                descriptor.name,
                "descriptor arity must be nonzero",
            ));
        }
        let mut segments = descriptor.target.split('.');
        let well_formed = matches!(
            (segments.next(), segments.next(), segments.next()),
            (Some(namespace), Some(key), None) if !namespace.is_empty() && !key.is_empty()
        );
        if !well_formed {
            return Err(ParamError::contract_violation(
                descriptor.name,
                format!(
                    "descriptor target {:?} must have the form namespace.key",
                    descriptor.target
                ),
            ));
        }
        if self.handlers.contains_key(descriptor.name) {
            return Err(ParamError::contract_violation(
                descriptor.name,
                "a handler with this name is already registered",
            ));
        }

        debug!(
            name = descriptor.name,
            target = descriptor.target,
            "registered parameter handler"
        );
        self.handlers.insert(descriptor.name, handler);
        Ok(())
    }

    /// Resolves the handler registered under `name` and invokes its
    /// `parse` with the given raw values.
    ///
    /// # Errors
    ///
    /// - [`ParamError::UnknownParameter`] if no handler carries `name`.
    /// - Whatever the handler's `parse` returns.
    pub fn dispatch(
        &self,
        name: &str,
        raw: &[String],
        store: &ConfigStore,
    ) -> Result<(), ParamError> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| ParamError::unknown_parameter(name))?;
        handler.parse(raw, store)
    }

    /// Returns `true` if a handler is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterates over the registered descriptors.
    pub fn descriptors(&self) -> impl Iterator<Item = crate::HandlerDescriptor> + '_ {
        self.handlers.values().map(|handler| handler.descriptor())
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.handlers.len())
            .finish()
    }
}
