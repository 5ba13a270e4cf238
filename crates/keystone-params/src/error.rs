//! Parameter handling error types.

use keystone_store::StoreError;
use thiserror::Error;

/// Errors raised while registering or invoking parameter handlers.
///
/// [`ParamError::ContractViolation`] is structural and fatal: it is raised
/// at registration time, before any dispatch, and must abort
/// initialization rather than be caught internally.
#[derive(Error, Debug)]
pub enum ParamError {
    /// A handler's declared descriptor does not satisfy the registry
    /// contract.
    #[error("contract violation in handler {handler}: {reason}")]
    ContractViolation {
        /// Name of the offending handler.
        handler: String,
        /// What part of the contract was violated.
        reason: String,
    },

    /// No handler is registered under the requested parameter name.
    #[error("unknown parameter: {name}")]
    UnknownParameter {
        /// The unresolved parameter name.
        name: String,
    },

    /// The raw input could not be parsed into the parameter's value.
    #[error("invalid argument for {parameter}: {reason}")]
    InvalidArgument {
        /// The parameter being parsed.
        parameter: String,
        /// Explanation of the parse failure.
        reason: String,
    },

    /// The configuration write failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ParamError {
    /// Create a new contract violation error.
    pub fn contract_violation(handler: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ContractViolation {
            handler: handler.into(),
            reason: reason.into(),
        }
    }

    /// Create a new unknown parameter error.
    pub fn unknown_parameter(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}
