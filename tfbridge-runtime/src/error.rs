//! Error types for the service runtime.

use thiserror::Error;

/// Error reported by a provider primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// No resource exists for the external identifier.
    #[error("{type_key} resource '{id}' not found")]
    NotFound {
        /// Provider type key.
        type_key: String,
        /// External identifier.
        id: String,
    },

    /// The provider failed to carry out the operation.
    #[error("provider error: {message}")]
    Failed {
        /// Error message.
        message: String,
    },
}

impl ProviderError {
    /// Creates a not found error.
    pub fn not_found(type_key: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            type_key: type_key.into(),
            id: id.into(),
        }
    }

    /// Creates a provider failure with the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Error type for bridge operations in generated handlers.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Typed value could not be turned into raw configuration.
    #[error("marshal error: {0}")]
    Marshal(#[source] serde_json::Error),

    /// Typed value did not marshal to an attribute map.
    #[error("marshal error: expected an object, found {found}")]
    NotAnObject {
        /// JSON kind that was produced instead.
        found: &'static str,
    },

    /// Raw state could not be turned into the typed value.
    #[error("unmarshal error: {0}")]
    Unmarshal(#[source] serde_json::Error),

    /// Provider primitive failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Error type for service registration and dispatch.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A type was registered twice.
    #[error("type '{name}' is already registered")]
    DuplicateType {
        /// Qualified type name.
        name: String,
    },

    /// A handler was registered twice.
    #[error("handler '{name}' is already registered")]
    DuplicateHandler {
        /// Qualified handler name.
        name: String,
    },

    /// Handler bound to a type it does not manage.
    #[error("handler '{handler}' manages '{actual}' but was bound to '{expected}'")]
    TypeMismatch {
        /// Qualified handler name.
        handler: String,
        /// Registered type the handler was bound to.
        expected: String,
        /// Type the handler actually manages.
        actual: String,
    },

    /// No handler registered under the name.
    #[error("no handler registered as '{name}'")]
    UnknownHandler {
        /// Qualified handler name.
        name: String,
    },

    /// Payload did not match the handler's resource type.
    #[error("invalid payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// Handler operation failed.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}
