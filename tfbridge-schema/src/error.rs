//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema kind with no mapping rule.
    #[error("unknown schema kind '{kind}' on field '{field}'")]
    UnknownKind {
        /// Kind string as found in the input.
        kind: String,
        /// Dotted path of the field.
        field: String,
    },

    /// Collection without an element schema.
    #[error("collection field '{field}' of kind '{kind}' declares no element schema")]
    MissingElement {
        /// Dotted path of the field.
        field: String,
        /// Collection kind (list or set).
        kind: String,
    },

    /// Map with a non-string element.
    #[error("map field '{field}' has element kind '{element}', only string maps are supported")]
    UnsupportedMapElement {
        /// Dotted path of the field.
        field: String,
        /// Declared element kind.
        element: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema validation and the type walk.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Name that cannot become a Rust identifier.
    #[error("invalid {kind} name '{name}'")]
    InvalidName {
        /// Kind of name (resource, field).
        kind: String,
        /// Offending name.
        name: String,
    },

    /// Two fields of one block normalize to the same name.
    #[error("fields '{first}' and '{second}' of '{parent}' both normalize to '{normalized}'")]
    DuplicateField {
        /// Enclosing type name.
        parent: String,
        /// First raw field name.
        first: String,
        /// Second raw field name.
        second: String,
        /// Shared normalized name.
        normalized: String,
    },

    /// Two resources produce the same generated type name.
    #[error("resources '{first}' and '{second}' both generate type '{type_name}'")]
    DuplicateResource {
        /// First resource type key.
        first: String,
        /// Second resource type key.
        second: String,
        /// Colliding type name.
        type_name: String,
    },

    /// A schema field clashes with the synthetic identity field.
    #[error("field '{field}' of resource '{resource}' collides with identity field '{identity}'")]
    IdentityConflict {
        /// Resource type key.
        resource: String,
        /// Raw field name.
        field: String,
        /// Identity field identifier.
        identity: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates an unknown kind error.
    pub fn unknown_kind(kind: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownKind {
            kind: kind.into(),
            field: field.into(),
        }
    }

    /// Creates a missing element error.
    pub fn missing_element(field: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::MissingElement {
            field: field.into(),
            kind: kind.into(),
        }
    }
}

impl SchemaError {
    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates an invalid name error.
    pub fn invalid_name(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidName {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
