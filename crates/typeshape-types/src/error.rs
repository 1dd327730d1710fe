//! Reflection error types.
//!
//! Two fault families exist outside of assertion semantics: invalid usage of
//! the API by the caller, and metadata the host cannot resolve. Neither is
//! recovered from; both propagate to the caller unchanged.

use thiserror::Error;

/// A metadata fault reported by a [`MetadataSource`](crate::MetadataSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataFault {
    /// The requested type is not known to the metadata source.
    #[error("unknown type '{0}'")]
    UnknownType(String),

    /// A property declares neither a getter nor a setter.
    #[error("property {declaring_type}.{property} has no accessor to resolve flags from")]
    MissingAccessor {
        declaring_type: String,
        property: String,
    },

    /// A method signature or property name was declared twice.
    #[error("duplicate {kind} '{member}' on type {declaring_type}")]
    DuplicateMember {
        declaring_type: String,
        member: String,
        kind: String,
    },

    /// The same type was registered twice.
    #[error("duplicate type '{0}'")]
    DuplicateType(String),

    /// A metadata document could not be decoded.
    #[error("metadata document invalid: {0}")]
    Document(String),
}

/// Errors raised while reading or querying type metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// The caller supplied a missing or malformed subject.
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),

    /// The host metadata could not be resolved.
    #[error("Metadata fault: {0}")]
    Metadata(#[from] MetadataFault),
}

impl ReflectError {
    /// Create an invalid usage error.
    pub fn invalid_usage(msg: impl Into<String>) -> Self {
        ReflectError::InvalidUsage(msg.into())
    }

    /// Create an unknown type fault.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        ReflectError::Metadata(MetadataFault::UnknownType(name.into()))
    }

    /// Check if this is a metadata fault.
    pub fn is_metadata_fault(&self) -> bool {
        matches!(self, ReflectError::Metadata(_))
    }

    /// Check if this is an invalid usage error.
    pub fn is_invalid_usage(&self) -> bool {
        matches!(self, ReflectError::InvalidUsage(_))
    }
}

impl From<serde_json::Error> for ReflectError {
    fn from(err: serde_json::Error) -> Self {
        ReflectError::Metadata(MetadataFault::Document(err.to_string()))
    }
}

/// Result type for reflection operations.
pub type ReflectResult<T> = Result<T, ReflectError>;
