//! Error types for type-name lookups.

use thiserror::Error;

/// A type name that is not one of the built-in scalar types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown built-in type '{name}'")]
pub struct UnknownTypeName {
    /// The name that failed to resolve.
    pub name: String,
}

impl UnknownTypeName {
    /// Creates an unknown type name error.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
