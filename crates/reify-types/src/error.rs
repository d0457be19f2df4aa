//! Type resolution errors

use thiserror::Error;

/// Errors produced while canonicalizing a type reference
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolveError {
    /// The name does not map to any known host type
    #[error("Unresolved type: {name}")]
    UnresolvedType {
        /// Name that was not found in the host namespace
        name: String,
    },

    /// A value claimed to provide a native type but does not
    #[error("Type mismatch: expected a native type, got {value}")]
    TypeMismatch {
        /// Description of the offending value
        value: String,
    },
}
