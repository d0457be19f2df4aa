//! Class configuration errors

use reify_signature::ParseError;
use reify_types::ResolveError;
use thiserror::Error;

/// Errors raised by class configuration operations.
///
/// All failures are local and synchronous; an operation either fully
/// succeeds or leaves the configuration untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Mutation attempted after `freeze`
    #[error("Class configuration is frozen")]
    Frozen,

    /// `set_policy` received an unrecognized option key
    #[error("Unknown policy option: {key}")]
    UnknownPolicyOption {
        /// The unrecognized key
        key: String,
    },

    /// `set_policy` received a recognized key with the wrong value shape
    #[error("Invalid value for policy option '{key}': expected {expected}")]
    InvalidPolicyValue {
        /// The option key
        key: String,
        /// Description of the accepted value shape
        expected: &'static str,
    },

    /// A single-valued annotation type was attached twice to one target
    #[error("Duplicate annotation {annotation} on {target}")]
    DuplicateAnnotation {
        /// The annotation type
        annotation: String,
        /// The target carrying the earlier attachment
        target: String,
    },

    /// A type reference failed to resolve
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A textual signature failed to parse
    #[error(transparent)]
    Signature(#[from] ParseError),
}
