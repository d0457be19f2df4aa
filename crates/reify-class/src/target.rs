//! Annotation attachment targets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a batch of annotations attaches within a class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationTarget {
    /// The class itself
    Class,
    /// A method, by member name
    Method(String),
    /// A field, by member name
    Field(String),
    /// One parameter of a method
    Parameter {
        /// Owning method name
        method: String,
        /// Zero-based parameter index
        index: usize,
    },
}

impl fmt::Display for AnnotationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationTarget::Class => write!(f, "class"),
            AnnotationTarget::Method(name) => write!(f, "method {}", name),
            AnnotationTarget::Field(name) => write!(f, "field {}", name),
            AnnotationTarget::Parameter { method, index } => {
                write!(f, "parameter {} of method {}", index, method)
            }
        }
    }
}
