//! Annotation attachments and parameter values

use crate::ty::NativeTypeRef;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One annotation attachment: the annotation type plus named parameters.
///
/// `@org.foo.EventHandler(priority = 2)` attaches the type
/// `org.foo.EventHandler` with the parameter map `{priority: 2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationAttachment {
    /// Resolved annotation type
    pub annotation_type: NativeTypeRef,
    /// Named parameter values; empty for a bare marker annotation
    pub parameters: FxHashMap<String, AnnotationValue>,
}

impl AnnotationAttachment {
    /// Attachment with parameters
    pub fn new(
        annotation_type: NativeTypeRef,
        parameters: FxHashMap<String, AnnotationValue>,
    ) -> Self {
        AnnotationAttachment {
            annotation_type,
            parameters,
        }
    }

    /// Bare attachment with no parameters (`@Override`)
    pub fn marker(annotation_type: NativeTypeRef) -> Self {
        AnnotationAttachment {
            annotation_type,
            parameters: FxHashMap::default(),
        }
    }
}

impl fmt::Display for AnnotationAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.annotation_type)?;
        if !self.parameters.is_empty() {
            // Sorted for a deterministic rendering; map order is irrelevant
            let mut keys: Vec<&String> = self.parameters.keys().collect();
            keys.sort();
            write!(f, "(")?;
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} = {}", key, self.parameters[*key])?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Closed set of value shapes an annotation parameter accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationValue {
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating-point scalar
    Float(f64),
    /// String scalar
    Str(String),
    /// Reference to a native type
    Type(NativeTypeRef),
    /// Nested annotation
    Annotation(Box<AnnotationAttachment>),
    /// Ordered sequence of values
    List(Vec<AnnotationValue>),
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::Bool(b) => write!(f, "{}", b),
            AnnotationValue::Int(i) => write!(f, "{}", i),
            AnnotationValue::Float(x) => write!(f, "{:?}", x),
            AnnotationValue::Str(s) => write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
            AnnotationValue::Type(ty) => write!(f, "{}", ty),
            AnnotationValue::Annotation(a) => write!(f, "{}", a),
            AnnotationValue::List(values) => {
                write!(f, "{{")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
