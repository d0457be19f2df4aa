//! The per-class configuration aggregate

use crate::policy::GenerationPolicy;
use crate::target::AnnotationTarget;
use reify_types::{AnnotationAttachment, Signature};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The per-class aggregate consumed by the external native-class emitter.
///
/// Built through a [`ClassReifier`](crate::ClassReifier) and handed to the
/// emitter as an immutable snapshot once reification is triggered. Reads of
/// a frozen config need no synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassConfig {
    /// Name of the class being reified
    pub class_name: String,
    /// Declared method signatures, by member name
    pub method_signatures: FxHashMap<String, Signature>,
    /// Declared field signatures, by member name
    pub field_signatures: FxHashMap<String, Signature>,
    /// Annotation attachments grouped by target, in declaration order
    pub annotations: FxHashMap<AnnotationTarget, Vec<AnnotationAttachment>>,
    /// Generation-policy flags
    pub policy: GenerationPolicy,
}

impl ClassConfig {
    pub(crate) fn new(class_name: impl Into<String>) -> Self {
        ClassConfig {
            class_name: class_name.into(),
            method_signatures: FxHashMap::default(),
            field_signatures: FxHashMap::default(),
            annotations: FxHashMap::default(),
            policy: GenerationPolicy::default(),
        }
    }

    /// Declared signature for the named method
    pub fn method_signature(&self, name: &str) -> Option<&Signature> {
        self.method_signatures.get(name)
    }

    /// Declared signature for the named field
    pub fn field_signature(&self, name: &str) -> Option<&Signature> {
        self.field_signatures.get(name)
    }

    /// Attachments on the given target, in declaration order
    pub fn annotations_on(&self, target: &AnnotationTarget) -> &[AnnotationAttachment] {
        self.annotations
            .get(target)
            .map(|attachments| attachments.as_slice())
            .unwrap_or(&[])
    }
}
