//! Structured member signatures

use crate::annotation::AnnotationAttachment;
use crate::ty::NativeTypeRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a signature declares a method or a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    /// Method declaration: return type, name, parameter list
    Method,
    /// Field declaration: field type and name, no parameter list
    Field,
}

/// Structured description of one method or field declaration.
///
/// Produced by the signature parser from one textual declaration and never
/// mutated afterwards; re-declaring the same member replaces its signature
/// wholesale. For a field, `return_type` is the field's type and the
/// parameter sequences are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Method or field
    pub kind: MemberKind,
    /// Member name
    pub name: String,
    /// Return type for methods, field type for fields
    pub return_type: NativeTypeRef,
    /// Ordered parameter types (empty for fields)
    pub parameter_types: Vec<NativeTypeRef>,
    /// Declared parameter names, one slot per parameter
    pub parameter_names: Vec<Option<String>>,
    /// Annotations declared on the member itself
    pub annotations: Vec<AnnotationAttachment>,
    /// Annotations declared per parameter, one list per parameter
    pub parameter_annotations: Vec<Vec<AnnotationAttachment>>,
}

impl Signature {
    /// Method signature with no annotations or parameter names
    pub fn method(
        name: impl Into<String>,
        return_type: NativeTypeRef,
        parameter_types: Vec<NativeTypeRef>,
    ) -> Self {
        let arity = parameter_types.len();
        Signature {
            kind: MemberKind::Method,
            name: name.into(),
            return_type,
            parameter_types,
            parameter_names: vec![None; arity],
            annotations: Vec::new(),
            parameter_annotations: vec![Vec::new(); arity],
        }
    }

    /// Field signature with no annotations
    pub fn field(name: impl Into<String>, field_type: NativeTypeRef) -> Self {
        Signature {
            kind: MemberKind::Field,
            name: name.into(),
            return_type: field_type,
            parameter_types: Vec::new(),
            parameter_names: Vec::new(),
            annotations: Vec::new(),
            parameter_annotations: Vec::new(),
        }
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    /// Check if this is a field signature
    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }
}

impl fmt::Display for Signature {
    /// Re-serializes the canonical textual form the parser accepts
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            write!(f, "{} ", annotation)?;
        }
        write!(f, "{} {}", self.return_type, self.name)?;
        if self.kind == MemberKind::Method {
            write!(f, "(")?;
            for (i, ty) in self.parameter_types.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                for annotation in self.parameter_annotations.get(i).into_iter().flatten() {
                    write!(f, "{} ", annotation)?;
                }
                write!(f, "{}", ty)?;
                if let Some(Some(name)) = self.parameter_names.get(i) {
                    write!(f, " {}", name)?;
                }
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::PrimitiveType;

    #[test]
    fn test_method_display() {
        let sig = Signature::method(
            "foo",
            NativeTypeRef::primitive(PrimitiveType::Void),
            vec![
                NativeTypeRef::primitive(PrimitiveType::Int),
                NativeTypeRef::class("org.foo.Bar"),
            ],
        );
        assert_eq!(format!("{}", sig), "void foo(int, org.foo.Bar)");
    }

    #[test]
    fn test_field_display() {
        let sig = Signature::field("bar", NativeTypeRef::class("org.foo.Bar"));
        assert_eq!(format!("{}", sig), "org.foo.Bar bar");
        assert!(sig.is_field());
        assert_eq!(sig.arity(), 0);
    }

    #[test]
    fn test_annotated_display() {
        let mut sig = Signature::method(
            "foo",
            NativeTypeRef::primitive(PrimitiveType::Void),
            vec![NativeTypeRef::primitive(PrimitiveType::Int)],
        );
        sig.annotations
            .push(AnnotationAttachment::marker(NativeTypeRef::class("java.lang.Override")));
        assert_eq!(format!("{}", sig), "@java.lang.Override void foo(int)");
    }
}
