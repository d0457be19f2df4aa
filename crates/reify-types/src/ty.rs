//! Canonical handles to host types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive types of the host type system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// The `void` type (return type of methods with no result)
    Void,
    /// The `boolean` type
    Boolean,
    /// The `byte` type
    Byte,
    /// The `short` type
    Short,
    /// The `char` type
    Char,
    /// The `int` type
    Int,
    /// The `long` type
    Long,
    /// The `float` type
    Float,
    /// The `double` type
    Double,
}

impl PrimitiveType {
    /// The source-level keyword for this primitive
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveType::Void => "void",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// Look up a primitive by its source-level keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "void" => Some(PrimitiveType::Void),
            "boolean" => Some(PrimitiveType::Boolean),
            "byte" => Some(PrimitiveType::Byte),
            "short" => Some(PrimitiveType::Short),
            "char" => Some(PrimitiveType::Char),
            "int" => Some(PrimitiveType::Int),
            "long" => Some(PrimitiveType::Long),
            "float" => Some(PrimitiveType::Float),
            "double" => Some(PrimitiveType::Double),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A named class or interface type in the host namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassType {
    /// Dotted fully qualified name
    pub qualified_name: String,
}

/// Canonical handle to a host type.
///
/// Exactly one canonical handle exists per resolvable name: handles compare
/// by value, so resolving the same name twice yields equal handles. A handle
/// is immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NativeTypeRef {
    /// Primitive type (void, int, boolean, ...)
    Primitive(PrimitiveType),

    /// Named class or interface type
    Class(ClassType),

    /// Array of another native type
    Array(Box<NativeTypeRef>),
}

impl NativeTypeRef {
    /// Handle for a primitive type
    pub fn primitive(primitive: PrimitiveType) -> Self {
        NativeTypeRef::Primitive(primitive)
    }

    /// Handle for a named class type
    pub fn class(qualified_name: impl Into<String>) -> Self {
        NativeTypeRef::Class(ClassType {
            qualified_name: qualified_name.into(),
        })
    }

    /// Handle for an array of the given element type
    pub fn array_of(element: NativeTypeRef) -> Self {
        NativeTypeRef::Array(Box::new(element))
    }

    /// Check if this handle is a primitive type
    pub fn is_primitive(&self) -> bool {
        matches!(self, NativeTypeRef::Primitive(_))
    }

    /// Check if this handle is an array type
    pub fn is_array(&self) -> bool {
        matches!(self, NativeTypeRef::Array(_))
    }

    /// Get the primitive type if this is a primitive handle
    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            NativeTypeRef::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    /// Get the class type if this is a class handle
    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            NativeTypeRef::Class(c) => Some(c),
            _ => None,
        }
    }

    /// The unqualified name segment (`Bar` for `org.foo.Bar`)
    pub fn simple_name(&self) -> String {
        match self {
            NativeTypeRef::Primitive(p) => p.keyword().to_string(),
            NativeTypeRef::Class(c) => c
                .qualified_name
                .rsplit('.')
                .next()
                .unwrap_or(&c.qualified_name)
                .to_string(),
            NativeTypeRef::Array(element) => format!("{}[]", element.simple_name()),
        }
    }
}

impl fmt::Display for NativeTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeTypeRef::Primitive(p) => write!(f, "{}", p),
            NativeTypeRef::Class(c) => write!(f, "{}", c.qualified_name),
            NativeTypeRef::Array(element) => write!(f, "{}[]", element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_keywords() {
        assert_eq!(PrimitiveType::Void.keyword(), "void");
        assert_eq!(PrimitiveType::Int.keyword(), "int");
        assert_eq!(PrimitiveType::from_keyword("long"), Some(PrimitiveType::Long));
        assert_eq!(PrimitiveType::from_keyword("string"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", NativeTypeRef::primitive(PrimitiveType::Int)), "int");
        assert_eq!(format!("{}", NativeTypeRef::class("org.foo.Bar")), "org.foo.Bar");
        let arr = NativeTypeRef::array_of(NativeTypeRef::primitive(PrimitiveType::Byte));
        assert_eq!(format!("{}", arr), "byte[]");
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(NativeTypeRef::class("org.foo.Bar"), NativeTypeRef::class("org.foo.Bar"));
        assert_ne!(NativeTypeRef::class("org.foo.Bar"), NativeTypeRef::class("org.foo.Baz"));
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(NativeTypeRef::class("org.foo.Bar").simple_name(), "Bar");
        assert_eq!(NativeTypeRef::class("Bar").simple_name(), "Bar");
        let arr = NativeTypeRef::array_of(NativeTypeRef::class("org.foo.Bar"));
        assert_eq!(arr.simple_name(), "Bar[]");
    }
}
