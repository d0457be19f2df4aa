//! Reify Type Model
//!
//! Canonical native type handles, the type resolver, and the signature
//! and annotation data model shared by the parser and the class
//! configuration store.

#![warn(missing_docs)]

pub mod annotation;
pub mod error;
pub mod input;
pub mod namespace;
pub mod resolve;
pub mod sig;
pub mod ty;

pub use annotation::{AnnotationAttachment, AnnotationValue};
pub use error::ResolveError;
pub use input::{NativeTypeProvider, TypeInput};
pub use namespace::{MapNamespace, TypeNamespace};
pub use resolve::TypeResolver;
pub use sig::{MemberKind, Signature};
pub use ty::{ClassType, NativeTypeRef, PrimitiveType};
