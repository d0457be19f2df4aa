//! Loosely-typed type references prior to resolution

use crate::ty::NativeTypeRef;
use std::fmt;
use std::sync::Arc;

/// A value that can surface a native type on demand.
///
/// Replaces runtime capability probing with an explicit interface: a host
/// object that wraps or proxies a native type implements this trait, and the
/// resolver dispatches on it exhaustively.
pub trait NativeTypeProvider {
    /// The native type backing this value, if it has one.
    ///
    /// Returning `None` makes resolution fail with
    /// [`ResolveError::TypeMismatch`](crate::ResolveError::TypeMismatch).
    fn native_type(&self) -> Option<NativeTypeRef>;

    /// Short description of the value, used in error messages
    fn describe(&self) -> String;
}

/// A loosely-typed reference to a host type, before canonicalization
#[derive(Clone)]
pub enum TypeInput {
    /// An already-resolved handle; passes through resolution unchanged
    Native(NativeTypeRef),

    /// A dotted qualified name, simple name, or primitive keyword
    Name(String),

    /// A value exposing the native-type capability
    Provider(Arc<dyn NativeTypeProvider>),
}

impl fmt::Debug for TypeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeInput::Native(handle) => f.debug_tuple("Native").field(handle).finish(),
            TypeInput::Name(name) => f.debug_tuple("Name").field(name).finish(),
            TypeInput::Provider(provider) => {
                f.debug_tuple("Provider").field(&provider.describe()).finish()
            }
        }
    }
}

impl From<NativeTypeRef> for TypeInput {
    fn from(handle: NativeTypeRef) -> Self {
        TypeInput::Native(handle)
    }
}

impl From<&str> for TypeInput {
    fn from(name: &str) -> Self {
        TypeInput::Name(name.to_string())
    }
}

impl From<String> for TypeInput {
    fn from(name: String) -> Self {
        TypeInput::Name(name)
    }
}

impl From<Arc<dyn NativeTypeProvider>> for TypeInput {
    fn from(provider: Arc<dyn NativeTypeProvider>) -> Self {
        TypeInput::Provider(provider)
    }
}
