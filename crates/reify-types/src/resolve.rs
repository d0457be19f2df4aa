//! Canonicalization of loosely-typed references into native type handles

use crate::error::ResolveError;
use crate::input::TypeInput;
use crate::namespace::TypeNamespace;
use crate::ty::{NativeTypeRef, PrimitiveType};

/// Canonicalizes loosely-typed references into native type handles.
///
/// Resolution order: already-native handles pass through unchanged; provider
/// values are asked for their native type; names are matched against the
/// primitive keyword table and then looked up in the host namespace.
/// Resolution is deterministic, so resolving the same input twice returns
/// equal handles.
pub struct TypeResolver<'a> {
    namespace: &'a dyn TypeNamespace,
}

impl<'a> TypeResolver<'a> {
    /// Create a resolver over the given host namespace
    pub fn new(namespace: &'a dyn TypeNamespace) -> Self {
        TypeResolver { namespace }
    }

    /// Resolve a loosely-typed reference into a canonical handle
    pub fn resolve(&self, input: &TypeInput) -> Result<NativeTypeRef, ResolveError> {
        match input {
            TypeInput::Native(handle) => Ok(handle.clone()),
            TypeInput::Provider(provider) => {
                provider
                    .native_type()
                    .ok_or_else(|| ResolveError::TypeMismatch {
                        value: provider.describe(),
                    })
            }
            TypeInput::Name(name) => self.resolve_name(name),
        }
    }

    /// Resolve a textual type name into a canonical handle.
    ///
    /// Handles primitive keywords, `[]` array suffixes (arrays are derived
    /// from their element type, never looked up), and class names via the
    /// namespace.
    pub fn resolve_name(&self, name: &str) -> Result<NativeTypeRef, ResolveError> {
        let name = name.trim();
        if let Some(element) = name.strip_suffix("[]") {
            return Ok(NativeTypeRef::array_of(self.resolve_name(element)?));
        }
        if let Some(primitive) = PrimitiveType::from_keyword(name) {
            return Ok(NativeTypeRef::primitive(primitive));
        }
        self.namespace
            .lookup(name)
            .ok_or_else(|| ResolveError::UnresolvedType {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::MapNamespace;
    use std::sync::Arc;

    struct FixedProvider(Option<NativeTypeRef>);

    impl crate::input::NativeTypeProvider for FixedProvider {
        fn native_type(&self) -> Option<NativeTypeRef> {
            self.0.clone()
        }

        fn describe(&self) -> String {
            "fixed provider".to_string()
        }
    }

    fn namespace() -> MapNamespace {
        let mut ns = MapNamespace::new();
        ns.register("org.foo.Bar");
        ns
    }

    #[test]
    fn test_native_passthrough() {
        let ns = namespace();
        let resolver = TypeResolver::new(&ns);
        let handle = NativeTypeRef::class("anything.at.All");
        let input = TypeInput::Native(handle.clone());
        assert_eq!(resolver.resolve(&input), Ok(handle));
    }

    #[test]
    fn test_primitive_keyword() {
        let ns = namespace();
        let resolver = TypeResolver::new(&ns);
        assert_eq!(
            resolver.resolve_name("int"),
            Ok(NativeTypeRef::primitive(PrimitiveType::Int))
        );
    }

    #[test]
    fn test_qualified_name() {
        let ns = namespace();
        let resolver = TypeResolver::new(&ns);
        assert_eq!(
            resolver.resolve_name("org.foo.Bar"),
            Ok(NativeTypeRef::class("org.foo.Bar"))
        );
    }

    #[test]
    fn test_array_suffix() {
        let ns = namespace();
        let resolver = TypeResolver::new(&ns);
        assert_eq!(
            resolver.resolve_name("int[][]"),
            Ok(NativeTypeRef::array_of(NativeTypeRef::array_of(
                NativeTypeRef::primitive(PrimitiveType::Int)
            )))
        );
    }

    #[test]
    fn test_unresolved() {
        let ns = namespace();
        let resolver = TypeResolver::new(&ns);
        assert_eq!(
            resolver.resolve_name("org.missing.Type"),
            Err(ResolveError::UnresolvedType {
                name: "org.missing.Type".to_string()
            })
        );
    }

    #[test]
    fn test_provider_capability() {
        let ns = namespace();
        let resolver = TypeResolver::new(&ns);
        let handle = NativeTypeRef::class("org.foo.Bar");
        let good: Arc<dyn crate::input::NativeTypeProvider> =
            Arc::new(FixedProvider(Some(handle.clone())));
        assert_eq!(resolver.resolve(&TypeInput::Provider(good)), Ok(handle));

        let bad: Arc<dyn crate::input::NativeTypeProvider> = Arc::new(FixedProvider(None));
        assert_eq!(
            resolver.resolve(&TypeInput::Provider(bad)),
            Err(ResolveError::TypeMismatch {
                value: "fixed provider".to_string()
            })
        );
    }

    #[test]
    fn test_resolution_idempotent() {
        let ns = namespace();
        let resolver = TypeResolver::new(&ns);
        assert_eq!(resolver.resolve_name("org.foo.Bar"), resolver.resolve_name("Bar"));
        assert_eq!(resolver.resolve_name("int"), resolver.resolve_name("int"));
    }
}
