//! Host type namespace lookup
//!
//! The namespace is an injected dependency so hosts can back it with their
//! real type universe and tests can substitute a fixed table.

use crate::ty::NativeTypeRef;
use rustc_hash::FxHashMap;

/// Lookup of class names in the host type universe.
///
/// Lookup must be synchronous and side-effect-free; repeated lookups of the
/// same name must return equal handles.
pub trait TypeNamespace {
    /// Look up a fully qualified or simple class name
    fn lookup(&self, name: &str) -> Option<NativeTypeRef>;
}

/// In-memory namespace backed by a name table.
///
/// Registering a qualified name also makes the unqualified segment
/// resolvable, so `Override` finds `java.lang.Override` once registered.
/// A later registration with a clashing simple name shadows the earlier one.
#[derive(Debug, Clone, Default)]
pub struct MapNamespace {
    classes: FxHashMap<String, NativeTypeRef>,
}

impl MapNamespace {
    /// Create an empty namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class by qualified name, returning its handle
    pub fn register(&mut self, qualified_name: &str) -> NativeTypeRef {
        let handle = NativeTypeRef::class(qualified_name);
        if let Some(simple) = qualified_name.rsplit('.').next() {
            if simple != qualified_name {
                self.classes.insert(simple.to_string(), handle.clone());
            }
        }
        self.classes.insert(qualified_name.to_string(), handle.clone());
        handle
    }

    /// Register an extra alias for an already-known handle
    pub fn register_alias(&mut self, alias: &str, handle: NativeTypeRef) {
        self.classes.insert(alias.to_string(), handle);
    }

    /// Number of resolvable names
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if no names are registered
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TypeNamespace for MapNamespace {
    fn lookup(&self, name: &str) -> Option<NativeTypeRef> {
        self.classes.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut ns = MapNamespace::new();
        let handle = ns.register("org.foo.Bar");
        assert_eq!(ns.lookup("org.foo.Bar"), Some(handle.clone()));
        assert_eq!(ns.lookup("Bar"), Some(handle));
        assert_eq!(ns.lookup("Baz"), None);
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let mut ns = MapNamespace::new();
        ns.register("java.lang.Override");
        assert_eq!(ns.lookup("Override"), ns.lookup("Override"));
        assert_eq!(ns.lookup("Override"), ns.lookup("java.lang.Override"));
    }

    #[test]
    fn test_alias() {
        let mut ns = MapNamespace::new();
        let handle = ns.register("org.foo.Bar");
        ns.register_alias("BarAlias", handle.clone());
        assert_eq!(ns.lookup("BarAlias"), Some(handle));
    }
}
