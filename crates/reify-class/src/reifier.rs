//! Reification facade: the per-class declaration surface.
//!
//! One `ClassReifier` exclusively owns the configuration of one class under
//! definition. Member declarations and policy updates flow through it in any
//! order; `freeze` produces the immutable snapshot the emitter reads.

use crate::config::ClassConfig;
use crate::error::ConfigError;
use crate::policy::{GenerationPolicy, PolicyValue};
use crate::target::AnnotationTarget;
use reify_signature::SignatureParser;
use reify_types::{
    AnnotationAttachment, AnnotationValue, MemberKind, Signature, TypeInput, TypeNamespace,
    TypeResolver,
};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Duplicate-annotation handling for one class.
///
/// The permissive default matches hosts whose annotation model is
/// repeatable; a host with single-valued annotations opts into rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationPolicy {
    /// Retain duplicate attachments of one annotation type, in order
    #[default]
    Repeatable,
    /// Reject a duplicate annotation type on one target with
    /// [`ConfigError::DuplicateAnnotation`]
    SingleValued,
}

/// One entry of an annotation batch: the annotation type plus optional
/// named parameters. Absent parameters normalize to an empty map.
pub type AnnotationSpec = (TypeInput, Option<FxHashMap<String, AnnotationValue>>);

/// Per-class declaration surface.
///
/// Not thread-safe for concurrent writers to the same class: a class is
/// built by exactly one definition flow. The frozen snapshot is immutable
/// and freely shareable across threads.
pub struct ClassReifier<'ns> {
    namespace: &'ns dyn TypeNamespace,
    config: ClassConfig,
    frozen: Option<Arc<ClassConfig>>,
    annotation_policy: AnnotationPolicy,
}

impl<'ns> ClassReifier<'ns> {
    /// Create the configuration surface for one class
    pub fn new(class_name: impl Into<String>, namespace: &'ns dyn TypeNamespace) -> Self {
        ClassReifier {
            namespace,
            config: ClassConfig::new(class_name),
            frozen: None,
            annotation_policy: AnnotationPolicy::default(),
        }
    }

    /// Name of the class being reified
    pub fn class_name(&self) -> &str {
        &self.config.class_name
    }

    /// Check whether `freeze` has been called
    pub fn is_frozen(&self) -> bool {
        self.frozen.is_some()
    }

    /// The configuration built so far
    pub fn config(&self) -> &ClassConfig {
        &self.config
    }

    /// Select duplicate-annotation handling for this class
    pub fn set_annotation_policy(&mut self, policy: AnnotationPolicy) -> Result<(), ConfigError> {
        self.ensure_mutable()?;
        self.annotation_policy = policy;
        Ok(())
    }

    /// Declare a member from one textual signature.
    ///
    /// A declaration with a parameter list declares a method, one without
    /// declares a field. Annotation clauses attach to the member (and its
    /// parameters) alongside the signature. Re-declaring a member replaces
    /// its signature wholesale; annotations from earlier declarations stay
    /// attached. A parse failure leaves the configuration untouched.
    pub fn declare_signature(&mut self, source: &str) -> Result<(), ConfigError> {
        self.ensure_mutable()?;
        let signature = SignatureParser::new(source, self.namespace)?.parse()?;
        self.install(signature)
    }

    /// Declare a method signature from already-structured types.
    ///
    /// Last-write-wins: an existing signature for `name` is replaced.
    pub fn declare_method_signature(
        &mut self,
        name: &str,
        return_type: TypeInput,
        parameter_types: Vec<TypeInput>,
    ) -> Result<(), ConfigError> {
        self.ensure_mutable()?;
        let resolver = TypeResolver::new(self.namespace);
        let return_type = resolver.resolve(&return_type)?;
        let mut resolved = Vec::with_capacity(parameter_types.len());
        for input in &parameter_types {
            resolved.push(resolver.resolve(input)?);
        }
        self.config
            .method_signatures
            .insert(name.to_string(), Signature::method(name, return_type, resolved));
        Ok(())
    }

    /// Declare a field signature from an already-structured type
    pub fn declare_field_signature(
        &mut self,
        name: &str,
        field_type: TypeInput,
    ) -> Result<(), ConfigError> {
        self.ensure_mutable()?;
        let resolver = TypeResolver::new(self.namespace);
        let field_type = resolver.resolve(&field_type)?;
        self.config
            .field_signatures
            .insert(name.to_string(), Signature::field(name, field_type));
        Ok(())
    }

    /// Attach annotations to the class itself
    pub fn attach_class_annotations(
        &mut self,
        batch: Vec<AnnotationSpec>,
    ) -> Result<(), ConfigError> {
        self.attach(AnnotationTarget::Class, batch)
    }

    /// Attach annotations to the named method
    pub fn attach_method_annotations(
        &mut self,
        method: &str,
        batch: Vec<AnnotationSpec>,
    ) -> Result<(), ConfigError> {
        self.attach(AnnotationTarget::Method(method.to_string()), batch)
    }

    /// Attach annotations to the named field
    pub fn attach_field_annotations(
        &mut self,
        field: &str,
        batch: Vec<AnnotationSpec>,
    ) -> Result<(), ConfigError> {
        self.attach(AnnotationTarget::Field(field.to_string()), batch)
    }

    /// Attach annotations to one parameter of the named method
    pub fn attach_parameter_annotations(
        &mut self,
        method: &str,
        index: usize,
        batch: Vec<AnnotationSpec>,
    ) -> Result<(), ConfigError> {
        self.attach(
            AnnotationTarget::Parameter {
                method: method.to_string(),
                index,
            },
            batch,
        )
    }

    /// Apply a sparse policy update.
    ///
    /// Every `(key, value)` pair is validated before any is applied, so an
    /// unknown key or wrong value shape rejects the whole call.
    pub fn set_policy<'k>(
        &mut self,
        options: impl IntoIterator<Item = (&'k str, PolicyValue)>,
    ) -> Result<(), ConfigError> {
        self.ensure_mutable()?;
        let options: Vec<(&str, PolicyValue)> = options.into_iter().collect();
        for (key, value) in &options {
            GenerationPolicy::check_option(key, value)?;
        }
        for (key, value) in &options {
            self.config.policy.apply_option(key, value);
        }
        Ok(())
    }

    /// Register an extra constructor parameter list. Lists accumulate
    /// across calls.
    pub fn add_constructor_params(
        &mut self,
        parameter_types: Vec<TypeInput>,
    ) -> Result<(), ConfigError> {
        self.ensure_mutable()?;
        let resolver = TypeResolver::new(self.namespace);
        let mut resolved = Vec::with_capacity(parameter_types.len());
        for input in &parameter_types {
            resolved.push(resolver.resolve(input)?);
        }
        self.config.policy.extra_constructor_params.push(resolved);
        Ok(())
    }

    /// Freeze the configuration and return the immutable snapshot.
    ///
    /// Idempotent: repeated calls return the same snapshot. Every mutating
    /// operation afterwards fails with [`ConfigError::Frozen`].
    pub fn freeze(&mut self) -> Arc<ClassConfig> {
        if let Some(snapshot) = &self.frozen {
            return Arc::clone(snapshot);
        }
        let snapshot = Arc::new(self.config.clone());
        self.frozen = Some(Arc::clone(&snapshot));
        snapshot
    }

    fn ensure_mutable(&self) -> Result<(), ConfigError> {
        if self.is_frozen() {
            Err(ConfigError::Frozen)
        } else {
            Ok(())
        }
    }

    /// Install a parsed signature: store it under its member name and group
    /// its annotation clauses by target. Duplicate checks run over every
    /// affected target before anything is written.
    fn install(&mut self, signature: Signature) -> Result<(), ConfigError> {
        let member_target = match signature.kind {
            MemberKind::Method => AnnotationTarget::Method(signature.name.clone()),
            MemberKind::Field => AnnotationTarget::Field(signature.name.clone()),
        };

        self.check_duplicates(&member_target, &signature.annotations)?;
        for (index, attachments) in signature.parameter_annotations.iter().enumerate() {
            let target = AnnotationTarget::Parameter {
                method: signature.name.clone(),
                index,
            };
            self.check_duplicates(&target, attachments)?;
        }

        let name = signature.name.clone();
        let annotations = signature.annotations.clone();
        let parameter_annotations = signature.parameter_annotations.clone();

        match signature.kind {
            MemberKind::Method => {
                self.config.method_signatures.insert(name.clone(), signature);
            }
            MemberKind::Field => {
                self.config.field_signatures.insert(name.clone(), signature);
            }
        }

        if !annotations.is_empty() {
            self.config
                .annotations
                .entry(member_target)
                .or_default()
                .extend(annotations);
        }
        for (index, attachments) in parameter_annotations.into_iter().enumerate() {
            if !attachments.is_empty() {
                self.config
                    .annotations
                    .entry(AnnotationTarget::Parameter {
                        method: name.clone(),
                        index,
                    })
                    .or_default()
                    .extend(attachments);
            }
        }
        Ok(())
    }

    /// Resolve and append one annotation batch. All-or-nothing per call:
    /// a resolution failure or duplicate rejection applies nothing, and
    /// earlier successful calls on the same target are unaffected.
    fn attach(
        &mut self,
        target: AnnotationTarget,
        batch: Vec<AnnotationSpec>,
    ) -> Result<(), ConfigError> {
        self.ensure_mutable()?;
        let resolver = TypeResolver::new(self.namespace);

        let mut resolved = Vec::with_capacity(batch.len());
        for (input, parameters) in batch {
            let annotation_type = resolver.resolve(&input)?;
            resolved.push(AnnotationAttachment::new(
                annotation_type,
                parameters.unwrap_or_default(),
            ));
        }

        self.check_duplicates(&target, &resolved)?;
        if !resolved.is_empty() {
            self.config
                .annotations
                .entry(target)
                .or_default()
                .extend(resolved);
        }
        Ok(())
    }

    fn check_duplicates(
        &self,
        target: &AnnotationTarget,
        batch: &[AnnotationAttachment],
    ) -> Result<(), ConfigError> {
        if self.annotation_policy != AnnotationPolicy::SingleValued {
            return Ok(());
        }
        let existing = self.config.annotations.get(target);
        for (i, attachment) in batch.iter().enumerate() {
            let already_attached = existing.map_or(false, |attachments| {
                attachments
                    .iter()
                    .any(|a| a.annotation_type == attachment.annotation_type)
            });
            let duplicated_in_batch = batch[..i]
                .iter()
                .any(|a| a.annotation_type == attachment.annotation_type);
            if already_attached || duplicated_in_batch {
                return Err(ConfigError::DuplicateAnnotation {
                    annotation: attachment.annotation_type.to_string(),
                    target: target.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reify_types::{MapNamespace, NativeTypeRef, PrimitiveType};

    fn namespace() -> MapNamespace {
        let mut ns = MapNamespace::new();
        ns.register("java.lang.Override");
        ns.register("org.foo.Bar");
        ns
    }

    #[test]
    fn test_structured_method_declaration() {
        let ns = namespace();
        let mut reifier = ClassReifier::new("Foo", &ns);
        reifier
            .declare_method_signature("foo", "void".into(), vec!["int".into(), "Bar".into()])
            .unwrap();

        let sig = reifier.config().method_signature("foo").unwrap();
        assert_eq!(sig.return_type, NativeTypeRef::primitive(PrimitiveType::Void));
        assert_eq!(
            sig.parameter_types,
            vec![
                NativeTypeRef::primitive(PrimitiveType::Int),
                NativeTypeRef::class("org.foo.Bar"),
            ]
        );
    }

    #[test]
    fn test_unresolved_structured_declaration_changes_nothing() {
        let ns = namespace();
        let mut reifier = ClassReifier::new("Foo", &ns);
        let err = reifier
            .declare_method_signature("foo", "void".into(), vec!["org.missing.Type".into()])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Resolve(_)));
        assert!(reifier.config().method_signature("foo").is_none());
    }

    #[test]
    fn test_field_declaration_routes_to_field_table() {
        let ns = namespace();
        let mut reifier = ClassReifier::new("Foo", &ns);
        reifier.declare_signature("org.foo.Bar bar").unwrap();

        assert!(reifier.config().field_signature("bar").is_some());
        assert!(reifier.config().method_signature("bar").is_none());
    }

    #[test]
    fn test_extra_constructor_params_accumulate() {
        let ns = namespace();
        let mut reifier = ClassReifier::new("Foo", &ns);
        reifier.add_constructor_params(vec!["int".into()]).unwrap();
        reifier
            .add_constructor_params(vec!["Bar".into(), "long".into()])
            .unwrap();

        let lists = &reifier.config().policy.extra_constructor_params;
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0], vec![NativeTypeRef::primitive(PrimitiveType::Int)]);
        assert_eq!(
            lists[1],
            vec![
                NativeTypeRef::class("org.foo.Bar"),
                NativeTypeRef::primitive(PrimitiveType::Long),
            ]
        );
    }
}
