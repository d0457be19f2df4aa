//! Reify Class Configuration
//!
//! Accumulates per-class method and field signatures, grouped annotation
//! attachments, and generation-policy flags into one coherent descriptor,
//! then freezes it into an immutable snapshot for the external native-class
//! emitter.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod policy;
pub mod reifier;
pub mod target;

pub use config::ClassConfig;
pub use error::ConfigError;
pub use policy::{ConstructorGenerationMode, GenerationPolicy, MethodGenerationMode, PolicyValue};
pub use reifier::{AnnotationPolicy, AnnotationSpec, ClassReifier};
pub use target::AnnotationTarget;
