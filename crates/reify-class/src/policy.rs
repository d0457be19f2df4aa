//! Generation-policy flags consumed by the native-class emitter

use crate::error::ConfigError;
use reify_types::NativeTypeRef;
use serde::{Deserialize, Serialize};

/// Which of the class's methods get native-visible counterparts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodGenerationMode {
    /// Generate a native method for every method of the class
    AllMethods,
    /// Generate only methods with explicitly declared signatures
    ExplicitOnly,
}

/// How many constructors the emitter generates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructorGenerationMode {
    /// Mirror every superclass constructor
    All,
    /// Generate only the minimal constructor set
    Minimal,
}

/// Flags controlling how aggressively the external emitter generates
/// native-visible methods, constructors, and initialization behavior.
///
/// Defaults are conservative (explicit methods only, minimal constructors)
/// so omitted configuration never silently over-generates native surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationPolicy {
    /// Method generation mode (default `ExplicitOnly`)
    pub method_generation_mode: MethodGenerationMode,
    /// Call the superclass initializer from generated constructors
    pub call_superclass_initializer: bool,
    /// Instances may be constructed from native code
    pub native_constructible: bool,
    /// Instances may be constructed from the dynamic object model
    pub dynamic_constructible: bool,
    /// Constructor generation mode (default `Minimal`)
    pub constructor_generation_mode: ConstructorGenerationMode,
    /// Split the super call out of generated constructor bodies
    pub split_super_calls: bool,
    /// Additional constructor parameter lists; accumulates across calls
    pub extra_constructor_params: Vec<Vec<NativeTypeRef>>,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        GenerationPolicy {
            method_generation_mode: MethodGenerationMode::ExplicitOnly,
            call_superclass_initializer: true,
            native_constructible: true,
            dynamic_constructible: true,
            constructor_generation_mode: ConstructorGenerationMode::Minimal,
            split_super_calls: false,
            extra_constructor_params: Vec::new(),
        }
    }
}

/// One value in a sparse policy update
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyValue {
    /// Boolean flag value
    Bool(bool),
    /// Mode keyword (`explicit`, `all`, `minimal`)
    Keyword(String),
}

impl From<bool> for PolicyValue {
    fn from(value: bool) -> Self {
        PolicyValue::Bool(value)
    }
}

impl From<&str> for PolicyValue {
    fn from(keyword: &str) -> Self {
        PolicyValue::Keyword(keyword.to_string())
    }
}

impl GenerationPolicy {
    /// Validate one `(key, value)` pair of a sparse update without applying it
    pub(crate) fn check_option(key: &str, value: &PolicyValue) -> Result<(), ConfigError> {
        match key {
            "methods" => match value {
                PolicyValue::Keyword(kw) if kw == "explicit" || kw == "all" => Ok(()),
                _ => Err(ConfigError::InvalidPolicyValue {
                    key: key.to_string(),
                    expected: "'explicit' or 'all'",
                }),
            },
            "ctors" => match value {
                PolicyValue::Keyword(kw) if kw == "all" || kw == "minimal" => Ok(()),
                _ => Err(ConfigError::InvalidPolicyValue {
                    key: key.to_string(),
                    expected: "'all' or 'minimal'",
                }),
            },
            "call_init" | "native_constructible" | "dynamic_constructible" | "split_super" => {
                match value {
                    PolicyValue::Bool(_) => Ok(()),
                    _ => Err(ConfigError::InvalidPolicyValue {
                        key: key.to_string(),
                        expected: "a boolean",
                    }),
                }
            }
            _ => Err(ConfigError::UnknownPolicyOption {
                key: key.to_string(),
            }),
        }
    }

    /// Apply one already-validated `(key, value)` pair
    pub(crate) fn apply_option(&mut self, key: &str, value: &PolicyValue) {
        match (key, value) {
            ("methods", PolicyValue::Keyword(kw)) => {
                self.method_generation_mode = if kw == "all" {
                    MethodGenerationMode::AllMethods
                } else {
                    MethodGenerationMode::ExplicitOnly
                };
            }
            ("ctors", PolicyValue::Keyword(kw)) => {
                self.constructor_generation_mode = if kw == "all" {
                    ConstructorGenerationMode::All
                } else {
                    ConstructorGenerationMode::Minimal
                };
            }
            ("call_init", PolicyValue::Bool(flag)) => self.call_superclass_initializer = *flag,
            ("native_constructible", PolicyValue::Bool(flag)) => self.native_constructible = *flag,
            ("dynamic_constructible", PolicyValue::Bool(flag)) => {
                self.dynamic_constructible = *flag
            }
            ("split_super", PolicyValue::Bool(flag)) => self.split_super_calls = *flag,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conservative_defaults() {
        let policy = GenerationPolicy::default();
        assert_eq!(policy.method_generation_mode, MethodGenerationMode::ExplicitOnly);
        assert_eq!(
            policy.constructor_generation_mode,
            ConstructorGenerationMode::Minimal
        );
        assert!(policy.call_superclass_initializer);
        assert!(policy.native_constructible);
        assert!(policy.dynamic_constructible);
        assert!(!policy.split_super_calls);
        assert!(policy.extra_constructor_params.is_empty());
    }

    #[test]
    fn test_check_option_rejects_unknown_key() {
        let err = GenerationPolicy::check_option("metods", &PolicyValue::Bool(true)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownPolicyOption {
                key: "metods".to_string()
            }
        );
    }

    #[test]
    fn test_check_option_rejects_wrong_shape() {
        let err =
            GenerationPolicy::check_option("methods", &PolicyValue::Bool(true)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPolicyValue { .. }));

        let err =
            GenerationPolicy::check_option("call_init", &PolicyValue::Keyword("yes".into()))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPolicyValue { .. }));
    }

    #[test]
    fn test_apply_option() {
        let mut policy = GenerationPolicy::default();
        policy.apply_option("methods", &PolicyValue::Keyword("all".to_string()));
        policy.apply_option("split_super", &PolicyValue::Bool(true));
        assert_eq!(policy.method_generation_mode, MethodGenerationMode::AllMethods);
        assert!(policy.split_super_calls);
    }
}
