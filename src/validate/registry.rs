//! Rule registry - maps rule names to evaluators.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::builtin;
use super::ValidationError;
use crate::schema::Field;

/// A named validation rule.
///
/// Evaluators are stateless: given a field and the rule's raw parameter,
/// they either accept the field's current value or describe why not.
/// Any `Fn(&Field, Option<&str>) -> Result<(), ValidationError>` is an
/// evaluator.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, field: &Field<'_>, param: Option<&str>) -> Result<(), ValidationError>;
}

impl<F> Evaluator for F
where
    F: Fn(&Field<'_>, Option<&str>) -> Result<(), ValidationError> + Send + Sync,
{
    fn evaluate(&self, field: &Field<'_>, param: Option<&str>) -> Result<(), ValidationError> {
        self(field, param)
    }
}

/// Registry of validation rules by name.
///
/// [`Registry::new`] comes pre-populated with the built-in rules
/// (`required`, `min`, `max`, `email`, `url`, `regexp`, `in`, `not_in`,
/// `eq`, `ne`). Registering under an existing name replaces the previous
/// evaluator.
///
/// ## Example
///
/// ```
/// use dragon_env::{Field, Registry, ValidationError, Value};
///
/// let mut registry = Registry::new();
/// registry.register("even", |field: &Field<'_>, _: Option<&str>| match field.value() {
///     Value::Integer(i) if i % 2 != 0 => Err(ValidationError::custom(format!(
///         "field '{}' must be even",
///         field.name()
///     ))),
///     _ => Ok(()),
/// });
/// assert!(registry.contains("even"));
/// ```
#[derive(Clone)]
pub struct Registry {
    evaluators: HashMap<String, Arc<dyn Evaluator>>,
}

impl Registry {
    /// Creates a registry holding all built-in rules.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        builtin::register_all(&mut registry);
        debug!(rules = registry.evaluators.len(), "registered built-in rules");
        registry
    }

    /// Creates a registry with no rules at all.
    pub fn empty() -> Self {
        Self {
            evaluators: HashMap::new(),
        }
    }

    /// Shared, immutable registry of the built-in rules.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(Registry::new)
    }

    /// Registers an evaluator, replacing any previous one with the same name.
    pub fn register(&mut self, name: impl Into<String>, evaluator: impl Evaluator + 'static) {
        let name = name.into();
        if self.evaluators.insert(name.clone(), Arc::new(evaluator)).is_some() {
            debug!(rule = %name, "replaced rule");
        } else {
            debug!(rule = %name, "registered rule");
        }
    }

    /// Looks up the evaluator for a rule name.
    pub fn get(&self, name: &str) -> Option<&dyn Evaluator> {
        self.evaluators.get(name).map(Arc::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.evaluators.contains_key(name)
    }

    /// All registered rule names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.evaluators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("rules", &self.names())
            .finish()
    }
}
