//! Field and struct evaluation.

use tracing::{debug, trace};

use super::rules::{parse_rules, RuleSpec};
use super::{Registry, ValidationError};
use crate::schema::{Field, Schema};

impl Registry {
    /// Runs `rules` against one field, left to right, stopping at the first
    /// failure.
    ///
    /// A rule name with no registered evaluator fails with
    /// [`ValidationError::UnknownRule`].
    pub fn validate_field(
        &self,
        field: &Field<'_>,
        rules: &[RuleSpec<'_>],
    ) -> Result<(), ValidationError> {
        for rule in rules {
            let evaluator = self
                .get(rule.name)
                .ok_or_else(|| ValidationError::UnknownRule {
                    field: field.name().to_string(),
                    rule: rule.name.to_string(),
                })?;
            trace!(field = field.name(), rule = rule.name, "evaluating rule");
            evaluator.evaluate(field, rule.param)?;
        }
        Ok(())
    }

    /// Validates every annotated field of `target` in declaration order.
    ///
    /// Returns the first failure; later fields are not evaluated.
    pub fn validate<T: Schema + ?Sized>(&self, target: &T) -> Result<(), ValidationError> {
        for field in target.fields() {
            let rules = parse_rules(field.rules());
            if rules.is_empty() {
                continue;
            }
            if let Err(err) = self.validate_field(&field, &rules) {
                debug!(field = field.name(), error = %err, "validation failed");
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Validates `target` against the built-in rules.
///
/// Use [`Registry::validate`] to validate with custom rules.
pub fn validate_struct<T: Schema + ?Sized>(target: &T) -> Result<(), ValidationError> {
    Registry::builtin().validate(target)
}
