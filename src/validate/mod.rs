//! Declarative field validation.
//!
//! Each field's `validate` tag holds comma-separated rules such as
//! `required,min=5,max=20`. Rules are looked up by name in a [`Registry`]
//! and run left to right; the first failing rule of the first failing field
//! is returned.

pub mod builtin;
mod engine;
mod error;
mod registry;
mod rules;

pub use engine::validate_struct;
pub use error::{Bound, ErrorCategory, Format, Measure, ValidationError};
pub use registry::{Evaluator, Registry};
pub use rules::{parse_rules, RuleSpec};
