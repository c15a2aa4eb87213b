use std::fmt;

use thiserror::Error;

use crate::schema::Kind;

/// Direction of a `min`/`max` bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    AtLeast,
    AtMost,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::AtLeast => write!(f, "at least"),
            Bound::AtMost => write!(f, "at most"),
        }
    }
}

/// What a `min`/`max` bound measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Length of a string, in bytes.
    Characters,
    /// Numeric value.
    Value,
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Characters => write!(f, " characters"),
            Measure::Value => Ok(()),
        }
    }
}

/// Format a string field failed to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    Email,
    Url,
    Pattern(String),
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Email => write!(f, "be a valid email address"),
            Format::Url => write!(f, "be a valid URL"),
            Format::Pattern(pattern) => write!(f, "match the pattern '{pattern}'"),
        }
    }
}

/// Whether an error comes from bad input data or from a mistake in the
/// struct's rule annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Configuration,
}

/// The first rule violation found in a struct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("field '{field}' is required")]
    Required { field: String },

    #[error("field '{field}' must be {bound} {limit}{measure}")]
    Range {
        field: String,
        limit: i64,
        bound: Bound,
        measure: Measure,
    },

    #[error("field '{field}' must {format}")]
    Format { field: String, format: Format },

    #[error("field '{field}' must {}be one of the following values: {allowed}", negate(.must_be_in))]
    Membership {
        field: String,
        allowed: String,
        must_be_in: bool,
    },

    #[error("field '{field}' must {}be equal to '{expected}'", negate(.must_equal))]
    Equality {
        field: String,
        expected: String,
        must_equal: bool,
    },

    #[error("no validator registered for rule '{rule}' on field '{field}'")]
    UnknownRule { field: String, rule: String },

    #[error("unsupported type for {rule} validation on field '{field}': {kind}")]
    UnsupportedType {
        field: String,
        rule: String,
        kind: Kind,
    },

    #[error("invalid {rule} value '{raw}' for field '{field}'")]
    MalformedParameter {
        field: String,
        rule: String,
        raw: String,
    },

    /// Failure reported by a caller-registered rule.
    #[error("{0}")]
    Custom(String),
}

fn negate(positive: &bool) -> &'static str {
    if *positive {
        ""
    } else {
        "not "
    }
}

impl ValidationError {
    pub fn custom(message: impl Into<String>) -> Self {
        ValidationError::Custom(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ValidationError::UnknownRule { .. }
            | ValidationError::UnsupportedType { .. }
            | ValidationError::MalformedParameter { .. } => ErrorCategory::Configuration,
            _ => ErrorCategory::Data,
        }
    }

    /// Name of the offending field, when the error carries one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Required { field }
            | ValidationError::Range { field, .. }
            | ValidationError::Format { field, .. }
            | ValidationError::Membership { field, .. }
            | ValidationError::Equality { field, .. }
            | ValidationError::UnknownRule { field, .. }
            | ValidationError::UnsupportedType { field, .. }
            | ValidationError::MalformedParameter { field, .. } => Some(field),
            ValidationError::Custom(_) => None,
        }
    }
}
