//! Field-level view of configuration structs.
//!
//! A struct exposes its fields through [`Schema`], usually generated by
//! [`config_struct!`](crate::config_struct). Each field is seen as a name, a
//! set of static metadata tags (`env`, `validate`), and a typed value behind
//! [`FieldValue`].

use std::fmt;

use thiserror::Error;

/// Metadata key naming the environment variable a field is loaded from.
pub const ENV_TAG: &str = "env";

/// Metadata key holding a field's validation rules.
pub const VALIDATE_TAG: &str = "validate";

/// Metadata key overriding the name reported in error messages.
pub const NAME_TAG: &str = "name";

/// Static metadata attached to a field, as `(key, value)` pairs.
pub type Tags = &'static [(&'static str, &'static str)];

/// Semantic kind of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Integer,
    Boolean,
    Float,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::String => write!(f, "string"),
            Kind::Integer => write!(f, "integer"),
            Kind::Boolean => write!(f, "boolean"),
            Kind::Float => write!(f, "float"),
        }
    }
}

/// Read-only view of a field's current value.
///
/// All integer widths are widened to `i128`, which holds every `i64` and
/// `u64` without loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    String(&'a str),
    Integer(i128),
    Boolean(bool),
    Float(f64),
}

impl Value<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
            Value::Boolean(_) => Kind::Boolean,
            Value::Float(_) => Kind::Float,
        }
    }

    /// Returns `true` for the type's zero value: `""`, `0`, `false` or `0.0`.
    pub fn is_zero(&self) -> bool {
        match *self {
            Value::String(s) => s.is_empty(),
            Value::Integer(i) => i == 0,
            Value::Boolean(b) => !b,
            Value::Float(f) => f == 0.0,
        }
    }
}

/// A raw string could not be converted into a field's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert '{raw}' to {kind}")]
pub struct AssignError {
    pub raw: String,
    pub kind: Kind,
}

/// A value type that can live in a configuration struct.
pub trait FieldValue: fmt::Debug {
    fn kind(&self) -> Kind;

    fn value(&self) -> Value<'_>;

    /// Overwrites the value from its textual form.
    ///
    /// Returns `Ok(false)` when the input is deliberately ignored (an empty
    /// string never replaces a string field).
    fn assign(&mut self, raw: &str) -> Result<bool, AssignError>;
}

impl FieldValue for String {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn value(&self) -> Value<'_> {
        Value::String(self)
    }

    fn assign(&mut self, raw: &str) -> Result<bool, AssignError> {
        if raw.is_empty() {
            return Ok(false);
        }
        raw.clone_into(self);
        Ok(true)
    }
}

impl FieldValue for bool {
    fn kind(&self) -> Kind {
        Kind::Boolean
    }

    fn value(&self) -> Value<'_> {
        Value::Boolean(*self)
    }

    fn assign(&mut self, raw: &str) -> Result<bool, AssignError> {
        *self = parse_bool(raw).ok_or_else(|| AssignError {
            raw: raw.to_string(),
            kind: Kind::Boolean,
        })?;
        Ok(true)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

macro_rules! impl_integer_field {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn kind(&self) -> Kind {
                    Kind::Integer
                }

                fn value(&self) -> Value<'_> {
                    Value::Integer(*self as i128)
                }

                fn assign(&mut self, raw: &str) -> Result<bool, AssignError> {
                    *self = raw.parse().map_err(|_| AssignError {
                        raw: raw.to_string(),
                        kind: Kind::Integer,
                    })?;
                    Ok(true)
                }
            }
        )*
    };
}

impl_integer_field!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float_field {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn kind(&self) -> Kind {
                    Kind::Float
                }

                fn value(&self) -> Value<'_> {
                    Value::Float(f64::from(*self))
                }

                fn assign(&mut self, raw: &str) -> Result<bool, AssignError> {
                    *self = raw.parse().map_err(|_| AssignError {
                        raw: raw.to_string(),
                        kind: Kind::Float,
                    })?;
                    Ok(true)
                }
            }
        )*
    };
}

impl_float_field!(f32, f64);

/// Read-only descriptor of one struct field.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    tags: Tags,
    value: &'a dyn FieldValue,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, tags: Tags, value: &'a dyn FieldValue) -> Self {
        Self { name, tags, value }
    }

    /// The field's reported name: its `name` tag, or the declared identifier.
    pub fn name(&self) -> &'static str {
        self.tag(NAME_TAG).unwrap_or(self.name)
    }

    /// Looks up a metadata tag by key.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        lookup_tag(self.tags, key)
    }

    /// The raw validation annotation, or `""` when the field has none.
    pub fn rules(&self) -> &'static str {
        self.tag(VALIDATE_TAG).unwrap_or_default()
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn value(&self) -> Value<'a> {
        self.value.value()
    }
}

/// Writable descriptor of one struct field, used by loaders.
#[derive(Debug)]
pub struct FieldMut<'a> {
    name: &'static str,
    tags: Tags,
    value: &'a mut dyn FieldValue,
}

impl<'a> FieldMut<'a> {
    pub fn new(name: &'static str, tags: Tags, value: &'a mut dyn FieldValue) -> Self {
        Self { name, tags, value }
    }

    pub fn name(&self) -> &'static str {
        lookup_tag(self.tags, NAME_TAG).unwrap_or(self.name)
    }

    pub fn tag(&self, key: &str) -> Option<&'static str> {
        lookup_tag(self.tags, key)
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn assign(&mut self, raw: &str) -> Result<bool, AssignError> {
        self.value.assign(raw)
    }
}

fn lookup_tag(tags: Tags, key: &str) -> Option<&'static str> {
    tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// A struct whose fields can be enumerated in declaration order.
///
/// Implemented by [`config_struct!`](crate::config_struct); hand-written
/// impls must list fields in the same order from both methods.
pub trait Schema {
    fn fields(&self) -> Vec<Field<'_>>;

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}
