use crate::domain::schema::FieldKind;
use crate::utils::error::{ModelError, Result};
use std::fmt;
use thiserror::Error;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 欄位驗證失敗的種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    TypeMismatch(FieldKind),
    MissingRequired,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationKind::TypeMismatch(FieldKind::Array) => f.write_str("must be an array."),
            ValidationKind::TypeMismatch(FieldKind::Enum(values)) => write!(
                f,
                "is not a valid value. The valid values are: {}.",
                values.join(", ")
            ),
            ValidationKind::TypeMismatch(kind) => write!(f, "must be of type {}.", kind),
            ValidationKind::MissingRequired => f.write_str("cannot be null or undefined."),
        }
    }
}

/// A field that failed its declared-type check.
///
/// `field` is a path: nested model fields are joined with `.` and array
/// elements are written as `[index]`, e.g. `items[2].statusCode`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} {kind}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationKind,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, kind: ValidationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// An error about the value itself, before it is attached to a field.
    pub(crate) fn here(kind: ValidationKind) -> Self {
        Self::new(String::new(), kind)
    }

    /// Prefix the path with the enclosing field name.
    pub fn within(mut self, name: &str) -> Self {
        self.field = if self.field.is_empty() {
            name.to_string()
        } else if self.field.starts_with('[') {
            format!("{}{}", name, self.field)
        } else {
            format!("{}.{}", name, self.field)
        };
        self
    }

    /// Prefix the path with an array index.
    pub fn at(mut self, index: usize) -> Self {
        self.field = if self.field.is_empty() || self.field.starts_with('[') {
            format!("[{}]{}", index, self.field)
        } else {
            format!("[{}].{}", index, self.field)
        };
        self
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ModelError::config(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(ModelError::config(field_name, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(value)) {
        return Ok(());
    }
    Err(ModelError::config(
        field_name,
        format!(
            "Unsupported value '{}'. Allowed values: {}",
            value,
            allowed.join(", ")
        ),
    ))
}
