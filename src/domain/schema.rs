//! Declared schema types and their mapping onto Rust types.
//!
//! Generated models store every field as `Option<FieldValue<T>>`. Values set
//! through typed setters are always `FieldValue::Typed`; only input that
//! crossed the untyped JSON boundary can hold a `FieldValue::Untyped` value,
//! so that is the only place a runtime type check is needed.

use crate::domain::model::Model;
use crate::utils::validation::{ValidationError, ValidationKind};
use serde_json::{Map, Number, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Enum(&'static [&'static str]),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
            FieldKind::Enum(_) => "enum",
        };
        f.pad(name)
    }
}

/// Schema metadata for one model field. `name` is also the JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDescriptor {
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }
}

/// A Rust type that can stand for a declared schema type.
pub trait SchemaValue: Sized {
    const KIND: FieldKind;

    /// Shape match used by lenient deserialization. `None` means the value
    /// does not have the declared shape.
    fn from_wire(value: &Value) -> Option<Self>;

    fn to_wire(&self) -> Result<Value, ValidationError>;

    /// Why `value` was rejected by `from_wire`, relative to the value itself.
    fn mismatch(_value: &Value) -> ValidationError {
        ValidationError::here(ValidationKind::TypeMismatch(Self::KIND))
    }

    fn from_wire_strict(value: &Value) -> Result<Self, ValidationError> {
        Self::from_wire(value).ok_or_else(|| Self::mismatch(value))
    }
}

impl SchemaValue for String {
    const KIND: FieldKind = FieldKind::String;

    fn from_wire(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn to_wire(&self) -> Result<Value, ValidationError> {
        Ok(Value::String(self.clone()))
    }
}

impl SchemaValue for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn from_wire(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn to_wire(&self) -> Result<Value, ValidationError> {
        Ok(Value::Bool(*self))
    }
}

impl SchemaValue for f64 {
    const KIND: FieldKind = FieldKind::Number;

    fn from_wire(value: &Value) -> Option<Self> {
        value.as_f64()
    }

    // NaN and infinities have no JSON representation.
    fn to_wire(&self) -> Result<Value, ValidationError> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| ValidationError::here(ValidationKind::TypeMismatch(Self::KIND)))
    }
}

/// Whole numbers that fit in an `i64`; fractions and larger values are rejected.
impl SchemaValue for i64 {
    const KIND: FieldKind = FieldKind::Integer;

    fn from_wire(value: &Value) -> Option<Self> {
        value.as_i64()
    }

    fn to_wire(&self) -> Result<Value, ValidationError> {
        Ok(Value::from(*self))
    }
}

/// Free-form object (`additionalProperties` style fields).
impl SchemaValue for Map<String, Value> {
    const KIND: FieldKind = FieldKind::Object;

    fn from_wire(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }

    fn to_wire(&self) -> Result<Value, ValidationError> {
        Ok(Value::Object(self.clone()))
    }
}

impl<T: SchemaValue> SchemaValue for Vec<T> {
    const KIND: FieldKind = FieldKind::Array;

    fn from_wire(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_wire).collect()
    }

    fn to_wire(&self) -> Result<Value, ValidationError> {
        self.iter()
            .enumerate()
            .map(|(index, item)| item.to_wire().map_err(|e| e.at(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn mismatch(value: &Value) -> ValidationError {
        let not_an_array =
            || ValidationError::here(ValidationKind::TypeMismatch(FieldKind::Array));
        match value.as_array() {
            Some(items) => items
                .iter()
                .enumerate()
                .find(|(_, item)| T::from_wire(item).is_none())
                .map(|(index, item)| T::mismatch(item).at(index))
                .unwrap_or_else(not_an_array),
            None => not_an_array(),
        }
    }

    fn from_wire_strict(value: &Value) -> Result<Self, ValidationError> {
        let items = value
            .as_array()
            .ok_or_else(|| {
                ValidationError::here(ValidationKind::TypeMismatch(FieldKind::Array))
            })?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_wire_strict(item).map_err(|e| e.at(index)))
            .collect()
    }
}

/// A nested model used as a field type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelValue<M>(pub M);

impl<M: Model> SchemaValue for ModelValue<M> {
    const KIND: FieldKind = FieldKind::Object;

    fn from_wire(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        let mut model = M::default();
        model.deserialize(Some(value));
        Some(ModelValue(model))
    }

    fn to_wire(&self) -> Result<Value, ValidationError> {
        self.0.serialize().map(Value::Object)
    }

    fn from_wire_strict(value: &Value) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(Self::mismatch(value));
        }
        let mut model = M::default();
        model.try_deserialize(Some(value))?;
        Ok(ModelValue(model))
    }
}

/// Storage for one present field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<T> {
    Typed(T),
    /// Kept as received because it did not match the declared type.
    Untyped(Value),
}

impl<T: SchemaValue> FieldValue<T> {
    pub fn from_wire(value: &Value) -> Self {
        match T::from_wire(value) {
            Some(typed) => FieldValue::Typed(typed),
            None => FieldValue::Untyped(value.clone()),
        }
    }

    pub fn typed(&self) -> Option<&T> {
        match self {
            FieldValue::Typed(value) => Some(value),
            FieldValue::Untyped(_) => None,
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, FieldValue::Typed(_))
    }

    pub fn to_wire(&self) -> Result<Value, ValidationError> {
        match self {
            FieldValue::Typed(value) => value.to_wire(),
            FieldValue::Untyped(raw) => Err(T::mismatch(raw)),
        }
    }
}

/// What deserialization does to one field slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment<T> {
    /// Key absent from the input.
    Keep,
    /// Key present with `null`.
    Clear,
    Set(FieldValue<T>),
}

impl<T> Assignment<T> {
    pub fn apply(self, slot: &mut Option<FieldValue<T>>) {
        match self {
            Assignment::Keep => {}
            Assignment::Clear => *slot = None,
            Assignment::Set(value) => *slot = Some(value),
        }
    }
}

pub fn read_field<T: SchemaValue>(
    object: &Map<String, Value>,
    field: &FieldDescriptor,
) -> Assignment<T> {
    debug_assert_eq!(field.kind, T::KIND, "descriptor kind for {}", field.name);
    match object.get(field.name) {
        None => Assignment::Keep,
        Some(Value::Null) => Assignment::Clear,
        Some(value) => {
            let value = FieldValue::from_wire(value);
            if !value.is_typed() {
                tracing::debug!(field = field.name, expected = %T::KIND, "keeping mistyped value");
            }
            Assignment::Set(value)
        }
    }
}

pub fn read_field_strict<T: SchemaValue>(
    object: &Map<String, Value>,
    field: &FieldDescriptor,
) -> Result<Assignment<T>, ValidationError> {
    debug_assert_eq!(field.kind, T::KIND, "descriptor kind for {}", field.name);
    match object.get(field.name) {
        None => Ok(Assignment::Keep),
        Some(Value::Null) => Ok(Assignment::Clear),
        Some(value) => T::from_wire_strict(value)
            .map(|typed| Assignment::Set(FieldValue::Typed(typed)))
            .map_err(|e| e.within(field.name)),
    }
}

pub fn write_field<T: SchemaValue>(
    output: &mut Map<String, Value>,
    field: &FieldDescriptor,
    slot: &Option<FieldValue<T>>,
) -> Result<(), ValidationError> {
    debug_assert_eq!(field.kind, T::KIND, "descriptor kind for {}", field.name);
    let Some(value) = slot else {
        if field.required {
            return Err(ValidationError::new(field.name, ValidationKind::MissingRequired));
        }
        return Ok(());
    };

    let wire = value.to_wire().map_err(|e| {
        if !value.is_typed() {
            tracing::debug!(field = field.name, error = %e, "rejecting mistyped value");
        }
        e.within(field.name)
    })?;
    output.insert(field.name.to_string(), wire);
    Ok(())
}

/// Declare a string enum usable as a model field type.
///
/// ```
/// schema_models::string_enum! {
///     pub enum Color {
///         Red => "red",
///         Blue => "blue",
///     }
/// }
/// assert_eq!(Color::Red.as_str(), "red");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl $crate::domain::schema::SchemaValue for $name {
            const KIND: $crate::domain::schema::FieldKind =
                $crate::domain::schema::FieldKind::Enum(Self::VALUES);

            fn from_wire(value: &$crate::Value) -> ::core::option::Option<Self> {
                match value.as_str()? {
                    $($wire => ::core::option::Option::Some($name::$variant),)+
                    _ => ::core::option::Option::None,
                }
            }

            fn to_wire(
                &self,
            ) -> ::core::result::Result<$crate::Value, $crate::utils::validation::ValidationError> {
                ::core::result::Result::Ok($crate::Value::String(self.as_str().to_string()))
            }
        }
    };
}
