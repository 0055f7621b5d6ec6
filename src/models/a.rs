use crate::domain::model::Model;
use crate::domain::schema::{
    read_field, read_field_strict, write_field, FieldDescriptor, FieldKind, FieldValue,
};
use crate::utils::validation::ValidationError;
use serde_json::{Map, Value};

/// A represents the `A` schema: a single optional `statusCode` string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct A {
    status_code: Option<FieldValue<String>>,
}

impl A {
    pub const STATUS_CODE: FieldDescriptor =
        FieldDescriptor::optional("statusCode", FieldKind::String);

    pub fn new() -> A {
        A { status_code: None }
    }

    pub fn with_status_code(status_code: impl Into<String>) -> A {
        A {
            status_code: Some(FieldValue::Typed(status_code.into())),
        }
    }

    /// The typed value; `None` when absent or when the stored value is not a string.
    pub fn status_code(&self) -> Option<&str> {
        self.status_code
            .as_ref()
            .and_then(FieldValue::typed)
            .map(String::as_str)
    }

    pub fn raw_status_code(&self) -> Option<&FieldValue<String>> {
        self.status_code.as_ref()
    }

    pub fn set_status_code(&mut self, status_code: impl Into<String>) {
        self.status_code = Some(FieldValue::Typed(status_code.into()));
    }

    pub fn clear_status_code(&mut self) {
        self.status_code = None;
    }
}

impl Model for A {
    const NAME: &'static str = "A";
    const FIELDS: &'static [FieldDescriptor] = &[A::STATUS_CODE];

    fn serialize(&self) -> Result<Map<String, Value>, ValidationError> {
        let mut payload = Map::new();
        write_field(&mut payload, &A::STATUS_CODE, &self.status_code)?;
        Ok(payload)
    }

    fn deserialize(&mut self, instance: Option<&Value>) -> &mut Self {
        if let Some(Value::Object(instance)) = instance {
            read_field(instance, &A::STATUS_CODE).apply(&mut self.status_code);
        }
        self
    }

    fn try_deserialize(&mut self, instance: Option<&Value>) -> Result<&mut Self, ValidationError> {
        if let Some(Value::Object(instance)) = instance {
            let status_code = read_field_strict(instance, &A::STATUS_CODE)?;
            status_code.apply(&mut self.status_code);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::{DeserializeMode, ModelConfig};
    use serde_json::json;

    #[test]
    fn test_construct_copies_recognized_fields_only() {
        let a = A::from_parameters(Some(&json!({"statusCode": "x", "extra": "y"})));
        assert_eq!(a.status_code(), Some("x"));
        assert_eq!(a.to_value().unwrap(), json!({"statusCode": "x"}));
    }

    #[test]
    fn test_construct_without_parameters() {
        assert_eq!(A::from_parameters(None), A::new());
        assert_eq!(A::from_parameters(Some(&Value::Null)), A::new());
        assert_eq!(A::from_parameters(Some(&json!("not an object"))), A::new());
    }

    #[test]
    fn test_construct_does_not_validate() {
        let a = A::from_parameters(Some(&json!({"statusCode": 42})));
        assert_eq!(a.status_code(), None);
        assert_eq!(a.raw_status_code(), Some(&FieldValue::Untyped(json!(42))));
    }

    #[test]
    fn test_serialize_omits_absent_field() {
        let payload = A::new().serialize().unwrap();
        assert!(payload.is_empty());
        assert_eq!(A::new().to_json_string().unwrap(), "{}");
    }

    #[test]
    fn test_serialize_rejects_non_string() {
        let a = A::from_parameters(Some(&json!({"statusCode": 42})));
        let err = a.serialize().unwrap_err();
        assert_eq!(err.field, "statusCode");
        assert_eq!(err.to_string(), "statusCode must be of type string.");
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let a = A::with_status_code("OK");
        assert_eq!(a.serialize().unwrap(), a.serialize().unwrap());
    }

    #[test]
    fn test_deserialize_null_input_is_noop() {
        let mut a = A::new();
        a.deserialize(None);
        assert_eq!(a, A::new());
        a.deserialize(Some(&Value::Null));
        assert_eq!(a, A::new());
    }

    #[test]
    fn test_deserialize_explicit_null_clears_field() {
        let mut a = A::with_status_code("OK");
        a.deserialize(Some(&json!({"statusCode": null})));
        assert_eq!(a.status_code(), None);
        assert!(a.serialize().unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_missing_key_keeps_field() {
        let mut a = A::with_status_code("OK");
        a.deserialize(Some(&json!({})));
        assert_eq!(a.status_code(), Some("OK"));
    }

    #[test]
    fn test_try_deserialize_leaves_instance_on_error() {
        let mut a = A::with_status_code("OK");
        let err = a.try_deserialize(Some(&json!({"statusCode": false}))).unwrap_err();
        assert_eq!(err.to_string(), "statusCode must be of type string.");
        assert_eq!(a.status_code(), Some("OK"));
    }

    #[test]
    fn test_deserialize_with_config() {
        let mut config = ModelConfig::default();
        let mut a = A::new();
        assert!(a.deserialize_with(Some(&json!({"statusCode": 1})), &config).is_ok());

        config.deserialize.mode = DeserializeMode::Strict;
        let mut a = A::new();
        assert!(a.deserialize_with(Some(&json!({"statusCode": 1})), &config).is_err());
        assert_eq!(a, A::new());
    }

    #[test]
    fn test_setters() {
        let mut a = A::new();
        a.set_status_code("Created");
        assert_eq!(a.status_code(), Some("Created"));
        a.clear_status_code();
        assert_eq!(a.raw_status_code(), None);
    }
}
