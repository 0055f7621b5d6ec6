use crate::config::toml_config::{DeserializeMode, ModelConfig};
use crate::domain::schema::FieldDescriptor;
use crate::utils::error::Result;
use crate::utils::validation::ValidationError;
use serde_json::{Map, Value};

/// A schema-defined record type.
///
/// Construction and lenient deserialization never fail: values that do not
/// match their declared type are kept and reported by [`Model::serialize`].
pub trait Model: Default {
    /// Schema name of the model.
    const NAME: &'static str;

    /// Declared fields, in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Build an instance from a parameter mapping. Only recognized keys are
    /// copied; anything that is not an object counts as no parameters.
    fn from_parameters(parameters: Option<&Value>) -> Self {
        let mut model = Self::default();
        model.deserialize(parameters);
        model
    }

    /// Validate every present field and project the instance to a JSON
    /// object. Fails on the first invalid field; absent fields are omitted.
    fn serialize(&self) -> std::result::Result<Map<String, Value>, ValidationError>;

    /// Populate from a JSON value without type checks. A key holding `null`
    /// clears the field, a missing key leaves it untouched.
    fn deserialize(&mut self, instance: Option<&Value>) -> &mut Self;

    /// Like [`Model::deserialize`] but rejects mistyped fields. The instance
    /// is left unmodified when an error is returned.
    fn try_deserialize(
        &mut self,
        instance: Option<&Value>,
    ) -> std::result::Result<&mut Self, ValidationError>;

    fn deserialize_with(
        &mut self,
        instance: Option<&Value>,
        config: &ModelConfig,
    ) -> std::result::Result<&mut Self, ValidationError> {
        match config.deserialize.mode {
            DeserializeMode::Lenient => Ok(self.deserialize(instance)),
            DeserializeMode::Strict => self.try_deserialize(instance),
        }
    }

    fn to_value(&self) -> std::result::Result<Value, ValidationError> {
        self.serialize().map(Value::Object)
    }

    fn to_json_string(&self) -> Result<String> {
        let value = self.to_value()?;
        Ok(serde_json::to_string(&value)?)
    }

    fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Ok(Self::from_parameters(Some(&value)))
    }
}
