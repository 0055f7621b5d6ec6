pub mod config;
pub mod domain;
pub mod models;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::{DeserializeMode, ModelConfig};
pub use domain::model::Model;
pub use domain::schema::{FieldDescriptor, FieldKind, FieldValue, ModelValue, SchemaValue};
pub use models::A;
pub use serde_json::{Map, Value};
pub use utils::error::{ModelError, Result};
pub use utils::validation::{ValidationError, ValidationKind};
