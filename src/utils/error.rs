use crate::utils::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },
}

impl ModelError {
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 命令列工具使用的結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ModelError::Validation(_) => 1,
            ModelError::Serialization(_) | ModelError::Io(_) | ModelError::Config { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::FieldKind;
    use crate::utils::validation::ValidationKind;

    #[test]
    fn test_validation_error_is_transparent() {
        let kind = ValidationKind::TypeMismatch(FieldKind::String);
        let err: ModelError = ValidationError::new("statusCode", kind).into();
        assert_eq!(err.to_string(), "statusCode must be of type string.");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err = ModelError::config("deserialize.mode", "unknown mode");
        assert_eq!(err.to_string(), "Configuration error in deserialize.mode: unknown mode");
        assert_eq!(err.exit_code(), 2);
    }
}
