use anyhow::Result;
use schema_models::utils::validation::Validate;
use schema_models::{DeserializeMode, Model, ModelConfig, ModelError, A};
use serde_json::json;
use tempfile::TempDir;

/// 從檔案載入 strict 模式後，錯誤型別應在反序列化階段被拒絕
#[test]
fn test_strict_mode_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("models.toml");
    std::fs::write(
        &config_path,
        r#"
[deserialize]
mode = "strict"

[logging]
level = "warn"
"#,
    )?;

    let config = ModelConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.deserialize.mode, DeserializeMode::Strict);

    let mut a = A::new();
    let err = a
        .deserialize_with(Some(&json!({"statusCode": 42})), &config)
        .unwrap_err();
    assert_eq!(err.to_string(), "statusCode must be of type string.");
    assert_eq!(a, A::new());

    a.deserialize_with(Some(&json!({"statusCode": "OK"})), &config)?;
    assert_eq!(a.status_code(), Some("OK"));
    Ok(())
}

/// 預設 lenient：反序列化接受，序列化時才報錯
#[test]
fn test_lenient_mode_defers_to_serialize() -> Result<()> {
    let config = ModelConfig::from_toml_str("[serialize]\npretty = false\n")?;

    let mut a = A::new();
    a.deserialize_with(Some(&json!({"statusCode": 42})), &config)?;

    let err: ModelError = a.to_json_string().unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.to_string(), "statusCode must be of type string.");
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = ModelConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ModelError::Io(_)));
    assert_eq!(err.exit_code(), 2);
}
