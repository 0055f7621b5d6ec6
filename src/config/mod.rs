pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "schema-models")]
#[command(about = "Check JSON payloads against the A model schema")]
pub struct CliConfig {
    /// JSON payload to read; stdin when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Reject mistyped fields while deserializing
    #[arg(long)]
    pub strict: bool,

    /// Pretty-print the serialized output
    #[arg(long)]
    pub pretty: bool,

    /// Print the model's field table and exit
    #[arg(long)]
    pub describe: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 TOML 配置並套用命令列覆寫
    pub fn model_config(&self) -> crate::utils::error::Result<toml_config::ModelConfig> {
        use crate::utils::validation::{validate_path, Validate};

        let mut config = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                toml_config::ModelConfig::from_file(path)?
            }
            None => toml_config::ModelConfig::default(),
        };
        config.validate()?;

        if self.strict {
            config.deserialize.mode = toml_config::DeserializeMode::Strict;
        }
        if self.pretty {
            config.serialize.pretty = true;
        }
        Ok(config)
    }
}
