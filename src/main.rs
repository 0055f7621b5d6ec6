use clap::Parser;
use schema_models::utils::{logger, validation::validate_path};
use schema_models::{CliConfig, Model, ModelConfig, Result, A};
use std::io::Read;

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) => {
            validate_path("input", path)?;
            tracing::debug!("Reading payload from {}", path);
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            tracing::debug!("Reading payload from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run(cli: &CliConfig, config: &ModelConfig) -> Result<String> {
    let raw = read_input(cli.input.as_deref())?;
    let payload: serde_json::Value = serde_json::from_str(&raw)?;

    let mut model = A::new();
    model.deserialize_with(Some(&payload), config)?;
    tracing::debug!("Deserialized {}: {:?}", A::NAME, model);

    let output = model.to_value()?;
    let rendered = if config.serialize.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(rendered)
}

fn main() {
    let cli = CliConfig::parse();

    if cli.describe {
        println!("{}", A::NAME);
        for field in A::FIELDS {
            let flag = if field.required { "required" } else { "optional" };
            println!("  {:<16} {:<8} {}", field.name, field.kind, flag);
        }
        return;
    }

    let config = match cli.model_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, config.log_level());
    tracing::info!(mode = ?config.deserialize.mode, "Validating payload against {}", A::NAME);

    match run(&cli, &config) {
        Ok(output) => {
            tracing::info!("✅ Payload is valid");
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("❌ Payload rejected: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
