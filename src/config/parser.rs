use std::path::Path;
use crate::errors::ReportsError;
use super::types::AdminReportsConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<AdminReportsConfig, ReportsError> {
    if !path.exists() {
        return Err(ReportsError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(ReportsError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // An empty file parses as null
    if yaml.is_null() {
        return Ok(AdminReportsConfig::default());
    }

    validate_schema(&yaml)?;

    let config: AdminReportsConfig = serde_yaml::from_value(yaml)?;
    Ok(config)
}

/// Check the document against the JSON schema. Violations are logged, not fatal.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), ReportsError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| ReportsError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| ReportsError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}
