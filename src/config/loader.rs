use super::errors::ConfigError;
use super::spacecraft::{validate_spacecraft_configs, RawSpacecraftConfig, SpacecraftConfig};
use std::fs;
use std::path::Path;

/// Reads and validates a JSON array of spacecraft records.
pub fn load_spacecraft_configs<P: AsRef<Path>>(path: P) -> Result<Vec<SpacecraftConfig>, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::unavailable(path, e))?;

    let raw: Vec<RawSpacecraftConfig> = serde_json::from_str(&contents).map_err(|e| {
        ConfigError::Malformed(format!("'{}' contains invalid JSON: {}", path.display(), e))
    })?;
    let configs = validate_spacecraft_configs(&raw)?;

    tracing::info!(
        path = %path.display(),
        count = configs.len(),
        "loaded spacecraft configurations"
    );
    Ok(configs)
}

/// Validates spacecraft records held in memory.
pub fn parse_spacecraft_configs(contents: &str) -> Result<Vec<SpacecraftConfig>, ConfigError> {
    let raw: Vec<RawSpacecraftConfig> = serde_json::from_str(contents)?;
    validate_spacecraft_configs(&raw)
}
