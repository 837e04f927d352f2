//! Configuration loading
//!
//! A JSON file (every field optional) overlaid with command-line overrides.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use strider_dfa::{Alphabet, Construction, DfaConfig};
use tracing::debug;

/// Load the configuration file at `path`, or the defaults when absent
pub fn load_config(path: Option<&Path>) -> Result<DfaConfig> {
    let Some(path) = path else {
        return Ok(DfaConfig::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = parse_config(&raw)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    debug!(path = %path.display(), ?config, "Loaded configuration");
    Ok(config)
}

/// Parse a JSON configuration document
pub fn parse_config(raw: &str) -> Result<DfaConfig> {
    let config: DfaConfig = serde_json::from_str(raw)?;
    config.alphabet.validate()?;
    Ok(config)
}

/// Apply flag overrides on top of a loaded configuration
pub fn apply_overrides(
    mut config: DfaConfig,
    alphabet_size: Option<usize>,
    naive: bool,
) -> Result<DfaConfig> {
    if let Some(size) = alphabet_size {
        config.alphabet = Alphabet::new(size)?;
    }
    if naive {
        config.construction = Construction::Naive;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        assert_eq!(load_config(None).unwrap(), DfaConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let config = parse_config(r#"{"max_pattern_length": 10, "construction": "naive"}"#).unwrap();
        assert_eq!(config.max_pattern_length, 10);
        assert_eq!(config.construction, Construction::Naive);
        assert_eq!(config.alphabet, Alphabet::BYTES);
    }

    #[test]
    fn test_parse_config_rejects_empty_alphabet() {
        assert!(parse_config(r#"{"alphabet": {"size": 0}}"#).is_err());
        assert!(parse_config("not json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/strider.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_overrides() {
        let config = apply_overrides(DfaConfig::default(), Some(128), true).unwrap();
        assert_eq!(config.alphabet.size(), 128);
        assert_eq!(config.construction, Construction::Naive);

        assert!(apply_overrides(DfaConfig::default(), Some(0), false).is_err());
    }
}
