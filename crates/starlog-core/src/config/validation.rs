//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_taxonomy(config)?;
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_taxonomy(config: &Config) -> Result<()> {
    if config.taxonomy.fallback_category.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "taxonomy.fallback_category".to_string(),
            message: "fallback category cannot be empty".to_string(),
        }
        .into());
    }

    // A category token must map to a single impact level
    for token in &config.taxonomy.minor {
        if config.taxonomy.patch.contains(token) {
            return Err(ConfigError::InvalidValue {
                field: "taxonomy.minor".to_string(),
                message: format!("category '{}' is listed as both minor and patch", token),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "changelog file path cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_duplicate_taxonomy_token() {
        let mut config = Config::default();
        config.taxonomy.minor.push("fix".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_fallback() {
        let mut config = Config::default();
        config.taxonomy.fallback_category.clear();
        assert!(validate_config(&config).is_err());
    }
}
