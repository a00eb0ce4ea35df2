//! Answer configuration management.

use crate::types::AnswerConfig;
use docquest_core::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Load the answer configuration for a workspace.
///
/// Loads from `.docquest/answer.yaml` if it exists, otherwise returns the
/// defaults. The loaded configuration is validated either way.
pub fn load_config(workspace: &Path) -> AppResult<AnswerConfig> {
    let config_path = get_config_path(workspace);

    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path).map_err(|e| {
            AppError::Config(format!("Failed to read config at {:?}: {}", config_path, e))
        })?;

        let config: AnswerConfig = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("Failed to parse config at {:?}: {}", config_path, e))
        })?;

        tracing::debug!("Loaded answer config from {:?}", config_path);
        config
    } else {
        tracing::debug!("Using default answer config (no config file found)");
        AnswerConfig::default()
    };

    config.validate()?;
    Ok(config)
}

/// Save the answer configuration for a workspace.
pub fn save_config(workspace: &Path, config: &AnswerConfig) -> AppResult<()> {
    config.validate()?;

    let config_path = get_config_path(workspace);

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let yaml = serde_yaml::to_string(config)?;

    fs::write(&config_path, yaml).map_err(|e| {
        AppError::Config(format!("Failed to write config to {:?}: {}", config_path, e))
    })?;

    tracing::debug!("Saved answer config to {:?}", config_path);
    Ok(())
}

/// Get the path to the answer config file.
pub fn get_config_path(workspace: &Path) -> PathBuf {
    workspace.join(".docquest").join("answer.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LowConfidencePolicy;
    use tempfile::TempDir;

    #[test]
    fn test_load_default_config() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path()).unwrap();

        assert_eq!(config, AnswerConfig::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = AnswerConfig {
            chunk_size: 250,
            overlap: 50,
            low_confidence: LowConfidencePolicy::NotFound,
            ..Default::default()
        };

        save_config(temp.path(), &config).unwrap();

        let loaded = load_config(temp.path()).unwrap();
        assert_eq!(loaded.chunk_size, 250);
        assert_eq!(loaded.overlap, 50);
        assert_eq!(loaded.low_confidence, LowConfidencePolicy::NotFound);
    }

    #[test]
    fn test_load_invalid_config_rejected() {
        let temp = TempDir::new().unwrap();
        let path = get_config_path(temp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "chunk_size: 100\noverlap: 100\n").unwrap();

        let result = load_config(temp.path());
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
