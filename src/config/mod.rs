mod schema;
mod validation;

pub use schema::Config;
pub use validation::validate_config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/rangeline/)
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".config").join("rangeline"))
        .unwrap_or_else(|| PathBuf::from(".rangeline"))
}

/// Get the default config file path (~/.config/rangeline/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/rangeline/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing file at the default path yields the default config.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    if config_content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let path = env::temp_dir().join("rangeline_test_missing_config.yaml");
        let _ = fs::remove_file(&path);

        let result = load_config(Some(path));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_yaml_config() {
        let path = env::temp_dir().join("rangeline_test_config.yaml");
        fs::write(
            &path,
            "data_file: /tmp/rangeline-stats.json\nclubs: [driver, 7i, putter]\nmax_distance: 350\n",
        )
        .unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/rangeline-stats.json")));
        assert_eq!(config.club_set().len(), 3);
        assert_eq!(config.distance_range().max, 350);
        assert_eq!(config.distance_range().min, 0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_blank_config_file_is_default() {
        let path = env::temp_dir().join("rangeline_test_blank_config.yaml");
        fs::write(&path, "\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config, Config::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let path = env::temp_dir().join("rangeline_test_unknown_config.yaml");
        fs::write(&path, "queries: []\n").unwrap();

        let result = load_config(Some(path.clone()));
        assert!(result.is_err());

        let _ = fs::remove_file(&path);
    }
}
