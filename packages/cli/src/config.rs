use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Pagecraft configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one `<moduleId>.json` descriptor per module
    #[serde(default = "default_modules_dir")]
    pub modules_dir: String,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_modules_dir() -> String {
    "modules".to_string()
}

pub fn default_log_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to the module descriptor directory
    pub fn get_modules_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.modules_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modules_dir: default_modules_dir(),
            log_filter: default_log_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "modulesDir": "vendor/modules",
            "logFilter": "pagecraft_registry=debug"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.modules_dir, "vendor/modules");
        assert_eq!(config.log_filter, "pagecraft_registry=debug");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.modules_dir, "modules");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: Config = serde_json::from_str(r#"{ "logFilter": "warn" }"#).unwrap();
        assert_eq!(config.modules_dir, "modules");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_load_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.get_modules_dir(&cwd), dir.path().join("modules"));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ not json").unwrap();

        assert!(Config::load(&dir.path().display().to_string()).is_err());
    }
}
