use crate::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "shopkeep.json";
const DEFAULT_PROMPT: &str = "Enter command: ";

/// Shell configuration, stored next to the working directory as
/// `shopkeep.json`. The core never reads this; only the shell does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    /// Prompt printed before each command is read.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Seed fixture loaded at startup unless overridden on the
    /// command line.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            seed_file: None,
        }
    }
}

impl ShopConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShopError::Io)?;
        let config: ShopConfig =
            serde_json::from_str(&content).map_err(ShopError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShopError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShopError::Serialization)?;
        fs::write(config_path, content).map_err(ShopError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.prompt, "Enter command: ");
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = env::temp_dir().join("shopkeep_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = ShopConfig::load(&temp_dir).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = env::temp_dir().join("shopkeep_test_config_save");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let config = ShopConfig {
            prompt: "shop> ".to_string(),
            seed_file: Some(PathBuf::from("items.json")),
        };
        config.save(&temp_dir).unwrap();

        let loaded = ShopConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let temp_dir = env::temp_dir().join("shopkeep_test_config_partial");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();
        fs::write(temp_dir.join(CONFIG_FILENAME), "{}").unwrap();

        let loaded = ShopConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded, ShopConfig::default());

        let _ = fs::remove_dir_all(&temp_dir);
    }
}
