use crate::error::{PhonebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_DATA_FILE: &str = "data-file";
pub const KEY_SEED_ON_START: &str = "seed-on-start";

/// Configuration for phonebook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Contact file used when no `--file` is given
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Write the initial contacts when the contact file is missing
    #[serde(default = "default_seed_on_start")]
    pub seed_on_start: bool,
}

fn default_seed_on_start() -> bool {
    true
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            seed_on_start: default_seed_on_start(),
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| PhonebookError::file_op(&config_path, e))?;
        let config: PhonebookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| PhonebookError::file_op(config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content).map_err(|e| PhonebookError::file_op(&config_path, e))?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_DATA_FILE, KEY_SEED_ON_START]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DATA_FILE => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            KEY_SEED_ON_START => Some(self.seed_on_start.to_string()),
            _ => None,
        }
    }

    /// Set a key from its string form. An empty `data-file` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_DATA_FILE => {
                let value = value.trim();
                self.data_file = (!value.is_empty()).then(|| PathBuf::from(value));
                Ok(())
            }
            KEY_SEED_ON_START => {
                self.seed_on_start = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(PhonebookError::Config(format!(
                            "Invalid value for {}: {} (expected true or false)",
                            key, other
                        )))
                    }
                };
                Ok(())
            }
            _ => Err(PhonebookError::Config(format!(
                "Unknown config key: {}",
                key
            ))),
        }
    }
}
