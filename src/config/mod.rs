use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    #[serde(default = "default_planned_marker")]
    pub planned_marker: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_data_file() -> String {
    Config::data_file().to_string_lossy().to_string()
}
fn default_retention_days() -> u32 {
    5
}
fn default_planned_marker() -> String {
    "預計".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            retention_days: default_retention_days(),
            planned_marker: default_planned_marker(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Per-user directory holding the config file and the data document
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dailylog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dailylog.conf")
    }

    /// Return the default path of the JSON data document
    pub fn data_file() -> PathBuf {
        Self::config_dir().join("data.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Resolved location of the data document (`~` expanded)
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the configuration file (unless in test mode) and return the
    /// configuration that was produced.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let data_file = match custom_data {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::data_file(),
        };

        let config = Config {
            data_file: data_file.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
