//! # Configuration
//!
//! Stored as `config.json` in the configuration directory, which is
//! `$FACULTY_HOME` when set and the OS config directory otherwise (see
//! [`crate::init`]). A missing file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | `teachers.txt` | Roster file; relative paths resolve against the working directory |
//! | `load-policy` | `strict` | `strict` fails on a malformed line, `lenient` skips it |

use crate::error::{FacultyError, Result};
use crate::store::LoadPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "teachers.txt";

pub const KEYS: &[&str] = &["data-file", "load-policy"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacultyConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default)]
    pub load_policy: LoadPolicy,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for FacultyConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            load_policy: LoadPolicy::default(),
        }
    }
}

impl FacultyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FacultyError::Io)?;
        let config: FacultyConfig =
            serde_json::from_str(&content).map_err(FacultyError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FacultyError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FacultyError::Serialization)?;
        fs::write(config_path, content).map_err(FacultyError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "load-policy" => Some(self.load_policy.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.to_string();
                Ok(())
            }
            "load-policy" => {
                self.load_policy = value.parse()?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}
