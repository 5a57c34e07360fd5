use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Characters grid cells are drawn from.
    #[serde(default = "default_alphabet")]
    pub alphabet: String,

    /// Largest grid the CLI will accept. This is presentation policy; the
    /// library itself only requires dimensions of at least 1.
    #[serde(default = "default_max_dimension")]
    pub max_rows: usize,

    #[serde(default = "default_max_dimension")]
    pub max_columns: usize,
}

fn default_alphabet() -> String {
    ('A'..='Z').collect()
}

fn default_max_dimension() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: default_alphabet(),
            max_rows: default_max_dimension(),
            max_columns: default_max_dimension(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(alphabet: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".gridseek.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(alphabet) = alphabet {
            config.alphabet = alphabet;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.alphabet != default_alphabet() {
            self.alphabet = other.alphabet;
        }
        if other.max_rows != default_max_dimension() {
            self.max_rows = other.max_rows;
        }
        if other.max_columns != default_max_dimension() {
            self.max_columns = other.max_columns;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gridseek").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
