//! Run settings. Every field defaults to the value the explorer has always
//! used; a `pokeapi-explorer.ron` file in the working directory may override them.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "pokeapi-explorer.ron";
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub output_path: PathBuf,
    /// Page size for the species listing; must cover the whole catalog in one page.
    pub catalog_page_size: u32,
    pub starter: String,
    /// Height threshold in decimetres (strictly greater than).
    pub min_water_height: u32,
    pub fire_region: String,
    pub attack_region: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            output_path: PathBuf::from("results.txt"),
            catalog_page_size: 10_000,
            starter: "squirtle".to_string(),
            min_water_height: 10,
            fire_region: "kanto".to_string(),
            attack_region: "johto".to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Parse a RON config file. Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`ExplorerConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
