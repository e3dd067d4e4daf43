use crate::error::{Result, ShelfError};
use crate::view::{ViewMode, DEFAULT_IMAGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATALOG: &str = "papers.json";

/// Keys accepted by [`ShelfConfig::get`] and [`ShelfConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["catalog", "view", "default-image"];

/// Configuration, stored in `.papershelf/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Catalog resource to load
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,

    /// View used when none is requested
    #[serde(default)]
    pub view: ViewMode,

    /// Image shown for papers without a usable image
    #[serde(default = "default_image")]
    pub default_image: String,
}

fn default_catalog() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG)
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            view: ViewMode::default(),
            default_image: default_image(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShelfConfig = serde_json::from_str(&content)
            .map_err(|e| ShelfError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    /// The first directory in `dirs` holding a config file wins; defaults otherwise.
    pub fn discover(dirs: &[PathBuf]) -> Result<Self> {
        match dirs.iter().find(|dir| dir.join(CONFIG_FILENAME).exists()) {
            Some(dir) => Self::load(dir),
            None => Ok(Self::default()),
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "catalog" => Ok(self.catalog.display().to_string()),
            "view" => Ok(self.view.to_string()),
            "default-image" => Ok(self.default_image.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog" => self.catalog = PathBuf::from(value),
            "view" => {
                self.view = value
                    .parse()
                    .map_err(|e: ShelfError| ShelfError::Config(e.to_string()))?
            }
            "default-image" => self.default_image = value.to_string(),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ShelfError {
    ShelfError::Config(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
