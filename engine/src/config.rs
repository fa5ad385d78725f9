use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// YAML-backed config file. A missing file resolves to the default config;
/// unreadable or invalid content is an error.
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_or_default<T>(&self) -> Result<T, String>
    where
        T: DeserializeOwned + Validate + Default,
    {
        if !self.path.exists() {
            return Ok(T::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read config file {}: {}", self.path.display(), e))?;
        let config: T = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", self.path.display(), e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn save<T>(&self, config: &T) -> Result<(), String>
    where
        T: Serialize + Validate,
    {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write config file {}: {}", self.path.display(), e))
    }
}
