use crate::domain::{config::GhKeysConfig, error::{GhKeysError, GhKeysResult}};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration manager
pub struct ConfigManager {
    global_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> Self {
        Self {
            global_config_path: Self::get_global_config_path(),
        }
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the global file is used when
    /// present and the defaults otherwise.
    pub fn load_config(&self, explicit: Option<&Path>) -> GhKeysResult<GhKeysConfig> {
        if let Some(path) = explicit {
            return self.load_config_from_path(&expand_home(path));
        }

        match &self.global_config_path {
            Some(path) if path.exists() => self.load_config_from_path(path),
            _ => {
                debug!("no configuration file found, using defaults");
                Ok(GhKeysConfig::default())
            }
        }
    }

    /// Get global configuration path
    fn get_global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("ghkeys").join("config.toml"))
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> GhKeysResult<GhKeysConfig> {
        let content = fs::read_to_string(path).map_err(|e| GhKeysError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        debug!(path = %path.display(), "loaded configuration file");
        toml::from_str(&content).map_err(|e| GhKeysError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Get the global config path
    pub fn global_config_path(&self) -> Option<&PathBuf> {
        self.global_config_path.as_ref()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Default append target, `~/.ssh/authorized_keys`
pub fn default_authorized_keys() -> GhKeysResult<PathBuf> {
    let home = dirs::home_dir().ok_or(GhKeysError::HomeDirUnavailable)?;
    Ok(home.join(".ssh").join("authorized_keys"))
}

/// Expand a leading `~` to the home directory.
///
/// Paths are returned unchanged when they don't start with `~` or the home
/// directory is unknown.
pub fn expand_home(path: &Path) -> PathBuf {
    let rest = match path.strip_prefix("~") {
        Ok(rest) => rest,
        Err(_) => return path.to_path_buf(),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
