//! Theme configuration for arcadekit
//!
//! Looked up in order: an explicit path, `$ARCADEKIT_CONFIG_DIR/config.toml`,
//! then `~/.config/arcadekit/config.toml`. A missing discovered file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArcadeError, Result};

pub use types::{MediaSize, ThemeConfig};

const CONFIG_DIR: &str = "arcadekit";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ARCADEKIT_CONFIG_DIR";

impl ThemeConfig {
    /// URL of the fallback thumbnail inside the theme directory
    pub fn default_thumbnail_url(&self) -> String {
        format!(
            "{}/{}",
            self.template_dir.trim_end_matches('/'),
            self.default_thumbnail.trim_start_matches('/')
        )
    }

    /// Default location of the config file, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(dir.join(CONFIG_FILE))
    }

    /// Resolve the configuration for this run.
    ///
    /// An explicit path must exist; the discovered default path may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => {
                tracing::debug!("no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ArcadeError::io_operation("read config", path.display(), e))?;
        let config: ThemeConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArcadeError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
