//! Settings manager
//!
//! Owns the active [`Config`] together with the file it was loaded from, and
//! resolves the platform configuration directory.

use protokit_shapes::{ShapeOptions, ShapeStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "protokit";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct SettingsManager {
    config: Config,
    path: PathBuf,
}

impl SettingsManager {
    /// `<config_dir>/protokit/config.toml` for the current platform
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load settings from `path`, which must exist and be valid.
    pub fn load(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let config = Config::load_from_file(&path)?;
        info!(path = %path.display(), "loaded settings");
        Ok(Self { config, path })
    }

    /// Load settings from `path`, falling back to defaults when the file does
    /// not exist yet. Invalid files are still an error.
    pub fn load_or_default(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        if path.exists() {
            return Self::load(path);
        }

        debug!(path = %path.display(), "no settings file, using defaults");
        Ok(Self {
            config: Config::default(),
            path,
        })
    }

    /// Write the settings back to their file, creating the directory if needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        self.config.save_to_file(&self.path)?;
        info!(path = %self.path.display(), "saved settings");
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn shape_options(&self) -> ShapeOptions {
        self.config.shape_options()
    }

    pub fn shape_style(&self) -> ShapeStyle {
        self.config.shape_style()
    }
}
