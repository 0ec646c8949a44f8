//! Protokit Settings Crate
//!
//! Handles geometry tolerances and default shape styling, and their
//! persistence as JSON or TOML files.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, GeometrySettings, StyleSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
