//! Configuration for Protokit
//!
//! Configuration is organized into two sections:
//! - Geometry settings (numeric tolerances of the shape engine)
//! - Style settings (default paint attributes of new shapes)
//!
//! Files are JSON or TOML, chosen by extension. Optional paints and dash
//! lengths are written as `"none"` when unset, since TOML has no null.

use protokit_core::Color;
use protokit_shapes::{FillRule, LineCap, LineJoin, ShapeOptions, ShapeStyle};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Numeric tolerances of the shape engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    /// Largest per-dimension difference accepted when a frame is assigned
    pub frame_size_tolerance: f64,
    /// Curve flattening tolerance for point enclosure tests
    pub hit_test_tolerance: f64,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        let options = ShapeOptions::default();
        Self {
            frame_size_tolerance: options.frame_size_tolerance,
            hit_test_tolerance: options.hit_test_tolerance,
        }
    }
}

/// Default paint attributes for new shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    #[serde(
        serialize_with = "serialize_optional",
        deserialize_with = "deserialize_optional"
    )]
    pub fill_color: Option<Color>,
    #[serde(
        serialize_with = "serialize_optional",
        deserialize_with = "deserialize_optional"
    )]
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
    #[serde(
        serialize_with = "serialize_optional",
        deserialize_with = "deserialize_optional"
    )]
    pub dash_length: Option<f64>,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub fill_rule: FillRule,
}

impl Default for StyleSettings {
    fn default() -> Self {
        ShapeStyle::default().into()
    }
}

impl From<ShapeStyle> for StyleSettings {
    fn from(style: ShapeStyle) -> Self {
        Self {
            fill_color: style.fill_color,
            stroke_color: style.stroke_color,
            stroke_width: style.stroke_width,
            dash_length: style.dash_length,
            line_cap: style.line_cap,
            line_join: style.line_join,
            fill_rule: style.fill_rule,
        }
    }
}

impl From<&StyleSettings> for ShapeStyle {
    fn from(settings: &StyleSettings) -> Self {
        ShapeStyle {
            fill_color: settings.fill_color,
            stroke_color: settings.stroke_color,
            stroke_width: settings.stroke_width,
            dash_length: settings.dash_length,
            line_cap: settings.line_cap,
            line_join: settings.line_join,
            fill_rule: settings.fill_rule,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub geometry: GeometrySettings,
    pub style: StyleSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(unsupported_format(path));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(unsupported_format(path));
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.geometry.frame_size_tolerance > 0.0) {
            return Err(invalid("geometry.frame_size_tolerance", "must be > 0"));
        }

        if !(self.geometry.hit_test_tolerance > 0.0) {
            return Err(invalid("geometry.hit_test_tolerance", "must be > 0"));
        }

        if !(self.style.stroke_width >= 0.0) {
            return Err(invalid("style.stroke_width", "must be >= 0"));
        }

        if let Some(dash) = self.style.dash_length {
            if !(dash > 0.0) {
                return Err(invalid("style.dash_length", "must be > 0"));
            }
        }

        Ok(())
    }

    /// Tolerances to hand to new shapes
    pub fn shape_options(&self) -> ShapeOptions {
        ShapeOptions {
            frame_size_tolerance: self.geometry.frame_size_tolerance,
            hit_test_tolerance: self.geometry.hit_test_tolerance,
        }
    }

    /// Style to hand to new shapes
    pub fn shape_style(&self) -> ShapeStyle {
        ShapeStyle::from(&self.style)
    }
}

const NONE_KEYWORD: &str = "none";

fn serialize_optional<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_str(NONE_KEYWORD),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OptionalValue<T> {
    Keyword(String),
    Value(T),
}

fn deserialize_optional<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    match OptionalValue::<T>::deserialize(deserializer)? {
        OptionalValue::Value(value) => Ok(Some(value)),
        OptionalValue::Keyword(keyword) if keyword == NONE_KEYWORD => Ok(None),
        OptionalValue::Keyword(keyword) => Err(serde::de::Error::custom(format!(
            "expected a value or \"{NONE_KEYWORD}\", got \"{keyword}\""
        ))),
    }
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn unsupported_format(path: &Path) -> SettingsError {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();
    ConfigError::UnsupportedFormat(ext).into()
}
