//! Configuration loading and typed config structures for the planner.
//!
//! The canonical configuration lives in `verdant.yaml` next to the
//! binary. This module defines strongly-typed structs that mirror the
//! YAML structure and provides a loader that reads and validates the
//! file. Every field has a default matching the stock planner, so an
//! absent or partial file is fine.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use verdant_types::{Category, Hsl, MarkerStyle, PlotShape};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level planner configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlannerConfig {
    /// Canvas and plot shape settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Marker styles per tier for the layout sketch.
    #[serde(default = "default_styles")]
    pub styles: BTreeMap<Category, MarkerStyle>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            styles: default_styles(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Canvas and plot shape settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CanvasConfig {
    /// Side length of the square sketch canvas, in canvas units.
    #[serde(default = "default_canvas_size")]
    pub size: f64,

    /// Plot shape used when a plan request does not name one.
    #[serde(default)]
    pub shape: PlotShape,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size: default_canvas_size(),
            shape: PlotShape::Square,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_canvas_size() -> f64 {
    500.0
}

fn default_log_level() -> String {
    String::from("info")
}

/// Stock marker styles: larger, darker markers for taller tiers.
fn default_styles() -> BTreeMap<Category, MarkerStyle> {
    let mut styles = BTreeMap::new();
    styles.insert(
        Category::Canopy,
        MarkerStyle {
            radius: 14.0,
            fill: Hsl::new(140.0, 45, 28),
        },
    );
    styles.insert(
        Category::Tree,
        MarkerStyle {
            radius: 11.0,
            fill: Hsl::new(130.0, 50, 38),
        },
    );
    styles.insert(
        Category::Subtree,
        MarkerStyle {
            radius: 8.0,
            fill: Hsl::new(110.0, 55, 45),
        },
    );
    styles.insert(
        Category::Shrub,
        MarkerStyle {
            radius: 6.0,
            fill: Hsl::new(90.0, 60, 52),
        },
    );
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_four_tiers() {
        let config = PlannerConfig::default();
        assert!((config.canvas.size - 500.0).abs() < f64::EPSILON);
        assert_eq!(config.canvas.shape, PlotShape::Square);
        for category in Category::ALL {
            assert!(config.styles.contains_key(&category), "{category:?} unstyled");
        }
    }

    #[test]
    fn empty_yaml_parses_to_defaults() {
        let config = PlannerConfig::parse("{}");
        assert_eq!(config.ok(), Some(PlannerConfig::default()));
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let yaml = "canvas:\n  size: 640\n";
        let config = PlannerConfig::parse(yaml).ok();
        let config = config.unwrap_or_default();
        assert!((config.canvas.size - 640.0).abs() < f64::EPSILON);
        assert_eq!(config.canvas.shape, PlotShape::Square);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn shape_override_parses() {
        let yaml = "canvas:\n  shape: Circle\n";
        let config = PlannerConfig::parse(yaml).ok();
        assert_eq!(config.map(|c| c.canvas.shape), Some(PlotShape::Circle));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let result = PlannerConfig::parse(": not yaml :");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = PlannerConfig::from_file(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
