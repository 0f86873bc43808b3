//! Capture settings, loadable from a JSON file.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to change.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::normalize::CanvasSize;
use crate::processing::{DEFAULT_MIN_DISTANCE, DEFAULT_TOLERANCE};
use crate::stroke::{StrokeStyle, Tool};

/// Strokes with more points than this after smoothing get simplified
pub const DEFAULT_SIMPLIFY_MIN_POINTS: usize = 50;

/// Pressure assumed for devices that report none
pub const DEFAULT_PRESSURE: f64 = 0.5;

/// Settings consumed by the cleanup pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    pub min_distance: f64,
    pub simplify_tolerance: f64,
    pub simplify_min_points: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            simplify_tolerance: DEFAULT_TOLERANCE,
            simplify_min_points: DEFAULT_SIMPLIFY_MIN_POINTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old files
pub struct CaptureConfig {
    pub processing: ProcessingConfig,
    pub canvas_size: CanvasSize,
    pub default_tool: Tool,
    pub default_style: StrokeStyle,
    pub default_pressure: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig::default(),
            canvas_size: CanvasSize::default(),
            default_tool: Tool::default(),
            default_style: StrokeStyle::default(),
            default_pressure: DEFAULT_PRESSURE,
        }
    }
}

impl CaptureConfig {
    /// Read and validate a config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`CaptureConfig::load`], but falls back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded capture config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!(
                    "Using default capture config, {} could not be loaded: {}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let p = &self.processing;
        check_non_negative("processing.min_distance", p.min_distance)?;
        check_non_negative("processing.simplify_tolerance", p.simplify_tolerance)?;

        if !self.canvas_size.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "canvas_size must be positive, got {}x{}",
                self.canvas_size.w, self.canvas_size.h
            )));
        }

        let style = &self.default_style;
        if !(style.width.is_finite() && style.width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "default_style.width must be positive, got {}",
                style.width
            )));
        }
        if !(0.0..=1.0).contains(&style.opacity) {
            return Err(ConfigError::Invalid(format!(
                "default_style.opacity must be within [0, 1], got {}",
                style.opacity
            )));
        }
        if !(0.0..=1.0).contains(&self.default_pressure) {
            return Err(ConfigError::Invalid(format!(
                "default_pressure must be within [0, 1], got {}",
                self.default_pressure
            )));
        }

        Ok(())
    }
}

fn check_non_negative(name: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be a non-negative number, got {value}"
        )))
    }
}
