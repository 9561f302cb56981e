use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::state::DEFAULT_BRUSH_SIZE;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "PAINT_EFFECTS_CONFIG";

/// Tunables for the application. Every field has a default, so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Lower bound of the brush size slider
    pub min_brush_size: f32,
    /// Upper bound of the brush size slider
    pub max_brush_size: f32,
    /// Slider position on first launch
    pub default_brush_size: f32,
    /// Stop adding shapes once the canvas holds this many. `None` is unbounded.
    pub max_shapes: Option<usize>,
    /// Fixed seed for reproducible sessions
    pub seed: Option<u64>,
    /// Rim vertices used to approximate each ellipse
    pub mesh_segments: usize,
    /// Canvas background as RGB
    pub canvas_color: [u8; 3],
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            min_brush_size: 5.0,
            max_brush_size: 100.0,
            default_brush_size: DEFAULT_BRUSH_SIZE,
            max_shapes: None,
            seed: None,
            mesh_segments: 32,
            canvas_color: [30, 30, 30],
        }
    }
}

impl PaintConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    ///
    /// A broken config is logged rather than fatal.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::error!("Ignoring config {}: {}", Path::new(&path).display(), err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.min_brush_size > 0.0 && self.min_brush_size.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "min_brush_size must be positive, got {}",
                self.min_brush_size
            )));
        }
        if !(self.max_brush_size > self.min_brush_size && self.max_brush_size.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "max_brush_size ({}) must exceed min_brush_size ({})",
                self.max_brush_size, self.min_brush_size
            )));
        }
        if !self.brush_size_range().contains(&self.default_brush_size) {
            return Err(ConfigError::Invalid(format!(
                "default_brush_size {} is outside {}..={}",
                self.default_brush_size, self.min_brush_size, self.max_brush_size
            )));
        }
        if self.max_shapes == Some(0) {
            return Err(ConfigError::Invalid("max_shapes must be at least 1".to_string()));
        }
        if self.mesh_segments < 3 {
            return Err(ConfigError::Invalid(format!(
                "mesh_segments must be at least 3, got {}",
                self.mesh_segments
            )));
        }
        Ok(())
    }

    pub fn brush_size_range(&self) -> RangeInclusive<f32> {
        self.min_brush_size..=self.max_brush_size
    }

    /// Pull a restored or user supplied size back into the slider range
    pub fn clamp_brush_size(&self, size: f32) -> f32 {
        if size.is_nan() {
            return self.default_brush_size;
        }
        size.clamp(self.min_brush_size, self.max_brush_size)
    }

    pub fn canvas_color(&self) -> Color32 {
        let [r, g, b] = self.canvas_color;
        Color32::from_rgb(r, g, b)
    }
}
