//! Toy tuning and preferences
//!
//! Loaded from an optional JSON file on native builds; every field falls back
//! to the defaults in [`crate::consts`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Per-sprite physics and growth tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteTuning {
    /// Diameter at spawn
    pub initial_size: f32,
    /// Growth cap
    pub max_size: f32,
    /// Fraction of the size gap closed per frame
    pub growth_smoothing: f32,
    /// Snap to target once the gap drops below this
    pub snap_threshold: f32,
    /// Launch speed bound per axis (pixels/frame)
    pub max_speed: f32,
    /// Spin while moving (degrees/frame)
    pub spin_deg_per_frame: f32,
}

impl Default for SpriteTuning {
    fn default() -> Self {
        Self {
            initial_size: INITIAL_SIZE,
            max_size: MAX_SIZE,
            growth_smoothing: GROWTH_SMOOTHING,
            snap_threshold: SNAP_THRESHOLD,
            max_speed: MAX_SPEED,
            spin_deg_per_frame: SPIN_DEG_PER_FRAME,
        }
    }
}

/// Engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sprite: SpriteTuning,

    // === Growth ticker ===
    /// Target size increase per firing
    pub growth_step: f32,
    /// Milliseconds between firings while holding
    pub growth_interval_ms: u64,

    // === Population ===
    /// Keep at most this many sprites, evicting the oldest (None = unbounded)
    pub max_sprites: Option<usize>,

    /// RNG seed for launch velocities (None = derive from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sprite: SpriteTuning::default(),
            growth_step: GROWTH_STEP,
            growth_interval_ms: GROWTH_INTERVAL_MS,
            max_sprites: None,
            seed: None,
        }
    }
}

impl Settings {
    /// Growth ticker cadence
    pub fn growth_interval(&self) -> Duration {
        Duration::from_millis(self.growth_interval_ms)
    }

    /// Check that the tuning describes a usable toy
    pub fn validate(&self) -> Result<(), SettingsError> {
        let s = &self.sprite;
        if s.initial_size <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "initial_size must be positive, got {}",
                s.initial_size
            )));
        }
        if s.max_size < s.initial_size {
            return Err(SettingsError::Invalid(format!(
                "max_size ({}) is below initial_size ({})",
                s.max_size, s.initial_size
            )));
        }
        if !(s.growth_smoothing > 0.0 && s.growth_smoothing <= 1.0) {
            return Err(SettingsError::Invalid(format!(
                "growth_smoothing must be in (0, 1], got {}",
                s.growth_smoothing
            )));
        }
        if s.snap_threshold <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "snap_threshold must be positive, got {}",
                s.snap_threshold
            )));
        }
        if !(s.max_speed >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "max_speed must not be negative, got {}",
                s.max_speed
            )));
        }
        // Rotation only ever accumulates forward
        if !(s.spin_deg_per_frame >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "spin_deg_per_frame must not be negative, got {}",
                s.spin_deg_per_frame
            )));
        }
        if !(self.growth_step > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "growth_step must be positive, got {}",
                self.growth_step
            )));
        }
        if self.growth_interval_ms == 0 {
            return Err(SettingsError::Invalid(
                "growth_interval_ms must be non-zero".to_string(),
            ));
        }
        if self.max_sprites == Some(0) {
            return Err(SettingsError::Invalid(
                "max_sprites must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }
}
