//! Game settings and gameplay tuning
//!
//! The host reads these as JSON from the canvas `data-settings` attribute;
//! every field is optional and falls back to the stock values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gameplay constants the simulation reads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Pixels per arrow-key press
    pub move_step: f32,
    /// Multiplier applied to touch drag deltas
    pub drag_sensitivity: f32,
    /// Milliseconds between spawns
    pub spawn_interval_ms: f64,
    /// Fall speed at score 0 (pixels per baseline frame)
    pub base_fall_speed: f32,
    /// Extra fall speed per point scored
    pub speed_per_point: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_step: 20.0,
            drag_sensitivity: 1.5,
            spawn_interval_ms: 2000.0,
            base_fall_speed: 2.0,
            speed_per_point: 0.1,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,

    // === Accessibility ===
    /// Reduced motion (no death flash, no background rotation)
    pub reduced_motion: bool,
}

/// Settings failed to load
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// JSON could not be parsed
    Parse(String),
    /// A field is out of range
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(msg) => write!(f, "settings parse error: {}", msg),
            SettingsError::Invalid { field, reason } => {
                write!(f, "invalid setting `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e.to_string())
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let t = &self.tuning;
        if !(t.move_step.is_finite() && t.move_step > 0.0) {
            return Err(SettingsError::Invalid {
                field: "move_step",
                reason: "must be a positive number",
            });
        }
        if !(t.drag_sensitivity.is_finite() && t.drag_sensitivity > 0.0) {
            return Err(SettingsError::Invalid {
                field: "drag_sensitivity",
                reason: "must be a positive number",
            });
        }
        if !(t.spawn_interval_ms.is_finite() && t.spawn_interval_ms > 0.0) {
            return Err(SettingsError::Invalid {
                field: "spawn_interval_ms",
                reason: "must be a positive number",
            });
        }
        if !(t.base_fall_speed.is_finite() && t.base_fall_speed >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "base_fall_speed",
                reason: "must not be negative",
            });
        }
        if !(t.speed_per_point.is_finite() && t.speed_per_point >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "speed_per_point",
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    /// Whether the host should play the death flash
    pub fn death_effect_enabled(&self) -> bool {
        !self.reduced_motion
    }

    /// Whether the host should rotate the page background
    pub fn background_shift_enabled(&self) -> bool {
        !self.reduced_motion
    }

    /// Load settings from the canvas `data-settings` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::HtmlCanvasElement) -> Self {
        let Some(json) = canvas.get_attribute("data-settings") else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from data-settings");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring data-settings ({}), using defaults", e);
                Self::default()
            }
        }
    }
}
