//! Water simulation constants.
//!
//! All constants are fixed at construction time; nothing here is reloaded
//! at runtime. The config can round-trip through TOML for tooling and
//! test fixtures.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Errors from loading or validating a [`WaterConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("failed to read config file: {0}")]
  Io(#[from] std::io::Error),
  #[error("failed to parse config: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("{field} must not be negative (got {value})")]
  NegativeConstant { field: &'static str, value: f32 },
}

/// Constants describing the water volume and how strongly it acts on bodies.
///
/// `gravity_magnitude` is only used to scale buoyancy; the solver's own
/// gravity is configured separately through avian's `Gravity` resource.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
  /// World-space Y height of the free surface.
  pub water_level: f32,
  /// Gravitational acceleration used for the buoyancy force. Default: 9.82.
  pub gravity_magnitude: f32,
  /// Linear drag coefficient. Drag scales with submerged volume, so fully
  /// surfaced bodies feel none. Default: 0.5.
  pub drag_coefficient: f32,
  /// Rotational drag coefficient applied to angular velocity. Default: 0.2.
  pub rotational_drag_coefficient: f32,
  /// Whether buoyancy applied away from the center of mass contributes
  /// torque. Rotational drag is unaffected by this toggle. Default: true.
  pub torque_enabled: bool,
}

impl Default for WaterConfig {
  fn default() -> Self {
    Self {
      water_level: 0.0,
      gravity_magnitude: 9.82,
      drag_coefficient: 0.5,
      rotational_drag_coefficient: 0.2,
      torque_enabled: true,
    }
  }
}

impl WaterConfig {
  /// Parses a config from a TOML string and validates it.
  pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
  }

  /// Loads a config from a TOML file and validates it.
  pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config = Self::from_toml_str(&contents)?;
    info!("Loaded water config from {}", path.display());
    Ok(config)
  }

  /// Rejects physically meaningless constants.
  ///
  /// Negative coefficients would turn drag into thrust and buoyancy into
  /// suction; they are refused here rather than silently simulated.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let checks = [
      ("gravity_magnitude", self.gravity_magnitude),
      ("drag_coefficient", self.drag_coefficient),
      (
        "rotational_drag_coefficient",
        self.rotational_drag_coefficient,
      ),
    ];
    for (field, value) in checks {
      if value < 0.0 {
        return Err(ConfigError::NegativeConstant { field, value });
      }
    }
    Ok(())
  }
}
