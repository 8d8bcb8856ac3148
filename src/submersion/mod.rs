//! Submersion tracking for floating bodies.
//!
//! Every registered [`FloatingBody`](crate::FloatingBody) has its submerged
//! fraction estimated once per tick against the water plane, and emits
//! messages when it crosses the submersion threshold.
//!
//! # Usage
//!
//! ```ignore
//! use bevy_buoyancy3d::submersion::WaterAwarenessPlugin;
//!
//! app.add_plugins(WaterAwarenessPlugin::default());
//! ```

mod events;
mod sample;

use bevy::prelude::*;
pub use events::emit_submersion_messages;
pub use sample::{box_volume, buoyancy_center, sample_submersion, submerged_fraction};

use crate::config::WaterConfig;

/// Configuration for submersion threshold detection.
#[derive(Resource, Clone, Debug)]
pub struct SubmersionConfig {
  /// Fraction of a body that must be underwater for it to count as
  /// "submerged". Default: 0.25 (25%).
  pub submersion_threshold: f32,
}

impl Default for SubmersionConfig {
  fn default() -> Self {
    Self {
      submersion_threshold: 0.25,
    }
  }
}

/// Per-body submersion estimate for the current tick.
///
/// Inserted automatically the first time a floating body is sampled and
/// refreshed every tick after that. The force system and game code both read
/// from here; nothing outside [`sample_submersion`] writes the estimates.
#[derive(Component, Default)]
pub struct SubmersionState {
  /// Whether the body is past the submersion threshold.
  pub is_submerged: bool,
  /// Fraction of the body's corners underwater (0.0 to 1.0, in eighths).
  pub submerged_fraction: f32,
  /// Submerged fraction scaled by the full box volume.
  pub submerged_volume: f32,
  /// Estimated center of the submerged portion, world space.
  pub submerged_center: Vec3,
  /// Previous tick's submerged flag, for edge detection.
  previous_submerged: bool,
}

impl SubmersionState {
  /// True on the first tick the body crossed into submerged.
  pub fn just_submerged(&self) -> bool {
    self.is_submerged && !self.previous_submerged
  }

  /// True on the first tick the body crossed out of submerged.
  pub fn just_surfaced(&self) -> bool {
    !self.is_submerged && self.previous_submerged
  }
}

/// Message sent when a body crosses the submersion threshold into water.
#[derive(bevy::prelude::Message)]
pub struct Submerged {
  /// The body that went under.
  pub entity: Entity,
  /// Submerged fraction at the crossing tick.
  pub submerged_fraction: f32,
}

/// Message sent when a body crosses the submersion threshold out of water.
#[derive(bevy::prelude::Message)]
pub struct Surfaced {
  /// The body that surfaced.
  pub entity: Entity,
}

/// Plugin for submersion sampling and threshold messages.
///
/// Owns the [`WaterConfig`] resource; the force side
/// ([`Buoyancy3dPlugin`](crate::Buoyancy3dPlugin)) reads the same resource
/// and must be added alongside this plugin.
#[derive(Default)]
pub struct WaterAwarenessPlugin {
  /// Water constants shared with the force systems.
  pub water: WaterConfig,
  /// Threshold detection configuration.
  pub config: SubmersionConfig,
}

impl WaterAwarenessPlugin {
  /// Creates a plugin with the given water constants.
  pub fn new(water: WaterConfig) -> Self {
    Self {
      water,
      config: SubmersionConfig::default(),
    }
  }
}

impl Plugin for WaterAwarenessPlugin {
  fn build(&self, app: &mut App) {
    app.insert_resource(self.water.clone());
    app.insert_resource(self.config.clone());
    app.add_message::<Submerged>();
    app.add_message::<Surfaced>();
    app.add_systems(
      Update,
      (sample_submersion, emit_submersion_messages).chain(),
    );
  }
}
