//! Buoyancy and drag force application for floating bodies.
//!
//! Bodies registered with [`FloatingBody`](crate::FloatingBody) receive an
//! upward buoyancy force proportional to their submerged volume, plus linear
//! and rotational drag, every tick. The solver consumes the accumulated
//! forces at the start of each substep, before integration, so no
//! partially-forced tick is ever observable.
//!
//! # Usage
//!
//! ```ignore
//! use bevy_buoyancy3d::{Buoyancy3dPlugin, WaterAwarenessPlugin};
//!
//! app.add_plugins(WaterAwarenessPlugin::default());
//! app.add_plugins(Buoyancy3dPlugin);
//! ```

mod force;

use bevy::prelude::*;
pub use force::{apply_buoyancy_forces, buoyancy_force, linear_drag, rotational_drag};

use crate::config::WaterConfig;
use crate::submersion::sample_submersion;

/// Plugin for buoyancy and drag physics.
///
/// Reads the [`WaterConfig`] resource and each body's
/// [`SubmersionState`](crate::SubmersionState); add
/// [`WaterAwarenessPlugin`](crate::WaterAwarenessPlugin) alongside it to keep
/// the states fresh.
#[derive(Default)]
pub struct Buoyancy3dPlugin;

impl Plugin for Buoyancy3dPlugin {
  fn build(&self, app: &mut App) {
    app.init_resource::<WaterConfig>();
    app.add_systems(Update, apply_buoyancy_forces.after(sample_submersion));
  }
}
