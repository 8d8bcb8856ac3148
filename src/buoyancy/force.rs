//! Buoyancy and drag force computation.
//!
//! All three contributions are per-component (no cross terms between axes)
//! and scale linearly with submerged volume, so a surfaced body feels
//! nothing and a fully submerged body feels the maximum.

use avian3d::dynamics::rigid_body::forces::{ConstantForce, ConstantTorque};
use avian3d::prelude::{AngularVelocity, LinearVelocity, Position};
use bevy::prelude::*;

use crate::config::WaterConfig;
use crate::floating::FloatingBody;
use crate::submersion::SubmersionState;

/// Buoyancy force along world +Y, proportional to submerged volume.
///
/// Archimedes' principle with the displaced fluid's weight folded into the
/// single `gravity_magnitude` constant.
#[inline]
pub fn buoyancy_force(gravity_magnitude: f32, submerged_volume: f32) -> Vec3 {
  Vec3::new(0.0, gravity_magnitude * submerged_volume, 0.0)
}

/// Velocity-proportional damping force, scaled by submerged volume.
///
/// Always opposes the velocity component-wise; exactly zero at rest.
#[inline]
pub fn linear_drag(velocity: Vec3, drag_coefficient: f32, submerged_volume: f32) -> Vec3 {
  -velocity * drag_coefficient * submerged_volume
}

/// Angular-velocity-proportional damping torque, scaled by submerged volume.
#[inline]
pub fn rotational_drag(
  angular_velocity: Vec3,
  rotational_drag_coefficient: f32,
  submerged_volume: f32,
) -> Vec3 {
  -angular_velocity * rotational_drag_coefficient * submerged_volume
}

/// Computes and applies buoyancy and drag to every submerged body.
///
/// Buoyancy acts at the estimated submerged center, drag at the center of
/// mass. The torque induced by the off-center buoyancy is computed explicitly
/// as `lever × F` and summed with rotational drag into a single torque write,
/// so the contributions compose additively within one tick. Bodies that were
/// registered by inserting [`FloatingBody`] directly get their force
/// accumulators inserted here on first contact with the water.
///
/// Note on the buoyancy torque: whether an off-center buoyancy force should
/// spin the body is genuinely ambiguous under this approximation, since the
/// center estimate is not a true centroid. Rather than leave it to the
/// solver's force-at-point behavior, the torque is always the explicit cross
/// product here; the center heuristic only shifts along Y, so the term is
/// currently zero for every body, and `torque_enabled` can turn it off
/// outright. Rotational drag is the only torque source that acts in practice.
pub fn apply_buoyancy_forces(
  mut commands: Commands,
  water: Res<WaterConfig>,
  mut bodies: Query<
    (
      Entity,
      &SubmersionState,
      &Position,
      &LinearVelocity,
      &AngularVelocity,
      Option<&mut ConstantForce>,
      Option<&mut ConstantTorque>,
    ),
    With<FloatingBody>,
  >,
) {
  for (entity, state, position, velocity, angular_velocity, force, torque) in bodies.iter_mut() {
    if state.submerged_fraction <= 0.0 {
      // A body without accumulators has nothing stale to clear.
      if let Some(mut force) = force {
        *force = ConstantForce::new(0.0, 0.0, 0.0);
      }
      if let Some(mut torque) = torque {
        *torque = ConstantTorque(Vec3::ZERO);
      }
      continue;
    }

    let buoyancy = buoyancy_force(water.gravity_magnitude, state.submerged_volume);
    let drag = linear_drag(velocity.0, water.drag_coefficient, state.submerged_volume);
    let total = buoyancy + drag;

    let mut total_torque = rotational_drag(
      angular_velocity.0,
      water.rotational_drag_coefficient,
      state.submerged_volume,
    );
    if water.torque_enabled {
      let lever = state.submerged_center - position.0;
      total_torque += lever.cross(buoyancy);
    }

    // Bodies registered by inserting `FloatingBody` by hand get their
    // accumulators on first submersion.
    match force {
      Some(mut force) => *force = ConstantForce::new(total.x, total.y, total.z),
      None => {
        commands
          .entity(entity)
          .insert(ConstantForce::new(total.x, total.y, total.z));
      }
    }
    match torque {
      Some(mut torque) => *torque = ConstantTorque(total_torque),
      None => {
        commands.entity(entity).insert(ConstantTorque(total_torque));
      }
    }
  }
}
