//! Submerged-volume estimation against the water plane.
//!
//! The estimate samples the 8 corners of a body's bounding box: the submerged
//! fraction is the count of corners below the surface, in eighths. This is a
//! coarse approximation rather than an exact plane-box clip; it trades
//! surface-level accuracy for a constant O(8) cost per body per tick, which
//! is what keeps dozens of bodies cheap in a real-time step.

use avian3d::prelude::{Position, Rotation};
use bevy::prelude::*;

use super::{SubmersionConfig, SubmersionState};
use crate::config::WaterConfig;
use crate::floating::FloatingBody;

/// Corner signs of a unit box, scaled by the half-extents per body.
const CORNER_SIGNS: [Vec3; 8] = [
  Vec3::new(-1.0, -1.0, -1.0),
  Vec3::new(1.0, -1.0, -1.0),
  Vec3::new(-1.0, 1.0, -1.0),
  Vec3::new(1.0, 1.0, -1.0),
  Vec3::new(-1.0, -1.0, 1.0),
  Vec3::new(1.0, -1.0, 1.0),
  Vec3::new(-1.0, 1.0, 1.0),
  Vec3::new(1.0, 1.0, 1.0),
];

/// Estimates the fraction of a box below the water plane, in eighths.
///
/// Each corner at `±half_extents` is rotated into world space and translated;
/// corners with world Y strictly below `water_level` count as wet. A corner
/// exactly on the surface is dry.
pub fn submerged_fraction(
  position: Vec3,
  rotation: Quat,
  half_extents: Vec3,
  water_level: f32,
) -> f32 {
  let submerged_corners = CORNER_SIGNS
    .iter()
    .filter(|sign| {
      let world_corner = rotation * (**sign * half_extents) + position;
      world_corner.y < water_level
    })
    .count();
  submerged_corners as f32 / 8.0
}

/// Full volume of the estimation box.
pub fn box_volume(half_extents: Vec3) -> f32 {
  8.0 * half_extents.x * half_extents.y * half_extents.z
}

/// Estimates the center of the submerged portion of a body.
///
/// Clamps the body center to at least a quarter of the box height below the
/// surface, keeping the same X/Z. The offset is a tuned approximation of the
/// submerged centroid, not a derived constant; do not "correct" it without
/// re-tuning the float behavior.
pub fn buoyancy_center(position: Vec3, half_extents: Vec3, water_level: f32) -> Vec3 {
  Vec3::new(
    position.x,
    position.y.min(water_level - half_extents.y / 2.0),
    position.z,
  )
}

/// Samples submersion for every registered floating body.
///
/// Reads the solver-authoritative pose (`Position`/`Rotation`) and refreshes
/// each body's [`SubmersionState`], inserting the state component on first
/// sample. Threshold edge detection is left to
/// [`emit_submersion_messages`](super::emit_submersion_messages).
pub fn sample_submersion(
  mut commands: Commands,
  water: Res<WaterConfig>,
  config: Res<SubmersionConfig>,
  mut bodies: Query<(
    Entity,
    &FloatingBody,
    &Position,
    &Rotation,
    Option<&mut SubmersionState>,
  )>,
) {
  for (entity, body, position, rotation, state) in bodies.iter_mut() {
    let fraction = submerged_fraction(
      position.0,
      rotation.0,
      body.half_extents,
      water.water_level,
    );
    let volume = fraction * box_volume(body.half_extents);
    let center = buoyancy_center(position.0, body.half_extents, water.water_level);
    let is_submerged = fraction >= config.submersion_threshold;

    if let Some(mut state) = state {
      state.submerged_fraction = fraction;
      state.submerged_volume = volume;
      state.submerged_center = center;
      state.is_submerged = is_submerged;
    } else {
      commands.entity(entity).insert(SubmersionState {
        is_submerged,
        submerged_fraction: fraction,
        submerged_volume: volume,
        submerged_center: center,
        previous_submerged: false,
      });
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const PLATFORM: Vec3 = Vec3::new(1.5, 0.25, 1.5);

  #[test]
  fn platform_below_surface_is_fully_submerged() {
    // Corners sit at world Y of -0.75 and -0.25, all strictly below 0. The
    // full 3 x 0.5 x 3 box displaces 4.5 units of water.
    let fraction = submerged_fraction(Vec3::new(0.0, -0.5, 0.0), Quat::IDENTITY, PLATFORM, 0.0);
    assert_eq!(fraction, 1.0);
    assert_eq!(fraction * box_volume(PLATFORM), 4.5);
  }

  #[test]
  fn full_submersion_buoyancy_matches_archimedes() {
    let volume = submerged_fraction(Vec3::new(0.0, -0.5, 0.0), Quat::IDENTITY, PLATFORM, 0.0)
      * box_volume(PLATFORM);
    let force = 9.82 * volume;
    assert!((force - 44.19).abs() < 1e-3);
  }

  #[test]
  fn platform_above_surface_is_dry() {
    let fraction = submerged_fraction(Vec3::new(0.0, 10.0, 0.0), Quat::IDENTITY, PLATFORM, 0.0);
    assert_eq!(fraction, 0.0);
  }

  #[test]
  fn corners_exactly_on_the_surface_are_dry() {
    // Box resting with its bottom face exactly at the water line.
    let half = Vec3::splat(0.5);
    let fraction = submerged_fraction(Vec3::new(0.0, 0.5, 0.0), Quat::IDENTITY, half, 0.0);
    assert_eq!(fraction, 0.0);
  }

  #[test]
  fn half_submerged_box_counts_four_corners() {
    let half = Vec3::splat(0.5);
    let fraction = submerged_fraction(Vec3::ZERO, Quat::IDENTITY, half, 0.0);
    assert_eq!(fraction, 0.5);
  }

  #[test]
  fn fraction_is_monotonic_as_the_body_sinks() {
    let rotation = Quat::from_euler(EulerRot::XYZ, 0.4, 0.9, 0.2);
    let mut previous = 0.0;
    let mut y = 3.0;
    while y >= -3.0 {
      let fraction = submerged_fraction(Vec3::new(0.0, y, 0.0), rotation, PLATFORM, 0.0);
      assert!(
        fraction >= previous,
        "fraction decreased from {previous} to {fraction} at y = {y}"
      );
      previous = fraction;
      y -= 0.05;
    }
    assert_eq!(previous, 1.0);
  }

  #[test]
  fn tilted_box_submerges_corner_by_corner() {
    // 45 degrees about Z: corners spread vertically, so lowering the box
    // through the surface passes through intermediate fractions.
    let rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_4);
    let half = Vec3::splat(0.5);
    let fraction = submerged_fraction(Vec3::ZERO, rotation, half, 0.0);
    assert!(fraction > 0.0 && fraction < 1.0);
  }

  #[test]
  fn water_level_offset_shifts_the_plane() {
    // Fully below a raised surface at y = 5.
    let fraction = submerged_fraction(Vec3::new(0.0, 2.0, 0.0), Quat::IDENTITY, PLATFORM, 5.0);
    assert_eq!(fraction, 1.0);
  }

  #[test]
  fn buoyancy_center_clamps_below_the_surface() {
    let center = buoyancy_center(Vec3::new(2.0, 1.0, -3.0), PLATFORM, 0.0);
    assert_eq!(center, Vec3::new(2.0, -PLATFORM.y / 2.0, -3.0));

    // A deep body keeps its own center.
    let deep = buoyancy_center(Vec3::new(2.0, -8.0, -3.0), PLATFORM, 0.0);
    assert_eq!(deep, Vec3::new(2.0, -8.0, -3.0));
  }
}
