//! Chain assembly from linked floating bodies.
//!
//! A chain is a stack of box links connected by point-to-point constraints,
//! hanging from a fixed anchor link. Constraint solving is entirely the
//! solver's job; this module only builds the bodies and joints. Every link is
//! a registered floating body, so chains sway under buoyancy and drag like a
//! rope in water.

use avian3d::prelude::SphericalJoint;
use bevy::prelude::*;

use crate::floating::{BodyKind, DespawnFloatingBody, FloatingBodySpec, SpawnError, spawn_floating_body};

/// Validated description of a chain to spawn.
#[derive(Clone, Copy, Debug)]
pub struct ChainSpec {
  /// World position of the anchor link's center.
  pub start: Vec3,
  /// Number of links, anchor included. Must be at least 1.
  pub num_links: usize,
  /// Half-extents of each link's box.
  pub link_half_extents: Vec3,
  /// Mass of each dynamic link. The anchor is always massless.
  pub link_mass: f32,
}

impl ChainSpec {
  /// Creates a chain spec.
  pub fn new(start: Vec3, num_links: usize, link_half_extents: Vec3, link_mass: f32) -> Self {
    Self {
      start,
      num_links,
      link_half_extents,
      link_mass,
    }
  }

  /// Rejects chains the assembly step cannot build.
  pub fn validate(&self) -> Result<(), SpawnError> {
    if self.num_links < 1 {
      return Err(SpawnError::ChainTooShort {
        num_links: self.num_links,
      });
    }
    if self.link_half_extents.min_element() <= 0.0 {
      return Err(SpawnError::NonPositiveExtents {
        extents: self.link_half_extents,
      });
    }
    if self.link_mass <= 0.0 {
      return Err(SpawnError::NonPositiveLinkMass {
        mass: self.link_mass,
      });
    }
    Ok(())
  }
}

/// Handle to a spawned chain.
///
/// Links are ordered top to bottom starting at the anchor; joints are created
/// once at build time and never re-ordered. `joints.len()` is always
/// `links.len() - 1`.
#[derive(Clone, Debug)]
pub struct Chain {
  /// Link body entities, anchor first.
  pub links: Vec<Entity>,
  /// Joint entities connecting consecutive links.
  pub joints: Vec<Entity>,
}

impl Chain {
  /// The fixed first link.
  pub fn anchor(&self) -> Entity {
    self.links[0]
  }

  /// Tears the chain down, joints first so no constraint ever references a
  /// missing body. Idempotent like any floating-body removal.
  pub fn despawn(&self, commands: &mut Commands) {
    for &joint in &self.joints {
      commands.queue(DespawnFloatingBody(joint));
    }
    for &link in &self.links {
      commands.queue(DespawnFloatingBody(link));
    }
  }
}

/// Builds a chain of floating bodies hanging down from `spec.start`.
///
/// Links are stacked along -Y at a spacing of one full link height, so every
/// joint starts exactly satisfied: consecutive links are pinned together at
/// the shared face center, `(0, -half_extents.y, 0)` on the upper link and
/// `(0, +half_extents.y, 0)` on the lower one. The first link is static and
/// anchors the chain; the rest are dynamic with `spec.link_mass`.
pub fn spawn_chain(commands: &mut Commands, spec: &ChainSpec) -> Result<Chain, SpawnError> {
  spec.validate()?;

  let link_height = spec.link_half_extents.y * 2.0;
  let mut links = Vec::with_capacity(spec.num_links);
  let mut joints = Vec::with_capacity(spec.num_links.saturating_sub(1));

  for i in 0..spec.num_links {
    let position = spec.start - Vec3::Y * (i as f32 * link_height);
    let (mass, kind) = if i == 0 {
      (0.0, BodyKind::ChainAnchor)
    } else {
      (spec.link_mass, BodyKind::ChainLink)
    };
    let link = spawn_floating_body(
      commands,
      FloatingBodySpec::new(position, spec.link_half_extents, mass).with_kind(kind),
    )?;

    if let Some(&upper) = links.last() {
      let joint = commands
        .spawn(
          SphericalJoint::new(upper, link)
            .with_local_anchor1(Vec3::new(0.0, -spec.link_half_extents.y, 0.0))
            .with_local_anchor2(Vec3::new(0.0, spec.link_half_extents.y, 0.0)),
        )
        .id();
      joints.push(joint);
    }
    links.push(link);
  }

  info!(
    "Spawned chain at {:?}: {} links, {} joints",
    spec.start,
    links.len(),
    joints.len()
  );
  Ok(Chain { links, joints })
}
