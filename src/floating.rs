//! Registration and removal of floating bodies.
//!
//! A floating body pairs an avian rigid body with the box extents used for
//! submerged-volume estimation. The collision shape is created from the same
//! extents here for convenience, but the estimator never reads the collider;
//! callers are free to swap the collider for a different shape.

use avian3d::dynamics::rigid_body::forces::{ConstantForce, ConstantTorque};
use avian3d::prelude::{Collider, Mass, Position, RigidBody};
use bevy::prelude::*;

/// Errors from validating a body or chain description before it touches the
/// solver.
///
/// Simulating garbage is never an option: zero or negative extents would make
/// the volume estimate silently meaningless, so they are rejected at
/// construction time.
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
  #[error("half extents must be strictly positive (got {extents:?})")]
  NonPositiveExtents { extents: Vec3 },
  #[error("mass must not be negative (got {mass})")]
  NegativeMass { mass: f32 },
  #[error("a chain needs at least one link (got {num_links})")]
  ChainTooShort { num_links: usize },
  #[error("chain links must have strictly positive mass (got {mass})")]
  NonPositiveLinkMass { mass: f32 },
}

/// What a body is, decided once at spawn.
///
/// Collision reactions and game rules dispatch on this tag instead of
/// inspecting ad-hoc flags on the body.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyKind {
  /// A free-floating platform or debris box.
  #[default]
  Platform,
  /// The fixed first link of a chain. Never moves.
  ChainAnchor,
  /// A dynamic chain link.
  ChainLink,
}

/// Marks a rigid body as subject to buoyancy and drag, and carries the box
/// half-extents used for submerged-volume estimation.
///
/// Every registered body is sampled and receives forces each tick until it is
/// despawned. The extents are half-dimensions in body space, matching the
/// corners at `±half_extents`.
#[derive(Component, Clone, Copy, Debug)]
pub struct FloatingBody {
  /// Half-dimensions of the estimation box. All components strictly positive.
  pub half_extents: Vec3,
}

/// Validated description of a floating body to spawn.
#[derive(Clone, Copy, Debug)]
pub struct FloatingBodySpec {
  /// World-space spawn position.
  pub position: Vec3,
  /// Box half-extents, used for both the collider and volume estimation.
  pub half_extents: Vec3,
  /// Body mass. Zero makes the body a static anchor that never moves.
  pub mass: f32,
  /// Tag resolved at creation.
  pub kind: BodyKind,
}

impl FloatingBodySpec {
  /// Creates a spec for a free platform body.
  pub fn new(position: Vec3, half_extents: Vec3, mass: f32) -> Self {
    Self {
      position,
      half_extents,
      mass,
      kind: BodyKind::Platform,
    }
  }

  /// Sets the body kind tag.
  pub fn with_kind(mut self, kind: BodyKind) -> Self {
    self.kind = kind;
    self
  }

  /// Rejects extents and masses the estimator cannot handle.
  pub fn validate(&self) -> Result<(), SpawnError> {
    if self.half_extents.min_element() <= 0.0 {
      return Err(SpawnError::NonPositiveExtents {
        extents: self.half_extents,
      });
    }
    if self.mass < 0.0 {
      return Err(SpawnError::NegativeMass { mass: self.mass });
    }
    Ok(())
  }

  /// Zero mass maps to a static body: the solver no-ops forces on it, which
  /// keeps anchors pinned without special-casing them in the force system.
  fn rigid_body(&self) -> RigidBody {
    if self.mass == 0.0 {
      RigidBody::Static
    } else {
      RigidBody::Dynamic
    }
  }
}

/// Spawns a floating body into the solver and registers it for buoyancy.
///
/// The spec is validated first; nothing is spawned on failure. The returned
/// entity is the handle for later [`DespawnFloatingBody`] removal.
pub fn spawn_floating_body(
  commands: &mut Commands,
  spec: FloatingBodySpec,
) -> Result<Entity, SpawnError> {
  spec.validate()?;

  let size = spec.half_extents * 2.0;
  let mut entity = commands.spawn((
    FloatingBody {
      half_extents: spec.half_extents,
    },
    spec.kind,
    spec.rigid_body(),
    Collider::cuboid(size.x, size.y, size.z),
    Transform::from_translation(spec.position),
    Position(spec.position),
    ConstantForce::new(0.0, 0.0, 0.0),
    ConstantTorque(Vec3::ZERO),
  ));
  if spec.mass > 0.0 {
    entity.insert(Mass(spec.mass));
  }
  Ok(entity.id())
}

/// Command that removes a floating body from the simulation.
///
/// Removal is idempotent: despawning an entity that is already gone is a
/// logged no-op, so teardown can run from multiple call sites without
/// coordination.
pub struct DespawnFloatingBody(pub Entity);

impl bevy::ecs::system::Command for DespawnFloatingBody {
  fn apply(self, world: &mut bevy::ecs::world::World) {
    match world.get_entity_mut(self.0) {
      Ok(entity) => entity.despawn(),
      Err(_) => debug!("Floating body {:?} already removed", self.0),
    }
  }
}
