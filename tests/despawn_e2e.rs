//! E2E tests for registration and idempotent removal.
//!
//! Teardown contract: removing a body twice, or through a stale handle, is a
//! safe no-op with no solver corruption.
//!
//! Run with: cargo test --test despawn_e2e

use std::time::Duration;

use avian3d::prelude::{Gravity, PhysicsPlugins};
use bevy::app::{TaskPoolOptions, TaskPoolPlugin};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_buoyancy3d::{
  ChainSpec, DespawnFloatingBody, FloatingBody, FloatingBodySpec, SpawnError,
  UnderwaterPhysicsPlugins, spawn_chain, spawn_floating_body,
};

struct TestHarness {
  app: App,
}

impl TestHarness {
  fn new() -> Self {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins.set(TaskPoolPlugin {
      task_pool_options: TaskPoolOptions::with_num_threads(4),
    }));
    app.add_plugins(bevy::transform::TransformPlugin);

    // Asset and scene handling are required by avian's collider machinery.
    app.add_plugins(bevy::asset::AssetPlugin::default());
    app.init_asset::<Mesh>();
    app.add_plugins(bevy::scene::ScenePlugin);

    app.add_plugins(bevy::diagnostic::DiagnosticsPlugin);
    app.add_plugins(PhysicsPlugins::default());
    app.insert_resource(Gravity(Vec3::new(0.0, -9.82 * 0.2, 0.0)));
    app.init_resource::<avian3d::collision::CollisionDiagnostics>();
    app.init_resource::<avian3d::dynamics::solver::SolverDiagnostics>();
    app.init_resource::<avian3d::spatial_query::SpatialQueryDiagnostics>();

    app.add_plugins(UnderwaterPhysicsPlugins::default());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
      1.0 / 60.0,
    )));

    app.update();
    Self { app }
  }

  fn run(&mut self, updates: usize) {
    for _ in 0..updates {
      self.app.update();
    }
  }

  fn floating_body_count(&mut self) -> usize {
    self
      .app
      .world_mut()
      .query::<&FloatingBody>()
      .iter(self.app.world())
      .count()
  }
}

#[test]
fn despawning_twice_matches_despawning_once() {
  let mut harness = TestHarness::new();
  let platform = {
    let mut commands = harness.app.world_mut().commands();
    spawn_floating_body(
      &mut commands,
      FloatingBodySpec::new(Vec3::new(0.0, -1.0, 0.0), Vec3::splat(0.5), 5.0),
    )
    .unwrap()
  };
  harness.run(10);
  assert_eq!(harness.floating_body_count(), 1);

  // Two removals in the same frame, then a stale one several frames later.
  harness
    .app
    .world_mut()
    .commands()
    .queue(DespawnFloatingBody(platform));
  harness
    .app
    .world_mut()
    .commands()
    .queue(DespawnFloatingBody(platform));
  harness.run(5);
  harness
    .app
    .world_mut()
    .commands()
    .queue(DespawnFloatingBody(platform));
  harness.run(5);

  assert_eq!(harness.floating_body_count(), 0);
}

#[test]
fn chain_teardown_survives_repeats_mid_simulation() {
  let mut harness = TestHarness::new();
  let chain = {
    let mut commands = harness.app.world_mut().commands();
    spawn_chain(
      &mut commands,
      &ChainSpec::new(Vec3::new(0.0, -0.5, 0.0), 5, Vec3::new(0.15, 0.3, 0.15), 0.5),
    )
    .unwrap()
  };
  harness.run(30);
  assert_eq!(harness.floating_body_count(), 5);

  for _ in 0..2 {
    {
      let mut commands = harness.app.world_mut().commands();
      chain.despawn(&mut commands);
    }
    harness.run(10);
  }

  assert_eq!(harness.floating_body_count(), 0);
  // The solver keeps stepping happily after removal.
  harness.run(30);
}

#[test]
fn invalid_specs_never_touch_the_world() {
  let mut harness = TestHarness::new();

  let result = {
    let mut commands = harness.app.world_mut().commands();
    spawn_floating_body(
      &mut commands,
      FloatingBodySpec::new(Vec3::ZERO, Vec3::new(1.0, -0.5, 1.0), 5.0),
    )
  };
  assert!(matches!(result, Err(SpawnError::NonPositiveExtents { .. })));

  harness.run(2);
  assert_eq!(harness.floating_body_count(), 0);
}
