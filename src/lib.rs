//! Underwater rigid-body simulation plugin for Bevy.
//!
//! This crate makes box-shaped rigid bodies float, sink, and drag through a
//! water volume bounded by a horizontal free surface. It computes per-body
//! submerged volume, buoyancy, and linear/rotational drag once per tick and
//! feeds the results to the [avian3d](https://docs.rs/avian3d) solver as
//! accumulated forces; integration, collision, and joint solving stay
//! entirely with the solver.
//!
//! # Usage
//!
//! ```ignore
//! use bevy_buoyancy3d::UnderwaterPhysicsPlugins;
//!
//! app.add_plugins(avian3d::prelude::PhysicsPlugins::default());
//! app.add_plugins(UnderwaterPhysicsPlugins::default());
//! ```
//!
//! Bodies are registered with [`spawn_floating_body`] (or by inserting
//! [`FloatingBody`] on an existing avian body) and removed with the
//! idempotent [`DespawnFloatingBody`] command. [`spawn_chain`] builds a
//! hanging chain of linked floating bodies anchored at its first link.

pub mod buoyancy;
pub mod chain;
pub mod config;
pub mod floating;
pub mod plugin_bundle;
pub mod submersion;

pub use buoyancy::Buoyancy3dPlugin;
pub use chain::{Chain, ChainSpec, spawn_chain};
pub use config::{ConfigError, WaterConfig};
pub use floating::{
  BodyKind, DespawnFloatingBody, FloatingBody, FloatingBodySpec, SpawnError, spawn_floating_body,
};
pub use plugin_bundle::UnderwaterPhysicsPlugins;
pub use submersion::{
  Submerged, SubmersionConfig, SubmersionState, Surfaced, WaterAwarenessPlugin,
};
