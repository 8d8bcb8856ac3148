//! Convenience [`PluginGroup`] that adds all underwater physics plugins.

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

use crate::buoyancy::Buoyancy3dPlugin;
use crate::submersion::WaterAwarenessPlugin;

/// Plugin group that adds submersion awareness and buoyancy forces together.
///
/// The avian `PhysicsPlugins` are deliberately not included: the solver
/// belongs to the application, which may already configure it.
///
/// # Usage
///
/// ```ignore
/// app.add_plugins(UnderwaterPhysicsPlugins {
///     awareness: WaterAwarenessPlugin::new(WaterConfig {
///         water_level: 5.0,
///         ..default()
///     }),
///     ..default()
/// });
/// ```
#[derive(Default)]
pub struct UnderwaterPhysicsPlugins {
  /// Submersion sampling and threshold messages.
  pub awareness: WaterAwarenessPlugin,
  /// Buoyancy and drag force application.
  pub buoyancy: Buoyancy3dPlugin,
}

impl PluginGroup for UnderwaterPhysicsPlugins {
  fn build(self) -> PluginGroupBuilder {
    PluginGroupBuilder::start::<Self>()
      .add(self.awareness)
      .add(self.buoyancy)
  }
}
