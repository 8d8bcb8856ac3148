//! Threshold-crossing message emission.
//!
//! Emits [`Submerged`] and [`Surfaced`] when bodies cross the submersion
//! threshold. Listeners hang off these messages instead of polling state.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::{Submerged, SubmersionState, Surfaced};

/// Emits submersion messages when bodies cross the threshold.
///
/// Each body's water-line crossing is the transition of its `is_submerged`
/// flag between ticks; the previous-tick flag is latched here after emission,
/// so each crossing produces exactly one message. Runs after
/// [`sample_submersion`](super::sample_submersion) in the same tick.
pub fn emit_submersion_messages(
  mut submerged_writer: MessageWriter<Submerged>,
  mut surfaced_writer: MessageWriter<Surfaced>,
  mut query: Query<(Entity, &mut SubmersionState)>,
) {
  for (entity, mut state) in query.iter_mut() {
    match (state.previous_submerged, state.is_submerged) {
      // Went under the water line this tick.
      (false, true) => {
        submerged_writer.write(Submerged {
          entity,
          submerged_fraction: state.submerged_fraction,
        });
      }
      // Broke the surface this tick.
      (true, false) => {
        surfaced_writer.write(Surfaced { entity });
      }
      _ => {}
    }
    state.previous_submerged = state.is_submerged;
  }
}
