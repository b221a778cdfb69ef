//! Debug overlay for the movement controller (dev-tools builds only).
//!
//! Presentation only: nothing here feeds back into movement.

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{draw_probe_gizmos, draw_velocity_gizmos, toggle_debug_overlay};
use crate::movement::MovementDecisionSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_debug_overlay)
            .add_systems(
                Update,
                (
                    draw_probe_gizmos.run_if(|state: Res<DebugState>| state.show_probes),
                    draw_velocity_gizmos.run_if(|state: Res<DebugState>| state.show_velocity),
                )
                    .after(MovementDecisionSet),
            );
    }
}
