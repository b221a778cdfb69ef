//! Debug domain: overlay state.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Draw the ground circle and wall/ledge rays
    pub show_probes: bool,
    /// Draw the velocity arrow reported to the animation bridge
    pub show_velocity: bool,
}

impl DebugState {
    pub fn toggle(&mut self) {
        let on = !self.show_probes;
        self.show_probes = on;
        self.show_velocity = on;
    }
}
