//! Core domain: camera setup and follow.

mod systems;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera};
use crate::movement::MovementDecisionSet;

/// Ordering label for the camera follow step.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CameraFollowSet;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            Update,
            follow_player
                .in_set(CameraFollowSet)
                .after(MovementDecisionSet),
        );
    }
}
