//! Movement domain: contact probe capability and its per-frame result.

use bevy::prelude::*;

use crate::movement::{Facing, MovementConfig, ProbeOffsets};

/// World queries the controller needs. Implementations report hits against
/// ground-classified surfaces only.
pub trait ContactProbe {
    fn is_grounded(&self, point: Vec2, radius: f32) -> bool;
    fn is_touching_wall(&self, chest: Vec2, direction: Dir2, distance: f32) -> bool;
    fn is_touching_ledge(&self, head: Vec2, direction: Dir2, distance: f32) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeResult {
    pub is_grounded: bool,
    pub is_touching_wall: bool,
    pub is_touching_ledge: bool,
}

impl ProbeResult {
    pub fn sample(
        probe: &impl ContactProbe,
        offsets: &ProbeOffsets,
        position: Vec2,
        facing: Facing,
        config: &MovementConfig,
    ) -> Self {
        let points = offsets.world_points(position, facing);
        Self {
            is_grounded: probe.is_grounded(points.ground, config.check_radius),
            is_touching_wall: probe.is_touching_wall(
                points.chest,
                points.direction,
                config.wall_check_distance,
            ),
            is_touching_ledge: probe.is_touching_ledge(
                points.head,
                points.direction,
                config.wall_check_distance,
            ),
        }
    }

    /// A wall at chest height with open space above the head.
    pub fn ledge_available(&self) -> bool {
        self.is_touching_wall && !self.is_touching_ledge
    }
}
