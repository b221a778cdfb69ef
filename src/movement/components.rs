//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::probes::ProbeResult;
use crate::movement::timers::TimerBank;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Surfaces the contact probes react to (floors, walls, ledges)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for level geometry the probes treat as solid ground
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 when facing right, -1 when facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn direction(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// True when a non-zero move axis points away from this facing.
    pub fn disagrees_with(self, move_axis: f32) -> bool {
        match self {
            Facing::Right => move_axis < 0.0,
            Facing::Left => move_axis > 0.0,
        }
    }
}

/// Orthogonal modifier flags. Several may be set at once; see
/// `controller::decide` for the order in which they are written.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CharacterFlags {
    pub is_jumping: bool,
    pub is_gliding: bool,
    pub is_hanging: bool,
    pub facing: Facing,
}

/// Long-lived controller state. Written by the decision pass, read by the
/// fixed-rate integration pass and the animation bridge.
#[derive(Component, Debug, Clone, Default)]
pub struct MovementState {
    pub flags: CharacterFlags,
    pub timers: TimerBank,
    /// Probe readings from the most recent decision pass
    pub probes: ProbeResult,
    /// Move axis from the most recent decision pass
    pub move_axis: f32,
}

/// Local offsets of the contact probe points, authored for a character
/// facing right. Horizontal components are mirrored when facing left.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ProbeOffsets {
    /// Centre of the ground overlap circle (at the feet)
    pub ground: Vec2,
    /// Origin of the wall ray (chest height)
    pub chest: Vec2,
    /// Origin of the ledge ray (just above the head)
    pub head: Vec2,
}

impl Default for ProbeOffsets {
    fn default() -> Self {
        Self {
            ground: Vec2::new(0.0, -0.8),
            chest: Vec2::new(0.3, 0.2),
            head: Vec2::new(0.3, 0.9),
        }
    }
}

/// Probe points resolved into world space for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbePoints {
    pub ground: Vec2,
    pub chest: Vec2,
    pub head: Vec2,
    pub direction: Dir2,
}

impl ProbeOffsets {
    pub fn world_points(&self, position: Vec2, facing: Facing) -> ProbePoints {
        let mirror = Vec2::new(facing.sign(), 1.0);
        ProbePoints {
            ground: position + self.ground * mirror,
            chest: position + self.chest * mirror,
            head: position + self.head * mirror,
            direction: facing.direction(),
        }
    }
}
