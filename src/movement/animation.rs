//! Movement domain: one-way bridge from controller state to presentation.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::movement::MovementState;

pub const PARAM_SPEED: &str = "Speed";
pub const PARAM_GROUNDED: &str = "isGrounded";
pub const PARAM_VERTICAL_VELOCITY: &str = "verticalVelocity";
pub const PARAM_GLIDING: &str = "isGliding";
pub const PARAM_HANGING: &str = "isHanging";

/// Receives named animation parameters. Nothing flows back.
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
}

/// Read-only view of the controller for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSnapshot {
    pub speed: f32,
    pub grounded: bool,
    pub vertical_velocity: f32,
    pub gliding: bool,
    pub hanging: bool,
}

impl AnimationSnapshot {
    pub fn capture(state: &MovementState, velocity: Vec2) -> Self {
        Self {
            speed: velocity.x.abs(),
            grounded: state.probes.is_grounded,
            vertical_velocity: velocity.y,
            gliding: state.flags.is_gliding,
            hanging: state.flags.is_hanging,
        }
    }

    pub fn forward(&self, sink: &mut impl AnimationSink) {
        sink.set_float(PARAM_SPEED, self.speed);
        sink.set_bool(PARAM_GROUNDED, self.grounded);
        sink.set_float(PARAM_VERTICAL_VELOCITY, self.vertical_velocity);
        sink.set_bool(PARAM_GLIDING, self.gliding);
        sink.set_bool(PARAM_HANGING, self.hanging);
    }
}

/// Parameter store attached to a character entity, standing in for an
/// animator. Characters without one simply get no animation updates.
#[derive(Component, Debug, Default, Clone)]
pub struct AnimationParameters {
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
}

impl AnimationParameters {
    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    pub fn flag(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }
}

impl AnimationSink for AnimationParameters {
    fn set_float(&mut self, name: &str, value: f32) {
        match self.floats.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.floats.insert(name.to_string(), value);
            }
        }
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        match self.bools.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.bools.insert(name.to_string(), value);
            }
        }
    }
}
