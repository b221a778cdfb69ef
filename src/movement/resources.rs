//! Movement domain: tuning resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-character movement tuning. Units are metres and seconds; forces and
/// impulses assume a body of unit mass.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementConfig {
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Largest horizontal speed the ground friction impulse removes per step
    pub friction_amount: f32,
    pub jump_force: f32,
    /// Fraction of upward speed kept when the jump button is released early
    pub jump_cut_multiplier: f32,
    /// Gravity scale while falling
    pub fall_multiplier: f32,
    pub jump_buffer_time: f32,
    pub coyote_time: f32,
    pub glide_gravity_scale: f32,
    pub base_gravity_scale: f32,
    pub wall_check_distance: f32,
    /// Radius of the ground overlap circle
    pub check_radius: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed: 10.0,
            acceleration: 12.0,
            deceleration: 14.0,
            friction_amount: 0.5,
            jump_force: 16.0,
            jump_cut_multiplier: 0.5,
            fall_multiplier: 4.5,
            jump_buffer_time: 0.15,
            coyote_time: 0.1,
            glide_gravity_scale: 0.8,
            base_gravity_scale: 3.0,
            wall_check_distance: 0.4,
            check_radius: 0.25,
        }
    }
}
