//! Movement domain: fixed-rate force integration.

use bevy::prelude::*;

use crate::movement::body::CharacterBody;
use crate::movement::{CharacterFlags, MovementConfig, MovementState};

/// Exponent of the horizontal force ramp. Below 1 the response is stronger
/// for small speed errors and softer near saturation.
pub const ACCEL_EXPONENT: f32 = 0.9;

/// Input magnitudes below this count as "no input".
const INPUT_DEADZONE: f32 = 0.01;

/// What a fixed step did to the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegrationStep {
    /// Hanging: the body was left untouched.
    Suspended,
    Applied {
        horizontal_force: f32,
        friction_impulse: f32,
        gravity_scale: f32,
        /// This step cleared `is_jumping`
        landed: bool,
    },
}

/// Continuous horizontal force pushing `vx` toward `move_axis * max_speed`.
pub fn horizontal_force(move_axis: f32, vx: f32, config: &MovementConfig) -> f32 {
    let target_speed = move_axis * config.max_speed;
    let speed_diff = target_speed - vx;
    let rate = if target_speed.abs() > INPUT_DEADZONE {
        config.acceleration
    } else {
        config.deceleration
    };

    (speed_diff.abs() * rate).powf(ACCEL_EXPONENT) * speed_diff.signum()
}

/// Impulse opposing `vx`, capped so it can stop but never reverse the body.
pub fn friction_impulse(vx: f32, friction_amount: f32) -> f32 {
    let amount = vx.abs().min(friction_amount.abs());
    -amount * vx.signum()
}

pub fn select_gravity_scale(flags: &CharacterFlags, vy: f32, config: &MovementConfig) -> f32 {
    if flags.is_gliding {
        config.glide_gravity_scale
    } else if vy < 0.0 {
        config.fall_multiplier
    } else {
        config.base_gravity_scale
    }
}

/// Run one fixed simulation step against the flags of the last decision pass.
pub fn integrate(
    state: &mut MovementState,
    body: &mut impl CharacterBody,
    config: &MovementConfig,
) -> IntegrationStep {
    if state.flags.is_hanging {
        return IntegrationStep::Suspended;
    }

    let grounded = state.probes.is_grounded;

    let force = horizontal_force(state.move_axis, body.velocity().x, config);
    body.apply_force(Vec2::X * force);

    let mut friction = 0.0;
    if grounded && state.move_axis.abs() < INPUT_DEADZONE {
        friction = friction_impulse(body.velocity().x, config.friction_amount);
        body.apply_impulse(Vec2::X * friction);
    }

    let vy = body.velocity().y;
    let gravity_scale = select_gravity_scale(&state.flags, vy, config);
    body.set_gravity_scale(gravity_scale);

    let landed = grounded && vy <= 0.0 && state.flags.is_jumping;
    if grounded && vy <= 0.0 {
        state.flags.is_jumping = false;
    }

    IntegrationStep::Applied {
        horizontal_force: force,
        friction_impulse: friction,
        gravity_scale,
        landed,
    }
}
