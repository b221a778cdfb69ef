//! Movement domain: per-frame decision pass.
//!
//! `decide` runs once per rendered frame. It owns every write to
//! `CharacterFlags` and `TimerBank` except the landing check, which belongs
//! to the fixed-rate pass in `integrator`.

use bevy::prelude::*;

use crate::movement::body::CharacterBody;
use crate::movement::input::InputSnapshot;
use crate::movement::probes::ProbeResult;
use crate::movement::{MovementConfig, MovementState};

/// Vertical speed below which a wall/ledge contact turns into a hang.
pub const HANG_ENTRY_MAX_VY: f32 = 0.1;

/// One-shot actions fired during a decision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameActions {
    pub entered_hang: bool,
    pub exited_hang: bool,
    pub jumped: bool,
    pub jump_cut: bool,
    pub flipped: bool,
}

impl FrameActions {
    pub fn any(&self) -> bool {
        self.entered_hang || self.exited_hang || self.jumped || self.jump_cut || self.flipped
    }
}

/// Advance the controller by one rendered frame.
///
/// Steps run in a fixed priority order and later steps see the writes of
/// earlier ones:
/// 1. ground contact refills coyote time and drops any hang
/// 2. airborne frames drain coyote time
/// 3. hang entry
/// 4. jump buffer refill or drain
/// 5. glide flag
/// 6. jump trigger (ground/coyote, or from a hang)
/// 7. jump cut on early release
/// 8. facing flip
pub fn decide(
    state: &mut MovementState,
    body: &mut impl CharacterBody,
    input: &InputSnapshot,
    probes: ProbeResult,
    config: &MovementConfig,
    dt: f32,
) -> FrameActions {
    let mut actions = FrameActions::default();
    state.probes = probes;
    state.move_axis = input.move_axis;

    if probes.is_grounded {
        state.timers.on_grounded(config);
        // Flag write only; gravity comes back on the next integration step.
        state.flags.is_hanging = false;
    } else {
        state.timers.tick_coyote(dt);
    }

    if probes.ledge_available()
        && !probes.is_grounded
        && body.velocity().y < HANG_ENTRY_MAX_VY
        && !state.flags.is_hanging
    {
        enter_hang(state, body);
        actions.entered_hang = true;
    }

    if input.jump_pressed {
        state.timers.on_jump_pressed(config);
    } else {
        state.timers.tick_buffer(dt);
    }

    state.flags.is_gliding = !probes.is_grounded
        && !state.flags.is_hanging
        && body.velocity().y < 0.0
        && input.jump_held;

    if state.timers.buffer_active() {
        if state.timers.coyote_active() && !state.flags.is_jumping {
            // A hang can be entered while coyote time is still running.
            if state.flags.is_hanging {
                exit_hang(state, body, config);
                actions.exited_hang = true;
            }
            start_jump(state, body, config);
            actions.jumped = true;
        } else if state.flags.is_hanging {
            exit_hang(state, body, config);
            start_jump(state, body, config);
            actions.exited_hang = true;
            actions.jumped = true;
        }
    }

    let vy = body.velocity().y;
    if input.jump_released && vy > 0.0 && state.flags.is_jumping {
        body.apply_impulse(Vec2::NEG_Y * vy * (1.0 - config.jump_cut_multiplier));
        state.timers.clear_buffer();
        actions.jump_cut = true;
    }

    if state.flags.facing.disagrees_with(input.move_axis) {
        state.flags.facing = state.flags.facing.flipped();
        actions.flipped = true;
    }

    actions
}

fn enter_hang(state: &mut MovementState, body: &mut impl CharacterBody) {
    state.flags.is_hanging = true;
    state.flags.is_jumping = false;
    state.flags.is_gliding = false;
    body.set_velocity(Vec2::ZERO);
    body.set_gravity_scale(0.0);
}

fn exit_hang(state: &mut MovementState, body: &mut impl CharacterBody, config: &MovementConfig) {
    state.flags.is_hanging = false;
    body.set_gravity_scale(config.base_gravity_scale);
}

/// Upward impulse that yields the same take-off speed whatever the current
/// fall speed.
fn start_jump(state: &mut MovementState, body: &mut impl CharacterBody, config: &MovementConfig) {
    let vy = body.velocity().y;
    let mut force = config.jump_force;
    if vy < 0.0 {
        force -= vy;
    }

    body.apply_impulse(Vec2::Y * force);
    state.timers.consume_jump();
    state.flags.is_jumping = true;
}
