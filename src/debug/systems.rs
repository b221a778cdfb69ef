//! Debug domain: gizmo drawing for the contact probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::movement::{
    AnimationParameters, MovementConfig, MovementState, PARAM_SPEED, PARAM_VERTICAL_VELOCITY,
    Player, ProbeOffsets,
};

const HIT_COLOR: Color = Color::srgb(0.9, 0.2, 0.2);
const MISS_COLOR: Color = Color::srgb(0.3, 0.4, 0.95);
const ARROW_SCALE: f32 = 0.1;

fn hit_color(hit: bool) -> Color {
    if hit { HIT_COLOR } else { MISS_COLOR }
}

/// Toggle the overlay with F1 or backtick key
pub(crate) fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.toggle();
        info!("Probe overlay: {}", debug_state.show_probes);
    }
}

pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    config: Res<MovementConfig>,
    query: Query<(&Transform, &ProbeOffsets, &MovementState), With<Player>>,
) {
    for (transform, offsets, state) in &query {
        let points = offsets.world_points(transform.translation.truncate(), state.flags.facing);
        let reach = points.direction * config.wall_check_distance;

        gizmos.circle_2d(
            Isometry2d::from_translation(points.ground),
            config.check_radius,
            hit_color(state.probes.is_grounded),
        );
        gizmos.line_2d(
            points.chest,
            points.chest + reach,
            hit_color(state.probes.is_touching_wall),
        );
        gizmos.line_2d(
            points.head,
            points.head + reach,
            hit_color(state.probes.is_touching_ledge),
        );
    }
}

/// Arrow for a body moving at `velocity`, sized from the animation
/// parameters so it shows what presentation receives. `Speed` is unsigned,
/// so the horizontal direction comes from the body itself.
pub(crate) fn velocity_arrow(velocity: Vec2, params: &AnimationParameters) -> Option<Vec2> {
    let speed = params.float(PARAM_SPEED)?;
    let vy = params.float(PARAM_VERTICAL_VELOCITY)?;
    Some(Vec2::new(speed.copysign(velocity.x), vy) * ARROW_SCALE)
}

pub(crate) fn draw_velocity_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &LinearVelocity, &AnimationParameters), With<Player>>,
) {
    for (transform, velocity, params) in &query {
        let Some(arrow) = velocity_arrow(velocity.0, params) else {
            continue;
        };

        let start = transform.translation.truncate();
        gizmos.arrow_2d(start, start + arrow, Color::srgb(0.3, 0.9, 0.4));
    }
}
