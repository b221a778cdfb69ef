//! Movement domain: presentation systems fed by the animation bridge.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AnimationParameters, AnimationSnapshot, Facing, MovementState, PARAM_GLIDING, PARAM_GROUNDED,
    PARAM_HANGING, Player,
};

pub(crate) fn forward_animation(
    mut query: Query<(&MovementState, &LinearVelocity, Option<&mut AnimationParameters>), With<Player>>,
) {
    for (state, velocity, params) in &mut query {
        // No parameter store, nothing to animate.
        let Some(mut params) = params else {
            continue;
        };
        AnimationSnapshot::capture(state, velocity.0).forward(&mut *params);
    }
}

pub(crate) fn sync_facing(mut query: Query<(&MovementState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        let flip = state.flags.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

/// Placeholder for real animation playback: tint the player by pose.
pub(crate) fn tint_from_animation(
    mut query: Query<(&AnimationParameters, &mut Sprite), (With<Player>, Changed<AnimationParameters>)>,
) {
    for (params, mut sprite) in &mut query {
        sprite.color = if params.flag(PARAM_HANGING) {
            Color::srgb(0.95, 0.8, 0.4)
        } else if params.flag(PARAM_GLIDING) {
            Color::srgb(0.6, 0.8, 0.95)
        } else if !params.flag(PARAM_GROUNDED) {
            Color::srgb(0.85, 0.85, 0.95)
        } else {
            Color::srgb(0.9, 0.9, 0.9)
        };
    }
}
