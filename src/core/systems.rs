//! Core domain: camera systems.

use bevy::prelude::*;

use crate::movement::Player;

/// World units are metres; this sets how large a metre is on screen.
pub const PIXELS_PER_METER: f32 = 48.0;

/// Fraction of the remaining distance the camera closes per second.
const FOLLOW_RATE: f32 = 6.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_METER,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Exponential approach toward `target`, independent of frame rate.
pub(crate) fn approach(current: Vec2, target: Vec2, dt: f32) -> Vec2 {
    let t = 1.0 - (-FOLLOW_RATE * dt).exp();
    current.lerp(target, t)
}

pub(crate) fn follow_player(
    time: Res<Time>,
    player: Query<&Transform, With<Player>>,
    mut camera: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let (Ok(player), Ok(mut camera)) = (player.single(), camera.single_mut()) else {
        return;
    };

    let next = approach(
        camera.translation.truncate(),
        player.translation.truncate(),
        time.delta_secs(),
    );
    camera.translation.x = next.x;
    camera.translation.y = next.y;
}
