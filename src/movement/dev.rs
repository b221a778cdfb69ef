//! Movement domain: hard-coded test room for exercising the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};
use crate::parallax::ParallaxLayer;

fn spawn_block(commands: &mut Commands, color: Color, center: Vec2, size: Vec2) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor and outer walls
    spawn_block(&mut commands, ground_color, Vec2::new(0.0, -4.5), Vec2::new(32.0, 1.0));
    spawn_block(&mut commands, wall_color, Vec2::new(-16.5, 2.0), Vec2::new(1.0, 14.0));
    spawn_block(&mut commands, wall_color, Vec2::new(16.5, 2.0), Vec2::new(1.0, 14.0));

    // Platforms for coyote time and buffered jumps
    spawn_block(&mut commands, platform_color, Vec2::new(-8.0, -1.0), Vec2::new(4.0, 0.5));
    spawn_block(&mut commands, platform_color, Vec2::new(-1.0, 1.5), Vec2::new(3.0, 0.5));

    // Ledge block: its top sits between chest and head height when the
    // player falls alongside it, so it can be grabbed.
    spawn_block(&mut commands, wall_color, Vec2::new(6.0, -1.0), Vec2::new(2.0, 6.0));

    // Tall tower for glide practice
    spawn_block(&mut commands, wall_color, Vec2::new(12.0, 1.0), Vec2::new(2.0, 10.0));

    // Backdrop layers, furthest first
    for (depth, (factor, color, height)) in [
        (0.6, Color::srgb(0.12, 0.12, 0.2), 9.0),
        (0.3, Color::srgb(0.18, 0.18, 0.28), 6.0),
        (0.1, Color::srgb(0.22, 0.24, 0.32), 4.0),
    ]
    .into_iter()
    .enumerate()
    {
        commands.spawn((
            ParallaxLayer::new(factor),
            Sprite {
                color,
                custom_size: Some(Vec2::new(60.0, height)),
                ..default()
            },
            Transform::from_xyz(0.0, -4.0 + height * 0.5, -10.0 + depth as f32),
        ));
    }
}
