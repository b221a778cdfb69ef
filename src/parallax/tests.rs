//! Parallax domain: unit tests for layer offsets.

use bevy::prelude::*;

use super::ParallaxLayer;

#[test]
fn test_offset_scales_camera_motion() {
    let layer = ParallaxLayer {
        factor: 0.5,
        lock_vertical: false,
    };
    let offset = layer.offset(Vec3::new(1.0, 2.0, 0.0), Vec3::new(5.0, 4.0, 0.0));
    assert_eq!(offset, Vec3::new(2.0, 1.0, 0.0));
}

#[test]
fn test_offset_drops_vertical_when_locked() {
    let layer = ParallaxLayer::new(0.25);
    assert!(layer.lock_vertical);

    let offset = layer.offset(Vec3::ZERO, Vec3::new(4.0, 8.0, 0.0));
    assert_eq!(offset, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_factor_is_clamped_to_unit_range() {
    assert_eq!(ParallaxLayer::new(3.0).factor, 1.0);
    assert_eq!(ParallaxLayer::new(-1.0).factor, 0.0);
}

#[test]
fn test_static_camera_leaves_layer_in_place() {
    let layer = ParallaxLayer::default();
    let camera = Vec3::new(3.0, -2.0, 10.0);
    assert_eq!(layer.offset(camera, camera), Vec3::ZERO);
}

#[test]
fn test_missing_camera_disables_layer() {
    let mut app = App::new();
    app.add_systems(Update, super::anchor_parallax_layers);
    let layer = app.world_mut().spawn(ParallaxLayer::default()).id();

    app.update();

    assert!(app.world().get::<super::ParallaxDisabled>(layer).is_some());
    assert!(app.world().get::<super::ParallaxAnchor>(layer).is_none());
}

#[test]
fn test_layers_see_camera_after_follow() {
    fn follow(mut camera: Query<&mut Transform, With<Camera2d>>) {
        for mut transform in &mut camera {
            transform.translation.x += 10.0;
        }
    }

    let mut app = App::new();
    app.add_plugins(super::ParallaxPlugin)
        .add_systems(Update, follow.in_set(crate::core::CameraFollowSet));
    app.world_mut().spawn((Camera2d, Transform::default()));
    let layer = app
        .world_mut()
        .spawn((ParallaxLayer::new(0.5), Transform::default()))
        .id();

    app.update();

    let anchor = app.world().get::<super::ParallaxAnchor>(layer).unwrap();
    assert_eq!(anchor.previous_camera.x, 10.0);
    let transform = app.world().get::<Transform>(layer).unwrap();
    assert_eq!(transform.translation, Vec3::ZERO);
}
