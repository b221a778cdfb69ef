//! Core domain: camera follow tests.

use bevy::prelude::*;

use super::systems::approach;

#[test]
fn test_approach_moves_toward_target() {
    let next = approach(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0 / 60.0);
    assert!(next.x > 0.0 && next.x < 10.0);
    assert_eq!(next.y, 0.0);
}

#[test]
fn test_approach_without_time_stays_put() {
    let current = Vec2::new(3.0, 4.0);
    assert_eq!(approach(current, Vec2::new(-5.0, 9.0), 0.0), current);
}

#[test]
fn test_approach_converges_over_many_frames() {
    let target = Vec2::new(-4.0, 2.5);
    let mut current = Vec2::ZERO;
    for _ in 0..600 {
        current = approach(current, target, 1.0 / 60.0);
    }
    assert!(current.distance(target) < 1e-3);
}
