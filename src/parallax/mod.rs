//! Parallax domain: background layers that trail the camera.
//!
//! Independent of the movement controller; it only reads the camera
//! transform after the camera has followed the player for this frame.

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::CameraFollowSet;

/// A background layer that moves by a fraction of the camera's motion.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    /// 0 = pinned to the world, 1 = pinned to the camera
    pub factor: f32,
    /// Ignore vertical camera motion
    pub lock_vertical: bool,
}

impl Default for ParallaxLayer {
    fn default() -> Self {
        Self {
            factor: 0.1,
            lock_vertical: true,
        }
    }
}

impl ParallaxLayer {
    pub fn new(factor: f32) -> Self {
        Self {
            factor: factor.clamp(0.0, 1.0),
            ..default()
        }
    }

    /// How far the layer moves for a camera going from `previous` to `current`.
    pub fn offset(&self, previous: Vec3, current: Vec3) -> Vec3 {
        let mut delta = current - previous;
        if self.lock_vertical {
            delta.y = 0.0;
        }
        delta * self.factor
    }
}

/// Camera position seen by a layer on the previous frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct ParallaxAnchor {
    pub previous_camera: Vec3,
}

/// Set on layers that could not find a camera; they are never updated again.
#[derive(Component, Debug)]
pub struct ParallaxDisabled;

pub struct ParallaxPlugin;

impl Plugin for ParallaxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (anchor_parallax_layers, scroll_parallax_layers)
                .chain()
                .after(CameraFollowSet),
        );
    }
}

fn anchor_parallax_layers(
    mut commands: Commands,
    camera: Query<&Transform, With<Camera2d>>,
    layers: Query<Entity, (With<ParallaxLayer>, Without<ParallaxAnchor>, Without<ParallaxDisabled>)>,
) {
    for entity in &layers {
        match camera.single() {
            Ok(camera) => {
                commands.entity(entity).insert(ParallaxAnchor {
                    previous_camera: camera.translation,
                });
            }
            Err(e) => {
                error!("Parallax layer {:?} has no camera to follow ({}), disabling it", entity, e);
                commands.entity(entity).insert(ParallaxDisabled);
            }
        }
    }
}

fn scroll_parallax_layers(
    camera: Query<&Transform, (With<Camera2d>, Without<ParallaxLayer>)>,
    mut layers: Query<(&ParallaxLayer, &mut ParallaxAnchor, &mut Transform), Without<ParallaxDisabled>>,
) {
    let Ok(camera) = camera.single() else {
        return;
    };

    for (layer, mut anchor, mut transform) in &mut layers {
        transform.translation += layer.offset(anchor.previous_camera, camera.translation);
        anchor.previous_camera = camera.translation;
    }
}
