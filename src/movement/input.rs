//! Movement domain: discrete per-frame input.

use bevy::prelude::*;

/// Input for one rendered frame. Edges (`jump_pressed`, `jump_released`)
/// are true only on the frame the button changed.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// -1, 0 or 1
    pub move_axis: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub jump_released: bool,
}

impl InputSnapshot {
    /// Right wins when both directions are held.
    pub fn from_buttons(
        left: bool,
        right: bool,
        jump_pressed: bool,
        jump_held: bool,
        jump_released: bool,
    ) -> Self {
        let move_axis = if right {
            1.0
        } else if left {
            -1.0
        } else {
            0.0
        };

        Self {
            move_axis,
            jump_pressed,
            jump_held,
            jump_released,
        }
    }
}

/// Anything that can produce an `InputSnapshot` for the current frame.
pub trait InputSampler {
    fn sample(&self) -> InputSnapshot;
}

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];

impl InputSampler for ButtonInput<KeyCode> {
    fn sample(&self) -> InputSnapshot {
        InputSnapshot::from_buttons(
            self.any_pressed(LEFT_KEYS),
            self.any_pressed(RIGHT_KEYS),
            self.any_just_pressed(JUMP_KEYS),
            self.any_pressed(JUMP_KEYS),
            self.any_just_released(JUMP_KEYS),
        )
    }
}
