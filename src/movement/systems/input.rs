//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{InputSampler, InputSnapshot};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<InputSnapshot>) {
    *input = keyboard.sample();
}
