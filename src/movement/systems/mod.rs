//! Movement domain: system modules for locomotion updates.

pub(crate) mod animation;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use animation::{forward_animation, sync_facing, tint_from_animation};
pub(crate) use input::read_input;
pub(crate) use movement::{decide_movement, integrate_movement};
