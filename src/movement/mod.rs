//! Movement domain: platforming controller with coyote time, jump buffering,
//! variable jump height, gliding and ledge hanging.
//!
//! The controller itself is two plain functions, [`decide`] (once per
//! rendered frame) and [`integrate`] (once per fixed step). Everything that
//! touches the engine goes through small capability traits so both passes
//! can be driven headless.

mod animation;
mod body;
mod bootstrap;
mod components;
mod config;
mod controller;
mod dev;
mod input;
mod integrator;
mod probes;
mod resources;
mod systems;
mod timers;

pub use animation::{
    AnimationParameters, AnimationSnapshot, PARAM_GLIDING, PARAM_GROUNDED, PARAM_HANGING,
    PARAM_SPEED, PARAM_VERTICAL_VELOCITY,
};
pub use body::CharacterBody;
pub use bootstrap::{SetupError, check_probe_offsets};
pub use components::{
    CharacterFlags, Facing, GameLayer, Ground, MovementState, Player, ProbeOffsets,
};
pub use config::{load_movement_config, parse_movement_config};
pub use controller::{FrameActions, decide};
pub use input::{InputSampler, InputSnapshot};
pub use integrator::{IntegrationStep, friction_impulse, horizontal_force, integrate};
pub use probes::{ContactProbe, ProbeResult};
pub use resources::MovementConfig;
pub use timers::TimerBank;

use bevy::prelude::*;

use crate::movement::bootstrap::{load_config, spawn_player, validate_player_setup};
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    decide_movement, forward_animation, integrate_movement, read_input, sync_facing,
    tint_from_animation,
};

/// Ordering label for the decision pass, so other plugins can run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementDecisionSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementConfig>()
            .init_resource::<InputSnapshot>()
            .add_systems(Startup, (load_config, spawn_player, spawn_test_room).chain())
            .add_systems(PostStartup, validate_player_setup)
            .add_systems(
                Update,
                (
                    read_input,
                    decide_movement,
                    sync_facing,
                    forward_animation,
                    tint_from_animation,
                )
                    .chain()
                    .in_set(MovementDecisionSet),
            )
            .add_systems(FixedUpdate, integrate_movement);
    }
}
