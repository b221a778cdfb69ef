//! Movement domain: tuning load, player spawn and setup checks.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::movement::config::load_movement_config;
use crate::movement::{
    AnimationParameters, GameLayer, MovementConfig, MovementState, Player, ProbeOffsets,
};

pub const MOVEMENT_CONFIG_PATH: &str = "assets/data/movement.ron";

/// Player collider size in metres.
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.6);

/// A character that cannot be driven by the controller as spawned.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    MissingProbeOffsets(Entity),
    /// The ledge probe must sit above the wall probe or no ledge is ever found.
    LedgeProbeBelowWallProbe { entity: Entity, chest_y: f32, head_y: f32 },
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::MissingProbeOffsets(entity) => {
                write!(f, "player {:?} has no ProbeOffsets, contact probes disabled", entity)
            }
            SetupError::LedgeProbeBelowWallProbe {
                entity,
                chest_y,
                head_y,
            } => write!(
                f,
                "player {:?} ledge probe (y={}) is not above wall probe (y={})",
                entity, head_y, chest_y
            ),
        }
    }
}

pub fn check_probe_offsets(entity: Entity, offsets: Option<&ProbeOffsets>) -> Result<(), SetupError> {
    let Some(offsets) = offsets else {
        return Err(SetupError::MissingProbeOffsets(entity));
    };

    if offsets.head.y <= offsets.chest.y {
        return Err(SetupError::LedgeProbeBelowWallProbe {
            entity,
            chest_y: offsets.chest.y,
            head_y: offsets.head.y,
        });
    }

    Ok(())
}

/// Replace the default tuning with the RON file, if it loads and validates.
pub(crate) fn load_config(mut config: ResMut<MovementConfig>) {
    let loaded = match load_movement_config(Path::new(MOVEMENT_CONFIG_PATH)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}, using default movement config", e);
            return;
        }
    };

    let errors = loaded.validate();
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        error!(
            "Rejected {} ({} invalid fields), using default movement config",
            MOVEMENT_CONFIG_PATH,
            errors.len()
        );
        return;
    }

    info!(
        "Loaded movement config: max_speed={}, jump_force={}, coyote={}, buffer={}",
        loaded.max_speed, loaded.jump_force, loaded.coyote_time, loaded.jump_buffer_time
    );
    *config = loaded;
}

pub(crate) fn spawn_player(mut commands: Commands, config: Res<MovementConfig>) {
    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementState::default(),
            ProbeOffsets::default(),
            AnimationParameters::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(-6.0, -2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(config.base_gravity_scale),
            Mass(1.0),
            NoAutoMass,
            Friction::new(0.0),
            SweptCcd::default(),
            TransformInterpolation,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));

    info!("Spawned player with base gravity scale {}", config.base_gravity_scale);
}

/// Report characters that were spawned without a usable probe setup.
pub(crate) fn validate_player_setup(query: Query<(Entity, Option<&ProbeOffsets>), Added<Player>>) {
    for (entity, offsets) in &query {
        if let Err(e) = check_probe_offsets(entity, offsets) {
            error!("{}", e);
        }
    }
}
