//! Movement domain: decision and integration systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::collisions::SpatialProbe;
use crate::movement::{
    CharacterBody, InputSnapshot, IntegrationStep, MovementConfig, MovementState, Player,
    ProbeOffsets, ProbeResult, decide, integrate,
};

/// `CharacterBody` over avian components. Impulses write `LinearVelocity`
/// straight away; forces are held until `commit`.
pub(crate) struct AvianBody<'a> {
    velocity: &'a mut LinearVelocity,
    gravity_scale: &'a mut GravityScale,
    inverse_mass: f32,
    pending_force: Vec2,
}

impl<'a> AvianBody<'a> {
    pub(crate) fn new(
        velocity: &'a mut LinearVelocity,
        gravity_scale: &'a mut GravityScale,
        mass: &ComputedMass,
    ) -> Self {
        Self {
            velocity,
            gravity_scale,
            inverse_mass: mass.inverse(),
            pending_force: Vec2::ZERO,
        }
    }

    /// Apply the forces accumulated this step over `dt`.
    pub(crate) fn commit(self, dt: f32) {
        self.velocity.0 += self.pending_force * self.inverse_mass * dt;
    }
}

impl CharacterBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_force(&mut self, force: Vec2) {
        self.pending_force += force;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }
}

/// Variable-rate pass: probe the world and run the decision sequence.
/// Writes only impulses and velocities; forces are committed by the
/// fixed-rate pass.
pub(crate) fn decide_movement(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    config: Res<MovementConfig>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &Transform,
            &ProbeOffsets,
            &ComputedMass,
            &mut MovementState,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let probe = SpatialProbe::new(&spatial_query);

    for (transform, offsets, mass, mut state, mut velocity, mut gravity_scale) in &mut query {
        let probes = ProbeResult::sample(
            &probe,
            offsets,
            transform.translation.truncate(),
            state.flags.facing,
            &config,
        );

        let was_grounded = state.probes.is_grounded;
        let mut body = AvianBody::new(&mut velocity, &mut gravity_scale, mass);
        let actions = decide(&mut state, &mut body, &input, probes, &config, dt);

        if actions.any() {
            debug!(
                "Movement actions: {:?}, vel={:?}, gravity_scale={}",
                actions,
                body.velocity(),
                body.gravity_scale()
            );
        }

        if probes.is_grounded != was_grounded {
            debug!(
                "Ground contact changed: on_ground={}, coyote={:.3}",
                probes.is_grounded, state.timers.coyote_remaining
            );
        }
    }
}

/// Fixed-rate pass: shape forces and gravity from the current flags.
pub(crate) fn integrate_movement(
    time: Res<Time>,
    config: Res<MovementConfig>,
    mut query: Query<
        (
            &ComputedMass,
            &mut MovementState,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mass, mut state, mut velocity, mut gravity_scale) in &mut query {
        let mut body = AvianBody::new(&mut velocity, &mut gravity_scale, mass);
        let step = integrate(&mut state, &mut body, &config);
        body.commit(dt);

        if let IntegrationStep::Applied { landed: true, .. } = step {
            debug!("Landed: jump finished");
        }
    }
}
