//! Movement domain: the physics body as seen by the controller.

use bevy::prelude::*;

/// Read/write access to the character's rigid body.
///
/// Impulses change velocity immediately. Continuous forces are accumulated
/// and only take effect when the physics step runs, so velocity reads made
/// after `apply_force` in the same step still see the old value.
pub trait CharacterBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn apply_force(&mut self, force: Vec2);
    fn apply_impulse(&mut self, impulse: Vec2);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
}

/// Minimal semi-implicit Euler body for driving the controller headless.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SimBody {
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub inverse_mass: f32,
    pub gravity: Vec2,
    pub pending_force: Vec2,
}

#[cfg(test)]
impl Default for SimBody {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity_scale: 3.0,
            inverse_mass: 1.0,
            gravity: Vec2::new(0.0, -9.81),
            pending_force: Vec2::ZERO,
        }
    }
}

#[cfg(test)]
impl SimBody {
    /// Apply accumulated forces and scaled gravity over `dt`.
    pub fn step(&mut self, dt: f32) {
        let acceleration =
            self.pending_force * self.inverse_mass + self.gravity * self.gravity_scale;
        self.velocity += acceleration * dt;
        self.pending_force = Vec2::ZERO;
    }
}

#[cfg(test)]
impl CharacterBody for SimBody {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn apply_force(&mut self, force: Vec2) {
        self.pending_force += force;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inverse_mass;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }
}
