//! Movement domain: coyote and jump-buffer countdowns.

use crate::movement::MovementConfig;

/// Two grace-window countdowns. Values are never clamped and may drift
/// below zero; only the sign is ever queried.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimerBank {
    pub coyote_remaining: f32,
    pub jump_buffer_remaining: f32,
}

impl TimerBank {
    pub fn tick(&mut self, dt: f32) {
        self.tick_coyote(dt);
        self.tick_buffer(dt);
    }

    pub fn tick_coyote(&mut self, dt: f32) {
        self.coyote_remaining -= dt;
    }

    pub fn tick_buffer(&mut self, dt: f32) {
        self.jump_buffer_remaining -= dt;
    }

    pub fn on_grounded(&mut self, config: &MovementConfig) {
        self.coyote_remaining = config.coyote_time;
    }

    pub fn on_jump_pressed(&mut self, config: &MovementConfig) {
        self.jump_buffer_remaining = config.jump_buffer_time;
    }

    pub fn consume_jump(&mut self) {
        self.coyote_remaining = 0.0;
        self.jump_buffer_remaining = 0.0;
    }

    pub fn clear_buffer(&mut self) {
        self.jump_buffer_remaining = 0.0;
    }

    pub fn coyote_active(&self) -> bool {
        self.coyote_remaining > 0.0
    }

    pub fn buffer_active(&self) -> bool {
        self.jump_buffer_remaining > 0.0
    }
}
