/// Per-frame input and first-person movement.
///
/// The caller samples its window system once per frame into an
/// `InputSnapshot` and hands it to `Movement::update`. Nothing here
/// reads global state.

use bitflags::bitflags;
use glam::{Vec2, Vec3};
use super::camera::{Camera, WORLD_UP};

/// Pitch is kept inside ±this many degrees so the look-at basis never degenerates.
pub const MAX_PITCH: f32 = 89.0;

bitflags! {
    /// Movement keys held during a frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InputKeys: u32 {
        const FORWARD  = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT     = 1 << 2;
        const RIGHT    = 1 << 3;
        const UP       = 1 << 4;
        const DOWN     = 1 << 5;
        /// Doubles acceleration
        const SPRINT   = 1 << 6;
    }
}

/// Input state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub keys: InputKeys,
    /// Mouse movement since the previous frame, in pixels
    pub mouse_delta: Vec2,
}

impl InputSnapshot {
    pub fn new(keys: InputKeys, mouse_delta: Vec2) -> Self {
        Self { keys, mouse_delta }
    }
}

/// Velocity-based movement with linear friction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    /// Acceleration magnitude while a direction key is held
    pub speed: f32,
    /// Velocity damping per second
    pub friction: f32,
    /// Degrees of rotation per pixel of mouse movement
    pub mouse_sensitivity: f32,
    pub velocity: Vec3,
}

impl Movement {
    pub fn new(speed: f32, friction: f32, mouse_sensitivity: f32) -> Self {
        Self {
            speed,
            friction,
            mouse_sensitivity,
            velocity: Vec3::ZERO,
        }
    }

    /// Advance `camera` by `dt` seconds under `input`.
    ///
    /// Direction keys are combined and normalized, so diagonal movement
    /// is not faster. UP/DOWN move along the world up axis regardless of
    /// pitch.
    pub fn update(&mut self, camera: &mut Camera, input: &InputSnapshot, dt: f32) {
        let forward = camera.forward();
        let right = camera.right();
        let keys = input.keys;

        let mut acceleration = Vec3::ZERO;
        if keys.contains(InputKeys::FORWARD) {
            acceleration += forward;
        }
        if keys.contains(InputKeys::BACKWARD) {
            acceleration -= forward;
        }
        if keys.contains(InputKeys::LEFT) {
            acceleration -= right;
        }
        if keys.contains(InputKeys::RIGHT) {
            acceleration += right;
        }
        if keys.contains(InputKeys::UP) {
            acceleration += WORLD_UP;
        }
        if keys.contains(InputKeys::DOWN) {
            acceleration -= WORLD_UP;
        }

        let boost = if keys.contains(InputKeys::SPRINT) { 2.0 } else { 1.0 };
        acceleration = acceleration.normalize_or_zero() * self.speed * boost;

        let friction = -self.velocity * self.friction;
        self.velocity += (acceleration + friction) * dt;
        camera.position += self.velocity * dt;

        camera.yaw -= input.mouse_delta.x * self.mouse_sensitivity;
        camera.pitch = (camera.pitch - input.mouse_delta.y * self.mouse_sensitivity)
            .clamp(-MAX_PITCH, MAX_PITCH);
    }
}

impl Default for Movement {
    fn default() -> Self {
        Self::new(10.0, 6.0, 0.1)
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
