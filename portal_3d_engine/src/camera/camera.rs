/// Camera — first-person viewer in world space.
///
/// Holds position, Euler orientation (degrees) and perspective
/// parameters. View, projection and frustum are derived on demand, so a
/// camera moved by `Movement::update` always produces a matching frustum.
///
/// World axes: forward is -Z, right is +X, up is +Y.

use glam::{EulerRot, Mat4, Quat, Vec3};
use super::frustum::Frustum;

pub const WORLD_UP: Vec3 = Vec3::Y;
pub const WORLD_FORWARD: Vec3 = Vec3::NEG_Z;
pub const WORLD_RIGHT: Vec3 = Vec3::X;

/// First-person camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Rotation about the right axis, degrees
    pub pitch: f32,
    /// Rotation about the world up axis, degrees
    pub yaw: f32,
    /// Rotation about the view axis, degrees
    pub roll: f32,
    /// Vertical field of view, degrees
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera at `position` looking down -Z.
    pub fn new(position: Vec3, fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            fov,
            aspect,
            near,
            far,
        }
    }

    /// Orientation: yaw, then pitch, then roll.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    pub fn forward(&self) -> Vec3 {
        (self.rotation() * WORLD_FORWARD).normalize()
    }

    pub fn right(&self) -> Vec3 {
        (self.rotation() * WORLD_RIGHT).normalize()
    }

    pub fn up(&self) -> Vec3 {
        (self.rotation() * WORLD_UP).normalize()
    }

    /// Look-at view matrix along `forward()` with world up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), WORLD_UP)
    }

    /// Right-handed perspective with OpenGL clip depth (`-w..w`).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// Combined projection-view matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Frustum extracted from the current projection-view matrix.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }
}

impl Default for Camera {
    /// 70° FOV, 4:3, near 0.1, far 1000 at the origin.
    fn default() -> Self {
        Self::new(Vec3::ZERO, 70.0, 4.0 / 3.0, 0.1, 1000.0)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
