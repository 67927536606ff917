//! Camera module — first-person camera, per-frame input, and frustum.
//!
//! Cameras are plain values owned and driven by the caller. The engine
//! never stores one; culling strategies take a `&Camera` per frame.

mod camera;
mod frustum;
mod input;

pub use camera::{Camera, WORLD_UP, WORLD_FORWARD, WORLD_RIGHT};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use input::{InputKeys, InputSnapshot, Movement, MAX_PITCH};
