/*!
# Portal 3D Engine

Geometric core of a first-person, portal/sector-based level renderer.

The crate has no rendering backend. It answers one question per frame:
which sectors of the level can the camera see?

## Architecture

- **math**: bounding volumes (AABB, Sphere, Ray, Line, Plane) and their
  pairwise intersection tests
- **camera**: first-person Camera, per-frame InputSnapshot/Movement, and
  the Frustum extracted from the camera's projection-view matrix
- **level**: arena-backed sector/wall graph addressed by stable keys
- **visibility**: frustum-clipped portal traversal and the SectorCuller
  strategies built on it
- **Engine**: process-wide holder of the loaded level and the logger
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod camera;
pub mod level;
pub mod visibility;

// Main portal3d namespace module
pub mod portal3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Level sub-module
    pub mod level {
        pub use crate::level::*;
    }

    // Visibility sub-module
    pub mod visibility {
        pub use crate::visibility::*;
    }
}

// Re-export math library at crate root
pub use glam;
