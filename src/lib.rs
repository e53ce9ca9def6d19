//! A CPU-based software scanline rasterizer.
//!
//! Meshes are carried through a `Viewport * Projection * View * Model`
//! transform, lit by a single directional light and filled triangle by
//! triangle with a z-buffer and affine texture mapping. SDL2 is used only to
//! show the finished frames.
//!
//! # Quick Start
//!
//! ```ignore
//! use scanrast::prelude::*;
//!
//! let mesh = Mesh::from_obj("obj/african_head.obj")?;
//! let mut engine = Engine::new(RenderConfig::default());
//! let stats = engine.render_frame(&mesh, 30.0);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod engine;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod texture;
pub mod transform;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::RenderConfig;
pub use engine::{Engine, FrameStats};
pub use mesh::{LoadError, Mesh, MeshSource};
pub use render::{FrameBuffer, Rasterizer, Renderer, ScanlineRasterizer, ScreenTriangle};
pub use transform::{Rotation, Transform};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use scanrast::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::Camera;
    pub use crate::light::DirectionalLight;
    pub use crate::projection::Viewport;

    // Engine
    pub use crate::config::{
        RenderConfig, DEFAULT_ANGLE_STEP, DEFAULT_DEPTH, DEFAULT_HEIGHT, DEFAULT_WIDTH,
        MAX_DIMENSION,
    };
    pub use crate::engine::{Engine, FrameStats};

    // Mesh & texture
    pub use crate::mesh::{Face, LoadError, Mesh, MeshSource};
    pub use crate::texture::{Texture, TextureSource};

    // Transform
    pub use crate::transform::{Rotation, Transform};

    // Math
    pub use crate::math::{Axis, Mat4, Vec2, Vec2i, Vec3, Vec3i, Vec4};

    // Window
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        FrameBuffer, Rasterizer, ScanlineRasterizer, ScreenTriangle, DEPTH_CLEAR,
    };
}
