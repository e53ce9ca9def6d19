//! Small fixed-size vector and matrix types.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use mat4::{Axis, Mat4};
pub use vec2::{Vec2, Vec2i};
pub use vec3::{Vec3, Vec3i};
pub use vec4::Vec4;
