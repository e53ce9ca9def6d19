//! Triangle rasterization.
//!
//! [`ScreenTriangle`] is the transient bundle the vertex stage produces for
//! each face; a [`Rasterizer`] turns it into depth-tested, shaded pixels.

mod scanline;

pub use scanline::{ScanlineRasterizer, INTENSITY_BOOST};

use super::framebuffer::FrameBuffer;
use crate::math::vec2::Vec2i;
use crate::math::vec3::Vec3i;
use crate::texture::TextureSource;

/// A triangle ready for rasterization in screen space.
///
/// Lives only while one face is being drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    /// Pixel position and integer depth of each corner.
    pub points: [Vec3i; 3],
    /// Light intensity at each corner (may be negative).
    pub intensities: [f32; 3],
    /// Texel coordinate at each corner.
    pub uvs: [Vec2i; 3],
}

impl ScreenTriangle {
    pub fn new(points: [Vec3i; 3], intensities: [f32; 3], uvs: [Vec2i; 3]) -> Self {
        Self {
            points,
            intensities,
            uvs,
        }
    }
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how triangles are filled into a pixel buffer.
pub trait Rasterizer {
    /// Fill a triangle into the frame buffer, sampling `texture` for every
    /// pixel that passes the depth test.
    ///
    /// Returns the number of pixels written.
    fn fill_triangle<T>(&self, triangle: &ScreenTriangle, buffer: &mut FrameBuffer, texture: &T) -> usize
    where
        T: TextureSource + ?Sized;
}
