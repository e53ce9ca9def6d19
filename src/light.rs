//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights are ideal for simulating distant light sources like the sun,
/// where all rays are effectively parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Normalized light direction.
    pub direction: Vec3,
}

impl DirectionalLight {
    /// Create a new directional light. The direction is normalized and must
    /// be nonzero.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
        }
    }

    /// Diffuse intensity for a unit `normal`: `normal · direction`.
    ///
    /// Not clamped. Negative values mean the surface faces away from the
    /// light; the rasterizer turns them into black.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction)
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3::new(1.0, -1.0, 1.0))
    }
}
