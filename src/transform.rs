//! Per-frame vertex transform.
//!
//! Provides the model [`Rotation`] and the composed [`Transform`] that carries
//! mesh vertices all the way to screen space. The composition
//! `Viewport * Projection * View * Model` is evaluated once per frame and then
//! shared by every vertex and normal of that frame.

use crate::math::mat4::{Axis, Mat4};
use crate::math::vec3::{Vec3, Vec3i};

/// Largest screen coordinate magnitude the integer rasterizer accepts.
pub const MAX_SCREEN_COORD: f32 = (1 << 24) as f32;

/// Model rotation about a single axis, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rotation {
    pub axis: Axis,
    pub degrees: f32,
}

impl Rotation {
    pub fn new(axis: Axis, degrees: f32) -> Self {
        Self { axis, degrees }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::rotation(self.axis, self.degrees)
    }
}

/// The composed model-to-screen matrix for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Compose `viewport * projection * view * model`.
    pub fn compose(viewport: Mat4, projection: Mat4, view: Mat4, model: Mat4) -> Self {
        Self {
            matrix: viewport * projection * view * model,
        }
    }

    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Carries a mesh vertex to screen space: homogeneous point, perspective
    /// divide, then rounding to integer `(x, y, depth)`.
    ///
    /// Returns `None` when the divide blows up (vertex on the eye plane) or
    /// lands beyond [`MAX_SCREEN_COORD`].
    #[inline]
    pub fn project_vertex(&self, vertex: Vec3) -> Option<Vec3i> {
        let clip = self.matrix * vertex.to_homogeneous();
        let screen = clip.project_with_divide();
        let in_range = |c: f32| c.is_finite() && c.abs() <= MAX_SCREEN_COORD;
        if in_range(screen.x) && in_range(screen.y) && in_range(screen.z) {
            Some(Vec3i::from(screen))
        } else {
            None
        }
    }

    /// Carries a normal through the same matrix as a direction (w = 0, no
    /// divide) and renormalizes it.
    ///
    /// Returns `None` when the transformed normal has zero length.
    #[inline]
    pub fn transform_normal(&self, normal: Vec3) -> Option<Vec3> {
        let transformed = self.matrix * normal.to_homogeneous_direction();
        transformed.project_no_divide().try_normalize()
    }
}
