//! 4x4 transformation matrix using column-vector convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec4`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! There is deliberately no `Mat4 * Vec3`. Promote with
//! [`Vec3::to_homogeneous`] (points) or [`Vec3::to_homogeneous_direction`]
//! (directions) and come back with [`Vec4::project_with_divide`] or
//! [`Vec4::project_no_divide`].

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

/// Coordinate axis selector for [`Mat4::rotation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around `axis`, with the angle in degrees.
    ///
    /// The two diagonal and two off-diagonal entries of the rotation plane are
    /// replaced; the rest stays identity. The entry above the diagonal holds
    /// `-sin`.
    pub fn rotation(axis: Axis, degrees: f32) -> Self {
        let radians = degrees.to_radians();
        let c = radians.cos();
        let s = radians.sin();
        let (a, b) = match axis {
            Axis::X => (1, 2),
            Axis::Y => (0, 2),
            Axis::Z => (0, 1),
        };

        let mut m = Mat4::identity();
        m.data[a][a] = c;
        m.data[a][b] = -s;
        m.data[b][a] = s;
        m.data[b][b] = c;
        m
    }

    /// Creates the simple perspective matrix: identity with
    /// `[3][2] = -1 / distance`.
    ///
    /// After the divide a point at depth `z` is scaled by
    /// `1 / (1 - z / distance)`. `distance` must be nonzero.
    pub fn perspective(distance: f32) -> Self {
        let mut m = Mat4::identity();
        m.data[3][2] = -1.0 / distance;
        m
    }

    /// Maps normalized device coordinates `[-1, 1]^3` onto
    /// `[x, x + w] x [y, y + h] x [0, depth]`.
    pub fn viewport(x: f32, y: f32, w: f32, h: f32, depth: f32) -> Self {
        Mat4::new([
            [w / 2.0, 0.0, 0.0, x + w / 2.0],
            [0.0, h / 2.0, 0.0, y + h / 2.0],
            [0.0, 0.0, depth / 2.0, depth / 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a view matrix from an eye position looking at `center`.
    ///
    /// The basis `z = eye - center`, `x = up × z`, `y = z × x` (all
    /// normalized) fills the rows of the upper-left 3x3 block, and the last
    /// column holds `-center`.
    ///
    /// `up` must not be parallel to `eye - center`; `x` would have zero
    /// length and the matrix would be filled with NaN.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let z = (eye - center).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x).normalize();

        Self::new([
            [x.x, x.y, x.z, -center.x],
            [y.x, y.y, y.z, -center.y],
            [z.x, z.y, z.z, -center.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut result = [[0.0f32; 4]; 4];
        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.data[col][row];
            }
        }
        Mat4::new(result)
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    /// Set element at [row][col].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row][col] = value;
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            self.data[r][0] * v.x
                + self.data[r][1] * v.y
                + self.data[r][2] * v.z
                + self.data[r][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}
