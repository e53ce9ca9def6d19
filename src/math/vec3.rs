use std::ops::{Add, Div, Mul, Neg, Sub};

use super::vec4::Vec4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Returns `self / |self|`.
    ///
    /// A zero-length vector yields NaN components; use [`Vec3::try_normalize`]
    /// when the input is not known to be nonzero.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Like [`Vec3::normalize`], but returns `None` for zero-length input.
    pub fn try_normalize(&self) -> Option<Self> {
        let magnitude = self.magnitude();
        if magnitude > f32::EPSILON {
            Some(*self / magnitude)
        } else {
            None
        }
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both inputs (right-hand rule).
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Promotes a point to homogeneous coordinates (w = 1).
    pub const fn to_homogeneous(self) -> Vec4 {
        Vec4::from_vec3(self, 1.0)
    }

    /// Promotes a direction to homogeneous coordinates (w = 0), so
    /// translation terms of a matrix do not apply to it.
    pub const fn to_homogeneous_direction(self) -> Vec4 {
        Vec4::from_vec3(self, 0.0)
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Scalar division of a vector.
impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<Vec3i> for Vec3 {
    fn from(v: Vec3i) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32)
    }
}

/// Integer 3D vector: a screen-space pixel position plus integer depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3i {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl Add<Vec3i> for Vec3i {
    type Output = Vec3i;

    fn add(self, rhs: Vec3i) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vec3i> for Vec3i {
    type Output = Vec3i;

    fn sub(self, rhs: Vec3i) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Rounds each component by adding 0.5 and truncating.
///
/// Negative values therefore round toward zero past the midpoint
/// (`-2.5 -> -2`). Screen coordinates depend on this exact behavior.
impl From<Vec3> for Vec3i {
    fn from(v: Vec3) -> Self {
        Self::new(
            (v.x + 0.5) as i32,
            (v.y + 0.5) as i32,
            (v.z + 0.5) as i32,
        )
    }
}
