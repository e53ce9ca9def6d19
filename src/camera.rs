//! Look-at camera.
//!
//! The camera is described by an eye position, the point it looks at and an
//! up hint. It produces both the view matrix and the perspective matrix,
//! since the perspective strength is keyed on the eye-to-center distance.

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vec3,
    center: Vec3,
    up: Vec3,
}

impl Default for Camera {
    /// Two units in front of the origin along +Z, looking back at it.
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::UP)
    }
}

impl Camera {
    /// `up` must not be parallel to `eye - center`, and `eye` must differ
    /// from `center`.
    pub fn new(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        Self { eye, center, up }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    pub fn eye_to_center_distance(&self) -> f32 {
        (self.eye - self.center).magnitude()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.center, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.eye_to_center_distance())
    }
}
