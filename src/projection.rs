//! Viewport parameters.
//!
//! The [`Viewport`] struct is the single source of truth for where normalized
//! device coordinates land on the render target and how depth is scaled.

use crate::math::mat4::Mat4;

/// Screen rectangle plus depth range for the viewport transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Depth values land in `[0, depth]`.
    pub depth: f32,
}

impl Viewport {
    pub fn new(x: f32, y: f32, width: f32, height: f32, depth: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            depth,
        }
    }

    /// The default framing: the central three quarters of a
    /// `width x height` target, leaving an eighth as margin on each side.
    pub fn centered(width: u32, height: u32, depth: f32) -> Self {
        Self::new(
            (width / 8) as f32,
            (height / 8) as f32,
            (u64::from(width) * 3 / 4) as f32,
            (u64::from(height) * 3 / 4) as f32,
            depth,
        )
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::viewport(self.x, self.y, self.width, self.height, self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_leaves_eighth_margin() {
        let vp = Viewport::centered(800, 800, 255.0);
        assert_eq!(vp, Viewport::new(100.0, 100.0, 600.0, 600.0, 255.0));
    }

    #[test]
    fn matrix_centers_origin() {
        let m = Viewport::centered(800, 600, 255.0).matrix();
        assert_eq!(m.get(0, 3), 400.0);
        assert_eq!(m.get(1, 3), 300.0);
        assert_eq!(m.get(2, 3), 127.5);
    }

    #[test]
    fn centered_handles_widest_targets() {
        let vp = Viewport::centered(u32::MAX, 8, 255.0);
        assert_eq!(vp.width, (u64::from(u32::MAX) * 3 / 4) as f32);
        assert_eq!(vp.height, 6.0);
    }
}
