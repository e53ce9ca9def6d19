//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into color and depth buffers with bounds-checked access.
//! The depth buffer enables hidden surface removal via the z-buffer algorithm.

/// Depth value meaning "nothing drawn yet". Any real depth is greater.
pub const DEPTH_CLEAR: i32 = i32::MIN;

/// A view into color and depth buffers.
///
/// Wraps 1D slices with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass buffers + dimensions together.
///
/// # Depth Buffer
///
/// The depth buffer stores integer screen depths. Larger values are closer to
/// the viewer, and a write only happens when the new depth is strictly greater
/// than the stored one.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    depth_buffer: &'a mut [i32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    ///
    /// # Panics
    /// Panics if buffer lengths don't match width * height
    pub fn new(
        color_buffer: &'a mut [u32],
        depth_buffer: &'a mut [i32],
        width: u32,
        height: u32,
    ) -> Self {
        let size = width as usize * height as usize;
        assert_eq!(
            color_buffer.len(),
            size,
            "Color buffer size doesn't match dimensions"
        );
        assert_eq!(
            depth_buffer.len(),
            size,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// `shade` is only called when the pixel is inside the buffer and `depth`
    /// is strictly greater than the stored depth; equal depths never
    /// overwrite. Returns whether the pixel was written.
    #[inline]
    pub fn set_pixel_with_depth<F>(&mut self, x: i32, y: i32, depth: i32, shade: F) -> bool
    where
        F: FnOnce() -> u32,
    {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        if depth > self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.color_buffer[idx] = shade();
            true
        } else {
            false
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<i32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_test_is_strict() {
        let mut color = vec![0u32; 4];
        let mut depth = vec![DEPTH_CLEAR; 4];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 2, 2);

        assert!(fb.set_pixel_with_depth(1, 1, 5, || 0xAA));
        assert!(!fb.set_pixel_with_depth(1, 1, 5, || 0xBB));
        assert!(!fb.set_pixel_with_depth(1, 1, 4, || 0xCC));
        assert!(fb.set_pixel_with_depth(1, 1, 6, || 0xDD));

        assert_eq!(fb.get_pixel(1, 1), Some(0xDD));
        assert_eq!(fb.get_depth(1, 1), Some(6));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut color = vec![0u32; 4];
        let mut depth = vec![DEPTH_CLEAR; 4];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 2, 2);

        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2)] {
            assert!(!fb.set_pixel_with_depth(x, y, 0, || panic!("shaded off-screen pixel")));
            assert_eq!(fb.get_pixel(x, y), None);
        }
        assert!(depth.iter().all(|&d| d == DEPTH_CLEAR));
    }
}
