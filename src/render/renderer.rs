//! Render target ownership.
//!
//! Provides the [`Renderer`] struct which owns the color and depth buffers for
//! the frame in progress and hands out scoped [`FrameBuffer`] views of them.

use super::framebuffer::{FrameBuffer, DEPTH_CLEAR};
use crate::colors;

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<i32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            depth_buffer: vec![DEPTH_CLEAR; size],
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

    /// Reset both buffers for a new frame. The allocations are reused.
    pub fn begin_frame(&mut self) {
        self.clear(colors::BACKGROUND);
        self.clear_depth();
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Sets every depth back to [`DEPTH_CLEAR`].
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(DEPTH_CLEAR);
    }

    /// Mirror the color buffer top-to-bottom.
    ///
    /// The viewport maps +y upward, while displays scan rows from the top.
    pub fn flip_vertically(&mut self) {
        let row = self.width as usize;
        let rows = self.height as usize;
        for y in 0..rows / 2 {
            let (top, bottom) = self.color_buffer.split_at_mut((rows - 1 - y) * row);
            top[y * row..(y + 1) * row].swap_with_slice(&mut bottom[..row]);
        }
    }

    pub fn color_buffer(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn depth_buffer(&self) -> &[i32] {
        &self.depth_buffer
    }

    /// The color buffer as raw ARGB8888 bytes, ready for an SDL texture.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }

    /// Copy the color buffer into an RGBA image, row 0 on top.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let color = self.color_buffer[x as usize + y as usize * self.width as usize];
            let (r, g, b) = colors::channels(color);
            image::Rgba([r, g, b, (color >> 24) as u8])
        })
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }
}
