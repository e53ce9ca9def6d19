//! Diffuse textures and the texel lookup used by the rasterizer.

use std::path::Path;

use log::info;

use crate::colors;
use crate::math::vec2::Vec2i;

/// Anything the rasterizer can pull a color from by texel coordinate.
pub trait TextureSource {
    /// Returns the ARGB color at integer texel coordinate `uv`.
    fn sample(&self, uv: Vec2i) -> u32;
}

/// Represents a 2D texture for texture mapping.
///
/// Row 0 is the **bottom** row, matching OBJ texture coordinates where
/// `v = 0` is the bottom edge of the image.
#[derive(Debug, Clone)]
pub struct Texture {
    data: Vec<u32>, // ARGB, bottom row first
    width: u32,
    height: u32,
}

impl Texture {
    /// Load a texture from an image file (TGA, PNG, JPG, ...).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let path = path.as_ref();
        let img = image::open(path)?.to_rgba8();
        // Image rows are stored top-down; flip so row 0 is the bottom.
        let img = image::imageops::flip_vertical(&img);
        let (width, height) = img.dimensions();

        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, _] = p.0;
                colors::rgb(r, g, b)
            })
            .collect();

        info!("Loaded texture {} ({}x{})", path.display(), width, height);

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Wrap an existing pixel buffer (bottom row first).
    ///
    /// # Panics
    /// Panics if `data.len() != width * height` or either dimension is zero.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Self {
        assert!(width > 0 && height > 0, "texture dimensions must be nonzero");
        assert_eq!(
            data.len(),
            (width * height) as usize,
            "texture data size doesn't match dimensions"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// A 1x1 texture of a single color.
    pub fn solid(color: u32) -> Self {
        Self::from_pixels(1, 1, vec![color])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl TextureSource for Texture {
    /// Nearest texel lookup; coordinates outside the image clamp to the edge.
    #[inline]
    fn sample(&self, uv: Vec2i) -> u32 {
        let x = uv.x.clamp(0, self.width as i32 - 1) as u32;
        let y = uv.y.clamp(0, self.height as i32 - 1) as u32;
        self.data[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Texture {
        Texture::from_pixels(2, 2, vec![1, 2, 3, 4])
    }

    #[test]
    fn sample_indexes_row_major() {
        let tex = checker();
        assert_eq!(tex.sample(Vec2i::new(0, 0)), 1);
        assert_eq!(tex.sample(Vec2i::new(1, 0)), 2);
        assert_eq!(tex.sample(Vec2i::new(0, 1)), 3);
        assert_eq!(tex.sample(Vec2i::new(1, 1)), 4);
    }

    #[test]
    fn sample_clamps_out_of_range() {
        let tex = checker();
        assert_eq!(tex.sample(Vec2i::new(-5, 0)), 1);
        assert_eq!(tex.sample(Vec2i::new(2, 2)), 4);
    }

    #[test]
    fn solid_returns_same_color_everywhere() {
        let tex = Texture::solid(colors::WHITE);
        assert_eq!(tex.sample(Vec2i::new(17, -3)), colors::WHITE);
    }

    #[test]
    #[should_panic]
    fn from_pixels_rejects_wrong_size() {
        Texture::from_pixels(2, 2, vec![0; 3]);
    }
}
