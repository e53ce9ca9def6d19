//! Scanline-based triangle rasterization.
//!
//! # Algorithm Overview
//!
//! The triangle is swept one horizontal line at a time, from its lowest to its
//! highest y. The middle vertex splits the sweep into two regions:
//!
//! ```text
//!            t2
//!            /\
//!           /  \        upper region: edges t0-t2 and t1-t2
//!          /    \
//!      A  /------\ t1   <- switch at t1.y
//!        /     /
//!       /   /           lower region: edges t0-t2 and t0-t1
//!      / /
//!     t0
//! ```
//!
//! For scanline `i`, point `A` lies on the long edge `t0-t2` at
//! `alpha = i / total_height`, and point `B` lies on the edge of the current
//! region at `beta`. Position, intensity and texel coordinate are all
//! interpolated linearly, first along the edges and then across the span from
//! `A` to `B`.
//!
//! # Numeric Behavior
//!
//! Interpolation is affine in screen space; there is no division by depth,
//! so textures swim slightly on strongly foreshortened faces. Edge points are
//! rounded to whole pixels (see `Vec3i::from`), texel coordinates truncate.

use super::{Rasterizer, ScreenTriangle};
use crate::colors;
use crate::math::vec2::Vec2i;
use crate::math::vec3::{Vec3, Vec3i};
use crate::render::framebuffer::FrameBuffer;
use crate::texture::TextureSource;

/// Brightening applied to every interpolated intensity before shading.
///
/// Not physically derived; it lifts the mid-tones of the diffuse term.
pub const INTENSITY_BOOST: f32 = 1.2;

/// One corner (or edge/span point) with all interpolated attributes.
#[derive(Clone, Copy, Debug)]
struct Corner {
    pos: Vec3i,
    intensity: f32,
    uv: Vec2i,
}

impl Corner {
    /// The point a fraction `t` of the way from `from` to `to`.
    #[inline]
    fn along(from: Corner, to: Corner, t: f32) -> Corner {
        Corner {
            pos: from.pos + Vec3i::from(Vec3::from(to.pos - from.pos) * t),
            intensity: from.intensity + (to.intensity - from.intensity) * t,
            uv: from.uv + (to.uv - from.uv) * t,
        }
    }
}

/// Two-region scanline rasterizer with z-buffering and texture modulation.
///
/// Vertices may arrive in any order; they are sorted by y together with their
/// intensity and texel coordinate.
#[derive(Debug, Clone, Copy)]
pub struct ScanlineRasterizer {
    intensity_boost: f32,
}

impl ScanlineRasterizer {
    /// Creates a rasterizer with the standard [`INTENSITY_BOOST`].
    pub fn new() -> Self {
        Self {
            intensity_boost: INTENSITY_BOOST,
        }
    }

    /// Creates a rasterizer with a custom intensity multiplier.
    pub fn with_intensity_boost(intensity_boost: f32) -> Self {
        Self { intensity_boost }
    }

    pub fn intensity_boost(&self) -> f32 {
        self.intensity_boost
    }

    /// Sorts corners by ascending y. Ties keep their input order.
    fn sort_corners(corners: &mut [Corner; 3]) {
        if corners[0].pos.y > corners[1].pos.y {
            corners.swap(0, 1);
        }
        if corners[0].pos.y > corners[2].pos.y {
            corners.swap(0, 2);
        }
        if corners[1].pos.y > corners[2].pos.y {
            corners.swap(1, 2);
        }
    }
}

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle<T>(&self, triangle: &ScreenTriangle, buffer: &mut FrameBuffer, texture: &T) -> usize
    where
        T: TextureSource + ?Sized,
    {
        let mut corners = [0, 1, 2].map(|k| Corner {
            pos: triangle.points[k],
            intensity: triangle.intensities[k],
            uv: triangle.uvs[k],
        });

        // Zero screen-space height
        if corners[0].pos.y == corners[1].pos.y && corners[0].pos.y == corners[2].pos.y {
            return 0;
        }

        Self::sort_corners(&mut corners);
        let [t0, t1, t2] = corners;

        let total_height = t2.pos.y - t0.pos.y;
        let lower_height = t1.pos.y - t0.pos.y;
        let mut written = 0;

        // Only rows and columns near the target are swept; rounding in P can
        // move a pixel by one, hence the margin.
        let (width, height) = (buffer.width() as i32, buffer.height() as i32);
        let first_row = (-1 - t0.pos.y).max(0);
        let last_row = (height - t0.pos.y).min(total_height);

        for i in first_row..=last_row {
            let upper = i > lower_height || t1.pos.y == t0.pos.y;
            let segment_height = if upper {
                t2.pos.y - t1.pos.y
            } else {
                lower_height
            };
            let alpha = i as f32 / total_height as f32;
            let beta = (i - if upper { lower_height } else { 0 }) as f32 / segment_height as f32;

            let mut a = Corner::along(t0, t2, alpha);
            let mut b = if upper {
                Corner::along(t1, t2, beta)
            } else {
                Corner::along(t0, t1, beta)
            };
            if a.pos.x > b.pos.x {
                std::mem::swap(&mut a, &mut b);
            }

            for j in a.pos.x.max(-1)..=b.pos.x.min(width) {
                let phi = if a.pos.x == b.pos.x {
                    1.0
                } else {
                    (j - a.pos.x) as f32 / (b.pos.x - a.pos.x) as f32
                };
                let p = Vec3i::from(Vec3::from(a.pos) + Vec3::from(b.pos - a.pos) * phi);
                let uv = a.uv + (b.uv - a.uv) * phi;
                let intensity =
                    (a.intensity + (b.intensity - a.intensity) * phi) * self.intensity_boost;

                let shaded = buffer.set_pixel_with_depth(p.x, p.y, p.z, || {
                    colors::modulate(texture.sample(uv), intensity)
                });
                if shaded {
                    written += 1;
                }
            }
        }

        written
    }
}
