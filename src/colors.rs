//! Packed ARGB8888 color helpers.
//!
//! Every buffer in the crate stores colors as `0xAARRGGBB`, which is also
//! the layout SDL's `ARGB8888` streaming textures expect.

pub const BACKGROUND: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;

/// Pack 8-bit channels into ARGB.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    0xFF000000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Split an ARGB color into its `(r, g, b)` channels.
#[inline]
pub const fn channels(color: u32) -> (u8, u8, u8) {
    ((color >> 16) as u8, (color >> 8) as u8, color as u8)
}

/// Scale the RGB channels of `color` by `intensity`.
///
/// Channels saturate to `0..=255`, so negative intensities give black and
/// boosted intensities clip at full brightness. Alpha is forced opaque.
#[inline]
pub fn modulate(color: u32, intensity: f32) -> u32 {
    let (r, g, b) = channels(color);
    let scale = |c: u8| (c as f32 * intensity) as u8;
    rgb(scale(r), scale(g), scale(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_split_round_trip() {
        assert_eq!(rgb(0x12, 0x34, 0x56), 0xFF123456);
        assert_eq!(channels(0xFF123456), (0x12, 0x34, 0x56));
    }

    #[test]
    fn modulate_scales_channels() {
        assert_eq!(modulate(rgb(100, 150, 200), 0.5), rgb(50, 75, 100));
    }

    #[test]
    fn modulate_saturates() {
        assert_eq!(modulate(rgb(200, 100, 10), 2.0), rgb(255, 200, 20));
        assert_eq!(modulate(rgb(200, 100, 10), -0.7), BACKGROUND);
    }
}
