//! Frame-driver settings.
//!
//! [`RenderConfig`] gathers every knob of the pipeline. The defaults render the
//! classic 800x800 head turning about Y in 10 degree steps.

use std::time::Duration;

use crate::camera::Camera;
use crate::light::DirectionalLight;
use crate::math::mat4::Axis;
use crate::math::vec3::Vec3;
use crate::projection::Viewport;
use crate::render::INTENSITY_BOOST;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
/// Largest accepted render target side, in pixels.
pub const MAX_DIMENSION: u32 = 16384;
pub const DEFAULT_DEPTH: f32 = 255.0;
pub const DEFAULT_ANGLE_STEP: f32 = 10.0;
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(5);

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Depth range of the viewport, `[0, depth]`.
    pub depth: f32,
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
    /// Light direction; normalized when the light is built.
    pub light_direction: Vec3,
    pub axis: Axis,
    /// Degrees added to the model rotation every frame.
    pub angle_step: f32,
    pub frame_delay: Duration,
    pub intensity_boost: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            depth: DEFAULT_DEPTH,
            eye: Vec3::new(0.0, 0.0, 2.0),
            center: Vec3::ZERO,
            up: Vec3::UP,
            light_direction: Vec3::new(1.0, -1.0, 1.0),
            axis: Axis::Y,
            angle_step: DEFAULT_ANGLE_STEP,
            frame_delay: DEFAULT_FRAME_DELAY,
            intensity_boost: INTENSITY_BOOST,
        }
    }
}

impl RenderConfig {
    pub fn camera(&self) -> Camera {
        Camera::new(self.eye, self.center, self.up)
    }

    pub fn light(&self) -> DirectionalLight {
        DirectionalLight::new(self.light_direction)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::centered(self.width, self.height, self.depth)
    }

    /// Model rotation for the `frame`-th frame, wrapped into `[0, 360)`.
    ///
    /// Every turn restarts at zero, so the angle stays exact however long
    /// the animation runs.
    pub fn angle_for_frame(&self, frame: u64) -> f32 {
        let step_in_turn = frame % self.frames_per_turn();
        (step_in_turn as f32 * self.angle_step).rem_euclid(360.0)
    }

    /// Number of frames in one full turn, at least one.
    pub fn frames_per_turn(&self) -> u64 {
        if self.angle_step.abs() < f32::EPSILON {
            return 1;
        }
        (360.0 / self.angle_step.abs()).ceil().max(1.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_reference_scene() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (800, 800));
        assert_eq!(config.axis, Axis::Y);
        assert_eq!(config.frame_delay, Duration::from_millis(5));
        assert_relative_eq!(config.camera().eye_to_center_distance(), 2.0);

        let viewport = config.viewport();
        assert_relative_eq!(viewport.x, 100.0);
        assert_relative_eq!(viewport.width, 600.0);
    }

    #[test]
    fn angles_sweep_a_full_turn() {
        let config = RenderConfig::default();
        assert_eq!(config.frames_per_turn(), 36);
        assert_relative_eq!(config.angle_for_frame(0), 0.0);
        assert_relative_eq!(config.angle_for_frame(35), 350.0);
        assert_relative_eq!(config.angle_for_frame(36), 0.0);
    }

    #[test]
    fn angles_stay_exact_after_long_runs() {
        let config = RenderConfig::default();
        let late = 36 * (1 << 30) + 3;
        assert_relative_eq!(config.angle_for_frame(late), 30.0);
        assert_relative_eq!(config.angle_for_frame(u64::MAX), config.angle_for_frame(u64::MAX % 36));
    }

    #[test]
    fn negative_step_turns_backwards() {
        let config = RenderConfig {
            angle_step: -90.0,
            ..Default::default()
        };
        assert_eq!(config.frames_per_turn(), 4);
        assert_relative_eq!(config.angle_for_frame(1), 270.0);
    }
}
