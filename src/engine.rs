//! Core rendering engine.
//!
//! The [`Engine`] is the per-frame render context. It owns the configuration,
//! camera, viewport, light, render target and rasterizer; the mesh is borrowed
//! for the duration of each [`Engine::render_frame`] call.

use log::{debug, trace};

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::light::DirectionalLight;
use crate::math::vec2::Vec2i;
use crate::math::vec3::Vec3i;
use crate::mesh::MeshSource;
use crate::projection::Viewport;
use crate::render::{Rasterizer, Renderer, ScanlineRasterizer, ScreenTriangle};
use crate::transform::{Rotation, Transform};

/// Counters for a single rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Triangles handed to the rasterizer.
    pub triangles_drawn: usize,
    /// Triangles dropped before rasterization (vertex on the eye plane or a
    /// degenerate normal).
    pub triangles_skipped: usize,
    /// Pixels that passed the depth test.
    pub pixels_written: usize,
}

pub struct Engine {
    config: RenderConfig,
    renderer: Renderer,
    rasterizer: ScanlineRasterizer,
    camera: Camera,
    viewport: Viewport,
    light: DirectionalLight,
}

impl Engine {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            renderer: Renderer::new(config.width, config.height),
            rasterizer: ScanlineRasterizer::with_intensity_boost(config.intensity_boost),
            camera: config.camera(),
            viewport: config.viewport(),
            light: config.light(),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// The full model-to-screen transform for a model rotation.
    pub fn frame_transform(&self, rotation: Rotation) -> Transform {
        Transform::compose(
            self.viewport.matrix(),
            self.camera.projection_matrix(),
            self.camera.view_matrix(),
            rotation.to_matrix(),
        )
    }

    /// Render one frame of `mesh` rotated by `angle` degrees about the
    /// configured axis.
    ///
    /// Both buffers are cleared first. The result stays in the render target
    /// with +y pointing up until [`Engine::flip_for_display`] is called.
    pub fn render_frame<M>(&mut self, mesh: &M, angle: f32) -> FrameStats
    where
        M: MeshSource + ?Sized,
    {
        self.renderer.begin_frame();
        let transform = self.frame_transform(Rotation::new(self.config.axis, angle));

        let mut stats = FrameStats::default();
        let texture = mesh.texture();
        let mut buffer = self.renderer.as_framebuffer();

        for face in 0..mesh.face_count() {
            match screen_triangle(&transform, &self.light, mesh, face) {
                Some(triangle) => {
                    stats.pixels_written +=
                        self.rasterizer.fill_triangle(&triangle, &mut buffer, texture);
                    stats.triangles_drawn += 1;
                }
                None => {
                    trace!("Skipping face {face}: vertex on the eye plane or degenerate normal");
                    stats.triangles_skipped += 1;
                }
            }
        }

        debug!(
            "Frame at {angle:.1} deg: {} triangles, {} skipped, {} pixels",
            stats.triangles_drawn, stats.triangles_skipped, stats.pixels_written
        );
        stats
    }

    /// Mirror the finished frame so row 0 is the top row, as displays expect.
    pub fn flip_for_display(&mut self) {
        self.renderer.flip_vertically();
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }
}

/// Runs the vertex stage for one face.
fn screen_triangle<M>(
    transform: &Transform,
    light: &DirectionalLight,
    mesh: &M,
    face: usize,
) -> Option<ScreenTriangle>
where
    M: MeshSource + ?Sized,
{
    let indices = mesh.face(face);
    let mut points = [Vec3i::ZERO; 3];
    let mut intensities = [0.0; 3];
    let mut uvs = [Vec2i::ZERO; 3];

    for corner in 0..3 {
        points[corner] = transform.project_vertex(mesh.vertex(indices[corner]))?;
        let normal = transform.transform_normal(mesh.normal(face, corner))?;
        intensities[corner] = light.intensity(normal);
        uvs[corner] = mesh.uv(face, corner);
    }

    Some(ScreenTriangle::new(points, intensities, uvs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::mat4::Axis;
    use crate::math::vec3::Vec3;

    #[test]
    fn default_transform_centers_origin() {
        let engine = Engine::new(RenderConfig::default());
        let t = engine.frame_transform(Rotation::default());
        assert_eq!(t.project_vertex(Vec3::ZERO), Some(Vec3i::new(400, 400, 128)));
    }

    #[test]
    fn frame_transform_uses_rotation() {
        let engine = Engine::new(RenderConfig::default());
        let still = engine.frame_transform(Rotation::new(Axis::Y, 0.0));
        let turned = engine.frame_transform(Rotation::new(Axis::Y, 90.0));
        let p = Vec3::new(0.5, 0.0, 0.0);
        assert_ne!(still.project_vertex(p), turned.project_vertex(p));
    }
}
