//! Render targets and triangle rasterization.

mod framebuffer;
mod rasterizer;
mod renderer;

pub use framebuffer::{FrameBuffer, DEPTH_CLEAR};
pub use rasterizer::{Rasterizer, ScanlineRasterizer, ScreenTriangle, INTENSITY_BOOST};
pub use renderer::Renderer;
