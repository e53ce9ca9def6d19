//! SDL2 window that shows finished frames.
//!
//! SDL is used only to put the CPU-rendered ARGB8888 buffer on screen and to
//! report quit requests. [`FrameLimiter`] paces the animation loop.

use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
}

/// Sleeps a fixed delay between frames and reports the frame-to-frame time.
pub struct FrameLimiter {
    delay: Duration,
    previous_frame: Instant,
}

impl FrameLimiter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            previous_frame: Instant::now(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleeps the configured delay and returns the time elapsed since the
    /// previous call.
    pub fn wait_and_get_delta(&mut self) -> Duration {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let now = Instant::now();
        let delta = now.duration_since(self.previous_frame);
        self.previous_frame = now;
        delta
    }
}

pub struct Window {
    // Drop order matters: the texture goes before its creator and the canvas.
    texture: sdl2::render::Texture<'static>,
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated, never moved out of the
        // Box, and the texture field is dropped before it.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            texture,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            width,
            height,
        })
    }

    /// Drains pending events, reporting whether the user asked to quit.
    pub fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } = event
            {
                result = WindowEvent::Quit;
            }
        }
        result
    }

    /// Upload an ARGB8888 frame of exactly `width * height` pixels and show it.
    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        let pitch = (self.width * 4) as usize;
        if buffer.len() != pitch * self.height as usize {
            return Err(format!(
                "frame is {} bytes, window expects {}",
                buffer.len(),
                pitch * self.height as usize
            ));
        }

        self.texture
            .update(None, buffer, pitch)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), String> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| e.to_string())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
