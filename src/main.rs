use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use scanrast::prelude::*;

/// Software scanline rasterizer showing a rotating textured mesh.
#[derive(Parser, Debug)]
#[command(name = "scanrast", version, about)]
struct Args {
    /// Wavefront OBJ file. `<stem>_diffuse.tga` next to it is used as texture.
    #[arg(default_value = "obj/african_head.obj")]
    mesh: PathBuf,

    /// Diffuse texture, overriding the lookup next to the OBJ file
    #[arg(long)]
    texture: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = dimension_parser())]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = dimension_parser())]
    height: u32,

    /// Degrees the model turns each frame
    #[arg(long, default_value_t = DEFAULT_ANGLE_STEP)]
    step: f32,

    /// Pause between frames, in milliseconds
    #[arg(long, default_value_t = 5)]
    delay_ms: u64,

    /// Rotation axis
    #[arg(long, value_enum, default_value_t = AxisArg::Y)]
    axis: AxisArg,

    /// Stop after this many frames (default: run until closed; one full turn
    /// when headless)
    #[arg(long)]
    frames: Option<u64>,

    /// Render without opening a window
    #[arg(long)]
    headless: bool,

    /// Save the last frame to this image file (headless only)
    #[arg(long, requires = "headless")]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn dimension_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(MAX_DIMENSION))
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            axis: self.axis.into(),
            angle_step: self.step,
            frame_delay: Duration::from_millis(self.delay_ms),
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    let mut mesh = Mesh::from_obj(&args.mesh)
        .with_context(|| format!("Failed to load mesh {}", args.mesh.display()))?;
    if let Some(texture) = &args.texture {
        mesh.load_texture(texture)
            .with_context(|| format!("Failed to load texture {}", texture.display()))?;
    }

    let config = args.render_config();
    info!(
        "Rendering {}x{}, {} deg per frame about {}",
        config.width, config.height, config.angle_step, config.axis
    );
    let mut engine = Engine::new(config);

    if args.headless {
        let frames = args
            .frames
            .unwrap_or_else(|| engine.config().frames_per_turn());
        run_headless(&mut engine, &mesh, frames, args.output.as_deref())
    } else {
        run_windowed(&mut engine, &mesh, args.frames)
    }
}

fn run_headless(
    engine: &mut Engine,
    mesh: &Mesh,
    frames: u64,
    output: Option<&Path>,
) -> Result<()> {
    let mut total = FrameStats::default();
    for frame in 0..frames {
        let angle = engine.config().angle_for_frame(frame);
        let stats = engine.render_frame(mesh, angle);
        engine.flip_for_display();
        total.triangles_drawn += stats.triangles_drawn;
        total.triangles_skipped += stats.triangles_skipped;
        total.pixels_written += stats.pixels_written;
    }

    info!(
        "Rendered {frames} frames: {} triangles, {} skipped, {} pixels",
        total.triangles_drawn, total.triangles_skipped, total.pixels_written
    );

    if let Some(path) = output {
        engine
            .renderer()
            .to_rgba_image()
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved last frame to {}", path.display());
    }
    Ok(())
}

fn run_windowed(engine: &mut Engine, mesh: &Mesh, frames: Option<u64>) -> Result<()> {
    let (width, height) = (engine.config().width, engine.config().height);
    let mut window = Window::new("scanrast", width, height)
        .map_err(|e| anyhow!("Failed to create window: {e}"))?;
    let mut limiter = FrameLimiter::new(engine.config().frame_delay);

    let mut frame = 0u64;
    loop {
        if window.poll_events() == WindowEvent::Quit {
            info!("Window closed after {frame} frames");
            break;
        }
        if frames.is_some_and(|limit| frame >= limit) {
            break;
        }

        let angle = engine.config().angle_for_frame(frame);
        engine.render_frame(mesh, angle);
        engine.flip_for_display();
        window.present(engine.frame_buffer()).map_err(anyhow::Error::msg)?;

        let delta = limiter.wait_and_get_delta();
        debug!("Frame {frame} took {:.1} ms", delta.as_secs_f64() * 1000.0);
        frame += 1;
    }
    Ok(())
}
