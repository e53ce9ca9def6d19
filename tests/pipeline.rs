use scanrast::bench::DEPTH_CLEAR;
use scanrast::colors;
use scanrast::prelude::*;

const WIDTH: u32 = 800;

/// One triangle in the z = 0 plane, facing the default camera.
fn facing_triangle() -> Mesh {
    Mesh::new(
        vec![
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
        ],
        vec![Vec3::FORWARD],
        vec![Vec2::ZERO],
        vec![Face {
            vertices: [0, 1, 2],
            normals: [0; 3],
            texcoords: [0; 3],
        }],
    )
    .unwrap()
}

fn depth_at(engine: &Engine, x: u32, y: u32) -> i32 {
    engine.renderer().depth_buffer()[(x + y * WIDTH) as usize]
}

fn color_at(engine: &Engine, x: u32, y: u32) -> u32 {
    engine.renderer().color_buffer()[(x + y * WIDTH) as usize]
}

#[test]
fn facing_triangle_is_lit_at_screen_center() {
    let mesh = facing_triangle();
    let mut engine = Engine::new(RenderConfig::default());
    let stats = engine.render_frame(&mesh, 0.0);

    assert_eq!(stats.triangles_drawn, 1);
    assert_eq!(stats.triangles_skipped, 0);
    assert!(stats.pixels_written > 0);

    // z = 0 lands mid-way through the depth range.
    assert_eq!(depth_at(&engine, 400, 400), 128);

    // Intensity is 1/sqrt(3) boosted by 1.2 on a white texture.
    let (r, g, b) = colors::channels(color_at(&engine, 400, 400));
    assert_eq!(r, g);
    assert_eq!(g, b);
    assert!((170..=180).contains(&r), "unexpected shade {r}");

    // Corners of the target stay untouched.
    assert_eq!(depth_at(&engine, 0, 0), DEPTH_CLEAR);
    assert_eq!(color_at(&engine, 0, 0), colors::BACKGROUND);
}

#[test]
fn pixel_count_matches_depth_writes() {
    let mesh = facing_triangle();
    let mut engine = Engine::new(RenderConfig::default());
    let stats = engine.render_frame(&mesh, 0.0);

    let covered = engine
        .renderer()
        .depth_buffer()
        .iter()
        .filter(|&&d| d != DEPTH_CLEAR)
        .count();
    assert_eq!(stats.pixels_written, covered);
}

#[test]
fn frames_start_from_clear_buffers() {
    let mesh = facing_triangle();
    let mut engine = Engine::new(RenderConfig::default());

    let first = engine.render_frame(&mesh, 0.0);
    let snapshot = engine.renderer().color_buffer().to_vec();
    let second = engine.render_frame(&mesh, 0.0);

    assert_eq!(first, second);
    assert_eq!(engine.renderer().color_buffer(), snapshot.as_slice());
}

#[test]
fn back_facing_triangle_is_drawn_black() {
    let mesh = facing_triangle();
    let mut engine = Engine::new(RenderConfig::default());
    engine.render_frame(&mesh, 180.0);

    assert_eq!(depth_at(&engine, 400, 400), 128);
    assert_eq!(colors::channels(color_at(&engine, 400, 400)), (0, 0, 0));
}

#[test]
fn vertex_on_eye_plane_skips_triangle() {
    let mesh = Mesh::new(
        vec![
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
        ],
        vec![Vec3::FORWARD],
        vec![Vec2::ZERO],
        vec![Face {
            vertices: [0, 1, 2],
            normals: [0; 3],
            texcoords: [0; 3],
        }],
    )
    .unwrap();
    let mut engine = Engine::new(RenderConfig::default());
    let stats = engine.render_frame(&mesh, 0.0);

    assert_eq!(stats.triangles_drawn, 0);
    assert_eq!(stats.triangles_skipped, 1);
    assert_eq!(stats.pixels_written, 0);
}

#[test]
fn triangle_grazing_the_eye_plane_finishes_quickly() {
    // Projects to roughly +-3e6 pixels, far beyond the target.
    let mesh = Mesh::new(
        vec![
            Vec3::new(-0.5, -0.5, 1.9999),
            Vec3::new(0.5, -0.5, 1.9999),
            Vec3::new(0.0, 0.5, 1.9999),
        ],
        vec![Vec3::FORWARD],
        vec![Vec2::ZERO],
        vec![Face {
            vertices: [0, 1, 2],
            normals: [0; 3],
            texcoords: [0; 3],
        }],
    )
    .unwrap();
    let mut engine = Engine::new(RenderConfig::default());

    let start = std::time::Instant::now();
    let stats = engine.render_frame(&mesh, 0.0);
    assert!(start.elapsed() < std::time::Duration::from_secs(30));

    assert_eq!(stats.triangles_drawn, 1);
    assert_eq!(stats.pixels_written, (WIDTH * WIDTH) as usize);
}

#[test]
fn nearer_triangle_wins_regardless_of_order() {
    let quad = |z: f32| {
        [
            Vec3::new(-0.5, -0.5, z),
            Vec3::new(0.5, -0.5, z),
            Vec3::new(0.0, 0.5, z),
        ]
    };
    let build = |first: f32, second: f32| {
        let mut vertices = quad(first).to_vec();
        vertices.extend(quad(second));
        let mut mesh = Mesh::new(
            vertices,
            vec![Vec3::FORWARD],
            vec![Vec2::ZERO, Vec2::new(0.99, 0.0)],
            vec![
                Face {
                    vertices: [0, 1, 2],
                    normals: [0; 3],
                    texcoords: [0; 3],
                },
                Face {
                    vertices: [3, 4, 5],
                    normals: [0; 3],
                    texcoords: [1; 3],
                },
            ],
        )
        .unwrap();
        // Left texel red, right texel blue.
        mesh.set_texture(Texture::from_pixels(
            2,
            1,
            vec![colors::rgb(255, 0, 0), colors::rgb(0, 0, 255)],
        ));
        mesh
    };

    let mut engine = Engine::new(RenderConfig::default());

    // The second face is nearer in both meshes only when its z is larger.
    engine.render_frame(&build(0.0, 0.5), 0.0);
    let near_second = color_at(&engine, 400, 400);
    engine.render_frame(&build(0.5, 0.0), 0.0);
    let near_first = color_at(&engine, 400, 400);

    let (r, _, b) = colors::channels(near_second);
    assert!(b > 0 && r == 0, "nearer blue face should cover the pixel");
    let (r, _, b) = colors::channels(near_first);
    assert!(r > 0 && b == 0, "nearer red face should cover the pixel");
}

#[test]
fn flip_moves_bottom_rows_to_top() {
    let mesh = facing_triangle();
    let mut engine = Engine::new(RenderConfig::default());
    engine.render_frame(&mesh, 0.0);
    let before = engine.renderer().color_buffer().to_vec();
    engine.flip_for_display();

    let height = engine.config().height;
    for y in [0, 260, 400, 799] {
        let row = (y * WIDTH) as usize..((y + 1) * WIDTH) as usize;
        let flipped = ((height - 1 - y) * WIDTH) as usize..((height - y) * WIDTH) as usize;
        assert_eq!(&engine.renderer().color_buffer()[flipped], &before[row]);
    }
}
