use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scanrast::bench::{FrameBuffer, Rasterizer, ScanlineRasterizer, ScreenTriangle, DEPTH_CLEAR};
use scanrast::math::{Vec2, Vec2i, Vec3, Vec3i};
use scanrast::mesh::{Face, Mesh};
use scanrast::texture::Texture;
use scanrast::{Engine, RenderConfig};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

struct Buffers {
    color: Vec<u32>,
    depth: Vec<i32>,
}

impl Buffers {
    fn new() -> Self {
        let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
        Self {
            color: vec![0; size],
            depth: vec![DEPTH_CLEAR; size],
        }
    }

    /// Fresh depth so every iteration rasterizes the full triangle.
    fn view(&mut self) -> FrameBuffer<'_> {
        self.depth.fill(DEPTH_CLEAR);
        FrameBuffer::new(&mut self.color, &mut self.depth, BUFFER_WIDTH, BUFFER_HEIGHT)
    }
}

fn triangle(points: [(i32, i32); 3]) -> ScreenTriangle {
    ScreenTriangle::new(
        points.map(|(x, y)| Vec3i::new(x, y, 100)),
        [0.2, 0.6, 1.0],
        [Vec2i::new(0, 0), Vec2i::new(63, 0), Vec2i::new(32, 63)],
    )
}

fn checker_texture() -> Texture {
    let data = (0..64 * 64)
        .map(|i| if (i / 8 + i / 512) % 2 == 0 { 0xFFFFFFFF } else { 0xFF808080 })
        .collect();
    Texture::from_pixels(64, 64, data)
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let scanline = ScanlineRasterizer::new();
    let texture = checker_texture();

    for (name, tri) in [
        ("small", triangle([(100, 100), (120, 100), (110, 120)])),
        ("medium", triangle([(100, 100), (300, 100), (200, 300)])),
        ("large", triangle([(50, 50), (750, 100), (400, 550)])),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &tri, |b, tri| {
            let mut buffers = Buffers::new();
            b.iter(|| {
                let mut fb = buffers.view();
                scanline.fill_triangle(black_box(tri), &mut fb, &texture)
            });
        });
    }

    group.finish();
}

/// A flat `n x n` grid of quads facing the camera.
fn grid_mesh(n: usize) -> Mesh {
    let mut vertices = Vec::new();
    let mut texcoords = Vec::new();
    for row in 0..=n {
        for col in 0..=n {
            let u = col as f32 / n as f32;
            let v = row as f32 / n as f32;
            vertices.push(Vec3::new(u - 0.5, v - 0.5, 0.0));
            texcoords.push(Vec2::new(u, v));
        }
    }

    let mut faces = Vec::new();
    for row in 0..n {
        for col in 0..n {
            let a = row * (n + 1) + col;
            let (b, c, d) = (a + 1, a + n + 2, a + n + 1);
            for tri in [[a, b, c], [a, c, d]] {
                faces.push(Face {
                    vertices: tri,
                    normals: [0; 3],
                    texcoords: tri,
                });
            }
        }
    }

    let mut mesh = Mesh::new(vertices, vec![Vec3::FORWARD], texcoords, faces)
        .expect("grid mesh is well formed");
    mesh.set_texture(checker_texture());
    mesh
}

fn benchmark_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");

    let mesh = grid_mesh(20);
    let mut engine = Engine::new(RenderConfig::default());

    group.bench_function("grid_800_triangles", |b| {
        let mut angle = 0.0;
        b.iter(|| {
            angle = (angle + 10.0) % 360.0;
            engine.render_frame(black_box(&mesh), angle)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_full_frame);
criterion_main!(benches);
