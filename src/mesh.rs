//! Triangle meshes and the read-only interface the renderer consumes.
//!
//! [`MeshSource`] is everything the frame driver needs from a model: vertex
//! positions, triangle faces, per-corner normals and texel coordinates, and a
//! diffuse texture to sample. [`Mesh`] is the in-memory implementation, loaded
//! from Wavefront OBJ files.

use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::colors;
use crate::math::vec2::{Vec2, Vec2i};
use crate::math::vec3::Vec3;
use crate::texture::{Texture, TextureSource};

/// File suffixes tried, in order, for the diffuse map next to an OBJ file.
const DIFFUSE_SUFFIXES: [&str; 3] = ["_diffuse.tga", "_diffuse.png", "_diffuse.jpg"];

/// Errors from loading or assembling a mesh.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse OBJ file: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("mesh has no triangles")]
    Empty,

    #[error("face {face} references {kind} {index}, but only {count} exist")]
    IndexOutOfRange {
        face: usize,
        kind: &'static str,
        index: usize,
        count: usize,
    },
}

/// Read-only view of a textured, lit triangle mesh.
pub trait MeshSource {
    type Texture: TextureSource + ?Sized;

    fn vertex_count(&self) -> usize;

    fn face_count(&self) -> usize;

    fn vertex(&self, index: usize) -> Vec3;

    /// Vertex indices of a triangle.
    fn face(&self, face: usize) -> [usize; 3];

    /// Normal at corner `corner` (0..3) of `face`.
    fn normal(&self, face: usize, corner: usize) -> Vec3;

    /// Texel coordinate at corner `corner` (0..3) of `face`.
    fn uv(&self, face: usize, corner: usize) -> Vec2i;

    /// The diffuse texture that [`MeshSource::uv`] indexes into.
    fn texture(&self) -> &Self::Texture;
}

/// One triangle: indices into the position, normal and texcoord arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub vertices: [usize; 3],
    pub normals: [usize; 3],
    pub texcoords: [usize; 3],
}

pub struct Mesh {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    /// Normalized texture coordinates, `v = 0` at the bottom.
    texcoords: Vec<Vec2>,
    faces: Vec<Face>,
    texture: Texture,
}

impl Mesh {
    /// Assemble a mesh from raw arrays, checking every face index.
    ///
    /// The mesh starts with a plain white texture.
    pub fn new(
        vertices: Vec<Vec3>,
        normals: Vec<Vec3>,
        texcoords: Vec<Vec2>,
        faces: Vec<Face>,
    ) -> Result<Self, LoadError> {
        if faces.is_empty() {
            return Err(LoadError::Empty);
        }

        for (face_index, face) in faces.iter().enumerate() {
            let checks = [
                ("vertex", &face.vertices, vertices.len()),
                ("normal", &face.normals, normals.len()),
                ("texcoord", &face.texcoords, texcoords.len()),
            ];
            for (kind, indices, count) in checks {
                if let Some(&index) = indices.iter().find(|&&i| i >= count) {
                    return Err(LoadError::IndexOutOfRange {
                        face: face_index,
                        kind,
                        index,
                        count,
                    });
                }
            }
        }

        Ok(Self {
            vertices,
            normals,
            texcoords,
            faces,
            texture: Texture::solid(colors::WHITE),
        })
    }

    /// Load a mesh from an OBJ file, together with its diffuse map.
    ///
    /// The diffuse map is looked up next to the OBJ as `<stem>_diffuse.tga`
    /// (then `.png`, `.jpg`). When none exists the mesh keeps a white
    /// texture. All objects in the file are merged into one mesh.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut mesh = Self::load_geometry(path)?;

        match Self::find_diffuse_map(path) {
            Some(texture_path) => mesh.load_texture(texture_path)?,
            None => warn!(
                "No diffuse map found next to {}, using plain white",
                path.display()
            ),
        }

        Ok(mesh)
    }

    /// Replace the diffuse texture with the image at `path`.
    pub fn load_texture<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        let texture = Texture::from_file(path).map_err(|source| LoadError::Texture {
            path: path.to_path_buf(),
            source,
        })?;
        self.texture = texture;
        Ok(())
    }

    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = texture;
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    fn find_diffuse_map(obj_path: &Path) -> Option<PathBuf> {
        let stem = obj_path.file_stem()?.to_string_lossy().into_owned();
        let dir = obj_path.parent().unwrap_or_else(|| Path::new(""));
        DIFFUSE_SUFFIXES
            .iter()
            .map(|suffix| dir.join(format!("{stem}{suffix}")))
            .find(|candidate| candidate.exists())
    }

    fn load_geometry(path: &Path) -> Result<Self, LoadError> {
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: false,
            ..Default::default()
        };
        let (models, _materials) = tobj::load_obj(path, &options)?;

        let mut vertices = Vec::new();
        let mut normals = Vec::new();
        let mut texcoords = Vec::new();
        let mut faces = Vec::new();
        let mut missing_texcoords = false;
        let mut missing_normals = false;

        for model in &models {
            let m = &model.mesh;
            let vertex_base = vertices.len();
            let normal_base = normals.len();
            let texcoord_base = texcoords.len();

            vertices.extend(
                m.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            normals.extend(m.normals.chunks_exact(3).map(|n| Vec3::new(n[0], n[1], n[2])));
            texcoords.extend(m.texcoords.chunks_exact(2).map(|t| Vec2::new(t[0], t[1])));

            let has_normals = m.normal_indices.len() == m.indices.len();
            let has_texcoords = m.texcoord_indices.len() == m.indices.len();
            missing_normals |= !has_normals;
            missing_texcoords |= !has_texcoords;

            for (tri, corners) in m.indices.chunks_exact(3).enumerate() {
                let vertex_ids = [0, 1, 2].map(|k| vertex_base + corners[k] as usize);

                let normal_ids = if has_normals {
                    [0, 1, 2].map(|k| normal_base + m.normal_indices[3 * tri + k] as usize)
                } else {
                    // Fall back to the flat face normal, appended after the
                    // file's own normals.
                    let [a, b, c] = vertex_ids.map(|i| vertices.get(i).copied());
                    let normal = match (a, b, c) {
                        (Some(a), Some(b), Some(c)) => {
                            (b - a).cross(c - a).try_normalize().unwrap_or(Vec3::FORWARD)
                        }
                        _ => Vec3::FORWARD,
                    };
                    normals.push(normal);
                    [normals.len() - 1; 3]
                };

                let texcoord_ids = if has_texcoords {
                    [0, 1, 2].map(|k| texcoord_base + m.texcoord_indices[3 * tri + k] as usize)
                } else {
                    if texcoords.is_empty() {
                        texcoords.push(Vec2::ZERO);
                    }
                    [0; 3]
                };

                faces.push(Face {
                    vertices: vertex_ids,
                    normals: normal_ids,
                    texcoords: texcoord_ids,
                });
            }
        }

        if missing_normals {
            warn!("{} lacks vertex normals, using face normals", path.display());
        }
        if missing_texcoords {
            warn!("{} lacks texture coordinates", path.display());
        }

        let mesh = Self::new(vertices, normals, texcoords, faces)?;
        info!(
            "Loaded mesh {} ({} vertices, {} faces)",
            path.display(),
            mesh.vertex_count(),
            mesh.face_count()
        );
        Ok(mesh)
    }
}

impl MeshSource for Mesh {
    type Texture = Texture;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Vec3 {
        self.vertices[index]
    }

    fn face(&self, face: usize) -> [usize; 3] {
        self.faces[face].vertices
    }

    fn normal(&self, face: usize, corner: usize) -> Vec3 {
        self.normals[self.faces[face].normals[corner]]
    }

    /// Scales the normalized coordinate by the texture size, truncating.
    fn uv(&self, face: usize, corner: usize) -> Vec2i {
        let uv = self.texcoords[self.faces[face].texcoords[corner]];
        Vec2i::new(
            (uv.x * self.texture.width() as f32) as i32,
            (uv.y * self.texture.height() as f32) as i32,
        )
    }

    fn texture(&self) -> &Texture {
        &self.texture
    }
}
