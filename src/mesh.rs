//! Mesh representation consumed by the renderers.
//!
//! A [`Mesh`] is an ordered list of vertex positions, a list of triangles
//! indexing into it, and optionally one texture coordinate per vertex. The
//! renderers consume meshes; apart from OBJ loading, nothing here builds or
//! modifies geometry.

use log::debug;
use thiserror::Error;

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// A triangle defined by three indices into a mesh's vertex list (0-based).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// The three vertex indices in winding order.
    pub const fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

/// Errors produced while loading a mesh from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to load OBJ: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("OBJ file contains no mesh data")]
    Empty,
}

/// A triangle mesh with optional per-vertex texture coordinates.
///
/// `texcoords` is either empty (no UV layout) or aligned one-to-one with
/// `vertices`. Face indices are not validated on construction; the renderers
/// check them up front and fail fast.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    texcoords: Vec<Vec2>,
}

impl Mesh {
    /// Create a mesh without texture coordinates.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            faces,
            texcoords: Vec::new(),
        }
    }

    /// Create a mesh with one texture coordinate per vertex.
    pub fn with_texcoords(vertices: Vec<Vec3>, faces: Vec<Face>, texcoords: Vec<Vec2>) -> Self {
        Self {
            vertices,
            faces,
            texcoords,
        }
    }

    /// An axis-aligned cube spanning [-1, 1] on each axis.
    ///
    /// Faces wind counter-clockwise seen from outside the cube, so every
    /// face pointing toward the camera is front-facing.
    pub fn unit_cube() -> Self {
        let vertices = vec![
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
        ];
        let faces = vec![
            // Front (+z)
            Face::new(0, 1, 2),
            Face::new(0, 2, 3),
            // Right (+x)
            Face::new(1, 5, 6),
            Face::new(1, 6, 2),
            // Back (-z)
            Face::new(5, 4, 7),
            Face::new(5, 7, 6),
            // Left (-x)
            Face::new(4, 0, 3),
            Face::new(4, 3, 7),
            // Top (+y)
            Face::new(3, 2, 6),
            Face::new(3, 6, 7),
            // Bottom (-y)
            Face::new(4, 5, 1),
            Face::new(4, 1, 0),
        ];
        Self::new(vertices, faces)
    }

    /// Load a mesh from an OBJ file.
    ///
    /// Faces are triangulated and indices unified, so texture coordinates
    /// (when present) come out aligned one-to-one with vertex positions.
    /// All objects/groups in the file are merged into a single mesh.
    pub fn from_obj(file_path: &str) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj(
            file_path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        let mut texcoords = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let base = vertices.len() as u32;

            for p in mesh.positions.chunks_exact(3) {
                vertices.push(Vec3::new(p[0], p[1], p[2]));
            }
            for t in mesh.texcoords.chunks_exact(2) {
                texcoords.push(Vec2::new(t[0], t[1]));
            }
            for tri in mesh.indices.chunks_exact(3) {
                faces.push(Face::new(base + tri[0], base + tri[1], base + tri[2]));
            }
        }

        if vertices.is_empty() {
            return Err(LoadError::Empty);
        }

        // Mixed groups (some with UVs, some without) break the per-vertex
        // alignment invariant; treat the UV layout as absent in that case.
        if !texcoords.is_empty() && texcoords.len() != vertices.len() {
            debug!(
                "discarding partial texcoords ({} for {} vertices) from {}",
                texcoords.len(),
                vertices.len(),
                file_path
            );
            texcoords.clear();
        }

        debug!(
            "loaded {}: {} vertices, {} triangles, texcoords: {}",
            file_path,
            vertices.len(),
            faces.len(),
            !texcoords.is_empty()
        );

        Ok(Self {
            vertices,
            faces,
            texcoords,
        })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Per-vertex texture coordinates; empty when the mesh has no UV layout.
    pub fn texcoords(&self) -> &[Vec2] {
        &self.texcoords
    }

    pub fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }
}
