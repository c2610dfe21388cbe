//! # Mesh Data Structure
//!
//! Core mesh representation with parallel per-vertex attributes and a flat
//! triangle index buffer.

use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
use glam::{DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// A triangle mesh with per-vertex positions, normals, and texture
/// coordinates.
///
/// The three attribute buffers are always the same length, and the index
/// buffer holds a multiple of three entries, each a valid vertex index. All
/// geometry calculations use f64 internally; export to f32 only happens at
/// the GPU boundary via the `*_f32()` methods.
///
/// # Example
///
/// ```rust
/// use shape_mesh::MeshData;
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = MeshData::new();
/// mesh.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::new(0.0, 0.0));
/// mesh.add_vertex(DVec3::X, DVec3::Z, DVec2::new(1.0, 0.0));
/// mesh.add_vertex(DVec3::Y, DVec3::Z, DVec2::new(0.0, 1.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshData {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Unit vertex normals, parallel to `vertices`
    normals: Vec<DVec3>,
    /// Texture coordinates, parallel to `vertices`
    tex_coords: Vec<DVec2>,
    /// Triangle indices, three per triangle
    triangle_indices: Vec<u32>,
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            tex_coords: Vec::with_capacity(vertex_count),
            triangle_indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Creates a mesh from pre-built buffers.
    ///
    /// # Panics
    ///
    /// Panics if the attribute buffers have different lengths, if the index
    /// buffer is not a multiple of three, or if any index is out of bounds.
    /// Handing over mismatched buffers is a programming error, not a
    /// recoverable condition. Use [`MeshData::try_new`] to get a `Result`
    /// instead.
    pub fn from_buffers(
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        tex_coords: Vec<DVec2>,
        triangle_indices: Vec<u32>,
    ) -> Self {
        assert!(
            vertices.len() == normals.len() && vertices.len() == tex_coords.len(),
            "mismatched attribute lengths: {} vertices, {} normals, {} tex coords",
            vertices.len(),
            normals.len(),
            tex_coords.len()
        );
        assert!(
            triangle_indices.len() % 3 == 0,
            "index buffer length {} is not a multiple of 3",
            triangle_indices.len()
        );
        let vertex_count = vertices.len() as u32;
        assert!(
            triangle_indices.iter().all(|&i| i < vertex_count),
            "triangle index out of bounds for {vertex_count} vertices"
        );

        Self {
            vertices,
            normals,
            tex_coords,
            triangle_indices,
        }
    }

    /// Creates a mesh from pre-built buffers, reporting malformed input as an
    /// error instead of panicking.
    pub fn try_new(
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        tex_coords: Vec<DVec2>,
        triangle_indices: Vec<u32>,
    ) -> Result<Self, MeshError> {
        let mesh = Self {
            vertices,
            normals,
            tex_coords,
            triangle_indices,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangle_indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex with its normal and texture coordinate, returning the
    /// new index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3, tex_coord: DVec2) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.tex_coords.push(tex_coord);
        index
    }

    /// Adds a triangle by vertex indices, counter-clockwise viewed from
    /// outside.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangle_indices.push(v0);
        self.triangle_indices.push(v1);
        self.triangle_indices.push(v2);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the texture coordinates.
    #[inline]
    pub fn tex_coords(&self) -> &[DVec2] {
        &self.tex_coords
    }

    /// Returns the flat triangle index buffer.
    #[inline]
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangle_indices
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        let base = index * 3;
        [
            self.triangle_indices[base],
            self.triangle_indices[base + 1],
            self.triangle_indices[base + 2],
        ]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Translates all vertices by a vector. Normals are unaffected.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Rotates all vertices and normals about the origin.
    pub fn rotate(&mut self, rotation: DQuat) {
        for v in &mut self.vertices {
            *v = rotation * *v;
        }
        for n in &mut self.normals {
            *n = rotation * *n;
        }
    }

    /// Merges another mesh into this one, offsetting its indices past the
    /// existing vertices.
    pub fn merge(&mut self, other: &MeshData) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.tex_coords.extend_from_slice(&other.tex_coords);

        self.triangle_indices
            .extend(other.triangle_indices.iter().map(|&i| i + offset));
    }

    /// Validates the mesh for structural correctness.
    ///
    /// Checks:
    /// - Attribute buffers have matching lengths
    /// - Index buffer length is a multiple of three
    /// - All indices are in bounds
    /// - No triangle repeats a vertex index
    /// - Vertex and triangle counts stay within the configured limits
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.vertices.len() != self.normals.len() || self.vertices.len() != self.tex_coords.len()
        {
            return Err(MeshError::MismatchedAttributes {
                vertices: self.vertices.len(),
                normals: self.normals.len(),
                tex_coords: self.tex_coords.len(),
            });
        }

        if self.triangle_indices.len() % 3 != 0 {
            return Err(MeshError::RaggedIndexBuffer {
                len: self.triangle_indices.len(),
            });
        }

        if self.vertices.len() > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: self.vertices.len(),
                max: MAX_VERTICES,
            });
        }

        if self.triangle_count() > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count: self.triangle_count(),
                max: MAX_TRIANGLES,
            });
        }

        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.triangle_indices.chunks_exact(3).enumerate() {
            for &index in tri {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfBounds {
                        index,
                        vertex_count,
                    });
                }
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::DegenerateTriangle { triangle });
            }
        }

        Ok(())
    }

    /// Exports vertices as a flattened f32 array for the GPU.
    ///
    /// Returns `[x, y, z, x, y, z, ...]`.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports normals as a flattened f32 array for the GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.normals.len() * 3);
        for n in &self.normals {
            result.push(n.x as f32);
            result.push(n.y as f32);
            result.push(n.z as f32);
        }
        result
    }

    /// Exports texture coordinates as a flattened f32 array for the GPU.
    ///
    /// Returns `[u, v, u, v, ...]`.
    pub fn tex_coords_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.tex_coords.len() * 2);
        for t in &self.tex_coords {
            result.push(t.x as f32);
            result.push(t.y as f32);
        }
        result
    }
}
