//! # Mesh Errors
//!
//! Error types reported by [`MeshData`](crate::MeshData) construction and
//! validation.

use thiserror::Error;

/// Errors describing a malformed mesh.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// Vertex attribute buffers have different lengths
    #[error(
        "Mismatched attribute lengths: {vertices} vertices, {normals} normals, \
         {tex_coords} texture coordinates"
    )]
    MismatchedAttributes {
        vertices: usize,
        normals: usize,
        tex_coords: usize,
    },

    /// Index buffer length is not a multiple of three
    #[error("Index buffer length {len} is not a multiple of 3")]
    RaggedIndexBuffer { len: usize },

    /// A triangle references a vertex that does not exist
    #[error("Index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },

    /// A triangle references the same vertex more than once
    #[error("Triangle {triangle} repeats a vertex index")]
    DegenerateTriangle { triangle: usize },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },
}
