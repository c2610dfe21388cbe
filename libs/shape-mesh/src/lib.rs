//! # Shape Mesh
//!
//! Procedural triangle-mesh generation for the canonical solids of
//! `shape-descriptions`. Every generator emits a [`MeshData`] carrying
//! parallel per-vertex positions, normals, and texture coordinates plus a
//! flat triangle index buffer.
//!
//! ## Architecture
//!
//! ```text
//! ShapeDescription → description_to_mesh → MeshData → f32 export (GPU)
//! ```
//!
//! All geometry is computed in f64 via glam; the f32 conversion happens only
//! through the `*_f32()` export methods on [`MeshData`].
//!
//! ## Conventions
//!
//! - z-up, right-handed, counter-clockwise winding viewed from outside.
//! - Normals are unit length and authored analytically per shape, never
//!   recovered from the triangles.
//! - Curved shapes duplicate one vertex column along the texture seam so the
//!   u coordinate can run the full [0, 1] range.
//!
//! ## Example
//!
//! ```rust
//! use shape_mesh::primitives::create_sphere;
//!
//! let sphere = create_sphere(1.0, 16, 16);
//! assert!(sphere.validate().is_ok());
//! assert_eq!(sphere.triangle_indices().len() % 3, 0);
//! ```

pub mod error;
pub mod from_description;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use from_description::description_to_mesh;
pub use mesh::MeshData;
