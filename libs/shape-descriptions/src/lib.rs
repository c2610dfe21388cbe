//! # Shape Descriptions
//!
//! Parameter descriptions for the canonical 3D solids that `shape-mesh` can
//! tessellate. A description is a tagged value carrying only the numeric
//! parameters of one shape; the tessellation resolution travels alongside it
//! in [`MeshResolution`], never inside the variant.
//!
//! ## Architecture
//!
//! ```text
//! shape-descriptions (ShapeDescription) → shape-mesh (MeshData)
//! ```
//!
//! Descriptions are plain data: there is no change-listener machinery. A
//! caller that mutates parameters (for example a live polygon resize)
//! regenerates by handing the updated description to the mesh crate again.

pub mod description;
pub mod resolution;

pub use description::ShapeDescription;
pub use resolution::MeshResolution;
