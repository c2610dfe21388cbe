//! # Primitive Shape Generators
//!
//! One tessellation routine per canonical solid, grouped by family:
//!
//! - [`revolution`]: pole-capped surfaces of revolution (sphere, ellipsoid,
//!   hemi-ellipsoid, capsule)
//! - [`tube`]: ring-based sweeps (cylinder, cone, truncated cone, torus)
//! - [`polytope`]: fixed vertex tables (box, wedge, pyramid box, tetrahedron)
//! - [`planar`]: polygon fans and their derivatives (polygon, extrusion,
//!   rectangle, line)
//!
//! All generators share the crate conventions: z-up, counter-clockwise
//! winding from outside, analytic unit normals, and a duplicated seam column
//! on curved shapes for clean texture wrapping.

pub mod planar;
pub mod polytope;
pub mod revolution;
pub mod tube;

pub use planar::{
    create_extruded_polygon, create_flat_rectangle, create_flat_rectangle_from_bounds,
    create_line, create_polygon_2d, create_polygon_3d,
};
pub use polytope::{create_box, create_pyramid_box, create_tetrahedron, create_wedge};
pub use revolution::{create_capsule, create_ellipsoid, create_hemi_ellipsoid, create_sphere};
pub use tube::{
    create_arc_torus, create_cone, create_cylinder, create_torus, create_truncated_cone,
};
