//! # Description Dispatch
//!
//! Converts a [`ShapeDescription`] into a [`MeshData`] by routing each
//! variant to its generator.

use shape_descriptions::{MeshResolution, ShapeDescription};

use crate::mesh::MeshData;
use crate::primitives::{
    create_arc_torus, create_box, create_capsule, create_cone, create_cylinder,
    create_ellipsoid, create_extruded_polygon, create_hemi_ellipsoid, create_line,
    create_polygon_2d, create_pyramid_box, create_sphere, create_tetrahedron, create_torus,
    create_truncated_cone, create_wedge,
};

/// Generates the triangle mesh for a shape description at the given
/// resolution.
///
/// The match is exhaustive, so a new description variant will not compile
/// until it is routed here. Returns `None` only for the polygon-based
/// shapes, whose vertex lists can fail to describe a renderable surface;
/// every parametric shape always produces a mesh.
///
/// # Example
///
/// ```rust
/// use shape_descriptions::{MeshResolution, ShapeDescription};
/// use shape_mesh::description_to_mesh;
///
/// let shape = ShapeDescription::Sphere { radius: 1.0 };
/// let mesh = description_to_mesh(&shape, &MeshResolution::default()).unwrap();
/// assert!(mesh.validate().is_ok());
/// ```
pub fn description_to_mesh(
    description: &ShapeDescription,
    resolution: &MeshResolution,
) -> Option<MeshData> {
    match *description {
        ShapeDescription::Sphere { radius } => {
            Some(create_sphere(radius, resolution.latitude, resolution.longitude))
        }
        ShapeDescription::Ellipsoid {
            x_radius,
            y_radius,
            z_radius,
        } => Some(create_ellipsoid(
            x_radius,
            y_radius,
            z_radius,
            resolution.latitude,
            resolution.longitude,
        )),
        ShapeDescription::HemiEllipsoid {
            x_radius,
            y_radius,
            z_radius,
        } => Some(create_hemi_ellipsoid(
            x_radius,
            y_radius,
            z_radius,
            resolution.latitude,
            resolution.longitude,
        )),
        ShapeDescription::Capsule {
            height,
            x_radius,
            y_radius,
            z_radius,
        } => Some(create_capsule(
            height,
            x_radius,
            y_radius,
            z_radius,
            resolution.latitude,
            resolution.longitude,
        )),
        ShapeDescription::Cylinder {
            radius,
            height,
            centered,
        } => Some(create_cylinder(radius, height, resolution.resolution, centered)),
        ShapeDescription::Cone { height, radius } => {
            Some(create_cone(height, radius, resolution.resolution))
        }
        ShapeDescription::TruncatedCone {
            height,
            x_base_radius,
            y_base_radius,
            x_top_radius,
            y_top_radius,
        } => Some(create_truncated_cone(
            height,
            x_base_radius,
            y_base_radius,
            x_top_radius,
            y_top_radius,
            resolution.resolution,
        )),
        ShapeDescription::Torus {
            major_radius,
            minor_radius,
        } => Some(create_torus(major_radius, minor_radius, resolution.resolution)),
        ShapeDescription::ArcTorus {
            start_angle,
            end_angle,
            major_radius,
            minor_radius,
        } => Some(create_arc_torus(
            start_angle,
            end_angle,
            major_radius,
            minor_radius,
            resolution.resolution,
        )),
        ShapeDescription::Box {
            x_size,
            y_size,
            z_size,
            centered,
        } => Some(create_box(x_size, y_size, z_size, centered)),
        ShapeDescription::Wedge {
            x_size,
            y_size,
            z_size,
        } => Some(create_wedge(x_size, y_size, z_size)),
        ShapeDescription::PyramidBox {
            box_x_size,
            box_y_size,
            box_z_size,
            pyramid_height,
        } => Some(create_pyramid_box(
            box_x_size,
            box_y_size,
            box_z_size,
            pyramid_height,
        )),
        ShapeDescription::Tetrahedron { edge_length } => Some(create_tetrahedron(edge_length)),
        ShapeDescription::Polygon {
            ref vertices,
            counter_clockwise,
        } => create_polygon_2d(None, vertices, counter_clockwise),
        ShapeDescription::ExtrudedPolygon {
            ref vertices,
            counter_clockwise,
            top_z,
            bottom_z,
        } => create_extruded_polygon(vertices, counter_clockwise, top_z, bottom_z),
        ShapeDescription::Line { start, end, width } => Some(create_line(start, end, width)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_parametric_shape_generates() {
        let resolution = MeshResolution::default();
        let shapes = [
            ShapeDescription::Sphere { radius: 1.0 },
            ShapeDescription::Ellipsoid {
                x_radius: 1.0,
                y_radius: 2.0,
                z_radius: 3.0,
            },
            ShapeDescription::HemiEllipsoid {
                x_radius: 1.0,
                y_radius: 1.0,
                z_radius: 2.0,
            },
            ShapeDescription::Capsule {
                height: 1.0,
                x_radius: 0.5,
                y_radius: 0.5,
                z_radius: 0.5,
            },
            ShapeDescription::Cylinder {
                radius: 1.0,
                height: 2.0,
                centered: true,
            },
            ShapeDescription::Cone {
                height: 1.0,
                radius: 0.5,
            },
            ShapeDescription::TruncatedCone {
                height: 1.0,
                x_base_radius: 1.0,
                y_base_radius: 1.0,
                x_top_radius: 0.5,
                y_top_radius: 0.5,
            },
            ShapeDescription::Torus {
                major_radius: 1.0,
                minor_radius: 0.25,
            },
            ShapeDescription::ArcTorus {
                start_angle: 0.0,
                end_angle: std::f64::consts::PI,
                major_radius: 1.0,
                minor_radius: 0.25,
            },
            ShapeDescription::Box {
                x_size: 1.0,
                y_size: 1.0,
                z_size: 1.0,
                centered: true,
            },
            ShapeDescription::Wedge {
                x_size: 1.0,
                y_size: 1.0,
                z_size: 1.0,
            },
            ShapeDescription::PyramidBox {
                box_x_size: 1.0,
                box_y_size: 1.0,
                box_z_size: 1.0,
                pyramid_height: 0.5,
            },
            ShapeDescription::Tetrahedron { edge_length: 1.0 },
            ShapeDescription::Line {
                start: glam::DVec3::ZERO,
                end: glam::DVec3::new(1.0, 2.0, 3.0),
                width: 0.05,
            },
        ];

        for shape in &shapes {
            let mesh = description_to_mesh(shape, &resolution)
                .unwrap_or_else(|| panic!("{} should always generate", shape.name()));
            assert!(mesh.validate().is_ok(), "{} failed validation", shape.name());
            assert!(!mesh.is_empty(), "{} produced no vertices", shape.name());
        }
    }

    #[test]
    fn test_unrenderable_polygon_is_none() {
        let shape = ShapeDescription::Polygon {
            vertices: vec![glam::DVec2::ZERO, glam::DVec2::ONE],
            counter_clockwise: true,
        };
        assert!(description_to_mesh(&shape, &MeshResolution::default()).is_none());
    }
}
