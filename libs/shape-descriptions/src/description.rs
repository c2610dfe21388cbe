//! # Shape Description
//!
//! The closed set of shape variants understood by the mesh generators.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Parameters describing one canonical 3D solid.
///
/// The set is closed: dispatching over it is an exhaustive `match`, so adding
/// a shape is a compile-time-checked, single-site change in the consumer.
///
/// All angles are radians. Unless a variant says otherwise, shapes follow the
/// z-up convention: revolution and tube axes are aligned with the z-axis, and
/// "centered" selects `z ∈ [-h/2, h/2]` over `z ∈ [0, h]`.
///
/// # Example
///
/// ```rust
/// use shape_descriptions::ShapeDescription;
///
/// let shape = ShapeDescription::Sphere { radius: 0.25 };
/// assert_eq!(shape.name(), "Sphere");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeDescription {
    /// Sphere centered at the origin.
    Sphere { radius: f64 },
    /// Ellipsoid centered at the origin with independent per-axis radii.
    Ellipsoid {
        x_radius: f64,
        y_radius: f64,
        z_radius: f64,
    },
    /// Top half of an ellipsoid, closed by a flat disk at z = 0.
    HemiEllipsoid {
        x_radius: f64,
        y_radius: f64,
        z_radius: f64,
    },
    /// Cylindrical body of the given height capped by two half ellipsoids,
    /// centered at the origin.
    Capsule {
        height: f64,
        x_radius: f64,
        y_radius: f64,
        z_radius: f64,
    },
    /// Circular cylinder along the z-axis.
    Cylinder {
        radius: f64,
        height: f64,
        centered: bool,
    },
    /// Circular cone with its base centered at the origin and apex at
    /// `z = height`.
    Cone { height: f64, radius: f64 },
    /// Truncated cone with elliptical base and top cross-sections; base
    /// centered at the origin.
    TruncatedCone {
        height: f64,
        x_base_radius: f64,
        y_base_radius: f64,
        x_top_radius: f64,
        y_top_radius: f64,
    },
    /// Closed torus around the z-axis, centroid at the origin.
    Torus { major_radius: f64, minor_radius: f64 },
    /// Partial torus swept from `start_angle` to `end_angle`; closed when the
    /// sweep spans a full turn, capped at both cut planes otherwise.
    ArcTorus {
        start_angle: f64,
        end_angle: f64,
        major_radius: f64,
        minor_radius: f64,
    },
    /// Axis-aligned box; x and y are always centered, `centered` selects the
    /// z placement.
    Box {
        x_size: f64,
        y_size: f64,
        z_size: f64,
        centered: bool,
    },
    /// Triangular prism (a box cut along the diagonal of its xz faces), with
    /// its bottom face centered at the origin.
    Wedge {
        x_size: f64,
        y_size: f64,
        z_size: f64,
    },
    /// Box extended with a pyramidal cap on its top and bottom faces,
    /// centered at the origin.
    PyramidBox {
        box_x_size: f64,
        box_y_size: f64,
        box_z_size: f64,
        pyramid_height: f64,
    },
    /// Regular tetrahedron with its base centered at the origin.
    Tetrahedron { edge_length: f64 },
    /// Convex polygon in the xy-plane, fan-triangulated.
    Polygon {
        vertices: Vec<DVec2>,
        counter_clockwise: bool,
    },
    /// Convex polygon extruded along the z-axis between `bottom_z` and
    /// `top_z`.
    ExtrudedPolygon {
        vertices: Vec<DVec2>,
        counter_clockwise: bool,
        top_z: f64,
        bottom_z: f64,
    },
    /// Line segment rendered as an oriented box of square cross-section.
    Line {
        start: DVec3,
        end: DVec3,
        width: f64,
    },
}

impl ShapeDescription {
    /// Returns the display name of the shape variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "Sphere",
            Self::Ellipsoid { .. } => "Ellipsoid",
            Self::HemiEllipsoid { .. } => "HemiEllipsoid",
            Self::Capsule { .. } => "Capsule",
            Self::Cylinder { .. } => "Cylinder",
            Self::Cone { .. } => "Cone",
            Self::TruncatedCone { .. } => "TruncatedCone",
            Self::Torus { .. } => "Torus",
            Self::ArcTorus { .. } => "ArcTorus",
            Self::Box { .. } => "Box",
            Self::Wedge { .. } => "Wedge",
            Self::PyramidBox { .. } => "PyramidBox",
            Self::Tetrahedron { .. } => "Tetrahedron",
            Self::Polygon { .. } => "Polygon",
            Self::ExtrudedPolygon { .. } => "ExtrudedPolygon",
            Self::Line { .. } => "Line",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let shape = ShapeDescription::Torus {
            major_radius: 1.0,
            minor_radius: 0.2,
        };
        assert_eq!(shape.name(), "Torus");
    }

    #[test]
    fn test_serde_round_trip() {
        let shape = ShapeDescription::Capsule {
            height: 2.0,
            x_radius: 0.5,
            y_radius: 0.5,
            z_radius: 0.5,
        };
        let json = serde_json::to_string(&shape).unwrap();
        let back: ShapeDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, back);
    }
}
