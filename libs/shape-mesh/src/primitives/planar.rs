//! # Polygon Fans and Derivatives
//!
//! Fan-triangulated convex polygons, their z-extrusion, the flat rectangle,
//! and the line-as-box helper.
//!
//! The polygon generators return `Option`: input that cannot produce a
//! renderable mesh (fewer than three vertices, or a degenerate bounding
//! range that would break texture mapping) yields `None` rather than a
//! broken mesh. Clockwise input is reversed up front so the fan always
//! winds counter-clockwise.

use config::constants::{EPSILON, PLANARITY_EPSILON, POLAR_AXIS_EPSILON};
use glam::{DMat4, DQuat, DVec2, DVec3};

use crate::mesh::MeshData;
use crate::primitives::polytope::create_box;

fn bounds_2d(vertices: &[DVec2]) -> (DVec2, DVec2) {
    let mut min = vertices[0];
    let mut max = vertices[0];
    for v in &vertices[1..] {
        min = min.min(*v);
        max = max.max(*v);
    }
    (min, max)
}

fn oriented<T: Copy>(vertices: &[T], counter_clockwise: bool) -> Vec<T> {
    if counter_clockwise {
        vertices.to_vec()
    } else {
        vertices.iter().rev().copied().collect()
    }
}

/// Creates a fan-triangulated mesh for a convex polygon in the xy-plane,
/// optionally placed by a pose transform.
///
/// All vertices share the pose-rotated +z normal. Texture coordinates map
/// the polygon's bounding rectangle with x and y swapped and flipped, so a
/// ground patch reads naturally when viewed from above.
///
/// Returns `None` when fewer than three vertices are given or the polygon
/// collapses to a line or point.
pub fn create_polygon_2d(
    pose: Option<&DMat4>,
    vertices: &[DVec2],
    counter_clockwise: bool,
) -> Option<MeshData> {
    if vertices.len() < 3 {
        return None;
    }

    let (min, max) = bounds_2d(vertices);
    let extent = max - min;
    if extent.x < EPSILON || extent.y < EPSILON {
        return None;
    }

    let ordered = oriented(vertices, counter_clockwise);
    let n = ordered.len();

    let normal = match pose {
        Some(pose) => pose.transform_vector3(DVec3::Z),
        None => DVec3::Z,
    };

    let mut mesh = MeshData::with_capacity(n, n - 2);
    for v in &ordered {
        let point = DVec3::new(v.x, v.y, 0.0);
        let position = match pose {
            Some(pose) => pose.transform_point3(point),
            None => point,
        };
        let tex = DVec2::new(
            1.0 - (v.y - min.y) / extent.y,
            1.0 - (v.x - min.x) / extent.x,
        );
        mesh.add_vertex(position, normal, tex);
    }

    for j in 2..n as u32 {
        mesh.add_triangle(0, j - 1, j);
    }

    Some(mesh)
}

/// Creates a fan-triangulated mesh for a convex polygon given directly in
/// 3D.
///
/// When every fan triangle agrees on a plane, all vertices share that face
/// normal. Otherwise the polygon is treated as gently curved: the first
/// vertex takes the averaged polygon normal and the interior vertices blend
/// the normals of their adjacent fan triangles. Texture coordinates come
/// from projecting the polygon onto the plane of its averaged normal.
///
/// Returns `None` when fewer than three vertices are given or the projected
/// footprint collapses.
pub fn create_polygon_3d(vertices: &[DVec3], counter_clockwise: bool) -> Option<MeshData> {
    if vertices.len() < 3 {
        return None;
    }

    let ordered = oriented(vertices, counter_clockwise);
    let n = ordered.len();
    let triangle_count = n - 2;

    // A fan triangle with collinear corners has no normal of its own;
    // borrow the nearest real one. All collinear means nothing to draw.
    let raw_normals: Vec<Option<DVec3>> = (0..triangle_count)
        .map(|i| {
            (ordered[i + 1] - ordered[0])
                .cross(ordered[i + 2] - ordered[0])
                .try_normalize()
        })
        .collect();
    let mut triangle_normals = Vec::with_capacity(triangle_count);
    for i in 0..triangle_count {
        let normal = raw_normals[i]
            .or_else(|| raw_normals[..i].iter().rev().copied().flatten().next())
            .or_else(|| raw_normals[i + 1..].iter().copied().flatten().next())?;
        triangle_normals.push(normal);
    }

    let planar = triangle_normals.windows(2).all(|pair| {
        (pair[0] - pair[1]).abs().max_element() < PLANARITY_EPSILON
    });
    let polygon_normal = triangle_normals.iter().copied().sum::<DVec3>().normalize();

    // Project onto the polygon plane to build the texture chart.
    let orientation = DQuat::from_rotation_arc(DVec3::Z, polygon_normal);
    let flattened: Vec<DVec2> = ordered
        .iter()
        .map(|v| {
            let local = orientation.inverse() * *v;
            DVec2::new(-local.y, -local.x)
        })
        .collect();
    let (min, max) = bounds_2d(&flattened);
    let extent = max - min;
    if extent.x < EPSILON || extent.y < EPSILON {
        return None;
    }

    let normals: Vec<DVec3> = if planar {
        vec![triangle_normals[0]; n]
    } else {
        (0..n)
            .map(|i| {
                if i == 0 {
                    polygon_normal
                } else if i < triangle_count {
                    (triangle_normals[i - 1] + triangle_normals[i]).normalize()
                } else {
                    triangle_normals[triangle_count - 1]
                }
            })
            .collect()
    };

    let mut mesh = MeshData::with_capacity(n, triangle_count);
    for i in 0..n {
        let tex = (flattened[i] - min) / extent;
        mesh.add_vertex(ordered[i], normals[i], tex);
    }
    for j in 2..n as u32 {
        mesh.add_triangle(0, j - 1, j);
    }

    Some(mesh)
}

/// Creates a closed prism by extruding a convex polygon along the z-axis
/// from `bottom_z` to `top_z`.
///
/// Caps are fan-triangulated; each side quad gets its own four vertices
/// carrying the edge's outward normal, with texture u following the
/// cumulative perimeter fraction.
///
/// Returns `None` when fewer than three vertices are given or the polygon
/// collapses to a line or point.
pub fn create_extruded_polygon(
    vertices: &[DVec2],
    counter_clockwise: bool,
    top_z: f64,
    bottom_z: f64,
) -> Option<MeshData> {
    if vertices.len() < 3 {
        return None;
    }

    let (min, max) = bounds_2d(vertices);
    let extent = max - min;
    if extent.x < EPSILON || extent.y < EPSILON {
        return None;
    }

    let ordered = oriented(vertices, counter_clockwise);
    let n = ordered.len();
    let nu = n as u32;

    let mut mesh = MeshData::with_capacity(6 * n, 4 * n - 4);

    // Caps.
    for v in &ordered {
        let u = 1.0 - 0.5 * (v.y - min.y) / extent.y;
        let w = 0.5 - 0.5 * (v.x - min.x) / extent.x;
        mesh.add_vertex(
            DVec3::new(v.x, v.y, bottom_z),
            DVec3::NEG_Z,
            DVec2::new(u, w),
        );
    }
    for v in &ordered {
        let u = 0.5 - 0.5 * (v.y - min.y) / extent.y;
        let w = 0.5 - 0.5 * (v.x - min.x) / extent.x;
        mesh.add_vertex(DVec3::new(v.x, v.y, top_z), DVec3::Z, DVec2::new(u, w));
    }

    // Side quads, one per edge, texture u by perimeter share.
    let perimeter: f64 = (0..n)
        .map(|i| ordered[i].distance(ordered[(i + 1) % n]))
        .sum();
    let mut distance = 0.0;

    for i in 0..n {
        let a = ordered[i];
        let b = ordered[(i + 1) % n];
        let edge = b - a;
        let normal = DVec3::new(edge.y, -edge.x, 0.0).normalize();
        let u0 = distance / perimeter;
        distance += edge.length();
        let u1 = distance / perimeter;

        let s = mesh.vertex_count() as u32;
        mesh.add_vertex(DVec3::new(a.x, a.y, bottom_z), normal, DVec2::new(u0, 1.0));
        mesh.add_vertex(DVec3::new(b.x, b.y, bottom_z), normal, DVec2::new(u1, 1.0));
        mesh.add_vertex(DVec3::new(a.x, a.y, top_z), normal, DVec2::new(u0, 0.5));
        mesh.add_vertex(DVec3::new(b.x, b.y, top_z), normal, DVec2::new(u1, 0.5));

        mesh.add_triangle(s, s + 1, s + 2);
        mesh.add_triangle(s + 1, s + 3, s + 2);
    }

    for i in 1..nu - 1 {
        mesh.add_triangle(i + 1, i, 0);
        mesh.add_triangle(nu, nu + i, nu + i + 1);
    }

    Some(mesh)
}

/// Creates a flat horizontal rectangle centered on the z-axis, facing up.
pub fn create_flat_rectangle(x_size: f64, y_size: f64, z: f64) -> MeshData {
    create_flat_rectangle_from_bounds(-0.5 * x_size, -0.5 * y_size, 0.5 * x_size, 0.5 * y_size, z)
}

/// Creates a flat horizontal rectangle from its xy bounds, facing up.
pub fn create_flat_rectangle_from_bounds(
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
    z: f64,
) -> MeshData {
    let mut mesh = MeshData::with_capacity(4, 2);
    mesh.add_vertex(DVec3::new(x_min, y_min, z), DVec3::Z, DVec2::new(1.0, 1.0));
    mesh.add_vertex(DVec3::new(x_max, y_min, z), DVec3::Z, DVec2::new(1.0, 0.0));
    mesh.add_vertex(DVec3::new(x_max, y_max, z), DVec3::Z, DVec2::new(0.0, 0.0));
    mesh.add_vertex(DVec3::new(x_min, y_max, z), DVec3::Z, DVec2::new(0.0, 1.0));
    mesh.add_triangle(0, 1, 3);
    mesh.add_triangle(1, 2, 3);
    mesh
}

/// Creates a line segment rendered as an elongated box of square cross
/// section.
///
/// The box is generated along +z with the segment's length, then yawed and
/// pitched onto the segment direction and translated to the start point. A
/// zero-length segment degenerates to an axis-aligned box of zero height at
/// the start point.
pub fn create_line(start: DVec3, end: DVec3, width: f64) -> MeshData {
    let direction = end - start;
    let length = direction.length();

    let (yaw, pitch) = if length < EPSILON {
        (0.0, 0.0)
    } else {
        let direction = direction / length;
        if direction.z.abs() < 1.0 - POLAR_AXIS_EPSILON {
            (
                direction.y.atan2(direction.x),
                direction.x.hypot(direction.y).atan2(direction.z),
            )
        } else if direction.z >= 0.0 {
            (0.0, 0.0)
        } else {
            (0.0, std::f64::consts::PI)
        }
    };

    let mut mesh = create_box(width, width, length, false);
    mesh.rotate(DQuat::from_rotation_z(yaw) * DQuat::from_rotation_y(pitch));
    mesh.translate(start);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_polygon_too_few_vertices() {
        let two = [DVec2::ZERO, DVec2::ONE];
        assert!(create_polygon_2d(None, &two, true).is_none());
    }

    #[test]
    fn test_polygon_collapsed() {
        let flat = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
        ];
        assert!(create_polygon_2d(None, &flat, true).is_none());
    }

    #[test]
    fn test_polygon_triangle_fan() {
        let mesh = create_polygon_2d(None, &unit_square(), true).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.validate().is_ok());
        for n in mesh.normals() {
            assert_eq!(*n, DVec3::Z);
        }
    }

    #[test]
    fn test_polygon_clockwise_reversed() {
        let mut cw = unit_square();
        cw.reverse();
        let from_cw = create_polygon_2d(None, &cw, false).unwrap();
        let from_ccw = create_polygon_2d(None, &unit_square(), true).unwrap();
        assert_eq!(from_cw, from_ccw);
    }

    #[test]
    fn test_polygon_posed() {
        let pose = DMat4::from_translation(DVec3::new(0.0, 0.0, 3.0));
        let mesh = create_polygon_2d(Some(&pose), &unit_square(), true).unwrap();
        for v in mesh.vertices() {
            assert_eq!(v.z, 3.0);
        }
    }

    #[test]
    fn test_polygon_3d_planar() {
        let square = [
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
        ];
        let mesh = create_polygon_3d(&square, true).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        for n in mesh.normals() {
            assert!((*n - DVec3::Z).length() < 1e-12);
        }
        for t in mesh.tex_coords() {
            assert!((0.0..=1.0).contains(&t.x));
            assert!((0.0..=1.0).contains(&t.y));
        }
    }

    #[test]
    fn test_polygon_3d_non_planar_normals_blend() {
        // Fold the quad slightly out of plane.
        let folded = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.3),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let mesh = create_polygon_3d(&folded, true).unwrap();
        assert!(mesh.validate().is_ok());
        for n in mesh.normals() {
            assert!((n.length() - 1.0).abs() < 1e-12);
        }
        // The two fan triangles disagree, so the shared vertex blends them.
        assert_ne!(mesh.normals()[1], mesh.normals()[3]);
    }

    #[test]
    fn test_polygon_3d_tolerates_collinear_vertex() {
        // An extra vertex on the bottom edge makes the first fan triangle
        // zero-area; its normal borrows from the next triangle.
        let square_with_midpoint = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.5, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let mesh = create_polygon_3d(&square_with_midpoint, true).unwrap();
        assert!(mesh.validate().is_ok());
        for n in mesh.normals() {
            assert!((*n - DVec3::Z).length() < 1e-12);
        }
    }

    #[test]
    fn test_polygon_3d_fully_collinear_is_none() {
        let line = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
        ];
        assert!(create_polygon_3d(&line, true).is_none());
    }

    #[test]
    fn test_extruded_polygon_counts() {
        let mesh = create_extruded_polygon(&unit_square(), true, 1.0, 0.0).unwrap();
        assert_eq!(mesh.vertex_count(), 6 * 4);
        assert_eq!(mesh.triangle_count(), 4 * 4 - 4);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_extruded_polygon_extents() {
        let mesh = create_extruded_polygon(&unit_square(), true, 2.0, -1.0).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.z, -1.0);
        assert_eq!(max.z, 2.0);
    }

    #[test]
    fn test_extruded_polygon_side_normals_outward() {
        let mesh = create_extruded_polygon(&unit_square(), true, 1.0, 0.0).unwrap();
        // First edge runs along +x at y = 0, so its quad faces -y.
        assert_eq!(mesh.normals()[8], DVec3::NEG_Y);
    }

    #[test]
    fn test_extruded_polygon_rejects_degenerate() {
        assert!(create_extruded_polygon(&unit_square()[..2], true, 1.0, 0.0).is_none());
        let line = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
        ];
        assert!(create_extruded_polygon(&line, true, 1.0, 0.0).is_none());
    }

    #[test]
    fn test_flat_rectangle() {
        let mesh = create_flat_rectangle(2.0, 4.0, 0.5);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, 0.5));
        assert_eq!(max, DVec3::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn test_line_along_x() {
        let mesh = create_line(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), 0.1);
        let (min, max) = mesh.bounding_box();
        assert!((max.x - 2.0).abs() < 1e-12);
        assert!(min.x.abs() < 1e-12);
        assert!((max.z - 0.05).abs() < 1e-12);
        assert!((min.z + 0.05).abs() < 1e-12);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_line_offset_endpoints() {
        let start = DVec3::new(1.0, 2.0, 3.0);
        let end = DVec3::new(1.0, 2.0, 5.0);
        let mesh = create_line(start, end, 0.2);
        let (min, max) = mesh.bounding_box();
        assert!((min.z - 3.0).abs() < 1e-12);
        assert!((max.z - 5.0).abs() < 1e-12);
        assert!((min.x - 0.9).abs() < 1e-12);
    }
}
