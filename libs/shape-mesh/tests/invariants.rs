//! Structural invariants shared by every generator: parallel attribute
//! buffers, in-bounds indices, unit normals, outward winding, and closed
//! surfaces where the shape is a solid.

use std::collections::HashMap;
use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use shape_descriptions::{MeshResolution, ShapeDescription};
use shape_mesh::description_to_mesh;
use shape_mesh::primitives::{
    create_arc_torus, create_box, create_capsule, create_cone, create_cylinder,
    create_ellipsoid, create_extruded_polygon, create_hemi_ellipsoid, create_polygon_2d,
    create_pyramid_box, create_sphere, create_tetrahedron, create_torus, create_truncated_cone,
    create_wedge,
};
use shape_mesh::MeshData;

fn solid_fixtures() -> Vec<(&'static str, MeshData)> {
    vec![
        ("sphere", create_sphere(1.0, 16, 16)),
        ("ellipsoid", create_ellipsoid(1.0, 2.0, 3.0, 16, 16)),
        ("hemi_ellipsoid", create_hemi_ellipsoid(1.0, 1.0, 2.0, 16, 16)),
        ("capsule", create_capsule(1.0, 0.5, 0.5, 0.5, 16, 16)),
        ("cylinder", create_cylinder(1.0, 2.0, 16, true)),
        ("cone", create_cone(2.0, 1.0, 16)),
        (
            "truncated_cone",
            create_truncated_cone(1.0, 1.0, 2.0, 0.5, 1.0, 16),
        ),
        ("torus", create_torus(1.0, 0.25, 16)),
        ("box", create_box(1.0, 2.0, 3.0, true)),
        ("wedge", create_wedge(2.0, 1.0, 1.0)),
        ("pyramid_box", create_pyramid_box(1.0, 1.0, 1.0, 0.5)),
        ("tetrahedron", create_tetrahedron(1.0)),
        (
            "extruded_polygon",
            create_extruded_polygon(
                &[
                    DVec2::new(0.0, 0.0),
                    DVec2::new(2.0, 0.0),
                    DVec2::new(2.0, 1.0),
                    DVec2::new(0.0, 1.0),
                ],
                true,
                1.0,
                0.0,
            )
            .unwrap(),
        ),
    ]
}

/// Quantizes a position so deliberately duplicated seam and pole vertices
/// collapse to one key.
fn position_key(v: DVec3) -> (i64, i64, i64) {
    (
        (v.x * 1e6).round() as i64,
        (v.y * 1e6).round() as i64,
        (v.z * 1e6).round() as i64,
    )
}

/// Asserts every undirected positional edge is shared by exactly two
/// triangles.
fn assert_watertight(name: &str, mesh: &MeshData) {
    let mut edge_counts: HashMap<_, u32> = HashMap::new();

    for t in 0..mesh.triangle_count() {
        let [i, j, k] = mesh.triangle(t);
        let a = position_key(mesh.vertex(i));
        let b = position_key(mesh.vertex(j));
        let c = position_key(mesh.vertex(k));
        for (p, q) in [(a, b), (b, c), (c, a)] {
            let edge = if p <= q { (p, q) } else { (q, p) };
            *edge_counts.entry(edge).or_insert(0) += 1;
        }
    }

    for (edge, count) in &edge_counts {
        assert_eq!(
            *count, 2,
            "{name}: edge {edge:?} shared by {count} triangles"
        );
    }
}

#[test]
fn all_solids_pass_validation() {
    for (name, mesh) in solid_fixtures() {
        assert!(mesh.validate().is_ok(), "{name} failed validation");
        assert_eq!(mesh.triangle_indices().len() % 3, 0, "{name}");
        assert_eq!(mesh.vertices().len(), mesh.normals().len(), "{name}");
        assert_eq!(mesh.vertices().len(), mesh.tex_coords().len(), "{name}");
    }
}

#[test]
fn all_normals_are_unit_length() {
    for (name, mesh) in solid_fixtures() {
        for n in mesh.normals() {
            assert!(
                (n.length() - 1.0).abs() < 1e-9,
                "{name}: non-unit normal {n:?}"
            );
        }
    }
}

#[test]
fn all_solids_are_watertight() {
    for (name, mesh) in solid_fixtures() {
        assert_watertight(name, &mesh);
    }
}

#[test]
fn winding_points_outward_for_convex_solids() {
    for (name, mesh) in [
        ("sphere", create_sphere(1.0, 12, 12)),
        ("box", create_box(1.0, 1.0, 1.0, true)),
        ("tetrahedron", create_tetrahedron(1.0)),
        ("cylinder", create_cylinder(1.0, 2.0, 16, true)),
    ] {
        let centroid =
            mesh.vertices().iter().sum::<DVec3>() / mesh.vertex_count() as f64;
        for t in 0..mesh.triangle_count() {
            let [i, j, k] = mesh.triangle(t);
            let (v0, v1, v2) = (mesh.vertex(i), mesh.vertex(j), mesh.vertex(k));
            let face_normal = (v1 - v0).cross(v2 - v0);
            let outward = (v0 + v1 + v2) / 3.0 - centroid;
            assert!(
                face_normal.dot(outward) > 0.0,
                "{name}: triangle {t} winds inward"
            );
        }
    }
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let mesh = create_sphere(0.75, 32, 32);
    for v in mesh.vertices() {
        assert_relative_eq!(v.length(), 0.75, epsilon = 1e-9);
    }
}

#[test]
fn box_duplicates_corners_per_face() {
    let mesh = create_box(2.0, 2.0, 2.0, true);
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    // Each corner belongs to three faces, so its position appears three
    // times with three different normals.
    let corner = DVec3::new(1.0, 1.0, 1.0);
    let copies: Vec<usize> = (0..mesh.vertex_count())
        .filter(|&i| mesh.vertex(i as u32) == corner)
        .collect();
    assert_eq!(copies.len(), 3);
    let normals: Vec<DVec3> = copies.iter().map(|&i| mesh.normals()[i]).collect();
    assert!(normals.contains(&DVec3::Z));
    assert!(normals.contains(&DVec3::X));
    assert!(normals.contains(&DVec3::Y));
}

#[test]
fn closed_and_open_arc_torus_differ_only_by_caps() {
    let closed = create_arc_torus(0.0, TAU, 1.0, 0.25, 16);
    let open = create_arc_torus(0.0, PI, 1.0, 0.25, 16);

    // Closed form wraps with no duplicate ring and no cap vertices.
    assert_eq!(closed.vertex_count(), 16 * 16);
    assert_eq!(closed.triangle_count(), 2 * 16 * 15);

    // Open form carries two cap rims of 16 plus two centers.
    assert_eq!(open.vertex_count(), 16 * 16 + 2 * 17);
    assert_eq!(open.triangle_count(), 2 * 15 * 15 + 2 * 16);
}

#[test]
fn polygon_fan_edge_cases() {
    let two = [DVec2::ZERO, DVec2::ONE];
    assert!(create_polygon_2d(None, &two, true).is_none());

    let triangle = [
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(0.0, 1.0),
    ];
    let mesh = create_polygon_2d(None, &triangle, true).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn generation_is_deterministic() {
    let shape = ShapeDescription::Capsule {
        height: 1.0,
        x_radius: 0.5,
        y_radius: 0.5,
        z_radius: 0.75,
    };
    let resolution = MeshResolution::default();
    let first = description_to_mesh(&shape, &resolution).unwrap();
    let second = description_to_mesh(&shape, &resolution).unwrap();
    assert_eq!(first, second);
}

#[test]
fn f32_export_lengths_match() {
    for (name, mesh) in solid_fixtures() {
        assert_eq!(mesh.vertices_f32().len(), mesh.vertex_count() * 3, "{name}");
        assert_eq!(mesh.normals_f32().len(), mesh.vertex_count() * 3, "{name}");
        assert_eq!(
            mesh.tex_coords_f32().len(),
            mesh.vertex_count() * 2,
            "{name}"
        );
    }
}
