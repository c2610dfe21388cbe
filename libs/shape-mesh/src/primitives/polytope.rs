//! # Polytopes
//!
//! Flat-faced solids built from fixed vertex tables: box, wedge, pyramid
//! box, and tetrahedron.
//!
//! Every face gets its own copies of the corner vertices so each copy can
//! carry the face normal and the face's slot in the texture atlas. Nothing
//! is shared across faces, which keeps all edges sharp.

use glam::{DVec2, DVec3};

use crate::mesh::MeshData;

/// Creates an axis-aligned box.
///
/// x and y are always centered on the origin; `centered` selects whether z
/// spans `[-z_size/2, z_size/2]` or `[0, z_size]`.
///
/// # Panics
///
/// Panics if any size is negative.
pub fn create_box(x_size: f64, y_size: f64, z_size: f64, centered: bool) -> MeshData {
    assert!(
        x_size >= 0.0 && y_size >= 0.0 && z_size >= 0.0,
        "box sizes must be non-negative"
    );

    let hx = 0.5 * x_size;
    let hy = 0.5 * y_size;
    let z_bottom = if centered { -0.5 * z_size } else { 0.0 };
    let z_top = if centered { 0.5 * z_size } else { z_size };

    let b0 = DVec3::new(-hx, -hy, z_bottom);
    let b1 = DVec3::new(hx, -hy, z_bottom);
    let b2 = DVec3::new(hx, hy, z_bottom);
    let b3 = DVec3::new(-hx, hy, z_bottom);
    let t0 = DVec3::new(-hx, -hy, z_top);
    let t1 = DVec3::new(hx, -hy, z_top);
    let t2 = DVec3::new(hx, hy, z_top);
    let t3 = DVec3::new(-hx, hy, z_top);

    let mut mesh = MeshData::with_capacity(24, 12);

    // Bottom face (0-3).
    mesh.add_vertex(b0, DVec3::NEG_Z, DVec2::new(0.5, 0.5));
    mesh.add_vertex(b1, DVec3::NEG_Z, DVec2::new(0.25, 0.5));
    mesh.add_vertex(b2, DVec3::NEG_Z, DVec2::new(0.25, 0.25));
    mesh.add_vertex(b3, DVec3::NEG_Z, DVec2::new(0.5, 0.25));
    // Top face (4-7).
    mesh.add_vertex(t0, DVec3::Z, DVec2::new(0.75, 0.5));
    mesh.add_vertex(t1, DVec3::Z, DVec2::new(1.0, 0.5));
    mesh.add_vertex(t2, DVec3::Z, DVec2::new(1.0, 0.25));
    mesh.add_vertex(t3, DVec3::Z, DVec2::new(0.75, 0.25));
    // +y face (8-11).
    mesh.add_vertex(b2, DVec3::Y, DVec2::new(0.25, 0.25));
    mesh.add_vertex(b3, DVec3::Y, DVec2::new(0.5, 0.25));
    mesh.add_vertex(t2, DVec3::Y, DVec2::new(0.25, 0.0));
    mesh.add_vertex(t3, DVec3::Y, DVec2::new(0.5, 0.0));
    // -y face (12-15).
    mesh.add_vertex(b0, DVec3::NEG_Y, DVec2::new(0.5, 0.5));
    mesh.add_vertex(b1, DVec3::NEG_Y, DVec2::new(0.25, 0.5));
    mesh.add_vertex(t0, DVec3::NEG_Y, DVec2::new(0.5, 0.75));
    mesh.add_vertex(t1, DVec3::NEG_Y, DVec2::new(0.25, 0.75));
    // -x face (16-19).
    mesh.add_vertex(b0, DVec3::NEG_X, DVec2::new(0.5, 0.5));
    mesh.add_vertex(b3, DVec3::NEG_X, DVec2::new(0.5, 0.25));
    mesh.add_vertex(t0, DVec3::NEG_X, DVec2::new(0.75, 0.5));
    mesh.add_vertex(t3, DVec3::NEG_X, DVec2::new(0.75, 0.25));
    // +x face (20-23).
    mesh.add_vertex(b1, DVec3::X, DVec2::new(0.25, 0.5));
    mesh.add_vertex(b2, DVec3::X, DVec2::new(0.25, 0.25));
    mesh.add_vertex(t1, DVec3::X, DVec2::new(0.0, 0.5));
    mesh.add_vertex(t2, DVec3::X, DVec2::new(0.0, 0.25));

    mesh.add_triangle(2, 1, 0);
    mesh.add_triangle(3, 2, 0);
    mesh.add_triangle(4, 5, 6);
    mesh.add_triangle(4, 6, 7);
    mesh.add_triangle(8, 11, 10);
    mesh.add_triangle(8, 9, 11);
    mesh.add_triangle(15, 14, 13);
    mesh.add_triangle(14, 12, 13);
    mesh.add_triangle(16, 19, 17);
    mesh.add_triangle(16, 18, 19);
    mesh.add_triangle(20, 23, 22);
    mesh.add_triangle(20, 21, 23);

    mesh
}

/// Creates a wedge: a box cut along the diagonal of its xz faces, with the
/// bottom face centered at the origin and the vertical face at `x =
/// x_size/2`.
///
/// # Panics
///
/// Panics if any size is negative.
pub fn create_wedge(x_size: f64, y_size: f64, z_size: f64) -> MeshData {
    assert!(
        x_size >= 0.0 && y_size >= 0.0 && z_size >= 0.0,
        "wedge sizes must be non-negative"
    );

    let hx = 0.5 * x_size;
    let hy = 0.5 * y_size;

    // Thirds of the texture atlas.
    let tex0 = 0.0;
    let tex1 = 1.0 / 3.0;
    let tex2 = 2.0 / 3.0;
    let tex3 = 1.0;

    let b0 = DVec3::new(-hx, -hy, 0.0);
    let b1 = DVec3::new(hx, -hy, 0.0);
    let b2 = DVec3::new(hx, hy, 0.0);
    let b3 = DVec3::new(-hx, hy, 0.0);
    let u1 = DVec3::new(hx, -hy, z_size);
    let u2 = DVec3::new(hx, hy, z_size);

    let wedge_angle = z_size.atan2(x_size);
    let slant = DVec3::new(-wedge_angle.sin(), 0.0, wedge_angle.cos());

    let mut mesh = MeshData::with_capacity(18, 8);

    // Bottom face (0-3).
    mesh.add_vertex(b0, DVec3::NEG_Z, DVec2::new(tex2, tex2));
    mesh.add_vertex(b1, DVec3::NEG_Z, DVec2::new(tex1, tex2));
    mesh.add_vertex(b2, DVec3::NEG_Z, DVec2::new(tex1, tex1));
    mesh.add_vertex(b3, DVec3::NEG_Z, DVec2::new(tex2, tex1));
    // Vertical +x face (4-7).
    mesh.add_vertex(u1, DVec3::X, DVec2::new(tex0, tex2));
    mesh.add_vertex(u2, DVec3::X, DVec2::new(tex0, tex1));
    mesh.add_vertex(b2, DVec3::X, DVec2::new(tex1, tex1));
    mesh.add_vertex(b1, DVec3::X, DVec2::new(tex1, tex2));
    // Slanted top face (8-11).
    mesh.add_vertex(b0, slant, DVec2::new(tex2, tex2));
    mesh.add_vertex(u1, slant, DVec2::new(tex3, tex2));
    mesh.add_vertex(u2, slant, DVec2::new(tex3, tex1));
    mesh.add_vertex(b3, slant, DVec2::new(tex2, tex1));
    // -y triangle (12-14).
    mesh.add_vertex(b0, DVec3::NEG_Y, DVec2::new(tex2, tex2));
    mesh.add_vertex(b1, DVec3::NEG_Y, DVec2::new(tex1, tex2));
    mesh.add_vertex(u1, DVec3::NEG_Y, DVec2::new(tex1, tex3));
    // +y triangle (15-17).
    mesh.add_vertex(b2, DVec3::Y, DVec2::new(tex1, tex1));
    mesh.add_vertex(b3, DVec3::Y, DVec2::new(tex2, tex1));
    mesh.add_vertex(u2, DVec3::Y, DVec2::new(tex1, tex0));

    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(0, 3, 2);
    mesh.add_triangle(7, 5, 4);
    mesh.add_triangle(5, 7, 6);
    mesh.add_triangle(8, 9, 10);
    mesh.add_triangle(8, 10, 11);
    mesh.add_triangle(12, 13, 14);
    mesh.add_triangle(15, 16, 17);

    mesh
}

/// Creates a box with a pyramidal cap on its top and bottom faces, centered
/// at the origin.
///
/// The box contributes only its four side faces; the caps replace the
/// horizontal ones. Texture v is split by height share so the side band and
/// both pyramid bands line up.
///
/// # Panics
///
/// Panics if any size or the pyramid height is negative.
pub fn create_pyramid_box(
    box_x_size: f64,
    box_y_size: f64,
    box_z_size: f64,
    pyramid_height: f64,
) -> MeshData {
    assert!(
        box_x_size >= 0.0 && box_y_size >= 0.0 && box_z_size >= 0.0 && pyramid_height >= 0.0,
        "pyramid box dimensions must be non-negative"
    );

    let hx = 0.5 * box_x_size;
    let hy = 0.5 * box_y_size;
    let hz = 0.5 * box_z_size;
    let total_height = 2.0 * pyramid_height + box_z_size;
    let v_cap = pyramid_height / total_height;

    let b0 = DVec3::new(-hx, -hy, -hz);
    let b1 = DVec3::new(hx, -hy, -hz);
    let b2 = DVec3::new(hx, hy, -hz);
    let b3 = DVec3::new(-hx, hy, -hz);
    let t0 = DVec3::new(-hx, -hy, hz);
    let t1 = DVec3::new(hx, -hy, hz);
    let t2 = DVec3::new(hx, hy, hz);
    let t3 = DVec3::new(-hx, hy, hz);
    let top_apex = DVec3::new(0.0, 0.0, hz + pyramid_height);
    let bottom_apex = DVec3::new(0.0, 0.0, -hz - pyramid_height);

    let x_angle = hx.atan2(pyramid_height);
    let y_angle = hy.atan2(pyramid_height);
    let (sin_x, cos_x) = x_angle.sin_cos();
    let (sin_y, cos_y) = y_angle.sin_cos();

    let mut mesh = MeshData::with_capacity(40, 16);

    // Box -x face (0-3).
    let n = DVec3::NEG_X;
    mesh.add_vertex(b0, n, DVec2::new(0.75, 1.0 - v_cap));
    mesh.add_vertex(t0, n, DVec2::new(0.75, v_cap));
    mesh.add_vertex(t3, n, DVec2::new(0.5, v_cap));
    mesh.add_vertex(b3, n, DVec2::new(0.5, 1.0 - v_cap));
    // Box +x face (4-7).
    let n = DVec3::X;
    mesh.add_vertex(b1, n, DVec2::new(0.0, 1.0 - v_cap));
    mesh.add_vertex(t1, n, DVec2::new(0.0, v_cap));
    mesh.add_vertex(t2, n, DVec2::new(0.25, v_cap));
    mesh.add_vertex(b2, n, DVec2::new(0.25, 1.0 - v_cap));
    // Box +y face (8-11).
    let n = DVec3::Y;
    mesh.add_vertex(b3, n, DVec2::new(0.5, 1.0 - v_cap));
    mesh.add_vertex(t3, n, DVec2::new(0.5, v_cap));
    mesh.add_vertex(t2, n, DVec2::new(0.25, v_cap));
    mesh.add_vertex(b2, n, DVec2::new(0.25, 1.0 - v_cap));
    // Box -y face (12-15).
    let n = DVec3::NEG_Y;
    mesh.add_vertex(b0, n, DVec2::new(0.75, 1.0 - v_cap));
    mesh.add_vertex(t0, n, DVec2::new(0.75, v_cap));
    mesh.add_vertex(t1, n, DVec2::new(1.0, v_cap));
    mesh.add_vertex(b1, n, DVec2::new(1.0, 1.0 - v_cap));

    // Top pyramid, one slanted triangle per box side (16-27).
    let n = DVec3::new(-cos_x, 0.0, sin_x);
    mesh.add_vertex(top_apex, n, DVec2::new(0.625, 0.0));
    mesh.add_vertex(t0, n, DVec2::new(0.75, v_cap));
    mesh.add_vertex(t3, n, DVec2::new(0.5, v_cap));
    let n = DVec3::new(cos_x, 0.0, sin_x);
    mesh.add_vertex(top_apex, n, DVec2::new(0.125, 0.0));
    mesh.add_vertex(t1, n, DVec2::new(0.0, v_cap));
    mesh.add_vertex(t2, n, DVec2::new(0.25, v_cap));
    let n = DVec3::new(0.0, cos_y, sin_y);
    mesh.add_vertex(top_apex, n, DVec2::new(0.375, 0.0));
    mesh.add_vertex(t3, n, DVec2::new(0.5, v_cap));
    mesh.add_vertex(t2, n, DVec2::new(0.25, v_cap));
    let n = DVec3::new(0.0, -cos_y, sin_y);
    mesh.add_vertex(top_apex, n, DVec2::new(0.875, 0.0));
    mesh.add_vertex(t0, n, DVec2::new(0.75, v_cap));
    mesh.add_vertex(t1, n, DVec2::new(1.0, v_cap));

    // Bottom pyramid (28-39).
    let n = DVec3::new(-cos_x, 0.0, -sin_x);
    mesh.add_vertex(bottom_apex, n, DVec2::new(0.625, 1.0));
    mesh.add_vertex(b0, n, DVec2::new(0.75, 1.0 - v_cap));
    mesh.add_vertex(b3, n, DVec2::new(0.5, 1.0 - v_cap));
    let n = DVec3::new(cos_x, 0.0, -sin_x);
    mesh.add_vertex(bottom_apex, n, DVec2::new(0.125, 1.0));
    mesh.add_vertex(b1, n, DVec2::new(0.0, 1.0 - v_cap));
    mesh.add_vertex(b2, n, DVec2::new(0.25, 1.0 - v_cap));
    let n = DVec3::new(0.0, cos_y, -sin_y);
    mesh.add_vertex(bottom_apex, n, DVec2::new(0.375, 1.0));
    mesh.add_vertex(b3, n, DVec2::new(0.5, 1.0 - v_cap));
    mesh.add_vertex(b2, n, DVec2::new(0.25, 1.0 - v_cap));
    let n = DVec3::new(0.0, -cos_y, -sin_y);
    mesh.add_vertex(bottom_apex, n, DVec2::new(0.875, 1.0));
    mesh.add_vertex(b0, n, DVec2::new(0.75, 1.0 - v_cap));
    mesh.add_vertex(b1, n, DVec2::new(1.0, 1.0 - v_cap));

    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh.add_triangle(4, 6, 5);
    mesh.add_triangle(4, 7, 6);
    mesh.add_triangle(8, 9, 10);
    mesh.add_triangle(8, 10, 11);
    mesh.add_triangle(12, 14, 13);
    mesh.add_triangle(12, 15, 14);
    mesh.add_triangle(16, 18, 17);
    mesh.add_triangle(19, 20, 21);
    mesh.add_triangle(22, 24, 23);
    mesh.add_triangle(25, 26, 27);
    mesh.add_triangle(28, 29, 30);
    mesh.add_triangle(31, 33, 32);
    mesh.add_triangle(36, 34, 35);
    mesh.add_triangle(37, 39, 38);

    mesh
}

/// Creates a regular tetrahedron with its base centered at the origin, one
/// base vertex on the +x axis, and the apex above the centroid.
///
/// # Panics
///
/// Panics if the edge length is negative.
pub fn create_tetrahedron(edge_length: f64) -> MeshData {
    assert!(edge_length >= 0.0, "tetrahedron edge must be non-negative");

    let sqrt3 = 3.0f64.sqrt();
    let sqrt6 = 6.0f64.sqrt();

    let height = sqrt6 / 3.0 * edge_length;
    let top_height = sqrt6 / 4.0 * edge_length;
    let base_height = top_height - height;
    let half_edge = 0.5 * edge_length;

    let top = DVec3::new(0.0, 0.0, top_height);
    let base0 = DVec3::new(edge_length * sqrt3 / 3.0, 0.0, base_height);
    let base1 = DVec3::new(-edge_length * sqrt3 / 6.0, half_edge, base_height);
    let base2 = DVec3::new(-edge_length * sqrt3 / 6.0, -half_edge, base_height);

    // Dihedral angle between a face and an edge: acos(1/3).
    let cos_face: f64 = 1.0 / 3.0;
    let sin_face = (1.0 - cos_face * cos_face).sqrt();
    // The side faces look outward at 60 degrees either side of the front.
    let cos_vertex = 0.5;
    let sin_vertex = 0.5 * sqrt3;

    let front_normal = DVec3::new(-sin_face, 0.0, cos_face);
    let right_normal = DVec3::new(sin_face * cos_vertex, sin_face * sin_vertex, cos_face);
    let left_normal = DVec3::new(sin_face * cos_vertex, -sin_face * sin_vertex, cos_face);

    let mut mesh = MeshData::with_capacity(12, 4);

    // Front face (0-2).
    mesh.add_vertex(base2, front_normal, DVec2::new(0.25, 0.5));
    mesh.add_vertex(base1, front_normal, DVec2::new(0.75, 0.5));
    mesh.add_vertex(top, front_normal, DVec2::new(0.5, 1.0));
    // Right face (3-5).
    mesh.add_vertex(base1, right_normal, DVec2::new(0.75, 0.5));
    mesh.add_vertex(base0, right_normal, DVec2::new(0.5, 0.0));
    mesh.add_vertex(top, right_normal, DVec2::new(1.0, 0.0));
    // Left face (6-8).
    mesh.add_vertex(base0, left_normal, DVec2::new(0.5, 0.0));
    mesh.add_vertex(base2, left_normal, DVec2::new(0.25, 0.5));
    mesh.add_vertex(top, left_normal, DVec2::new(0.0, 0.0));
    // Base (9-11).
    mesh.add_vertex(base0, DVec3::NEG_Z, DVec2::new(0.5, 0.0));
    mesh.add_vertex(base1, DVec3::NEG_Z, DVec2::new(0.75, 0.5));
    mesh.add_vertex(base2, DVec3::NEG_Z, DVec2::new(0.25, 0.5));

    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(3, 5, 4);
    mesh.add_triangle(6, 8, 7);
    mesh.add_triangle(9, 11, 10);

    mesh
}
