//! # Tube Shapes
//!
//! Ring-based sweeps along or around the z-axis: cylinder, cone, truncated
//! cone, and torus.
//!
//! Rings carry `resolution` samples, where the last sample repeats the
//! first at texture u = 1 for a clean wrap. Cap fans and side quads stop
//! one short of the ring length, so the coincident seam pair never forms a
//! triangle of its own.

use std::f64::consts::TAU;

use config::constants::{MIN_RING_RESOLUTION, TORUS_CLOSED_EPSILON};
use glam::{DVec2, DVec3};

use crate::mesh::MeshData;

fn checked_ring_resolution(resolution: u32) -> usize {
    assert!(
        resolution >= MIN_RING_RESOLUTION,
        "ring resolution must be at least {MIN_RING_RESOLUTION}, got {resolution}"
    );
    resolution as usize
}

/// Creates a circular cylinder along the z-axis.
///
/// When `centered` is true the cylinder spans `z in [-height/2, height/2]`,
/// otherwise `z in [0, height]`. The rim vertices are tripled: one copy per
/// cap with the axial normal, one pair for the wall with the radial normal,
/// so the cap edges shade sharp.
///
/// # Panics
///
/// Panics if the radius or height is negative, or if the resolution is
/// below the minimum.
pub fn create_cylinder(radius: f64, height: f64, resolution: u32, centered: bool) -> MeshData {
    assert!(radius >= 0.0, "cylinder radius must be non-negative");
    assert!(height >= 0.0, "cylinder height must be non-negative");
    let res = checked_ring_resolution(resolution);

    let z_top = if centered { 0.5 * height } else { height };
    let z_bottom = if centered { -0.5 * height } else { 0.0 };

    let mut mesh = MeshData::with_capacity(4 * res + 2, 4 * (res - 1));

    // Bottom cap rim.
    for i in 0..res {
        let (sin, cos) = (TAU * i as f64 / (res - 1) as f64).sin_cos();
        mesh.add_vertex(
            DVec3::new(radius * cos, radius * sin, z_bottom),
            DVec3::NEG_Z,
            DVec2::new(0.25 * (1.0 + sin) + 0.5, 0.25 * (1.0 - cos)),
        );
    }
    // Top cap rim.
    for i in 0..res {
        let (sin, cos) = (TAU * i as f64 / (res - 1) as f64).sin_cos();
        mesh.add_vertex(
            DVec3::new(radius * cos, radius * sin, z_top),
            DVec3::Z,
            DVec2::new(0.25 * (1.0 - sin), 0.25 * (1.0 - cos)),
        );
    }
    // Wall, bottom then top ring.
    for (z, v) in [(z_bottom, 1.0), (z_top, 0.5)] {
        for i in 0..res {
            let (sin, cos) = (TAU * i as f64 / (res - 1) as f64).sin_cos();
            mesh.add_vertex(
                DVec3::new(radius * cos, radius * sin, z),
                DVec3::new(cos, sin, 0.0),
                DVec2::new(i as f64 / (res - 1) as f64, v),
            );
        }
    }

    let bottom_center = mesh.add_vertex(
        DVec3::new(0.0, 0.0, z_bottom),
        DVec3::NEG_Z,
        DVec2::new(0.75, 0.25),
    );
    let top_center = mesh.add_vertex(
        DVec3::new(0.0, 0.0, z_top),
        DVec3::Z,
        DVec2::new(0.25, 0.25),
    );

    let r = res as u32;
    for i in 0..r - 1 {
        // Caps.
        mesh.add_triangle(i + 1, i, bottom_center);
        mesh.add_triangle(top_center, r + i, r + i + 1);
        // Wall quad.
        mesh.add_triangle(2 * r + i, 2 * r + i + 1, 3 * r + i);
        mesh.add_triangle(2 * r + i + 1, 3 * r + i + 1, 3 * r + i);
    }

    mesh
}

/// Creates a circular cone with its base centered at the origin and apex at
/// `z = height`.
///
/// The apex is a ring of coincident vertices, one per rim sample, each
/// carrying the slanted side normal of its own fan blade.
///
/// # Panics
///
/// Panics if the radius or height is negative, or if the resolution is
/// below the minimum.
pub fn create_cone(height: f64, radius: f64, resolution: u32) -> MeshData {
    assert!(radius >= 0.0, "cone radius must be non-negative");
    assert!(height >= 0.0, "cone height must be non-negative");
    let res = checked_ring_resolution(resolution);

    let slope = radius.atan2(height);
    let (sin_slope, cos_slope) = slope.sin_cos();

    let mut mesh = MeshData::with_capacity(3 * res + 1, 2 * (res - 1));

    // Base rim, facing down.
    for i in 0..res {
        let (sin, cos) = (TAU * i as f64 / (res - 1) as f64).sin_cos();
        mesh.add_vertex(
            DVec3::new(radius * cos, radius * sin, 0.0),
            DVec3::NEG_Z,
            DVec2::new(0.25 * (1.0 + sin), 0.25 * (1.0 - cos)),
        );
    }
    // Side rim.
    for i in 0..res {
        let (sin, cos) = (TAU * i as f64 / (res - 1) as f64).sin_cos();
        mesh.add_vertex(
            DVec3::new(radius * cos, radius * sin, 0.0),
            DVec3::new(cos_slope * cos, cos_slope * sin, sin_slope),
            DVec2::new(i as f64 / (res - 1) as f64, 1.0),
        );
    }
    // Apex ring.
    for i in 0..res {
        let (sin, cos) = (TAU * i as f64 / (res - 1) as f64).sin_cos();
        mesh.add_vertex(
            DVec3::new(0.0, 0.0, height),
            DVec3::new(cos_slope * cos, cos_slope * sin, sin_slope),
            DVec2::new(i as f64 / (res - 1) as f64, 0.5),
        );
    }

    let base_center = mesh.add_vertex(DVec3::ZERO, DVec3::NEG_Z, DVec2::new(0.25, 0.25));

    let r = res as u32;
    for i in 0..r - 1 {
        mesh.add_triangle(base_center, i + 1, i);
        mesh.add_triangle(r + i, r + i + 1, 2 * r + i);
    }

    mesh
}

/// Creates a truncated cone with elliptical base and top cross-sections,
/// base centered at the origin and top at `z = height`.
///
/// Side normals are computed per sample from the local radii, so elliptical
/// cross-sections get a correctly tilted normal all the way around.
///
/// # Panics
///
/// Panics if the height or any radius is negative, or if the resolution is
/// below the minimum.
pub fn create_truncated_cone(
    height: f64,
    x_base_radius: f64,
    y_base_radius: f64,
    x_top_radius: f64,
    y_top_radius: f64,
    resolution: u32,
) -> MeshData {
    assert!(height >= 0.0, "truncated cone height must be non-negative");
    assert!(
        x_base_radius >= 0.0 && y_base_radius >= 0.0 && x_top_radius >= 0.0 && y_top_radius >= 0.0,
        "truncated cone radii must be non-negative"
    );
    let res = checked_ring_resolution(resolution);

    let mut mesh = MeshData::with_capacity(4 * res + 2, 4 * (res - 1));

    let mut base_points = Vec::with_capacity(res);
    let mut top_points = Vec::with_capacity(res);

    // Caps first.
    for i in 0..res {
        let (sin, cos) = (TAU * i as f64 / (res - 1) as f64).sin_cos();
        let base = DVec3::new(x_base_radius * cos, y_base_radius * sin, 0.0);
        base_points.push(base);
        top_points.push(DVec3::new(x_top_radius * cos, y_top_radius * sin, height));
        mesh.add_vertex(
            base,
            DVec3::NEG_Z,
            DVec2::new(0.25 * (1.0 + sin) + 0.5, 0.25 * (1.0 - cos)),
        );
    }
    for i in 0..res {
        let (sin, cos) = (TAU * i as f64 / (res - 1) as f64).sin_cos();
        mesh.add_vertex(
            top_points[i],
            DVec3::Z,
            DVec2::new(0.25 * (1.0 - sin), 0.25 * (1.0 - cos)),
        );
    }
    // Side rings, reusing the cap positions with slanted normals.
    for ring in 0..2 {
        for i in 0..res {
            let base = base_points[i];
            let top = top_points[i];
            let base_radius = base.truncate().length();
            let top_radius = top.truncate().length();
            let opening = ((base_radius - top_radius) / height).atan();
            let (sin_open, cos_open) = opening.sin_cos();
            let (point, around) = if ring == 0 {
                (base, base.y.atan2(base.x))
            } else {
                (top, top.y.atan2(top.x))
            };
            let v = if ring == 0 { 1.0 } else { 0.5 };
            mesh.add_vertex(
                point,
                DVec3::new(around.cos() * cos_open, around.sin() * cos_open, sin_open),
                DVec2::new(i as f64 / (res - 1) as f64, v),
            );
        }
    }

    let bottom_center = mesh.add_vertex(DVec3::ZERO, DVec3::NEG_Z, DVec2::new(0.75, 0.25));
    let top_center = mesh.add_vertex(
        DVec3::new(0.0, 0.0, height),
        DVec3::Z,
        DVec2::new(0.25, 0.25),
    );

    let r = res as u32;
    for i in 0..r - 1 {
        mesh.add_triangle(bottom_center, i + 1, i);
        mesh.add_triangle(top_center, r + i, r + i + 1);
        mesh.add_triangle(2 * r + i, 2 * r + i + 1, 3 * r + i);
        mesh.add_triangle(2 * r + i + 1, 3 * r + i + 1, 3 * r + i);
    }

    mesh
}

/// Creates a closed torus around the z-axis, centroid at the origin.
pub fn create_torus(major_radius: f64, minor_radius: f64, resolution: u32) -> MeshData {
    create_arc_torus(0.0, TAU, major_radius, minor_radius, resolution)
}

/// Creates a partial torus swept from `start_angle` to `end_angle` around
/// the z-axis.
///
/// When the sweep spans a full turn (within a small tolerance) the major
/// rings wrap around with no duplicate ring and no caps. Otherwise the
/// sweep ends get flat elliptical caps whose normals point along the sweep
/// tangent, and the tube texture u is compressed into [0, 0.5] to leave
/// room for the cap charts.
///
/// # Panics
///
/// Panics if a radius is negative or the resolution is below the minimum.
pub fn create_arc_torus(
    start_angle: f64,
    end_angle: f64,
    major_radius: f64,
    minor_radius: f64,
    resolution: u32,
) -> MeshData {
    assert!(
        major_radius >= 0.0 && minor_radius >= 0.0,
        "torus radii must be non-negative"
    );
    let res = checked_ring_resolution(resolution);

    let span = end_angle - start_angle;
    let closed = (span - TAU).abs() < TORUS_CLOSED_EPSILON;

    let major_n = res;
    let minor_n = res;
    let step = if closed {
        span / major_n as f64
    } else {
        span / (major_n - 1) as f64
    };

    let vertex_count = if closed {
        major_n * minor_n
    } else {
        major_n * minor_n + 2 * (minor_n + 1)
    };
    let band_count = if closed { major_n } else { major_n - 1 };
    let triangle_count = 2 * band_count * (minor_n - 1) + if closed { 0 } else { 2 * minor_n };
    let mut mesh = MeshData::with_capacity(vertex_count, triangle_count);

    // Tube rings.
    for i in 0..major_n {
        let major = start_angle + i as f64 * step;
        let (sin_major, cos_major) = major.sin_cos();
        let center = DVec3::new(major_radius * cos_major, major_radius * sin_major, 0.0);
        let v = i as f64 / band_count as f64;

        for j in 0..minor_n {
            let (sin_minor, cos_minor) = (TAU * j as f64 / (minor_n - 1) as f64).sin_cos();
            let normal = DVec3::new(
                cos_major * cos_minor,
                sin_major * cos_minor,
                sin_minor,
            );
            let mut u = j as f64 / (minor_n - 1) as f64;
            if !closed {
                u *= 0.5;
            }
            mesh.add_vertex(center + minor_radius * normal, normal, DVec2::new(u, v));
        }
    }

    let ring = |i: usize, j: usize| (i * minor_n + j) as u32;

    for i in 0..band_count {
        let next = (i + 1) % major_n;
        for j in 0..minor_n - 1 {
            mesh.add_triangle(ring(next, j), ring(next, j + 1), ring(i, j + 1));
            mesh.add_triangle(ring(next, j), ring(i, j + 1), ring(i, j));
        }
    }

    if !closed {
        // Cap rims sample the minor circle without a seam duplicate; the fan
        // wraps with modulo indexing instead.
        for (angle, flip, v_center) in [(start_angle, false, 0.25), (end_angle, true, 0.75)] {
            let (sin_sweep, cos_sweep) = angle.sin_cos();
            let center = DVec3::new(major_radius * cos_sweep, major_radius * sin_sweep, 0.0);
            let normal = if flip {
                DVec3::new(-sin_sweep, cos_sweep, 0.0)
            } else {
                DVec3::new(sin_sweep, -cos_sweep, 0.0)
            };

            let rim_base = mesh.vertex_count() as u32;
            for j in 0..minor_n {
                let (sin_minor, cos_minor) = (TAU * j as f64 / minor_n as f64).sin_cos();
                let offset = DVec3::new(
                    cos_sweep * cos_minor,
                    sin_sweep * cos_minor,
                    sin_minor,
                );
                let tex = if flip {
                    DVec2::new(0.75 - 0.25 * cos_minor, 0.75 - 0.25 * sin_minor)
                } else {
                    DVec2::new(0.75 + 0.25 * cos_minor, 0.25 - 0.25 * sin_minor)
                };
                mesh.add_vertex(center + minor_radius * offset, normal, tex);
            }
            let center_index =
                mesh.add_vertex(center, normal, DVec2::new(0.75, v_center));

            for j in 0..minor_n {
                let next = ((j + 1) % minor_n) as u32;
                if flip {
                    mesh.add_triangle(center_index, rim_base + next, rim_base + j as u32);
                } else {
                    mesh.add_triangle(center_index, rim_base + j as u32, rim_base + next);
                }
            }
        }
    }

    mesh
}
