//! # Surfaces of Revolution
//!
//! Pole-capped latitude/longitude tessellations: sphere, ellipsoid,
//! hemi-ellipsoid, and capsule.
//!
//! All four share one layout idea. Longitude rows carry `lon + 1` columns,
//! where the last column repeats the first at texture u = 1 so the seam
//! wraps cleanly. Poles are not shared vertices: each longitude slot gets
//! its own pole copy with the texture u centered on its fan blade, and the
//! pole v is inset from the texture edge to keep filtering off the border.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use config::constants::{MIN_LATITUDE_RESOLUTION, MIN_LONGITUDE_RESOLUTION, POLE_TEXTURE_INSET};
use glam::{DVec2, DVec3};

use crate::mesh::MeshData;

/// Clamps the longitude resolution to the minimum and rounds it up to even,
/// so the seam column never lands mid-quad.
fn even_longitude(longitude_resolution: u32) -> usize {
    let lon = longitude_resolution.max(MIN_LONGITUDE_RESOLUTION) as usize;
    lon + lon % 2
}

/// Creates a sphere of the given radius centered at the origin.
pub fn create_sphere(radius: f64, latitude_resolution: u32, longitude_resolution: u32) -> MeshData {
    create_ellipsoid(radius, radius, radius, latitude_resolution, longitude_resolution)
}

/// Creates an ellipsoid centered at the origin with independent per-axis
/// radii.
///
/// Normals are the unit sphere direction scaled into position by the radii,
/// so a sphere gets exact normals and a squashed ellipsoid gets smoothly
/// varying approximate ones.
///
/// # Panics
///
/// Panics if any radius is negative.
pub fn create_ellipsoid(
    x_radius: f64,
    y_radius: f64,
    z_radius: f64,
    latitude_resolution: u32,
    longitude_resolution: u32,
) -> MeshData {
    assert!(
        x_radius >= 0.0 && y_radius >= 0.0 && z_radius >= 0.0,
        "ellipsoid radii must be non-negative"
    );

    let lat_res = latitude_resolution.max(MIN_LATITUDE_RESOLUTION) as usize;
    let lon_res = even_longitude(longitude_resolution);
    let n_lon = lon_res + 1;

    let vertex_count = 2 * lon_res + (lat_res - 1) * n_lon;
    let triangle_count = 2 * (lat_res - 1) * lon_res;
    let mut mesh = MeshData::with_capacity(vertex_count, triangle_count);

    // South pole, one copy per fan blade.
    for j in 0..lon_res {
        let u = (j as f64 + 0.5) / lon_res as f64;
        mesh.add_vertex(
            DVec3::new(0.0, 0.0, -z_radius),
            DVec3::NEG_Z,
            DVec2::new(u, 1.0 - POLE_TEXTURE_INSET),
        );
    }

    // Mid-latitude rows, last column repeating the first at u = 1.
    for r in 1..lat_res {
        let lat = -FRAC_PI_2 + PI * r as f64 / lat_res as f64;
        let (sin_lat, cos_lat) = lat.sin_cos();
        for j in 0..n_lon {
            let (sin_lon, cos_lon) = (TAU * j as f64 / lon_res as f64).sin_cos();
            let normal = DVec3::new(cos_lon * cos_lat, sin_lon * cos_lat, sin_lat);
            let position = DVec3::new(
                x_radius * normal.x,
                y_radius * normal.y,
                z_radius * normal.z,
            );
            let tex = DVec2::new(j as f64 / lon_res as f64, 0.5 * (1.0 - sin_lat));
            mesh.add_vertex(position, normal, tex);
        }
    }

    // North pole.
    for j in 0..lon_res {
        let u = (j as f64 + 0.5) / lon_res as f64;
        mesh.add_vertex(
            DVec3::new(0.0, 0.0, z_radius),
            DVec3::Z,
            DVec2::new(u, POLE_TEXTURE_INSET),
        );
    }

    let mid = |r: usize, j: usize| (lon_res + (r - 1) * n_lon + j) as u32;
    let north_base = (lon_res + (lat_res - 1) * n_lon) as u32;

    for j in 0..lon_res {
        mesh.add_triangle(j as u32, mid(1, j + 1), mid(1, j));
    }
    for r in 1..lat_res - 1 {
        for j in 0..lon_res {
            let a = mid(r, j);
            let b = mid(r, j + 1);
            let c = mid(r + 1, j);
            let d = mid(r + 1, j + 1);
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(b, d, c);
        }
    }
    for j in 0..lon_res {
        mesh.add_triangle(
            north_base + j as u32,
            mid(lat_res - 1, j),
            mid(lat_res - 1, j + 1),
        );
    }

    mesh
}

/// Creates the top half of an ellipsoid, closed by a flat disk at z = 0.
///
/// The equator ring is duplicated: one copy carries the downward disk
/// normal, the other the outward surface normal, so the crease between cap
/// and surface shades sharp.
///
/// # Panics
///
/// Panics if any radius is negative.
pub fn create_hemi_ellipsoid(
    x_radius: f64,
    y_radius: f64,
    z_radius: f64,
    latitude_resolution: u32,
    longitude_resolution: u32,
) -> MeshData {
    assert!(
        x_radius >= 0.0 && y_radius >= 0.0 && z_radius >= 0.0,
        "hemi-ellipsoid radii must be non-negative"
    );

    let lat_res = latitude_resolution.max(MIN_LATITUDE_RESOLUTION) as usize;
    let lon_res = even_longitude(longitude_resolution);
    let n_lon = lon_res + 1;

    let vertex_count = 2 * lon_res + lat_res * n_lon;
    let triangle_count = 2 * (lat_res - 1) * lon_res;
    let mut mesh = MeshData::with_capacity(vertex_count, triangle_count);

    // Disk centers, one copy per fan blade.
    for j in 0..lon_res {
        let u = (j as f64 + 0.5) / lon_res as f64;
        mesh.add_vertex(
            DVec3::ZERO,
            DVec3::NEG_Z,
            DVec2::new(u, 1.0 - POLE_TEXTURE_INSET),
        );
    }

    // Disk rim, facing down.
    for j in 0..n_lon {
        let (sin_lon, cos_lon) = (TAU * j as f64 / lon_res as f64).sin_cos();
        mesh.add_vertex(
            DVec3::new(x_radius * cos_lon, y_radius * sin_lon, 0.0),
            DVec3::NEG_Z,
            DVec2::new(j as f64 / lon_res as f64, 0.5),
        );
    }

    // Curved surface rows from the equator up to just below the pole.
    for k in 0..lat_res - 1 {
        let lat = FRAC_PI_2 * k as f64 / (lat_res - 1) as f64;
        let (sin_lat, cos_lat) = lat.sin_cos();
        for j in 0..n_lon {
            let (sin_lon, cos_lon) = (TAU * j as f64 / lon_res as f64).sin_cos();
            let normal = DVec3::new(cos_lon * cos_lat, sin_lon * cos_lat, sin_lat);
            let position = DVec3::new(
                x_radius * normal.x,
                y_radius * normal.y,
                z_radius * normal.z,
            );
            let tex = DVec2::new(j as f64 / lon_res as f64, 0.5 * (1.0 - sin_lat));
            mesh.add_vertex(position, normal, tex);
        }
    }

    // North pole.
    for j in 0..lon_res {
        let u = (j as f64 + 0.5) / lon_res as f64;
        mesh.add_vertex(
            DVec3::new(0.0, 0.0, z_radius),
            DVec3::Z,
            DVec2::new(u, POLE_TEXTURE_INSET),
        );
    }

    let rim = |j: usize| (lon_res + j) as u32;
    let surf = |k: usize, j: usize| (lon_res + n_lon + k * n_lon + j) as u32;
    let pole_base = (lon_res + n_lon + (lat_res - 1) * n_lon) as u32;

    for j in 0..lon_res {
        mesh.add_triangle(j as u32, rim(j + 1), rim(j));
    }
    for k in 0..lat_res.saturating_sub(2) {
        for j in 0..lon_res {
            let a = surf(k, j);
            let b = surf(k, j + 1);
            let c = surf(k + 1, j);
            let d = surf(k + 1, j + 1);
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(b, d, c);
        }
    }
    for j in 0..lon_res {
        mesh.add_triangle(
            pole_base + j as u32,
            surf(lat_res - 2, j),
            surf(lat_res - 2, j + 1),
        );
    }

    mesh
}

/// Creates a capsule: a cylindrical body of the given height capped by two
/// half ellipsoids, centered at the origin.
///
/// Latitude rows are split between the two hemispheres; the band between
/// the last bottom row and the first top row forms the cylindrical side.
/// Texture v is allotted by arc share, so the caps keep `z_radius / (2 *
/// z_radius + height)` of the range each.
///
/// # Panics
///
/// Panics if the height or any radius is negative.
pub fn create_capsule(
    height: f64,
    x_radius: f64,
    y_radius: f64,
    z_radius: f64,
    latitude_resolution: u32,
    longitude_resolution: u32,
) -> MeshData {
    assert!(height >= 0.0, "capsule height must be non-negative");
    assert!(
        x_radius >= 0.0 && y_radius >= 0.0 && z_radius >= 0.0,
        "capsule radii must be non-negative"
    );

    // Each hemisphere needs at least one full row of its own.
    let lat_res = {
        let lat = latitude_resolution.max(4) as usize;
        lat + lat % 2
    };
    let lon_res = even_longitude(longitude_resolution);
    let n_lon = lon_res + 1;
    let half = lat_res / 2;
    let half_height = 0.5 * height;
    let tex_ratio = z_radius / (2.0 * z_radius + height);

    let vertex_count = 2 * lon_res + (lat_res - 2) * n_lon;
    let triangle_count = 2 * (lat_res - 2) * lon_res;
    let mut mesh = MeshData::with_capacity(vertex_count, triangle_count);

    // South pole.
    for j in 0..lon_res {
        let u = (j as f64 + 0.5) / lon_res as f64;
        mesh.add_vertex(
            DVec3::new(0.0, 0.0, -z_radius - half_height),
            DVec3::NEG_Z,
            DVec2::new(u, 1.0 - POLE_TEXTURE_INSET),
        );
    }

    // Hemisphere rows; the row index decides which cap the row belongs to.
    for r in 1..lat_res - 1 {
        let (lat, z_offset) = if r < half {
            (-FRAC_PI_2 + PI * r as f64 / (lat_res - 1) as f64, -half_height)
        } else {
            (PI * (r - half) as f64 / (lat_res - 1) as f64, half_height)
        };
        let (sin_lat, cos_lat) = lat.sin_cos();
        let v = if r < half {
            1.0 - (1.0 + sin_lat) * tex_ratio
        } else {
            (1.0 - sin_lat) * tex_ratio
        };
        for j in 0..n_lon {
            let (sin_lon, cos_lon) = (TAU * j as f64 / lon_res as f64).sin_cos();
            let normal = DVec3::new(cos_lon * cos_lat, sin_lon * cos_lat, sin_lat);
            let position = DVec3::new(
                x_radius * normal.x,
                y_radius * normal.y,
                z_radius * normal.z + z_offset,
            );
            mesh.add_vertex(position, normal, DVec2::new(j as f64 / lon_res as f64, v));
        }
    }

    // North pole.
    for j in 0..lon_res {
        let u = (j as f64 + 0.5) / lon_res as f64;
        mesh.add_vertex(
            DVec3::new(0.0, 0.0, z_radius + half_height),
            DVec3::Z,
            DVec2::new(u, POLE_TEXTURE_INSET),
        );
    }

    let mid = |r: usize, j: usize| (lon_res + (r - 1) * n_lon + j) as u32;
    let north_base = (lon_res + (lat_res - 2) * n_lon) as u32;

    for j in 0..lon_res {
        mesh.add_triangle(j as u32, mid(1, j + 1), mid(1, j));
    }
    for r in 1..lat_res - 2 {
        for j in 0..lon_res {
            let a = mid(r, j);
            let b = mid(r, j + 1);
            let c = mid(r + 1, j);
            let d = mid(r + 1, j + 1);
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(b, d, c);
        }
    }
    for j in 0..lon_res {
        mesh.add_triangle(
            north_base + j as u32,
            mid(lat_res - 2, j),
            mid(lat_res - 2, j + 1),
        );
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_counts() {
        let mesh = create_sphere(1.0, 16, 16);
        // 2 * 16 pole copies + 15 rows of 17 columns.
        assert_eq!(mesh.vertex_count(), 2 * 16 + 15 * 17);
        assert_eq!(mesh.triangle_count(), 2 * 15 * 16);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_sphere_radius() {
        let mesh = create_sphere(2.5, 12, 12);
        for v in mesh.vertices() {
            assert!((v.length() - 2.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sphere_unit_normals() {
        let mesh = create_sphere(3.0, 8, 8);
        for n in mesh.normals() {
            assert!((n.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ellipsoid_bounding_box() {
        let mesh = create_ellipsoid(1.0, 2.0, 3.0, 16, 16);
        let (min, max) = mesh.bounding_box();
        assert!((max.z - 3.0).abs() < 1e-12);
        assert!((min.z + 3.0).abs() < 1e-12);
        assert!((max.x - 1.0).abs() < 1e-9);
        assert!((max.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_odd_longitude_rounded_up() {
        let odd = create_sphere(1.0, 8, 9);
        let even = create_sphere(1.0, 8, 10);
        assert_eq!(odd, even);
    }

    #[test]
    fn test_resolution_clamped_to_minimum() {
        let mesh = create_sphere(1.0, 0, 0);
        assert!(mesh.validate().is_ok());
        assert!(mesh.triangle_count() > 0);
    }

    #[test]
    fn test_hemi_ellipsoid_sits_on_plane() {
        let mesh = create_hemi_ellipsoid(1.0, 1.0, 2.0, 12, 12);
        let (min, max) = mesh.bounding_box();
        assert!(min.z.abs() < 1e-12);
        assert!((max.z - 2.0).abs() < 1e-12);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_hemi_ellipsoid_minimum_latitude() {
        // One surface row, disk fan plus pole fan only.
        let mesh = create_hemi_ellipsoid(1.0, 1.0, 1.0, 2, 8);
        assert_eq!(mesh.triangle_count(), 2 * 8);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_capsule_extents() {
        let mesh = create_capsule(2.0, 0.5, 0.5, 0.5, 16, 16);
        let (min, max) = mesh.bounding_box();
        assert!((max.z - 1.5).abs() < 1e-12);
        assert!((min.z + 1.5).abs() < 1e-12);
        assert!((max.x - 0.5).abs() < 1e-9);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_capsule_counts() {
        let mesh = create_capsule(1.0, 0.5, 0.5, 0.5, 8, 8);
        assert_eq!(mesh.vertex_count(), 2 * 8 + 6 * 9);
        assert_eq!(mesh.triangle_count(), 2 * 6 * 8);
    }
}
