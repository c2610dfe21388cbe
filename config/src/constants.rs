//! # Configuration Constants
//!
//! Centralized constants for the shape-mesh pipeline. All geometry
//! tolerances, tessellation defaults, and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default and minimum tessellation parameters
//! - **Texture**: Texture-coordinate placement tweaks
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for general floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, e.g. when rejecting a zero-length line segment or
/// a zero-size polygon bounding box.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance on the swept angle of an arc torus for deciding that the torus
/// is closed.
///
/// A torus whose major sweep satisfies `|end - start - 2π| < TORUS_CLOSED_EPSILON`
/// is generated as a closed ring (last major ring identified with the first);
/// anything else is generated open, with a cap disk at each cut plane.
pub const TORUS_CLOSED_EPSILON: f64 = 1e-3;

/// Tolerance used when voting on whether a 3D polygon is planar.
///
/// The fan triangulation of a 3D polygon computes one normal per triangle;
/// if all of them agree component-wise within this tolerance the polygon is
/// treated as flat and every vertex receives the shared face normal.
pub const PLANARITY_EPSILON: f64 = 1e-7;

/// Tolerance for detecting a direction vector aligned with the polar (z) axis.
///
/// When a line segment points within this tolerance of ±z, the yaw angle of
/// its oriented box is forced to zero instead of evaluating a singular
/// `atan2(0, 0)`.
pub const POLAR_AXIS_EPSILON: f64 = 1e-7;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default resolution for axisymmetric tube shapes (cylinder, cone, torus).
///
/// The number of vertices per ring, including the duplicated texture-seam
/// sample.
pub const DEFAULT_RESOLUTION: u32 = 32;

/// Default latitude resolution for revolution surfaces (sphere, ellipsoid).
pub const DEFAULT_LATITUDE_RESOLUTION: u32 = 32;

/// Default longitude resolution for revolution surfaces (sphere, ellipsoid).
///
/// Forced to an even value by the generators so the texture seam stays
/// symmetric.
pub const DEFAULT_LONGITUDE_RESOLUTION: u32 = 32;

/// Smallest latitude resolution a revolution surface is generated with.
///
/// Requests below this are clamped up so the mesh keeps at least one
/// mid-latitude ring between the two pole fans, producing a minimal valid
/// mesh rather than an error.
pub const MIN_LATITUDE_RESOLUTION: u32 = 2;

/// Smallest longitude resolution a revolution surface is generated with.
pub const MIN_LONGITUDE_RESOLUTION: u32 = 4;

/// Smallest ring resolution accepted by the tube generators.
///
/// A ring needs at least two samples (one real segment plus the seam
/// duplicate); fewer is a programming error and fails fast.
pub const MIN_RING_RESOLUTION: u32 = 2;

// =============================================================================
// TEXTURE CONSTANTS
// =============================================================================

/// Vertical inset applied to pole-vertex texture coordinates.
///
/// Pole vertices sample the texture at `V = POLE_TEXTURE_INSET` (north) and
/// `V = 1 - POLE_TEXTURE_INSET` (south) instead of exactly 0/1, avoiding
/// atlas-edge bleeding artifacts at the fan tips.
pub const POLE_TEXTURE_INSET: f64 = 1.0 / 256.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme resolutions.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;
