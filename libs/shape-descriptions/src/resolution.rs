//! # Mesh Resolution
//!
//! Tessellation resolution carried alongside a shape description.

use config::constants::{
    DEFAULT_LATITUDE_RESOLUTION, DEFAULT_LONGITUDE_RESOLUTION, DEFAULT_RESOLUTION,
};
use serde::{Deserialize, Serialize};

/// Tessellation resolution for the parametric generators.
///
/// Tube shapes (cylinder, cone, torus) read `resolution`; revolution
/// surfaces (sphere, ellipsoid, capsule) read `latitude` and `longitude`.
/// Polytopes ignore all three.
///
/// # Example
///
/// ```rust
/// use shape_descriptions::MeshResolution;
///
/// let coarse = MeshResolution::uniform(8);
/// assert_eq!(coarse.resolution, 8);
/// assert_eq!(coarse.latitude, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshResolution {
    /// Number of vertices per ring for tube shapes, including the duplicated
    /// texture-seam sample.
    pub resolution: u32,
    /// Number of latitude subdivisions for revolution surfaces.
    pub latitude: u32,
    /// Number of longitude subdivisions for revolution surfaces.
    pub longitude: u32,
}

impl MeshResolution {
    /// Creates a resolution using the same subdivision count everywhere.
    pub fn uniform(resolution: u32) -> Self {
        Self {
            resolution,
            latitude: resolution,
            longitude: resolution,
        }
    }
}

impl Default for MeshResolution {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            latitude: DEFAULT_LATITUDE_RESOLUTION,
            longitude: DEFAULT_LONGITUDE_RESOLUTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_config() {
        let res = MeshResolution::default();
        assert_eq!(res.resolution, DEFAULT_RESOLUTION);
        assert_eq!(res.latitude, DEFAULT_LATITUDE_RESOLUTION);
        assert_eq!(res.longitude, DEFAULT_LONGITUDE_RESOLUTION);
    }

    #[test]
    fn test_uniform() {
        let res = MeshResolution::uniform(12);
        assert_eq!(res.resolution, 12);
        assert_eq!(res.latitude, 12);
        assert_eq!(res.longitude, 12);
    }
}
