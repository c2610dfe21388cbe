//! # Config Crate
//!
//! Centralized configuration constants for the shape-mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_RESOLUTION};
//!
//! let value: f64 = 1e-11; // smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! let segments = u32::max(DEFAULT_RESOLUTION, 8);
//! assert_eq!(segments, DEFAULT_RESOLUTION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
