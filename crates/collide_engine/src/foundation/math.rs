//! Math utilities and types
//!
//! Provides fundamental math types for the collision scene. Positions are
//! [`Point3`] and directions are [`Vec3`]; keeping the two distinct is what
//! preserves translation invariance of directions (the role the homogeneous
//! w component played in the source coordinate convention).

pub use nalgebra::{Unit, Vector3};

/// 3D vector type, used for directions and displacements
pub type Vec3 = Vector3<f32>;

/// 3D point type, used for positions
pub type Point3 = nalgebra::Point3<f32>;

/// Tolerance for unit-length and orthogonality checks on supplied normals
pub const NORMAL_TOLERANCE: f32 = 1.0e-4;
