//! Narrow-phase collision detection
//!
//! Provides the geometric primitives and the discrete, per-frame
//! intersection tests between them.
//!
//! # Module Organization
//!
//! - [`primitives`] - Validated geometric value types (sphere, plane,
//!   triangle) and the closest-point-on-triangle query
//! - [`query`] - Stateless intersection tests with contact reporting
//!
//! # Key Types
//!
//! - [`Sphere`], [`Plane`], [`Triangle`] - Primitive geometric types
//! - [`TriangleFeature`] - Which triangle region supplied a closest point
//! - [`query::Contact`] - Contact point and penetration depth of a hit

pub mod primitives;
pub mod query;

// Re-export commonly used types
pub use primitives::{Plane, PrimitiveError, Sphere, Triangle, TriangleFeature};
pub use query::{sphere_plane, sphere_triangle, Contact};
