//! Primitive collision shapes
//!
//! Provides the geometric value types used by the narrow-phase tests. All
//! constructors validate their inputs: a primitive that exists is well
//! formed, so the queries in [`super::query`] never need runtime checks.

use crate::foundation::math::{Point3, Vec3, NORMAL_TOLERANCE};
use thiserror::Error;

/// Errors produced when constructing an ill-formed primitive
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveError {
    /// Sphere radius was zero, negative, or not finite
    #[error("sphere radius must be positive and finite, got {radius}")]
    NonPositiveRadius {
        /// The rejected radius value
        radius: f32,
    },

    /// A supplied normal was not unit length within tolerance
    #[error("normal must be unit length, got length {length}")]
    NonUnitNormal {
        /// Length of the rejected normal
        length: f32,
    },

    /// Triangle vertices are collinear or coincident
    #[error("triangle vertices are degenerate (cross product length {cross_length})")]
    DegenerateTriangle {
        /// Length of the edge cross product for the rejected vertices
        cross_length: f32,
    },
}

fn validate_unit(normal: Vec3) -> Result<Vec3, PrimitiveError> {
    let length = normal.magnitude();
    if !length.is_finite() || (length - 1.0).abs() > NORMAL_TOLERANCE {
        return Err(PrimitiveError::NonUnitNormal { length });
    }
    Ok(normal)
}

/// A sphere positioned in world space
///
/// The center moves frame to frame; the radius is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f32,
}

impl Default for Sphere {
    /// Unit sphere at the origin
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            radius: 1.0,
        }
    }
}

impl Sphere {
    /// Creates a sphere, rejecting non-positive or non-finite radii
    pub fn new(center: Point3, radius: f32) -> Result<Self, PrimitiveError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PrimitiveError::NonPositiveRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// The center position in world space
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// The sphere radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Displace the center by a delta vector
    pub fn translate(&mut self, delta: Vec3) {
        self.center += delta;
    }
}

/// An infinite plane in normal/distance form
///
/// A point `p` lies on the plane iff `dot(p, normal) == distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    distance: f32,
}

impl Default for Plane {
    /// The ground plane: +Y normal through the origin
    fn default() -> Self {
        Self {
            normal: Vec3::y(),
            distance: 0.0,
        }
    }
}

impl Plane {
    /// Creates a plane, rejecting non-unit normals
    pub fn new(normal: Vec3, distance: f32) -> Result<Self, PrimitiveError> {
        Ok(Self {
            normal: validate_unit(normal)?,
            distance,
        })
    }

    /// The unit plane normal
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed offset from the origin along the normal
    pub fn distance(&self) -> f32 {
        self.distance
    }
}

/// Which region of a triangle supplied a closest point
///
/// Edge candidates are evaluated in the order AB, BC, CA; on a distance tie
/// the earlier edge wins, so results are deterministic for identical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleFeature {
    /// The projection of the query point onto the plane fell inside the triangle
    Interior,
    /// Closest point lies on edge p0-p1
    EdgeAB,
    /// Closest point lies on edge p1-p2
    EdgeBC,
    /// Closest point lies on edge p2-p0
    EdgeCA,
}

/// A triangle with a supplied face normal
///
/// The normal is taken as given rather than recomputed from the vertices so
/// callers control the facing direction. It must be unit length (checked)
/// and orthogonal to the vertex plane with winding-consistent orientation
/// (precondition, unchecked). Vertices must not be collinear; queries on a
/// degenerate triangle are undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    p0: Point3,
    p1: Point3,
    p2: Point3,
    normal: Vec3,
}

impl Triangle {
    /// Creates a triangle with an externally supplied normal
    pub fn new(p0: Point3, p1: Point3, p2: Point3, normal: Vec3) -> Result<Self, PrimitiveError> {
        Ok(Self {
            p0,
            p1,
            p2,
            normal: validate_unit(normal)?,
        })
    }

    /// Creates a triangle, deriving the normal from vertex winding
    ///
    /// Fails on collinear or coincident vertices. This is the only
    /// constructor that detects degeneracy.
    pub fn from_vertices(p0: Point3, p1: Point3, p2: Point3) -> Result<Self, PrimitiveError> {
        let cross = (p1 - p0).cross(&(p2 - p0));
        let cross_length = cross.magnitude();
        if cross_length <= NORMAL_TOLERANCE {
            return Err(PrimitiveError::DegenerateTriangle { cross_length });
        }
        Ok(Self {
            p0,
            p1,
            p2,
            normal: cross / cross_length,
        })
    }

    /// First vertex
    pub fn p0(&self) -> Point3 {
        self.p0
    }

    /// Second vertex
    pub fn p1(&self) -> Point3 {
        self.p1
    }

    /// Third vertex
    pub fn p2(&self) -> Point3 {
        self.p2
    }

    /// The supplied unit face normal
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed distance from a point to the triangle's supporting plane
    pub fn plane_distance(&self, point: Point3) -> f32 {
        (point - self.p0).dot(&self.normal)
    }

    /// Get the closest point on the triangle to a given point
    ///
    /// Projects the point onto the supporting plane; if the projection falls
    /// inside the triangle it is the answer, otherwise the nearest of the
    /// three clamped edge projections wins (ties broken by edge order).
    pub fn closest_point(&self, point: Point3) -> (Point3, TriangleFeature) {
        let projected = point - self.normal * self.plane_distance(point);

        if self.contains_projected(projected) {
            return (projected, TriangleFeature::Interior);
        }

        let mut best = closest_point_on_segment(self.p0, self.p1, point);
        let mut best_feature = TriangleFeature::EdgeAB;
        let mut best_dist_sq = (point - best).magnitude_squared();

        let remaining = [
            (self.p1, self.p2, TriangleFeature::EdgeBC),
            (self.p2, self.p0, TriangleFeature::EdgeCA),
        ];
        for (a, b, feature) in remaining {
            let candidate = closest_point_on_segment(a, b, point);
            let dist_sq = (point - candidate).magnitude_squared();
            if dist_sq < best_dist_sq {
                best = candidate;
                best_feature = feature;
                best_dist_sq = dist_sq;
            }
        }

        (best, best_feature)
    }

    /// Edge-sign containment test for a point already on the supporting plane
    ///
    /// A point exactly on an edge counts as inside.
    fn contains_projected(&self, projected: Point3) -> bool {
        let edges = [(self.p0, self.p1), (self.p1, self.p2), (self.p2, self.p0)];
        edges.into_iter().all(|(a, b)| {
            let cross = (b - a).cross(&(projected - a));
            cross.dot(&self.normal) >= 0.0
        })
    }
}

/// Closest point on segment `a`-`b` to `point`, via projection clamped to [0, 1]
fn closest_point_on_segment(a: Point3, b: Point3, point: Point3) -> Point3 {
    let ab = b - a;
    let t = (point - a).dot(&ab) / ab.magnitude_squared();
    a + ab * t.clamp(0.0, 1.0)
}
