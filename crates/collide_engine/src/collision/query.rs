//! Stateless intersection queries
//!
//! Pure functions over well-formed primitives. Each query either returns
//! `None` (no intersection) or a [`Contact`] describing where the shapes
//! touch. Tangency counts as a hit: the comparison against the radius is
//! inclusive on both queries.

use crate::collision::primitives::{Plane, Sphere, Triangle};
use crate::foundation::math::Point3;

/// Contact information for an intersecting pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Closest point on the tested surface to the sphere center
    pub point: Point3,
    /// Penetration depth, `radius - distance(center, point)`; zero at tangency
    pub depth: f32,
}

/// Test a sphere against a triangle using the closest-point method
///
/// The closest point on the triangle to the sphere center is found via
/// [`Triangle::closest_point`]; the pair intersects iff that point lies
/// within the radius. On a hit the contact is the closest point itself.
pub fn sphere_triangle(sphere: &Sphere, triangle: &Triangle) -> Option<Contact> {
    let (closest, _) = triangle.closest_point(sphere.center());
    let dist_sq = (sphere.center() - closest).magnitude_squared();
    let radius = sphere.radius();

    if dist_sq <= radius * radius {
        Some(Contact {
            point: closest,
            depth: radius - dist_sq.sqrt(),
        })
    } else {
        None
    }
}

/// Test a sphere against an infinite plane
///
/// Intersects iff the perpendicular distance from the center to the plane
/// is within the radius. The contact is the foot of the perpendicular.
pub fn sphere_plane(sphere: &Sphere, plane: &Plane) -> Option<Contact> {
    let signed = sphere.center().coords.dot(&plane.normal()) - plane.distance();

    if signed.abs() <= sphere.radius() {
        Some(Contact {
            point: sphere.center() - plane.normal() * signed,
            depth: sphere.radius() - signed.abs(),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    fn ground_triangle() -> Triangle {
        Triangle::new(
            Point3::new(-1.0, 0.0, -1.0),
            Point3::new(-1.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, -1.0),
            Vec3::y(),
        )
        .unwrap()
    }

    #[test]
    fn test_sphere_above_triangle_misses() {
        // Perpendicular distance 2 with radius 1, foot inside the triangle.
        let sphere = Sphere::new(Point3::new(0.0, 2.0, 0.0), 1.0).unwrap();
        assert!(sphere_triangle(&sphere, &ground_triangle()).is_none());
    }

    #[test]
    fn test_sphere_tangent_to_triangle_hits() {
        // Distance equals the radius exactly: inclusive boundary.
        let sphere = Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0).unwrap();
        let contact = sphere_triangle(&sphere, &ground_triangle()).unwrap();
        assert_relative_eq!(contact.point, Point3::new(0.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(contact.depth, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_outside_projection_misses() {
        // Projection lands outside; nearest boundary point is the p2 vertex
        // at distance sqrt(10), well past the 0.5 radius.
        let sphere = Sphere::new(Point3::new(2.0, 0.0, 2.0), 0.5).unwrap();
        assert!(sphere_triangle(&sphere, &ground_triangle()).is_none());
    }

    #[test]
    fn test_center_on_plane_inside_triangle_hits() {
        // Distance to the closest point is zero for any positive radius, so
        // the contact coincides with the center and depth equals the radius.
        let sphere = Sphere::new(Point3::new(-0.5, 0.0, -0.5), 0.25).unwrap();
        let contact = sphere_triangle(&sphere, &ground_triangle()).unwrap();
        assert_relative_eq!(contact.point, Point3::new(-0.5, 0.0, -0.5), epsilon = 1e-6);
        assert_relative_eq!(contact.depth, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_penetrating_sphere_reports_depth() {
        let sphere = Sphere::new(Point3::new(0.0, 0.5, 0.0), 1.0).unwrap();
        let contact = sphere_triangle(&sphere, &ground_triangle()).unwrap();
        assert_relative_eq!(contact.point, Point3::new(0.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(contact.depth, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_hit_result_invariant_under_vertex_rotation() {
        let rotated = Triangle::new(
            Point3::new(-1.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, -1.0),
            Point3::new(-1.0, 0.0, -1.0),
            Vec3::y(),
        )
        .unwrap();

        let centers = [
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 2.0),
            Point3::new(-0.5, 0.3, -0.5),
        ];
        for center in centers {
            let sphere = Sphere::new(center, 1.0).unwrap();
            assert_eq!(
                sphere_triangle(&sphere, &ground_triangle()).is_some(),
                sphere_triangle(&sphere, &rotated).is_some(),
            );
        }
    }

    #[test]
    fn test_query_is_idempotent() {
        let sphere = Sphere::new(Point3::new(0.3, 0.4, -0.2), 0.7).unwrap();
        let triangle = ground_triangle();
        let first = sphere_triangle(&sphere, &triangle);
        let second = sphere_triangle(&sphere, &triangle);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sphere_plane_hit_and_miss() {
        let plane = Plane::default();

        let touching = Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0).unwrap();
        let contact = sphere_plane(&touching, &plane).unwrap();
        assert_relative_eq!(contact.point, Point3::new(0.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(contact.depth, 0.0, epsilon = 1e-6);

        let above = Sphere::new(Point3::new(0.0, 1.5, 0.0), 1.0).unwrap();
        assert!(sphere_plane(&above, &plane).is_none());

        // Center below the plane is symmetric.
        let below = Sphere::new(Point3::new(0.0, -0.5, 0.0), 1.0).unwrap();
        let contact = sphere_plane(&below, &plane).unwrap();
        assert_relative_eq!(contact.point, Point3::new(0.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(contact.depth, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_plane_with_offset() {
        let plane = Plane::new(Vec3::y(), 2.0).unwrap();
        let sphere = Sphere::new(Point3::new(3.0, 2.5, -1.0), 1.0).unwrap();
        let contact = sphere_plane(&sphere, &plane).unwrap();
        assert_relative_eq!(contact.point, Point3::new(3.0, 2.0, -1.0), epsilon = 1e-6);
        assert_relative_eq!(contact.depth, 0.5, epsilon = 1e-6);
    }
}
