//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::sync::Arc;

use rt_math::{Interval, Ray, Vec3};

use crate::{hittable::Intersection, Material};

/// Determinants below this are treated as a ray parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A flat-shaded triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices, counter-clockwise when seen from the front
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length, zero if degenerate)
    normal: Vec3,
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The counter-clockwise winding defines the outward face normal.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<Material>) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Möller-Trumbore: ray parameter `t` and barycentric `(u, v)` of the
    /// point where the ray crosses the triangle, if it does.
    ///
    /// `u` weights `v1` and `v` weights `v2`; the point is
    /// `v0 + u (v1 - v0) + v (v2 - v0)`. No range check on `t`.
    pub fn barycentric(&self, ray: &Ray) -> Option<(f32, f32, f32)> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle (or the triangle is degenerate)
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        Some((f * edge2.dot(q), u, v))
    }

    /// Intersection with a distance strictly inside `ray_t`.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let (t, _, _) = self.barycentric(ray)?;

        if !ray_t.surrounds(t) {
            return None;
        }

        Some(Intersection {
            point: ray.at(t),
            normal: self.normal,
            distance: t,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::hit_range;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn xy_triangle() -> Triangle {
        // Right triangle in the z=0 plane, facing +z
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Arc::new(Material::Normal),
        )
    }

    fn down_at(x: f32, y: f32) -> Ray {
        Ray::new(Vec3::new(x, y, 1.0), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_triangle_hit() {
        // Triangle in XY plane at z=-1
        let tri = Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            Arc::new(Material::Normal),
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = tri.hit(&ray, hit_range()).unwrap();

        assert!((hit.distance - 1.0).abs() < 0.001);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_triangle_miss() {
        let tri = xy_triangle();

        // Ray pointing away
        let ray = Ray::new(Vec3::new(0.2, 0.2, 1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(tri.hit(&ray, hit_range()).is_none());
    }

    #[test]
    fn test_counter_clockwise_normal() {
        assert_eq!(xy_triangle().normal(), Vec3::Z);

        let flipped = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X, Arc::new(Material::Normal));
        assert_eq!(flipped.normal(), -Vec3::Z);
    }

    #[test]
    fn test_edge_perturbation_flips_result() {
        let tri = xy_triangle();

        // hypotenuse u + v = 1
        assert!(tri.hit(&down_at(0.5, 0.49), hit_range()).is_some());
        assert!(tri.hit(&down_at(0.5, 0.51), hit_range()).is_none());

        // left edge x = 0
        assert!(tri.hit(&down_at(0.01, 0.3), hit_range()).is_some());
        assert!(tri.hit(&down_at(-0.01, 0.3), hit_range()).is_none());

        // bottom edge y = 0
        assert!(tri.hit(&down_at(0.3, 0.01), hit_range()).is_some());
        assert!(tri.hit(&down_at(0.3, -0.01), hit_range()).is_none());
    }

    #[test]
    fn test_hit_barycentrics_stay_in_triangle() {
        let tri = Triangle::new(
            Vec3::new(-2.0, 1.0, 5.0),
            Vec3::new(3.0, -1.0, 4.0),
            Vec3::new(0.5, 4.0, 6.0),
            Arc::new(Material::Normal),
        );
        let mut rng = StdRng::seed_from_u64(7);
        let mut hits = 0;

        for _ in 0..2000 {
            let target = Vec3::new(rng.gen_range(-3.0..4.0), rng.gen_range(-2.0..5.0), 5.0);
            let ray = Ray::new(Vec3::ZERO, target.normalize());

            if let Some((t, u, v)) = tri.barycentric(&ray) {
                hits += 1;
                assert!((0.0..=1.0).contains(&u));
                assert!((0.0..=1.0).contains(&v));
                assert!(u + v <= 1.0);
                assert!(t > 0.0);

                let [v0, v1, v2] = tri.vertices();
                let on_plane = v0 + u * (v1 - v0) + v * (v2 - v0);
                assert!((on_plane - ray.at(t)).length() < 1e-3);
            }
        }

        assert!(hits > 0);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let tri = xy_triangle();
        let ray = Ray::new(Vec3::new(-1.0, 0.2, 0.0), Vec3::X);
        assert!(tri.barycentric(&ray).is_none());
    }

    #[test]
    fn test_degenerate_triangle_never_hits() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, Arc::new(Material::Normal));

        assert_eq!(tri.normal(), Vec3::ZERO);
        assert!(tri.hit(&down_at(0.5, 0.0), hit_range()).is_none());
    }

    #[test]
    fn test_behind_origin_is_not_a_hit() {
        let tri = xy_triangle();
        let ray = Ray::new(Vec3::new(0.2, 0.2, -1.0), Vec3::new(0.0, 0.0, -1.0));

        let (t, _, _) = tri.barycentric(&ray).unwrap();
        assert!(t < 0.0);
        assert!(tri.hit(&ray, hit_range()).is_none());
    }
}
