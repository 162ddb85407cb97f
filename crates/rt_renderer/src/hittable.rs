//! Intersection records and the closed set of intersectable objects.

use std::sync::Arc;

use rt_math::{Interval, Ray, Vec3};

use crate::{Material, Sphere, Triangle};

/// Smallest accepted hit distance.
///
/// Secondary rays start exactly on a surface; anything closer than this is
/// the surface they left.
pub const HIT_EPSILON: f32 = 1e-4;

/// Range of valid hit distances: strictly positive and finite.
#[inline]
pub fn hit_range() -> Interval {
    Interval::new(HIT_EPSILON, f32::INFINITY)
}

/// Record of a ray-object intersection.
///
/// Borrowed from the scene that produced it and dropped by the caller that
/// asked; never stored.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection (outward, unit length)
    pub normal: Vec3,
    /// Distance along the ray
    pub distance: f32,
    /// Material of the object that was hit
    pub material: &'a Material,
}

/// Every kind of primitive a scene can hold.
#[derive(Debug, Clone)]
pub enum Object {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Object {
    /// Test the ray against this object, accepting only distances strictly
    /// inside `ray_t`.
    #[inline]
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        match self {
            Object::Sphere(sphere) => sphere.hit(ray, ray_t),
            Object::Triangle(triangle) => triangle.hit(ray, ray_t),
        }
    }

    /// The material shared with other objects.
    pub fn material(&self) -> &Arc<Material> {
        match self {
            Object::Sphere(sphere) => sphere.material(),
            Object::Triangle(triangle) => triangle.material(),
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<Triangle> for Object {
    fn from(triangle: Triangle) -> Self {
        Object::Triangle(triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_range_excludes_origin() {
        let range = hit_range();
        assert!(!range.surrounds(0.0));
        assert!(!range.surrounds(-1.0));
        assert!(!range.surrounds(HIT_EPSILON));
        assert!(!range.surrounds(f32::INFINITY));
        assert!(range.surrounds(1.0));
    }

    #[test]
    fn test_object_dispatch() {
        let material = Arc::new(Material::Normal);
        let sphere: Object = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, material.clone()).into();
        let triangle: Object = Triangle::new(
            Vec3::new(-1.0, -1.0, -2.0),
            Vec3::new(1.0, -1.0, -2.0),
            Vec3::new(0.0, 1.0, -2.0),
            material.clone(),
        )
        .into();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let sphere_hit = sphere.hit(&ray, hit_range()).unwrap();
        let triangle_hit = triangle.hit(&ray, hit_range()).unwrap();

        assert!((sphere_hit.distance - 4.0).abs() < 1e-4);
        assert!((triangle_hit.distance - 2.0).abs() < 1e-4);
        assert!(Arc::ptr_eq(sphere.material(), &material));
        assert_eq!(Arc::strong_count(&material), 3);
    }
}
