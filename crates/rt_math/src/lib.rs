// Re-export glam for convenience
pub use glam::*;

// Ray tracing math types
mod camera;
mod interval;
mod ray;

pub use camera::{focal_distance_from_fov, Camera};
pub use interval::Interval;
pub use ray::Ray;

/// Reflect `v` about the normal `n`.
///
/// `n` is expected to be unit length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let r = reflect(v, Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let v = Vec3::new(0.3, -0.8, 0.52).normalize();
        let n = Vec3::new(0.0, 1.0, 1.0).normalize();
        assert!((reflect(v, n).length() - 1.0).abs() < 1e-5);
    }
}
