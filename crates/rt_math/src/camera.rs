use glam::Vec3;

use crate::Ray;

/// Pinhole camera.
///
/// The image plane sits `focal_distance` in front of `center` along
/// `forward`, and spans `width` × `height` scene units. Camera-plane
/// coordinates run from -0.5 to 0.5 on both axes, with +y pointing down the
/// image (row 0 is the top of the picture).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub width: f32,
    pub height: f32,
    pub focal_distance: f32,
}

impl Camera {
    /// Create a camera.
    ///
    /// `forward` and `up` are normalized, and `up` is re-orthogonalized
    /// against `forward` so the image plane is never skewed.
    pub fn new(center: Vec3, forward: Vec3, up: Vec3, width: f32, height: f32, focal_distance: f32) -> Self {
        let forward = forward.normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);

        Self {
            center,
            forward,
            up,
            width,
            height,
            focal_distance,
        }
    }

    /// Unit vector pointing to the right of the image plane.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up)
    }

    /// Build the primary ray through camera-plane coordinates `(x, y)`,
    /// both in `[-0.5, 0.5]`.
    pub fn cast_ray(&self, x: f32, y: f32) -> Ray {
        let direction = self.forward * self.focal_distance
            + self.right() * (x * self.width)
            - self.up * (y * self.height);

        Ray::new(self.center, direction.normalize())
    }

    /// Width / height of the image plane.
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Distance from the eye to an image plane of the given width so that it
/// covers `fov_degrees` horizontally.
pub fn focal_distance_from_fov(width: f32, fov_degrees: f32) -> f32 {
    (width / 2.0) / (fov_degrees.to_radians() / 2.0).tan()
}
