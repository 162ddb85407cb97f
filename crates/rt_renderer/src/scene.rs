//! The scene: objects, their shared materials, one light and one camera.

use std::sync::Arc;

use rt_math::{Camera, Ray, Vec3};

use crate::hittable::{hit_range, Intersection, Object};
use crate::{Color, Material};

/// A light infinitely far away, shining along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels in (unit length)
    pub direction: Vec3,
    pub color: Color,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Create a light; `direction` is normalized.
    pub fn new(direction: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            direction: direction.normalize(),
            color,
            intensity,
        }
    }
}

/// Read-only view of a scene, as used while rendering.
///
/// Shading recurses through this trait rather than through global state.
/// Implementors are shared across render workers, hence `Sync`.
pub trait World: Sync {
    fn camera(&self) -> &Camera;

    fn light(&self) -> &DirectionalLight;

    /// Closest intersection along `ray`, or `None` when nothing is hit.
    fn nearest_hit(&self, ray: &Ray) -> Option<Intersection<'_>>;
}

/// Objects in insertion order plus the materials they share.
///
/// Built once, then only read while rendering.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<Object>,
    materials: Vec<Arc<Material>>,
    light: DirectionalLight,
    camera: Camera,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(camera: Camera, light: DirectionalLight) -> Self {
        Self {
            objects: Vec::new(),
            materials: Vec::new(),
            light,
            camera,
        }
    }

    /// Register a material and get a handle objects can share.
    ///
    /// The scene keeps its own reference until it is dropped.
    pub fn add_material(&mut self, material: Material) -> Arc<Material> {
        let material = Arc::new(material);
        self.materials.push(Arc::clone(&material));
        material
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn materials(&self) -> &[Arc<Material>] {
        &self.materials
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl World for Scene {
    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn light(&self) -> &DirectionalLight {
        &self.light
    }

    /// Linear scan over every object. On equal distances the object added
    /// first wins.
    fn nearest_hit(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let range = hit_range();
        let mut closest: Option<Intersection<'_>> = None;

        for object in &self.objects {
            if let Some(hit) = object.hit(ray, range) {
                if closest.map_or(true, |c| hit.distance < c.distance) {
                    closest = Some(hit);
                }
            }
        }

        closest
    }
}
