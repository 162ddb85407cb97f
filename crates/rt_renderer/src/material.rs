//! Surface shading.
//!
//! A material turns an intersection into radiance. Phong materials add
//! ambient, diffuse and specular terms for the scene's directional light
//! and blend in one mirror reflection per bounce, up to `MAX_DEPTH`.

use rt_math::{reflect, Ray, Vec3};

use crate::{hittable::Intersection, scene::DirectionalLight, World};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Maximum reflection recursion depth. A primary ray costs at most
/// `MAX_DEPTH + 1` nearest-hit queries.
pub const MAX_DEPTH: u32 = 2;

/// Ambient coefficient applied to every Phong surface.
///
/// `PhongMaterial::ambient_intensity` is not consulted while shading; this
/// constant is.
pub const AMBIENT_INTENSITY: f32 = 0.2;

/// Every shading behaviour a surface can have.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Local Phong illumination plus mirror reflection.
    Phong(PhongMaterial),
    /// Debug view: the surface normal, read as a colour.
    Normal,
}

impl Material {
    /// Radiance leaving `hit` back along `ray`.
    ///
    /// `depth` counts the reflection bounces already taken; primary rays
    /// shade at depth 0.
    pub fn shade(&self, hit: &Intersection, world: &dyn World, ray: &Ray, depth: u32) -> Color {
        match self {
            Material::Phong(phong) => phong.shade(hit, world, ray, depth),
            Material::Normal => hit.normal,
        }
    }
}

impl From<PhongMaterial> for Material {
    fn from(phong: PhongMaterial) -> Self {
        Material::Phong(phong)
    }
}

/// Phong surface parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PhongMaterial {
    pub surface_color: Color,
    /// Diffuse coefficient
    pub diffuse: f32,
    /// Specular exponent
    pub specular_exponent: f32,
    /// Specular coefficient
    pub specular: f32,
    /// Accepted for completeness; shading uses `AMBIENT_INTENSITY`.
    pub ambient_intensity: f32,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            surface_color: Color::splat(0.6),
            diffuse: 0.2,
            specular_exponent: 10.0,
            specular: 0.2,
            ambient_intensity: 0.1,
        }
    }
}

/// The three additive terms of the Phong model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongTerms {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl PhongTerms {
    pub fn total(&self) -> Color {
        self.ambient + self.diffuse + self.specular
    }
}

impl PhongMaterial {
    /// Create a material of the given colour with default coefficients.
    pub fn new(surface_color: Color) -> Self {
        Self {
            surface_color,
            ..Default::default()
        }
    }

    /// Local illumination at `hit` for a viewer looking along `ray`.
    pub fn terms(&self, hit: &Intersection, light: &DirectionalLight, ray: &Ray) -> PhongTerms {
        let ambient = self.surface_color * AMBIENT_INTENSITY;

        // cosine law; surfaces facing away from the light get nothing
        let incidence = -hit.normal.dot(light.direction);
        if incidence <= 0.0 {
            return PhongTerms {
                ambient,
                diffuse: Color::ZERO,
                specular: Color::ZERO,
            };
        }

        let diffuse = light.color * light.intensity * self.surface_color * (incidence * self.diffuse);

        // how much of the reflected light heads towards the viewer
        let light_reflection = reflect(light.direction, hit.normal);
        let projection = -light_reflection.dot(ray.direction());
        let specular = if projection > 0.0 {
            light.color * (projection.powf(self.specular_exponent) * self.specular)
        } else {
            Color::ZERO
        };

        PhongTerms {
            ambient,
            diffuse,
            specular,
        }
    }

    fn shade(&self, hit: &Intersection, world: &dyn World, ray: &Ray, depth: u32) -> Color {
        let local = self.terms(hit, world.light(), ray).total();

        if depth >= MAX_DEPTH {
            return local;
        }

        let reflection = Ray::new(hit.point, reflect(ray.direction(), hit.normal));
        match world.nearest_hit(&reflection) {
            Some(bounce) => {
                let bounced = bounce.material.shade(&bounce, world, &reflection, depth + 1);
                // equal parts local colour and reflected colour
                (local + bounced) * 0.5
            }
            None => local,
        }
    }
}
