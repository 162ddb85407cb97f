//! Ready-made scenes.
//!
//! `obj_scene` turns a loaded OBJ description into triangles lit by a white
//! light; `demo_scene` is a small hand-built scene with one red sphere and a
//! triangle.

use std::sync::Arc;

use rt_core::{MaterialDesc, SceneDescription};
use rt_math::{focal_distance_from_fov, Camera, Vec3};

use crate::{Color, DirectionalLight, Material, PhongMaterial, Scene, Sphere, Triangle};

/// Default horizontal field of view for OBJ scenes, in degrees.
pub const DEFAULT_FOV: f32 = 90.0;

/// Field of view of the demo camera, in degrees.
pub const DEMO_FOV: f32 = 80.0;

/// Camera used by the demo scene: at the origin, looking down +Y with +Z
/// up, 10 units wide.
pub fn demo_camera(aspect_ratio: f32) -> Camera {
    let width = 10.0;
    Camera::new(
        Vec3::ZERO,
        Vec3::Y,
        Vec3::Z,
        width,
        width / aspect_ratio,
        focal_distance_from_fov(width, DEMO_FOV),
    )
}

/// Red Phong material used by the demo scene.
pub fn demo_material() -> PhongMaterial {
    PhongMaterial {
        surface_color: Color::new(0.75, 0.125, 0.125),
        diffuse: 0.2,
        specular_exponent: 10.0,
        specular: 0.2,
        ambient_intensity: 0.1,
    }
}

/// A red sphere at (0, 10, 0) and a small red triangle to its right, under
/// a yellow light.
pub fn demo_scene(aspect_ratio: f32) -> Scene {
    let light = DirectionalLight::new(Vec3::new(-1.0, 1.0, -1.0), Color::new(1.0, 1.0, 0.0), 5.0);
    let mut scene = Scene::new(demo_camera(aspect_ratio), light);

    let red = scene.add_material(Material::Phong(demo_material()));
    scene.add(Sphere::new(Vec3::new(0.0, 10.0, 0.0), 4.0, Arc::clone(&red)));

    // points are listed counter-clockwise
    //     a
    //    /|
    //   / |
    //  b--c
    scene.add(Triangle::new(
        Vec3::new(6.0, 10.0, 1.0),
        Vec3::new(5.0, 10.0, 0.0),
        Vec3::new(6.0, 10.0, 0.0),
        red,
    ));

    scene
}

/// Phong parameters for a material read from a file.
pub fn phong_from_desc(desc: &MaterialDesc) -> PhongMaterial {
    PhongMaterial {
        surface_color: desc.diffuse_color,
        specular_exponent: desc.shininess,
        specular: desc.specular_strength(),
        ambient_intensity: desc.ambient_strength(),
        ..PhongMaterial::default()
    }
}

/// Camera used for OBJ scenes: at (0, 1, 2) looking back at the origin
/// with +Y up, 2 units wide.
pub fn obj_camera(aspect_ratio: f32, fov: f32) -> Camera {
    let width = 2.0;
    Camera::new(
        Vec3::new(0.0, 1.0, 2.0),
        Vec3::new(0.0, -1.0, -2.0),
        Vec3::Y,
        width,
        width / aspect_ratio,
        focal_distance_from_fov(width, fov),
    )
}

/// Build a renderable scene from an OBJ description.
///
/// Meshes sharing a material id share one `Material`; meshes without one
/// share a default grey material.
pub fn obj_scene(description: &SceneDescription, aspect_ratio: f32, fov: f32) -> Scene {
    let light = DirectionalLight::new(Vec3::new(-1.0, -1.0, -1.0), Color::ONE, 5.0);
    let mut scene = Scene::new(obj_camera(aspect_ratio, fov), light);

    let materials: Vec<Arc<Material>> = description
        .materials
        .iter()
        .map(|desc| scene.add_material(Material::Phong(phong_from_desc(desc))))
        .collect();
    let mut fallback: Option<Arc<Material>> = None;

    for mesh in &description.meshes {
        let material = match mesh.material_id.and_then(|id| materials.get(id)) {
            Some(material) => Arc::clone(material),
            None => {
                let default = fallback
                    .get_or_insert_with(|| scene.add_material(Material::Phong(PhongMaterial::default())));
                Arc::clone(default)
            }
        };

        for [a, b, c] in mesh.extract_triangle_vertices() {
            scene.add(Triangle::new(a, b, c, Arc::clone(&material)));
        }
    }

    log::info!(
        "Built scene '{}': {} objects, {} materials",
        description.name,
        scene.len(),
        scene.materials().len()
    );

    scene
}
