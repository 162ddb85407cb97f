//! Renderer-agnostic scene description.
//!
//! This is what a file loader produces: meshes plus the material
//! descriptions they reference. The renderer decides how a description is
//! shaded.

use rt_math::Vec3;

use crate::mesh::Mesh;

/// A Phong-style surface description, typically read from an MTL file.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDesc {
    /// Material name (from `newmtl`)
    pub name: String,

    /// Diffuse colour (RGB, 0-1), `Kd`
    pub diffuse_color: Vec3,

    /// Specular colour (RGB, 0-1), `Ks`
    pub specular_color: Vec3,

    /// Ambient colour (RGB, 0-1), `Ka`
    pub ambient_color: Vec3,

    /// Specular exponent, `Ns`
    pub shininess: f32,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self {
            name: String::new(),
            diffuse_color: Vec3::new(0.6, 0.6, 0.6), // Grey default
            specular_color: Vec3::splat(0.2),
            ambient_color: Vec3::splat(0.1),
            shininess: 10.0,
        }
    }
}

impl MaterialDesc {
    /// Create a new material with just a name and diffuse colour.
    pub fn new(name: impl Into<String>, diffuse_color: Vec3) -> Self {
        Self {
            name: name.into(),
            diffuse_color,
            ..Default::default()
        }
    }

    /// Scalar specular strength (mean of the specular colour).
    pub fn specular_strength(&self) -> f32 {
        self.specular_color.element_sum() / 3.0
    }

    /// Scalar ambient strength (mean of the ambient colour).
    pub fn ambient_strength(&self) -> f32 {
        self.ambient_color.element_sum() / 3.0
    }
}

/// Meshes and materials loaded from a scene file.
#[derive(Clone, Debug, Default)]
pub struct SceneDescription {
    /// Scene name (usually from filename)
    pub name: String,

    /// Meshes in file order
    pub meshes: Vec<Mesh>,

    /// Materials referenced by `Mesh::material_id`
    pub materials: Vec<MaterialDesc>,
}

impl SceneDescription {
    /// Create an empty description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Look up the material assigned to a mesh, if any.
    pub fn material_for(&self, mesh: &Mesh) -> Option<&MaterialDesc> {
        mesh.material_id.and_then(|id| self.materials.get(id))
    }

    /// Total number of triangles across all meshes.
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(Mesh::triangle_count).sum()
    }
}
