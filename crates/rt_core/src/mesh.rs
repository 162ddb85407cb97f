//! Mesh geometry representation.
//!
//! A mesh is populated by a file loader and consumed by the renderer's
//! scene builder, which turns every index triplet into a triangle.

use rt_math::Vec3;

/// A triangle mesh: vertex positions plus triangle indices.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Mesh name (from the OBJ object or group)
    pub name: String,

    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle, counter-clockwise)
    pub indices: Vec<u32>,

    /// Index into `SceneDescription::materials`, if the file assigned one
    pub material_id: Option<usize>,
}

impl Mesh {
    /// Create a new mesh from positions and indices.
    pub fn new(name: impl Into<String>, positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            positions,
            indices,
            material_id: None,
        }
    }

    /// Assign a material slot.
    pub fn with_material(mut self, material_id: usize) -> Self {
        self.material_id = Some(material_id);
        self
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Extract triangle vertices as `[v0, v1, v2]` triplets.
    ///
    /// Triplets referencing a vertex that does not exist are skipped with a
    /// warning, as are trailing indices that do not form a full triangle.
    pub fn extract_triangle_vertices(&self) -> Vec<[Vec3; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());

        for chunk in self.indices.chunks_exact(3) {
            let i0 = chunk[0] as usize;
            let i1 = chunk[1] as usize;
            let i2 = chunk[2] as usize;

            match (self.positions.get(i0), self.positions.get(i1), self.positions.get(i2)) {
                (Some(&a), Some(&b), Some(&c)) => triangles.push([a, b, c]),
                _ => log::warn!(
                    "Mesh {}: invalid triangle indices [{}, {}, {}], vertex count: {}",
                    self.name,
                    i0,
                    i1,
                    i2,
                    self.positions.len()
                ),
            }
        }

        triangles
    }
}
