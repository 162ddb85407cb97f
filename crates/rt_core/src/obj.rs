//! Wavefront OBJ scene loading.
//!
//! Every model in the file becomes one `Mesh`; polygons are triangulated by
//! `tobj`. MTL libraries are optional: when one cannot be read the meshes
//! load without materials and the renderer falls back to its default.

use std::io::BufReader;
use std::path::Path;

use rt_math::Vec3;
use thiserror::Error;

use crate::mesh::Mesh;
use crate::scene::{MaterialDesc, SceneDescription};

/// Errors that can occur during OBJ loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("No geometry found in OBJ file")]
    NoGeometry,
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

/// Load an OBJ file (and its MTL libraries) from disk.
pub fn load_obj<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("unnamed");

    let (models, materials) = tobj::load_obj(path, &load_options())?;
    build_description(name, models, materials)
}

/// Load an OBJ document held in memory, with an optional MTL document
/// answering every `mtllib` statement.
pub fn load_obj_from_str(obj: &str, mtl: Option<&str>) -> LoadResult<SceneDescription> {
    let mut reader = BufReader::new(obj.as_bytes());
    let (models, materials) = tobj::load_obj_buf(&mut reader, &load_options(), |_| match mtl {
        Some(mtl) => tobj::load_mtl_buf(&mut BufReader::new(mtl.as_bytes())),
        None => Err(tobj::LoadError::OpenFileFailed),
    })?;

    build_description("inline", models, materials)
}

fn build_description(
    name: &str,
    models: Vec<tobj::Model>,
    materials: Result<Vec<tobj::Material>, tobj::LoadError>,
) -> LoadResult<SceneDescription> {
    let mut description = SceneDescription::new(name);

    match materials {
        Ok(materials) => description.materials = materials.iter().map(material_from_mtl).collect(),
        Err(e) => log::warn!("{}: no usable material library ({}), using defaults", name, e),
    }

    for model in models {
        let positions: Vec<Vec3> = model.mesh.positions.chunks_exact(3).map(Vec3::from_slice).collect();

        let mut mesh = Mesh::new(model.name, positions, model.mesh.indices);
        mesh.material_id = model.mesh.material_id;

        log::debug!(
            "Mesh {}: {} vertices, {} triangles, material {:?}",
            mesh.name,
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.material_id
        );
        description.meshes.push(mesh);
    }

    if description.triangle_count() == 0 {
        return Err(LoadError::NoGeometry);
    }

    log::info!(
        "Loaded {}: {} meshes, {} triangles, {} materials",
        description.name,
        description.meshes.len(),
        description.triangle_count(),
        description.materials.len()
    );

    Ok(description)
}

fn material_from_mtl(material: &tobj::Material) -> MaterialDesc {
    let defaults = MaterialDesc::default();

    MaterialDesc {
        name: material.name.clone(),
        diffuse_color: material.diffuse.map(Vec3::from).unwrap_or(defaults.diffuse_color),
        specular_color: material.specular.map(Vec3::from).unwrap_or(defaults.specular_color),
        ambient_color: material.ambient.map(Vec3::from).unwrap_or(defaults.ambient_color),
        shininess: material.shininess.unwrap_or(defaults.shininess),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "\
o quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

    #[test]
    fn test_quad_is_triangulated() {
        let description = load_obj_from_str(QUAD, None).unwrap();

        assert_eq!(description.meshes.len(), 1);
        assert_eq!(description.meshes[0].name, "quad");
        assert_eq!(description.meshes[0].vertex_count(), 4);
        assert_eq!(description.triangle_count(), 2);
        assert!(description.materials.is_empty());
    }

    #[test]
    fn test_materials_from_mtl() {
        let obj = "\
mtllib scene.mtl
o tri
v 0 0 0
v 1 0 0
v 0 1 0
usemtl red
f 1 2 3
";
        let mtl = "\
newmtl red
Kd 0.8 0.1 0.1
Ks 0.5 0.5 0.5
Ns 32
";
        let description = load_obj_from_str(obj, Some(mtl)).unwrap();
        let mesh = &description.meshes[0];
        let material = description.material_for(mesh).unwrap();

        assert_eq!(material.name, "red");
        assert_eq!(material.diffuse_color, Vec3::new(0.8, 0.1, 0.1));
        assert_eq!(material.shininess, 32.0);
        assert!((material.specular_strength() - 0.5).abs() < 1e-6);
        // Ka was not given
        assert_eq!(material.ambient_color, MaterialDesc::default().ambient_color);
    }

    #[test]
    fn test_empty_file_has_no_geometry() {
        let result = load_obj_from_str("# nothing here\n", None);
        assert!(matches!(result, Err(LoadError::NoGeometry)));
    }

    #[test]
    fn test_missing_file() {
        let result = load_obj("/definitely/not/here.obj");
        assert!(matches!(result, Err(LoadError::Obj(_))));
    }
}
