//! Core scene description types for the ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `Mesh`, `MaterialDesc`
//! - **OBJ support**: Wavefront OBJ/MTL loading through `tobj`
//!
//! Nothing here knows how to trace a ray; `rt_renderer` turns a description
//! into intersectable primitives.
//!
//! # Example
//!
//! ```ignore
//! use rt_core::load_obj;
//!
//! let description = load_obj("teapot.obj")?;
//! println!("Loaded {} triangles", description.triangle_count());
//! ```

pub mod mesh;
pub mod obj;
pub mod scene;

// Re-export commonly used types
pub use mesh::Mesh;
pub use obj::{load_obj, load_obj_from_str, LoadError, LoadResult};
pub use scene::{MaterialDesc, SceneDescription};
