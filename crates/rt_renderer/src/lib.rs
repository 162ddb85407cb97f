//! Whitted-style CPU ray tracer.
//!
//! One primary ray per pixel, nearest hit over spheres and triangles,
//! Phong shading with a bounded number of mirror bounces. Rendering can run
//! on the calling thread or split into row bands across worker threads, and
//! optionally supersamples the image.

mod antialias;
mod bucket;
mod builder;
mod config;
mod error;
mod framebuffer;
mod hittable;
mod material;
mod renderer;
mod runner;
mod scene;
mod sphere;
mod triangle;

pub use antialias::{downsample_bilinear, AntiAliasing};
pub use bucket::{split_rows, RowBand, DEFAULT_WORKERS};
pub use builder::{
    demo_camera, demo_material, demo_scene, obj_camera, obj_scene, phong_from_desc, DEFAULT_FOV, DEMO_FOV,
};
pub use config::{RenderSettings, DEFAULT_SIZE};
pub use error::{ConfigError, RenderError};
pub use framebuffer::{FrameRows, Framebuffer, Rgb, BACKGROUND};
pub use hittable::{hit_range, Intersection, Object, HIT_EPSILON};
pub use material::{Color, Material, PhongMaterial, PhongTerms, AMBIENT_INTENSITY, MAX_DEPTH};
pub use renderer::{camera_coordinates, color_to_rgb, render, render_pixel, render_rows, ShadingMode};
pub use runner::{render_multithreaded, render_single, run_renderer, OsThreads, Spawner, Strategy};
pub use scene::{DirectionalLight, Scene, World};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export the math types scenes are built from
pub use rt_math::{Camera, Interval, Ray, Vec3};
