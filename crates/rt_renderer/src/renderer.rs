//! Per-pixel rendering and the full render pipeline.
//!
//! One primary ray per pixel: find the nearest hit, then turn it into a
//! colour according to the `ShadingMode`. `render` wires this together with
//! the anti-aliasing pre/post passes and the selected runner.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rt_math::Interval;

use crate::config::RenderSettings;
use crate::error::{ConfigError, RenderError};
use crate::framebuffer::{FrameRows, Framebuffer, Rgb, BACKGROUND};
use crate::runner::run_renderer;
use crate::{Color, Material, World};

/// What a pixel shows for the surface its ray hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// The surface's own material
    #[default]
    Shaded,
    /// The surface normal as a colour
    Normals,
    /// Grey level `1 / (distance + 1)`
    Distances,
}

impl FromStr for ShadingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shaded" => Ok(ShadingMode::Shaded),
            "normals" => Ok(ShadingMode::Normals),
            "distances" => Ok(ShadingMode::Distances),
            other => Err(ConfigError::InvalidShading(other.to_string())),
        }
    }
}

impl fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShadingMode::Shaded => "shaded",
            ShadingMode::Normals => "normals",
            ShadingMode::Distances => "distances",
        })
    }
}

/// Convert a linear colour to 8-bit RGB.
///
/// Components are clamped to [0, 1] and scaled to [0, 255], truncating.
#[inline]
pub fn color_to_rgb(color: Color) -> Rgb {
    let channel = |c: f32| (Interval::UNIT.clamp(c) * 255.0) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Camera-plane coordinates of pixel (x, y) in a `width × height` image,
/// both in [-0.5, 0.5).
#[inline]
pub fn camera_coordinates(x: u32, y: u32, width: u32, height: u32) -> (f32, f32) {
    (x as f32 / width as f32 - 0.5, y as f32 / height as f32 - 0.5)
}

/// Trace the primary ray of pixel (x, y) and write its colour.
///
/// Pixels whose ray hits nothing keep whatever the framebuffer already holds.
pub fn render_pixel(rows: &mut FrameRows<'_>, world: &dyn World, x: u32, y: u32, mode: ShadingMode) {
    let (cx, cy) = camera_coordinates(x, y, rows.width(), rows.height());
    let ray = world.camera().cast_ray(cx, cy);

    let Some(hit) = world.nearest_hit(&ray) else {
        return;
    };

    let color = match mode {
        ShadingMode::Shaded => hit.material.shade(&hit, world, &ray, 0),
        ShadingMode::Normals => Material::Normal.shade(&hit, world, &ray, 0),
        ShadingMode::Distances => Color::splat(1.0 / (hit.distance + 1.0)),
    };

    rows.set(x, y, color_to_rgb(color));
}

/// Render every pixel of the rows in `rows`, row-major.
pub fn render_rows(rows: &mut FrameRows<'_>, world: &dyn World, mode: ShadingMode) {
    for y in rows.rows() {
        for x in 0..rows.width() {
            render_pixel(rows, world, x, y, mode);
        }
    }
}

/// Render `world` into a new framebuffer.
///
/// Settings are validated before anything is allocated. The returned
/// framebuffer is always `settings.width × settings.height`, whatever the
/// anti-aliasing mode traced internally.
pub fn render(world: &dyn World, settings: &RenderSettings) -> Result<Framebuffer, RenderError> {
    settings.validate()?;

    let (render_width, render_height) = settings.render_size()?;
    log::info!(
        "Rendering {}x{} ({} runner, {} shading, anti-aliasing {}, traced at {}x{})",
        settings.width,
        settings.height,
        settings.strategy,
        settings.shading,
        settings.anti_aliasing,
        render_width,
        render_height
    );

    let start = Instant::now();

    let mut framebuffer = settings.anti_aliasing.preprocess(settings.width, settings.height)?;
    framebuffer.clear(BACKGROUND);

    run_renderer(
        &mut framebuffer,
        world,
        settings.strategy,
        settings.workers,
        settings.shading,
    )?;

    let framebuffer = settings.anti_aliasing.postprocess(framebuffer);

    log::info!("Render finished in {:.2}s", start.elapsed().as_secs_f32());

    Ok(framebuffer)
}
