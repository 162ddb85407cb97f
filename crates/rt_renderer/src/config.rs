//! Render settings.

use crate::antialias::AntiAliasing;
use crate::bucket::DEFAULT_WORKERS;
use crate::error::ConfigError;
use crate::renderer::ShadingMode;
use crate::runner::Strategy;

/// Default output width and height in pixels.
pub const DEFAULT_SIZE: u32 = 100;

/// Everything `render` needs besides the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Output image width
    pub width: u32,
    /// Output image height
    pub height: u32,
    pub anti_aliasing: AntiAliasing,
    pub strategy: Strategy,
    /// Worker count for the multi-threaded runner
    pub workers: usize,
    pub shading: ShadingMode,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            anti_aliasing: AntiAliasing::None,
            strategy: Strategy::SingleThreaded,
            workers: DEFAULT_WORKERS,
            shading: ShadingMode::Shaded,
        }
    }
}

impl RenderSettings {
    /// Reject settings that can't produce an image.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        self.render_size()?;
        if self.workers == 0 {
            return Err(ConfigError::InvalidWorkerCount(self.workers));
        }
        Ok(())
    }

    /// Size of the framebuffer actually traced, after supersampling.
    pub fn render_size(&self) -> Result<(u32, u32), ConfigError> {
        self.anti_aliasing
            .render_size(self.width, self.height)
            .ok_or(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            })
    }

    /// Width / height of the image; cameras are built with this.
    ///
    /// Supersampling scales both axes by the same factor, so this is also
    /// the aspect ratio of the traced framebuffer.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
