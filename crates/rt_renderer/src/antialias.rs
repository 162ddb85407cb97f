//! Supersampling anti-aliasing.
//!
//! SSAA renders into a framebuffer `factor` times larger on each axis and
//! shrinks it back with a bilinear filter once the runner is done.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use crate::error::ConfigError;
use crate::framebuffer::{Framebuffer, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AntiAliasing {
    #[default]
    None,
    Ssaa2x,
    Ssaa4x,
}

impl FromStr for AntiAliasing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(AntiAliasing::None),
            "ssaa2x" => Ok(AntiAliasing::Ssaa2x),
            "ssaa4x" => Ok(AntiAliasing::Ssaa4x),
            other => Err(ConfigError::InvalidAntiAliasing(other.to_string())),
        }
    }
}

impl fmt::Display for AntiAliasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AntiAliasing::None => "none",
            AntiAliasing::Ssaa2x => "ssaa2x",
            AntiAliasing::Ssaa4x => "ssaa4x",
        })
    }
}

impl AntiAliasing {
    /// Upscale factor per axis.
    pub fn factor(self) -> u32 {
        match self {
            AntiAliasing::None => 1,
            AntiAliasing::Ssaa2x => 2,
            AntiAliasing::Ssaa4x => 4,
        }
    }

    /// Size traced for a `width × height` output, or `None` when it
    /// doesn't fit in a `u32`.
    pub fn render_size(self, width: u32, height: u32) -> Option<(u32, u32)> {
        Some((width.checked_mul(self.factor())?, height.checked_mul(self.factor())?))
    }

    /// Allocate the framebuffer the runner renders into.
    pub fn preprocess(self, width: u32, height: u32) -> Result<Framebuffer, ConfigError> {
        let (width, height) = self
            .render_size(width, height)
            .ok_or(ConfigError::InvalidSize { width, height })?;
        Ok(Framebuffer::new(width, height))
    }

    /// Shrink a rendered framebuffer back to output size.
    pub fn postprocess(self, framebuffer: Framebuffer) -> Framebuffer {
        match self {
            AntiAliasing::None => framebuffer,
            _ => {
                let factor = self.factor();
                let (width, height) = (framebuffer.width() / factor, framebuffer.height() / factor);
                log::debug!(
                    "Downsampling {}x{} -> {}x{}",
                    framebuffer.width(),
                    framebuffer.height(),
                    width,
                    height
                );
                downsample_bilinear(&framebuffer, width, height)
            }
        }
    }
}

/// Bilinear resize of `input` to `width × height`.
///
/// Output pixel (i, j) samples the input at `(i · rx, j · ry)` with
/// `rx = (in_width - 1) / width` (and likewise for y), blending the four
/// surrounding pixels. Neighbours past the last row or column are clamped to
/// the edge. Rows are filtered in parallel.
pub fn downsample_bilinear(input: &Framebuffer, width: u32, height: u32) -> Framebuffer {
    let mut output = Framebuffer::new(width, height);
    if width == 0 || height == 0 || input.width() == 0 || input.height() == 0 {
        return output;
    }

    let x_ratio = (input.width() - 1) as f32 / width as f32;
    let y_ratio = (input.height() - 1) as f32 / height as f32;
    let max_x = input.width() - 1;
    let max_y = input.height() - 1;

    output
        .pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(j, row)| {
            let sy = y_ratio * j as f32;
            let y = (sy as u32).min(max_y);
            let dy = sy - y as f32;
            let y1 = (y + 1).min(max_y);

            for (i, pixel) in row.iter_mut().enumerate() {
                let sx = x_ratio * i as f32;
                let x = (sx as u32).min(max_x);
                let dx = sx - x as f32;
                let x1 = (x + 1).min(max_x);

                *pixel = blend(
                    [input.get(x, y), input.get(x1, y), input.get(x, y1), input.get(x1, y1)],
                    dx,
                    dy,
                );
            }
        });

    output
}

/// Weighted mix of a 2×2 neighbourhood `[top-left, top-right, bottom-left, bottom-right]`.
#[inline]
fn blend(quad: [Rgb; 4], dx: f32, dy: f32) -> Rgb {
    let weights = [
        (1.0 - dx) * (1.0 - dy),
        dx * (1.0 - dy),
        (1.0 - dx) * dy,
        dx * dy,
    ];

    let mut out = [0u8; 3];
    for (c, channel) in out.iter_mut().enumerate() {
        let value: f32 = quad.iter().zip(weights).map(|(p, w)| p[c] as f32 * w).sum();
        *channel = value.round().clamp(0.0, 255.0) as u8;
    }
    out
}
