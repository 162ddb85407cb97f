//! BMP output.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use image::codecs::bmp::BmpEncoder;
use image::ColorType;
use rt_renderer::Framebuffer;

/// Default resolution hint written into the BMP header.
pub const DEFAULT_PPI: u32 = 80;

/// Offset of the horizontal pixels-per-metre field in a BMP with a
/// BITMAPINFOHEADER; the vertical one follows it.
const X_PPM_OFFSET: usize = 38;

/// Convert pixels per inch to pixels per metre.
pub fn ppm_from_ppi(ppi: u32) -> u32 {
    (ppi as f64 / 0.0254).round() as u32
}

/// Encode `framebuffer` as a 24-bit BMP tagged with `ppi` resolution.
pub fn encode_bmp(framebuffer: &Framebuffer, ppi: u32) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    BmpEncoder::new(&mut bytes)
        .encode(
            &framebuffer.to_rgb_bytes(),
            framebuffer.width(),
            framebuffer.height(),
            ColorType::Rgb8,
        )
        .context("BMP encoding failed")?;

    ensure!(bytes.len() >= X_PPM_OFFSET + 8, "BMP header is truncated");

    let ppm = ppm_from_ppi(ppi).to_le_bytes();
    bytes[X_PPM_OFFSET..X_PPM_OFFSET + 4].copy_from_slice(&ppm);
    bytes[X_PPM_OFFSET + 4..X_PPM_OFFSET + 8].copy_from_slice(&ppm);

    Ok(bytes)
}

/// Encode and write `framebuffer` to `path`.
pub fn write_bmp(framebuffer: &Framebuffer, path: &Path, ppi: u32) -> Result<()> {
    let bytes = encode_bmp(framebuffer, ppi)?;
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Wrote {}x{} image to {}", framebuffer.width(), framebuffer.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_from_ppi() {
        assert_eq!(ppm_from_ppi(80), 3150);
        assert_eq!(ppm_from_ppi(0), 0);
    }

    #[test]
    fn test_bmp_header() {
        let mut fb = Framebuffer::new(3, 2);
        fb.set(0, 0, [10, 20, 30]);
        let bytes = encode_bmp(&fb, DEFAULT_PPI).unwrap();

        assert_eq!(&bytes[0..2], b"BM");
        // width and height
        assert_eq!(u32::from_le_bytes(bytes[18..22].try_into().unwrap()), 3);
        assert_eq!(u32::from_le_bytes(bytes[22..26].try_into().unwrap()), 2);
        // resolution
        assert_eq!(u32::from_le_bytes(bytes[38..42].try_into().unwrap()), 3150);
        assert_eq!(u32::from_le_bytes(bytes[42..46].try_into().unwrap()), 3150);
    }

    #[test]
    fn test_bmp_decodes_back() {
        let mut fb = Framebuffer::new(4, 3);
        fb.set(1, 2, [200, 100, 50]);
        let bytes = encode_bmp(&fb, DEFAULT_PPI).unwrap();

        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Bmp)
            .unwrap()
            .to_rgb8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(1, 2).0, [200, 100, 50]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0]);
    }
}
