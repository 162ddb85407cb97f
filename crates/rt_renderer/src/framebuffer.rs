//! 8-bit RGB framebuffer.

use std::ops::Range;

use crate::bucket::RowBand;

/// One 8-bit RGB pixel.
pub type Rgb = [u8; 3];

/// Colour of pixels no ray hit.
pub const BACKGROUND: Rgb = [0, 0, 0];

/// A `width × height` grid of RGB pixels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with the background colour.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Set every pixel to `color`.
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Flatten to `RGBRGB...` bytes, top row first.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Borrow every row at once.
    pub fn rows_mut(&mut self) -> FrameRows<'_> {
        FrameRows {
            width: self.width,
            height: self.height,
            rows: 0..self.height,
            pixels: &mut self.pixels,
        }
    }

    /// Borrow disjoint row bands mutably, one view per band.
    ///
    /// `bands` must be contiguous and start at row 0, as produced by
    /// `split_rows`.
    pub fn bands_mut(&mut self, bands: &[RowBand]) -> Vec<FrameRows<'_>> {
        let (width, height) = (self.width, self.height);
        let mut rest: &mut [Rgb] = &mut self.pixels;
        let mut views = Vec::with_capacity(bands.len());

        for band in bands {
            debug_assert!(band.y_end <= height);
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(band.pixel_count(width));
            views.push(FrameRows {
                width,
                height,
                rows: band.rows(),
                pixels: head,
            });
            rest = tail;
        }

        views
    }
}

/// Mutable view of a range of framebuffer rows.
///
/// Coordinates are image coordinates; writing outside the view's rows
/// panics.
#[derive(Debug)]
pub struct FrameRows<'a> {
    width: u32,
    height: u32,
    rows: Range<u32>,
    pixels: &'a mut [Rgb],
}

impl FrameRows<'_> {
    /// Width of the whole image.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the whole image.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rows this view may write.
    pub fn rows(&self) -> Range<u32> {
        self.rows.clone()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(self.rows.contains(&y), "row {} outside band {:?}", y, self.rows);
        (y - self.rows.start) as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }
}
