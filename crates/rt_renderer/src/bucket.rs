//! Row-band partitioning for the multi-threaded runner.
//!
//! The image is cut into contiguous horizontal bands, one per worker. Bands
//! never overlap and together cover every row exactly once, so workers can
//! write their pixels without any locking.

use std::ops::Range;

/// Default number of render workers.
pub const DEFAULT_WORKERS: usize = 4;

/// A contiguous range of image rows handed to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    /// First row of the band
    pub y_start: u32,
    /// One past the last row of the band
    pub y_end: u32,
    /// Index of the worker rendering this band
    pub index: usize,
}

impl RowBand {
    /// Create a new band.
    pub fn new(y_start: u32, y_end: u32, index: usize) -> Self {
        Self { y_start, y_end, index }
    }

    pub fn rows(&self) -> Range<u32> {
        self.y_start..self.y_end
    }

    pub fn row_count(&self) -> u32 {
        self.y_end - self.y_start
    }

    /// Get the total number of pixels in this band.
    pub fn pixel_count(&self, width: u32) -> usize {
        self.row_count() as usize * width as usize
    }
}

/// Split `height` rows between `workers` workers.
///
/// Every band gets `height / workers` rows; the remainder goes entirely to
/// the last band. With more workers than rows the leading bands are empty.
///
/// # Panics
///
/// Panics if `workers` is zero.
pub fn split_rows(height: u32, workers: usize) -> Vec<RowBand> {
    assert!(workers > 0, "at least one worker is needed to render");

    let rows_per_worker = (height as usize / workers) as u32;

    let mut bands: Vec<RowBand> = (0..workers)
        .map(|index| {
            let y_start = index as u32 * rows_per_worker;
            RowBand::new(y_start, y_start + rows_per_worker, index)
        })
        .collect();

    // the last worker picks up the rows that don't divide evenly
    if let Some(last) = bands.last_mut() {
        last.y_end = height;
    }

    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(bands: &[RowBand], height: u32) {
        let mut next = 0;
        for band in bands {
            assert_eq!(band.y_start, next, "bands must be contiguous");
            assert!(band.y_end >= band.y_start);
            next = band.y_end;
        }
        assert_eq!(next, height);
    }

    #[test]
    fn test_split_exact_fit() {
        let bands = split_rows(100, 4);
        assert_eq!(bands.len(), 4);
        assert!(bands.iter().all(|b| b.row_count() == 25));
        assert_covers(&bands, 100);

        // Total pixels should equal image size
        let total: usize = bands.iter().map(|b| b.pixel_count(80)).sum();
        assert_eq!(total, 100 * 80);
    }

    #[test]
    fn test_remainder_goes_to_last_band() {
        let bands = split_rows(103, 4);
        assert_eq!(bands.iter().map(RowBand::row_count).collect::<Vec<_>>(), vec![25, 25, 25, 28]);
        assert_covers(&bands, 103);
    }

    #[test]
    fn test_more_workers_than_rows() {
        let bands = split_rows(3, 8);
        assert_eq!(bands.len(), 8);
        assert!(bands[..7].iter().all(|b| b.row_count() == 0));
        assert_eq!(bands[7].rows(), 0..3);
        assert_covers(&bands, 3);
    }

    #[test]
    fn test_single_worker_takes_everything() {
        assert_eq!(split_rows(57, 1), vec![RowBand::new(0, 57, 0)]);
    }

    #[test]
    #[should_panic]
    fn test_zero_workers_panics() {
        split_rows(10, 0);
    }
}
