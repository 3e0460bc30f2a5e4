// src/math/point_distribution/obstacles/grid.rs

use crate::math::error::{MathError, MathResult};
use bevy::log::debug;
use image::GrayImage;
use std::path::Path;

/// Largest width or height. The 1-based `i32` cell counter of the last row or
/// column must still have a successor.
pub const MAX_DIMENSION: usize = (i32::MAX - 1) as usize;

/// Graustufen-Belegungskarte, zeilenweise gespeichert, Ursprung oben links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Grid {
    /// Creates a grid from row-major intensities.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> MathResult<Self> {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(MathError::InvalidGrid {
                message: format!("{width}x{height} exceeds the maximum side length {MAX_DIMENSION}"),
            });
        }
        let expected = width.checked_mul(height).ok_or_else(|| MathError::InvalidGrid {
            message: format!("{width}x{height} overflows the address space"),
        })?;
        if data.len() != expected {
            return Err(MathError::InvalidGrid {
                message: format!(
                    "{width}x{height} grid needs {expected} values, got {}",
                    data.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a grid from explicit rows, which must all have the same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> MathResult<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MathError::InvalidGrid {
                    message: format!("row {i} has {} values, expected {width}", row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(width, rows.len(), data)
    }

    pub fn from_luma(image: &GrayImage) -> MathResult<Self> {
        let (width, height) = image.dimensions();
        Self::new(width as usize, height as usize, image.as_raw().clone())
    }

    /// Decodes an image file and converts it to 8-bit luma.
    ///
    /// The file handle lives only inside the decoder call.
    pub fn open<P: AsRef<Path>>(path: P) -> MathResult<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| MathError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = Self::from_luma(&decoded.to_luma8())?;
        debug!(
            "Loaded occupancy map '{}' ({}x{})",
            path.display(),
            grid.width,
            grid.height
        );
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Intensity at a 0-based `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    /// Iterates the rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact(0) panics; an empty grid has no rows anyway.
        self.data.chunks_exact(self.width.max(1))
    }
}
