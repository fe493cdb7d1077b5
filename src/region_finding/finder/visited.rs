use crate::region_finding::common::error::{RegionError, Result};
use crate::region_finding::pixels::PixelBuffer;

/// Per-scan record of which pixels have already been examined.
#[derive(Debug, Clone)]
pub struct VisitedGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl VisitedGrid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(RegionError::InvalidDimensions(width, height))?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Grid matching `image`, whose pixel count is known to fit in memory.
    pub(crate) fn for_image(image: &PixelBuffer) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            cells: vec![false; image.pixel_count()],
        }
    }

    /// Out-of-range cells read as unvisited.
    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Marks `(x, y)` and returns `true` if it was not marked before.
    /// Out-of-range cells are ignored and return `false`.
    pub fn mark(&mut self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let cell = &mut self.cells[y * self.width + x];
        !std::mem::replace(cell, true)
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }
}
