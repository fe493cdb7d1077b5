use crate::region_finding::common::error::{RegionError, Result};
use crate::region_finding::pixels::types::{Color, PixelFormat, Point};

/// Bytes needed for `width * height` pixels, or `InvalidDimensions` if that overflows.
fn byte_len(width: usize, height: usize, format: PixelFormat) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(format.channels()))
        .ok_or(RegionError::InvalidDimensions(width, height))
}

/// A decoded 8-bit image held as interleaved channels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zero-filled buffer. For `Rgba8` this means fully transparent black.
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Result<Self> {
        let len = byte_len(width, height, format)?;
        Ok(Self {
            width,
            height,
            format,
            data: vec![0u8; len],
        })
    }

    /// Buffer with every pixel set to `color`, stored as `Rgba8`.
    pub fn filled(width: usize, height: usize, color: Color) -> Result<Self> {
        let len = byte_len(width, height, PixelFormat::Rgba8)?;
        let data = [color.r, color.g, color.b, color.a].repeat(len / 4);
        Ok(Self {
            width,
            height,
            format: PixelFormat::Rgba8,
            data,
        })
    }

    /// Wraps already decoded pixel data, checking its length against the dimensions.
    pub fn from_raw(width: usize, height: usize, format: PixelFormat, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height, format)?;
        if data.len() != expected {
            return Err(RegionError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * self.format.channels()
    }

    /// Color at `(x, y)`, or `None` outside the image. `Rgb8` pixels report full alpha.
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if !self.contains(x, y) {
            return None;
        }
        let i = self.offset(x, y);
        let px = &self.data[i..i + self.format.channels()];
        Some(match self.format {
            PixelFormat::Rgb8 => Color::rgb(px[0], px[1], px[2]),
            PixelFormat::Rgba8 => Color::rgba(px[0], px[1], px[2], px[3]),
        })
    }

    /// Writes `color` at `(x, y)`. Alpha is dropped for `Rgb8` buffers.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        if !self.contains(x, y) {
            return Err(RegionError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.offset(x, y);
        match self.format {
            PixelFormat::Rgb8 => self.data[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]),
            PixelFormat::Rgba8 => {
                self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a])
            }
        }
        Ok(())
    }

    pub fn set_point(&mut self, point: Point, color: Color) -> Result<()> {
        self.set_pixel(point.x, point.y, color)
    }

    /// Iterates the buffer in raster order (top-to-bottom, left-to-right).
    pub fn pixels(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        let width = self.width;
        let channels = self.format.channels();
        let format = self.format;
        self.data.chunks_exact(channels).enumerate().map(move |(i, px)| {
            let color = match format {
                PixelFormat::Rgb8 => Color::rgb(px[0], px[1], px[2]),
                PixelFormat::Rgba8 => Color::rgba(px[0], px[1], px[2], px[3]),
            };
            (Point::new(i % width, i / width), color)
        })
    }
}
