//! Pixel grid module
//!
//! Decoded 8-bit color buffers and the color/coordinate types the region finder works on.

mod buffer;
pub mod types;

#[cfg(test)]
mod tests;

pub use buffer::PixelBuffer;
pub use types::{Color, PixelFormat, Point};
