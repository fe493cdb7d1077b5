//! Image codec module
//!
//! Decoding of input images into [`PixelBuffer`]s and encoding of results, kept behind
//! traits so the region finder never depends on a particular file format.
//!
//! [`PixelBuffer`]: crate::region_finding::pixels::PixelBuffer

mod reader;
mod writer;
mod tiff_reader;
mod tiff_writer;
pub mod types;

#[cfg(test)]
mod tests;

pub use reader::ImageReader;
pub use writer::ImageWriter;
pub use tiff_reader::TiffImageReader;
pub use tiff_writer::TiffImageWriter;
pub use types::{OutputConfig, OutputConfigBuilder, TiffCompression};
