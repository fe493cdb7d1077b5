//! TIFF decoding into 8-bit RGB/RGBA pixel buffers.

use std::io::Cursor;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

use crate::region_finding::codec::reader::ImageReader;
use crate::region_finding::common::error::{RegionError, Result};
use crate::region_finding::pixels::{PixelBuffer, PixelFormat};

/// Reads 8-bit grayscale, gray+alpha, RGB and RGBA TIFF images.
///
/// Grayscale input is widened to RGB so every image reaches the finder with three color
/// channels.
pub struct TiffImageReader;

fn decode_error(e: impl std::fmt::Display) -> RegionError {
    RegionError::DecodeError(e.to_string())
}

impl ImageReader for TiffImageReader {
    fn read_image(&self, data: &[u8]) -> Result<PixelBuffer> {
        debug!("Decoding TIFF image, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data)).map_err(decode_error)?;
        let (width, height) = decoder.dimensions().map_err(decode_error)?;
        let color_type = decoder.colortype().map_err(decode_error)?;
        let (width, height) = (width as usize, height as usize);

        debug!("TIFF header: {}x{}, {:?}", width, height, color_type);

        let samples = match decoder.read_image().map_err(decode_error)? {
            DecodingResult::U8(samples) => samples,
            _ => {
                return Err(RegionError::UnsupportedFormat(format!(
                    "{color_type:?}: only 8-bit samples are supported"
                )));
            }
        };

        match color_type {
            ColorType::RGB(8) => PixelBuffer::from_raw(width, height, PixelFormat::Rgb8, samples),
            ColorType::RGBA(8) => PixelBuffer::from_raw(width, height, PixelFormat::Rgba8, samples),
            ColorType::Gray(8) => {
                let rgb = samples.iter().flat_map(|&v| [v, v, v]).collect();
                PixelBuffer::from_raw(width, height, PixelFormat::Rgb8, rgb)
            }
            ColorType::GrayA(8) => {
                let rgba = samples
                    .chunks_exact(2)
                    .flat_map(|px| [px[0], px[0], px[0], px[1]])
                    .collect();
                PixelBuffer::from_raw(width, height, PixelFormat::Rgba8, rgba)
            }
            other => Err(RegionError::UnsupportedFormat(format!("{other:?}"))),
        }
    }
}
