use std::io::Write;

use tiff::encoder::colortype::{RGB8, RGBA8};
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder};
use tiff::tags::Predictor;
use tracing::debug;

use crate::region_finding::codec::types::{OutputConfig, TiffCompression};
use crate::region_finding::codec::writer::ImageWriter;
use crate::region_finding::common::error::{RegionError, Result};
use crate::region_finding::pixels::{PixelBuffer, PixelFormat};

pub struct TiffImageWriter;

fn encode_error(e: impl std::fmt::Display) -> RegionError {
    RegionError::EncodeError(e.to_string())
}

impl ImageWriter for TiffImageWriter {
    fn write_image(&self, image: &PixelBuffer, output: &mut dyn Write, config: &OutputConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", image.width(), image.height());

        let width = u32::try_from(image.width())
            .map_err(|_| RegionError::InvalidDimensions(image.width(), image.height()))?;
        let height = u32::try_from(image.height())
            .map_err(|_| RegionError::InvalidDimensions(image.width(), image.height()))?;

        let compression = match config.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        let mut buffer = Vec::new();
        {
            let mut encoder = TiffEncoder::new(std::io::Cursor::new(&mut buffer))
                .map_err(encode_error)?
                .with_compression(compression);

            if config.horizontal_predictor {
                encoder = encoder.with_predictor(Predictor::Horizontal);
            }

            let written = match image.format() {
                PixelFormat::Rgb8 => encoder.write_image::<RGB8>(width, height, image.as_bytes()),
                PixelFormat::Rgba8 => encoder.write_image::<RGBA8>(width, height, image.as_bytes()),
            };
            written.map_err(encode_error)?;
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
