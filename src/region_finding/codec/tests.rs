use std::io::Cursor;

use tiff::encoder::TiffEncoder;
use tiff::encoder::colortype::{Gray8, RGB16};

use crate::region_finding::codec::{
    ImageReader, ImageWriter, OutputConfig, TiffCompression, TiffImageReader, TiffImageWriter,
};
use crate::region_finding::common::error::RegionError;
use crate::region_finding::pixels::{Color, PixelBuffer, PixelFormat};

fn gradient(format: PixelFormat) -> PixelBuffer {
    let mut image = PixelBuffer::new(7, 5, format).unwrap();
    for y in 0..5 {
        for x in 0..7 {
            let v = (x * 30 + y * 10) as u8;
            image.set_pixel(x, y, Color::rgba(v, 255 - v, v / 2, 200)).unwrap();
        }
    }
    image
}

#[test]
fn test_output_config_builder() {
    let config = OutputConfig::builder()
        .compression(TiffCompression::DeflateBest)
        .horizontal_predictor(true)
        .build();

    assert_eq!(config.compression, TiffCompression::DeflateBest);
    assert!(config.horizontal_predictor);
    assert_eq!(OutputConfig::default().compression, TiffCompression::Lzw);
}

#[test]
fn test_rgb_write_then_read() {
    let image = gradient(PixelFormat::Rgb8);
    let mut encoded = Vec::new();
    TiffImageWriter
        .write_image(&image, &mut encoded, &OutputConfig::default())
        .unwrap();

    let decoded = TiffImageReader.read_image(&encoded).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn test_rgba_write_then_read_uncompressed() {
    let image = gradient(PixelFormat::Rgba8);
    let config = OutputConfig::builder()
        .compression(TiffCompression::None)
        .build();
    let mut encoded = Vec::new();
    TiffImageWriter.write_image(&image, &mut encoded, &config).unwrap();

    let decoded = TiffImageReader.read_image(&encoded).unwrap();
    assert_eq!(decoded.format(), PixelFormat::Rgba8);
    assert_eq!(decoded.get_pixel(3, 2).unwrap().a, 200);
    assert_eq!(decoded, image);
}

#[test]
fn test_gray_is_widened_to_rgb() {
    let mut encoded = Vec::new();
    {
        let mut encoder = TiffEncoder::new(Cursor::new(&mut encoded)).unwrap();
        encoder.write_image::<Gray8>(2, 1, &[10, 250]).unwrap();
    }

    let decoded = TiffImageReader.read_image(&encoded).unwrap();
    assert_eq!(decoded.format(), PixelFormat::Rgb8);
    assert_eq!(decoded.as_bytes(), &[10, 10, 10, 250, 250, 250]);
}

#[test]
fn test_sixteen_bit_is_unsupported() {
    let mut encoded = Vec::new();
    {
        let mut encoder = TiffEncoder::new(Cursor::new(&mut encoded)).unwrap();
        encoder.write_image::<RGB16>(1, 1, &[1, 2, 3]).unwrap();
    }

    let result = TiffImageReader.read_image(&encoded);
    assert!(matches!(result, Err(RegionError::UnsupportedFormat(_))));
}

#[test]
fn test_garbage_input_fails_to_decode() {
    let result = TiffImageReader.read_image(b"definitely not a tiff");

    assert!(matches!(result, Err(RegionError::DecodeError(_))));
}
