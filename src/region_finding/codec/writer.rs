use std::io::Write;

use crate::region_finding::codec::types::OutputConfig;
use crate::region_finding::common::error::Result;
use crate::region_finding::pixels::PixelBuffer;

pub trait ImageWriter {
    fn write_image(&self, image: &PixelBuffer, output: &mut dyn Write, config: &OutputConfig) -> Result<()>;
}
