use crate::region_finding::common::error::Result;
use crate::region_finding::pixels::PixelBuffer;

pub trait ImageReader {
    fn read_image(&self, data: &[u8]) -> Result<PixelBuffer>;
}
