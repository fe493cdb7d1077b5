//! Region recoloring module
//!
//! Paints every detected region in a single color so the regions can be inspected visually.
//! Colors come from a pluggable [`ColorSource`]; the default draws them at random.

mod source;
mod random_colors;
mod palette;


pub use source::ColorSource;
pub use random_colors::RandomColors;
pub use palette::Palette;

use tracing::debug;

use crate::region_finding::common::error::Result;
use crate::region_finding::finder::Region;
use crate::region_finding::pixels::PixelBuffer;

/// Returns a copy of `image` where each region is filled with one color taken from `colors`.
///
/// One color is drawn per region, in region order. Pixels outside every region are copied
/// unchanged.
pub fn recolor_regions<C: ColorSource + ?Sized>(
    image: &PixelBuffer,
    regions: &[Region],
    colors: &mut C,
) -> Result<PixelBuffer> {
    let mut recolored = image.clone();
    for region in regions {
        let color = colors.next_color();
        for &point in region.iter() {
            recolored.set_point(point, color)?;
        }
    }
    debug!(regions = regions.len(), "Recolored regions");
    Ok(recolored)
}
