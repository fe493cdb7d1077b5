use tracing::{debug, info, instrument};

use crate::region_finding::common::error::{RegionError, Result};
use crate::region_finding::finder::region::{EMPTY_REGION, Region};
use crate::region_finding::finder::scan::scan_regions;
use crate::region_finding::finder::types::FinderConfig;
use crate::region_finding::pixels::{Color, PixelBuffer};
use crate::region_finding::recolor::{ColorSource, RandomColors, recolor_regions};

/// Finds color regions in an image and keeps the results of the last scan.
///
/// The finder owns its source image. Regions and the recolored image always describe the
/// current image and configuration: replacing either discards them.
pub struct RegionFinder<C: ColorSource = RandomColors> {
    image: Option<PixelBuffer>,
    config: FinderConfig,
    colors: C,
    regions: Option<Vec<Region>>,
    recolored: Option<PixelBuffer>,
}

impl RegionFinder<RandomColors> {
    /// Finder with no image yet; call [`RegionFinder::set_image`] before scanning.
    pub fn new(config: FinderConfig) -> Self {
        Self::with_color_source(RandomColors::new(), config)
    }

    pub fn with_image(image: PixelBuffer, config: FinderConfig) -> Self {
        let mut finder = Self::new(config);
        finder.image = Some(image);
        finder
    }
}

impl<C: ColorSource> RegionFinder<C> {
    pub fn with_color_source(colors: C, config: FinderConfig) -> Self {
        Self {
            image: None,
            config,
            colors,
            regions: None,
            recolored: None,
        }
    }

    pub fn set_image(&mut self, image: PixelBuffer) {
        self.image = Some(image);
        self.clear_results();
    }

    pub fn image(&self) -> Option<&PixelBuffer> {
        self.image.as_ref()
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FinderConfig) {
        self.config = config;
        self.clear_results();
    }

    fn clear_results(&mut self) {
        self.regions = None;
        self.recolored = None;
    }

    /// Scans the whole image for regions matching `target`, replacing any previous result.
    #[instrument(skip(self, target), fields(target = %target))]
    pub fn find_regions(&mut self, target: Color) -> Result<&[Region]> {
        let image = self.image.as_ref().ok_or_else(|| {
            RegionError::InvalidState("no image set, cannot find regions".to_string())
        })?;

        let regions = scan_regions(image, target, &self.config);
        info!(
            width = image.width(),
            height = image.height(),
            regions = regions.len(),
            largest = regions.iter().map(Region::len).max().unwrap_or(0),
            "Region scan complete"
        );

        self.recolored = None;
        Ok(self.regions.insert(regions).as_slice())
    }

    /// Regions from the last scan, in seed discovery order.
    pub fn regions(&self) -> Result<&[Region]> {
        self.scanned_regions("regions").map(Vec::as_slice)
    }

    /// The region with the most points. The earliest discovered one wins ties, and an empty
    /// region is returned when the last scan found nothing.
    pub fn largest_region(&self) -> Result<&Region> {
        let regions = self.scanned_regions("largest_region")?;
        let mut largest: &Region = &EMPTY_REGION;
        for region in regions {
            if region.len() > largest.len() {
                largest = region;
            }
        }
        Ok(largest)
    }

    /// Copies the source image and paints each region with a color from the color source.
    pub fn recolor_image(&mut self) -> Result<&PixelBuffer> {
        let regions = self
            .regions
            .as_ref()
            .ok_or_else(|| not_scanned("recolor_image"))?;
        let image = self.image.as_ref().ok_or_else(|| {
            RegionError::InvalidState("no image set, cannot recolor".to_string())
        })?;

        let recolored = recolor_regions(image, regions, &mut self.colors)?;
        debug!(regions = regions.len(), "Recolored image ready");
        Ok(self.recolored.insert(recolored))
    }

    /// Image produced by the last [`RegionFinder::recolor_image`] call.
    pub fn recolored_image(&self) -> Result<&PixelBuffer> {
        self.recolored.as_ref().ok_or_else(|| {
            RegionError::InvalidState(
                "recolored_image called before recolor_image".to_string(),
            )
        })
    }

    pub fn take_recolored_image(&mut self) -> Result<PixelBuffer> {
        self.recolored.take().ok_or_else(|| {
            RegionError::InvalidState(
                "take_recolored_image called before recolor_image".to_string(),
            )
        })
    }

    fn scanned_regions(&self, operation: &str) -> Result<&Vec<Region>> {
        self.regions.as_ref().ok_or_else(|| not_scanned(operation))
    }
}

fn not_scanned(operation: &str) -> RegionError {
    RegionError::InvalidState(format!("{operation} called before find_regions"))
}
