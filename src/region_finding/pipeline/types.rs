//! Pipeline configuration and result types

use crate::region_finding::codec::OutputConfig;
use crate::region_finding::finder::{FinderConfig, Region};
use crate::region_finding::pixels::Point;

/// Configuration for the region pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Matching and filtering settings for the region scan
    pub finder: FinderConfig,
    /// Encoding settings for the recolored image
    pub output: OutputConfig,
    /// Whether to reject empty or oversized images before scanning
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            finder: FinderConfig::default(),
            output: OutputConfig::default(),
            validate_dimensions: true,
            max_dimension: Some(50000),
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    finder: Option<FinderConfig>,
    output: Option<OutputConfig>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl PipelineConfigBuilder {
    pub fn finder(mut self, finder: FinderConfig) -> Self {
        self.finder = Some(finder);
        self
    }

    pub fn output(mut self, output: OutputConfig) -> Self {
        self.output = Some(output);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            finder: self.finder.unwrap_or(default.finder),
            output: self.output.unwrap_or(default.output),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}

/// What a pipeline run found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSummary {
    pub width: usize,
    pub height: usize,
    /// Number of regions that passed the size filter
    pub region_count: usize,
    /// Total points across all reported regions
    pub matched_pixels: usize,
    pub largest_region_size: usize,
    /// Inclusive corners of the largest region, if any region was found
    pub largest_region_bounds: Option<(Point, Point)>,
}

impl RegionSummary {
    pub(crate) fn new(width: usize, height: usize, regions: &[Region], largest: &Region) -> Self {
        Self {
            width,
            height,
            region_count: regions.len(),
            matched_pixels: regions.iter().map(Region::len).sum(),
            largest_region_size: largest.len(),
            largest_region_bounds: largest.bounding_box(),
        }
    }
}
