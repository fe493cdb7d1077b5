//! Color region finding
//!
//! This module finds connected regions of similar color in decoded images, with separate
//! modules for the pixel grid, the flood-fill scan, recoloring, file codecs and the
//! end-to-end pipeline.

pub mod pixels;
pub mod finder;
pub mod recolor;
pub mod codec;
pub mod pipeline;
pub mod common;

pub use common::{
    RegionError,
    Result,
};

pub use pixels::{
    Color,
    PixelBuffer,
    PixelFormat,
    Point,
};

pub use finder::{
    colors_match,
    scan_regions,
    EdgePolicy,
    FinderConfig,
    FinderConfigBuilder,
    Region,
    RegionFinder,
    DEFAULT_COLOR_THRESHOLD,
    DEFAULT_MIN_REGION_SIZE,
};

pub use recolor::{
    recolor_regions,
    ColorSource,
    Palette,
    RandomColors,
};

pub use codec::{
    ImageReader,
    ImageWriter,
    OutputConfig,
    TiffCompression,
    TiffImageReader,
    TiffImageWriter,
};

pub use pipeline::{
    PipelineConfig,
    RegionPipeline,
    RegionSummary,
};
